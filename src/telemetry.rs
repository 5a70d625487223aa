//! Logging setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Errors that may occur while installing the subscriber.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid log directive: {0}")]
    Filter(#[from] ParseError),
    #[error(transparent)]
    Init(#[from] TryInitError),
}

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `default_directive`.
pub fn setup_logging(default_directive: &str) -> Result<(), Error> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_once() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }

        assert!(matches!(
            setup_logging("signup=loud"),
            Err(Error::Filter(_))
        ));
        assert!(setup_logging("signup=debug").is_ok());
        assert!(matches!(setup_logging("info"), Err(Error::Init(_))));
    }
}
