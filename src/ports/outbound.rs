//! These traits define what the application needs from the outside world.

use async_trait::async_trait;

use crate::dto::{Account, AddAccountModel};
use crate::error::Result;

/// Port for email address format checks.
pub trait EmailValidator: Send + Sync {
    /// Whether `email` is an acceptable address.
    fn is_valid(&self, email: &str) -> Result<bool>;
}

/// Port for account creation.
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Create a new account and return it with its assigned ID.
    async fn add(&self, account: AddAccountModel) -> Result<Account>;
}
