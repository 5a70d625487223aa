//! Boundaries of the signup controller.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
