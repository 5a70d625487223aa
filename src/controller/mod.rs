//! Request handlers implementing [`crate::ports::Controller`].

pub mod signup;

pub use signup::SignupController;
