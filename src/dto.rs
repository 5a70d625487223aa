//! Data Transfer Objects exchanged between the HTTP layer, the controller and
//! its collaborators.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a signup request field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Password,
    PasswordConfirmation,
}

impl Field {
    /// Returns the normalized lowercase identifier of the field.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::PasswordConfirmation => "password_confirmation",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Incoming signup payload.
///
/// Every field is optional so that presence can be checked in order by the
/// controller instead of being rejected by the deserializer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(alias = "password_confirmation")]
    pub password_confirmation: Option<String>,
}

impl SignupRequest {
    /// Get the raw value of a field, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Password => self.password.as_deref(),
            Field::PasswordConfirmation => {
                self.password_confirmation.as_deref()
            },
        }
    }
}

/// Data handed to the account creation capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Account returned by the account creation capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Assigned by the collaborator.
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}
