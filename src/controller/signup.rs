//! Account signup controller.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;

use crate::dto::{Account, AddAccountModel, Field, SignupRequest};
use crate::error::{ParamError, SignupError};
use crate::http::{Request, Response, bad_request, created, server_error};
use crate::ports::{AddAccount, Controller, EmailValidator};

/// Validates a signup request, then delegates account creation.
pub struct SignupController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignupController {
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        add_account: Arc<dyn AddAccount>,
    ) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    async fn signup(
        &self,
        body: &SignupRequest,
    ) -> Result<Account, SignupError> {
        let account = self.validate(body)?;

        Ok(self.add_account.add(account).await?)
    }

    /// Checks run in a fixed order; the first failure wins.
    fn validate(
        &self,
        body: &SignupRequest,
    ) -> Result<AddAccountModel, SignupError> {
        let name = required(body, Field::Name)?;
        let email = required(body, Field::Email)?;
        let password = required(body, Field::Password)?;
        let password_confirmation =
            required(body, Field::PasswordConfirmation)?;

        if !self.email_validator.is_valid(email)? {
            return Err(ParamError::InvalidParam(Field::Email).into());
        }

        if password != password_confirmation {
            return Err(
                ParamError::InvalidParam(Field::PasswordConfirmation).into()
            );
        }

        Ok(AddAccountModel {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }
}

/// Absent and empty values are both missing.
fn required(body: &SignupRequest, field: Field) -> Result<&str, ParamError> {
    body.get(field)
        .filter(|value| !value.is_empty())
        .ok_or(ParamError::MissingParam(field))
}

#[async_trait]
impl Controller for SignupController {
    async fn handle(&self, request: Request) -> Response {
        let outcome = AssertUnwindSafe(self.signup(&request.body))
            .catch_unwind()
            .await;

        let response = match outcome {
            Ok(Ok(account)) => {
                tracing::info!(account_id = %account.id, "account created");
                created(account)
            },
            Ok(Err(SignupError::Param(err))) => {
                tracing::debug!(field = %err.field(), "signup rejected");
                bad_request(&err)
            },
            Ok(Err(SignupError::Server(err))) => {
                tracing::error!(error = ?err, "server returned 500 status");
                server_error()
            },
            Err(_) => {
                tracing::error!("collaborator panicked, returning 500 status");
                server_error()
            },
        };

        let labels = [("status", response.status_code.as_u16().to_string())];
        metrics::counter!("signup_requests_total", &labels).increment(1);

        response
    }
}
