use crate::messages::{ACCOUNT_CREATED, sign_up_message};
use crate::provider_call::with_timeout;
use crate::{
    AccountConfirmation, AuthContext, AuthError, AuthErrorKind, Result as AuthErrorResult,
};

use pw_core::{ActionResult, CreateOutcome, SignUpParams};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{info, warn};

/// Creates the directory profile for an identity that already exists at the
/// identity provider. Runs once per user, before the first sign-in.
pub struct AccountRegistrar {
    context: AuthContext,
}

impl AccountRegistrar {
    pub fn new(context: AuthContext) -> Self {
        Self { context }
    }

    /// Register and report the outcome as a form result, along with the
    /// failure kind when it failed. Never fails.
    pub async fn sign_up(&self, params: &SignUpParams) -> (ActionResult, Option<AuthErrorKind>) {
        match self.register(params).await {
            Ok(()) => (ActionResult::ok(ACCOUNT_CREATED), None),
            Err(e) => {
                warn!("Sign-up failed for uid '{}': {}", params.uid, e);
                (ActionResult::failed(sign_up_message(&e)), Some(e.kind()))
            }
        }
    }

    pub async fn register(&self, params: &SignUpParams) -> AuthErrorResult<()> {
        params.validate()?;

        if self.context.account_confirmation == AccountConfirmation::Upstream {
            self.confirm_upstream_owner(params).await?;
        }

        let outcome = self
            .context
            .directory
            .create_if_absent(&params.uid, &params.profile())
            .await?;

        match outcome {
            CreateOutcome::Created => {
                info!("Created account for uid '{}'", params.uid);
                Ok(())
            }
            CreateOutcome::AlreadyExists => Err(AuthError::DuplicateAccount {
                uid: params.uid.clone(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    async fn confirm_upstream_owner(&self, params: &SignUpParams) -> AuthErrorResult<()> {
        let owner = with_timeout(
            "get_user_by_email",
            self.context.call_timeout,
            self.context.provider.get_user_by_email(&params.email),
        )
        .await?;

        if owner.uid != params.uid {
            return Err(AuthError::EmailAlreadyInUse {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
