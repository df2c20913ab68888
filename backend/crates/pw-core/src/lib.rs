pub mod directory;
pub mod error;
pub mod models;

pub use directory::user_directory::UserDirectory;
pub use error::{CoreError, Result};
pub use models::action_result::ActionResult;
pub use models::create_outcome::CreateOutcome;
pub use models::sign_in_params::SignInParams;
pub use models::sign_up_params::SignUpParams;
pub use models::user::User;
pub use models::user_profile::UserProfile;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
