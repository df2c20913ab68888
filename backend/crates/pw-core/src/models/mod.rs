pub mod action_result;
pub mod create_outcome;
pub mod email;
pub mod sign_in_params;
pub mod sign_up_params;
pub mod user;
pub mod user_profile;
