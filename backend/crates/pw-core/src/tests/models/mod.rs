mod email;
mod sign_in_params;
mod sign_up_params;
mod user;
