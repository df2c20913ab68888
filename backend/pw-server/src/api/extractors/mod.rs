pub mod client_addr;
pub mod current_user;
pub mod require_user;
