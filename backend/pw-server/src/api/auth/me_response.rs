use pw_core::User;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: Option<User>,
}
