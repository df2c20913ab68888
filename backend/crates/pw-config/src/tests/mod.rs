
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - restores the original on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and point PW_CONFIG_DIR at it
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("PW_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Minimal auth settings that pass validation
pub(crate) fn valid_auth() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("PW_AUTH_PROJECT_ID", "demo-project"),
        EnvGuard::set("PW_AUTH_JWT_SECRET", "12345678901234567890123456789012"),
    ]
}
