
use crate::CONFIG_DIR_ENV;

use std::env;

use tempfile::TempDir;

pub(crate) const TEST_SESSION_SECRET: &str = "0123456789abcdef0123456789abcdef";

/// RAII guard for environment variables - automatically restores on drop
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

    #[allow(dead_code)]
    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
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

/// Create a temp config directory and set SHOP_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set(CONFIG_DIR_ENV, temp.path().to_str().unwrap());
    (temp, guard)
}

/// Set the settings that have no usable default (OAuth client + session secret)
pub(crate) fn set_required_env() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("SHOP_OAUTH_CLIENT_ID", "test-client-id"),
        EnvGuard::set("SHOP_OAUTH_CLIENT_SECRET", "test-client-secret"),
        EnvGuard::set("SHOP_SESSION_SECRET", TEST_SESSION_SECRET),
    ]
}
