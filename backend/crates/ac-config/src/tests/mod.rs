
use std::env;

use tempfile::TempDir;

pub(crate) const VALID_SECRET: &str = "0123456789abcdef0123456789abcdef";

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

/// Create a temp config directory and set AC_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("AC_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Temp config dir plus the settings validate() requires; restored on drop
pub(crate) struct ValidEnv {
    _guards: [EnvGuard; 3],
    _temp: TempDir,
}

pub(crate) fn setup_valid_env() -> ValidEnv {
    let (temp, dir_guard) = setup_config_dir();
    let secret_guard = EnvGuard::set("AC_AUTH_JWT_SECRET", VALID_SECRET);
    let transport_guard = EnvGuard::set("AC_MAIL_TRANSPORT", "memory");
    ValidEnv {
        _guards: [dir_guard, secret_guard, transport_guard],
        _temp: temp,
    }
}
