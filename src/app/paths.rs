// SPDX-License-Identifier: MPL-2.0
//! Path management for the application config directory.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - CLI `--config-dir` or a test directory
//! 2. **Environment variable** (`ART_SPACE_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "ArtSpace";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ART_SPACE_CONFIG_DIR";

/// Returns the application config directory path, preferring
/// `override_path` and then `ART_SPACE_CONFIG_DIR`.
///
/// Platform defaults:
/// - Linux: `~/.config/ArtSpace/`
/// - macOS: `~/Library/Application Support/ArtSpace/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\ArtSpace\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that touch the process environment
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn explicit_override_wins() {
        let custom = PathBuf::from("/tmp/art-space-override");
        assert_eq!(
            get_app_config_dir_with_override(Some(custom.clone())),
            Some(custom)
        );
    }

    #[test]
    fn env_var_is_used_when_set() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/art-space-env");
        let dir = get_app_config_dir_with_override(None);
        std::env::remove_var(ENV_CONFIG_DIR);
        assert_eq!(dir, Some(PathBuf::from("/tmp/art-space-env")));
    }

    #[test]
    fn default_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);
        if let Some(path) = get_app_config_dir_with_override(None) {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
