//! Simple test infrastructure for basic testing

use std::sync::Once;
use IncubatorHub::{AuthContext, Role};

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Auth context already logged in as an admin
pub fn admin_auth() -> AuthContext {
    let auth = AuthContext::new();
    auth.login(TEST_ADMIN_EMAIL, Role::Admin).expect("admin login");
    auth
}

pub const TEST_ADMIN_EMAIL: &str = "admin@lce.org";

/// Temporary directory holding config files written by a test
pub struct TempConfigDir {
    pub dir: tempfile::TempDir,
}

impl TempConfigDir {
    pub fn new() -> Self {
        init_test_env();
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Write a TOML config file and return its path
    pub fn write_toml(&self, contents: &str) -> std::path::PathBuf {
        let path = self.dir.path().join("config.toml");
        std::fs::write(&path, contents).expect("Failed to write config file");
        path
    }
}
