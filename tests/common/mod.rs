//! Common test utilities for folio integration tests.
//!
//! Provides `TestEnv` for isolated test environments that don't pollute
//! the user's `~/.local/share/folio/` directory.

#![allow(dead_code)]

use assert_cmd::Command;
pub use tempfile::TempDir;

/// A test environment with isolated data storage.
///
/// Each `TestEnv` creates a temporary data directory and wires it into
/// every spawned command via `FOLIO_DATA_DIR`, making tests
/// parallel-safe. The sendmail program is pointed at a path that cannot
/// exist so contact submissions always exercise the logged-and-swallowed
/// notification failure path instead of sending real mail.
pub struct TestEnv {
    pub data_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with an isolated data directory.
    pub fn new() -> Self {
        Self {
            data_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a new test environment and initialize the database.
    pub fn init() -> Self {
        let env = Self::new();
        env.folio().arg("init").assert().success();
        env
    }

    /// Get a Command for the folio binary with isolated data directory.
    pub fn folio(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_folio"));
        cmd.env("FOLIO_DATA_DIR", self.data_dir.path());
        cmd.env("FOLIO_SENDMAIL", "/nonexistent/sendmail");
        cmd
    }

    /// Get the path to the data directory.
    pub fn data_path(&self) -> &std::path::Path {
        self.data_dir.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
