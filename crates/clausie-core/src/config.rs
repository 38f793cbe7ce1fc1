//! Backend configuration
//!
//! A `BackendConfig` is an explicit value passed to the backend
//! constructor, never hidden global state. Path resolution and the
//! actual jar fetch live in the extractor crate; this module only
//! holds the knobs and the constants they default to.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// ClausIE release fetched when no version is configured
pub const DEFAULT_CLAUSIE_VERSION: &str = "0-0-1";

/// Base URL the versioned `clausie-<version>.zip` archives live under
pub const JAR_BASE_URL: &str = "http://resources.mpi-inf.mpg.de/d5/clausie/";

/// Jar location inside the extracted archive
pub const JAR_IN_ARCHIVE: &str = "clausie/clausie.jar";

/// Install directory under the user's home, used when none is configured
const DEFAULT_INSTALL_SUBDIR: &str = ".local/share/clausie";

/// Configuration for a ClausIE backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Explicit path to clausie.jar; skips install-dir resolution entirely
    pub jar_path: Option<PathBuf>,
    /// Fetch the jar into the install directory when it is missing
    pub auto_fetch: bool,
    /// ClausIE release to fetch; `DEFAULT_CLAUSIE_VERSION` when unset
    pub version: Option<String>,
    /// Java binary used to run the jar
    pub java_command: String,
    /// Directory the jar archive is fetched and extracted into
    pub install_dir: Option<PathBuf>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            jar_path: None,
            auto_fetch: true,
            version: None,
            java_command: "java".to_string(),
            install_dir: None,
        }
    }
}

impl BackendConfig {
    /// Default config overlaid with `CLAUSIE_*` environment variables
    ///
    /// Recognized: `CLAUSIE_JAR`, `CLAUSIE_INSTALL_DIR`, `CLAUSIE_JAVA`,
    /// `CLAUSIE_VERSION`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(jar) = std::env::var_os("CLAUSIE_JAR") {
            config.jar_path = Some(PathBuf::from(jar));
        }
        if let Some(dir) = std::env::var_os("CLAUSIE_INSTALL_DIR") {
            config.install_dir = Some(PathBuf::from(dir));
        }
        if let Ok(java) = std::env::var("CLAUSIE_JAVA") {
            config.java_command = java;
        }
        if let Ok(version) = std::env::var("CLAUSIE_VERSION") {
            config.version = Some(version);
        }

        config
    }

    /// Set an explicit jar path
    pub fn with_jar_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.jar_path = Some(path.into());
        self
    }

    /// Enable or disable fetching a missing jar
    pub fn with_auto_fetch(mut self, auto_fetch: bool) -> Self {
        self.auto_fetch = auto_fetch;
        self
    }

    /// Set the ClausIE release to fetch
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the java binary
    pub fn with_java_command(mut self, java: impl Into<String>) -> Self {
        self.java_command = java.into();
        self
    }

    /// Set the install directory
    pub fn with_install_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.install_dir = Some(dir.into());
        self
    }

    /// The ClausIE release this config targets
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_CLAUSIE_VERSION)
    }

    /// URL of the versioned archive for this config
    pub fn jar_url(&self) -> String {
        format!("{}clausie-{}.zip", JAR_BASE_URL, self.version())
    }

    /// Install directory: configured, or `~/.local/share/clausie/`
    pub fn resolved_install_dir(&self) -> Option<PathBuf> {
        self.install_dir
            .clone()
            .or_else(|| home_dir().map(|h| h.join(DEFAULT_INSTALL_SUBDIR)))
    }
}

/// Cross-platform home directory resolution
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

// ============================================================================
// Tests
// ============================================================================
