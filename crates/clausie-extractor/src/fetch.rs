//! Jar bootstrap
//!
//! Fetches the versioned `clausie-<version>.zip` archive from the MPI
//! mirror and extracts it into the install directory. The fetch is
//! synchronous and runs at most once: an already-present jar
//! short-circuits it. No retry, no timeout.

use std::fs::File;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use clausie_core::{BackendConfig, ClausieError, Result};

/// Download and extract the archive unless the jar already exists.
///
/// A non-success HTTP status is a `ClausieError::Download` carrying the
/// status; transport failures surface the same way with the underlying
/// error text.
pub fn download_if_missing(
    config: &BackendConfig,
    install_dir: &Path,
    jar_path: &Path,
) -> Result<()> {
    if jar_path.exists() {
        debug!(jar = %jar_path.display(), "jar already present, skipping fetch");
        return Ok(());
    }

    let url = config.jar_url();
    let archive_path = install_dir.join(format!("clausie-{}.zip", config.version()));
    info!(%url, dest = %archive_path.display(), "downloading ClausIE archive");

    let response = reqwest::blocking::get(&url).map_err(|e| ClausieError::Download {
        url: url.clone(),
        message: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ClausieError::Download {
            url,
            message: format!("HTTP status {status}"),
        });
    }

    let bytes = response.bytes().map_err(|e| ClausieError::Download {
        url: url.clone(),
        message: e.to_string(),
    })?;
    std::fs::write(&archive_path, &bytes)?;

    extract_archive(&archive_path, install_dir)?;
    info!(jar = %jar_path.display(), "ClausIE archive extracted");

    Ok(())
}

/// Unpack the downloaded zip into the install directory
fn extract_archive(archive_path: &Path, install_dir: &Path) -> Result<()> {
    let file = File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(io::Error::other)?;
    archive.extract(install_dir).map_err(io::Error::other)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_present_jar_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let jar_path = dir.path().join("clausie.jar");
        std::fs::write(&jar_path, b"not really a jar").unwrap();

        // No network request is made, so this cannot fail
        let config = BackendConfig::default();
        download_if_missing(&config, dir.path(), &jar_path).unwrap();
    }

    #[test]
    fn test_extract_archive_unpacks_jar() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("clausie-0-0-1.zip");

        let file = File::create(&archive_path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        writer
            .start_file("clausie/clausie.jar", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"jar bytes").unwrap();
        writer.finish().unwrap();

        extract_archive(&archive_path, dir.path()).unwrap();

        let extracted = dir.path().join("clausie/clausie.jar");
        assert_eq!(std::fs::read(extracted).unwrap(), b"jar bytes");
    }
}
