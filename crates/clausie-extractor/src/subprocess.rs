//! Subprocess backend
//!
//! Drives the ClausIE jar as a one-shot child process per batch:
//! sentences are written to a uniquely-named transient file, the jar is
//! invoked against it with `-f` (plus `-l` for identifier mode and `-p`
//! for confidence scores), and its stdout is decoded into a `Corpus`.
//! The input file is removed on every exit path, including failures.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::NamedTempFile;
use tracing::debug;

use clausie_core::config::JAR_IN_ARCHIVE;
use clausie_core::{BackendConfig, ClausieError, Corpus, Result};

use crate::fetch;
use crate::TripleExtractor;

/// ClausIE backend that spawns `java -jar clausie.jar` per call
///
/// State is read-only after construction, so one backend can serve
/// concurrent calls; each call owns its transient input file.
#[derive(Debug)]
pub struct SubprocessBackend {
    jar_path: PathBuf,
    java_command: String,
}

impl SubprocessBackend {
    /// Resolve the jar path from `config`, fetching the archive if
    /// `auto_fetch` is set and the jar is missing.
    ///
    /// An explicit `jar_path` is used as-is. Without one, `auto_fetch`
    /// must be enabled or construction fails with
    /// `ClausieError::Configuration`.
    pub fn new(config: BackendConfig) -> Result<Self> {
        let jar_path = match &config.jar_path {
            Some(path) => path.clone(),
            None => {
                if !config.auto_fetch {
                    return Err(ClausieError::Configuration);
                }
                let install_dir = config
                    .resolved_install_dir()
                    .ok_or(ClausieError::Configuration)?;
                // Pre-existing directory is fine
                std::fs::create_dir_all(&install_dir)?;
                let jar_path = install_dir.join(JAR_IN_ARCHIVE);
                fetch::download_if_missing(&config, &install_dir, &jar_path)?;
                jar_path
            }
        };

        Ok(Self {
            jar_path,
            java_command: config.java_command,
        })
    }

    /// Build the argument list for one invocation
    fn build_args(&self, input_path: &Path, with_ids: bool, confidence: bool) -> Vec<String> {
        let mut args = vec![
            "-jar".to_string(),
            self.jar_path.display().to_string(),
            "-f".to_string(),
            input_path.display().to_string(),
        ];

        if with_ids {
            args.push("-l".to_string());
        }
        if confidence {
            args.push("-p".to_string());
        }

        args
    }

    /// Write the batch to the transient input file, one sentence per
    /// line, each field in the quoting scheme the jar's reader expects.
    fn write_input(
        file: &mut NamedTempFile,
        sentences: &[String],
        ids: Option<&[String]>,
    ) -> Result<()> {
        match ids {
            Some(ids) => {
                for (id, sentence) in ids.iter().zip(sentences) {
                    writeln!(file, "{}\t{}", repr(id), repr(sentence))?;
                }
            }
            None => {
                for sentence in sentences {
                    writeln!(file, "{}", repr(sentence))?;
                }
            }
        }
        file.flush()?;
        Ok(())
    }
}

impl TripleExtractor for SubprocessBackend {
    fn extract_triples(
        &self,
        sentences: &[String],
        ids: Option<&[String]>,
        report_confidence: bool,
    ) -> Result<Corpus> {
        if sentences.is_empty() {
            return Err(ClausieError::InvalidInput(
                "at least one sentence is required".to_string(),
            ));
        }
        if let Some(ids) = ids {
            if ids.len() != sentences.len() {
                return Err(ClausieError::InvalidInput(format!(
                    "got {} ids for {} sentences",
                    ids.len(),
                    sentences.len()
                )));
            }
        }

        // Dropped on every exit path, which removes the file
        let mut input_file = NamedTempFile::new()?;
        Self::write_input(&mut input_file, sentences, ids)?;

        let args = self.build_args(input_file.path(), ids.is_some(), report_confidence);
        debug!(
            java = %self.java_command,
            input = %input_file.path().display(),
            sentences = sentences.len(),
            "invoking ClausIE"
        );

        let output = Command::new(&self.java_command).args(&args).output()?;

        if !output.status.success() {
            return Err(ClausieError::ExternalTool {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Corpus::from_tsv(stdout.lines(), report_confidence)
    }

    fn jar_path(&self) -> &Path {
        &self.jar_path
    }

    fn name(&self) -> &str {
        "subprocess"
    }
}

/// Quote one field for the jar's input reader.
///
/// The scheme is fixed by the tool build this binding targets and must
/// stay byte-stable: single-quote wrapping, with backslash, single
/// quote, newline, carriage return and tab escaped; everything else
/// passes through as UTF-8.
fn repr(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 2);
    out.push('\'');
    for ch in field.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(jar: &str) -> SubprocessBackend {
        SubprocessBackend::new(
            BackendConfig::default()
                .with_jar_path(jar)
                .with_auto_fetch(false),
        )
        .unwrap()
    }

    #[test]
    fn test_repr_plain_text() {
        assert_eq!(repr("The cat sat."), "'The cat sat.'");
        assert_eq!(repr(""), "''");
    }

    #[test]
    fn test_repr_escapes() {
        assert_eq!(repr("it's"), r"'it\'s'");
        assert_eq!(repr("a\\b"), r"'a\\b'");
        assert_eq!(repr("line1\nline2"), r"'line1\nline2'");
        assert_eq!(repr("col1\tcol2"), r"'col1\tcol2'");
        assert_eq!(repr("cr\rend"), r"'cr\rend'");
    }

    #[test]
    fn test_repr_passes_non_ascii_through() {
        assert_eq!(repr("café"), "'café'");
    }

    #[test]
    fn test_build_args_flags() {
        let backend = backend("/opt/clausie/clausie.jar");
        let input = Path::new("/tmp/input.txt");

        let plain = backend.build_args(input, false, false);
        assert_eq!(
            plain,
            ["-jar", "/opt/clausie/clausie.jar", "-f", "/tmp/input.txt"]
        );

        let with_ids = backend.build_args(input, true, false);
        assert!(with_ids.contains(&"-l".to_string()));
        assert!(!with_ids.contains(&"-p".to_string()));

        let with_confidence = backend.build_args(input, false, true);
        assert!(with_confidence.contains(&"-p".to_string()));
        assert!(!with_confidence.contains(&"-l".to_string()));
    }

    #[test]
    fn test_empty_batch_rejected() {
        let backend = backend("/opt/clausie/clausie.jar");
        let err = backend.extract_triples(&[], None, false).unwrap_err();
        assert!(matches!(err, ClausieError::InvalidInput(_)));
    }

    #[test]
    fn test_id_length_mismatch_rejected() {
        let backend = backend("/opt/clausie/clausie.jar");
        let sentences = vec!["a".to_string(), "b".to_string()];
        let ids = vec!["s1".to_string()];

        let err = backend
            .extract_triples(&sentences, Some(&ids), false)
            .unwrap_err();
        assert!(matches!(err, ClausieError::InvalidInput(_)));
    }

    #[test]
    fn test_write_input_with_ids() {
        let mut file = NamedTempFile::new().unwrap();
        let sentences = vec!["The cat sat.".to_string(), "Dogs bark.".to_string()];
        let ids = vec!["s1".to_string(), "s2".to_string()];

        SubprocessBackend::write_input(&mut file, &sentences, Some(&ids)).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(written, "'s1'\t'The cat sat.'\n's2'\t'Dogs bark.'\n");
    }

    #[test]
    fn test_write_input_without_ids() {
        let mut file = NamedTempFile::new().unwrap();
        let sentences = vec!["The cat sat.".to_string()];

        SubprocessBackend::write_input(&mut file, &sentences, None).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(written, "'The cat sat.'\n");
    }
}
