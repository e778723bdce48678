use std::path::{Path, PathBuf};

use tracing::{info, warn};

use zonewatch_domain::{DomainError, ZoneSpec};

/// Reads and rewrites the baseline file: one
/// `apex:fingerprint[:labelsCSV[:nameserver]]` entry per line. Malformed
/// entries are skipped with a warning; an unreadable file is the caller's
/// problem.
pub struct BaselineFileStore {
    path: PathBuf,
}

impl BaselineFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<Vec<ZoneSpec>, DomainError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            DomainError::IoError(format!(
                "cannot read baseline file {}: {e}",
                self.path.display()
            ))
        })?;

        let mut specs = Vec::new();
        for (number, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match ZoneSpec::from_baseline_line(line) {
                Ok(spec) => specs.push(spec),
                Err(err) => {
                    warn!(line = number + 1, %err, "skipping baseline entry");
                }
            }
        }

        info!(
            zones = specs.len(),
            file = %self.path.display(),
            "baseline loaded"
        );
        Ok(specs)
    }

    /// Replace the file with the given pre-rendered entries.
    pub fn save(&self, lines: &[String]) -> Result<(), DomainError> {
        let mut contents = lines.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        std::fs::write(&self.path, contents).map_err(|e| {
            DomainError::IoError(format!(
                "cannot write baseline file {}: {e}",
                self.path.display()
            ))
        })?;

        info!(
            zones = lines.len(),
            file = %self.path.display(),
            "baseline updated"
        );
        Ok(())
    }
}
