use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::StorageError;
use crate::sanitize;

/// Basename (without extension) for a finalized artifact:
/// `<sanitized-identity>-<YYYY-MM-DD>-<HH-MM-SS>`. Colons never appear; time
/// components are dash-separated for path safety.
pub fn artifact_basename(identity: &str, at: DateTime<Local>) -> String {
    format!(
        "{}-{}",
        sanitize::sanitize_identity(identity),
        at.format("%Y-%m-%d-%H-%M-%S")
    )
}

/// Owns the output directory: stages temporary artifacts and finalizes or
/// discards them.
pub struct ArtifactStore {
    output_directory: PathBuf,
}

impl ArtifactStore {
    pub fn new<P: AsRef<Path>>(output_directory: P) -> Self {
        Self {
            output_directory: output_directory.as_ref().to_path_buf(),
        }
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Writes rendered bytes to a job-unique temporary path inside the
    /// output directory. Dot-prefixed so observers of the directory never
    /// pick up half-finished documents; keyed by job id so concurrent jobs
    /// cannot collide.
    pub fn write_temp(
        &self,
        job_id: &str,
        extension: &str,
        content: &[u8],
    ) -> Result<PathBuf, StorageError> {
        self.ensure_directory(&self.output_directory)?;

        let path = self
            .output_directory
            .join(format!(".spool-{job_id}.{extension}"));

        use std::io::Write;
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| StorageError::WriteFile {
                path: path.clone(),
                source: e,
            })?;
        if let Err(e) = file.write_all(content) {
            // A half-written temp is not allowed to outlive the job.
            let _ = std::fs::remove_file(&path);
            return Err(StorageError::WriteFile { path, source: e });
        }

        Ok(path)
    }

    /// Renames a temporary artifact to its final name. Same-second identity
    /// collisions get a numbered suffix instead of overwriting.
    pub fn finalize(
        &self,
        temp: &Path,
        identity: &str,
        at: DateTime<Local>,
    ) -> Result<PathBuf, StorageError> {
        let extension = temp
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("out");
        let filename = format!("{}.{}", artifact_basename(identity, at), extension);

        let final_path = self.resolve_conflict(&self.output_directory, &filename)?;

        std::fs::rename(temp, &final_path).map_err(|e| StorageError::MoveFile {
            from: temp.to_path_buf(),
            to: final_path.clone(),
            source: e,
        })?;

        Ok(final_path)
    }

    /// Removes a temporary artifact that is no longer needed.
    pub fn discard(&self, temp: &Path) -> Result<(), StorageError> {
        std::fs::remove_file(temp).map_err(|e| StorageError::RemoveFile {
            path: temp.to_path_buf(),
            source: e,
        })
    }

    fn ensure_directory(&self, path: &Path) -> Result<(), StorageError> {
        if !path.exists() {
            std::fs::create_dir_all(path).map_err(|e| StorageError::CreateDirectory {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// Resolves filename conflicts by finding an available name. Returns a
    /// candidate path; a racing writer between the check and the rename is
    /// accepted.
    fn resolve_conflict(&self, directory: &Path, filename: &str) -> Result<PathBuf, StorageError> {
        let path = directory.join(filename);

        if std::fs::symlink_metadata(&path).is_err() {
            return Ok(path);
        }

        let (base, ext) = if let Some(dot_pos) = filename.rfind('.') {
            (&filename[..dot_pos], Some(&filename[dot_pos..]))
        } else {
            (filename, None)
        };

        for counter in 2..=1000 {
            let new_filename = match ext {
                Some(ext) => format!("{}_{}{}", base, counter, ext),
                None => format!("{}_{}", base, counter),
            };

            let new_path = directory.join(&new_filename);
            if std::fs::symlink_metadata(&new_path).is_err() {
                return Ok(new_path);
            }
        }

        Err(StorageError::FileExists(path))
    }
}
