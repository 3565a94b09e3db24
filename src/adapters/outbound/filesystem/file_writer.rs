use crate::ports::outbound::OutputPresenter;
use crate::shared::error::AttributionError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// FileSystemWriter adapter for writing the attribution document
///
/// This adapter implements the OutputPresenter port for file output.
/// The document is written to a temporary file in the destination
/// directory and atomically renamed into place, so a failure mid-write
/// can never leave a truncated attribution file and an existing file
/// is only replaced by a complete one.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: String) -> AttributionError {
        AttributionError::OutputWriteError {
            path: self.output_path.clone(),
            details,
        }
    }

    /// Destination directory for the temp file; must be the same
    /// directory as the output so the final rename stays atomic.
    fn output_directory(&self) -> PathBuf {
        match self.output_path.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> std::result::Result<(), AttributionError> {
        let directory = self.output_directory();
        if !directory.exists() {
            return Err(self.write_error(format!(
                "Parent directory does not exist: {}",
                directory.display()
            )));
        }
        Ok(())
    }

    /// Security validation before writing: reject an output path that
    /// already exists as a symlink.
    fn validate_output_security(&self) -> std::result::Result<(), AttributionError> {
        if self.output_path.exists() {
            let metadata = fs::symlink_metadata(&self.output_path)
                .map_err(|e| self.write_error(format!("Failed to read file metadata: {}", e)))?;

            if metadata.is_symlink() {
                return Err(self.write_error(
                    "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed."
                        .to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        self.validate_output_security()?;

        let mut temp_file = NamedTempFile::new_in(self.output_directory())
            .map_err(|e| self.write_error(format!("Failed to create temporary file: {}", e)))?;

        temp_file
            .write_all(content.as_bytes())
            .and_then(|_| temp_file.flush())
            .map_err(|e| self.write_error(format!("{}", e)))?;

        temp_file
            .persist(&self.output_path)
            .map_err(|e| self.write_error(format!("Failed to move output into place: {}", e)))?;

        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing the document to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
