use crate::adapters::outbound::filesystem::record_decoder::{
    decode_spreadsheet, decode_structured, decode_tabular, InputFormat,
};
use crate::attribution::domain::{ComponentRecord, LicenseDictionary, ProjectConfig, TemplateSet};
use crate::ports::outbound::{ComponentSource, ConfigReader};
use crate::shared::error::AttributionError;
use crate::shared::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading input and configuration files
///
/// This adapter implements both the ComponentSource and ConfigReader
/// ports, providing file system access for the component list, the
/// license dictionary, the template set, and the project configuration.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Security checks applied before any file is opened:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn validate_regular_file(&self, path: &Path) -> std::result::Result<(), AttributionError> {
        let read_error = |details: String| AttributionError::FileReadError {
            path: path.to_path_buf(),
            details,
        };

        let metadata =
            fs::symlink_metadata(path).map_err(|e| read_error(format!("{}", e)))?;

        if metadata.is_symlink() {
            return Err(read_error(
                "Security: path is a symbolic link. For security reasons, symbolic links are not allowed."
                    .to_string(),
            ));
        }

        if !metadata.is_file() {
            return Err(read_error("not a regular file".to_string()));
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            return Err(read_error(format!(
                "Security: file is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, MAX_FILE_SIZE
            )));
        }

        Ok(())
    }

    /// Safely read a text file after the security checks pass.
    fn safe_read_file(&self, path: &Path) -> std::result::Result<String, AttributionError> {
        self.validate_regular_file(path)?;
        fs::read_to_string(path).map_err(|e| AttributionError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{}", e),
        })
    }

    /// Reads a YAML file into a name → string mapping, for the license
    /// dictionary and the template set.
    fn read_string_map(
        &self,
        path: &Path,
    ) -> std::result::Result<HashMap<String, String>, AttributionError> {
        let content = self.safe_read_file(path)?;
        serde_yaml_ng::from_str(&content).map_err(|e| AttributionError::ConfigParseError {
            path: path.to_path_buf(),
            details: format!("{}", e),
        })
    }
}

impl ComponentSource for FileSystemReader {
    fn load_components(&self, path: &Path) -> Result<Vec<ComponentRecord>> {
        if !path.exists() {
            return Err(AttributionError::FileReadError {
                path: path.to_path_buf(),
                details: "input file does not exist".to_string(),
            }
            .into());
        }

        // Dispatch on the extension before touching the content so an
        // unsupported format is reported as such, not as a parse error.
        let format = InputFormat::from_path(path)?;

        // Workbooks are binary, so their decoder opens the path itself.
        let records = match format {
            InputFormat::Spreadsheet => {
                self.validate_regular_file(path)?;
                decode_spreadsheet(path)?
            }
            InputFormat::Tabular => decode_tabular(&self.safe_read_file(path)?, path)?,
            InputFormat::Json | InputFormat::Yaml => {
                decode_structured(format, &self.safe_read_file(path)?, path)?
            }
        };
        Ok(records)
    }
}

impl ConfigReader for FileSystemReader {
    fn read_license_dictionary(&self, path: &Path) -> Result<LicenseDictionary> {
        Ok(LicenseDictionary::new(self.read_string_map(path)?))
    }

    fn read_template_set(&self, path: &Path) -> Result<TemplateSet> {
        Ok(TemplateSet::new(self.read_string_map(path)?))
    }

    fn read_project_config(&self, path: &Path) -> Result<ProjectConfig> {
        let content = self.safe_read_file(path)?;
        let config: ProjectConfig =
            serde_yaml_ng::from_str(&content).map_err(|e| AttributionError::ConfigParseError {
                path: path.to_path_buf(),
                details: format!("{}", e),
            })?;
        Ok(config)
    }
}
