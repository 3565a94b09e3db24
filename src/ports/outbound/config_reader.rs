use crate::attribution::domain::{LicenseDictionary, ProjectConfig, TemplateSet};
use crate::shared::Result;
use std::path::Path;

/// ConfigReader port for loading run configuration
///
/// This port abstracts the file system operations needed to read the
/// license dictionary, the template set, and the project configuration.
/// All three are loaded once at the start of a run and treated as
/// read-only afterwards.
pub trait ConfigReader {
    /// Reads the license-text dictionary
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a mapping
    /// of license identifiers to text
    fn read_license_dictionary(&self, path: &Path) -> Result<LicenseDictionary>;

    /// Reads the template set
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a mapping
    /// of template names to format strings
    fn read_template_set(&self, path: &Path) -> Result<TemplateSet>;

    /// Reads the project-wide configuration
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or required fields
    /// are missing
    fn read_project_config(&self, path: &Path) -> Result<ProjectConfig>;
}
