use std::path::PathBuf;

/// AttributionRequest - Internal request DTO for the generation use case
///
/// Carries the paths of everything a run needs: the component list and
/// the three configuration files.
#[derive(Debug, Clone)]
pub struct AttributionRequest {
    /// Path to the component list (.csv, .json, .yaml, .yml)
    pub input_path: PathBuf,
    /// Path to the license-text dictionary (YAML)
    pub licenses_path: PathBuf,
    /// Path to the template definitions (YAML)
    pub templates_path: PathBuf,
    /// Path to the project configuration (YAML)
    pub project_config_path: PathBuf,
}

impl AttributionRequest {
    pub fn new(
        input_path: PathBuf,
        licenses_path: PathBuf,
        templates_path: PathBuf,
        project_config_path: PathBuf,
    ) -> Self {
        Self {
            input_path,
            licenses_path,
            templates_path,
            project_config_path,
        }
    }
}
