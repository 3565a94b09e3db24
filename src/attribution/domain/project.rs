use serde::Deserialize;

/// Project-wide constants rendered into the attribution header, footer,
/// and modification notices.
///
/// Always passed explicitly into the use case and renderer, never held
/// as ambient state, so one process can generate attributions for
/// several configurations in tests.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectConfig {
    /// Name of the project the attribution file belongs to
    pub project_name: String,
    /// Full legal name of the copyright holder
    pub copyright_holder_full: String,
    /// Short name used inside notices
    pub copyright_holder_short: String,
}

impl ProjectConfig {
    pub fn new(
        project_name: impl Into<String>,
        copyright_holder_full: impl Into<String>,
        copyright_holder_short: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            copyright_holder_full: copyright_holder_full.into(),
            copyright_holder_short: copyright_holder_short.into(),
        }
    }
}
