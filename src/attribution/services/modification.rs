use crate::attribution::domain::{ComponentRecord, ProjectConfig};

/// ModificationAnnotator derives the human-readable "modified" notice
/// for a component.
///
/// The notice is substituted into the `{modification_notice}`
/// placeholder of the component listing template, so an unmodified
/// component contributes an empty string rather than a blank line.
pub struct ModificationAnnotator;

impl ModificationAnnotator {
    /// Returns the modification notice for `record`, or an empty
    /// string when the component is unmodified.
    pub fn notice(record: &ComponentRecord, project: &ProjectConfig) -> String {
        if !record.modified {
            return String::new();
        }

        let base = format!(
            "\n     This software was modified by {}",
            project.copyright_holder_short
        );
        match record.modified_url.as_deref() {
            Some(url) => format!("{}, you may find the modified code at {}", base, url),
            None => format!("{}.", base),
        }
    }
}
