use oss_attribution::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Mock ConfigReader for testing, built up with fluent helpers
pub struct MockConfigReader {
    licenses: HashMap<String, String>,
    templates: HashMap<String, String>,
    project: ProjectConfig,
}

impl MockConfigReader {
    pub fn new() -> Self {
        Self {
            licenses: HashMap::new(),
            templates: HashMap::new(),
            project: ProjectConfig::new("test-project", "Test Project Authors", "Test"),
        }
    }

    /// A reader with a small dictionary and the standard three templates
    pub fn with_defaults() -> Self {
        Self::new()
            .with_license("MIT", "MIT license text")
            .with_license("Apache-2.0", "Apache license text")
            .with_template("header", "Attributions for {project_name}")
            .with_template(
                "component_listing",
                "{serial_number}. {name} (v{version})\n     {copyright}{modification_notice}\n\n{license_text}",
            )
            .with_template("footer", "End of attributions.")
    }

    pub fn with_license(mut self, id: &str, text: &str) -> Self {
        self.licenses.insert(id.to_string(), text.to_string());
        self
    }

    pub fn with_template(mut self, name: &str, body: &str) -> Self {
        self.templates.insert(name.to_string(), body.to_string());
        self
    }

    pub fn without_template(mut self, name: &str) -> Self {
        self.templates.remove(name);
        self
    }

    pub fn with_project(mut self, project: ProjectConfig) -> Self {
        self.project = project;
        self
    }
}

impl Default for MockConfigReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigReader for MockConfigReader {
    fn read_license_dictionary(&self, _path: &Path) -> Result<LicenseDictionary> {
        Ok(LicenseDictionary::new(self.licenses.clone()))
    }

    fn read_template_set(&self, _path: &Path) -> Result<TemplateSet> {
        Ok(TemplateSet::new(self.templates.clone()))
    }

    fn read_project_config(&self, _path: &Path) -> Result<ProjectConfig> {
        Ok(self.project.clone())
    }
}
