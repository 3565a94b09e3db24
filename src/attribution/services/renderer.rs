use std::collections::HashMap;

use crate::attribution::domain::template::{
    substitute, TEMPLATE_COMPONENT_LISTING, TEMPLATE_FOOTER, TEMPLATE_HEADER,
};
use crate::attribution::domain::{
    ComponentRecord, LicenseOperator, ProjectConfig, ResolvedExpression, TemplateSet,
};
use crate::shared::error::AttributionError;

/// Placeholders available in the header and footer templates.
const PROJECT_PLACEHOLDERS: &[&str] = &[
    "project_name",
    "copyright_holder_full",
    "copyright_holder_short",
];

/// Placeholders available in the component listing template, on top of
/// the project-wide ones.
const COMPONENT_PLACEHOLDERS: &[&str] = &[
    "project_name",
    "copyright_holder_full",
    "copyright_holder_short",
    "serial_number",
    "name",
    "version",
    "copyright",
    "modification_notice",
    "license_text",
];

/// Separator emitted between two license texts required together.
const AND_SEPARATOR: &str = "\n\n--------------------\nAnd also:\n--------------------\n\n";

/// Separator emitted between two alternative license texts.
const OR_SEPARATOR: &str = "\n\n--------------------\nOr, at your option:\n--------------------\n\n";

/// One fully prepared component, ready for rendering.
#[derive(Debug, Clone)]
pub struct RenderEntry {
    pub record: ComponentRecord,
    pub resolved: ResolvedExpression,
    pub modification_notice: String,
    /// 1-based, assigned in input order
    pub serial_number: usize,
}

/// AttributionRenderer assembles the final attribution document.
///
/// Rendering order: header (once) → one component listing block per
/// entry in serial order → footer (once, when the template set defines
/// one). All templates are validated against the supplied placeholder
/// names before any output is produced, so a configuration typo fails
/// the run instead of surfacing mid-document.
pub struct AttributionRenderer;

impl AttributionRenderer {
    /// Renders the complete document as a single string.
    ///
    /// # Errors
    /// `UnknownTemplate` when `header` or `component_listing` is
    /// missing, `UnknownTemplatePlaceholder` when any template
    /// references a placeholder the renderer does not supply.
    pub fn render(
        project: &ProjectConfig,
        entries: &[RenderEntry],
        templates: &TemplateSet,
    ) -> Result<String, AttributionError> {
        Self::validate_templates(templates)?;

        let project_values = Self::project_values(project);
        let mut parts = Vec::with_capacity(entries.len() + 2);

        parts.push(substitute(
            templates.get(TEMPLATE_HEADER)?,
            &project_values,
        ));

        let listing = templates.get(TEMPLATE_COMPONENT_LISTING)?;
        for entry in entries {
            parts.push(Self::render_component(listing, project, entry));
        }

        if templates.contains(TEMPLATE_FOOTER) {
            parts.push(substitute(
                templates.get(TEMPLATE_FOOTER)?,
                &project_values,
            ));
        }

        let mut document = parts.join("\n\n");
        document.push('\n');
        Ok(document)
    }

    /// Fail-fast placeholder validation for every template the
    /// renderer will touch.
    fn validate_templates(templates: &TemplateSet) -> Result<(), AttributionError> {
        templates.validate(TEMPLATE_HEADER, PROJECT_PLACEHOLDERS)?;
        templates.validate(TEMPLATE_COMPONENT_LISTING, COMPONENT_PLACEHOLDERS)?;
        if templates.contains(TEMPLATE_FOOTER) {
            templates.validate(TEMPLATE_FOOTER, PROJECT_PLACEHOLDERS)?;
        }
        Ok(())
    }

    fn project_values(project: &ProjectConfig) -> HashMap<&'static str, String> {
        let mut values = HashMap::new();
        values.insert("project_name", project.project_name.clone());
        values.insert(
            "copyright_holder_full",
            project.copyright_holder_full.clone(),
        );
        values.insert(
            "copyright_holder_short",
            project.copyright_holder_short.clone(),
        );
        values
    }

    fn render_component(listing: &str, project: &ProjectConfig, entry: &RenderEntry) -> String {
        let mut values = Self::project_values(project);
        values.insert("serial_number", entry.serial_number.to_string());
        values.insert("name", entry.record.name.clone());
        values.insert("version", entry.record.display_version().to_string());
        values.insert("copyright", entry.record.copyright.clone());
        values.insert(
            "modification_notice",
            entry.modification_notice.clone(),
        );
        values.insert("license_text", Self::render_license_text(&entry.resolved));

        let mut block = substitute(listing, &values);

        // Trailing notice line, independent of fallback status.
        if let Some(url) = entry.record.others_url.as_deref() {
            block.push_str(&format!(
                "\n     Additional notices for this component: {}",
                url
            ));
        }
        block
    }

    /// Joins the resolved license blocks with conjunctive or
    /// disjunctive separators, each block introduced by a dashed
    /// heading naming the identifier.
    fn render_license_text(resolved: &ResolvedExpression) -> String {
        let mut output = String::new();
        for license in &resolved.licenses {
            // joined_by is None only on the first block, which takes
            // no separator.
            if let Some(operator) = license.joined_by {
                output.push_str(match operator {
                    LicenseOperator::And => AND_SEPARATOR,
                    LicenseOperator::Or => OR_SEPARATOR,
                });
            }
            let heading = if license.fallback {
                format!("Regarding '{}' conditions:", license.identifier)
            } else {
                format!("For license: {}", license.identifier)
            };
            output.push_str(&heading);
            output.push('\n');
            output.push_str(&"-".repeat(heading.chars().count()));
            output.push('\n');
            output.push_str(&license.text);
        }
        output
    }
}
