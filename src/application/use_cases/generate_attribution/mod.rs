
use std::collections::BTreeMap;

use crate::application::dto::{AttributionRequest, AttributionResponse};
use crate::attribution::domain::ComponentRecord;
use crate::attribution::services::{
    AttributionRenderer, ExpressionResolver, ModificationAnnotator, RenderEntry,
};
use crate::ports::outbound::{ComponentSource, ConfigReader, ProgressReporter};
use crate::shared::Result;

/// GenerateAttributionUseCase - Core use case for attribution generation
///
/// Orchestrates the pipeline in a single pass: load records → load
/// configuration → resolve license expressions and derive modification
/// notices per record → render. Any stage failure aborts the run
/// before anything is presented, so no partial output can exist.
///
/// # Type Parameters
/// * `CS` - ComponentSource implementation
/// * `CR` - ConfigReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateAttributionUseCase<CS, CR, PR> {
    component_source: CS,
    config_reader: CR,
    progress_reporter: PR,
}

impl<CS, CR, PR> GenerateAttributionUseCase<CS, CR, PR>
where
    CS: ComponentSource,
    CR: ConfigReader,
    PR: ProgressReporter,
{
    /// Creates a new GenerateAttributionUseCase with injected dependencies
    pub fn new(component_source: CS, config_reader: CR, progress_reporter: PR) -> Self {
        Self {
            component_source,
            config_reader,
            progress_reporter,
        }
    }

    /// Executes the attribution generation use case
    ///
    /// # Arguments
    /// * `request` - Paths to the component list and configuration files
    ///
    /// # Returns
    /// AttributionResponse with the rendered document and summary counts
    pub fn execute(&self, request: AttributionRequest) -> Result<AttributionResponse> {
        let records = self.load_and_report_components(&request)?;

        let dictionary = self
            .config_reader
            .read_license_dictionary(&request.licenses_path)?;
        let templates = self
            .config_reader
            .read_template_set(&request.templates_path)?;
        let project = self
            .config_reader
            .read_project_config(&request.project_config_path)?;

        self.progress_reporter.report(&format!(
            "📚 License dictionary: {} license text(s)",
            dictionary.len()
        ));

        // Serial numbers are 1-based over the records that survived
        // loading, in input order.
        let mut entries = Vec::with_capacity(records.len());
        for (i, record) in records.into_iter().enumerate() {
            let resolved = ExpressionResolver::resolve(&record.license, &dictionary)?;
            let modification_notice = ModificationAnnotator::notice(&record, &project);
            entries.push(RenderEntry {
                record,
                resolved,
                modification_notice,
                serial_number: i + 1,
            });
        }

        let fallback_count = entries.iter().filter(|e| e.resolved.used_fallback()).count();
        if fallback_count > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  {} component(s) use the OTHERS_DEFINITION fallback notice",
                fallback_count
            ));
        }

        let document = AttributionRenderer::render(&project, &entries, &templates)?;

        self.progress_reporter.report_completion(&format!(
            "🎉 Rendered {} component block(s)",
            entries.len()
        ));

        Ok(AttributionResponse::new(
            document,
            entries.len(),
            fallback_count,
        ))
    }

    /// Loads the component list and narrates what was found.
    fn load_and_report_components(
        &self,
        request: &AttributionRequest,
    ) -> Result<Vec<ComponentRecord>> {
        self.progress_reporter.report(&format!(
            "📖 Reading components from: {}",
            request.input_path.display()
        ));

        let records = self.component_source.load_components(&request.input_path)?;

        if records.is_empty() {
            self.progress_reporter.report("ℹ️  No components loaded.");
        } else {
            self.progress_reporter
                .report(&format!("✅ Loaded {} component(s)", records.len()));

            self.progress_reporter
                .report("📊 Components by license expression:");
            for (expression, count) in Self::group_by_license(&records) {
                self.progress_reporter
                    .report(&format!("  • \"{}\": {} component(s)", expression, count));
            }
        }

        Ok(records)
    }

    /// Groups record counts by license expression for the console
    /// summary, ordered case-insensitively by expression.
    fn group_by_license(records: &[ComponentRecord]) -> Vec<(String, usize)> {
        let mut grouped: BTreeMap<String, (String, usize)> = BTreeMap::new();
        for record in records {
            let entry = grouped
                .entry(record.license.to_lowercase())
                .or_insert_with(|| (record.license.clone(), 0));
            entry.1 += 1;
        }
        grouped.into_values().collect()
    }
}
