/// Integration tests for the application layer
mod test_utilities;

use std::path::PathBuf;
use test_utilities::mocks::*;
use oss_attribution::prelude::*;

fn record(
    row: usize,
    name: &str,
    copyright: &str,
    license: &str,
    version: &str,
) -> ComponentRecord {
    ComponentRecord::new(
        row,
        name.to_string(),
        copyright.to_string(),
        license.to_string(),
        version.to_string(),
        None,
        false,
        None,
    )
    .unwrap()
}

fn request() -> AttributionRequest {
    AttributionRequest::new(
        PathBuf::from("components.csv"),
        PathBuf::from("licenses.yaml"),
        PathBuf::from("templates.yaml"),
        PathBuf::from("project_config.yaml"),
    )
}

#[test]
fn test_generate_attribution_happy_path() {
    let source = MockComponentSource::new(vec![
        record(1, "serde", "Copyright (c) serde authors", "MIT", "1.0.219"),
        record(2, "tokio", "Copyright (c) Tokio contributors", "Apache-2.0", "1.44.0"),
    ]);
    let config_reader = MockConfigReader::with_defaults();
    let progress_reporter = MockProgressReporter::new();

    let use_case =
        GenerateAttributionUseCase::new(source, config_reader, progress_reporter.clone());
    let response = use_case.execute(request()).unwrap();

    assert_eq!(response.component_count, 2);
    assert_eq!(response.fallback_count, 0);
    assert!(response.document.starts_with("Attributions for test-project"));
    assert!(response.document.contains("1. serde (v1.0.219)"));
    assert!(response.document.contains("2. tokio (v1.44.0)"));
    assert!(response.document.contains("MIT license text"));
    assert!(response.document.contains("Apache license text"));
    assert!(response.document.contains("End of attributions."));
    assert!(response.document.ends_with('\n'));
}

#[test]
fn test_generate_attribution_reports_progress() {
    let source = MockComponentSource::new(vec![record(
        1,
        "serde",
        "Copyright (c) serde authors",
        "MIT",
        "1.0.219",
    )]);
    let progress_reporter = MockProgressReporter::new();

    let use_case = GenerateAttributionUseCase::new(
        source,
        MockConfigReader::with_defaults(),
        progress_reporter.clone(),
    );
    use_case.execute(request()).unwrap();

    let messages = progress_reporter.get_messages();
    assert!(messages.iter().any(|m| m.contains("Loaded 1 component")));
    assert!(messages.iter().any(|m| m.starts_with("Completed: ")));
}

#[test]
fn test_generate_attribution_or_expression() {
    let source = MockComponentSource::new(vec![record(
        1,
        "dual-licensed",
        "Copyright (c) authors",
        "MIT OR Apache-2.0",
        "2.0.0",
    )]);

    let use_case = GenerateAttributionUseCase::new(
        source,
        MockConfigReader::with_defaults(),
        MockProgressReporter::new(),
    );
    let response = use_case.execute(request()).unwrap();

    assert!(response.document.contains("MIT license text"));
    assert!(response.document.contains("Apache license text"));
    assert!(response.document.contains("Or, at your option:"));
    assert_eq!(response.fallback_count, 0);
}

#[test]
fn test_generate_attribution_unknown_license_uses_fallback() {
    let source = MockComponentSource::new(vec![record(
        1,
        "obscure",
        "Copyright (c) someone",
        "Obscure-1.0",
        "0.1.0",
    )]);

    let use_case = GenerateAttributionUseCase::new(
        source,
        MockConfigReader::with_defaults(),
        MockProgressReporter::new(),
    );
    let response = use_case.execute(request()).unwrap();

    assert_eq!(response.fallback_count, 1);
    assert!(response.document.contains("Regarding 'Obscure-1.0' conditions:"));
}

#[test]
fn test_generate_attribution_custom_fallback_text() {
    let source = MockComponentSource::new(vec![record(
        1,
        "obscure",
        "Copyright (c) someone",
        "Obscure-1.0",
        "0.1.0",
    )]);
    let config_reader = MockConfigReader::with_defaults()
        .with_license(OTHERS_DEFINITION_KEY, "See the component homepage for terms.");

    let use_case =
        GenerateAttributionUseCase::new(source, config_reader, MockProgressReporter::new());
    let response = use_case.execute(request()).unwrap();

    assert!(response
        .document
        .contains("See the component homepage for terms."));
}

#[test]
fn test_generate_attribution_load_failure_aborts() {
    let use_case = GenerateAttributionUseCase::new(
        MockComponentSource::with_failure(),
        MockConfigReader::with_defaults(),
        MockProgressReporter::new(),
    );

    let result = use_case.execute(request());
    assert!(result.is_err());
}

#[test]
fn test_generate_attribution_malformed_expression_aborts() {
    let source = MockComponentSource::new(vec![record(
        1,
        "broken",
        "Copyright (c) someone",
        "MIT OR",
        "1.0.0",
    )]);

    let use_case = GenerateAttributionUseCase::new(
        source,
        MockConfigReader::with_defaults(),
        MockProgressReporter::new(),
    );

    let result = use_case.execute(request());
    assert!(result.is_err());
    let error = result.unwrap_err();
    assert!(matches!(
        error.downcast_ref::<AttributionError>(),
        Some(AttributionError::MalformedLicenseExpression { .. })
    ));
}

#[test]
fn test_generate_attribution_missing_header_template_aborts() {
    let source = MockComponentSource::new(vec![record(
        1,
        "serde",
        "Copyright (c) serde authors",
        "MIT",
        "1.0.219",
    )]);
    let config_reader = MockConfigReader::with_defaults().without_template("header");

    let use_case =
        GenerateAttributionUseCase::new(source, config_reader, MockProgressReporter::new());

    let result = use_case.execute(request());
    assert!(result.is_err());
    let error = result.unwrap_err();
    assert!(matches!(
        error.downcast_ref::<AttributionError>(),
        Some(AttributionError::UnknownTemplate { .. })
    ));
}

#[test]
fn test_generate_attribution_missing_footer_is_allowed() {
    let source = MockComponentSource::new(vec![record(
        1,
        "serde",
        "Copyright (c) serde authors",
        "MIT",
        "1.0.219",
    )]);
    let config_reader = MockConfigReader::with_defaults().without_template("footer");

    let use_case =
        GenerateAttributionUseCase::new(source, config_reader, MockProgressReporter::new());
    let response = use_case.execute(request()).unwrap();

    assert!(!response.document.contains("End of attributions."));
    assert!(response.document.ends_with('\n'));
}

#[test]
fn test_generate_attribution_modification_notice() {
    let rec = ComponentRecord::new(
        1,
        "patched-lib".to_string(),
        "Copyright (c) upstream".to_string(),
        "MIT".to_string(),
        "3.1.0".to_string(),
        None,
        true,
        Some("https://example.com/fork".to_string()),
    )
    .unwrap();
    let source = MockComponentSource::new(vec![rec]);
    let config_reader = MockConfigReader::with_defaults().with_project(ProjectConfig::new(
        "test-project",
        "Test Project Authors",
        "Test",
    ));

    let use_case =
        GenerateAttributionUseCase::new(source, config_reader, MockProgressReporter::new());
    let response = use_case.execute(request()).unwrap();

    assert!(response.document.contains(
        "This software was modified by Test, you may find the modified code at https://example.com/fork"
    ));
}

#[test]
fn test_generate_attribution_is_deterministic() {
    let build = || {
        let source = MockComponentSource::new(vec![
            record(1, "serde", "Copyright (c) serde authors", "MIT", "1.0.219"),
            record(2, "tokio", "Copyright (c) Tokio contributors", "Apache-2.0", "1.44.0"),
            record(3, "obscure", "Copyright (c) someone", "Obscure-1.0", "0.1.0"),
        ]);
        let use_case = GenerateAttributionUseCase::new(
            source,
            MockConfigReader::with_defaults(),
            MockProgressReporter::new(),
        );
        use_case.execute(request()).unwrap().document
    };

    assert_eq!(build(), build());
}

#[test]
fn test_generate_attribution_empty_component_list() {
    let source = MockComponentSource::new(vec![]);
    let use_case = GenerateAttributionUseCase::new(
        source,
        MockConfigReader::with_defaults(),
        MockProgressReporter::new(),
    );
    let response = use_case.execute(request()).unwrap();

    assert_eq!(response.component_count, 0);
    assert!(response.document.starts_with("Attributions for test-project"));
    assert!(response.document.contains("End of attributions."));
}
