use crate::shared::error::AttributionError;

/// ComponentRecord value object representing one third-party component.
///
/// Constructed once per input row by the component loader, immutable
/// thereafter. Row order is preserved end to end because it determines
/// the serial numbering in the rendered attribution file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRecord {
    /// Component name (required, non-empty)
    pub name: String,
    /// Copyright notice (required, non-empty)
    pub copyright: String,
    /// License expression, e.g. "MIT" or "Apache-2.0 OR GPL-3.0" (required, non-empty)
    pub license: String,
    /// Component version, empty when the input did not supply one
    pub version: String,
    /// URL for additional notices
    pub others_url: Option<String>,
    /// Whether the component was locally modified
    pub modified: bool,
    /// URL to the modified code, meaningful only when `modified` is true
    pub modified_url: Option<String>,
}

impl ComponentRecord {
    /// Builds a validated record from already-cleaned field values.
    ///
    /// `row` is the 1-based data row number, used only for error
    /// reporting. Blank `name`, `copyright`, or `license` rejects the
    /// row with `MissingRequiredField`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        row: usize,
        name: String,
        copyright: String,
        license: String,
        version: String,
        others_url: Option<String>,
        modified: bool,
        modified_url: Option<String>,
    ) -> Result<Self, AttributionError> {
        for (field, value) in [
            ("name", &name),
            ("copyright", &copyright),
            ("license", &license),
        ] {
            if value.trim().is_empty() {
                return Err(AttributionError::MissingRequiredField { row, field });
            }
        }

        Ok(Self {
            name,
            copyright,
            license,
            version,
            others_url,
            modified,
            modified_url,
        })
    }

    /// Version string for display, "N/A" when the input had none.
    pub fn display_version(&self) -> &str {
        if self.version.is_empty() {
            "N/A"
        } else {
            &self.version
        }
    }
}
