use std::collections::HashMap;

use crate::shared::error::AttributionError;

/// Template names the renderer requires to be present.
pub const TEMPLATE_HEADER: &str = "header";
pub const TEMPLATE_COMPONENT_LISTING: &str = "component_listing";
/// Optional: when absent the document simply ends after the last component.
pub const TEMPLATE_FOOTER: &str = "footer";

/// TemplateSet maps template names to format strings with named
/// `{placeholder}` tokens.
///
/// Placeholder resolution is exact-match. A template referencing a
/// placeholder the renderer does not supply is a configuration error
/// and is detected with [`TemplateSet::validate`] before any output is
/// produced.
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    templates: HashMap<String, String>,
}

impl TemplateSet {
    pub fn new(templates: HashMap<String, String>) -> Self {
        Self { templates }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Returns the template body, or `UnknownTemplate` when it is not
    /// defined.
    pub fn get(&self, name: &str) -> Result<&str, AttributionError> {
        self.templates
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| AttributionError::UnknownTemplate {
                name: name.to_string(),
            })
    }

    /// Checks that every placeholder in the named template is one of
    /// `allowed`. Fails fast so a typo cannot surface mid-render.
    pub fn validate(&self, name: &str, allowed: &[&str]) -> Result<(), AttributionError> {
        let body = self.get(name)?;
        for placeholder in scan_placeholders(body) {
            if !allowed.contains(&placeholder.as_str()) {
                return Err(AttributionError::UnknownTemplatePlaceholder {
                    template: name.to_string(),
                    placeholder,
                });
            }
        }
        Ok(())
    }
}

/// Extracts the placeholder names referenced by a template body.
///
/// A placeholder is `{` followed by an identifier (ASCII alphanumerics
/// and underscores) and a closing `}`. Anything else, including
/// unmatched braces, is literal text.
pub fn scan_placeholders(template: &str) -> Vec<String> {
    let mut placeholders = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match read_placeholder(after) {
            Some((name, consumed)) => {
                placeholders.push(name.to_string());
                rest = &after[consumed..];
            }
            None => rest = after,
        }
    }
    placeholders
}

/// Substitutes placeholder values into a template body.
///
/// Only placeholders present in `values` are replaced; templates must
/// be validated up front, so an unreplaced token here would indicate a
/// renderer bug, not user input.
pub fn substitute(template: &str, values: &HashMap<&str, String>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        if let Some((name, consumed)) = read_placeholder(after) {
            if let Some(value) = values.get(name) {
                output.push_str(value);
                rest = &after[consumed..];
                continue;
            }
        }
        output.push('{');
        rest = after;
    }
    output.push_str(rest);
    output
}

/// Reads an identifier at the start of `input` up to a closing `}`.
/// Returns the name and the number of bytes consumed including the
/// closing brace.
fn read_placeholder(input: &str) -> Option<(&str, usize)> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'}' => {
                if i == 0 {
                    return None;
                }
                return Some((&input[..i], i + 1));
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' => i += 1,
            _ => return None,
        }
    }
    None
}
