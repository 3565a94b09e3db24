use std::collections::HashMap;
use std::fmt;

/// Reserved dictionary key holding the fallback text for unrecognized
/// or "others" licenses.
pub const OTHERS_DEFINITION_KEY: &str = "OTHERS_DEFINITION";

/// Fallback text used when the dictionary does not define
/// `OTHERS_DEFINITION` itself.
pub const DEFAULT_OTHERS_TEXT: &str = "[This component is subject to additional terms or conditions, \
often specified by the copyright holder or in accompanying notices. These 'other' terms should be \
detailed here, in a referenced document, or by defining 'OTHERS_DEFINITION' in your license \
configuration. Specific URLs may be listed with components below.]";

/// LicenseDictionary maps license identifiers to their full license text.
///
/// Keys are case-sensitive exact identifiers matching the tokens that
/// appear inside license expressions. Loaded once from configuration
/// and read-only for the remainder of the run.
#[derive(Debug, Clone, Default)]
pub struct LicenseDictionary {
    texts: HashMap<String, String>,
}

impl LicenseDictionary {
    pub fn new(texts: HashMap<String, String>) -> Self {
        Self { texts }
    }

    /// Looks up the license text for an identifier, verbatim and
    /// case-sensitive. The reserved `OTHERS_DEFINITION` key is not a
    /// license identifier and never matches here.
    pub fn lookup(&self, identifier: &str) -> Option<&str> {
        if identifier == OTHERS_DEFINITION_KEY {
            return None;
        }
        self.texts.get(identifier).map(String::as_str)
    }

    /// The fallback text substituted for unrecognized identifiers.
    pub fn others_definition(&self) -> &str {
        self.texts
            .get(OTHERS_DEFINITION_KEY)
            .map(String::as_str)
            .unwrap_or(DEFAULT_OTHERS_TEXT)
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Binary operator joining two license identifiers in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseOperator {
    And,
    Or,
}

impl fmt::Display for LicenseOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LicenseOperator::And => write!(f, "AND"),
            LicenseOperator::Or => write!(f, "OR"),
        }
    }
}

/// One resolved license text block.
///
/// `joined_by` is the operator between this block and its predecessor
/// in the expression (None for the first block), which the renderer
/// turns into a conjunctive or disjunctive separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLicense {
    pub identifier: String,
    pub text: String,
    /// True when the identifier missed the dictionary and the
    /// `OTHERS_DEFINITION` text was substituted.
    pub fallback: bool,
    pub joined_by: Option<LicenseOperator>,
}

/// Ordered resolution result for one component's license expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedExpression {
    pub expression: String,
    pub licenses: Vec<ResolvedLicense>,
}

impl ResolvedExpression {
    /// True when any identifier in the expression fell back to the
    /// `OTHERS_DEFINITION` notice.
    pub fn used_fallback(&self) -> bool {
        self.licenses.iter().any(|l| l.fallback)
    }
}
