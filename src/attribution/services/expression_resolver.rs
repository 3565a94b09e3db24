use crate::attribution::domain::{
    LicenseDictionary, LicenseOperator, ResolvedExpression, ResolvedLicense,
};
use crate::shared::error::AttributionError;

/// ExpressionResolver turns a license expression into an ordered list
/// of license text blocks.
///
/// The grammar is deliberately flat: identifiers joined by the binary
/// operators `AND` / `OR`, evaluated strictly left to right with no
/// precedence and no parentheses. Mixing `AND` and `OR` is allowed;
/// each operator only selects the separator emitted before the
/// identifier it precedes.
///
/// Operator matching is case-sensitive on the literal tokens `AND` and
/// `OR`; any other token, whatever its case, is part of an identifier.
/// Whitespace around tokens is insignificant, and a run of identifier
/// words between two operators is treated as a single identifier with
/// its internal whitespace collapsed to single spaces.
pub struct ExpressionResolver;

enum Token {
    Identifier(String),
    Operator(LicenseOperator),
}

impl ExpressionResolver {
    /// Resolves `expression` against `dictionary`.
    ///
    /// Identifiers are looked up verbatim. A miss is not an error: the
    /// block carries the dictionary's `OTHERS_DEFINITION` text and is
    /// marked as a fallback so the renderer can flag the component.
    ///
    /// # Errors
    /// `MalformedLicenseExpression` for empty expressions and dangling
    /// leading or trailing operators.
    pub fn resolve(
        expression: &str,
        dictionary: &LicenseDictionary,
    ) -> Result<ResolvedExpression, AttributionError> {
        let tokens = Self::tokenize(expression)?;

        let mut licenses = Vec::new();
        let mut pending_operator: Option<LicenseOperator> = None;

        for token in tokens {
            match token {
                Token::Identifier(identifier) => {
                    let (text, fallback) = match dictionary.lookup(&identifier) {
                        Some(text) => (text.to_string(), false),
                        None => (dictionary.others_definition().to_string(), true),
                    };
                    licenses.push(ResolvedLicense {
                        identifier,
                        text,
                        fallback,
                        joined_by: pending_operator.take(),
                    });
                }
                Token::Operator(op) => pending_operator = Some(op),
            }
        }

        Ok(ResolvedExpression {
            expression: expression.trim().to_string(),
            licenses,
        })
    }

    /// Splits the expression into alternating identifier and operator
    /// tokens, rejecting malformed shapes.
    fn tokenize(expression: &str) -> Result<Vec<Token>, AttributionError> {
        let malformed = |details: &str| AttributionError::MalformedLicenseExpression {
            expression: expression.trim().to_string(),
            details: details.to_string(),
        };

        if expression.trim().is_empty() {
            return Err(malformed("expression is empty"));
        }

        let mut tokens: Vec<Token> = Vec::new();
        let mut current_identifier: Vec<&str> = Vec::new();

        for word in expression.split_whitespace() {
            let operator = match word {
                "AND" => Some(LicenseOperator::And),
                "OR" => Some(LicenseOperator::Or),
                _ => None,
            };

            match operator {
                Some(op) => {
                    if current_identifier.is_empty() {
                        return Err(malformed(&format!(
                            "operator '{}' is not preceded by a license identifier",
                            op
                        )));
                    }
                    tokens.push(Token::Identifier(current_identifier.join(" ")));
                    current_identifier.clear();
                    tokens.push(Token::Operator(op));
                }
                None => current_identifier.push(word),
            }
        }

        if current_identifier.is_empty() {
            // The expression is non-blank, so the last token was an operator.
            return Err(malformed("dangling operator at end of expression"));
        }
        tokens.push(Token::Identifier(current_identifier.join(" ")));

        Ok(tokens)
    }
}
