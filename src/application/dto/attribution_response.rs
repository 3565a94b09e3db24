/// AttributionResponse - Result DTO for the generation use case
///
/// The rendered document plus summary counts for console reporting.
/// Presentation (stdout or file) is the caller's concern.
#[derive(Debug, Clone)]
pub struct AttributionResponse {
    /// The complete rendered attribution document
    pub document: String,
    /// Number of components rendered
    pub component_count: usize,
    /// Number of components whose license expression needed the
    /// OTHERS_DEFINITION fallback
    pub fallback_count: usize,
}

impl AttributionResponse {
    pub fn new(document: String, component_count: usize, fallback_count: usize) -> Self {
        Self {
            document,
            component_count,
            fallback_count,
        }
    }
}
