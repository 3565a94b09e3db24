use crate::shared::Result;

/// OutputPresenter port for presenting the rendered document
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the attribution document is presented.
pub trait OutputPresenter {
    /// Presents the rendered attribution document
    ///
    /// # Arguments
    /// * `content` - The complete attribution document
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails.
    /// Implementations must not leave a partially written file behind.
    fn present(&self, content: &str) -> Result<()>;
}
