use crate::attribution::domain::ComponentRecord;
use crate::shared::Result;
use std::path::Path;

/// ComponentSource port for loading component records
///
/// This port abstracts the input side of the pipeline: reading a
/// component list (tabular or structured) into an ordered sequence of
/// validated records, preserving input row order.
pub trait ComponentSource {
    /// Loads all component records from the given input file
    ///
    /// # Arguments
    /// * `path` - Path to the component list file
    ///
    /// # Returns
    /// Records in input row order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file extension is not a supported format
    /// - Any row is missing a required field or has an invalid value
    fn load_components(&self, path: &Path) -> Result<Vec<ComponentRecord>>;
}
