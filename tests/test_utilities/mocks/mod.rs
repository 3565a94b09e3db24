/// Mock implementations for testing
mod mock_component_source;
mod mock_config_reader;
mod mock_progress_reporter;

pub use mock_component_source::MockComponentSource;
pub use mock_config_reader::MockConfigReader;
pub use mock_progress_reporter::MockProgressReporter;
