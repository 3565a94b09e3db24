/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod component_source;
pub mod config_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use component_source::ComponentSource;
pub use config_reader::ConfigReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
