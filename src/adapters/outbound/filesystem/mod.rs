/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;
pub mod record_decoder;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use record_decoder::InputFormat;
