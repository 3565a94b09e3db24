/// Attribution generation domain layer
///
/// Pure business logic: component records, license dictionaries and
/// expression resolution, templates, and document rendering. Nothing
/// in this layer touches the file system.
pub mod domain;
pub mod services;
