//! oss-attribution - Attribution file generator
//!
//! This library renders a formatted attribution document from a list
//! of third-party components, a license-text dictionary, a template
//! set, and project-wide configuration. It follows hexagonal
//! architecture, so the pipeline can run against the file system or
//! against in-memory test doubles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`attribution`): Component records, license
//!   expression resolution, templates, rendering
//! - **Application Layer** (`application`): The generation use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): File system and console implementations
//! - **Shared** (`shared`): Common error types and Result alias
//!
//! # Example
//!
//! ```no_run
//! use oss_attribution::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateAttributionUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = AttributionRequest::new(
//!     PathBuf::from("components.csv"),
//!     PathBuf::from("licenses.yaml"),
//!     PathBuf::from("templates.yaml"),
//!     PathBuf::from("project_config.yaml"),
//! );
//! let response = use_case.execute(request)?;
//!
//! FileSystemWriter::new(PathBuf::from("ATTRIBUTIONS.txt")).present(&response.document)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod attribution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, InputFormat, StdoutPresenter,
    };
    pub use crate::application::dto::{AttributionRequest, AttributionResponse};
    pub use crate::application::use_cases::GenerateAttributionUseCase;
    pub use crate::attribution::domain::{
        ComponentRecord, LicenseDictionary, LicenseOperator, ProjectConfig, ResolvedExpression,
        ResolvedLicense, TemplateSet, OTHERS_DEFINITION_KEY,
    };
    pub use crate::attribution::services::{
        AttributionRenderer, ExpressionResolver, ModificationAnnotator, RenderEntry,
    };
    pub use crate::ports::outbound::{
        ComponentSource, ConfigReader, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::{AttributionError, ExitCode};
    pub use crate::shared::Result;
}
