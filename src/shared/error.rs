use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Each failure class gets its own code so wrapper scripts and CI
/// systems can tell an input problem from a configuration problem
/// without parsing stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - attribution file generated
    Success = 0,
    /// Unclassified application error
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Component list could not be loaded (missing file, bad format, bad row)
    LoadError = 3,
    /// A license expression could not be resolved
    ResolutionError = 4,
    /// Template configuration error detected before rendering
    RenderError = 5,
    /// The output file could not be written
    OutputError = 6,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an error to the exit code of its failure class.
    ///
    /// Errors that are not an [`AttributionError`] fall back to
    /// `ApplicationError`.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<AttributionError>() {
            Some(
                AttributionError::MissingRequiredField { .. }
                | AttributionError::InvalidFieldType { .. }
                | AttributionError::UnsupportedFormat { .. }
                | AttributionError::FileReadError { .. }
                | AttributionError::InputParseError { .. }
                | AttributionError::ConfigParseError { .. },
            ) => ExitCode::LoadError,
            Some(AttributionError::MalformedLicenseExpression { .. }) => ExitCode::ResolutionError,
            Some(
                AttributionError::UnknownTemplate { .. }
                | AttributionError::UnknownTemplatePlaceholder { .. },
            ) => ExitCode::RenderError,
            Some(AttributionError::OutputWriteError { .. }) => ExitCode::OutputError,
            None => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::LoadError => write!(f, "Load Error (3)"),
            ExitCode::ResolutionError => write!(f, "Resolution Error (4)"),
            ExitCode::RenderError => write!(f, "Render Error (5)"),
            ExitCode::OutputError => write!(f, "Output Error (6)"),
        }
    }
}

/// Application-specific errors for attribution generation.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Every message names the offending row, field, or template so the
/// invoker can fix the input without reading the source.
#[derive(Debug, Error)]
pub enum AttributionError {
    #[error("Row {row}: required field '{field}' is missing or blank\n\n💡 Hint: Every component needs a non-empty name, copyright, and license")]
    MissingRequiredField { row: usize, field: &'static str },

    #[error("Row {row}: field '{field}' has unrecognized value '{value}'\n\n💡 Hint: Boolean fields accept true/false, yes/no, t/f, y/n, or 1/0")]
    InvalidFieldType {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("Unsupported input format '{extension}' for file: {path}\n\n💡 Hint: Supported extensions are .xlsx, .xls, .csv, .json, .yaml, and .yml")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Malformed license expression '{expression}': {details}\n\n💡 Hint: Expressions are identifiers joined by AND / OR, e.g. \"MIT OR Apache-2.0\"")]
    MalformedLicenseExpression { expression: String, details: String },

    #[error("Template '{name}' is not defined in the template configuration\n\n💡 Hint: The template file must define at least 'header' and 'component_listing'")]
    UnknownTemplate { name: String },

    #[error("Template '{template}' references unknown placeholder '{{{placeholder}}}'\n\n💡 Hint: Check the template configuration for typos in placeholder names")]
    UnknownTemplatePlaceholder { template: String, placeholder: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to parse input file: {path}\nDetails: {details}\n\n💡 Hint: The file must contain component rows with name, copyright, and license fields")]
    InputParseError { path: PathBuf, details: String },

    #[error("Failed to parse configuration file: {path}\nDetails: {details}\n\n💡 Hint: The file must be a YAML mapping of names to strings")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    OutputWriteError { path: PathBuf, details: String },
}
