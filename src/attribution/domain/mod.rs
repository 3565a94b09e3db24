/// Domain models for attribution generation
pub mod component;
pub mod license;
pub mod project;
pub mod template;

pub use component::ComponentRecord;
pub use license::{
    LicenseDictionary, LicenseOperator, ResolvedExpression, ResolvedLicense,
    DEFAULT_OTHERS_TEXT, OTHERS_DEFINITION_KEY,
};
pub use project::ProjectConfig;
pub use template::{TemplateSet, TEMPLATE_COMPONENT_LISTING, TEMPLATE_FOOTER, TEMPLATE_HEADER};
