/// Domain services for attribution generation
pub mod expression_resolver;
pub mod modification;
pub mod renderer;

pub use expression_resolver::ExpressionResolver;
pub use modification::ModificationAnnotator;
pub use renderer::{AttributionRenderer, RenderEntry};
