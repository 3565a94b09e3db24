/// Adapters layer - Concrete implementations of ports
pub mod outbound;
