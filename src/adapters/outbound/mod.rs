/// Outbound adapters - Concrete implementations of outbound ports
pub mod console;
pub mod filesystem;
