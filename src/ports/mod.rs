/// Ports layer - Interface definitions
///
/// Following hexagonal architecture, ports define the boundaries
/// between the application core and the infrastructure.
pub mod outbound;
