/// Application use cases
mod generate_attribution;

pub use generate_attribution::GenerateAttributionUseCase;
