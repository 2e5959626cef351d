//! Value objects representing immutable domain concepts.

pub mod purpose;
pub mod verification_outcome;

// Re-export commonly used types
pub use purpose::Purpose;
pub use verification_outcome::VerificationOutcome;
