//! Domain entities representing core business objects.

pub mod verification_entry;


// Re-export commonly used types
pub use verification_entry::{VerificationEntry, DEFAULT_CODE_LENGTH, DEFAULT_TTL_SECONDS};
