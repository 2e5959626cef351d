//! Secure numeric code generation

use rand::{rngs::OsRng, RngCore};
use vg_shared::config::verification::MAX_CODE_LENGTH;

use crate::errors::{DomainError, DomainResult};

/// Generate a cryptographically secure, zero-padded numeric code
///
/// Draws from the OS CSPRNG. Values are uniform over `[0, 10^length)`:
/// raw draws that would bias the modulo are rejected and redrawn.
///
/// # Errors
///
/// * `DomainError::Validation` - `length` is 0 or greater than 9
/// * `DomainError::RandomSource` - the OS random source failed
pub fn generate_secure_code(length: usize) -> DomainResult<String> {
    generate_code_with(&mut OsRng, length)
}

pub(crate) fn generate_code_with<R: RngCore + ?Sized>(
    rng: &mut R,
    length: usize,
) -> DomainResult<String> {
    if length == 0 || length > MAX_CODE_LENGTH {
        return Err(DomainError::Validation {
            message: format!("Code length must be between 1 and {}", MAX_CODE_LENGTH),
        });
    }

    let modulus = 10u32.pow(length as u32);
    // Draws at or above the largest multiple of `modulus` are rejected
    let zone = u32::MAX - (u32::MAX % modulus);

    loop {
        let mut bytes = [0u8; 4];
        rng.try_fill_bytes(&mut bytes)
            .map_err(|e| DomainError::RandomSource {
                message: e.to_string(),
            })?;
        let value = u32::from_le_bytes(bytes);
        if value < zone {
            return Ok(format!("{:0width$}", value % modulus, width = length));
        }
    }
}
