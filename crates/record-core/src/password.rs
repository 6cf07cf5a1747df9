// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Password hashing with bcrypt.
//!
//! Thin wrapper that fixes the cost, rejects secrets bcrypt would silently
//! truncate, and turns every verification failure into `false`.
//!
//! # Example
//!
//! ```rust
//! use record_core::password;
//!
//! let hashed = password::hash_with_cost("correct horse", 4)?;
//! assert!(password::verify(&hashed, "correct horse"));
//! assert!(!password::verify(&hashed, "battery staple"));
//! # Ok::<(), record_core::password::HashError>(())
//! ```

use thiserror::Error;
use tracing::debug;

/// Cost used by [`hash`].
pub const DEFAULT_COST: u32 = 10;

/// Longest secret bcrypt hashes without truncation, in bytes.
pub const MAX_SECRET_LEN: usize = 72;

/// Error returned when a secret cannot be hashed.
#[derive(Debug, Error)]
pub enum HashError {
    /// Secret is longer than [`MAX_SECRET_LEN`] bytes.
    #[error("secret is {len} bytes, bcrypt accepts at most 72")]
    TooLong {
        /// Length of the rejected secret.
        len: usize
    },

    /// The bcrypt primitive failed, e.g. on an out-of-range cost.
    #[error("bcrypt failed: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError)
}

/// Hash a secret with [`DEFAULT_COST`].
///
/// Every call uses a fresh random salt, so hashing the same secret twice
/// gives different strings that both verify.
///
/// # Errors
///
/// [`HashError::TooLong`] for secrets above [`MAX_SECRET_LEN`] bytes.
pub fn hash(secret: impl AsRef<[u8]>) -> Result<String, HashError> {
    hash_with_cost(secret, DEFAULT_COST)
}

/// Hash a secret with an explicit cost.
///
/// # Errors
///
/// [`HashError::TooLong`] for oversize secrets, [`HashError::Bcrypt`] when
/// the cost is outside bcrypt's accepted range.
pub fn hash_with_cost(secret: impl AsRef<[u8]>, cost: u32) -> Result<String, HashError> {
    let secret = secret.as_ref();
    if secret.len() > MAX_SECRET_LEN {
        return Err(HashError::TooLong {
            len: secret.len()
        });
    }
    let hashed = bcrypt::hash(secret, cost)?;
    debug!(cost, "hashed secret");
    Ok(hashed)
}

/// Hash a secret into an existing slot.
///
/// The slot is only written on success.
///
/// # Errors
///
/// Same as [`hash`].
pub fn hash_into(secret: impl AsRef<[u8]>, slot: &mut String) -> Result<(), HashError> {
    *slot = hash(secret)?;
    Ok(())
}

/// Check a secret against a bcrypt hash.
///
/// Never fails: a wrong secret, a malformed hash, or a secret bcrypt could
/// not have hashed all give `false`.
pub fn verify(hashed: &str, secret: impl AsRef<[u8]>) -> bool {
    let secret = secret.as_ref();
    if secret.len() > MAX_SECRET_LEN {
        return false;
    }
    bcrypt::verify(secret, hashed).unwrap_or(false)
}
