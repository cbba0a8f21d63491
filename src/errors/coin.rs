// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for coin arithmetic.

use crate::config::constants::MAX_COIN_VALUE;

/// Errors that can occur when combining coin amounts.
///
/// The target of a failed operation is never modified, so callers may clamp,
/// split the amount, or surface the error without any cleanup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoinError {
    /// The sum would exceed the maximum coin value.
    ///
    /// Also returned when the sum does not fit in `u64` at all.
    #[error("Exceeds maximum coin value: {current} + {operand} > {max}")]
    MaxValueExceeded {
        /// Magnitude of the coin being added to
        current: u64,
        /// Magnitude of the coin being added
        operand: u64,
        /// Maximum permitted coin value at the time of the check
        max: u64,
    },
}

impl CoinError {
    /// Create a `MaxValueExceeded` error against [`MAX_COIN_VALUE`].
    pub fn max_value_exceeded(current: u64, operand: u64) -> Self {
        CoinError::MaxValueExceeded {
            current,
            operand,
            max: MAX_COIN_VALUE,
        }
    }
}

/// Result type for coin operations
pub type CoinResult<T> = Result<T, CoinError>;
