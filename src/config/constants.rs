// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed bounds for coin amounts
//!
//! These values are compile-time constants of the crate. There is no runtime
//! configuration that can move them.

/// Largest magnitude any [`Coin`](crate::Coin) may hold, inclusive.
///
/// This is also the ceiling for the sum produced by
/// [`Coin::try_add`](crate::Coin::try_add).
pub const MAX_COIN_VALUE: u64 = 1_000_000;

/// Smallest magnitude any [`Coin`](crate::Coin) may hold, inclusive.
pub const MIN_COIN_VALUE: u64 = 0;
