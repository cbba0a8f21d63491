// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for coin amounts
//!
//! The bounds are fixed for the whole process, so configuration here is a set
//! of constants rather than a builder.
//!
//! ```rust
//! use coin::{Coin, MAX_COIN_VALUE};
//!
//! assert_eq!(Coin::MAX.as_u64(), MAX_COIN_VALUE);
//! ```

pub mod constants;

pub use constants::{MAX_COIN_VALUE, MIN_COIN_VALUE};
