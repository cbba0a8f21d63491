// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the coin library.
//!
//! Coin arithmetic has exactly one failure mode: an addition whose result
//! would exceed [`MAX_COIN_VALUE`](crate::MAX_COIN_VALUE). It is reported as
//! [`CoinError`] and is always recoverable.
//!
//! # Examples
//!
//! ```rust
//! use coin::{Coin, CoinError, MAX_COIN_VALUE};
//!
//! let mut balance = Coin::new(1);
//! match balance.try_add(&Coin::new(MAX_COIN_VALUE)) {
//!     Ok(()) => unreachable!(),
//!     Err(CoinError::MaxValueExceeded { current, operand, .. }) => {
//!         assert_eq!(current, 1);
//!         assert_eq!(operand, MAX_COIN_VALUE);
//!     }
//! }
//! assert_eq!(balance, Coin::new(1));
//! ```

mod coin;

pub use coin::{CoinError, CoinResult};
