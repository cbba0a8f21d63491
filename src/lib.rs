// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Bounded currency amounts with checked addition.
//!
//! A [`Coin`] holds an unsigned magnitude that must not exceed
//! [`MAX_COIN_VALUE`]. Adding two coins never wraps and never saturates: a sum
//! above the maximum is returned as a [`CoinError`] and the target keeps its
//! old value.
//!
//! ```rust
//! use coin::{Coin, CoinError, MAX_COIN_VALUE};
//!
//! let mut wallet = Coin::new(5);
//! wallet.try_add(&Coin::new(10))?;
//! assert_eq!(wallet.as_u64(), 15);
//!
//! let mut full = Coin::new(1);
//! assert!(full.try_add(&Coin::new(MAX_COIN_VALUE)).is_err());
//! assert_eq!(full.as_u64(), 1);
//! # Ok::<(), CoinError>(())
//! ```
//!
//! `Coin` carries no synchronization. Share it across threads behind the
//! caller's own lock or channel.

pub mod config;
pub mod errors;
mod tracing;
pub mod types;

pub use config::{MAX_COIN_VALUE, MIN_COIN_VALUE};
pub use errors::{CoinError, CoinResult};
pub use types::coin::{is_valid_coin, Coin};
