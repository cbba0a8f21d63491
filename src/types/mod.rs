// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across the coin crate.
//!
//! - Bounded coin amounts with checked addition

pub mod coin;

// Note: Public types are re-exported from lib.rs, not here
