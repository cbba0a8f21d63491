// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for coin operations.
//!
//! Telemetry is kept out of the arithmetic itself. Each instrumented
//! operation has a span helper here instead of an `#[instrument]` attribute:
//!
//! ```rust,ignore
//! pub fn my_operation(&mut self, other: &Coin) -> CoinResult<()> {
//!     let span = spans::my_operation(self.0, other.0);
//!     let _guard = span.enter();
//!     // Arithmetic here
//! }
//! ```

use tracing::Span;

/// Create span for adding one coin into another in place.
///
/// Parent: caller's span, or `coin.try_sum` when folding a sequence
#[inline]
pub(crate) fn try_add(current: u64, operand: u64) -> Span {
    tracing::trace_span!("coin.try_add", current = current, operand = operand)
}

/// Create span for folding a sequence of coins into a single total.
///
/// Parent: None (root span for this operation)
/// Children: one `coin.try_add` span per element
#[inline]
pub(crate) fn try_sum() -> Span {
    tracing::trace_span!("coin.try_sum")
}
