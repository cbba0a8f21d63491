// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong type for bounded coin amounts
//!
//! [`Coin`] wraps an unsigned magnitude that is meant to stay within
//! `[MIN_COIN_VALUE, MAX_COIN_VALUE]`. Addition is checked: a sum above the
//! maximum is rejected and the target keeps its previous value.

use crate::config::constants::{MAX_COIN_VALUE, MIN_COIN_VALUE};
use crate::errors::{CoinError, CoinResult};
use crate::tracing::spans;

/// A quantity of currency bounded by [`MAX_COIN_VALUE`]
///
/// Construction is not validated, so an out-of-range coin can exist; use
/// [`is_valid`](Self::is_valid) to detect one. Every addition goes through
/// [`try_add`](Self::try_add) or [`checked_add`](Self::checked_add), which
/// never produce a sum above the maximum. `std::ops::Add` is not implemented
/// so that no unchecked addition is available.
///
/// # Examples
///
/// ```
/// use coin::Coin;
///
/// let mut a = Coin::new(5);
/// a.try_add(&Coin::new(10)).unwrap();
/// assert_eq!(a.as_u64(), 15);
/// assert!(a.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coin(u64);

impl Coin {
    /// Zero coin amount
    pub const ZERO: Self = Self(MIN_COIN_VALUE);

    /// Largest valid coin amount
    pub const MAX: Self = Self(MAX_COIN_VALUE);

    /// Create a coin from a raw magnitude
    ///
    /// The value is not checked against [`MAX_COIN_VALUE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use coin::{Coin, MAX_COIN_VALUE};
    ///
    /// let too_big = Coin::new(MAX_COIN_VALUE + 1);
    /// assert!(!too_big.is_valid());
    /// ```
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the inner magnitude
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check that the magnitude lies in `[MIN_COIN_VALUE, MAX_COIN_VALUE]`
    ///
    /// # Examples
    ///
    /// ```
    /// use coin::{Coin, MAX_COIN_VALUE};
    ///
    /// assert!(Coin::new(0).is_valid());
    /// assert!(Coin::new(MAX_COIN_VALUE).is_valid());
    /// assert!(!Coin::new(MAX_COIN_VALUE + 1).is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        (MIN_COIN_VALUE..=MAX_COIN_VALUE).contains(&self.0)
    }

    /// Add `operand` to this coin in place
    ///
    /// On success `self` holds the sum. If the sum would exceed
    /// [`MAX_COIN_VALUE`], `self` is left untouched and
    /// [`CoinError::MaxValueExceeded`] is returned. A sum exactly equal to the
    /// maximum is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use coin::{Coin, MAX_COIN_VALUE};
    ///
    /// let mut a = Coin::new(2);
    /// a.try_add(&Coin::new(MAX_COIN_VALUE - 3)).unwrap();
    /// assert_eq!(a.as_u64(), MAX_COIN_VALUE - 1);
    ///
    /// let mut b = Coin::new(1);
    /// assert!(b.try_add(&Coin::new(MAX_COIN_VALUE)).is_err());
    /// assert_eq!(b.as_u64(), 1);
    /// ```
    pub fn try_add(&mut self, operand: &Coin) -> CoinResult<()> {
        let span = spans::try_add(self.0, operand.0);
        let _guard = span.enter();

        *self = self.checked_add(*operand)?;
        Ok(())
    }

    /// Return the sum of two coins, or an error if it would exceed the maximum
    ///
    /// The sum is formed with `u64::checked_add`, so a wrapped result can
    /// never slip under the bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use coin::Coin;
    ///
    /// let total = Coin::new(400).checked_add(Coin::new(600)).unwrap();
    /// assert_eq!(total, Coin::new(1_000));
    ///
    /// assert!(Coin::new(u64::MAX).checked_add(Coin::new(1)).is_err());
    /// ```
    pub fn checked_add(self, operand: Coin) -> CoinResult<Coin> {
        match self.0.checked_add(operand.0) {
            Some(sum) if sum <= MAX_COIN_VALUE => Ok(Self(sum)),
            _ => {
                tracing::debug!(
                    current = self.0,
                    operand = operand.0,
                    max = MAX_COIN_VALUE,
                    "Rejected coin addition above maximum"
                );
                Err(CoinError::max_value_exceeded(self.0, operand.0))
            }
        }
    }

    /// Amount that can still be added before reaching [`MAX_COIN_VALUE`]
    ///
    /// Returns `None` for a coin that is already out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use coin::{Coin, MAX_COIN_VALUE};
    ///
    /// assert_eq!(Coin::new(999_000).headroom(), Some(Coin::new(1_000)));
    /// assert_eq!(Coin::MAX.headroom(), Some(Coin::ZERO));
    /// assert_eq!(Coin::new(MAX_COIN_VALUE + 1).headroom(), None);
    /// ```
    pub fn headroom(&self) -> Option<Coin> {
        MAX_COIN_VALUE.checked_sub(self.0).map(Self)
    }

    /// Sum a sequence of coins, starting from zero
    ///
    /// Stops at the first addition that would exceed the maximum and returns
    /// its error.
    ///
    /// # Examples
    ///
    /// ```
    /// use coin::Coin;
    ///
    /// let total = Coin::try_sum([Coin::new(1), Coin::new(2), Coin::new(3)]).unwrap();
    /// assert_eq!(total, Coin::new(6));
    ///
    /// assert!(Coin::try_sum([Coin::MAX, Coin::new(1)]).is_err());
    /// ```
    pub fn try_sum<I>(coins: I) -> CoinResult<Coin>
    where
        I: IntoIterator<Item = Coin>,
    {
        let span = spans::try_sum();
        let _guard = span.enter();

        coins.into_iter().try_fold(Coin::ZERO, |mut total, coin| {
            total.try_add(&coin)?;
            Ok(total)
        })
    }
}

/// Check that a coin lies within `[MIN_COIN_VALUE, MAX_COIN_VALUE]`
///
/// Free-function form of [`Coin::is_valid`].
pub fn is_valid_coin(coin: Coin) -> bool {
    coin.is_valid()
}

impl From<u64> for Coin {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<Coin> for u64 {
    fn from(coin: Coin) -> Self {
        coin.0
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
