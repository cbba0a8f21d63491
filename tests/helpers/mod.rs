// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for coin integration tests

#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber once per test binary
///
/// Honors `RUST_LOG` and is silent by default. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One row of a table-driven addition test
#[derive(Debug, Clone, Copy)]
pub struct AdditionCase {
    pub name: &'static str,
    pub a: u64,
    pub b: u64,
    /// Expected magnitude of `a` after the call; `None` means overflow
    pub expected: Option<u64>,
}

impl AdditionCase {
    pub const fn ok(name: &'static str, a: u64, b: u64, result: u64) -> Self {
        Self {
            name,
            a,
            b,
            expected: Some(result),
        }
    }

    pub const fn overflow(name: &'static str, a: u64, b: u64) -> Self {
        Self {
            name,
            a,
            b,
            expected: None,
        }
    }
}
