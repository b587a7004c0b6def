//! Testing utilities for OPD workspace
//!
//! Shared test helpers, fixtures, and test-only operand variants.

#![allow(missing_docs)]

use opd_capability::{Capability, Number};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Literals that must parse, with the value they denote
pub const NUMERIC_LITERALS: &[(&str, Number)] = &[
    ("0", Number::Int(0)),
    ("1", Number::Int(1)),
    ("-1", Number::Int(-1)),
    ("+12", Number::Int(12)),
    ("1.5", Number::Float(1.5)),
    ("-0.25", Number::Float(-0.25)),
    ("2e3", Number::Float(2000.0)),
    ("9223372036854775807", Number::Int(i64::MAX)),
];

/// Strings that are not numeric literals
pub const NON_NUMERIC_LITERALS: &[&str] = &[
    "", "abc", "one", "1a", "a1", " 1", "1 ", "NaN", "inf", "1..2", "--1", "0x1F", "1,000",
];

/// Operand that ignores its own state and always yields `constant + increment`
#[derive(Debug, Clone, Copy)]
pub struct ConstantOperand(pub i64);

impl Capability for ConstantOperand {
    fn combine(&self, increment: Number) -> Number {
        Number::Int(self.0) + increment
    }
}

/// Operand that counts how often it was combined
#[derive(Debug)]
pub struct CountingOperand {
    value: i64,
    calls: AtomicUsize,
}

impl CountingOperand {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Capability for CountingOperand {
    fn combine(&self, increment: Number) -> Number {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Number::Int(self.value) + increment
    }
}
