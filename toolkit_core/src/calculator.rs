//! # Calculator
//!
//! Four arithmetic operations on `f64`, available three ways:
//!
//! - Free functions: [`add`], [`subtract`], [`multiply`], [`divide`]
//! - The [`CALCULATOR`] record, grouping the same four functions by name
//! - The [`Operation`] enum, for picking an operation at runtime
//!
//! All three routes run the same code. Only [`divide`] can fail, and only
//! when the divisor is zero.
//!
//! ## Example
//!
//! ```rust
//! use toolkit_core::calculator::{divide, Operation, CALCULATOR};
//! use toolkit_core::ToolkitError;
//!
//! assert_eq!((CALCULATOR.add)(2.0, 3.0), 5.0);
//! assert_eq!(divide(7.0, 2.0), Ok(3.5));
//! assert_eq!(divide(5.0, 0.0), Err(ToolkitError::DivisionByZero));
//!
//! let op: Operation = "*".parse().unwrap();
//! assert_eq!(op.apply(-3.0, 4.0), Ok(-12.0));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ToolkitError, ToolkitResult};

/// Sum of `a` and `b`
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// `a` minus `b`
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Product of `a` and `b`
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// `a` divided by `b`, with fractional results (`7 / 2 = 3.5`).
///
/// # Errors
///
/// Returns [`ToolkitError::DivisionByZero`] when `b` is zero (positive or
/// negative). A zero divisor never produces `inf` or `NaN`.
pub fn divide(a: f64, b: f64) -> ToolkitResult<f64> {
    if b == 0.0 {
        tracing::debug!(dividend = a, "division by zero rejected");
        return Err(ToolkitError::DivisionByZero);
    }
    Ok(a / b)
}

/// Named grouping of the four calculator functions.
///
/// The only instance is [`CALCULATOR`]; its fields point at the free
/// functions of this module, so calling through it is identical to calling
/// them directly.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Calculator {
    pub add: fn(f64, f64) -> f64,
    pub subtract: fn(f64, f64) -> f64,
    pub multiply: fn(f64, f64) -> f64,
    pub divide: fn(f64, f64) -> ToolkitResult<f64>,
}

/// The calculator record
pub const CALCULATOR: Calculator = Calculator {
    add,
    subtract,
    multiply,
    divide,
};

impl Calculator {
    /// Run `op` on `a` and `b` through this record's function pointers.
    pub fn apply(&self, op: Operation, a: f64, b: f64) -> ToolkitResult<f64> {
        match op {
            Operation::Add => Ok((self.add)(a, b)),
            Operation::Subtract => Ok((self.subtract)(a, b)),
            Operation::Multiply => Ok((self.multiply)(a, b)),
            Operation::Divide => (self.divide)(a, b),
        }
    }
}

/// A calculator operation selected by value.
///
/// Serializes as its lower-case name (`"add"`, `"divide"`, ...).
///
/// # Example
/// ```
/// use toolkit_core::calculator::Operation;
///
/// assert_eq!(Operation::Divide.symbol(), "/");
/// assert_eq!("subtract".parse::<Operation>().unwrap(), Operation::Subtract);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations in standard order
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Lower-case name, matching the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Infix symbol (+, -, *, /)
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Apply this operation via [`CALCULATOR`]
    pub fn apply(&self, a: f64, b: f64) -> ToolkitResult<f64> {
        CALCULATOR.apply(*self, a, b)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ToolkitError;

    /// Accepts a name (case-insensitive) or an infix symbol; `x` is taken as multiply.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(wanted) || op.symbol() == wanted)
            .or_else(|| wanted.eq_ignore_ascii_case("x").then_some(Operation::Multiply))
            .ok_or_else(|| ToolkitError::parse_error(s, "operation"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(add(-2.0, -3.0), -5.0);
        assert_eq!(add(5.0, 0.0), 5.0);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(5.0, 3.0), 2.0);
        assert_eq!(subtract(3.0, 5.0), -2.0);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(3.0, 4.0), 12.0);
        assert_eq!(multiply(5.0, 0.0), 0.0);
        assert_eq!(multiply(-3.0, 4.0), -12.0);
        assert_eq!(multiply(-3.0, -4.0), 12.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10.0, 2.0), Ok(5.0));
        assert_eq!(divide(7.0, 2.0), Ok(3.5));
        assert_eq!(divide(0.0, 5.0), Ok(0.0));
    }

    #[test]
    fn test_divide_by_zero() {
        let err = divide(5.0, 0.0).unwrap_err();
        assert_eq!(err, ToolkitError::DivisionByZero);
        assert_eq!(err.to_string(), "Division by zero");
        assert_eq!(divide(5.0, -0.0), Err(ToolkitError::DivisionByZero));
        assert_eq!(divide(0.0, 0.0), Err(ToolkitError::DivisionByZero));
    }

    #[test]
    fn test_calculator_record() {
        assert_eq!((CALCULATOR.add)(1.0, 2.0), 3.0);
        assert_eq!((CALCULATOR.subtract)(5.0, 2.0), 3.0);
        assert_eq!((CALCULATOR.multiply)(3.0, 3.0), 9.0);
        assert_eq!((CALCULATOR.divide)(8.0, 2.0), Ok(4.0));
        assert_eq!((CALCULATOR.divide)(8.0, 0.0), Err(ToolkitError::DivisionByZero));
    }

    #[test]
    fn test_operation_parsing() {
        assert_eq!("ADD".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("-".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!("x".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!(" / ".parse::<Operation>().unwrap(), Operation::Divide);

        let err = "pow".parse::<Operation>().unwrap_err();
        assert_eq!(err.error_code(), "PARSE_ERROR");
    }

    #[test]
    fn test_operation_serialization() {
        let json = serde_json::to_string(&Operation::Multiply).unwrap();
        assert_eq!(json, "\"multiply\"");
        let op: Operation = serde_json::from_str("\"divide\"").unwrap();
        assert_eq!(op, Operation::Divide);
    }

    #[test]
    fn test_operation_apply_matches_free_functions() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), Ok(add(2.0, 3.0)));
        assert_eq!(Operation::Subtract.apply(2.0, 3.0), Ok(subtract(2.0, 3.0)));
        assert_eq!(Operation::Multiply.apply(2.0, 3.0), Ok(multiply(2.0, 3.0)));
        assert_eq!(Operation::Divide.apply(2.0, 0.0), divide(2.0, 0.0));
    }

    proptest! {
        #[test]
        fn test_arithmetic_identities(a in -1.0e9f64..1.0e9, b in -1.0e9f64..1.0e9) {
            prop_assert_eq!(add(a, 0.0), a);
            prop_assert_eq!(multiply(a, 0.0), 0.0);
            prop_assert_eq!(multiply(-a, -b), multiply(a, b));
            prop_assert_eq!(subtract(a, b), -subtract(b, a));
        }

        #[test]
        fn test_record_matches_free_functions(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
            prop_assert_eq!((CALCULATOR.add)(a, b), add(a, b));
            prop_assert_eq!((CALCULATOR.subtract)(a, b), subtract(a, b));
            prop_assert_eq!((CALCULATOR.multiply)(a, b), multiply(a, b));
            prop_assert_eq!((CALCULATOR.divide)(a, b), divide(a, b));
        }

        #[test]
        fn test_nonzero_divisor_never_fails(a in -1.0e6f64..1.0e6, b in 1.0e-3f64..1.0e6) {
            prop_assert!(divide(a, b).is_ok());
            prop_assert!(divide(a, -b).is_ok());
        }
    }
}
