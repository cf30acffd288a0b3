//! Constant values
//!
//! [`Value`] is the tagged form of a known constant: what a literal denotes,
//! what an initializer stored into a symbol, or what a constant subexpression
//! folded to. The tag is the value's own type; conversions to a declared
//! type go through [`Value::convert_to`].

use crate::parser::syntax::{BinaryOp, DataType, UnaryOp};
use std::fmt;

/// Sentinel that stands in for the result of a division by zero
pub const DIVISION_BY_ZERO_SENTINEL: i32 = i32::MAX;

/// Known constant values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i32),
    Float(f32),
    Char(u8),
}

impl Value {
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Int(_) => DataType::Int,
            Value::Float(_) => DataType::Float,
            Value::Char(_) => DataType::Char,
        }
    }

    /// Integer view; floats truncate toward zero, chars widen
    pub fn as_int(&self) -> i32 {
        match self {
            Value::Int(n) => *n,
            Value::Float(x) => *x as i32,
            Value::Char(c) => *c as i32,
        }
    }

    pub fn as_float(&self) -> f32 {
        match self {
            Value::Int(n) => *n as f32,
            Value::Float(x) => *x,
            Value::Char(c) => *c as f32,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Value::Float(x) => *x == 0.0,
            other => other.as_int() == 0,
        }
    }

    /// Convert with C cast semantics. `void` keeps the value as is.
    pub fn convert_to(self, ty: DataType) -> Value {
        match ty {
            DataType::Int => Value::Int(self.as_int()),
            DataType::Float => Value::Float(self.as_float()),
            DataType::Char => Value::Char(self.as_int() as u8),
            DataType::Void => self,
        }
    }

    /// Fold `lhs op rhs` after the usual arithmetic conversions.
    ///
    /// Returns `None` where C leaves the result undefined (a zero divisor)
    /// or the operation does not apply (`%` on floats).
    pub fn fold_binary(op: BinaryOp, lhs: Value, rhs: Value) -> Option<Value> {
        let ty = DataType::promote(lhs.data_type(), rhs.data_type());

        if op.is_comparison() {
            let holds = if ty == DataType::Float {
                compare(op, lhs.as_float(), rhs.as_float())
            } else {
                compare(op, lhs.as_int(), rhs.as_int())
            };
            return Some(Value::Int(holds as i32));
        }

        if ty == DataType::Float {
            let (a, b) = (lhs.as_float(), rhs.as_float());
            return match op {
                BinaryOp::Add => Some(Value::Float(a + b)),
                BinaryOp::Sub => Some(Value::Float(a - b)),
                BinaryOp::Mul => Some(Value::Float(a * b)),
                BinaryOp::Div if b != 0.0 => Some(Value::Float(a / b)),
                _ => None,
            };
        }

        let (a, b) = (lhs.as_int(), rhs.as_int());
        match op {
            BinaryOp::Add => Some(Value::Int(a.wrapping_add(b))),
            BinaryOp::Sub => Some(Value::Int(a.wrapping_sub(b))),
            BinaryOp::Mul => Some(Value::Int(a.wrapping_mul(b))),
            BinaryOp::Div => a.checked_div(b).map(Value::Int),
            BinaryOp::Mod => a.checked_rem(b).map(Value::Int),
            _ => None,
        }
    }

    /// Fold a prefix operator. Increment and decrement fold to the updated
    /// value without touching any symbol.
    pub fn fold_unary(op: UnaryOp, operand: Value) -> Value {
        match (op, operand) {
            (UnaryOp::Plus, v) => v.convert_to(DataType::promote(v.data_type(), DataType::Int)),
            (UnaryOp::Neg, Value::Float(x)) => Value::Float(-x),
            (UnaryOp::Neg, v) => Value::Int(v.as_int().wrapping_neg()),
            (UnaryOp::Not, v) => Value::Int(v.is_zero() as i32),
            (UnaryOp::BitNot, v) => Value::Int(!v.as_int()),
            (UnaryOp::PreInc, Value::Float(x)) => Value::Float(x + 1.0),
            (UnaryOp::PreInc, Value::Char(c)) => Value::Char(c.wrapping_add(1)),
            (UnaryOp::PreInc, v) => Value::Int(v.as_int().wrapping_add(1)),
            (UnaryOp::PreDec, Value::Float(x)) => Value::Float(x - 1.0),
            (UnaryOp::PreDec, Value::Char(c)) => Value::Char(c.wrapping_sub(1)),
            (UnaryOp::PreDec, v) => Value::Int(v.as_int().wrapping_sub(1)),
        }
    }
}

fn compare<T: PartialOrd>(op: BinaryOp, a: T, b: T) -> bool {
    match op {
        BinaryOp::Lt => a < b,
        BinaryOp::Gt => a > b,
        BinaryOp::Le => a <= b,
        BinaryOp::Ge => a >= b,
        BinaryOp::Eq => a == b,
        BinaryOp::Ne => a != b,
        _ => false,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{:.6}", x),
            Value::Char(c) if c.is_ascii() => write!(f, "{}", *c as char),
            // Bytes past ASCII have no single-char rendering
            Value::Char(c) => write!(f, "\\x{:02x}", c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotion() {
        assert_eq!(
            Value::fold_binary(BinaryOp::Add, Value::Int(1), Value::Float(0.5)),
            Some(Value::Float(1.5))
        );
        assert_eq!(
            Value::fold_binary(BinaryOp::Add, Value::Char(b'a'), Value::Int(1)),
            Some(Value::Int(98))
        );
    }

    #[test]
    fn test_comparisons_yield_int() {
        assert_eq!(
            Value::fold_binary(BinaryOp::Lt, Value::Float(1.0), Value::Int(2)),
            Some(Value::Int(1))
        );
        assert_eq!(
            Value::fold_binary(BinaryOp::Eq, Value::Int(3), Value::Int(4)),
            Some(Value::Int(0))
        );
    }

    #[test]
    fn test_undefined_folds() {
        assert_eq!(
            Value::fold_binary(BinaryOp::Div, Value::Int(1), Value::Int(0)),
            None
        );
        assert_eq!(
            Value::fold_binary(BinaryOp::Mod, Value::Float(5.0), Value::Int(2)),
            None
        );
    }

    #[test]
    fn test_conversion_truncates() {
        assert_eq!(Value::Float(3.9).convert_to(DataType::Int), Value::Int(3));
        assert_eq!(Value::Float(65.2).convert_to(DataType::Char), Value::Char(b'A'));
        assert_eq!(Value::Char(b'a').convert_to(DataType::Float), Value::Float(97.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Float(2.5).to_string(), "2.500000");
        assert_eq!(Value::Char(b'z').to_string(), "z");
        assert_eq!(Value::Int(-4).to_string(), "-4");
        assert_eq!(Value::Char(200).to_string(), "\\xc8");
        assert_eq!(Value::Int(200).convert_to(DataType::Char).to_string(), "\\xc8");
    }
}
