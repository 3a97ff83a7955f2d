//! Numeric handles with a declared storage subtype.

use std::fmt;
use std::sync::Arc;

/// Declared storage subtype of a number.
///
/// The numeric codes mirror the platform's number-type enumeration. Codes
/// without an associated constant are still representable so that decoders
/// can reject them explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CfNumberType(pub i32);

impl CfNumberType {
    pub const SINT8: CfNumberType = CfNumberType(1);
    pub const SINT16: CfNumberType = CfNumberType(2);
    pub const SINT32: CfNumberType = CfNumberType(3);
    pub const SINT64: CfNumberType = CfNumberType(4);
    pub const FLOAT32: CfNumberType = CfNumberType(5);
    pub const FLOAT64: CfNumberType = CfNumberType(6);
    pub const CHAR: CfNumberType = CfNumberType(7);
    pub const SHORT: CfNumberType = CfNumberType(8);
    pub const INT: CfNumberType = CfNumberType(9);
    pub const LONG: CfNumberType = CfNumberType(10);
    pub const LONG_LONG: CfNumberType = CfNumberType(11);
    pub const FLOAT: CfNumberType = CfNumberType(12);
    pub const DOUBLE: CfNumberType = CfNumberType(13);
    pub const CF_INDEX: CfNumberType = CfNumberType(14);
    pub const NS_INTEGER: CfNumberType = CfNumberType(15);
    pub const CG_FLOAT: CfNumberType = CfNumberType(16);

    /// Whether the subtype stores a floating point value.
    pub fn is_float(self) -> bool {
        matches!(
            self,
            CfNumberType::FLOAT32
                | CfNumberType::FLOAT64
                | CfNumberType::FLOAT
                | CfNumberType::DOUBLE
                | CfNumberType::CG_FLOAT
        )
    }
}

impl fmt::Display for CfNumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "number type {}", self.0)
    }
}

/// The stored payload of a number, at full width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumberValue {
    Int(i64),
    Float(f64),
}

#[derive(Debug, PartialEq)]
struct NumberObject {
    number_type: CfNumberType,
    value: NumberValue,
}

/// Immutable number carrying its declared subtype.
#[derive(Clone, Debug, PartialEq)]
pub struct CfNumber(Arc<NumberObject>);

impl CfNumber {
    /// Create a number with an explicit declared subtype.
    pub fn with_type(number_type: CfNumberType, value: NumberValue) -> Self {
        CfNumber(Arc::new(NumberObject { number_type, value }))
    }

    pub fn from_i8(v: i8) -> Self {
        Self::with_type(CfNumberType::SINT8, NumberValue::Int(v as i64))
    }

    pub fn from_i16(v: i16) -> Self {
        Self::with_type(CfNumberType::SINT16, NumberValue::Int(v as i64))
    }

    pub fn from_i32(v: i32) -> Self {
        Self::with_type(CfNumberType::SINT32, NumberValue::Int(v as i64))
    }

    pub fn from_i64(v: i64) -> Self {
        Self::with_type(CfNumberType::SINT64, NumberValue::Int(v))
    }

    pub fn from_f32(v: f32) -> Self {
        Self::with_type(CfNumberType::FLOAT32, NumberValue::Float(v as f64))
    }

    pub fn from_f64(v: f64) -> Self {
        Self::with_type(CfNumberType::FLOAT64, NumberValue::Float(v))
    }

    /// The declared storage subtype.
    pub fn number_type(&self) -> CfNumberType {
        self.0.number_type
    }

    pub fn value(&self) -> NumberValue {
        self.0.value
    }

    /// The value as a 64-bit integer; floats are truncated toward zero.
    pub fn to_i64(&self) -> i64 {
        match self.0.value {
            NumberValue::Int(i) => i,
            NumberValue::Float(f) => f as i64,
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self.0.value {
            NumberValue::Int(i) => i as f64,
            NumberValue::Float(f) => f,
        }
    }

    pub fn retain_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    pub fn same_object(&self, other: &CfNumber) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
