//! The value bridge: native values to external handles and back.
//!
//! # Encoding
//!
//! Each `*_to_cf` function returns a freshly created handle owned by the
//! caller. Dropping it releases it; placing it into a container retains it.
//!
//! # Decoding
//!
//! [`convert`] inspects the runtime type tag of a handle and decodes
//! accordingly, recursing through dictionaries and arrays. Handles passed in
//! are borrowed; decoding never changes their retain counts.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use keychain_cf::{
    CfArray, CfBoolean, CfData, CfDate, CfDictionary, CfNumber, CfNumberType, CfString, CfType,
    NumberValue,
};

use crate::{AttrValue, Error, Value};

/// Largest byte length the store accepts for a single string or data value.
pub const MAX_VALUE_LEN: u64 = u32::MAX as u64;

/// Reject inputs the store cannot represent.
pub fn check_len(len: usize, what: &str) -> Result<(), Error> {
    if len as u64 > MAX_VALUE_LEN {
        return Err(Error::validation(format!("{} is too large", what)));
    }
    Ok(())
}

/// Convert text to an external string. The UTF-8 bytes are kept exactly.
pub fn string_to_cf(s: &str) -> Result<CfString, Error> {
    check_len(s.len(), "string")?;
    Ok(CfString::new(s))
}

/// Convert raw bytes that should hold UTF-8 text to an external string.
pub fn utf8_to_cf(bytes: &[u8]) -> Result<CfString, Error> {
    let s = std::str::from_utf8(bytes)
        .map_err(|e| Error::validation(format!("invalid UTF-8 string: {}", e)))?;
    string_to_cf(s)
}

pub fn cf_to_string(s: &CfString) -> String {
    s.as_str().to_string()
}

/// Convert bytes to an external data buffer. Empty input yields an empty buffer.
pub fn bytes_to_cf(b: &[u8]) -> Result<CfData, Error> {
    check_len(b.len(), "data")?;
    Ok(CfData::new(b))
}

pub fn cf_to_bytes(d: &CfData) -> Vec<u8> {
    d.bytes().to_vec()
}

pub fn int32_to_cf(n: i32) -> CfNumber {
    CfNumber::from_i32(n)
}

/// Decode a number using its declared subtype.
///
/// The result is the narrowest native type that represents the subtype
/// exactly. A subtype outside the known table is an error, and so is an
/// integer subtype whose payload is a float or does not fit its width.
pub fn number_to_value(n: &CfNumber) -> Result<Value, Error> {
    let value = match n.number_type() {
        CfNumberType::SINT8 => Value::Int8(narrow(n)?),
        CfNumberType::SINT16 | CfNumberType::SHORT => Value::Int16(narrow(n)?),
        CfNumberType::SINT32 | CfNumberType::INT => Value::Int32(narrow(n)?),
        CfNumberType::SINT64
        | CfNumberType::LONG
        | CfNumberType::LONG_LONG
        | CfNumberType::CF_INDEX
        | CfNumberType::NS_INTEGER => Value::Int64(integer_payload(n)?),
        CfNumberType::CHAR => Value::UInt8(narrow(n)?),
        CfNumberType::FLOAT32 | CfNumberType::FLOAT => Value::Float32(n.to_f64() as f32),
        // CGFloat is 64 bits wide on every supported platform.
        CfNumberType::FLOAT64 | CfNumberType::DOUBLE | CfNumberType::CG_FLOAT => {
            Value::Float64(n.to_f64())
        }
        other => {
            return Err(Error::conversion(format!(
                "unknown number type {}",
                other.0
            )))
        }
    };
    Ok(value)
}

fn integer_payload(n: &CfNumber) -> Result<i64, Error> {
    match n.value() {
        NumberValue::Int(i) => Ok(i),
        NumberValue::Float(f) => Err(Error::conversion(format!(
            "{} holds a float payload {}",
            n.number_type(),
            f
        ))),
    }
}

fn narrow<T: TryFrom<i64>>(n: &CfNumber) -> Result<T, Error> {
    let raw = integer_payload(n)?;
    T::try_from(raw)
        .map_err(|_| Error::conversion(format!("{} does not fit {}", raw, n.number_type())))
}

/// Shared boolean singleton for `b`. Nothing is allocated.
pub fn bool_to_cf(b: bool) -> CfBoolean {
    CfBoolean::from_bool(b)
}

pub fn date_to_cf(t: &DateTime<Utc>) -> CfDate {
    let unix = t.timestamp() as f64 + f64::from(t.timestamp_subsec_nanos()) / 1e9;
    CfDate::from_unix_seconds(unix)
}

pub fn cf_to_date(d: &CfDate) -> Result<DateTime<Utc>, Error> {
    let unix = d.unix_seconds();
    if !unix.is_finite() {
        return Err(Error::conversion("date is not a finite time"));
    }

    let secs = unix.floor();
    let mut nanos = ((unix - secs) * 1e9).round() as i64;
    let mut secs = secs as i64;
    if nanos >= 1_000_000_000 {
        secs += 1;
        nanos -= 1_000_000_000;
    }

    DateTime::<Utc>::from_timestamp(secs, nanos as u32)
        .ok_or_else(|| Error::conversion(format!("date out of range: {}", unix)))
}

/// Build an external array retaining each element.
pub fn values_to_cf_array(values: &[CfType]) -> CfArray {
    CfArray::from_values(values)
}

/// Convert one attribute value to an external handle.
///
/// Existing handles are passed through (retained, not copied); everything
/// else is converted fresh.
pub fn attr_to_cf(value: &AttrValue) -> Result<CfType, Error> {
    match value {
        AttrValue::Ref(handle) => Ok(handle.clone()),
        AttrValue::Bool(b) => Ok(CfType::from(bool_to_cf(*b))),
        AttrValue::Int32(n) => Ok(CfType::from(int32_to_cf(*n))),
        AttrValue::Bytes(b) => Ok(CfType::from(bytes_to_cf(b)?)),
        AttrValue::Text(s) => Ok(CfType::from(string_to_cf(s)?)),
        AttrValue::Convertible(c) => c.to_external(),
    }
}

/// Decode any external handle, dispatching on its runtime type tag.
pub fn convert(value: &CfType) -> Result<Value, Error> {
    match value {
        CfType::String(s) => Ok(Value::String(cf_to_string(s))),
        CfType::Dictionary(d) => Ok(Value::Map(convert_dictionary(d)?)),
        CfType::Array(a) => {
            let mut results = Vec::with_capacity(a.len());
            for element in a.iter() {
                results.push(convert(element)?);
            }
            Ok(Value::Array(results))
        }
        CfType::Data(d) => Ok(Value::Bytes(cf_to_bytes(d))),
        CfType::Number(n) => number_to_value(n),
        CfType::Boolean(b) => Ok(Value::Bool(b.value())),
        CfType::Date(d) => Ok(Value::Date(cf_to_date(d)?)),
        CfType::Opaque(_) => Err(Error::unsupported_type(value.type_description())),
    }
}

/// Decode a dictionary deeply. Keys must decode to strings.
pub fn convert_dictionary(d: &CfDictionary) -> Result<BTreeMap<String, Value>, Error> {
    let mut result = BTreeMap::new();
    for (k, v) in d.iter() {
        let key = match convert(k)? {
            Value::String(s) => s,
            other => {
                return Err(Error::conversion(format!(
                    "dictionary key must be a string, got {}",
                    other.type_name()
                )))
            }
        };
        result.insert(key, convert(v)?);
    }
    Ok(result)
}
