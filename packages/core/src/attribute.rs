//! Encode-side attribute values.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use keychain_cf::CfType;

use crate::Error;

/// A value that knows how to produce its own external representation.
///
/// The handle returned is owned by the caller; the dictionary builder hands
/// it to the dictionary it is building and then drops its own copy.
pub trait ToExternal: Send + Sync + fmt::Debug {
    fn to_external(&self) -> Result<CfType, Error>;
}

/// One attribute value, before conversion.
///
/// Exactly one branch is populated. Absence of an attribute is expressed by
/// the key being missing from the attribute map, never by an empty branch.
#[derive(Clone, Debug)]
pub enum AttrValue {
    Text(String),
    Bytes(Vec<u8>),
    Int32(i32),
    Bool(bool),
    /// An existing external handle, passed through unchanged.
    Ref(CfType),
    /// Anything that converts itself.
    Convertible(Arc<dyn ToExternal>),
}

impl AttrValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            AttrValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_ref_handle(&self) -> Option<&CfType> {
        match self {
            AttrValue::Ref(r) => Some(r),
            _ => None,
        }
    }
}

impl PartialEq for AttrValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AttrValue::Text(a), AttrValue::Text(b)) => a == b,
            (AttrValue::Bytes(a), AttrValue::Bytes(b)) => a == b,
            (AttrValue::Int32(a), AttrValue::Int32(b)) => a == b,
            (AttrValue::Bool(a), AttrValue::Bool(b)) => a == b,
            (AttrValue::Ref(a), AttrValue::Ref(b)) => a == b,
            (AttrValue::Convertible(a), AttrValue::Convertible(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Text(v)
    }
}

impl From<Vec<u8>> for AttrValue {
    fn from(v: Vec<u8>) -> Self {
        AttrValue::Bytes(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        AttrValue::Int32(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<CfType> for AttrValue {
    fn from(v: CfType) -> Self {
        AttrValue::Ref(v)
    }
}

/// Attribute map keyed by the attribute's text label.
pub type Attributes = HashMap<String, AttrValue>;

#[cfg(test)]
mod tests {
    use super::*;
    use keychain_cf::CfString;

    #[derive(Debug)]
    struct Fixed;

    impl ToExternal for Fixed {
        fn to_external(&self) -> Result<CfType, Error> {
            Ok(CfType::from(CfString::new("fixed")))
        }
    }

    #[test]
    fn convertible_equality_is_identity() {
        let a: Arc<dyn ToExternal> = Arc::new(Fixed);
        let b: Arc<dyn ToExternal> = Arc::new(Fixed);

        assert_eq!(
            AttrValue::Convertible(a.clone()),
            AttrValue::Convertible(a.clone())
        );
        assert_ne!(AttrValue::Convertible(a), AttrValue::Convertible(b));
    }

    #[test]
    fn conversions_pick_the_right_branch() {
        assert_eq!(AttrValue::from("x").as_text(), Some("x"));
        assert_eq!(AttrValue::from(vec![1u8]).as_bytes(), Some(&[1u8][..]));
        assert_eq!(AttrValue::from(7), AttrValue::Int32(7));
        assert_eq!(AttrValue::from(true), AttrValue::Bool(true));
        assert_ne!(AttrValue::from(1), AttrValue::from(true));
    }
}
