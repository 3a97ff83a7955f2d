//! The polymorphic handle: `CfType`.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use bytes::Bytes;

use crate::{CfArray, CfBoolean, CfData, CfDate, CfDictionary, CfNumber, CfString};

/// Runtime type tag of an external value.
///
/// Every handle reports the tag of the object it points at. Decoders branch on
/// this tag rather than on the static type they were handed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CfTypeId(pub u64);

impl CfTypeId {
    pub const STRING: CfTypeId = CfTypeId(7);
    pub const DICTIONARY: CfTypeId = CfTypeId(18);
    pub const ARRAY: CfTypeId = CfTypeId(19);
    pub const DATA: CfTypeId = CfTypeId(20);
    pub const BOOLEAN: CfTypeId = CfTypeId(21);
    pub const NUMBER: CfTypeId = CfTypeId(22);
    pub const DATE: CfTypeId = CfTypeId(42);

    /// Opaque reference to a stored secure item.
    pub const KEYCHAIN_ITEM: CfTypeId = CfTypeId(91);

    /// Human-readable name for a built-in type tag.
    ///
    /// Opaque kinds not listed here carry their own name on the object; see
    /// [`CfType::type_description`].
    pub fn description(self) -> &'static str {
        match self {
            CfTypeId::STRING => "CFString",
            CfTypeId::DICTIONARY => "CFDictionary",
            CfTypeId::ARRAY => "CFArray",
            CfTypeId::DATA => "CFData",
            CfTypeId::BOOLEAN => "CFBoolean",
            CfTypeId::NUMBER => "CFNumber",
            CfTypeId::DATE => "CFDate",
            CfTypeId::KEYCHAIN_ITEM => "SecKeychainItem",
            _ => "CFType",
        }
    }
}

impl fmt::Display for CfTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A reference-counted handle to any external value.
///
/// Cloning a handle retains the underlying object; dropping it releases it.
/// Containers hold their own handles, so an object placed into a dictionary or
/// array stays alive for as long as the container does.
#[derive(Clone, Debug, PartialEq)]
pub enum CfType {
    String(CfString),
    Data(CfData),
    Number(CfNumber),
    Boolean(CfBoolean),
    Date(CfDate),
    Dictionary(CfDictionary),
    Array(CfArray),
    Opaque(CfOpaque),
}

impl CfType {
    /// The runtime type tag of the referenced object.
    pub fn type_id(&self) -> CfTypeId {
        match self {
            CfType::String(_) => CfTypeId::STRING,
            CfType::Data(_) => CfTypeId::DATA,
            CfType::Number(_) => CfTypeId::NUMBER,
            CfType::Boolean(_) => CfTypeId::BOOLEAN,
            CfType::Date(_) => CfTypeId::DATE,
            CfType::Dictionary(_) => CfTypeId::DICTIONARY,
            CfType::Array(_) => CfTypeId::ARRAY,
            CfType::Opaque(o) => o.type_id(),
        }
    }

    /// Human-readable description of the referenced object's type.
    pub fn type_description(&self) -> String {
        match self {
            CfType::Opaque(o) => o.name().to_string(),
            other => other.type_id().description().to_string(),
        }
    }

    /// Number of live handles to the referenced object.
    pub fn retain_count(&self) -> usize {
        match self {
            CfType::String(v) => v.retain_count(),
            CfType::Data(v) => v.retain_count(),
            CfType::Number(v) => v.retain_count(),
            CfType::Boolean(v) => v.retain_count(),
            CfType::Date(v) => v.retain_count(),
            CfType::Dictionary(v) => v.retain_count(),
            CfType::Array(v) => v.retain_count(),
            CfType::Opaque(v) => Arc::strong_count(&v.0),
        }
    }

    /// Check whether two handles point at the same object (identity, not equality).
    pub fn same_object(&self, other: &CfType) -> bool {
        match (self, other) {
            (CfType::String(a), CfType::String(b)) => a.same_object(b),
            (CfType::Data(a), CfType::Data(b)) => a.same_object(b),
            (CfType::Number(a), CfType::Number(b)) => a.same_object(b),
            (CfType::Boolean(a), CfType::Boolean(b)) => a.same_object(b),
            (CfType::Date(a), CfType::Date(b)) => a.same_object(b),
            (CfType::Dictionary(a), CfType::Dictionary(b)) => a.same_object(b),
            (CfType::Array(a), CfType::Array(b)) => a.same_object(b),
            (CfType::Opaque(a), CfType::Opaque(b)) => Arc::ptr_eq(&a.0, &b.0),
            _ => false,
        }
    }

    pub fn as_string(&self) -> Option<&CfString> {
        match self {
            CfType::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_data(&self) -> Option<&CfData> {
        match self {
            CfType::Data(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&CfNumber> {
        match self {
            CfType::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<&CfBoolean> {
        match self {
            CfType::Boolean(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&CfDate> {
        match self {
            CfType::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&CfDictionary> {
        match self {
            CfType::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&CfArray> {
        match self {
            CfType::Array(a) => Some(a),
            _ => None,
        }
    }
}

impl From<CfString> for CfType {
    fn from(v: CfString) -> Self {
        CfType::String(v)
    }
}

impl From<CfData> for CfType {
    fn from(v: CfData) -> Self {
        CfType::Data(v)
    }
}

impl From<CfNumber> for CfType {
    fn from(v: CfNumber) -> Self {
        CfType::Number(v)
    }
}

impl From<CfBoolean> for CfType {
    fn from(v: CfBoolean) -> Self {
        CfType::Boolean(v)
    }
}

impl From<CfDate> for CfType {
    fn from(v: CfDate) -> Self {
        CfType::Date(v)
    }
}

impl From<CfDictionary> for CfType {
    fn from(v: CfDictionary) -> Self {
        CfType::Dictionary(v)
    }
}

impl From<CfArray> for CfType {
    fn from(v: CfArray) -> Self {
        CfType::Array(v)
    }
}

impl From<CfOpaque> for CfType {
    fn from(v: CfOpaque) -> Self {
        CfType::Opaque(v)
    }
}

#[derive(Debug, PartialEq)]
struct OpaqueObject {
    type_id: CfTypeId,
    name: Cow<'static, str>,
    payload: Bytes,
}

/// A value whose contents are private to the store (item references, keys,
/// certificates, access objects).
///
/// Two opaque handles are equal when they carry the same kind and payload.
#[derive(Clone, Debug, PartialEq)]
pub struct CfOpaque(Arc<OpaqueObject>);

impl CfOpaque {
    /// Create an opaque object of the given kind.
    pub fn new(type_id: CfTypeId, name: impl Into<Cow<'static, str>>, payload: Bytes) -> Self {
        CfOpaque(Arc::new(OpaqueObject {
            type_id,
            name: name.into(),
            payload,
        }))
    }

    /// Create a reference to a stored secure item.
    pub fn keychain_item(payload: Bytes) -> Self {
        Self::new(
            CfTypeId::KEYCHAIN_ITEM,
            CfTypeId::KEYCHAIN_ITEM.description(),
            payload,
        )
    }

    pub fn type_id(&self) -> CfTypeId {
        self.0.type_id
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The store-private payload.
    pub fn payload(&self) -> &Bytes {
        &self.0.payload
    }
}
