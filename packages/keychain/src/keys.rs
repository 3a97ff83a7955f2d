//! Canonical attribute keys.
//!
//! Each key is resolved once, on first use, from the store's constant
//! reference into its native text form.

use std::fmt;

use keychain_cf::CfString;
use keychain_core::bridge::cf_to_string;
use lazy_static::lazy_static;

/// Names one semantic attribute of an item or query.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeKey(String);

impl AttributeKey {
    /// A key for a label without a typed setter.
    pub fn new(label: impl Into<String>) -> Self {
        AttributeKey(label.into())
    }

    fn resolve(constant: &CfString) -> Self {
        AttributeKey(cf_to_string(constant))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AttributeKey {
    fn from(label: &str) -> Self {
        AttributeKey::new(label)
    }
}

lazy_static! {
    pub static ref SEC_CLASS: AttributeKey = AttributeKey::resolve(&keychain_cf::SEC_CLASS);
    pub static ref SERVICE: AttributeKey = AttributeKey::resolve(&keychain_cf::SEC_ATTR_SERVICE);
    pub static ref SERVER: AttributeKey = AttributeKey::resolve(&keychain_cf::SEC_ATTR_SERVER);
    pub static ref PROTOCOL: AttributeKey = AttributeKey::resolve(&keychain_cf::SEC_ATTR_PROTOCOL);
    pub static ref AUTHENTICATION_TYPE: AttributeKey =
        AttributeKey::resolve(&keychain_cf::SEC_ATTR_AUTHENTICATION_TYPE);
    pub static ref PORT: AttributeKey = AttributeKey::resolve(&keychain_cf::SEC_ATTR_PORT);
    pub static ref PATH: AttributeKey = AttributeKey::resolve(&keychain_cf::SEC_ATTR_PATH);
    pub static ref LABEL: AttributeKey = AttributeKey::resolve(&keychain_cf::SEC_ATTR_LABEL);
    pub static ref ACCOUNT: AttributeKey = AttributeKey::resolve(&keychain_cf::SEC_ATTR_ACCOUNT);
    pub static ref ACCESS_GROUP: AttributeKey =
        AttributeKey::resolve(&keychain_cf::SEC_ATTR_ACCESS_GROUP);
    pub static ref DATA: AttributeKey = AttributeKey::resolve(&keychain_cf::SEC_VALUE_DATA);
    pub static ref DESCRIPTION: AttributeKey =
        AttributeKey::resolve(&keychain_cf::SEC_ATTR_DESCRIPTION);
    pub static ref COMMENT: AttributeKey = AttributeKey::resolve(&keychain_cf::SEC_ATTR_COMMENT);
    pub static ref CREATION_DATE: AttributeKey =
        AttributeKey::resolve(&keychain_cf::SEC_ATTR_CREATION_DATE);
    pub static ref MODIFICATION_DATE: AttributeKey =
        AttributeKey::resolve(&keychain_cf::SEC_ATTR_MODIFICATION_DATE);
    pub static ref SYNCHRONIZABLE: AttributeKey =
        AttributeKey::resolve(&keychain_cf::SEC_ATTR_SYNCHRONIZABLE);
    pub static ref ACCESSIBLE: AttributeKey =
        AttributeKey::resolve(&keychain_cf::SEC_ATTR_ACCESSIBLE);
    pub static ref MATCH_LIMIT: AttributeKey = AttributeKey::resolve(&keychain_cf::SEC_MATCH_LIMIT);
    pub static ref RETURN_ATTRIBUTES: AttributeKey =
        AttributeKey::resolve(&keychain_cf::SEC_RETURN_ATTRIBUTES);
    pub static ref RETURN_DATA: AttributeKey =
        AttributeKey::resolve(&keychain_cf::SEC_RETURN_DATA);
    pub static ref RETURN_REF: AttributeKey = AttributeKey::resolve(&keychain_cf::SEC_RETURN_REF);
}
