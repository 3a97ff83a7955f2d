//! Items: store records, query filters and delete selectors.

use std::sync::Arc;

use keychain_cf::{CfDictionary, CfType};
use keychain_core::{build_dictionary, AttrValue, Attributes, Error, ToExternal};

use crate::keys::{self, AttributeKey};
use crate::options::{Accessible, MatchLimit, SecClass, Synchronizable};

/// An attribute set describing one store record or a query over records.
///
/// Typed setters treat a zero value as "unset": an empty string, a zero
/// integer or missing data removes the attribute instead of storing it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Item {
    attributes: Attributes,
}

impl Item {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn get(&self, key: &AttributeKey) -> Option<&AttrValue> {
        self.attributes.get(key.as_str())
    }

    pub fn contains(&self, key: &AttributeKey) -> bool {
        self.attributes.contains_key(key.as_str())
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn remove(&mut self, key: &AttributeKey) -> Option<AttrValue> {
        self.attributes.remove(key.as_str())
    }

    fn put(&mut self, key: &AttributeKey, value: AttrValue) {
        self.attributes.insert(key.as_str().to_string(), value);
    }

    fn put_or_remove(&mut self, key: &AttributeKey, value: Option<CfType>) {
        match value {
            Some(handle) => self.put(key, AttrValue::Ref(handle)),
            None => {
                self.remove(key);
            }
        }
    }

    /// Build the external dictionary for this item.
    pub fn to_dictionary(&self) -> Result<CfDictionary, Error> {
        build_dictionary(&self.attributes)
    }

    pub fn set_sec_class(&mut self, class: SecClass) {
        self.put(&keys::SEC_CLASS, AttrValue::Ref(CfType::from(class.marker().clone())));
    }

    /// Set a text attribute; an empty string removes it.
    pub fn set_string(&mut self, key: &AttributeKey, s: &str) {
        if s.is_empty() {
            self.remove(key);
        } else {
            self.put(key, AttrValue::Text(s.to_string()));
        }
    }

    /// Set an integer attribute; zero removes it.
    pub fn set_int32(&mut self, key: &AttributeKey, n: i32) {
        if n == 0 {
            self.remove(key);
        } else {
            self.put(key, AttrValue::Int32(n));
        }
    }

    /// Set a boolean attribute. Both values are stored.
    pub fn set_bool(&mut self, key: &AttributeKey, b: bool) {
        self.put(key, AttrValue::Bool(b));
    }

    /// Pass an existing external handle through unchanged.
    pub fn set_ref(&mut self, key: &AttributeKey, handle: CfType) {
        self.put(key, AttrValue::Ref(handle));
    }

    pub fn set_convertible(&mut self, key: &AttributeKey, value: Arc<dyn ToExternal>) {
        self.put(key, AttrValue::Convertible(value));
    }

    pub fn set_service(&mut self, s: &str) {
        self.set_string(&keys::SERVICE, s);
    }

    pub fn set_server(&mut self, s: &str) {
        self.set_string(&keys::SERVER, s);
    }

    /// Four-character protocol code, e.g. `"htps"` or `"smb "`.
    pub fn set_protocol(&mut self, s: &str) {
        self.set_string(&keys::PROTOCOL, s);
    }

    pub fn set_authentication_type(&mut self, s: &str) {
        self.set_string(&keys::AUTHENTICATION_TYPE, s);
    }

    pub fn set_port(&mut self, port: i32) {
        self.set_int32(&keys::PORT, port);
    }

    pub fn set_path(&mut self, s: &str) {
        self.set_string(&keys::PATH, s);
    }

    pub fn set_account(&mut self, s: &str) {
        self.set_string(&keys::ACCOUNT, s);
    }

    pub fn set_label(&mut self, s: &str) {
        self.set_string(&keys::LABEL, s);
    }

    pub fn set_description(&mut self, s: &str) {
        self.set_string(&keys::DESCRIPTION, s);
    }

    pub fn set_comment(&mut self, s: &str) {
        self.set_string(&keys::COMMENT, s);
    }

    pub fn set_access_group(&mut self, s: &str) {
        self.set_string(&keys::ACCESS_GROUP, s);
    }

    /// Set the secret payload. `None` removes it; an empty slice is stored
    /// as a zero-length buffer.
    pub fn set_data(&mut self, data: Option<&[u8]>) {
        match data {
            Some(bytes) => self.put(&keys::DATA, AttrValue::Bytes(bytes.to_vec())),
            None => {
                self.remove(&keys::DATA);
            }
        }
    }

    pub fn set_synchronizable(&mut self, sync: Synchronizable) {
        self.put_or_remove(&keys::SYNCHRONIZABLE, sync.sentinel());
    }

    pub fn set_accessible(&mut self, accessible: Accessible) {
        let sentinel = accessible.sentinel().map(|s| CfType::from(s.clone()));
        self.put_or_remove(&keys::ACCESSIBLE, sentinel);
    }

    pub fn set_match_limit(&mut self, limit: MatchLimit) {
        let sentinel = limit.sentinel().map(|s| CfType::from(s.clone()));
        self.put_or_remove(&keys::MATCH_LIMIT, sentinel);
    }

    pub fn set_return_attributes(&mut self, b: bool) {
        self.set_bool(&keys::RETURN_ATTRIBUTES, b);
    }

    pub fn set_return_data(&mut self, b: bool) {
        self.set_bool(&keys::RETURN_DATA, b);
    }

    pub fn set_return_ref(&mut self, b: bool) {
        self.set_bool(&keys::RETURN_REF, b);
    }
}

/// A generic password item.
pub fn new_generic_password(
    service: &str,
    account: &str,
    label: &str,
    data: &[u8],
    access_group: &str,
) -> Item {
    let mut item = Item::new();
    item.set_sec_class(SecClass::GenericPassword);
    item.set_service(service);
    item.set_account(account);
    item.set_label(label);
    item.set_data(Some(data));
    item.set_access_group(access_group);
    item
}
