//! Keychain Core: the Value Bridge
//!
//! This layer gives meaning to the raw handles of `keychain-cf`:
//! - `AttrValue`: a native attribute value on its way to the store
//! - `Value`: a native value decoded from a store response
//! - `bridge`: conversions in both directions, dispatched on runtime type tags
//! - `build_dictionary`: one-call conversion of an attribute map
//! - `Error`: the closed error enumeration of the stack
//!
//! # Example
//!
//! ```rust
//! use keychain_core::{build_dictionary, bridge, AttrValue, Attributes, Value};
//! use keychain_cf::CfType;
//!
//! let mut attrs = Attributes::new();
//! attrs.insert("acct".to_string(), AttrValue::from("alice"));
//!
//! let dict = build_dictionary(&attrs).unwrap();
//! let back = bridge::convert(&CfType::from(dict)).unwrap();
//! assert_eq!(back.get("acct"), Some(&Value::from("alice")));
//! ```

mod attribute;
pub mod bridge;
mod dictionary;
mod error;
mod value;

pub use attribute::{AttrValue, Attributes, ToExternal};
pub use dictionary::build_dictionary;
pub use error::{status_message, Error, StatusError, StatusKind};
pub use value::Value;

// Re-export the handle layer for convenience
pub use keychain_cf::{CfDictionary, CfType, OsStatus, SecItemStore};
