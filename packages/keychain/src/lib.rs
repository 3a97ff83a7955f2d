//! Keychain: attribute-based access to a secure-item store
//!
//! The top of the keychain stack:
//! - `Item`: typed builder for records, query filters and delete selectors
//! - `Keychain`: add / update / delete / query over any `SecItemStore`
//! - `QueryResult`: one decoded record of a query response
//! - `keys`: the canonical attribute keys
//!
//! # Example
//!
//! ```rust
//! use keychain::{new_generic_password, Item, Keychain, MatchLimit, SecClass};
//! use keychain_memory_store::MemoryKeychain;
//!
//! let mut keychain = Keychain::new(MemoryKeychain::new());
//! keychain
//!     .add_item(&new_generic_password("svc", "alice", "", b"secret", ""))
//!     .unwrap();
//!
//! let mut query = Item::new();
//! query.set_sec_class(SecClass::GenericPassword);
//! query.set_service("svc");
//! query.set_match_limit(MatchLimit::All);
//! query.set_return_attributes(true);
//!
//! let results = keychain.query_item(&query).unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].account, "alice");
//! ```

mod item;
pub mod keys;
mod keychain;
mod options;
mod result;

pub use item::{new_generic_password, Item};
pub use keychain::Keychain;
pub use keys::AttributeKey;
pub use options::{Accessible, KeychainOptions, MatchLimit, SecClass, Synchronizable};
pub use result::{convert_result, map_response, QueryResult};

pub use keychain_core::{AttrValue, Error, StatusError, StatusKind, ToExternal};
