//! Keychain CF: External Value Handles
//!
//! This is the narrow waist of the keychain stack. Everything at this level is
//! a raw, reference-counted, type-tagged handle - no attribute semantics, no
//! native conversions, no error interpretation.
//!
//! - `CfType`: a handle to any external value, dispatched on its runtime tag
//! - `CfString`, `CfData`, `CfNumber`, `CfBoolean`, `CfDate`: leaf values
//! - `CfDictionary`, `CfArray`: containers that retain what is put in them
//! - `OsStatus`: raw store result codes
//! - `SecItemStore`: the add / update / delete / copy-matching verbs
//!
//! Cloning a handle retains the object and dropping it releases it, so every
//! exit path of a conversion releases whatever it created.
//!
//! # Example
//!
//! ```rust
//! use keychain_cf::{CfDictionary, CfString, CfType, SEC_ATTR_SERVICE};
//!
//! let dict = CfDictionary::from_pairs(&[(
//!     CfType::from(SEC_ATTR_SERVICE.clone()),
//!     CfType::from(CfString::new("example.com")),
//! )]);
//! assert_eq!(dict.len(), 1);
//! ```

pub use bytes::Bytes;

mod collection;
pub mod constants;
mod number;
mod scalar;
mod status;
mod traits;
mod types;

pub use collection::{CfArray, CfDictionary};
pub use constants::*;
pub use number::{CfNumber, CfNumberType, NumberValue};
pub use scalar::{CfBoolean, CfData, CfDate, CfString, ABSOLUTE_TIME_INTERVAL_SINCE_1970};
pub use status::OsStatus;
pub use traits::SecItemStore;
pub use types::{CfOpaque, CfType, CfTypeId};
