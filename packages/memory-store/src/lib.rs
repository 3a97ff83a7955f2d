//! An in-process implementation of the secure-item store verbs.
//!
//! Used by tests and by callers that want the keychain API without a system
//! keychain behind it.

pub mod in_memory;

pub use in_memory::MemoryKeychain;
