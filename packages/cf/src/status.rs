//! Raw result codes returned by the store verbs.

use std::fmt;

/// A store result code. Zero is success; every other value is a failure.
///
/// The code is opaque at this layer. Higher layers map it to an error kind
/// and a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OsStatus(pub i32);

impl OsStatus {
    pub const SUCCESS: OsStatus = OsStatus(0);
    pub const UNIMPLEMENTED: OsStatus = OsStatus(-4);
    pub const PARAM: OsStatus = OsStatus(-50);
    pub const ALLOCATE: OsStatus = OsStatus(-108);
    pub const USER_CANCELED: OsStatus = OsStatus(-128);
    pub const NOT_AVAILABLE: OsStatus = OsStatus(-25291);
    pub const READ_ONLY: OsStatus = OsStatus(-25292);
    pub const AUTH_FAILED: OsStatus = OsStatus(-25293);
    pub const NO_SUCH_KEYCHAIN: OsStatus = OsStatus(-25294);
    pub const INVALID_KEYCHAIN: OsStatus = OsStatus(-25295);
    pub const DUPLICATE_KEYCHAIN: OsStatus = OsStatus(-25296);
    pub const DUPLICATE_ITEM: OsStatus = OsStatus(-25299);
    pub const ITEM_NOT_FOUND: OsStatus = OsStatus(-25300);
    pub const INVALID_ITEM_REF: OsStatus = OsStatus(-25304);
    pub const INVALID_SEARCH_REF: OsStatus = OsStatus(-25305);
    pub const INTERACTION_NOT_ALLOWED: OsStatus = OsStatus(-25308);
    pub const READ_ONLY_ATTR: OsStatus = OsStatus(-25309);
    pub const WRONG_SEC_VERSION: OsStatus = OsStatus(-25310);
    pub const DATA_NOT_AVAILABLE: OsStatus = OsStatus(-25316);
    pub const DATA_NOT_MODIFIABLE: OsStatus = OsStatus(-25317);
    pub const NO_ACCESS_FOR_ITEM: OsStatus = OsStatus(-25243);
    pub const INVALID_OWNER_EDIT: OsStatus = OsStatus(-25244);
    pub const DECODE: OsStatus = OsStatus(-26275);

    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }

    pub fn code(self) -> i32 {
        self.0
    }

    /// `Ok(())` for success, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), OsStatus> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for OsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status {}", self.0)
    }
}
