//! Error types for the keychain stack.

use std::fmt;

use keychain_cf::OsStatus;

/// Closed classification of store result codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusKind {
    DuplicateItem,
    ItemNotFound,
    AuthFailed,
    InteractionNotAllowed,
    Decode,
    NoSuchKeychain,
    ReadOnly,
    InvalidReference,
    UserCanceled,
    /// Any other non-success code.
    Other,
}

impl StatusKind {
    pub fn from_status(status: OsStatus) -> Self {
        match status {
            OsStatus::DUPLICATE_ITEM => StatusKind::DuplicateItem,
            OsStatus::ITEM_NOT_FOUND => StatusKind::ItemNotFound,
            OsStatus::AUTH_FAILED => StatusKind::AuthFailed,
            OsStatus::INTERACTION_NOT_ALLOWED => StatusKind::InteractionNotAllowed,
            OsStatus::DECODE => StatusKind::Decode,
            OsStatus::NO_SUCH_KEYCHAIN => StatusKind::NoSuchKeychain,
            OsStatus::READ_ONLY | OsStatus::READ_ONLY_ATTR => StatusKind::ReadOnly,
            OsStatus::INVALID_ITEM_REF | OsStatus::INVALID_SEARCH_REF => {
                StatusKind::InvalidReference
            }
            OsStatus::USER_CANCELED => StatusKind::UserCanceled,
            _ => StatusKind::Other,
        }
    }
}

/// Human-readable message for a store result code.
pub fn status_message(status: OsStatus) -> &'static str {
    match status {
        OsStatus::UNIMPLEMENTED => "Function or operation not implemented.",
        OsStatus::PARAM => "One or more parameters passed to the function were not valid.",
        OsStatus::ALLOCATE => "Failed to allocate memory.",
        OsStatus::NOT_AVAILABLE => {
            "No keychain is available. You may need to restart your computer."
        }
        OsStatus::AUTH_FAILED => "The user name or passphrase you entered is not correct.",
        OsStatus::DUPLICATE_ITEM => "The specified item already exists in the keychain.",
        OsStatus::ITEM_NOT_FOUND => "The specified item could not be found in the keychain.",
        OsStatus::INTERACTION_NOT_ALLOWED => "User interaction is not allowed.",
        OsStatus::DECODE => "Unable to decode the provided data.",
        OsStatus::NO_SUCH_KEYCHAIN => "The specified keychain could not be found.",
        OsStatus::NO_ACCESS_FOR_ITEM => "The specified item has no access control.",
        OsStatus::READ_ONLY => "Read-only error.",
        OsStatus::READ_ONLY_ATTR => "The attribute is read-only.",
        OsStatus::INVALID_KEYCHAIN => "The keychain is not valid.",
        OsStatus::DUPLICATE_KEYCHAIN => "A keychain with the same name already exists.",
        OsStatus::WRONG_SEC_VERSION => "The version is incorrect.",
        OsStatus::INVALID_ITEM_REF => "The item reference is invalid.",
        OsStatus::INVALID_SEARCH_REF => "The search reference is invalid.",
        OsStatus::DATA_NOT_AVAILABLE => "The data is not available.",
        OsStatus::DATA_NOT_MODIFIABLE => "The data is not modifiable.",
        OsStatus::INVALID_OWNER_EDIT => "An invalid attempt to change the owner of an item.",
        OsStatus::USER_CANCELED => "User canceled the operation.",
        _ => "Keychain Error.",
    }
}

/// A non-success result reported by the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusError {
    pub kind: StatusKind,
    pub status: OsStatus,
}

impl StatusError {
    pub fn message(&self) -> &'static str {
        status_message(self.status)
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.status.code())
    }
}

impl std::error::Error for StatusError {}

impl From<OsStatus> for StatusError {
    fn from(status: OsStatus) -> Self {
        StatusError {
            kind: StatusKind::from_status(status),
            status,
        }
    }
}

/// Errors of the keychain stack.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Native input rejected before conversion; it never reaches the store.
    #[error("invalid input: {message}")]
    Validation { message: String },

    /// A bridge step failed.
    #[error("conversion failed: {message}")]
    Conversion { message: String },

    /// An external value carried a type tag the bridge does not decode.
    #[error("unsupported type: {description}")]
    UnsupportedType { description: String },

    /// A decoded value does not have the native type its field expects.
    #[error("type mismatch for {field}: expected {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: String,
    },

    /// The store returned a non-success status.
    #[error(transparent)]
    Status(#[from] StatusError),

    /// The response's runtime type does not fit the requested return flags.
    #[error("unexpected response shape: {message}")]
    Shape { message: String },

    /// A single-result lookup matched more than one item.
    #[error("ambiguous result: expected at most one item, found {count}")]
    Ambiguous { count: usize },
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Error::Conversion {
            message: message.into(),
        }
    }

    pub fn unsupported_type(description: impl Into<String>) -> Self {
        Error::UnsupportedType {
            description: description.into(),
        }
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Error::TypeMismatch {
            field: field.into(),
            expected,
            found: found.into(),
        }
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Error::Shape {
            message: message.into(),
        }
    }

    /// The status kind, if this error came from the store.
    pub fn status_kind(&self) -> Option<StatusKind> {
        match self {
            Error::Status(e) => Some(e.kind),
            _ => None,
        }
    }
}

impl From<OsStatus> for Error {
    fn from(status: OsStatus) -> Self {
        Error::Status(StatusError::from(status))
    }
}
