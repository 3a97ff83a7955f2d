//! Enumerated item options and the store sentinels they map to.

use keychain_cf::{CfBoolean, CfString, CfType};
use keychain_core::Error;
use serde::{Deserialize, Serialize};

/// The schema of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecClass {
    GenericPassword,
    InternetPassword,
    Certificate,
    KeyPair,
}

impl SecClass {
    /// The store's class marker for this schema.
    pub fn marker(self) -> &'static CfString {
        match self {
            SecClass::GenericPassword => &*keychain_cf::SEC_CLASS_GENERIC_PASSWORD,
            SecClass::InternetPassword => &*keychain_cf::SEC_CLASS_INTERNET_PASSWORD,
            SecClass::Certificate => &*keychain_cf::SEC_CLASS_CERTIFICATE,
            SecClass::KeyPair => &*keychain_cf::SEC_CLASS_KEY,
        }
    }
}

/// Whether an item is synchronized across devices.
///
/// `Default` omits the attribute; the store then only considers items that
/// are not synchronized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Synchronizable {
    #[default]
    Default,
    Any,
    Yes,
    No,
}

impl Synchronizable {
    pub fn sentinel(self) -> Option<CfType> {
        match self {
            Synchronizable::Default => None,
            Synchronizable::Any => Some(CfType::from(
                keychain_cf::SEC_ATTR_SYNCHRONIZABLE_ANY.clone(),
            )),
            Synchronizable::Yes => Some(CfType::from(CfBoolean::true_value())),
            Synchronizable::No => Some(CfType::from(CfBoolean::false_value())),
        }
    }
}

/// When an item's data may be read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accessible {
    #[default]
    Default,
    WhenUnlocked,
    AfterFirstUnlock,
    Always,
    WhenPasscodeSetThisDeviceOnly,
    WhenUnlockedThisDeviceOnly,
    AfterFirstUnlockThisDeviceOnly,
    AlwaysThisDeviceOnly,
}

impl Accessible {
    pub fn sentinel(self) -> Option<&'static CfString> {
        let marker: &'static CfString = match self {
            Accessible::Default => return None,
            Accessible::WhenUnlocked => &*keychain_cf::SEC_ATTR_ACCESSIBLE_WHEN_UNLOCKED,
            Accessible::AfterFirstUnlock => {
                &*keychain_cf::SEC_ATTR_ACCESSIBLE_AFTER_FIRST_UNLOCK
            }
            Accessible::Always => &*keychain_cf::SEC_ATTR_ACCESSIBLE_ALWAYS,
            Accessible::WhenPasscodeSetThisDeviceOnly => {
                &*keychain_cf::SEC_ATTR_ACCESSIBLE_WHEN_PASSCODE_SET_THIS_DEVICE_ONLY
            }
            Accessible::WhenUnlockedThisDeviceOnly => {
                &*keychain_cf::SEC_ATTR_ACCESSIBLE_WHEN_UNLOCKED_THIS_DEVICE_ONLY
            }
            Accessible::AfterFirstUnlockThisDeviceOnly => {
                &*keychain_cf::SEC_ATTR_ACCESSIBLE_AFTER_FIRST_UNLOCK_THIS_DEVICE_ONLY
            }
            Accessible::AlwaysThisDeviceOnly => {
                &*keychain_cf::SEC_ATTR_ACCESSIBLE_ALWAYS_THIS_DEVICE_ONLY
            }
        };
        Some(marker)
    }
}

/// How many matches a query returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchLimit {
    #[default]
    Default,
    One,
    All,
}

impl MatchLimit {
    pub fn sentinel(self) -> Option<&'static CfString> {
        match self {
            MatchLimit::Default => None,
            MatchLimit::One => Some(&*keychain_cf::SEC_MATCH_LIMIT_ONE),
            MatchLimit::All => Some(&*keychain_cf::SEC_MATCH_LIMIT_ALL),
        }
    }
}

/// Defaults applied by the convenience methods of [`crate::Keychain`].
///
/// ```rust
/// use keychain::{Accessible, KeychainOptions};
///
/// let options = KeychainOptions::from_json(
///     r#"{ "access-group": "team.shared", "accessible": "after-first-unlock" }"#,
/// ).unwrap();
/// assert_eq!(options.access_group.as_deref(), Some("team.shared"));
/// assert_eq!(options.accessible, Accessible::AfterFirstUnlock);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct KeychainOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_group: Option<String>,
    pub synchronizable: Synchronizable,
    pub accessible: Accessible,
}

impl KeychainOptions {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json)
            .map_err(|e| Error::validation(format!("invalid keychain options: {}", e)))
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self)
            .map_err(|e| Error::conversion(format!("cannot encode keychain options: {}", e)))
    }
}
