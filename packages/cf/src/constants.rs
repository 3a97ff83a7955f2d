//! Well-known constant references of the secure-item store.
//!
//! These are the handles the store's client library exports for attribute
//! keys, item class markers and query sentinels. They are created once, on
//! first use, and shared for the life of the process.

use lazy_static::lazy_static;

use crate::CfString;

lazy_static! {
    // Item class.
    pub static ref SEC_CLASS: CfString = CfString::new("class");
    pub static ref SEC_CLASS_GENERIC_PASSWORD: CfString = CfString::new("genp");
    pub static ref SEC_CLASS_INTERNET_PASSWORD: CfString = CfString::new("inet");
    pub static ref SEC_CLASS_CERTIFICATE: CfString = CfString::new("cert");
    pub static ref SEC_CLASS_KEY: CfString = CfString::new("keys");

    // Item attributes.
    pub static ref SEC_ATTR_SERVICE: CfString = CfString::new("svce");
    pub static ref SEC_ATTR_SERVER: CfString = CfString::new("srvr");
    pub static ref SEC_ATTR_PROTOCOL: CfString = CfString::new("ptcl");
    pub static ref SEC_ATTR_AUTHENTICATION_TYPE: CfString = CfString::new("atyp");
    pub static ref SEC_ATTR_PORT: CfString = CfString::new("port");
    pub static ref SEC_ATTR_PATH: CfString = CfString::new("path");
    pub static ref SEC_ATTR_LABEL: CfString = CfString::new("labl");
    pub static ref SEC_ATTR_ACCOUNT: CfString = CfString::new("acct");
    pub static ref SEC_ATTR_ACCESS_GROUP: CfString = CfString::new("agrp");
    pub static ref SEC_ATTR_DESCRIPTION: CfString = CfString::new("desc");
    pub static ref SEC_ATTR_COMMENT: CfString = CfString::new("icmt");
    pub static ref SEC_ATTR_CREATION_DATE: CfString = CfString::new("cdat");
    pub static ref SEC_ATTR_MODIFICATION_DATE: CfString = CfString::new("mdat");

    // Synchronization.
    pub static ref SEC_ATTR_SYNCHRONIZABLE: CfString = CfString::new("sync");
    pub static ref SEC_ATTR_SYNCHRONIZABLE_ANY: CfString = CfString::new("syna");

    // Accessibility.
    pub static ref SEC_ATTR_ACCESSIBLE: CfString = CfString::new("pdmn");
    pub static ref SEC_ATTR_ACCESSIBLE_WHEN_UNLOCKED: CfString = CfString::new("ak");
    pub static ref SEC_ATTR_ACCESSIBLE_AFTER_FIRST_UNLOCK: CfString = CfString::new("ck");
    pub static ref SEC_ATTR_ACCESSIBLE_ALWAYS: CfString = CfString::new("dk");
    pub static ref SEC_ATTR_ACCESSIBLE_WHEN_PASSCODE_SET_THIS_DEVICE_ONLY: CfString =
        CfString::new("akpu");
    pub static ref SEC_ATTR_ACCESSIBLE_WHEN_UNLOCKED_THIS_DEVICE_ONLY: CfString =
        CfString::new("aku");
    pub static ref SEC_ATTR_ACCESSIBLE_AFTER_FIRST_UNLOCK_THIS_DEVICE_ONLY: CfString =
        CfString::new("cku");
    pub static ref SEC_ATTR_ACCESSIBLE_ALWAYS_THIS_DEVICE_ONLY: CfString = CfString::new("dku");

    // Item payload.
    pub static ref SEC_VALUE_DATA: CfString = CfString::new("v_Data");
    pub static ref SEC_VALUE_REF: CfString = CfString::new("v_Ref");

    // Search and return flags.
    pub static ref SEC_MATCH_LIMIT: CfString = CfString::new("m_Limit");
    pub static ref SEC_MATCH_LIMIT_ONE: CfString = CfString::new("m_LimitOne");
    pub static ref SEC_MATCH_LIMIT_ALL: CfString = CfString::new("m_LimitAll");
    pub static ref SEC_RETURN_ATTRIBUTES: CfString = CfString::new("r_Attributes");
    pub static ref SEC_RETURN_DATA: CfString = CfString::new("r_Data");
    pub static ref SEC_RETURN_REF: CfString = CfString::new("r_Ref");
}

/// Keys that steer a search or the response shape rather than describe an item.
pub fn is_search_key(key: &CfString) -> bool {
    key == &*SEC_MATCH_LIMIT
        || key == &*SEC_RETURN_ATTRIBUTES
        || key == &*SEC_RETURN_DATA
        || key == &*SEC_RETURN_REF
}
