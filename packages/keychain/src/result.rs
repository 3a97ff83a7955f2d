//! Normalizing query responses into [`QueryResult`] records.

use chrono::{DateTime, Utc};
use keychain_cf::{CfDictionary, CfType};
use keychain_core::bridge::{cf_to_bytes, cf_to_date, convert};
use keychain_core::{Error, Value};

use crate::keys;

/// Every attribute a query may return.
///
/// Which fields are populated depends on the item class and the return
/// flags of the query; the rest keep their zero value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryResult {
    /// Generic password items.
    pub service: String,

    // Internet password items.
    pub server: String,
    pub protocol: String,
    pub authentication_type: String,
    pub port: i32,
    pub path: String,

    pub account: String,
    pub access_group: String,
    pub label: String,
    pub description: String,
    pub comment: String,
    pub data: Option<Vec<u8>>,
    pub creation_date: Option<DateTime<Utc>>,
    pub modification_date: Option<DateTime<Utc>>,
}

/// Interpret a query response by its runtime type.
///
/// - an array must hold only dictionaries, one record each
/// - a dictionary is one record
/// - raw data is one record with only `data` set
pub fn map_response(response: &CfType) -> Result<Vec<QueryResult>, Error> {
    log::trace!("mapping {} response", response.type_description());

    match response {
        CfType::Array(array) => {
            let mut results = Vec::with_capacity(array.len());
            for element in array.iter() {
                let dict = element.as_dictionary().ok_or_else(|| {
                    Error::shape(format!(
                        "array element is {}, not a dictionary \
                         (use query_item_ref when returning references)",
                        element.type_description()
                    ))
                })?;
                results.push(convert_result(dict)?);
            }
            Ok(results)
        }
        CfType::Dictionary(dict) => Ok(vec![convert_result(dict)?]),
        CfType::Data(data) => Ok(vec![QueryResult {
            data: Some(cf_to_bytes(data)),
            ..QueryResult::default()
        }]),
        other => Err(Error::shape(format!(
            "invalid result type: {}",
            other.type_description()
        ))),
    }
}

/// Decode one attribute dictionary. Unknown keys are ignored.
pub fn convert_result(dict: &CfDictionary) -> Result<QueryResult, Error> {
    let mut result = QueryResult::default();

    for (key, value) in dict.iter() {
        let Some(key) = key.as_string() else {
            continue;
        };
        let key = key.as_str();

        if key == keys::SERVICE.as_str() {
            result.service = decode_text(key, value)?;
        } else if key == keys::SERVER.as_str() {
            result.server = decode_text(key, value)?;
        } else if key == keys::PROTOCOL.as_str() {
            result.protocol = decode_text(key, value)?;
        } else if key == keys::AUTHENTICATION_TYPE.as_str() {
            result.authentication_type = decode_text(key, value)?;
        } else if key == keys::PORT.as_str() {
            let decoded = convert(value)?;
            result.port = decoded
                .as_i32()
                .ok_or_else(|| Error::type_mismatch(key, "i32", decoded.type_name()))?;
        } else if key == keys::PATH.as_str() {
            result.path = decode_text(key, value)?;
        } else if key == keys::ACCOUNT.as_str() {
            result.account = decode_text(key, value)?;
        } else if key == keys::ACCESS_GROUP.as_str() {
            result.access_group = decode_text(key, value)?;
        } else if key == keys::LABEL.as_str() {
            result.label = decode_text(key, value)?;
        } else if key == keys::DESCRIPTION.as_str() {
            result.description = decode_text(key, value)?;
        } else if key == keys::COMMENT.as_str() {
            result.comment = decode_text(key, value)?;
        } else if key == keys::DATA.as_str() {
            let data = value
                .as_data()
                .ok_or_else(|| Error::type_mismatch(key, "bytes", value.type_description()))?;
            result.data = Some(cf_to_bytes(data));
        } else if key == keys::CREATION_DATE.as_str() {
            result.creation_date = Some(decode_date(key, value)?);
        } else if key == keys::MODIFICATION_DATE.as_str() {
            result.modification_date = Some(decode_date(key, value)?);
        }
    }

    Ok(result)
}

fn decode_text(field: &str, value: &CfType) -> Result<String, Error> {
    match convert(value)? {
        Value::String(s) => Ok(s),
        other => Err(Error::type_mismatch(field, "string", other.type_name())),
    }
}

fn decode_date(field: &str, value: &CfType) -> Result<DateTime<Utc>, Error> {
    let date = value
        .as_date()
        .ok_or_else(|| Error::type_mismatch(field, "date", value.type_description()))?;
    cf_to_date(date)
}
