//! The attribute dictionary builder.

use keychain_cf::{CfDictionary, CfType};

use crate::bridge::{attr_to_cf, string_to_cf};
use crate::{Attributes, Error};

/// Build the external dictionary for an attribute map in one call.
///
/// Every key and value is converted first; the dictionary then retains them
/// and the builder's own handles are released. If any conversion fails the
/// whole build fails and every handle converted so far is released; no
/// partial dictionary escapes.
///
/// The returned dictionary is owned by the caller and does not borrow from
/// `attributes`.
pub fn build_dictionary(attributes: &Attributes) -> Result<CfDictionary, Error> {
    let mut pairs: Vec<(CfType, CfType)> = Vec::with_capacity(attributes.len());

    for (key, value) in attributes {
        let value_ref = attr_to_cf(value)?;
        let key_ref = string_to_cf(key)?;
        pairs.push((CfType::from(key_ref), value_ref));
    }

    let dict = CfDictionary::from_pairs(&pairs);
    log::trace!("built attribute dictionary with {} entries", dict.len());
    Ok(dict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use keychain_cf::{CfString, SEC_CLASS, SEC_CLASS_GENERIC_PASSWORD};

    use crate::{AttrValue, ToExternal};

    fn attrs(pairs: Vec<(&str, AttrValue)>) -> Attributes {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    /// Converts to a string and keeps its own handle so tests can watch it.
    #[derive(Debug, Default)]
    struct Probe {
        made: Mutex<Option<CfType>>,
    }

    impl ToExternal for Probe {
        fn to_external(&self) -> Result<CfType, Error> {
            let handle = CfType::from(CfString::new("probe"));
            if let Ok(mut made) = self.made.lock() {
                *made = Some(handle.clone());
            }
            Ok(handle)
        }
    }

    #[derive(Debug)]
    struct Failing;

    impl ToExternal for Failing {
        fn to_external(&self) -> Result<CfType, Error> {
            Err(Error::conversion("refused"))
        }
    }

    #[test]
    fn builds_every_branch() {
        let class = CfType::from(SEC_CLASS_GENERIC_PASSWORD.clone());
        let map = attrs(vec![
            (SEC_CLASS.as_str(), AttrValue::Ref(class.clone())),
            ("svce", AttrValue::from("svc")),
            ("v_Data", AttrValue::from(vec![1u8, 2])),
            ("port", AttrValue::from(8080)),
            ("r_Data", AttrValue::from(true)),
        ]);

        let dict = build_dictionary(&map).unwrap();
        assert_eq!(dict.len(), 5);

        let get = |k: &str| dict.find(&CfString::new(k)).cloned();
        assert!(get("class").unwrap().same_object(&class));
        assert_eq!(get("svce").unwrap().as_string().unwrap().as_str(), "svc");
        assert_eq!(get("v_Data").unwrap().as_data().unwrap().bytes(), &[1, 2]);
        assert_eq!(get("port").unwrap().as_number().unwrap().to_i64(), 8080);
        assert!(get("r_Data").unwrap().as_boolean().unwrap().value());
    }

    #[test]
    fn empty_map_yields_empty_dictionary() {
        let dict = build_dictionary(&Attributes::new()).unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn dictionary_is_sole_owner_of_fresh_conversions() {
        let map = attrs(vec![("acct", AttrValue::from("alice"))]);
        let dict = build_dictionary(&map).unwrap();

        let (key, value) = dict.iter().next().unwrap();
        assert_eq!(key.retain_count(), 1);
        assert_eq!(value.retain_count(), 1);
    }

    #[test]
    fn passed_through_handles_are_retained_not_copied() {
        let handle = CfType::from(CfString::new("shared"));
        let map = attrs(vec![("labl", AttrValue::Ref(handle.clone()))]);
        // One for `handle`, one for the attribute map.
        assert_eq!(handle.retain_count(), 2);

        let dict = build_dictionary(&map).unwrap();
        assert_eq!(handle.retain_count(), 3);

        drop(dict);
        assert_eq!(handle.retain_count(), 2);
    }

    #[test]
    fn failure_releases_everything_converted() {
        let probe = Arc::new(Probe::default());
        let map = attrs(vec![
            ("a", AttrValue::Convertible(probe.clone())),
            ("b", AttrValue::Convertible(Arc::new(Failing))),
            ("c", AttrValue::from("text")),
        ]);

        let err = build_dictionary(&map).unwrap_err();
        assert_eq!(err, Error::conversion("refused"));

        // Whether or not the probe ran before the failure, nothing but the
        // probe itself may still hold what it produced.
        let made = probe.made.lock().unwrap();
        if let Some(handle) = made.as_ref() {
            assert_eq!(handle.retain_count(), 1);
        }
    }

    #[test]
    fn building_twice_gives_independent_equal_dictionaries() {
        let map = attrs(vec![
            ("svce", AttrValue::from("svc")),
            ("acct", AttrValue::from("acct")),
        ]);

        let first = build_dictionary(&map).unwrap();
        let second = build_dictionary(&map).unwrap();
        assert_eq!(first, second);
        assert!(!first.same_object(&second));

        drop(first);
        assert_eq!(second.len(), 2);
        assert_eq!(
            second
                .find(&CfString::new("svce"))
                .and_then(|v| v.as_string())
                .map(|s| s.as_str()),
            Some("svc")
        );
    }
}
