//! In-memory secure-item store.

use keychain_cf::{
    is_search_key, Bytes, CfArray, CfData, CfDate, CfDictionary, CfOpaque, CfString, CfType,
    OsStatus, SecItemStore, SEC_ATTR_ACCESS_GROUP, SEC_ATTR_ACCOUNT,
    SEC_ATTR_AUTHENTICATION_TYPE, SEC_ATTR_CREATION_DATE, SEC_ATTR_LABEL,
    SEC_ATTR_MODIFICATION_DATE, SEC_ATTR_PATH, SEC_ATTR_PORT, SEC_ATTR_PROTOCOL,
    SEC_ATTR_SERVER, SEC_ATTR_SERVICE, SEC_ATTR_SYNCHRONIZABLE, SEC_ATTR_SYNCHRONIZABLE_ANY,
    SEC_CLASS, SEC_CLASS_CERTIFICATE, SEC_CLASS_GENERIC_PASSWORD, SEC_CLASS_INTERNET_PASSWORD,
    SEC_CLASS_KEY, SEC_MATCH_LIMIT, SEC_MATCH_LIMIT_ALL, SEC_MATCH_LIMIT_ONE,
    SEC_RETURN_ATTRIBUTES, SEC_RETURN_DATA, SEC_RETURN_REF, SEC_VALUE_DATA, SEC_VALUE_REF,
};

/// A secure-item store that keeps items in process memory.
///
/// Follows the store contract: adding an item whose primary attributes
/// collide with an existing one fails with `DUPLICATE_ITEM`; update and
/// delete apply to every match and fail with `ITEM_NOT_FOUND` when nothing
/// matches; searches honour the match limit and return flags.
///
/// # Example
///
/// ```rust
/// use keychain_cf::{CfData, CfDictionary, CfString, CfType, SecItemStore};
/// use keychain_cf::{SEC_ATTR_SERVICE, SEC_CLASS, SEC_CLASS_GENERIC_PASSWORD, SEC_VALUE_DATA};
/// use keychain_memory_store::MemoryKeychain;
///
/// let mut store = MemoryKeychain::new();
/// let item = CfDictionary::from_pairs(&[
///     (CfType::from(SEC_CLASS.clone()), CfType::from(SEC_CLASS_GENERIC_PASSWORD.clone())),
///     (CfType::from(SEC_ATTR_SERVICE.clone()), CfType::from(CfString::new("svc"))),
///     (CfType::from(SEC_VALUE_DATA.clone()), CfType::from(CfData::new(b"secret"))),
/// ]);
/// store.item_add(&item).unwrap();
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryKeychain {
    items: Vec<StoredItem>,
    next_id: u64,
    locked: bool,
}

impl MemoryKeychain {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Refuse every verb with `INTERACTION_NOT_ALLOWED` until unlocked.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    fn check_unlocked(&self) -> Result<(), OsStatus> {
        if self.locked {
            return Err(OsStatus::INTERACTION_NOT_ALLOWED);
        }
        Ok(())
    }
}

impl SecItemStore for MemoryKeychain {
    fn item_add(&mut self, attributes: &CfDictionary) -> Result<(), OsStatus> {
        self.check_unlocked()?;

        let class = item_class(attributes)?;
        let mut item = StoredItem {
            id: self.next_id,
            class,
            attributes: Vec::new(),
            data: None,
        };

        for (key, value) in attributes.iter() {
            let key = string_key(key)?;
            if key == *SEC_CLASS || key == *SEC_VALUE_REF || is_search_key(&key) {
                continue;
            }
            if key == *SEC_VALUE_DATA {
                item.data = Some(value.as_data().cloned().ok_or(OsStatus::PARAM)?);
                continue;
            }
            if key == *SEC_ATTR_SYNCHRONIZABLE && value.as_boolean().is_none() {
                return Err(OsStatus::PARAM);
            }
            item.set(key, value.clone());
        }

        if self.items.iter().any(|other| other.same_identity(&item)) {
            log::debug!("item_add {}: duplicate", item.class.as_str());
            return Err(OsStatus::DUPLICATE_ITEM);
        }

        let now = CfType::from(CfDate::now());
        if item.get(&SEC_ATTR_CREATION_DATE).is_none() {
            item.set(SEC_ATTR_CREATION_DATE.clone(), now.clone());
        }
        if item.get(&SEC_ATTR_MODIFICATION_DATE).is_none() {
            item.set(SEC_ATTR_MODIFICATION_DATE.clone(), now);
        }

        log::debug!("item_add {}: stored as #{}", item.class.as_str(), item.id);
        self.next_id += 1;
        self.items.push(item);
        Ok(())
    }

    fn item_update(
        &mut self,
        query: &CfDictionary,
        changes: &CfDictionary,
    ) -> Result<(), OsStatus> {
        self.check_unlocked()?;

        let search = Search::parse(query)?;
        let changes = Changes::parse(changes)?;

        let matched: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| search.matches(item))
            .map(|(i, _)| i)
            .collect();
        if matched.is_empty() {
            log::debug!("item_update {}: no match", search.class.as_str());
            return Err(OsStatus::ITEM_NOT_FOUND);
        }

        let mut updated = self.items.clone();
        let now = CfType::from(CfDate::now());
        for &i in &matched {
            changes.apply(&mut updated[i]);
            updated[i].set(SEC_ATTR_MODIFICATION_DATE.clone(), now.clone());
        }

        for &i in &matched {
            let candidate = &updated[i];
            if updated
                .iter()
                .any(|other| other.id != candidate.id && other.same_identity(candidate))
            {
                log::debug!("item_update {}: duplicate", search.class.as_str());
                return Err(OsStatus::DUPLICATE_ITEM);
            }
        }

        log::debug!(
            "item_update {}: {} item(s) changed",
            search.class.as_str(),
            matched.len()
        );
        self.items = updated;
        Ok(())
    }

    fn item_delete(&mut self, query: &CfDictionary) -> Result<(), OsStatus> {
        self.check_unlocked()?;

        let search = Search::parse(query)?;
        let before = self.items.len();
        self.items.retain(|item| !search.matches(item));
        let removed = before - self.items.len();

        log::debug!(
            "item_delete {}: {} item(s) removed",
            search.class.as_str(),
            removed
        );
        if removed == 0 {
            return Err(OsStatus::ITEM_NOT_FOUND);
        }
        Ok(())
    }

    fn item_copy_matching(&mut self, query: &CfDictionary) -> Result<Option<CfType>, OsStatus> {
        self.check_unlocked()?;

        let search = Search::parse(query)?;
        let matched: Vec<&StoredItem> = self
            .items
            .iter()
            .filter(|item| search.matches(item))
            .collect();

        log::debug!(
            "item_copy_matching {}: {} match(es)",
            search.class.as_str(),
            matched.len()
        );
        if matched.is_empty() {
            return Err(OsStatus::ITEM_NOT_FOUND);
        }
        if !search.wants_payload() {
            return Ok(None);
        }

        let limit = search.limit.unwrap_or(matched.len());
        let results: Vec<CfType> = matched
            .iter()
            .take(limit)
            .map(|item| search.result_for(item))
            .collect();

        match (search.limit, results.first()) {
            (Some(1), Some(single)) => Ok(Some(single.clone())),
            _ => Ok(Some(CfType::from(CfArray::from_values(&results)))),
        }
    }
}

#[derive(Clone, Debug)]
struct StoredItem {
    id: u64,
    class: CfString,
    attributes: Vec<(CfString, CfType)>,
    data: Option<CfData>,
}

impl StoredItem {
    fn get(&self, key: &CfString) -> Option<&CfType> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn set(&mut self, key: CfString, value: CfType) {
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    fn synchronizable(&self) -> bool {
        self.get(&SEC_ATTR_SYNCHRONIZABLE)
            .and_then(|v| v.as_boolean())
            .map(|b| b.value())
            .unwrap_or(false)
    }

    /// Two items collide when class, sync state and primary attributes agree.
    fn same_identity(&self, other: &StoredItem) -> bool {
        self.class == other.class
            && self.synchronizable() == other.synchronizable()
            && primary_keys(&self.class)
                .into_iter()
                .all(|key| self.get(key) == other.get(key))
    }

    fn reference(&self) -> CfType {
        CfType::from(CfOpaque::keychain_item(Bytes::copy_from_slice(
            &self.id.to_be_bytes(),
        )))
    }

    fn to_dictionary(&self, attributes: bool, data: bool, reference: bool) -> CfDictionary {
        let mut pairs: Vec<(CfType, CfType)> = Vec::new();
        if attributes {
            pairs.push((
                CfType::from(SEC_CLASS.clone()),
                CfType::from(self.class.clone()),
            ));
            for (k, v) in &self.attributes {
                pairs.push((CfType::from(k.clone()), v.clone()));
            }
        }
        if data {
            pairs.push((
                CfType::from(SEC_VALUE_DATA.clone()),
                CfType::from(self.data.clone().unwrap_or_else(|| CfData::new(&[]))),
            ));
        }
        if reference {
            pairs.push((CfType::from(SEC_VALUE_REF.clone()), self.reference()));
        }
        CfDictionary::from_pairs(&pairs)
    }
}

fn primary_keys(class: &CfString) -> Vec<&'static CfString> {
    if *class == *SEC_CLASS_GENERIC_PASSWORD {
        vec![&*SEC_ATTR_ACCOUNT, &*SEC_ATTR_SERVICE, &*SEC_ATTR_ACCESS_GROUP]
    } else if *class == *SEC_CLASS_INTERNET_PASSWORD {
        vec![
            &*SEC_ATTR_ACCOUNT,
            &*SEC_ATTR_SERVER,
            &*SEC_ATTR_PROTOCOL,
            &*SEC_ATTR_AUTHENTICATION_TYPE,
            &*SEC_ATTR_PORT,
            &*SEC_ATTR_PATH,
            &*SEC_ATTR_ACCESS_GROUP,
        ]
    } else {
        vec![&*SEC_ATTR_LABEL, &*SEC_ATTR_ACCESS_GROUP]
    }
}

fn string_key(key: &CfType) -> Result<CfString, OsStatus> {
    key.as_string().cloned().ok_or(OsStatus::PARAM)
}

fn item_class(dict: &CfDictionary) -> Result<CfString, OsStatus> {
    let class = dict
        .find(&SEC_CLASS)
        .and_then(|v| v.as_string())
        .ok_or(OsStatus::PARAM)?;

    let known = [
        &*SEC_CLASS_GENERIC_PASSWORD,
        &*SEC_CLASS_INTERNET_PASSWORD,
        &*SEC_CLASS_CERTIFICATE,
        &*SEC_CLASS_KEY,
    ];
    if known.contains(&class) {
        Ok(class.clone())
    } else {
        Err(OsStatus::PARAM)
    }
}

fn flag(dict: &CfDictionary, key: &CfString) -> Result<bool, OsStatus> {
    match dict.find(key) {
        None => Ok(false),
        Some(v) => v.as_boolean().map(|b| b.value()).ok_or(OsStatus::PARAM),
    }
}

enum SyncFilter {
    Any,
    Is(bool),
}

/// A parsed search dictionary.
struct Search {
    class: CfString,
    filters: Vec<(CfString, CfType)>,
    sync: SyncFilter,
    /// `None` means no limit.
    limit: Option<usize>,
    return_attributes: bool,
    return_data: bool,
    return_ref: bool,
}

impl Search {
    fn parse(query: &CfDictionary) -> Result<Self, OsStatus> {
        let class = item_class(query)?;

        let mut filters = Vec::new();
        let mut sync = SyncFilter::Is(false);
        for (key, value) in query.iter() {
            let key = string_key(key)?;
            if key == *SEC_CLASS
                || key == *SEC_VALUE_DATA
                || key == *SEC_VALUE_REF
                || is_search_key(&key)
            {
                continue;
            }
            if key == *SEC_ATTR_SYNCHRONIZABLE {
                sync = match value {
                    CfType::String(s) if *s == *SEC_ATTR_SYNCHRONIZABLE_ANY => SyncFilter::Any,
                    CfType::Boolean(b) => SyncFilter::Is(b.value()),
                    _ => return Err(OsStatus::PARAM),
                };
                continue;
            }
            filters.push((key, value.clone()));
        }

        let limit = match query.find(&SEC_MATCH_LIMIT) {
            None => Some(1),
            Some(CfType::String(s)) if *s == *SEC_MATCH_LIMIT_ONE => Some(1),
            Some(CfType::String(s)) if *s == *SEC_MATCH_LIMIT_ALL => None,
            Some(CfType::Number(n)) if n.to_i64() > 0 => Some(n.to_i64() as usize),
            Some(_) => return Err(OsStatus::PARAM),
        };

        Ok(Search {
            class,
            filters,
            sync,
            limit,
            return_attributes: flag(query, &SEC_RETURN_ATTRIBUTES)?,
            return_data: flag(query, &SEC_RETURN_DATA)?,
            return_ref: flag(query, &SEC_RETURN_REF)?,
        })
    }

    fn matches(&self, item: &StoredItem) -> bool {
        if item.class != self.class {
            return false;
        }
        if let SyncFilter::Is(wanted) = self.sync {
            if item.synchronizable() != wanted {
                return false;
            }
        }
        self.filters
            .iter()
            .all(|(key, value)| item.get(key) == Some(value))
    }

    fn wants_payload(&self) -> bool {
        self.return_attributes || self.return_data || self.return_ref
    }

    fn result_for(&self, item: &StoredItem) -> CfType {
        match (self.return_attributes, self.return_data, self.return_ref) {
            (false, true, false) => {
                CfType::from(item.data.clone().unwrap_or_else(|| CfData::new(&[])))
            }
            (false, false, true) => item.reference(),
            (attributes, data, reference) => {
                CfType::from(item.to_dictionary(attributes, data, reference))
            }
        }
    }
}

/// A parsed update dictionary.
struct Changes {
    attributes: Vec<(CfString, CfType)>,
    data: Option<CfData>,
}

impl Changes {
    fn parse(changes: &CfDictionary) -> Result<Self, OsStatus> {
        let mut attributes = Vec::new();
        let mut data = None;
        for (key, value) in changes.iter() {
            let key = string_key(key)?;
            if key == *SEC_CLASS || key == *SEC_VALUE_REF || is_search_key(&key) {
                return Err(OsStatus::PARAM);
            }
            if key == *SEC_VALUE_DATA {
                data = Some(value.as_data().cloned().ok_or(OsStatus::PARAM)?);
                continue;
            }
            if key == *SEC_ATTR_SYNCHRONIZABLE && value.as_boolean().is_none() {
                return Err(OsStatus::PARAM);
            }
            attributes.push((key, value.clone()));
        }
        Ok(Changes { attributes, data })
    }

    fn apply(&self, item: &mut StoredItem) {
        for (key, value) in &self.attributes {
            item.set(key.clone(), value.clone());
        }
        if let Some(data) = &self.data {
            item.data = Some(data.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keychain_cf::{CfBoolean, CfNumber, CfTypeId};

    fn key(k: &CfString) -> CfType {
        CfType::from(k.clone())
    }

    fn text(s: &str) -> CfType {
        CfType::from(CfString::new(s))
    }

    fn generic(service: &str, account: &str, data: &[u8]) -> CfDictionary {
        CfDictionary::from_pairs(&[
            (key(&SEC_CLASS), key(&SEC_CLASS_GENERIC_PASSWORD)),
            (key(&SEC_ATTR_SERVICE), text(service)),
            (key(&SEC_ATTR_ACCOUNT), text(account)),
            (key(&SEC_VALUE_DATA), CfType::from(CfData::new(data))),
        ])
    }

    fn query(service: &str, extra: &[(CfType, CfType)]) -> CfDictionary {
        let mut pairs = vec![
            (key(&SEC_CLASS), key(&SEC_CLASS_GENERIC_PASSWORD)),
            (key(&SEC_ATTR_SERVICE), text(service)),
        ];
        pairs.extend_from_slice(extra);
        CfDictionary::from_pairs(&pairs)
    }

    fn yes() -> CfType {
        CfType::from(CfBoolean::true_value())
    }

    #[test]
    fn add_then_duplicate() {
        let mut store = MemoryKeychain::new();
        store.item_add(&generic("svc", "acct", b"1")).unwrap();
        assert_eq!(
            store.item_add(&generic("svc", "acct", b"2")),
            Err(OsStatus::DUPLICATE_ITEM)
        );
        store.item_add(&generic("svc", "other", b"3")).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn add_requires_a_known_class() {
        let mut store = MemoryKeychain::new();
        let no_class = CfDictionary::from_pairs(&[(key(&SEC_ATTR_SERVICE), text("svc"))]);
        assert_eq!(store.item_add(&no_class), Err(OsStatus::PARAM));

        let bad_class = CfDictionary::from_pairs(&[(key(&SEC_CLASS), text("nope"))]);
        assert_eq!(store.item_add(&bad_class), Err(OsStatus::PARAM));
        assert!(store.is_empty());
    }

    #[test]
    fn query_without_match_is_not_found() {
        let mut store = MemoryKeychain::new();
        assert_eq!(
            store.item_copy_matching(&query("svc", &[])),
            Err(OsStatus::ITEM_NOT_FOUND)
        );
    }

    #[test]
    fn query_without_return_flags_has_no_payload() {
        let mut store = MemoryKeychain::new();
        store.item_add(&generic("svc", "acct", b"1")).unwrap();
        assert_eq!(store.item_copy_matching(&query("svc", &[])), Ok(None));
    }

    #[test]
    fn data_only_single_match_returns_data() {
        let mut store = MemoryKeychain::new();
        store.item_add(&generic("svc", "acct", b"\x01\x02")).unwrap();

        let result = store
            .item_copy_matching(&query("svc", &[(key(&SEC_RETURN_DATA), yes())]))
            .unwrap()
            .unwrap();
        assert_eq!(result.as_data().unwrap().bytes(), b"\x01\x02");
    }

    #[test]
    fn attributes_with_limit_all_return_an_array_of_dictionaries() {
        let mut store = MemoryKeychain::new();
        store.item_add(&generic("svc", "a", b"1")).unwrap();
        store.item_add(&generic("svc", "b", b"2")).unwrap();
        store.item_add(&generic("elsewhere", "c", b"3")).unwrap();

        let result = store
            .item_copy_matching(&query(
                "svc",
                &[
                    (key(&SEC_RETURN_ATTRIBUTES), yes()),
                    (key(&SEC_MATCH_LIMIT), key(&SEC_MATCH_LIMIT_ALL)),
                ],
            ))
            .unwrap()
            .unwrap();

        let array = result.as_array().unwrap();
        assert_eq!(array.len(), 2);
        for element in array.iter() {
            let dict = element.as_dictionary().unwrap();
            assert!(dict.contains_key(&SEC_ATTR_ACCOUNT));
            assert!(dict.contains_key(&SEC_ATTR_CREATION_DATE));
            assert!(!dict.contains_key(&SEC_VALUE_DATA));
        }
    }

    #[test]
    fn reference_only_returns_opaque_item() {
        let mut store = MemoryKeychain::new();
        store.item_add(&generic("svc", "a", b"1")).unwrap();

        let result = store
            .item_copy_matching(&query("svc", &[(key(&SEC_RETURN_REF), yes())]))
            .unwrap()
            .unwrap();
        assert_eq!(result.type_id(), CfTypeId::KEYCHAIN_ITEM);
    }

    #[test]
    fn numeric_limit_caps_results() {
        let mut store = MemoryKeychain::new();
        for account in ["a", "b", "c"] {
            store.item_add(&generic("svc", account, b"x")).unwrap();
        }

        let result = store
            .item_copy_matching(&query(
                "svc",
                &[
                    (key(&SEC_RETURN_ATTRIBUTES), yes()),
                    (key(&SEC_MATCH_LIMIT), CfType::from(CfNumber::from_i32(2))),
                ],
            ))
            .unwrap()
            .unwrap();
        assert_eq!(result.as_array().unwrap().len(), 2);
    }

    #[test]
    fn synchronizable_filtering() {
        let mut store = MemoryKeychain::new();
        let synced = CfDictionary::from_pairs(&[
            (key(&SEC_CLASS), key(&SEC_CLASS_GENERIC_PASSWORD)),
            (key(&SEC_ATTR_SERVICE), text("svc")),
            (key(&SEC_ATTR_ACCOUNT), text("acct")),
            (key(&SEC_ATTR_SYNCHRONIZABLE), yes()),
        ]);
        store.item_add(&synced).unwrap();
        // Same primary attributes but a different sync state is a different item.
        store.item_add(&generic("svc", "acct", b"1")).unwrap();

        let all = |store: &mut MemoryKeychain, sync: Option<CfType>| {
            let mut extra = vec![
                (key(&SEC_RETURN_ATTRIBUTES), yes()),
                (key(&SEC_MATCH_LIMIT), key(&SEC_MATCH_LIMIT_ALL)),
            ];
            if let Some(sync) = sync {
                extra.push((key(&SEC_ATTR_SYNCHRONIZABLE), sync));
            }
            store
                .item_copy_matching(&query("svc", &extra))
                .unwrap()
                .unwrap()
                .as_array()
                .unwrap()
                .len()
        };

        assert_eq!(all(&mut store, None), 1);
        assert_eq!(all(&mut store, Some(yes())), 1);
        assert_eq!(all(&mut store, Some(key(&SEC_ATTR_SYNCHRONIZABLE_ANY))), 2);
    }

    #[test]
    fn update_changes_data_and_attributes() {
        let mut store = MemoryKeychain::new();
        store.item_add(&generic("svc", "acct", b"old")).unwrap();

        let changes = CfDictionary::from_pairs(&[
            (key(&SEC_VALUE_DATA), CfType::from(CfData::new(b"new"))),
            (key(&SEC_ATTR_LABEL), text("label")),
        ]);
        store.item_update(&query("svc", &[]), &changes).unwrap();

        let result = store
            .item_copy_matching(&query(
                "svc",
                &[(key(&SEC_RETURN_DATA), yes()), (key(&SEC_RETURN_ATTRIBUTES), yes())],
            ))
            .unwrap()
            .unwrap();
        let dict = result.as_dictionary().unwrap();
        assert_eq!(
            dict.find(&SEC_VALUE_DATA).unwrap().as_data().unwrap().bytes(),
            b"new"
        );
        assert_eq!(dict.find(&SEC_ATTR_LABEL), Some(&text("label")));
    }

    #[test]
    fn update_without_match_is_not_found() {
        let mut store = MemoryKeychain::new();
        assert_eq!(
            store.item_update(&query("svc", &[]), &CfDictionary::empty()),
            Err(OsStatus::ITEM_NOT_FOUND)
        );
    }

    #[test]
    fn update_into_collision_is_rejected_atomically() {
        let mut store = MemoryKeychain::new();
        store.item_add(&generic("svc", "a", b"1")).unwrap();
        store.item_add(&generic("svc", "b", b"2")).unwrap();

        let selector = query("svc", &[(key(&SEC_ATTR_ACCOUNT), text("b"))]);
        let changes = CfDictionary::from_pairs(&[(key(&SEC_ATTR_ACCOUNT), text("a"))]);
        assert_eq!(
            store.item_update(&selector, &changes),
            Err(OsStatus::DUPLICATE_ITEM)
        );

        // "b" is still there.
        assert!(store
            .item_copy_matching(&query("svc", &[(key(&SEC_ATTR_ACCOUNT), text("b"))]))
            .is_ok());
    }

    #[test]
    fn update_rejects_class_change() {
        let mut store = MemoryKeychain::new();
        store.item_add(&generic("svc", "a", b"1")).unwrap();
        let changes = CfDictionary::from_pairs(&[(key(&SEC_CLASS), key(&SEC_CLASS_KEY))]);
        assert_eq!(
            store.item_update(&query("svc", &[]), &changes),
            Err(OsStatus::PARAM)
        );
    }

    #[test]
    fn update_rejects_non_boolean_sync() {
        let mut store = MemoryKeychain::new();
        store.item_add(&generic("svc", "a", b"1")).unwrap();
        let changes = CfDictionary::from_pairs(&[(
            key(&SEC_ATTR_SYNCHRONIZABLE),
            key(&SEC_ATTR_SYNCHRONIZABLE_ANY),
        )]);
        assert_eq!(
            store.item_update(&query("svc", &[]), &changes),
            Err(OsStatus::PARAM)
        );

        // The item keeps its original sync state.
        assert_eq!(store.item_copy_matching(&query("svc", &[])), Ok(None));
    }

    #[test]
    fn update_accepts_boolean_sync() {
        let mut store = MemoryKeychain::new();
        store.item_add(&generic("svc", "a", b"1")).unwrap();
        let changes = CfDictionary::from_pairs(&[(key(&SEC_ATTR_SYNCHRONIZABLE), yes())]);
        store.item_update(&query("svc", &[]), &changes).unwrap();

        assert_eq!(
            store.item_copy_matching(&query("svc", &[])),
            Err(OsStatus::ITEM_NOT_FOUND)
        );
        assert_eq!(
            store.item_copy_matching(&query("svc", &[(key(&SEC_ATTR_SYNCHRONIZABLE), yes())])),
            Ok(None)
        );
    }

    #[test]
    fn delete_removes_every_match() {
        let mut store = MemoryKeychain::new();
        store.item_add(&generic("svc", "a", b"1")).unwrap();
        store.item_add(&generic("svc", "b", b"2")).unwrap();
        store.item_add(&generic("keep", "c", b"3")).unwrap();

        store.item_delete(&query("svc", &[])).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.item_delete(&query("svc", &[])),
            Err(OsStatus::ITEM_NOT_FOUND)
        );
    }

    #[test]
    fn locked_store_refuses_interaction() {
        let mut store = MemoryKeychain::new();
        store.lock();
        assert!(store.is_locked());
        assert_eq!(
            store.item_add(&generic("svc", "a", b"1")),
            Err(OsStatus::INTERACTION_NOT_ALLOWED)
        );

        store.unlock();
        store.item_add(&generic("svc", "a", b"1")).unwrap();
    }
}
