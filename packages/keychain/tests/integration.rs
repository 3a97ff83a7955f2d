use collection_literals::btree;

use keychain::{
    new_generic_password, Error, Item, Keychain, KeychainOptions, MatchLimit, QueryResult,
    SecClass, StatusKind, Synchronizable,
};
use keychain_cf::{CfDictionary, CfNumber, CfType, CfTypeId, OsStatus, SecItemStore};
use keychain_memory_store::MemoryKeychain;

fn selector(service: &str, account: &str) -> Item {
    let mut item = Item::new();
    item.set_sec_class(SecClass::GenericPassword);
    item.set_service(service);
    item.set_account(account);
    item
}

#[test]
fn test_add_query_delete_round_trip() {
    let mut keychain = Keychain::new(MemoryKeychain::new());

    let mut item = selector("svc", "acct");
    item.set_data(Some(&[0x01, 0x02][..]));
    keychain.add_item(&item).unwrap();

    let mut query = selector("svc", "acct");
    query.set_return_data(true);
    query.set_match_limit(MatchLimit::One);

    let results = keychain.query_item(&query).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].data, Some(vec![0x01, 0x02]));

    keychain.delete_item(&selector("svc", "acct")).unwrap();
    assert_eq!(keychain.query_item(&query).unwrap(), Vec::<QueryResult>::new());
}

#[test]
fn test_add_duplicate_is_reported() {
    let mut keychain = Keychain::new(MemoryKeychain::new());
    let item = new_generic_password("svc", "acct", "", b"pw", "");
    keychain.add_item(&item).unwrap();

    let err = keychain.add_item(&item).unwrap_err();
    assert_eq!(err.status_kind(), Some(StatusKind::DuplicateItem));
    assert_eq!(
        err.to_string(),
        "The specified item already exists in the keychain. (-25299)"
    );
}

#[test]
fn test_update_item() {
    let mut keychain = Keychain::new(MemoryKeychain::new());
    keychain
        .add_item(&new_generic_password("svc", "acct", "old label", b"old", ""))
        .unwrap();

    let mut changes = Item::new();
    changes.set_data(Some(&b"new"[..]));
    changes.set_label("new label");
    keychain
        .update_item(&selector("svc", "acct"), &changes)
        .unwrap();

    let mut query = selector("svc", "acct");
    query.set_return_attributes(true);
    query.set_return_data(true);
    let results = keychain.query_item(&query).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].label, "new label");
    assert_eq!(results[0].data.as_deref(), Some(&b"new"[..]));
    assert!(results[0].modification_date >= results[0].creation_date);
}

#[test]
fn test_update_missing_item_is_not_found() {
    let mut keychain = Keychain::new(MemoryKeychain::new());
    let mut changes = Item::new();
    changes.set_label("x");

    let err = keychain
        .update_item(&selector("svc", "nobody"), &changes)
        .unwrap_err();
    assert_eq!(err.status_kind(), Some(StatusKind::ItemNotFound));
}

#[test]
fn test_accounts_for_service() {
    let mut keychain = Keychain::new(MemoryKeychain::new());
    for account in ["alice", "bob"] {
        keychain
            .add_item(&new_generic_password("svc", account, "", b"pw", ""))
            .unwrap();
    }
    keychain
        .add_item(&new_generic_password("other", "carol", "", b"pw", ""))
        .unwrap();

    let mut accounts = keychain.get_generic_password_accounts("svc").unwrap();
    accounts.sort();
    assert_eq!(accounts, vec!["alice", "bob"]);

    #[allow(deprecated)]
    let alias = keychain.get_accounts_for_service("other").unwrap();
    assert_eq!(alias, vec!["carol"]);

    assert!(keychain
        .get_generic_password_accounts("missing")
        .unwrap()
        .is_empty());
}

#[test]
fn test_get_generic_password() {
    let mut keychain = Keychain::new(MemoryKeychain::new());
    keychain
        .add_item(&new_generic_password("svc", "acct", "", b"secret", ""))
        .unwrap();

    assert_eq!(
        keychain.get_generic_password("svc", "acct", "", ""),
        Ok(Some(b"secret".to_vec()))
    );
    assert_eq!(keychain.get_generic_password("svc", "nobody", "", ""), Ok(None));
}

#[test]
fn test_ambiguous_single_lookup_fails() {
    let mut keychain = Keychain::new(MemoryKeychain::new());
    keychain
        .add_item(&new_generic_password("svc", "alice", "", b"1", ""))
        .unwrap();
    keychain
        .add_item(&new_generic_password("svc", "bob", "", b"2", ""))
        .unwrap();

    // No account narrows the lookup to both items.
    assert_eq!(
        keychain.get_generic_password("svc", "", "", ""),
        Err(Error::Ambiguous { count: 2 })
    );
}

#[test]
fn test_delete_generic_password_item() {
    let mut keychain = Keychain::new(MemoryKeychain::new());
    keychain
        .add_item(&new_generic_password("svc", "acct", "", b"pw", ""))
        .unwrap();

    keychain.delete_generic_password_item("svc", "acct").unwrap();
    assert!(keychain.store().is_empty());

    let err = keychain
        .delete_generic_password_item("svc", "acct")
        .unwrap_err();
    assert_eq!(err.status_kind(), Some(StatusKind::ItemNotFound));
}

#[test]
fn test_synchronizable_items_need_an_explicit_filter() {
    let options = KeychainOptions {
        synchronizable: Synchronizable::Yes,
        ..KeychainOptions::default()
    };
    let mut synced = Keychain::with_options(MemoryKeychain::new(), options);
    synced
        .add_generic_password("svc", "acct", "", b"pw")
        .unwrap();

    let mut plain = selector("svc", "acct");
    plain.set_return_attributes(true);
    assert!(synced.query_item(&plain).unwrap().is_empty());

    plain.set_synchronizable(Synchronizable::Any);
    assert_eq!(synced.query_item(&plain).unwrap().len(), 1);

    assert_eq!(synced.get_generic_password_accounts("svc").unwrap(), vec!["acct"]);
}

#[test]
fn test_reference_query() {
    let mut keychain = Keychain::new(MemoryKeychain::new());
    keychain
        .add_item(&new_generic_password("svc", "acct", "", b"pw", ""))
        .unwrap();

    let mut query = selector("svc", "acct");
    query.set_return_ref(true);
    let response = keychain.query_item_ref(&query).unwrap().unwrap();
    assert_eq!(response.type_id(), CfTypeId::KEYCHAIN_ITEM);
    assert_eq!(response.type_description(), "SecKeychainItem");

    // References cannot be decoded into records.
    query.set_match_limit(MatchLimit::All);
    assert!(matches!(
        keychain.query_item(&query),
        Err(Error::Shape { .. })
    ));
}

#[test]
fn test_internet_password_fields() {
    let mut keychain = Keychain::new(MemoryKeychain::new());

    let mut item = Item::new();
    item.set_sec_class(SecClass::InternetPassword);
    item.set_server("example.com");
    item.set_protocol("htps");
    item.set_port(8443);
    item.set_path("/login");
    item.set_account("alice");
    item.set_comment("work");
    item.set_data(Some(&b"pw"[..]));
    keychain.add_item(&item).unwrap();

    let mut query = Item::new();
    query.set_sec_class(SecClass::InternetPassword);
    query.set_server("example.com");
    query.set_return_attributes(true);
    let results = keychain.query_item(&query).unwrap();
    assert_eq!(results.len(), 1);

    let found = &results[0];
    let fields = btree! {
        "server" => found.server.as_str(),
        "protocol" => found.protocol.as_str(),
        "path" => found.path.as_str(),
        "account" => found.account.as_str(),
        "comment" => found.comment.as_str(),
    };
    assert_eq!(
        fields,
        btree! {
            "server" => "example.com",
            "protocol" => "htps",
            "path" => "/login",
            "account" => "alice",
            "comment" => "work",
        }
    );
    assert_eq!(found.port, 8443);
    assert_eq!(found.data, None);
    assert!(found.creation_date.is_some());
}

#[test]
fn test_locked_store_surfaces_interaction_not_allowed() {
    let mut store = MemoryKeychain::new();
    store.lock();
    let mut keychain = Keychain::new(store);

    let err = keychain.query_item(&selector("svc", "acct")).unwrap_err();
    assert_eq!(err.status_kind(), Some(StatusKind::InteractionNotAllowed));

    keychain.store_mut().unlock();
    assert!(keychain.query_item(&selector("svc", "acct")).unwrap().is_empty());
}

/// Replies to every search with a fixed response.
struct ScriptedStore(CfType);

impl SecItemStore for ScriptedStore {
    fn item_add(&mut self, _: &CfDictionary) -> Result<(), OsStatus> {
        Err(OsStatus::UNIMPLEMENTED)
    }

    fn item_update(&mut self, _: &CfDictionary, _: &CfDictionary) -> Result<(), OsStatus> {
        Err(OsStatus::UNIMPLEMENTED)
    }

    fn item_delete(&mut self, _: &CfDictionary) -> Result<(), OsStatus> {
        Err(OsStatus::UNIMPLEMENTED)
    }

    fn item_copy_matching(&mut self, _: &CfDictionary) -> Result<Option<CfType>, OsStatus> {
        Ok(Some(self.0.clone()))
    }
}

#[test]
fn test_unexpected_response_is_a_shape_error() {
    let mut keychain = Keychain::new(ScriptedStore(CfType::from(CfNumber::from_i32(7))));
    let err = keychain.query_item(&selector("svc", "acct")).unwrap_err();
    assert_eq!(err, Error::shape("invalid result type: CFNumber"));

    let err = keychain.add_item(&Item::new()).unwrap_err();
    assert_eq!(err.status_kind(), Some(StatusKind::Other));
}

#[test]
fn test_response_is_released_after_mapping() {
    let response = CfType::from(CfDictionary::empty());
    let mut keychain = Keychain::new(ScriptedStore(response.clone()));
    assert_eq!(response.retain_count(), 2);

    let results = keychain.query_item(&selector("svc", "acct")).unwrap();
    assert_eq!(results, vec![QueryResult::default()]);
    assert_eq!(response.retain_count(), 2);
}
