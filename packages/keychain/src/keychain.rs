//! The item verbs and convenience queries over a secure-item store.

use keychain_cf::{CfType, OsStatus, SecItemStore};
use keychain_core::Error;

use crate::item::{new_generic_password, Item};
use crate::options::{KeychainOptions, MatchLimit, SecClass};
use crate::result::{map_response, QueryResult};

/// Front end over a [`SecItemStore`].
///
/// The verbs take explicit [`Item`]s and pass them to the store untouched.
/// The convenience methods build their own items and apply the configured
/// [`KeychainOptions`].
#[derive(Debug)]
pub struct Keychain<S: SecItemStore> {
    store: S,
    options: KeychainOptions,
}

impl<S: SecItemStore> Keychain<S> {
    pub fn new(store: S) -> Self {
        Self::with_options(store, KeychainOptions::default())
    }

    pub fn with_options(store: S, options: KeychainOptions) -> Self {
        Keychain { store, options }
    }

    pub fn options(&self) -> &KeychainOptions {
        &self.options
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Add an item. Fails with a duplicate-item status if it already exists.
    pub fn add_item(&mut self, item: &Item) -> Result<(), Error> {
        let dict = item.to_dictionary()?;
        let outcome = self.store.item_add(&dict);
        log::debug!("add_item: {:?}", outcome);
        Ok(outcome?)
    }

    /// Apply `changes` to every item matching `query`.
    pub fn update_item(&mut self, query: &Item, changes: &Item) -> Result<(), Error> {
        let query = query.to_dictionary()?;
        let changes = changes.to_dictionary()?;
        let outcome = self.store.item_update(&query, &changes);
        log::debug!("update_item: {:?}", outcome);
        Ok(outcome?)
    }

    /// Delete every item matching `query`.
    pub fn delete_item(&mut self, query: &Item) -> Result<(), Error> {
        let dict = query.to_dictionary()?;
        let outcome = self.store.item_delete(&dict);
        log::debug!("delete_item: {:?}", outcome);
        Ok(outcome?)
    }

    /// Run a query and return the raw response.
    ///
    /// `None` when nothing matches or the query asked for no payload.
    pub fn query_item_ref(&mut self, query: &Item) -> Result<Option<CfType>, Error> {
        let dict = query.to_dictionary()?;
        match self.store.item_copy_matching(&dict) {
            Ok(response) => {
                log::debug!(
                    "query_item: {}",
                    response
                        .as_ref()
                        .map(|r| r.type_description())
                        .unwrap_or_else(|| "no payload".to_string())
                );
                Ok(response)
            }
            Err(OsStatus::ITEM_NOT_FOUND) => {
                log::debug!("query_item: not found");
                Ok(None)
            }
            Err(status) => {
                log::debug!("query_item: {:?}", status);
                Err(status.into())
            }
        }
    }

    /// Run a query and decode the response. Nothing found is an empty list.
    pub fn query_item(&mut self, query: &Item) -> Result<Vec<QueryResult>, Error> {
        match self.query_item_ref(query)? {
            Some(response) => map_response(&response),
            None => Ok(Vec::new()),
        }
    }

    /// Add a generic password with the configured defaults.
    pub fn add_generic_password(
        &mut self,
        service: &str,
        account: &str,
        label: &str,
        data: &[u8],
    ) -> Result<(), Error> {
        let mut item = new_generic_password(service, account, label, data, "");
        self.apply_options(&mut item);
        self.add_item(&item)
    }

    /// Accounts of every generic password for `service`.
    pub fn get_generic_password_accounts(&mut self, service: &str) -> Result<Vec<String>, Error> {
        let mut query = self.generic_password_query(service, "");
        query.set_match_limit(MatchLimit::All);
        query.set_return_attributes(true);

        let results = self.query_item(&query)?;
        Ok(results.into_iter().map(|r| r.account).collect())
    }

    #[deprecated(note = "use get_generic_password_accounts")]
    pub fn get_accounts_for_service(&mut self, service: &str) -> Result<Vec<String>, Error> {
        self.get_generic_password_accounts(service)
    }

    /// Password data for one generic password item.
    ///
    /// `Ok(None)` when nothing matches. The search asks for every match
    /// with attributes and data instead of a single data payload: with a
    /// match limit of one the store never reports more than one item, so an
    /// ambiguous lookup would silently return an arbitrary one. Two or more
    /// matches fail with [`Error::Ambiguous`].
    pub fn get_generic_password(
        &mut self,
        service: &str,
        account: &str,
        label: &str,
        access_group: &str,
    ) -> Result<Option<Vec<u8>>, Error> {
        let mut query = self.generic_password_query(service, account);
        query.set_label(label);
        if !access_group.is_empty() {
            query.set_access_group(access_group);
        }
        query.set_match_limit(MatchLimit::All);
        query.set_return_attributes(true);
        query.set_return_data(true);

        let mut results = self.query_item(&query)?;
        match results.len() {
            0 => Ok(None),
            1 => Ok(results.pop().and_then(|r| r.data)),
            count => Err(Error::Ambiguous { count }),
        }
    }

    pub fn delete_generic_password_item(
        &mut self,
        service: &str,
        account: &str,
    ) -> Result<(), Error> {
        let query = self.generic_password_query(service, account);
        self.delete_item(&query)
    }

    fn generic_password_query(&self, service: &str, account: &str) -> Item {
        let mut query = Item::new();
        query.set_sec_class(SecClass::GenericPassword);
        query.set_service(service);
        query.set_account(account);
        if let Some(group) = &self.options.access_group {
            query.set_access_group(group);
        }
        query.set_synchronizable(self.options.synchronizable);
        query
    }

    fn apply_options(&self, item: &mut Item) {
        if let Some(group) = &self.options.access_group {
            item.set_access_group(group);
        }
        item.set_synchronizable(self.options.synchronizable);
        item.set_accessible(self.options.accessible);
    }
}
