//! End-to-end behaviour of the client and the typed accessor.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokenkeep_core::AccessToken;
use tokenkeep_integration_tests::{memory_client, SERVICE};
use tokenkeep_secrets::{Access, KeychainItem, SecretError, SecretKey, SecretStoreClient, Status};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Token {
    token: String,
}

#[test]
fn test_access_token_set_get_clear() {
    let (client, backend) = memory_client();
    let token = Token {
        token: "abc123".to_string(),
    };

    client.set(Some(&token), "accessToken").unwrap();
    assert_eq!(client.get::<Token>("accessToken").unwrap(), Some(token));
    assert_eq!(backend.records_in(SERVICE), 1);

    client.set::<Token>(None, "accessToken").unwrap();
    assert_eq!(client.get::<Token>("accessToken").unwrap(), None);
    assert_eq!(backend.records_in(SERVICE), 0);
}

#[test]
fn test_remove_missing_is_error_but_set_is_not() {
    let (client, _backend) = memory_client();

    let err = client.remove("accessToken").unwrap_err();
    assert!(matches!(err, SecretError::StoreAccess { .. }));
    assert_eq!(err.code(), Some(Status::ITEM_NOT_FOUND.code()));

    client.set(Some(&1u8), "accessToken").unwrap();
}

#[test]
fn test_empty_key_never_reaches_store() {
    let (client, backend) = memory_client();
    assert!(matches!(client.get::<Token>(""), Err(SecretError::InvalidKey)));
    assert!(matches!(client.set(Some(&1u8), ""), Err(SecretError::InvalidKey)));
    assert!(matches!(client.remove(""), Err(SecretError::InvalidKey)));
    assert_eq!(backend.requests(), 0);
}

#[test]
fn test_keychain_item_round_trip() {
    let (client, _backend) = memory_client();
    let item: KeychainItem<AccessToken> = KeychainItem::new(SecretKey::AccessToken, client.clone());

    let token = AccessToken::new("abc123").with_token_type("Bearer");
    item.write(Some(&token));
    assert_eq!(item.read(), Some(token.clone()));

    // the accessor and the client see the same record
    assert_eq!(client.get::<AccessToken>("accessToken").unwrap(), Some(token));

    item.clear();
    assert_eq!(item.read(), None);
}

#[test]
fn test_keychain_item_swallows_store_failures() {
    let (client, backend) = memory_client();
    let seen: Arc<Mutex<Vec<Access>>> = Arc::default();
    let sink = seen.clone();
    let item: KeychainItem<AccessToken> = KeychainItem::new(SecretKey::AccessToken, client)
        .with_error_hook(move |_, access, _| sink.lock().push(access));

    backend.fail_with(Some(Status::INTERACTION_NOT_ALLOWED));
    assert_eq!(item.read(), None);
    item.write(Some(&AccessToken::new("abc123")));

    assert_eq!(*seen.lock(), vec![Access::Read, Access::Write]);

    backend.fail_with(None);
    assert_eq!(item.read(), None);
}

#[test]
fn test_items_share_one_store() {
    let (client, backend) = memory_client();
    let access: KeychainItem<AccessToken> = KeychainItem::new(SecretKey::AccessToken, client.clone());
    let refresh: KeychainItem<AccessToken> = KeychainItem::new(SecretKey::RefreshToken, client);

    access.write(Some(&AccessToken::new("short-lived")));
    refresh.write(Some(&AccessToken::new("long-lived")));
    assert_eq!(backend.records_in(SERVICE), 2);

    access.clear();
    assert_eq!(access.read(), None);
    assert_eq!(
        refresh.read().map(|t| t.token.expose_secret().to_string()),
        Some("long-lived".to_string())
    );
}

#[test]
fn test_shared_client_is_installed_once() {
    let (client, _backend) = memory_client();
    SecretStoreClient::install_shared(client.clone()).unwrap();

    assert!(Arc::ptr_eq(&SecretStoreClient::shared(), &client));
    assert!(SecretStoreClient::install_shared(client.clone()).is_err());

    let item: KeychainItem<Token> = KeychainItem::shared(SecretKey::AccessToken);
    item.write(Some(&Token {
        token: "via-shared".to_string(),
    }));
    assert_eq!(
        client.get::<Token>("accessToken").unwrap().map(|t| t.token),
        Some("via-shared".to_string())
    );
}
