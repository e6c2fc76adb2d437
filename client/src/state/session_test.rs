use super::*;
use crate::net::test_support::FixedBases;
use crate::net::types::UserId;
use crate::util::storage::{MemoryStore, StorageError};
use serde_json::json;

fn session(base: &str) -> Session {
    let user_json = json!({
        "id": 1,
        "email": "e@x.com",
        "full_name": "E",
        "role": "staff",
        "subscription_tier": "gold",
        "favorite_event": "basketball"
    });
    Session {
        base: base.to_owned(),
        token: "t1".to_owned(),
        user: LoginUser::from_user_value(&user_json),
        user_json,
    }
}

#[test]
fn persist_writes_base_token_and_user() {
    let store = MemoryStore::new();
    let user = persist_session(&store, &FixedBases::new(&["B"]), &session("B")).unwrap();

    assert_eq!(store.get(API_BASE_KEY).as_deref(), Some("B"));
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t1"));
    let stored_user: serde_json::Value = serde_json::from_str(&store.get(USER_KEY).unwrap()).unwrap();
    assert_eq!(stored_user["favorite_event"], "basketball");
    assert_eq!(user.id, Some(UserId::Int(1)));
    assert_eq!(user.subscription_tier.as_deref(), Some("gold"));
}

#[test]
fn locked_config_never_writes_base() {
    let store = MemoryStore::new();
    store.set(API_BASE_KEY, "A").unwrap();

    persist_session(&store, &FixedBases::new(&["B"]).locked(), &session("B")).unwrap();

    assert_eq!(store.get(API_BASE_KEY).as_deref(), Some("A"));
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t1"));
}

#[test]
fn load_session_reads_back_persisted_values() {
    let store = MemoryStore::new();
    persist_session(&store, &FixedBases::new(&["B"]), &session("B")).unwrap();

    let loaded = load_session(&store).unwrap();
    assert_eq!(loaded.token, "t1");
    assert_eq!(loaded.user.full_name.as_deref(), Some("E"));
}

#[test]
fn load_session_requires_token_and_object_user() {
    let store = MemoryStore::new();
    assert_eq!(load_session(&store), None);

    store.set(TOKEN_KEY, "t1").unwrap();
    assert_eq!(load_session(&store), None);

    store.set(USER_KEY, "\"not an object\"").unwrap();
    assert_eq!(load_session(&store), None);

    store.set(USER_KEY, r#"{"id":"u1"}"#).unwrap();
    assert!(load_session(&store).is_some());
}

#[test]
fn clear_session_keeps_remembered_base() {
    let store = MemoryStore::new();
    persist_session(&store, &FixedBases::new(&["B"]), &session("B")).unwrap();

    clear_session(&store);

    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
    assert_eq!(store.get(API_BASE_KEY).as_deref(), Some("B"));
}

/// Memory store whose writes to one key always fail.
struct RefusingStore {
    inner: MemoryStore,
    refused: &'static str,
}

impl KeyValueStore for RefusingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.refused {
            return Err(StorageError::Write { key: key.to_owned(), reason: "QuotaExceededError".to_owned() });
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}

#[test]
fn failed_user_write_leaves_no_token_behind() {
    let store = RefusingStore { inner: MemoryStore::new(), refused: USER_KEY };

    let err = persist_session(&store, &FixedBases::new(&["B"]), &session("B")).unwrap_err();

    assert!(matches!(err, AuthError::Storage(_)));
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
    assert_eq!(load_session(&store), None);
}
