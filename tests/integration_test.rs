use entity_store::framework::{DataStore, DataStoreMut, InMemoryStore, MockDataStore};
use entity_store::lifecycle::try_setup_tracing;
use entity_store::model::{User, UserId};
use entity_store::user_service::{UserError, UserService};
use std::collections::HashMap;

/// Fresh fixture per test; no shared mutable state between cases.
fn seeded_users() -> MockDataStore<User> {
    MockDataStore::from(HashMap::from([(UserId(1), User::new(1, "John"))]))
}

#[tokio::test]
async fn test_service_returns_seeded_user() {
    let service = UserService::new(seeded_users());

    let user = service.get_user(UserId(1)).await;
    assert_eq!(user, Ok(User::new(1, "John")));
}

#[tokio::test]
async fn test_service_reports_missing_user() {
    let service = UserService::new(seeded_users());

    let result = service.get_user(UserId(2)).await;
    assert_eq!(result, Err(UserError::NotFound { id: UserId(2) }));
}

/// The same service code runs against the real store.
#[tokio::test]
async fn test_service_over_in_memory_store() {
    let _ = try_setup_tracing();
    let store = InMemoryStore::new();
    store.put(User::new(1, "John")).await;
    let service = UserService::new(store.clone());

    assert_eq!(service.get_user(UserId(1)).await.unwrap().first, "John");

    // Writes through another handle are visible to the service.
    store.put(User::new(1, "Johnny")).await;
    assert_eq!(service.get_user(UserId(1)).await.unwrap().first, "Johnny");
}

#[tokio::test]
async fn test_last_completed_put_wins() {
    let store = InMemoryStore::new();
    store.put(User::new(4, "first")).await;
    store.put(User::new(4, "second")).await;
    store.put(User::new(4, "third")).await;

    assert_eq!(store.get(&UserId(4)).await, Some(User::new(4, "third")));
    assert_eq!(store.len().await, 1);
}

/// Many writers hammer overlapping keys; afterwards every key holds one whole value
/// written for that key, and a final sequential put is what a get observes.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_puts_leave_mapping_consistent() {
    const WRITERS: u64 = 8;
    const KEYS: u64 = 16;
    const ROUNDS: u64 = 50;

    let store = InMemoryStore::<User>::new();

    let mut handles = Vec::new();
    for writer in 0..WRITERS {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            for round in 0..ROUNDS {
                for key in 0..KEYS {
                    store
                        .put(User::new(key, format!("w{writer}-r{round}-k{key}")))
                        .await;
                }
            }
        }));
    }

    // Readers run alongside the writers and must only ever see whole values.
    let reader = {
        let store = store.clone();
        tokio::spawn(async move {
            for _ in 0..ROUNDS {
                for key in 0..KEYS {
                    if let Some(user) = store.get(&UserId(key)).await {
                        assert_eq!(user.id, UserId(key));
                        assert!(user.first.ends_with(&format!("-k{key}")));
                    }
                }
            }
        })
    };

    for handle in handles {
        handle.await.expect("writer panicked");
    }
    reader.await.expect("reader panicked");

    assert_eq!(store.len().await, KEYS as usize);
    for key in 0..KEYS {
        let user = store.get(&UserId(key)).await.expect("key written");
        assert_eq!(user.id, UserId(key));
        assert!(user.first.ends_with(&format!("-r{}-k{key}", ROUNDS - 1)));
    }

    for key in 0..KEYS {
        store.put(User::new(key, "final")).await;
    }
    for key in 0..KEYS {
        assert_eq!(store.get(&UserId(key)).await.unwrap().first, "final");
    }
}
