// Identity bootstrap over an injectable key-value store
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

pub const USER_ID_KEY: &str = "thermasense_userId";

/// Durable string storage that outlives a single run of the view
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Return the persisted user id, generating and persisting a UUIDv4 on first use.
pub fn bootstrap_identity(store: &dyn KeyValueStore) -> anyhow::Result<String> {
    if let Some(existing) = store.get(USER_ID_KEY)? {
        let existing = existing.trim();
        if !existing.is_empty() {
            tracing::debug!("Reusing persisted user id");
            return Ok(existing.to_string());
        }
    }

    let user_id = Uuid::new_v4().to_string();
    store.set(USER_ID_KEY, &user_id)?;
    tracing::info!("Generated new user id {}", user_id);
    Ok(user_id)
}

/// Process-local store, used when nothing needs to survive a restart
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
