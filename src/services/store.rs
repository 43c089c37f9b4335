use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// The demo application's persisted entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub firstname: String,
    pub username: String,
    pub email: String,
}

/// Persistence collaborator, assumed transactional per call.
///
/// `create` stages an entity, `flush` commits staged entities, `find_all`
/// reads committed ones. The dispatch core never looks inside.
pub trait UserStore: Send + Sync {
    /// Stage an entity for persistence.
    ///
    /// # Errors
    ///
    /// Fails when the underlying store rejects the write.
    fn create(&self, user: User) -> anyhow::Result<()>;

    /// All committed entities.
    ///
    /// # Errors
    ///
    /// Fails when the underlying store cannot be read.
    fn find_all(&self) -> anyhow::Result<Vec<User>>;

    /// Commit everything staged since the last flush.
    ///
    /// # Errors
    ///
    /// Fails when the commit cannot be applied.
    fn flush(&self) -> anyhow::Result<()>;
}

#[derive(Debug, Default)]
struct StoreState {
    pending: Vec<User>,
    committed: Vec<User>,
}

/// In-memory [`UserStore`] with a staged/committed split.
///
/// The mutex makes the store itself the only synchronized resource in the
/// system, matching how an external persistence layer would manage its own
/// locking.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    state: Mutex<StoreState>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> anyhow::Result<std::sync::MutexGuard<'_, StoreState>> {
        self.state.lock().map_err(|_| anyhow!("user store lock poisoned"))
    }
}

impl UserStore for InMemoryUserStore {
    fn create(&self, user: User) -> anyhow::Result<()> {
        self.lock()?.pending.push(user);
        Ok(())
    }

    fn find_all(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.lock()?.committed.clone())
    }

    fn flush(&self) -> anyhow::Result<()> {
        let mut state = self.lock()?;
        let staged = std::mem::take(&mut state.pending);
        state.committed.extend(staged);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str) -> User {
        User {
            name: "Doe".into(),
            firstname: "Jo".into(),
            username: username.into(),
            email: format!("{username}@example.org"),
        }
    }

    #[test]
    fn test_create_is_invisible_until_flush() {
        let store = InMemoryUserStore::new();
        store.create(user("a")).unwrap();

        assert!(store.find_all().unwrap().is_empty());

        store.flush().unwrap();
        let users = store.find_all().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "a");
    }

    #[test]
    fn test_flush_commits_all_staged() {
        let store = InMemoryUserStore::new();
        store.create(user("a")).unwrap();
        store.create(user("b")).unwrap();
        store.flush().unwrap();
        // A second flush with nothing staged is a no-op.
        store.flush().unwrap();

        assert_eq!(store.find_all().unwrap().len(), 2);
    }
}
