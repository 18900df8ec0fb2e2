use std::collections::HashMap;

use teloxide::types::UserId;
use tokio::sync::RwLock;

/// Conversation phase of the withdrawal flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingAddress,
}

/// Everything the bot remembers about one user
#[derive(Debug, Clone, Copy, Default)]
pub struct UserState {
    pub is_trading: bool,
    pub session: SessionState,
}

/// In-memory store of per-user state, keyed by Telegram user id.
///
/// Entries are created lazily on first write; reads of unknown users see the
/// defaults (not trading, idle session). Nothing is persisted, so a process
/// restart clears all state.
pub struct UserStore {
    users: RwLock<HashMap<UserId, UserState>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Flip the trading flag and return its new value. The first toggle for
    /// a user always lands on `true`.
    pub async fn toggle_trading(&self, user: UserId) -> bool {
        let mut users = self.users.write().await;
        let state = users.entry(user).or_default();
        state.is_trading = !state.is_trading;
        state.is_trading
    }

    pub async fn is_trading(&self, user: UserId) -> bool {
        self.users
            .read()
            .await
            .get(&user)
            .copied()
            .unwrap_or_default()
            .is_trading
    }

    pub async fn session(&self, user: UserId) -> SessionState {
        self.users
            .read()
            .await
            .get(&user)
            .copied()
            .unwrap_or_default()
            .session
    }

    pub async fn set_session(&self, user: UserId, session: SessionState) {
        let mut users = self.users.write().await;
        users.entry(user).or_default().session = session;
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_toggle_starts_trading() {
        let store = UserStore::new();
        let user = UserId(1);

        assert!(!store.is_trading(user).await);
        assert!(store.toggle_trading(user).await);
        assert!(store.is_trading(user).await);
        assert!(!store.toggle_trading(user).await);
        assert!(!store.is_trading(user).await);
    }

    #[tokio::test]
    async fn test_session_transitions() {
        let store = UserStore::new();
        let user = UserId(2);

        assert_eq!(store.session(user).await, SessionState::Idle);
        store.set_session(user, SessionState::AwaitingAddress).await;
        assert_eq!(store.session(user).await, SessionState::AwaitingAddress);
        store.set_session(user, SessionState::Idle).await;
        assert_eq!(store.session(user).await, SessionState::Idle);
    }

    #[tokio::test]
    async fn test_users_are_independent() {
        let store = UserStore::new();

        store.toggle_trading(UserId(3)).await;
        store.set_session(UserId(3), SessionState::AwaitingAddress).await;

        assert!(!store.is_trading(UserId(4)).await);
        assert_eq!(store.session(UserId(4)).await, SessionState::Idle);
    }
}
