//! Per-user profile and conversation state.
//!
//! The only mutable state in the core. Profiles accumulate across turns
//! via merge semantics; history is a bounded ring per user. Both live
//! behind `RwLock`s so callers share the store by reference and keyed
//! operations for different users do not interfere. Nothing here survives
//! a process restart.

use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;

use tracing::info;

use crate::models::{ConversationTurn, Role, UserProfile};

/// Maximum retained conversation turns per user (10 exchanges).
pub const HISTORY_LIMIT: usize = 20;

/// Owns every `UserProfile` and conversation history in the process.
/// Profiles are created lazily on first merge and destroyed only by
/// `reset`. Merging is idempotent: re-applying the same extraction leaves
/// the profile unchanged.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: RwLock<HashMap<String, UserProfile>>,
    history: RwLock<HashMap<String, VecDeque<ConversationTurn>>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert each populated field of `partial` into the stored profile
    /// for `user_id`, creating the profile if absent. Never clears fields.
    pub fn merge(&self, user_id: &str, partial: &UserProfile) {
        let mut profiles = self.profiles.write().expect("profile lock poisoned");
        profiles
            .entry(user_id.to_string())
            .or_default()
            .merge(partial);
    }

    /// Current profile for `user_id`, or an empty profile if none exists.
    pub fn get(&self, user_id: &str) -> UserProfile {
        let profiles = self.profiles.read().expect("profile lock poisoned");
        profiles.get(user_id).cloned().unwrap_or_default()
    }

    /// Delete the stored profile and conversation history for `user_id`.
    /// The next message from this user behaves as a brand-new conversation.
    pub fn reset(&self, user_id: &str) {
        self.profiles
            .write()
            .expect("profile lock poisoned")
            .remove(user_id);
        self.history
            .write()
            .expect("history lock poisoned")
            .remove(user_id);
        info!(user_id, "conversation reset");
    }

    /// Append a turn to the user's history, truncating to the most
    /// recent `HISTORY_LIMIT` entries.
    pub fn push_turn(&self, user_id: &str, turn: ConversationTurn) {
        let mut history = self.history.write().expect("history lock poisoned");
        let turns = history.entry(user_id.to_string()).or_default();
        turns.push_back(turn);
        while turns.len() > HISTORY_LIMIT {
            turns.pop_front();
        }
    }

    /// Ordered copy of the retained conversation for `user_id`.
    pub fn history(&self, user_id: &str) -> Vec<ConversationTurn> {
        let history = self.history.read().expect("history lock poisoned");
        history
            .get(user_id)
            .map(|turns| turns.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Content of the most recent assistant turn, if any.
    pub fn last_assistant_turn(&self, user_id: &str) -> Option<String> {
        let history = self.history.read().expect("history lock poisoned");
        history.get(user_id).and_then(|turns| {
            turns
                .iter()
                .rev()
                .find(|turn| turn.role == Role::Assistant)
                .map(|turn| turn.content.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    #[test]
    fn test_merge_creates_profile_lazily() {
        let store = ProfileStore::new();
        assert!(store.get("u1").is_empty());

        let partial = UserProfile {
            gender: Some(Gender::Female),
            ..Default::default()
        };
        store.merge("u1", &partial);

        assert_eq!(store.get("u1").gender, Some(Gender::Female));
        assert!(store.get("u2").is_empty());
    }

    #[test]
    fn test_merge_is_idempotent() {
        let store = ProfileStore::new();
        let partial = UserProfile {
            weight_kg: Some(70.0),
            age: Some(40),
            ..Default::default()
        };

        store.merge("u1", &partial);
        let once = store.get("u1");
        store.merge("u1", &partial);
        let twice = store.get("u1");

        assert_eq!(once, twice);
    }

    #[test]
    fn test_users_are_isolated() {
        let store = ProfileStore::new();
        store.merge(
            "a",
            &UserProfile {
                age: Some(20),
                ..Default::default()
            },
        );
        store.merge(
            "b",
            &UserProfile {
                age: Some(60),
                ..Default::default()
            },
        );

        assert_eq!(store.get("a").age, Some(20));
        assert_eq!(store.get("b").age, Some(60));

        store.reset("a");
        assert!(store.get("a").is_empty());
        assert_eq!(store.get("b").age, Some(60));
    }

    #[test]
    fn test_history_bounded() {
        let store = ProfileStore::new();
        for i in 0..30 {
            store.push_turn("u1", ConversationTurn::new(Role::User, format!("msg {i}")));
        }

        let history = store.history("u1");
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0].content, "msg 10");
        assert_eq!(history.last().unwrap().content, "msg 29");
    }

    #[test]
    fn test_last_assistant_turn() {
        let store = ProfileStore::new();
        assert!(store.last_assistant_turn("u1").is_none());

        store.push_turn("u1", ConversationTurn::new(Role::User, "hi"));
        store.push_turn("u1", ConversationTurn::new(Role::Assistant, "hello"));
        store.push_turn("u1", ConversationTurn::new(Role::User, "again"));

        assert_eq!(store.last_assistant_turn("u1").as_deref(), Some("hello"));
    }

    #[test]
    fn test_reset_clears_history_too() {
        let store = ProfileStore::new();
        store.push_turn("u1", ConversationTurn::new(Role::User, "hi"));
        store.reset("u1");
        assert!(store.history("u1").is_empty());
    }
}
