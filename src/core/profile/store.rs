use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;

use super::types::{StoredPreference, UserProfile};
use crate::core::BoxFuture;
use crate::core::tagging::{FoodPreferenceRow, FoodProfileUpdate};
use crate::error::{ProfileError, Result};

/// Receives derived tags and per-card rows. Owned by the account layer;
/// the tagging core never retries a failed call.
pub trait ProfileSink: Send + Sync {
    fn save_food_preference<'a>(
        &'a self,
        row: &'a FoodPreferenceRow,
    ) -> BoxFuture<'a, Result<StoredPreference>>;

    fn update_profile<'a>(
        &'a self,
        user_id: &'a str,
        update: &'a FoodProfileUpdate,
    ) -> BoxFuture<'a, Result<UserProfile>>;

    fn get_profile<'a>(&'a self, user_id: &'a str) -> BoxFuture<'a, Result<Option<UserProfile>>>;
}

#[derive(Default)]
struct ProfileTables {
    users: HashMap<String, UserProfile>,
    food_preferences: Vec<StoredPreference>,
}

/// Process-local stand-in for the hosted `users` / `food_preferences` tables.
#[derive(Default)]
pub struct InMemoryProfileStore {
    tables: Mutex<ProfileTables>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_profile(&self, profile: UserProfile) -> Result<()> {
        let mut tables = self.lock()?;
        if tables.users.contains_key(&profile.id) {
            return Err(ProfileError::AlreadyExists(profile.id).into());
        }
        tables.users.insert(profile.id.clone(), profile);
        Ok(())
    }

    /// Saved rows for `user_id`, newest first.
    pub fn food_preferences(&self, user_id: &str) -> Result<Vec<StoredPreference>> {
        let tables = self.lock()?;
        let mut rows: Vec<_> = tables
            .food_preferences
            .iter()
            .filter(|stored| stored.row.user_id == user_id)
            .cloned()
            .collect();
        rows.reverse();
        Ok(rows)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ProfileTables>> {
        self.tables
            .lock()
            .map_err(|e| ProfileError::Store(format!("profile store lock poisoned: {e}")).into())
    }
}

impl ProfileSink for InMemoryProfileStore {
    fn save_food_preference<'a>(
        &'a self,
        row: &'a FoodPreferenceRow,
    ) -> BoxFuture<'a, Result<StoredPreference>> {
        Box::pin(async move {
            let stored = StoredPreference {
                id: uuid::Uuid::new_v4().to_string(),
                row: row.clone(),
                created_at: Utc::now(),
            };
            self.lock()?.food_preferences.push(stored.clone());
            Ok(stored)
        })
    }

    fn update_profile<'a>(
        &'a self,
        user_id: &'a str,
        update: &'a FoodProfileUpdate,
    ) -> BoxFuture<'a, Result<UserProfile>> {
        Box::pin(async move {
            let mut tables = self.lock()?;
            let profile = tables
                .users
                .get_mut(user_id)
                .ok_or_else(|| ProfileError::NotFound(user_id.to_string()))?;
            profile.apply(update);
            Ok(profile.clone())
        })
    }

    fn get_profile<'a>(&'a self, user_id: &'a str) -> BoxFuture<'a, Result<Option<UserProfile>>> {
        Box::pin(async move { Ok(self.lock()?.users.get(user_id).cloned()) })
    }
}
