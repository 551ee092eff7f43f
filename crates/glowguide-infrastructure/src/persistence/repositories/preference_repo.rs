use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use std::sync::Arc;
use tracing::warn;

use glowguide_domain::profile::{PreferenceRepository, SkinProfile};
use glowguide_domain::routine::RoutineLevel;
use glowguide_domain::shared::DomainError;
use glowguide_domain::skin_type::SkinType;

use crate::persistence::result_ext::ResultExt;

const KEY_SKIN_TYPE: &str = "userSkinType";
const KEY_ROUTINE_LEVEL: &str = "selectedRoutineLevel";
const KEY_PROFILE: &str = "userProfile";
const KEY_ONBOARDING_COMPLETE: &str = "onboardingComplete";

/// SQLite implementation of the key/value preference store.
///
/// Reads degrade to defaults (`normal` skin, `moderate` routine) when a key
/// is missing or holds an unreadable value; the bad value is logged, never
/// surfaced.
pub struct SqlitePreferenceRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePreferenceRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let row = sqlx::query("SELECT value FROM preferences WHERE key = ?")
            .bind(key)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_repo_error("Failed to read preference")?;

        Ok(row.map(|r| r.get("value")))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO preferences (key, value, updated_at)
            VALUES (?, ?, strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(self.pool.as_ref())
        .await
        .map_repo_error("Failed to write preference")?;

        Ok(())
    }
}

#[async_trait]
impl PreferenceRepository for SqlitePreferenceRepository {
    async fn load_profile(&self) -> Result<SkinProfile, DomainError> {
        if let Some(raw) = self.get(KEY_PROFILE).await? {
            match serde_json::from_str::<SkinProfile>(&raw) {
                Ok(profile) => return Ok(profile),
                Err(e) => {
                    warn!(error = %e, "Stored profile is unreadable, rebuilding from parts");
                }
            }
        }

        // No blob (or a broken one): fall back to the individual keys,
        // which themselves default when absent.
        Ok(SkinProfile::new(
            self.load_skin_type().await?,
            self.load_routine_level().await?,
        ))
    }

    async fn save_profile(&self, profile: &SkinProfile) -> Result<(), DomainError> {
        let blob = serde_json::to_string(profile)
            .map_err(|e| DomainError::Serialization(e.to_string()))?;

        self.set(KEY_PROFILE, &blob).await?;
        // Keep the individual keys in step with the blob.
        self.set(KEY_SKIN_TYPE, profile.skin_type.as_str()).await?;
        self.set(KEY_ROUTINE_LEVEL, profile.routine_level.as_str())
            .await?;
        Ok(())
    }

    async fn load_skin_type(&self) -> Result<SkinType, DomainError> {
        match self.get(KEY_SKIN_TYPE).await? {
            Some(raw) => Ok(SkinType::from_str(&raw).unwrap_or_else(|e| {
                warn!(value = %raw, error = %e, "Stored skin type unreadable, defaulting to normal");
                SkinType::Normal
            })),
            None => Ok(SkinType::Normal),
        }
    }

    async fn save_skin_type(&self, skin_type: SkinType) -> Result<(), DomainError> {
        self.set(KEY_SKIN_TYPE, skin_type.as_str()).await
    }

    async fn load_routine_level(&self) -> Result<RoutineLevel, DomainError> {
        match self.get(KEY_ROUTINE_LEVEL).await? {
            Some(raw) => Ok(RoutineLevel::from_str(&raw).unwrap_or_else(|e| {
                warn!(value = %raw, error = %e, "Stored routine level unreadable, defaulting to moderate");
                RoutineLevel::Moderate
            })),
            None => Ok(RoutineLevel::Moderate),
        }
    }

    async fn save_routine_level(&self, level: RoutineLevel) -> Result<(), DomainError> {
        self.set(KEY_ROUTINE_LEVEL, level.as_str()).await
    }

    async fn load_onboarding_complete(&self) -> Result<bool, DomainError> {
        Ok(self
            .get(KEY_ONBOARDING_COMPLETE)
            .await?
            .is_some_and(|v| v == "true"))
    }

    async fn save_onboarding_complete(&self) -> Result<(), DomainError> {
        self.set(KEY_ONBOARDING_COMPLETE, "true").await
    }
}
