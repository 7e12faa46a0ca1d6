//! Registry entry — one registered entity, as the host registry supplies it.
//!
//! The host keeps one record per entity and serializes the whole registry to
//! JSON; entries deserialize straight from that dump. Grouping decisions are
//! made from the [`domain()`](RegistryEntry::domain) attribute; the remaining
//! fields are carried for the host's benefit and are never touched here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::id::RegistryId;

/// UTC timestamp used for `created_at` and `modified_at`.
pub type Timestamp = DateTime<Utc>;

/// Who disabled an entity, when it is disabled at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisabledBy {
    User,
    Integration,
    ConfigEntry,
    Device,
}

impl std::fmt::Display for DisabledBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Integration => f.write_str("integration"),
            Self::ConfigEntry => f.write_str("config_entry"),
            Self::Device => f.write_str("device"),
        }
    }
}

/// One entry of the host platform's entity registry.
///
/// Read-only from this workspace's point of view: filters receive entries by
/// reference and never construct or mutate them outside of tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub id: RegistryId,
    /// `domain.object_id`, e.g. `sensor.outdoor_temperature`.
    pub entity_id: String,
    /// Integration that provided the entity.
    pub platform: String,
    /// Friendly name override, when the user set one.
    #[serde(default)]
    pub name: Option<String>,
    /// Area the entity is assigned to.
    #[serde(default)]
    pub area_id: Option<String>,
    /// Present exactly when the entity is disabled.
    #[serde(default)]
    pub disabled_by: Option<DisabledBy>,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
}

impl RegistryEntry {
    /// Create a builder for constructing a [`RegistryEntry`].
    #[must_use]
    pub fn builder() -> RegistryEntryBuilder {
        RegistryEntryBuilder::default()
    }

    /// The domain part of the entity id (`sensor` for
    /// `sensor.outdoor_temperature`).
    ///
    /// Entries built through [`builder()`](Self::builder) always carry a
    /// separator. A foreign record without one yields `""`, which no domain
    /// filter matches.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.entity_id.split_once('.').map_or("", |(domain, _)| domain)
    }

    /// The object part of the entity id (`outdoor_temperature` for
    /// `sensor.outdoor_temperature`), with the same fallback as
    /// [`domain()`](Self::domain).
    #[must_use]
    pub fn object_id(&self) -> &str {
        self.entity_id
            .split_once('.')
            .map_or("", |(_, object_id)| object_id)
    }

    /// Whether the entity is currently disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled_by.is_some()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyEntityId`] when the entity id is empty,
    /// [`RegistryError::InvalidEntityId`] when it is not `domain.object_id`
    /// shaped with both halves non-empty, and
    /// [`RegistryError::EmptyPlatform`] when the platform is empty.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.entity_id.is_empty() {
            return Err(RegistryError::EmptyEntityId);
        }
        let well_formed = self
            .entity_id
            .split_once('.')
            .is_some_and(|(domain, object_id)| !domain.is_empty() && !object_id.is_empty());
        if !well_formed {
            return Err(RegistryError::InvalidEntityId(self.entity_id.clone()));
        }
        if self.platform.is_empty() {
            return Err(RegistryError::EmptyPlatform);
        }
        Ok(())
    }
}

/// Step-by-step builder for [`RegistryEntry`].
#[derive(Debug, Default)]
pub struct RegistryEntryBuilder {
    id: Option<RegistryId>,
    entity_id: Option<String>,
    platform: Option<String>,
    name: Option<String>,
    area_id: Option<String>,
    disabled_by: Option<DisabledBy>,
}

impl RegistryEntryBuilder {
    #[must_use]
    pub fn id(mut self, id: RegistryId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    #[must_use]
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn area_id(mut self, area_id: impl Into<String>) -> Self {
        self.area_id = Some(area_id.into());
        self
    }

    #[must_use]
    pub fn disabled_by(mut self, disabled_by: DisabledBy) -> Self {
        self.disabled_by = Some(disabled_by);
        self
    }

    /// Consume the builder, validate, and return a [`RegistryEntry`].
    ///
    /// Both timestamps are set to the same instant.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the entity id or platform is missing or
    /// malformed.
    pub fn build(self) -> Result<RegistryEntry, RegistryError> {
        let ts = Utc::now();
        let entry = RegistryEntry {
            id: self.id.unwrap_or_default(),
            entity_id: self.entity_id.unwrap_or_default(),
            platform: self.platform.unwrap_or_default(),
            name: self.name,
            area_id: self.area_id,
            disabled_by: self.disabled_by,
            created_at: ts,
            modified_at: ts,
        };
        entry.validate()?;
        Ok(entry)
    }
}
