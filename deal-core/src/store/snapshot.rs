//! Snapshot schema, wire format and schema migration.
//!
//! The snapshot is one TOML document with camelCase keys. Early builds
//! stored a three-valued `scenarioMode` string where the current schema has
//! the `advancedCostsEnabled` boolean; [`migrate`] rewrites such records in
//! memory on load so the rest of the system only ever sees the current
//! shape.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::DealInputs;

/// Errors raised while reading, writing or migrating the snapshot.
///
/// These never reach the user; the [`SnapshotStore`](crate::SnapshotStore)
/// implementations log them and degrade to defaults.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot document is malformed: {0}")]
    Malformed(#[from] toml::de::Error),

    #[error("snapshot cannot be serialized: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Migration(#[from] MigrationError),
}

/// Errors raised by the legacy-schema migration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MigrationError {
    /// The record carries neither the current boolean nor the legacy mode.
    #[error("snapshot has neither advancedCostsEnabled nor scenarioMode")]
    MissingModeField,

    /// The legacy mode field holds something other than "quick" or "deep".
    #[error("unknown scenarioMode '{0}'")]
    UnknownScenarioMode(String),
}

/// The complete persisted state, stored as a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSnapshot {
    /// Whether software and agency costs count against the deal.
    pub advanced_costs_enabled: bool,

    /// Acceptance threshold in currency per hour.
    pub minimum_floor: Decimal,

    /// The deal terms as last edited.
    pub inputs: DealInputs,
}

impl Default for PersistedSnapshot {
    fn default() -> Self {
        Self {
            advanced_costs_enabled: false,
            minimum_floor: Decimal::ONE_HUNDRED,
            inputs: DealInputs::default(),
        }
    }
}

/// On-disk shape before migration: either the current boolean flag or the
/// legacy `scenarioMode` string may be present.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    advanced_costs_enabled: Option<bool>,
    scenario_mode: Option<String>,
    minimum_floor: Decimal,
    inputs: DealInputs,
}

/// Rewrites a raw on-disk record into the current schema.
///
/// Legacy `"deep"` maps to advanced costs on, `"quick"` to off; the legacy
/// field does not survive migration. When both fields are somehow present
/// the current-schema boolean wins. Loading a legacy `"quick"` record does
/// NOT zero the advanced cost fields; only an interactive mode-disable does
/// that (see the session rules).
fn migrate(raw: RawSnapshot) -> Result<PersistedSnapshot, MigrationError> {
    let advanced_costs_enabled = match (raw.advanced_costs_enabled, raw.scenario_mode) {
        (Some(enabled), _) => enabled,
        (None, Some(mode)) => match mode.as_str() {
            "deep" => true,
            "quick" => false,
            other => return Err(MigrationError::UnknownScenarioMode(other.to_string())),
        },
        (None, None) => return Err(MigrationError::MissingModeField),
    };

    Ok(PersistedSnapshot {
        advanced_costs_enabled,
        minimum_floor: raw.minimum_floor,
        inputs: raw.inputs,
    })
}

/// Serializes a snapshot to its TOML document form.
pub(crate) fn encode(snapshot: &PersistedSnapshot) -> Result<String, SnapshotError> {
    Ok(toml::to_string_pretty(snapshot)?)
}

/// Parses a TOML document into a current-schema snapshot, migrating the
/// legacy shape when necessary.
pub(crate) fn decode(text: &str) -> Result<PersistedSnapshot, SnapshotError> {
    let raw: RawSnapshot = toml::from_str(text)?;
    Ok(migrate(raw)?)
}
