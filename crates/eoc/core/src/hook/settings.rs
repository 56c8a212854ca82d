//! Trigger settings shared by hooks and emitted records.

use crate::effect::Guard;

/// How the game schedules a record.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EocType {
    /// Runs only when invoked by another record.
    Activation,
    /// Runs on a timer.
    Recurring,
    /// Runs when the game fires `required_event`.
    Event,
    /// Runs when the avatar moves on the overmap.
    OmMove,
}

/// Trigger kind and the fields that go with it.
///
/// Unset optional fields and `false` flags are left out when serialized.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BaseSettings {
    pub eoc_type: EocType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Guard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_event: Option<String>,
    /// Seconds between runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<u32>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub global: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub run_for_npcs: bool,
}

impl BaseSettings {
    pub fn new(eoc_type: EocType) -> Self {
        Self {
            eoc_type,
            condition: None,
            required_event: None,
            recurrence: None,
            global: false,
            run_for_npcs: false,
        }
    }

    pub fn activation() -> Self {
        Self::new(EocType::Activation)
    }

    pub fn event(required_event: impl Into<String>) -> Self {
        Self {
            required_event: Some(required_event.into()),
            ..Self::new(EocType::Event)
        }
    }

    pub fn recurring(seconds: u32) -> Self {
        Self {
            recurrence: Some(seconds),
            ..Self::new(EocType::Recurring)
        }
    }

    pub fn om_move() -> Self {
        Self::new(EocType::OmMove)
    }

    /// Builder: set the trigger condition.
    pub fn with_condition(mut self, condition: Guard) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Builder: run for every loaded character, NPCs included.
    pub fn for_everyone(mut self) -> Self {
        self.global = true;
        self.run_for_npcs = true;
        self
    }
}
