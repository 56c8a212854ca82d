/// Tunable parameters baked into the default hook catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HookOptions {
    /// Seconds an actor stays in the attack status after trying an attack.
    pub status_duration: u32,
    /// Seconds an actor stays in battle after the last hostile interaction.
    pub battle_duration: u32,
    /// Recurrence of the slow update hook, in seconds.
    pub slow_update_interval: u32,
    /// Emits battle countdown and movement detection inside the update hook.
    pub enable_move_status: bool,
}

impl HookOptions {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STATUS_DURATION: u32 = 4;
    pub const DEFAULT_BATTLE_DURATION: u32 = 60;
    pub const DEFAULT_SLOW_UPDATE_INTERVAL: u32 = 60;
    pub const DEFAULT_ENABLE_MOVE_STATUS: bool = true;

    pub fn new() -> Self {
        Self {
            status_duration: Self::DEFAULT_STATUS_DURATION,
            battle_duration: Self::DEFAULT_BATTLE_DURATION,
            slow_update_interval: Self::DEFAULT_SLOW_UPDATE_INTERVAL,
            enable_move_status: Self::DEFAULT_ENABLE_MOVE_STATUS,
        }
    }

    /// Applies caller-supplied overrides onto this record.
    ///
    /// Fields left as `None` in `overrides` keep their current value.
    #[must_use]
    pub fn apply(mut self, overrides: &HookOptionsOverride) -> Self {
        if let Some(status_duration) = overrides.status_duration {
            self.status_duration = status_duration;
        }
        if let Some(battle_duration) = overrides.battle_duration {
            self.battle_duration = battle_duration;
        }
        if let Some(slow_update_interval) = overrides.slow_update_interval {
            self.slow_update_interval = slow_update_interval;
        }
        if let Some(enable_move_status) = overrides.enable_move_status {
            self.enable_move_status = enable_move_status;
        }
        self
    }
}

impl Default for HookOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial [`HookOptions`] as supplied by callers or option files.
///
/// Unknown keys are ignored when deserializing. The camel-case aliases accept
/// option files written for older generators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HookOptionsOverride {
    #[serde(alias = "statusDur", skip_serializing_if = "Option::is_none")]
    pub status_duration: Option<u32>,
    #[serde(alias = "battleDur", skip_serializing_if = "Option::is_none")]
    pub battle_duration: Option<u32>,
    #[serde(alias = "slowCounter", skip_serializing_if = "Option::is_none")]
    pub slow_update_interval: Option<u32>,
    #[serde(alias = "enableMoveStatus", skip_serializing_if = "Option::is_none")]
    pub enable_move_status: Option<bool>,
}

impl HookOptionsOverride {
    /// Returns true if no field is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
