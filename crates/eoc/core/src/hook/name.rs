//! Closed set of hook names shipped with the default catalog.

/// Who `u` and `n` refer to inside a hook's effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum HookScope {
    /// `u` is the avatar, `n` is undefined.
    Global,
    /// `u` is the character, `n` is undefined.
    Character,
    /// `u` is the acting character, `n` is the target.
    Interaction,
}

/// Built-in hook names, declared in catalog order.
///
/// The string form of each variant is part of the emitted record id
/// (`{prefix}_{name}_EVENT`), so spellings are fixed. `SucessMeleeAttack` is
/// kept as shipped for that reason.
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
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::EnumCount,
)]
pub enum HookName {
    GameBegin,
    TakeDamage,
    TryMeleeAtkChar,
    TryMeleeAtkMon,
    TryMeleeAttack,
    SucessMeleeAttack,
    MissMeleeAttack,
    TryRangeAtkChar,
    TryRangeAtkMon,
    TryRangeAttack,
    TryAttack,
    EnterBattle,
    LeaveBattle,
    BattleUpdate,
    NonBattleUpdate,
    DeathPrev,
    Death,
    AvatarMove,
    Update,
    Init,
    NpcUpdate,
    SlowUpdate,
    AvatarUpdate,
    WieldItemRaw,
    WieldItem,
    StowItem,
    WearItem,
    EatItem,
    MoveStatus,
    IdleStatus,
    AttackStatus,
}

impl HookName {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub const fn scope(self) -> HookScope {
        match self {
            Self::AvatarMove | Self::AvatarUpdate | Self::GameBegin => HookScope::Global,
            Self::TryMeleeAtkChar
            | Self::TryMeleeAtkMon
            | Self::TryRangeAtkChar
            | Self::TryRangeAtkMon
            | Self::TryMeleeAttack
            | Self::TryRangeAttack
            | Self::TryAttack
            | Self::SucessMeleeAttack
            | Self::MissMeleeAttack => HookScope::Interaction,
            _ => HookScope::Character,
        }
    }
}
