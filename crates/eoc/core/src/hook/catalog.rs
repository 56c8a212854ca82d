//! Default hook catalog.
//!
//! Every built-in hook is authored here as plain data. Several hooks fan out
//! into others by invoking their record ids in their after-effects:
//!
//! ```text
//! TryMeleeAtkChar ─┐
//! TryMeleeAtkMon  ─┴─> TryMeleeAttack ─┬─> TryAttack ──> EnterBattle
//!                                      └─> SucessMeleeAttack | MissMeleeAttack
//! TryRangeAtkChar ─┐
//! TryRangeAtkMon  ─┴─> TryRangeAttack ───> TryAttack
//! TakeDamage ──> EnterBattle
//! DeathPrev  ──> Death
//! WieldItemRaw ──> StowItem | WieldItem
//! Update ──> Init, NpcUpdate, BattleUpdate, LeaveBattle, NonBattleUpdate,
//!            MoveStatus | IdleStatus | AttackStatus
//! ```
//!
//! The graph is acyclic. Custom hooks are never invoked from here.

use serde_json::json;
use strum::IntoEnumIterator;

use super::{BaseSettings, Hook, HookName, Namespace};
use crate::config::HookOptions;
use crate::effect::{Effect, Guard};

/// Builds the full catalog, in [`HookName`] declaration order.
pub fn build_catalog(prefix: &str, options: &HookOptions) -> Vec<(HookName, Hook)> {
    let authoring = Authoring {
        ns: Namespace::new(prefix),
        options: *options,
    };

    HookName::iter()
        .map(|name| (name, authoring.define(name)))
        .collect()
}

struct Authoring {
    ns: Namespace,
    options: HookOptions,
}

impl Authoring {
    fn define(&self, name: HookName) -> Hook {
        let ns = &self.ns;

        match name {
            HookName::GameBegin => Hook::new(BaseSettings::event("game_begin")),

            HookName::TakeDamage => Hook::new(BaseSettings::event("character_takes_damage"))
                .after(self.battle_bookkeeping()),

            HookName::TryMeleeAtkChar => {
                Hook::new(BaseSettings::event("character_melee_attacks_character"))
                    .after(vec![ns.invoke(HookName::TryMeleeAttack)])
            }

            HookName::TryMeleeAtkMon => {
                Hook::new(BaseSettings::event("character_melee_attacks_monster"))
                    .after(vec![ns.invoke(HookName::TryMeleeAttack)])
            }

            HookName::TryMeleeAttack => Hook::new(BaseSettings::activation()).after(vec![
                ns.invoke(HookName::TryAttack),
                Effect::when_else(
                    Guard::math("_hits", "==", 1),
                    vec![ns.invoke(HookName::SucessMeleeAttack)],
                    vec![ns.invoke(HookName::MissMeleeAttack)],
                ),
            ]),

            HookName::TryRangeAtkChar => {
                Hook::new(BaseSettings::event("character_ranged_attacks_character"))
                    .after(vec![ns.invoke(HookName::TryRangeAttack)])
            }

            HookName::TryRangeAtkMon => {
                Hook::new(BaseSettings::event("character_ranged_attacks_monster"))
                    .after(vec![ns.invoke(HookName::TryRangeAttack)])
            }

            HookName::TryRangeAttack => {
                Hook::new(BaseSettings::activation()).after(vec![ns.invoke(HookName::TryAttack)])
            }

            HookName::TryAttack => Hook::new(BaseSettings::activation())
                .before(vec![Effect::math(
                    ns.u_var("notIdleOrMoveStatus"),
                    "=",
                    self.options.status_duration,
                )])
                .after(self.battle_bookkeeping()),

            HookName::DeathPrev => Hook::new(BaseSettings::event("character_dies")).after(vec![
                Effect::when_else(
                    Guard::or([
                        Guard::math("u_hp('head')", "<=", 0),
                        Guard::math("u_hp('torso')", "<=", 0),
                    ]),
                    vec![ns.invoke(HookName::Death)],
                    vec![Effect::opaque("u_prevent_death")],
                ),
            ]),

            HookName::AvatarMove => Hook::new(BaseSettings::om_move()),

            HookName::Update => Hook::new(BaseSettings::recurring(1).for_everyone())
                .before(vec![Effect::when(
                    Guard::math(ns.u_var("isInit"), "!=", 1),
                    vec![
                        ns.invoke(HookName::Init),
                        Effect::math(ns.u_var("isInit"), "=", 1),
                    ],
                )])
                .after(self.update_dispatch()),

            HookName::SlowUpdate => Hook::new(
                BaseSettings::recurring(self.options.slow_update_interval).for_everyone(),
            ),

            HookName::AvatarUpdate => Hook::new(BaseSettings::recurring(1)),

            HookName::WieldItemRaw => Hook::new(BaseSettings::event("character_wields_item"))
                .after(vec![Effect::when_else(
                    Guard::compare_string("null", json!({ "context_val": "itype" })),
                    vec![ns.invoke(HookName::StowItem)],
                    vec![ns.invoke(HookName::WieldItem)],
                )]),

            HookName::WearItem => Hook::new(BaseSettings::event("character_wears_item")),

            HookName::EatItem => Hook::new(BaseSettings::event("character_eats_item")),

            HookName::SucessMeleeAttack
            | HookName::MissMeleeAttack
            | HookName::EnterBattle
            | HookName::LeaveBattle
            | HookName::BattleUpdate
            | HookName::NonBattleUpdate
            | HookName::Death
            | HookName::Init
            | HookName::NpcUpdate
            | HookName::WieldItem
            | HookName::StowItem
            | HookName::MoveStatus
            | HookName::IdleStatus
            | HookName::AttackStatus => Hook::default(),
        }
    }

    /// Enters battle if not already in it, then refreshes the battle timer.
    fn battle_bookkeeping(&self) -> Vec<Effect> {
        let in_battle = self.ns.u_var("inBattle");
        vec![
            Effect::when(
                Guard::math(in_battle.as_str(), "<=", 0),
                vec![self.ns.invoke(HookName::EnterBattle)],
            ),
            Effect::math(in_battle, "=", self.options.battle_duration),
        ]
    }

    fn update_dispatch(&self) -> Vec<Effect> {
        let ns = &self.ns;
        let in_battle = ns.u_var("inBattle");
        let on_move = ns.u_var("onMoveStatus");
        let status = ns.u_var("notIdleOrMoveStatus");
        let u_preloc = ns.u_var("char_preloc");
        let global_preloc = ns.global_var("char_preloc");

        let mut effects = vec![Effect::when(
            Guard::raw("u_is_npc"),
            vec![ns.invoke(HookName::NpcUpdate)],
        )];

        if self.options.enable_move_status {
            effects.extend([
                Effect::when_else(
                    Guard::math(in_battle.as_str(), ">", 0),
                    vec![
                        ns.invoke(HookName::BattleUpdate),
                        Effect::math(in_battle.as_str(), "-=", 1),
                        Effect::when(
                            Guard::math(in_battle.as_str(), "<=", 0),
                            vec![ns.invoke(HookName::LeaveBattle)],
                        ),
                    ],
                    vec![ns.invoke(HookName::NonBattleUpdate)],
                ),
                // Copy into a global so the location strings compare cleanly.
                Effect::opaque(json!({
                    "set_string_var": { "u_val": u_preloc },
                    "target_var": { "global_val": global_preloc },
                })),
                Effect::when_else(
                    Guard::compare_string(
                        json!({ "global_val": global_preloc }),
                        json!({ "mutator": "loc_relative_u", "target": "(0,0,0)" }),
                    ),
                    vec![Effect::math(on_move.as_str(), "=", 0)],
                    vec![Effect::math(on_move.as_str(), "=", 1)],
                ),
                Effect::opaque(json!({ "u_location_variable": { "u_val": u_preloc } })),
            ]);
        }

        // Move, idle and attack statuses are mutually exclusive.
        effects.push(Effect::when_else(
            Guard::math(status.as_str(), "<=", 0),
            vec![Effect::when_else(
                Guard::math(on_move, ">=", 1),
                vec![ns.invoke(HookName::MoveStatus)],
                vec![ns.invoke(HookName::IdleStatus)],
            )],
            vec![
                ns.invoke(HookName::AttackStatus),
                Effect::math(status, "-=", 1),
            ],
        ));

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::EnumCount;

    fn catalog() -> Vec<(HookName, Hook)> {
        build_catalog("mod", &HookOptions::default())
    }

    fn hook(catalog: &[(HookName, Hook)], name: HookName) -> &Hook {
        &catalog
            .iter()
            .find(|(n, _)| *n == name)
            .expect("hook should be in catalog")
            .1
    }

    /// Every record id invoked anywhere inside `effects`.
    fn invoked(effects: &[Effect], out: &mut Vec<String>) {
        for effect in effects {
            match effect {
                Effect::Invocation(targets) => out.extend(targets.iter().cloned()),
                Effect::Conditional(c) => {
                    invoked(&c.then, out);
                    if let Some(otherwise) = &c.otherwise {
                        invoked(otherwise, out);
                    }
                }
                Effect::Opaque(_) => {}
            }
        }
    }

    #[test]
    fn covers_every_hook_once_in_order() {
        let catalog = catalog();
        let names: Vec<HookName> = catalog.iter().map(|(n, _)| *n).collect();
        let expected: Vec<HookName> = HookName::iter().collect();

        assert_eq!(catalog.len(), HookName::COUNT);
        assert_eq!(names, expected);
        assert_eq!(names.first(), Some(&HookName::GameBegin));
        assert_eq!(names.last(), Some(&HookName::AttackStatus));
    }

    #[test]
    fn death_has_no_fixed_effects() {
        let catalog = catalog();
        let death = hook(&catalog, HookName::Death);

        assert_eq!(death.base_setting, BaseSettings::activation());
        assert!(death.before_effects.is_empty());
        assert!(death.after_effects.is_empty());
    }

    #[test]
    fn melee_attack_fans_out() {
        let catalog = catalog();
        let melee = hook(&catalog, HookName::TryMeleeAttack);

        assert_eq!(melee.after_effects[0], Effect::invoke(["mod_TryAttack_EVENT"]));
        let branch = melee.after_effects[1]
            .as_conditional()
            .expect("hit check should be conditional");
        assert_eq!(branch.then, vec![Effect::invoke(["mod_SucessMeleeAttack_EVENT"])]);
        assert_eq!(
            branch.otherwise,
            Some(vec![Effect::invoke(["mod_MissMeleeAttack_EVENT"])])
        );
    }

    #[test]
    fn options_are_baked_in() {
        let options = HookOptions {
            status_duration: 7,
            battle_duration: 90,
            slow_update_interval: 300,
            enable_move_status: true,
        };
        let catalog = build_catalog("mod", &options);

        let slow = hook(&catalog, HookName::SlowUpdate);
        assert_eq!(slow.base_setting.recurrence, Some(300));
        assert!(slow.base_setting.global && slow.base_setting.run_for_npcs);

        let attack = hook(&catalog, HookName::TryAttack);
        assert_eq!(
            attack.before_effects,
            vec![Effect::math("u_mod_notIdleOrMoveStatus", "=", 7)]
        );
        assert_eq!(
            attack.after_effects[1],
            Effect::math("u_mod_inBattle", "=", 90)
        );
    }

    #[test]
    fn move_status_toggle_controls_update_body() {
        let enabled = catalog();
        let disabled = build_catalog(
            "mod",
            &HookOptions {
                enable_move_status: false,
                ..HookOptions::default()
            },
        );

        assert_eq!(hook(&enabled, HookName::Update).after_effects.len(), 6);
        assert_eq!(hook(&disabled, HookName::Update).after_effects.len(), 2);
    }

    #[test]
    fn invocations_only_target_catalog_hooks() {
        let catalog = catalog();
        let ids: HashSet<String> = HookName::iter()
            .map(|n| format!("mod_{}_EVENT", n))
            .collect();

        for (name, hook) in &catalog {
            let mut targets = Vec::new();
            invoked(&hook.before_effects, &mut targets);
            invoked(&hook.after_effects, &mut targets);
            for target in targets {
                assert!(ids.contains(&target), "{name} invokes unknown {target}");
                assert_ne!(target, format!("mod_{}_EVENT", name), "{name} invokes itself");
            }
        }
    }
}
