//! Adjacency-only merge passes over flattened effect lists.
//!
//! Both passes scan left to right and compare the incoming effect with the
//! last accumulated one. Nothing is ever reordered, and a non-matching effect
//! in between always breaks a run.

use super::{ConditionalEffect, Effect};

/// Runs the conditional pass followed by the invocation pass.
pub fn merge_effects(effects: Vec<Effect>) -> Vec<Effect> {
    merge_invocations(merge_conditionals(effects))
}

/// Coalesces adjacent conditionals with identical guards.
///
/// Only conditionals without an `else` branch take part. The combined `then`
/// branch goes through [`merge_invocations`] after every append.
pub fn merge_conditionals(effects: Vec<Effect>) -> Vec<Effect> {
    let mut merged: Vec<Effect> = Vec::with_capacity(effects.len());

    for effect in effects {
        let effect = match (merged.last_mut(), effect) {
            (Some(Effect::Conditional(last)), Effect::Conditional(current))
                if last.can_absorb(&current) =>
            {
                last.absorb(current);
                continue;
            }
            (_, effect) => effect,
        };
        merged.push(effect);
    }

    merged
}

/// Concatenates the targets of adjacent invocations into one node.
pub fn merge_invocations(effects: Vec<Effect>) -> Vec<Effect> {
    let mut merged: Vec<Effect> = Vec::with_capacity(effects.len());

    for effect in effects {
        let effect = match (merged.last_mut(), effect) {
            (Some(Effect::Invocation(last)), Effect::Invocation(current)) => {
                last.extend(current);
                continue;
            }
            (_, effect) => effect,
        };
        merged.push(effect);
    }

    merged
}

impl ConditionalEffect {
    fn can_absorb(&self, other: &ConditionalEffect) -> bool {
        !self.has_else() && !other.has_else() && self.guard == other.guard
    }

    fn absorb(&mut self, other: ConditionalEffect) {
        let mut then = std::mem::take(&mut self.then);
        then.extend(other.then);
        self.then = merge_invocations(then);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::Guard;

    fn cond(guard: &str, then: Vec<Effect>) -> Effect {
        Effect::when(Guard::raw(guard), then)
    }

    fn other() -> Effect {
        Effect::math("u_x", "+=", 1)
    }

    #[test]
    fn adjacent_conditionals_with_same_guard_merge() {
        let merged = merge_effects(vec![
            cond("A", vec![other()]),
            cond("A", vec![Effect::opaque("y")]),
        ]);

        assert_eq!(merged, vec![cond("A", vec![other(), Effect::opaque("y")])]);
    }

    #[test]
    fn conditionals_separated_by_other_effect_stay_apart() {
        let input = vec![
            cond("A", vec![Effect::opaque("x")]),
            other(),
            cond("A", vec![Effect::opaque("y")]),
        ];

        assert_eq!(merge_effects(input.clone()), input);
    }

    #[test]
    fn different_guards_break_the_run() {
        let input = vec![
            cond("A", vec![Effect::opaque("x")]),
            cond("B", vec![Effect::opaque("y")]),
            cond("A", vec![Effect::opaque("z")]),
        ];

        assert_eq!(merge_effects(input.clone()), input);
    }

    #[test]
    fn conditionals_with_else_never_merge() {
        let with_else = Effect::when_else(
            Guard::raw("A"),
            vec![Effect::opaque("x")],
            vec![Effect::opaque("e")],
        );

        let leading = vec![with_else.clone(), cond("A", vec![Effect::opaque("y")])];
        assert_eq!(merge_effects(leading.clone()), leading);

        let trailing = vec![cond("A", vec![Effect::opaque("y")]), with_else];
        assert_eq!(merge_effects(trailing.clone()), trailing);
    }

    #[test]
    fn merged_then_branch_coalesces_invocations() {
        let merged = merge_effects(vec![
            cond("A", vec![Effect::invoke(["a"])]),
            cond("A", vec![Effect::invoke(["b"])]),
            cond("A", vec![Effect::invoke(["c"])]),
        ]);

        assert_eq!(merged, vec![cond("A", vec![Effect::invoke(["a", "b", "c"])])]);
    }

    #[test]
    fn adjacent_invocations_merge() {
        let merged = merge_effects(vec![Effect::invoke(["a"]), Effect::invoke(["b", "c"])]);

        assert_eq!(merged, vec![Effect::invoke(["a", "b", "c"])]);
    }

    #[test]
    fn invocations_separated_by_conditional_stay_apart() {
        let input = vec![
            Effect::invoke(["a"]),
            cond("A", vec![Effect::opaque("x")]),
            Effect::invoke(["b"]),
        ];

        assert_eq!(merge_effects(input.clone()), input);
    }

    #[test]
    fn unmerged_conditional_branches_are_left_alone() {
        let input = vec![cond(
            "A",
            vec![Effect::invoke(["a"]), Effect::invoke(["b"])],
        )];

        assert_eq!(merge_effects(input.clone()), input);
    }
}
