//! Weighted effect contributions.

use crate::effect::Effect;

/// One caller's weighted effect sequence for a single hook.
#[derive(Clone, Debug, PartialEq)]
pub struct Contribution {
    weight: f64,
    effects: Vec<Effect>,
}

impl Contribution {
    pub fn new(weight: f64, effects: Vec<Effect>) -> Self {
        Self { weight, effects }
    }

    /// Sort weight. Larger values are emitted first; fractions are allowed.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }
}

/// Flattens contributions into one effect list, heaviest first.
///
/// The sort is stable: equal weights keep registration order. Weights are
/// ordered with `f64::total_cmp`, so NaN has a fixed place.
pub(crate) fn flatten_by_weight(contributions: &[Contribution]) -> Vec<Effect> {
    let mut ordered: Vec<&Contribution> = contributions.iter().collect();
    ordered.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    ordered
        .into_iter()
        .flat_map(|c| c.effects.iter().cloned())
        .collect()
}
