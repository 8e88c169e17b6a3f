//! src/score.rs
//!
//! Statische aantrekkelijkheidsscore per item en de eenmalig gesorteerde
//! kandidatenlijst waarop de constructiefase steunt.

use crate::instance::Instance;

/// Vervangt een gewicht van 0 in de noemer van de score.
pub const ZERO_WEIGHT_EPS: f64 = 1e-5;

/// Een item met zijn score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub score: f64,
    pub item: usize,
}

/// `(winst / gewicht) / (1 + 0.5 * graad)`: winstdichtheid, afgezwakt naarmate
/// het item met meer andere items conflicteert.
pub fn desirability(instance: &Instance, i: usize) -> f64 {
    let w = match instance.weight(i) {
        0 => ZERO_WEIGHT_EPS,
        w => w as f64,
    };
    (instance.profit(i) as f64 / w) / (1.0 + 0.5 * instance.degree(i) as f64)
}

/// Alle items, aflopend op score; gelijke scores op oplopende index.
pub fn rank_candidates(instance: &Instance) -> Vec<Candidate> {
    let mut ranking: Vec<Candidate> = (0..instance.n())
        .map(|item| Candidate {
            score: desirability(instance, item),
            item,
        })
        .collect();
    ranking.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.item.cmp(&b.item)));
    ranking
}
