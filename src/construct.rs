//! src/construct.rs
//!
//! Gerandomiseerde greedy constructie (de "G-R" in GRASP). Bouwt in één
//! doorgang een haalbare oplossing door telkens willekeurig te kiezen uit de
//! Restricted Candidate List (RCL).
use crate::{instance::Instance, score::Candidate, solution::Solution};
use bitvec::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

/// Creëert een haalbare oplossing met de gerandomiseerde greedy heuristiek.
///
/// Per stap:
/// 1. Het eerste toelaatbare item in `ranking` (niet verboden, past in de
///    resterende capaciteit) bepaalt de beste score `s_max`.
/// 2. De RCL bevat alle toelaatbare items vanaf die positie met score
///    `>= alpha * s_max`; de scan stopt bij de eerste score onder de drempel.
/// 3. Een uniform gekozen RCL-item wordt toegevoegd; het item en al zijn
///    conflictburen worden verboden.
///
/// `ranking` moet aflopend gesorteerd zijn (zie `score::rank_candidates`).
/// Met `alpha = 1` is de constructie deterministisch (op gelijke scores na).
pub fn greedy_randomized<'i, R>(
    instance: &'i Instance,
    ranking: &[Candidate],
    alpha: f64,
    rng: &mut R,
) -> Solution<'i>
where
    R: Rng + ?Sized,
{
    let mut sol = Solution::new(instance);
    // Verboden: reeds gekozen items en al hun conflictburen.
    let mut forbidden = bitvec![0; instance.n()];
    let mut rcl: Vec<usize> = Vec::new();

    loop {
        let residual = sol.residual();
        let admissible = |c: &Candidate| !forbidden[c.item] && instance.weight(c.item) <= residual;

        let Some(first) = ranking.iter().position(|c| admissible(c)) else {
            break;
        };
        let threshold = ranking[first].score * alpha;

        rcl.clear();
        for c in &ranking[first..] {
            if c.score < threshold {
                break;
            }
            if admissible(c) {
                rcl.push(c.item);
            }
        }

        let Some(&chosen) = rcl.choose(rng) else {
            break;
        };
        sol.add(chosen);
        forbidden.set(chosen, true);
        for k in instance.neigh_row(chosen).iter_ones() {
            forbidden.set(k, true);
        }
    }
    sol
}
