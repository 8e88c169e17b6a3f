//! src/grasp.rs
//!
//! De GRASP-lus: herhaal constructie + lokale zoektocht voor een vast aantal
//! iteraties en onthoud de beste oplossing (de incumbent). Daarnaast
//! `solve_runs` voor meerdere onafhankelijke, geseede runs.
use crate::{
    construct::greedy_randomized, instance::Instance, neighbour::local_search, params::Params,
    score::rank_candidates,
};
use log::{debug, info, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::time::Instant;

#[cfg(feature = "parallel_runs")]
use rayon::prelude::*;

/// Status van een GRASP-resultaat. De heuristiek bewijst nooit optimaliteit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Feasible,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Feasible => "FEASIBLE",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resultaat van één oplosaanroep.
#[derive(Clone, Debug, PartialEq)]
pub struct GraspResult {
    pub status: Status,
    /// Som van de winsten van `selected_items`.
    pub objective: u64,
    /// Verstreken wandkloktijd in seconden.
    pub time: f64,
    /// Geselecteerde items, oplopend.
    pub selected_items: Vec<usize>,
}

impl GraspResult {
    fn empty(time: f64) -> Self {
        Self {
            status: Status::Feasible,
            objective: 0,
            time,
            selected_items: Vec::new(),
        }
    }
}

/// Voert `p.max_iterations` GRASP-iteraties uit met de meegegeven RNG.
///
/// De ranking wordt eenmaal berekend en door alle iteraties gedeeld. Alleen
/// een strikt betere winst vervangt de incumbent, dus bij een vaste seed is
/// het resultaat na `k + 1` iteraties nooit slechter dan na `k`.
pub fn solve_grasp<R>(instance: &Instance, rng: &mut R, p: &Params) -> GraspResult
where
    R: Rng + ?Sized,
{
    let start = Instant::now();
    let ranking = rank_candidates(instance);

    let mut best_profit = 0u64;
    let mut best_items: Vec<usize> = Vec::new();

    for iter in 0..p.max_iterations {
        // A. Constructie
        let mut sol = greedy_randomized(instance, &ranking, p.alpha, rng);
        let built = sol.profit();

        // B. Lokale zoektocht
        let moves = local_search(&mut sol, rng);
        trace!(
            "[GRASP] iter {}: built {} -> {} ({} adds, {} swaps)",
            iter,
            built,
            sol.profit(),
            moves.adds,
            moves.swaps
        );

        // C. Incumbent bijwerken
        if sol.profit() > best_profit {
            debug!(
                "[GRASP] iter {}: new incumbent {} ({} items, weight {}/{})",
                iter,
                sol.profit(),
                sol.size(),
                sol.weight(),
                instance.capacity()
            );
            best_profit = sol.profit();
            best_items = sol.selected_items();
        }
    }

    let time = start.elapsed().as_secs_f64();
    info!(
        "[GRASP] n={} iterations={} alpha={}: objective {} in {:.3}s",
        instance.n(),
        p.max_iterations,
        p.alpha,
        best_profit,
        time
    );
    GraspResult {
        status: Status::Feasible,
        objective: best_profit,
        time,
        selected_items: best_items,
    }
}

/// Eén run met een eigen RNG, geseed op `p.seed + run`.
fn seeded_run(instance: &Instance, p: &Params, run: usize) -> GraspResult {
    let mut rng = ChaCha8Rng::seed_from_u64(p.seed.wrapping_add(run as u64));
    solve_grasp(instance, &mut rng, p)
}

/// Voert `p.runs` onafhankelijke runs uit en geeft de beste terug (bij gelijke
/// winst de run met de laagste index). `time` is de totale wandkloktijd.
///
/// Elke run heeft zijn eigen RNG, dus het resultaat hangt niet af van het
/// wel of niet parallel uitvoeren.
pub fn solve_runs(instance: &Instance, p: &Params) -> GraspResult {
    let start = Instant::now();

    #[cfg(feature = "parallel_runs")]
    let results: Vec<GraspResult> = (0..p.runs)
        .into_par_iter()
        .map(|run| seeded_run(instance, p, run))
        .collect();

    #[cfg(not(feature = "parallel_runs"))]
    let results: Vec<GraspResult> = (0..p.runs).map(|run| seeded_run(instance, p, run)).collect();

    let time = start.elapsed().as_secs_f64();
    let best = results
        .into_iter()
        .reduce(|best, r| if r.objective > best.objective { r } else { best });
    match best {
        Some(best) => GraspResult { time, ..best },
        None => GraspResult::empty(time),
    }
}
