//! src/params.rs
//!
//! Bundelt alle afstembare parameters voor de GRASP-oplosser.

/// Alle afstembare besturingselementen voor GRASP.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    /// Aantal iteraties (constructie + lokale zoektocht) per run.
    pub max_iterations: usize,
    /// RCL-drempel in (0, 1]; 1 is puur greedy, dicht bij 0 bijna uniform willekeurig.
    pub alpha: f64,
    /// Aantal onafhankelijke runs voor `grasp::solve_runs`.
    pub runs: usize,
    /// Basis-seed; run `i` gebruikt `seed + i`.
    pub seed: u64,
}

impl Params {
    pub fn new(max_iterations: usize, alpha: f64, runs: usize, seed: u64) -> Self {
        Self {
            max_iterations,
            alpha,
            runs,
            seed,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Params {
            max_iterations: 50,
            alpha: 0.8,
            runs: 1,
            seed: 42,
        }
    }
}
