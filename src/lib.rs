// src/lib.rs

// Publieke modules voor gebruik binnen de Rust-crate
pub mod construct;
pub mod feasibility;
pub mod grasp;
pub mod instance;
pub mod neighbour;
pub mod params;
pub mod score;
pub mod solution;

#[cfg(feature = "python")]
mod python;

// Her-exporteer de belangrijkste types voor Rust-gebruikers
pub use feasibility::{check_solution, Validity, WarmStart};
pub use grasp::{solve_grasp, solve_runs, GraspResult, Status};
pub use instance::Instance;
pub use params::Params;
pub use solution::Solution;
