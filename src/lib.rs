//! Ant colony optimization for the travelling salesman problem.
//!
//! Generations of ants build closed tours over a [`CostModel`], guided by a
//! shared [`PheromoneField`]. After every generation the colony evaporates the
//! field and adds each ant's deposit, then starts the next generation from the
//! updated field.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;

pub mod ant;
pub mod cities;
pub mod colony;
pub mod config;
pub mod cost;
pub mod error;
pub mod pheromone;

pub use ant::{Ant, construct_tour};
pub use cities::{load_points, parse_points};
pub use colony::{Colony, Solution};
pub use config::{ColonyConfig, InitialPheromone, RewardPolicy, StartNode};
pub use cost::{CostModel, Point, is_permutation};
pub use error::{AcoError, AcoResult};
pub use pheromone::{PheromoneDelta, PheromoneField};

/// Solves `model` from a seeded `SmallRng` and reports how long the
/// generation loop took.
pub fn run_solve_phase(
    colony: &Colony,
    model: &CostModel,
    seed: u64,
    parallel: bool,
) -> AcoResult<(Solution, Duration)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let start = Instant::now();
    let solution = if parallel {
        colony.solve_parallel(model, &mut rng)?
    } else {
        colony.solve(model, &mut rng)?
    };
    Ok((solution, start.elapsed()))
}
