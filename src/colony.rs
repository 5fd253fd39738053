//! The generation loop: build tours, record the best, update pheromone.

use rand::prelude::*;
use rand::rngs::SmallRng;
use rayon::prelude::*;

use crate::ant::{Ant, construct_tour};
use crate::config::ColonyConfig;
use crate::cost::CostModel;
use crate::error::{AcoError, AcoResult};
use crate::pheromone::PheromoneField;

/// Best tour found by a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub tour: Vec<usize>,
    pub cost: f64,
    /// Best cost known at the end of each generation.
    pub history: Vec<f64>,
}

/// A validated set of colony parameters. Every solve builds its own
/// pheromone field, so one `Colony` can be reused across problems.
#[derive(Debug, Clone)]
pub struct Colony {
    config: ColonyConfig,
}

impl Colony {
    pub fn new(config: ColonyConfig) -> AcoResult<Self> {
        config.validate()?;
        Ok(Colony { config })
    }

    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    /// Runs every generation on the calling thread, drawing all randomness
    /// from `rng` in ant order.
    pub fn solve<R: Rng>(&self, model: &CostModel, rng: &mut R) -> AcoResult<Solution> {
        self.run(model, |field| {
            phase_construct_tours(model, field, &self.config, &mut *rng)
        })
    }

    /// Same loop, but the ants of a generation build their tours on the rayon
    /// pool. Each ant gets its own `SmallRng` seeded from `rng`, so a given
    /// seed still reproduces the same result.
    pub fn solve_parallel<R: Rng>(&self, model: &CostModel, rng: &mut R) -> AcoResult<Solution> {
        self.run(model, |field| {
            phase_construct_tours_parallel(model, field, &self.config, &mut *rng)
        })
    }

    fn run<F>(&self, model: &CostModel, mut construct: F) -> AcoResult<Solution>
    where
        F: FnMut(&PheromoneField) -> AcoResult<Vec<Ant>>,
    {
        let node_count = model.node_count();
        self.config.validate_for(node_count)?;

        let mut field = PheromoneField::new(
            node_count,
            self.config.initial_pheromone.value(node_count),
        );
        let mut best: Option<(Vec<usize>, f64)> = None;
        let mut history = Vec::with_capacity(self.config.generations);

        for _ in 0..self.config.generations {
            let ants = construct(&field)?;
            phase_record_best(&ants, &mut best);
            phase_update_pheromone(&mut field, &self.config, &ants);
            if let Some((_, cost)) = &best {
                history.push(*cost);
            }
        }

        let (tour, cost) = best.ok_or_else(|| AcoError::invalid("no ants were run"))?;
        Ok(Solution {
            tour,
            cost,
            history,
        })
    }
}

/// Every ant of one generation builds its tour against the same field.
pub fn phase_construct_tours<R: Rng>(
    model: &CostModel,
    field: &PheromoneField,
    config: &ColonyConfig,
    rng: &mut R,
) -> AcoResult<Vec<Ant>> {
    (0..config.ant_count)
        .map(|_| construct_tour(model, field, config, &mut *rng))
        .collect()
}

/// Parallel construction phase. Seeds are drawn up front, one per ant.
pub fn phase_construct_tours_parallel<R: Rng>(
    model: &CostModel,
    field: &PheromoneField,
    config: &ColonyConfig,
    rng: &mut R,
) -> AcoResult<Vec<Ant>> {
    let seeds: Vec<u64> = (0..config.ant_count).map(|_| rng.random()).collect();
    seeds
        .into_par_iter()
        .map(|seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            construct_tour(model, field, config, &mut rng)
        })
        .collect()
}

/// Replaces the best tour only on a strictly lower cost.
pub fn phase_record_best(ants: &[Ant], best: &mut Option<(Vec<usize>, f64)>) {
    for ant in ants {
        let improved = match best {
            Some((_, cost)) => ant.total_cost < *cost,
            None => true,
        };
        if improved {
            *best = Some((ant.tour.clone(), ant.total_cost));
        }
    }
}

/// The single write to the field per generation.
pub fn phase_update_pheromone(field: &mut PheromoneField, config: &ColonyConfig, ants: &[Ant]) {
    field.update(config.rho, ants.iter().map(|ant| &ant.delta));
}
