//! A single ant building one closed tour.

use rand::Rng;

use crate::config::{ColonyConfig, RewardPolicy, StartNode};
use crate::cost::CostModel;
use crate::error::{AcoError, AcoResult};
use crate::pheromone::{PheromoneDelta, PheromoneField};

pub struct Ant {
    pub current: usize,
    /// Nodes visited so far, in order. Starts with the start node.
    pub tour: Vec<usize>,
    /// Nodes not yet visited, kept in ascending index order.
    pub unvisited: Vec<usize>,
    pub total_cost: f64,
    pub delta: PheromoneDelta,
    weights: Vec<f64>,
}

impl Ant {
    /// Places a new ant on its start node.
    pub fn spawn<R: Rng>(node_count: usize, start: StartNode, rng: &mut R) -> Self {
        let start = match start {
            StartNode::Random => rng.random_range(0..node_count),
            StartNode::Fixed(node) => node,
        };
        let mut tour = Vec::with_capacity(node_count);
        tour.push(start);
        Ant {
            current: start,
            tour,
            unvisited: (0..node_count).filter(|&node| node != start).collect(),
            total_cost: 0.0,
            delta: PheromoneDelta::default(),
            weights: Vec::with_capacity(node_count),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.unvisited.is_empty()
    }

    /// Moves to one unvisited node, drawn with probability proportional to
    /// `pheromone^alpha * ease^beta`.
    pub fn select_next<R: Rng>(
        &mut self,
        model: &CostModel,
        field: &PheromoneField,
        config: &ColonyConfig,
        rng: &mut R,
    ) -> AcoResult<()> {
        let pos = if self.unvisited.len() == 1 {
            0
        } else {
            self.weights.clear();
            let current = self.current;
            self.weights.extend(self.unvisited.iter().map(|&node| {
                field.get(current, node).powf(config.alpha)
                    * model.ease(current, node).powf(config.beta)
            }));
            let total: f64 = self.weights.iter().sum();
            if !(total > 0.0 && total.is_finite()) {
                return Err(AcoError::DegenerateSampling {
                    node: current,
                    remaining: self.unvisited.len(),
                });
            }
            sample_index(&self.weights, total, rng.random::<f64>())
        };

        let next = self.unvisited.remove(pos);
        self.total_cost += model.cost(self.current, next);
        self.tour.push(next);
        self.current = next;
        Ok(())
    }

    /// Adds the edge from the last node back to the start.
    pub fn close_tour(&mut self, model: &CostModel) {
        if let Some(&start) = self.tour.first() {
            self.total_cost += model.cost(self.current, start);
        }
    }

    /// Computes this ant's deposit on every edge of its path, in path order.
    pub fn lay_pheromone(&mut self, model: &CostModel, reward: RewardPolicy, q: f64) {
        let mut delta = PheromoneDelta::with_capacity(self.tour.len());
        let edges = self.tour.windows(2).map(|w| (w[0], w[1]));
        match reward {
            RewardPolicy::Cycle => {
                let amount = q / self.total_cost;
                edges.for_each(|(from, to)| delta.push(from, to, amount));
            }
            RewardPolicy::Quality => {
                edges.for_each(|(from, to)| delta.push(from, to, q));
            }
            RewardPolicy::Density => {
                edges.for_each(|(from, to)| delta.push(from, to, q / model.cost(from, to)));
            }
        }
        self.delta = delta;
    }
}

/// Cumulative-subtraction draw over `weights / total`. Candidates are walked
/// in order and the first one that brings the remainder to <= 0 wins.
/// Zero-weight candidates are never chosen; if rounding leaves a positive
/// remainder after the last candidate, the last positive-weight candidate
/// is taken.
#[inline(always)]
fn sample_index(weights: &[f64], total: f64, draw: f64) -> usize {
    let mut remainder = draw;
    let mut last_positive = 0;
    for (i, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        last_positive = i;
        remainder -= w / total;
        if remainder <= 0.0 {
            return i;
        }
    }
    last_positive
}

/// Builds one complete tour with its cost and pheromone delta.
pub fn construct_tour<R: Rng>(
    model: &CostModel,
    field: &PheromoneField,
    config: &ColonyConfig,
    rng: &mut R,
) -> AcoResult<Ant> {
    let mut ant = Ant::spawn(model.node_count(), config.start, rng);
    while !ant.is_complete() {
        ant.select_next(model, field, config, rng)?;
    }
    ant.close_tour(model);
    ant.lay_pheromone(model, config.reward, config.q);
    Ok(ant)
}
