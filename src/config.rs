//! Colony parameters and the behavioral switches that differ between
//! ant-system variants.

use crate::error::{AcoError, AcoResult};

/// How much pheromone an ant lays on each edge it walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RewardPolicy {
    /// `Q / tour_cost` on every edge (ant-cycle).
    #[default]
    Cycle,
    /// Flat `Q` on every edge (ant-quality).
    Quality,
    /// `Q / edge_cost` on each edge (ant-density).
    Density,
}

/// Starting intensity of every pheromone cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialPheromone {
    /// `1 / N²`
    #[default]
    InverseSquare,
    /// `1`
    Unit,
}

impl InitialPheromone {
    pub fn value(self, node_count: usize) -> f64 {
        match self {
            InitialPheromone::InverseSquare => 1.0 / (node_count * node_count) as f64,
            InitialPheromone::Unit => 1.0,
        }
    }
}

/// Where each ant begins its tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartNode {
    /// Uniformly random node, drawn per ant.
    #[default]
    Random,
    /// Always the given node.
    Fixed(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColonyConfig {
    pub ant_count: usize,
    pub generations: usize,
    /// Relative weight of pheromone intensity.
    pub alpha: f64,
    /// Relative weight of the inverse-cost heuristic.
    pub beta: f64,
    /// Residual coefficient: the fraction of pheromone kept per generation.
    pub rho: f64,
    /// Pheromone intensity constant.
    pub q: f64,
    pub reward: RewardPolicy,
    pub initial_pheromone: InitialPheromone,
    pub start: StartNode,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        ColonyConfig {
            ant_count: 10,
            generations: 100,
            alpha: 1.0,
            beta: 2.0,
            rho: 0.5,
            q: 1.0,
            reward: RewardPolicy::Cycle,
            initial_pheromone: InitialPheromone::InverseSquare,
            start: StartNode::Random,
        }
    }
}

impl ColonyConfig {
    /// Checks every parameter range. Node-dependent checks (a fixed start
    /// node) happen when a problem is supplied.
    pub fn validate(&self) -> AcoResult<()> {
        if self.ant_count == 0 {
            return Err(AcoError::invalid("ant_count must be greater than 0"));
        }
        if self.generations == 0 {
            return Err(AcoError::invalid("generations must be greater than 0"));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(AcoError::invalid(format!(
                "alpha must be finite and >= 0, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcoError::invalid(format!(
                "beta must be finite and >= 0, got {}",
                self.beta
            )));
        }
        if !(self.rho > 0.0 && self.rho <= 1.0) {
            return Err(AcoError::invalid(format!(
                "rho must be in (0, 1], got {}",
                self.rho
            )));
        }
        if !self.q.is_finite() || self.q <= 0.0 {
            return Err(AcoError::invalid(format!(
                "q must be finite and > 0, got {}",
                self.q
            )));
        }
        Ok(())
    }

    pub(crate) fn validate_for(&self, node_count: usize) -> AcoResult<()> {
        if let StartNode::Fixed(node) = self.start {
            if node >= node_count {
                return Err(AcoError::invalid(format!(
                    "start node {} is out of range for {} nodes",
                    node, node_count
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ColonyConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        let bad = [
            ColonyConfig { ant_count: 0, ..Default::default() },
            ColonyConfig { generations: 0, ..Default::default() },
            ColonyConfig { alpha: -0.1, ..Default::default() },
            ColonyConfig { beta: -1.0, ..Default::default() },
            ColonyConfig { rho: 0.0, ..Default::default() },
            ColonyConfig { rho: 1.5, ..Default::default() },
            ColonyConfig { rho: f64::NAN, ..Default::default() },
            ColonyConfig { q: 0.0, ..Default::default() },
            ColonyConfig { q: -2.0, ..Default::default() },
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(AcoError::InvalidInput { .. })),
                "{:?} should be rejected",
                config
            );
        }
    }

    #[test]
    fn rho_of_one_keeps_all_pheromone_and_is_allowed() {
        let config = ColonyConfig { rho: 1.0, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn fixed_start_must_be_a_node() {
        let config = ColonyConfig { start: StartNode::Fixed(3), ..Default::default() };
        assert!(config.validate_for(4).is_ok());
        assert!(config.validate_for(3).is_err());
    }

    #[test]
    fn initial_pheromone_values() {
        assert_eq!(InitialPheromone::InverseSquare.value(4), 1.0 / 16.0);
        assert_eq!(InitialPheromone::Unit.value(4), 1.0);
    }
}
