//! Travel costs between nodes and the inverse-cost heuristic derived from them.

use crate::error::{AcoError, AcoResult};

/// A city on the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    #[inline(always)]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Immutable cost and ease ("heuristic desirability") matrices, stored
/// row-major. Built once per problem and shared read-only by every ant.
#[derive(Debug, Clone)]
pub struct CostModel {
    size: usize,
    cost: Vec<f64>,
    ease: Vec<f64>,
}

impl CostModel {
    /// Takes an explicit cost matrix as-is.
    ///
    /// The matrix must be square with at least two nodes, a zero diagonal and
    /// strictly positive finite costs everywhere else.
    pub fn from_matrix(rows: Vec<Vec<f64>>) -> AcoResult<Self> {
        let size = rows.len();
        if size < 2 {
            return Err(AcoError::invalid(format!(
                "need at least 2 nodes to form a tour, got {}",
                size
            )));
        }
        let mut cost = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(AcoError::invalid(format!(
                    "cost matrix is not square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            for (j, &c) in row.iter().enumerate() {
                if !c.is_finite() || c < 0.0 {
                    return Err(AcoError::invalid(format!(
                        "cost[{}][{}] = {} is negative or not finite",
                        i, j, c
                    )));
                }
                if i == j && c != 0.0 {
                    return Err(AcoError::invalid(format!(
                        "cost[{}][{}] = {} must be zero",
                        i, j, c
                    )));
                }
                if i != j && c == 0.0 {
                    return Err(AcoError::invalid(format!(
                        "cost[{}][{}] is zero between distinct nodes",
                        i, j
                    )));
                }
            }
            cost.extend(row);
        }

        let ease = cost
            .iter()
            .enumerate()
            .map(|(k, &c)| if k / size == k % size { 0.0 } else { 1.0 / c })
            .collect();

        Ok(CostModel { size, cost, ease })
    }

    /// Euclidean distances between planar points.
    pub fn from_points(points: &[Point]) -> AcoResult<Self> {
        if let Some((i, p)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(AcoError::invalid(format!(
                "point {} has non-finite coordinates ({}, {})",
                i, p.x, p.y
            )));
        }
        let rows = points
            .iter()
            .map(|a| points.iter().map(|b| a.distance(b)).collect())
            .collect();
        CostModel::from_matrix(rows)
    }

    #[inline(always)]
    pub fn node_count(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.cost[from * self.size + to]
    }

    #[inline(always)]
    pub fn ease(&self, from: usize, to: usize) -> f64 {
        self.ease[from * self.size + to]
    }

    /// Cost of a closed tour: every consecutive edge plus the edge from the
    /// last node back to the first.
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        match (tour.first(), tour.last()) {
            (Some(&first), Some(&last)) => {
                let open: f64 = tour.windows(2).map(|w| self.cost(w[0], w[1])).sum();
                open + self.cost(last, first)
            }
            _ => 0.0,
        }
    }
}

/// True if `tour` visits each of `0..size` exactly once.
pub fn is_permutation(tour: &[usize], size: usize) -> bool {
    if tour.len() != size {
        return false;
    }
    let mut seen = vec![false; size];
    for &node in tour {
        if node >= size || seen[node] {
            return false;
        }
        seen[node] = true;
    }
    true
}
