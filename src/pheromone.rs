//! The shared pheromone trail matrix and the per-ant deposits applied to it.

/// Pheromone intensity for every directed node pair.
///
/// Ants only read the field while building tours. The colony is the single
/// writer and mutates it once per generation, after every ant has finished.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneField {
    size: usize,
    trail: Vec<f64>,
}

impl PheromoneField {
    pub fn new(size: usize, initial: f64) -> Self {
        PheromoneField {
            size,
            trail: vec![initial; size * size],
        }
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.trail[from * self.size + to]
    }

    /// Scales every cell by the residual coefficient `rho`.
    pub fn evaporate(&mut self, rho: f64) {
        for cell in &mut self.trail {
            *cell *= rho;
        }
    }

    /// Adds one ant's contribution.
    pub fn deposit(&mut self, delta: &PheromoneDelta) {
        for &(from, to, amount) in &delta.edges {
            self.trail[from * self.size + to] += amount;
        }
    }

    /// The between-generations update: evaporate once, then sum in every
    /// delta. Deltas commute, so their order does not matter.
    pub fn update<'a, I>(&mut self, rho: f64, deltas: I)
    where
        I: IntoIterator<Item = &'a PheromoneDelta>,
    {
        self.evaporate(rho);
        for delta in deltas {
            self.deposit(delta);
        }
    }
}

/// One ant's private contribution to the field: zero everywhere except the
/// directed edges its tour traversed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PheromoneDelta {
    edges: Vec<(usize, usize, f64)>,
}

impl PheromoneDelta {
    pub fn with_capacity(capacity: usize) -> Self {
        PheromoneDelta {
            edges: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, from: usize, to: usize, amount: f64) {
        self.edges.push((from, to, amount));
    }

    /// Amount deposited on `(from, to)`; zero for untraversed cells.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.edges
            .iter()
            .filter(|&&(f, t, _)| f == from && t == to)
            .map(|&(_, _, amount)| amount)
            .sum()
    }

    pub fn edges(&self) -> &[(usize, usize, f64)] {
        &self.edges
    }
}
