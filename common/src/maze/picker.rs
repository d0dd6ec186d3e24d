use rand::{Rng, SeedableRng, rngs::StdRng};

/// Chooses which unvisited neighbor the walk moves to next.
pub trait NeighborPicker {
    /// Returns an index in `0..candidates`. Only called with at least one
    /// candidate.
    fn pick(&mut self, candidates: usize) -> usize;
}

pub struct RandomNeighbor {
    rng: StdRng,
}

impl RandomNeighbor {
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomNeighbor {
    fn default() -> Self {
        Self::new()
    }
}

impl NeighborPicker for RandomNeighbor {
    fn pick(&mut self, candidates: usize) -> usize {
        self.rng.random_range(0..candidates)
    }
}

/// Always takes the first candidate, i.e. the first of top, right, bottom,
/// left that is still unvisited.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstNeighbor;

impl NeighborPicker for FirstNeighbor {
    fn pick(&mut self, _candidates: usize) -> usize {
        0
    }
}

/// Replays a fixed sequence of choices, starting over when it runs out. Each
/// choice is taken modulo the number of candidates.
#[derive(Clone, Debug)]
pub struct ScriptedNeighbor {
    choices: Vec<usize>,
    next: usize,
}

impl ScriptedNeighbor {
    pub fn new<I>(choices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            choices: choices.into_iter().collect(),
            next: 0,
        }
    }
}

impl NeighborPicker for ScriptedNeighbor {
    fn pick(&mut self, candidates: usize) -> usize {
        if self.choices.is_empty() {
            return 0;
        }

        let choice = self.choices[self.next % self.choices.len()];
        self.next += 1;
        choice % candidates
    }
}
