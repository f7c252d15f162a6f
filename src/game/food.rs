use rand::Rng;

use super::grid::{Cell, GridModel};

/// Source of new food cells.
///
/// Trait seam so sessions under test can use a scripted spawner instead
/// of a random one.
pub trait FoodSpawner {
    fn spawn(&mut self, grid: &GridModel) -> Cell;
}

/// Spawns food uniformly at random within the playfield.
///
/// Occupancy is deliberately not consulted: food may land on a cell the
/// body currently covers, matching the long-standing game behavior.
pub struct RandomFoodSpawner {
    rng: rand::rngs::ThreadRng,
}

impl RandomFoodSpawner {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomFoodSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodSpawner for RandomFoodSpawner {
    fn spawn(&mut self, grid: &GridModel) -> Cell {
        let col = self.rng.gen_range(0..grid.cols());
        let row = self.rng.gen_range(0..grid.rows());
        Cell::new(col, row)
    }
}
