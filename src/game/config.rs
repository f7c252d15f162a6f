use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for a game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the playfield in cells
    pub grid_width: i32,
    /// Height of the playfield in cells
    pub grid_height: i32,
    /// Cell size in pixels, used for the render coordinate space
    pub cell_size: u16,
    /// Initial length of the snake
    pub initial_length: usize,
    /// Logical movement rate; the tick interval is its reciprocal
    pub moves_per_second: f64,
    /// Grace window after a detected collision before the session ends
    pub mercy_window_ms: u64,
    /// Number of countdown steps shown before play starts or resumes
    pub countdown_steps: u32,
    /// Duration of each countdown step
    pub countdown_step_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 30,
            grid_height: 20,
            cell_size: 20,
            initial_length: 1,
            moves_per_second: 10.0,
            mercy_window_ms: 50,
            countdown_steps: 3,
            countdown_step_ms: 500,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size and movement rate.
    pub fn new(width: i32, height: i32, moves_per_second: f64) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            moves_per_second,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10, 10.0)
    }

    /// Fixed logical interval between ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.moves_per_second)
    }

    pub fn mercy_window(&self) -> Duration {
        Duration::from_millis(self.mercy_window_ms)
    }

    pub fn countdown_step(&self) -> Duration {
        Duration::from_millis(self.countdown_step_ms)
    }

    /// Total length of the pre-play countdown.
    pub fn countdown_total(&self) -> Duration {
        self.countdown_step() * self.countdown_steps
    }
}
