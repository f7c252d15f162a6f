//! Core game logic: grid, movement, collision/mercy, food, and the
//! session state machine. No I/O or rendering dependencies, so every
//! piece is testable with a manual clock and a scripted food spawner.

pub mod collision;
pub mod config;
pub mod food;
pub mod grid;
pub mod heading;
pub mod session;
pub mod snake;

// Re-export commonly used types
pub use collision::{CollisionJudge, MercyVerdict, Verdict};
pub use config::GameConfig;
pub use food::{FoodSpawner, RandomFoodSpawner};
pub use grid::{Cell, GridModel};
pub use heading::Heading;
pub use session::{FrameSnapshot, GameSession, SessionPhase};
pub use snake::{MoveOutcome, MovementEngine};
