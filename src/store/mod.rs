//! External persistence owned by the shell, not the game core.

pub mod high_score;

pub use high_score::HighScoreStore;
