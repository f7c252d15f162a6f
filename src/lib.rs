//! Slither - terminal snake with a fixed-rate tick loop
//!
//! This library provides:
//! - Core game logic and the session state machine (game module)
//! - Injectable clocks and fixed-interval tick pacing (timing module)
//! - Interpolated TUI rendering (render module)
//! - Key and mouse decoding (input module)
//! - High-score persistence (store module)
//! - The interactive application loop (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod render;
pub mod store;
pub mod timing;
