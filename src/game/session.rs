use std::time::{Duration, Instant};

use crate::render::interpolate::{interpolate, SegmentPos};
use crate::timing::{Clock, SystemClock, TickScheduler};

use super::collision::{CollisionJudge, MercyVerdict};
use super::config::GameConfig;
use super::food::{FoodSpawner, RandomFoodSpawner};
use super::grid::{Cell, GridModel};
use super::heading::Heading;
use super::snake::{MoveOutcome, MovementEngine};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Pre-play countdown; input and movement are blocked.
    Countdown,
    /// Scheduler active, input accepted.
    Playing,
    /// Frozen; resuming re-enters Countdown.
    Paused,
    /// Terminal. Only a brand-new session leaves this phase.
    GameOver,
}

/// Read-only per-frame view for the renderer.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub phase: SessionPhase,
    pub grid: GridModel,
    /// Interpolated body segments, head first, in fractional grid coords.
    pub segments: Vec<SegmentPos>,
    pub heading: Heading,
    pub food: Cell,
    pub score: u32,
    pub high_score: u32,
    /// Remaining countdown step (3, 2, 1) while in Countdown.
    pub countdown: Option<u32>,
    pub play_time: Duration,
    pub alpha: f64,
}

impl FrameSnapshot {
    /// Play time as MM:SS for the header.
    pub fn format_play_time(&self) -> String {
        let total_secs = self.play_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

/// One game session: owns all mutable game state and orchestrates the
/// scheduler, movement engine, collision judge, and food spawner through
/// the countdown → playing → game-over lifecycle.
///
/// Single logical thread of control; the app calls `queue_direction` for
/// input, then `frame` (zero or one tick), then `snapshot`, once per
/// render frame.
pub struct GameSession<C: Clock = SystemClock, S: FoodSpawner = RandomFoodSpawner> {
    config: GameConfig,
    grid: GridModel,
    clock: C,
    spawner: S,
    engine: MovementEngine,
    judge: CollisionJudge,
    scheduler: TickScheduler,
    /// Body snapshot from before the last committed tick, for interpolation.
    previous: Vec<Cell>,
    food: Cell,
    score: u32,
    high_score: u32,
    phase: SessionPhase,
    countdown_started: Instant,
    pending: Option<Heading>,
    input_locked: bool,
    play_elapsed: Duration,
    resumed_at: Option<Instant>,
}

impl GameSession {
    /// Session with the wall clock and random food, for normal play.
    pub fn start(config: GameConfig, high_score: u32) -> Self {
        Self::with_parts(config, high_score, SystemClock, RandomFoodSpawner::new())
    }
}

impl<C: Clock, S: FoodSpawner> GameSession<C, S> {
    pub fn with_parts(config: GameConfig, high_score: u32, clock: C, mut spawner: S) -> Self {
        let grid = GridModel::new(config.grid_width, config.grid_height, config.cell_size);
        let engine = MovementEngine::new(grid.center(), Heading::Up, config.initial_length);
        let judge = CollisionJudge::new(config.mercy_window());
        let now = clock.now();
        let scheduler = TickScheduler::new(config.tick_interval(), now);
        let previous: Vec<Cell> = engine.body().iter().copied().collect();
        let food = spawner.spawn(&grid);

        Self {
            config,
            grid,
            clock,
            spawner,
            engine,
            judge,
            scheduler,
            previous,
            food,
            score: 0,
            high_score,
            phase: SessionPhase::Countdown,
            countdown_started: now,
            pending: None,
            input_locked: false,
            play_elapsed: Duration::ZERO,
            resumed_at: None,
        }
    }

    /// Discard the current session state and begin a fresh one. The high
    /// score carries over in memory.
    pub fn restart(&mut self) {
        self.engine = MovementEngine::new(self.grid.center(), Heading::Up, self.config.initial_length);
        self.judge = CollisionJudge::new(self.config.mercy_window());
        let now = self.clock.now();
        self.scheduler = TickScheduler::new(self.config.tick_interval(), now);
        self.previous = self.engine.body().iter().copied().collect();
        self.food = self.spawner.spawn(&self.grid);
        self.score = 0;
        self.phase = SessionPhase::Countdown;
        self.countdown_started = now;
        self.pending = None;
        self.input_locked = false;
        self.play_elapsed = Duration::ZERO;
        self.resumed_at = None;
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Buffer a direction change for the next tick.
    ///
    /// At most one change is accepted per committed move, reversals are
    /// silently ignored, and no input is accepted while a mercy window
    /// is active or outside the Playing phase.
    pub fn queue_direction(&mut self, heading: Heading) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        if self.input_locked || self.judge.in_mercy() {
            return;
        }
        if heading.is_reverse_of(self.engine.heading()) {
            return;
        }
        self.pending = Some(heading);
        self.input_locked = true;
    }

    /// Playing → Paused; timers freeze.
    pub fn pause(&mut self) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        let now = self.clock.now();
        if let Some(resumed) = self.resumed_at.take() {
            self.play_elapsed += now.duration_since(resumed);
        }
        self.phase = SessionPhase::Paused;
    }

    /// Paused → Countdown, so play never resumes into an instant collision.
    pub fn resume(&mut self) {
        if self.phase != SessionPhase::Paused {
            return;
        }
        self.phase = SessionPhase::Countdown;
        self.countdown_started = self.clock.now();
        self.pending = None;
        self.input_locked = false;
        self.judge.on_safe();
    }

    pub fn toggle_pause(&mut self) {
        match self.phase {
            SessionPhase::Playing => self.pause(),
            SessionPhase::Paused => self.resume(),
            SessionPhase::Countdown | SessionPhase::GameOver => {}
        }
    }

    /// Advance the session by one frame: resolve the countdown, or run at
    /// most one simulation tick when one is due.
    pub fn frame(&mut self) {
        let now = self.clock.now();
        match self.phase {
            SessionPhase::Countdown => {
                if now.duration_since(self.countdown_started) >= self.config.countdown_total() {
                    self.phase = SessionPhase::Playing;
                    self.scheduler.reset(now);
                    self.resumed_at = Some(now);
                }
            }
            SessionPhase::Playing => {
                if self.scheduler.due(now) {
                    self.tick(now);
                }
            }
            SessionPhase::Paused | SessionPhase::GameOver => {}
        }
    }

    fn tick(&mut self, now: Instant) {
        let before: Vec<Cell> = self.engine.body().iter().copied().collect();
        let pending = self.pending.take();

        match self
            .engine
            .step(pending, self.food, &self.judge, &self.grid)
        {
            MoveOutcome::Blocked => {
                // The candidate heading was not committed and the
                // scheduler reference stands still, so the judge sees
                // this collision again every frame until the window
                // expires or a safe step clears it.
                if self.judge.on_collision(now) == MercyVerdict::Fatal {
                    self.finish(now);
                }
            }
            outcome @ (MoveOutcome::Moved | MoveOutcome::Grew) => {
                self.judge.on_safe();
                self.input_locked = false;
                self.previous = before;
                self.scheduler.complete_tick();

                if outcome == MoveOutcome::Grew {
                    self.score += 1;
                    self.food = self.spawner.spawn(&self.grid);
                }
            }
        }
    }

    fn finish(&mut self, now: Instant) {
        if let Some(resumed) = self.resumed_at.take() {
            self.play_elapsed += now.duration_since(resumed);
        }
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        self.phase = SessionPhase::GameOver;
    }

    /// Read-only view of the session for this frame.
    pub fn snapshot(&self) -> FrameSnapshot {
        let now = self.clock.now();
        let current: Vec<Cell> = self.engine.body().iter().copied().collect();

        let alpha = match self.phase {
            SessionPhase::Playing => self.scheduler.alpha(now),
            // At rest everywhere else: segments drawn on their cells.
            _ => 1.0,
        };

        let countdown = match self.phase {
            SessionPhase::Countdown => {
                let elapsed = now.duration_since(self.countdown_started);
                let done = (elapsed.as_millis() / self.config.countdown_step().as_millis()) as u32;
                Some(self.config.countdown_steps.saturating_sub(done).max(1))
            }
            _ => None,
        };

        let play_time = self.play_elapsed
            + self
                .resumed_at
                .map(|t| now.duration_since(t))
                .unwrap_or_default();

        FrameSnapshot {
            phase: self.phase,
            grid: self.grid,
            segments: interpolate(&self.previous, &current, alpha),
            heading: self.engine.heading(),
            food: self.food,
            score: self.score,
            high_score: self.high_score,
            countdown,
            play_time,
            alpha,
        }
    }
}
