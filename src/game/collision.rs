use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::grid::{Cell, GridModel};

/// Classification of a prospective head position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Safe,
    Colliding,
}

/// What an observed collision means for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MercyVerdict {
    /// Still inside the grace window; the session keeps running.
    Grace,
    /// The grace window has elapsed; the session is over.
    Fatal,
}

/// Classifies prospective moves and tracks the mercy grace window.
///
/// The first colliding tick starts the window rather than ending the
/// session; only a collision observed once the window has elapsed is
/// terminal. Any safe tick clears the window.
pub struct CollisionJudge {
    window: Duration,
    mercy_started: Option<Instant>,
}

impl CollisionJudge {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            mercy_started: None,
        }
    }

    /// Classify a prospective head position against the playfield and body.
    ///
    /// The current tail is exempt from self-collision because it will be
    /// vacated this tick, except on a grow tick where it is retained.
    pub fn classify(
        &self,
        next_head: Cell,
        body: &VecDeque<Cell>,
        grows: bool,
        grid: &GridModel,
    ) -> Verdict {
        if !grid.contains(next_head) {
            return Verdict::Colliding;
        }

        let occupied = body
            .iter()
            .enumerate()
            .any(|(i, cell)| *cell == next_head && (grows || i + 1 != body.len()));

        if occupied {
            Verdict::Colliding
        } else {
            Verdict::Safe
        }
    }

    /// Record a colliding tick at `now`, starting the window if needed.
    pub fn on_collision(&mut self, now: Instant) -> MercyVerdict {
        match self.mercy_started {
            None => {
                self.mercy_started = Some(now);
                MercyVerdict::Grace
            }
            Some(start) if now.duration_since(start) >= self.window => MercyVerdict::Fatal,
            Some(_) => MercyVerdict::Grace,
        }
    }

    /// Record a safe tick, clearing any active window.
    pub fn on_safe(&mut self) {
        self.mercy_started = None;
    }

    /// Whether a grace window is currently active.
    pub fn in_mercy(&self) -> bool {
        self.mercy_started.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(cells: &[(i32, i32)]) -> VecDeque<Cell> {
        cells.iter().map(|&(c, r)| Cell::new(c, r)).collect()
    }

    #[test]
    fn test_wall_collision() {
        let judge = CollisionJudge::new(Duration::from_millis(50));
        let grid = GridModel::new(10, 10, 20);
        let body = body_of(&[(0, 5)]);

        assert_eq!(
            judge.classify(Cell::new(-1, 5), &body, false, &grid),
            Verdict::Colliding
        );
        assert_eq!(
            judge.classify(Cell::new(0, 10), &body, false, &grid),
            Verdict::Colliding
        );
        assert_eq!(
            judge.classify(Cell::new(1, 5), &body, false, &grid),
            Verdict::Safe
        );
    }

    #[test]
    fn test_self_collision() {
        let judge = CollisionJudge::new(Duration::from_millis(50));
        let grid = GridModel::new(10, 10, 20);
        let body = body_of(&[(5, 5), (4, 5), (4, 6), (5, 6)]);

        assert_eq!(
            judge.classify(Cell::new(4, 5), &body, false, &grid),
            Verdict::Colliding
        );
    }

    #[test]
    fn test_tail_exempt_on_plain_move() {
        let judge = CollisionJudge::new(Duration::from_millis(50));
        let grid = GridModel::new(10, 10, 20);
        // Head chasing its own tail in a tight loop: the tail cell is
        // vacated this tick, so entering it is safe.
        let body = body_of(&[(5, 5), (4, 5), (4, 6), (5, 6)]);

        assert_eq!(
            judge.classify(Cell::new(5, 6), &body, false, &grid),
            Verdict::Safe
        );
    }

    #[test]
    fn test_tail_occupied_on_grow_tick() {
        let judge = CollisionJudge::new(Duration::from_millis(50));
        let grid = GridModel::new(10, 10, 20);
        let body = body_of(&[(5, 5), (4, 5), (4, 6), (5, 6)]);

        // Same move, but the tail is retained because this tick grows.
        assert_eq!(
            judge.classify(Cell::new(5, 6), &body, true, &grid),
            Verdict::Colliding
        );
    }

    #[test]
    fn test_mercy_window_lifecycle() {
        let mut judge = CollisionJudge::new(Duration::from_millis(50));
        let t0 = Instant::now();

        // First collision opens the window.
        assert_eq!(judge.on_collision(t0), MercyVerdict::Grace);
        assert!(judge.in_mercy());

        // Still inside the window.
        assert_eq!(
            judge.on_collision(t0 + Duration::from_millis(30)),
            MercyVerdict::Grace
        );

        // Window elapsed.
        assert_eq!(
            judge.on_collision(t0 + Duration::from_millis(50)),
            MercyVerdict::Fatal
        );
    }

    #[test]
    fn test_safe_tick_clears_mercy() {
        let mut judge = CollisionJudge::new(Duration::from_millis(50));
        let t0 = Instant::now();

        judge.on_collision(t0);
        judge.on_safe();
        assert!(!judge.in_mercy());

        // A later collision starts a fresh window instead of expiring.
        assert_eq!(
            judge.on_collision(t0 + Duration::from_millis(200)),
            MercyVerdict::Grace
        );
    }
}
