use std::collections::VecDeque;

use super::collision::{CollisionJudge, Verdict};
use super::grid::{Cell, GridModel};
use super::heading::Heading;

/// Result of one movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Head advanced, tail vacated.
    Moved,
    /// Head landed on food; tail retained.
    Grew,
    /// The prospective move collided; nothing was mutated.
    Blocked,
}

/// Owns the body and heading and advances them one grid step at a time.
///
/// The body is a deque with the head at the front, so a tick is one
/// push-front plus at most one pop-back.
pub struct MovementEngine {
    body: VecDeque<Cell>,
    heading: Heading,
}

impl MovementEngine {
    /// Create a body of `length` cells with the head at `head`, trailing
    /// away opposite the initial heading.
    pub fn new(head: Cell, heading: Heading, length: usize) -> Self {
        let mut body = VecDeque::with_capacity(length.max(1));
        body.push_back(head);

        let (dcol, drow) = heading.reversed().delta();
        for i in 1..length {
            let prev = body[i - 1];
            body.push_back(prev.offset_by(dcol, drow));
        }

        Self { body, heading }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Advance one step.
    ///
    /// A pending heading that reverses the current one is ignored. The
    /// candidate heading is committed only when the move is safe; a
    /// blocked step leaves body and heading untouched so the judge can
    /// re-evaluate on the next frame.
    pub fn step(
        &mut self,
        pending: Option<Heading>,
        food: Cell,
        judge: &CollisionJudge,
        grid: &GridModel,
    ) -> MoveOutcome {
        let candidate = match pending {
            Some(h) if !h.is_reverse_of(self.heading) => h,
            _ => self.heading,
        };

        let next_head = self.head().stepped(candidate);
        let grows = next_head == food;

        match judge.classify(next_head, &self.body, grows, grid) {
            Verdict::Colliding => MoveOutcome::Blocked,
            Verdict::Safe => {
                self.heading = candidate;
                self.body.push_front(next_head);
                if grows {
                    MoveOutcome::Grew
                } else {
                    self.body.pop_back();
                    MoveOutcome::Moved
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn judge() -> CollisionJudge {
        CollisionJudge::new(Duration::from_millis(50))
    }

    fn grid() -> GridModel {
        GridModel::new(10, 10, 20)
    }

    #[test]
    fn test_body_construction() {
        let engine = MovementEngine::new(Cell::new(5, 5), Heading::Up, 3);
        assert_eq!(engine.len(), 3);
        assert_eq!(engine.head(), Cell::new(5, 5));
        assert_eq!(engine.body()[1], Cell::new(5, 6));
        assert_eq!(engine.body()[2], Cell::new(5, 7));
    }

    #[test]
    fn test_plain_move_keeps_length() {
        // Body [(5,5)], heading up, food elsewhere: head moves to (5,4).
        let mut engine = MovementEngine::new(Cell::new(5, 5), Heading::Up, 1);

        let outcome = engine.step(None, Cell::new(0, 0), &judge(), &grid());

        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(engine.head(), Cell::new(5, 4));
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn test_grow_retains_tail() {
        let mut engine = MovementEngine::new(Cell::new(5, 5), Heading::Up, 2);

        let outcome = engine.step(None, Cell::new(5, 4), &judge(), &grid());

        assert_eq!(outcome, MoveOutcome::Grew);
        assert_eq!(engine.head(), Cell::new(5, 4));
        assert_eq!(engine.len(), 3);
        assert_eq!(engine.body()[2], Cell::new(5, 6));
    }

    #[test]
    fn test_reversal_ignored() {
        let mut engine = MovementEngine::new(Cell::new(5, 5), Heading::Right, 3);

        let outcome = engine.step(Some(Heading::Left), Cell::new(0, 0), &judge(), &grid());

        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(engine.heading(), Heading::Right);
        assert_eq!(engine.head(), Cell::new(6, 5));
    }

    #[test]
    fn test_turn_applied() {
        let mut engine = MovementEngine::new(Cell::new(5, 5), Heading::Right, 1);

        engine.step(Some(Heading::Down), Cell::new(0, 0), &judge(), &grid());

        assert_eq!(engine.heading(), Heading::Down);
        assert_eq!(engine.head(), Cell::new(5, 6));
    }

    #[test]
    fn test_blocked_step_mutates_nothing() {
        let mut engine = MovementEngine::new(Cell::new(0, 5), Heading::Left, 3);

        let outcome = engine.step(None, Cell::new(9, 9), &judge(), &grid());

        assert_eq!(outcome, MoveOutcome::Blocked);
        assert_eq!(engine.head(), Cell::new(0, 5));
        assert_eq!(engine.heading(), Heading::Left);
        assert_eq!(engine.len(), 3);
    }

    #[test]
    fn test_blocked_step_does_not_commit_heading() {
        // Moving up along the left wall; steering left collides, so the
        // heading stays up and the next plain step is safe.
        let mut engine = MovementEngine::new(Cell::new(0, 5), Heading::Up, 1);

        let blocked = engine.step(Some(Heading::Left), Cell::new(9, 9), &judge(), &grid());
        assert_eq!(blocked, MoveOutcome::Blocked);
        assert_eq!(engine.heading(), Heading::Up);

        let outcome = engine.step(None, Cell::new(9, 9), &judge(), &grid());
        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(engine.head(), Cell::new(0, 4));
    }

    #[test]
    fn test_self_collision_blocked() {
        // Body: (5,5) back to (1,5), heading right. Length 5 so the cell
        // re-entered below is mid-body rather than the vacating tail.
        let mut engine = MovementEngine::new(Cell::new(5, 5), Heading::Right, 5);
        let food = Cell::new(8, 8);
        let j = judge();
        let g = grid();

        engine.step(None, food, &j, &g);
        engine.step(Some(Heading::Down), food, &j, &g);
        engine.step(Some(Heading::Left), food, &j, &g);
        // Up from (5,6) targets (5,5), still occupied by the body.
        let outcome = engine.step(Some(Heading::Up), food, &j, &g);

        assert_eq!(outcome, MoveOutcome::Blocked);
    }

    #[test]
    fn test_chasing_tail_is_safe() {
        // A length-4 loop: the head may enter the cell its tail vacates.
        let mut engine = MovementEngine::new(Cell::new(5, 5), Heading::Right, 4);
        let food = Cell::new(8, 8);
        let j = judge();
        let g = grid();

        engine.step(None, food, &j, &g);
        engine.step(Some(Heading::Down), food, &j, &g);
        engine.step(Some(Heading::Left), food, &j, &g);
        let outcome = engine.step(Some(Heading::Up), food, &j, &g);

        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(engine.head(), Cell::new(5, 5));
    }
}
