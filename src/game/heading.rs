/// Direction the snake is traveling in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Returns true if switching from self to other would be a 180-degree turn.
    pub fn is_reverse_of(&self, other: Heading) -> bool {
        matches!(
            (self, other),
            (Heading::Up, Heading::Down)
                | (Heading::Down, Heading::Up)
                | (Heading::Left, Heading::Right)
                | (Heading::Right, Heading::Left)
        )
    }

    /// Grid delta (dcol, drow) for one step in this heading. Rows grow downward.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    pub fn reversed(&self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}
