use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::game::Heading;

/// What an input event asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Heading),
    TogglePause,
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Command {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Command::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Command::Steer(Heading::Up),
            KeyCode::Down => Command::Steer(Heading::Down),
            KeyCode::Left => Command::Steer(Heading::Left),
            KeyCode::Right => Command::Steer(Heading::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Command::Steer(Heading::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => Command::Steer(Heading::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => Command::Steer(Heading::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => Command::Steer(Heading::Right),

            // Controls
            KeyCode::Char('p') | KeyCode::Char('P') => Command::TogglePause,
            KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,

            _ => Command::None,
        }
    }

    /// A left click inside the settings-cog region requests pause.
    pub fn handle_mouse_event(&self, mouse: MouseEvent, cog_region: Rect) -> Command {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let inside = mouse.column >= cog_region.x
                && mouse.column < cog_region.x + cog_region.width
                && mouse.row >= cog_region.y
                && mouse.row < cog_region.y + cog_region.height;
            if inside {
                return Command::TogglePause;
            }
        }
        Command::None
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
