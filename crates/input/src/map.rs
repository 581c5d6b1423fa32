//! Mapping from terminal events to game input.

use crate::types::{GameAction, PointerEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Right => Some(GameAction::NextLevel),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Left => Some(GameAction::PreviousLevel),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map a left-button mouse event to a pointer event.
///
/// `to_layout` converts a terminal cell to layout units.
pub fn pointer_event(
    mouse: MouseEvent,
    to_layout: impl Fn(u16, u16) -> (f32, f32),
) -> Option<PointerEvent> {
    let (x, y) = to_layout(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Down { x, y }),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::Move { x, y }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up { x, y }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn halve(col: u16, row: u16) -> (f32, f32) {
        (col as f32 / 2.0, row as f32)
    }

    #[test]
    fn test_level_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('N'))),
            Some(GameAction::NextLevel)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::PreviousLevel)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_left_button_drag_sequence() {
        assert_eq!(
            pointer_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 4), halve),
            Some(PointerEvent::Down { x: 5.0, y: 4.0 })
        );
        assert_eq!(
            pointer_event(mouse(MouseEventKind::Drag(MouseButton::Left), 12, 5), halve),
            Some(PointerEvent::Move { x: 6.0, y: 5.0 })
        );
        assert_eq!(
            pointer_event(mouse(MouseEventKind::Up(MouseButton::Left), 12, 6), halve),
            Some(PointerEvent::Up { x: 6.0, y: 6.0 })
        );
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        assert_eq!(
            pointer_event(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1), halve),
            None
        );
        assert_eq!(pointer_event(mouse(MouseEventKind::Moved, 1, 1), halve), None);
        assert_eq!(pointer_event(mouse(MouseEventKind::ScrollUp, 1, 1), halve), None);
    }
}
