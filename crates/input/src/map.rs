//! Key and mouse mapping from terminal events to game actions.

use crate::types::{Direction, GameAction, Mode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::Move(Direction::Right))
        }

        // Munch
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Select),

        // Mode buttons, in menu order
        KeyCode::Char(c @ '1'..='5') => {
            let index = (c as usize) - ('1' as usize);
            Some(GameAction::ChangeMode(Mode::ALL[index]))
        }

        _ => None,
    }
}

/// Map a left-button press to a touch on the cell under the pointer.
///
/// `hit_test` converts terminal coordinates into a grid index.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    hit_test: impl Fn(u16, u16) -> Option<usize>,
) -> Option<GameAction> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            hit_test(mouse.column, mouse.row).map(GameAction::Touch)
        }
        _ => None,
    }
}

/// Whether terminal auto-repeat should re-fire the action.
///
/// Holding an arrow slides the muncher; holding Enter must not eat repeatedly.
pub fn is_repeatable(action: &GameAction) -> bool {
    matches!(action, GameAction::Move(_))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
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

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::Move(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::Move(Direction::Down))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::Move(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::Move(Direction::Right))
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('K'))),
            Some(GameAction::Move(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(GameAction::Move(Direction::Down))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('h'))),
            Some(GameAction::Move(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Some(GameAction::Move(Direction::Right))
        );
    }

    #[test]
    fn test_select_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Select)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Select)
        );
    }

    #[test]
    fn test_mode_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(GameAction::ChangeMode(Mode::Multiples))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('3'))),
            Some(GameAction::ChangeMode(Mode::Primes))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('5'))),
            Some(GameAction::ChangeMode(Mode::Inequality))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('6'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_mouse_press_uses_hit_test() {
        let hit = |x: u16, y: u16| if x < 5 && y < 5 { Some((y * 5 + x) as usize) } else { None };

        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 2, 3), hit),
            Some(GameAction::Touch(17))
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 9, 0), hit),
            None
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0), hit),
            None
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Moved, 0, 0), hit),
            None
        );
    }

    #[test]
    fn test_only_moves_repeat() {
        assert!(is_repeatable(&GameAction::Move(Direction::Left)));
        assert!(!is_repeatable(&GameAction::Select));
        assert!(!is_repeatable(&GameAction::Touch(3)));
        assert!(!is_repeatable(&GameAction::ChangeMode(Mode::Factors)));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
