//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, PowerUp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Power-up bound to a digit slot: 1, 2 or 3.
fn slot(digit: char) -> Option<PowerUp> {
    match digit {
        '1' | '!' => Some(PowerUp::RowClearer),
        '2' | '@' => Some(PowerUp::SlowMotion),
        '3' | '#' => Some(PowerUp::BombPiece),
        _ => None,
    }
}

/// Map keyboard input to game actions.
///
/// Digits use a power-up; the shifted digits (`!`, `@`, `#`, or a digit
/// reported with SHIFT) buy one.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SoftDrop),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(GameAction::Hold),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => Some(GameAction::Pause),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::NewGame),

        // Power-ups
        KeyCode::Char(c @ ('1' | '2' | '3')) => {
            let kind = slot(c)?;
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                Some(GameAction::BuyPowerUp(kind))
            } else {
                Some(GameAction::UsePowerUp(kind))
            }
        }
        KeyCode::Char(c @ ('!' | '@' | '#')) => slot(c).map(GameAction::BuyPowerUp),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn map(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(map(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(map(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(map(KeyCode::Down), Some(GameAction::SoftDrop));
        assert_eq!(map(KeyCode::Up), Some(GameAction::Rotate));

        assert_eq!(map(KeyCode::Char('A')), Some(GameAction::MoveLeft));
        assert_eq!(map(KeyCode::Char('d')), Some(GameAction::MoveRight));
        assert_eq!(map(KeyCode::Char('s')), Some(GameAction::SoftDrop));
        assert_eq!(map(KeyCode::Char('W')), Some(GameAction::Rotate));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(map(KeyCode::Char(' ')), Some(GameAction::HardDrop));
        assert_eq!(map(KeyCode::Char('c')), Some(GameAction::Hold));
        assert_eq!(map(KeyCode::Char('p')), Some(GameAction::Pause));
        assert_eq!(map(KeyCode::Esc), Some(GameAction::Pause));
        assert_eq!(map(KeyCode::Char('n')), Some(GameAction::NewGame));
        assert_eq!(map(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_power_up_keys() {
        assert_eq!(
            map(KeyCode::Char('1')),
            Some(GameAction::UsePowerUp(PowerUp::RowClearer))
        );
        assert_eq!(
            map(KeyCode::Char('3')),
            Some(GameAction::UsePowerUp(PowerUp::BombPiece))
        );
        assert_eq!(
            map(KeyCode::Char('@')),
            Some(GameAction::BuyPowerUp(PowerUp::SlowMotion))
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::SHIFT)),
            Some(GameAction::BuyPowerUp(PowerUp::RowClearer))
        );
    }

    #[test]
    fn test_ctrl_c_is_not_hold() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(key), None);
        assert!(should_quit(key));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Esc)));
    }
}
