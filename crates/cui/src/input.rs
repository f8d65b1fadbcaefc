use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    ToggleHelp,
    MoveLeft,
    MoveRight,
    ToggleSelect,
    ClearSelection,
    Submit,
    NewPuzzle,
    NextLevel,
    PrevLevel,
    StartRun,
    ResetRun,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::ClearSelection,
        KeyCode::Left => InputAction::MoveLeft,
        KeyCode::Right => InputAction::MoveRight,
        KeyCode::Tab => InputAction::NextLevel,
        KeyCode::BackTab => InputAction::PrevLevel,
        KeyCode::Enter => InputAction::Submit,
        KeyCode::Char(' ') => InputAction::ToggleSelect,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Char('h') => InputAction::MoveLeft,
        KeyCode::Char('l') => InputAction::MoveRight,
        KeyCode::Char('n') => InputAction::NewPuzzle,
        KeyCode::Char('s') => InputAction::StartRun,
        KeyCode::Char('r') => InputAction::ResetRun,
        _ => InputAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn maps_basic_actions() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE)),
            InputAction::StartRun
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)),
            InputAction::ToggleSelect
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            InputAction::Submit
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            InputAction::Quit
        );
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE)),
            InputAction::None
        );
    }
}
