use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use termsweep_core::Action;

/// Terminal events the game reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Input {
    Key(KeyEvent),
    /// The screen changed size, the board has to be centred again.
    Resize,
}

/// Keeps key presses and resizes, drops releases and everything else.
pub(crate) fn classify_event(event: Event) -> Option<Input> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(Input::Key(key)),
        Event::Resize(..) => Some(Input::Resize),
        _ => None,
    }
}

/// Maps a key press to a game action, `None` for keys the game does not use.
pub(crate) fn decode_key(event: KeyEvent) -> Option<Action> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    Some(match event.code {
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::Left | KeyCode::Char('h') => Action::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') => Action::MoveRight,
        KeyCode::Char('f') => Action::ToggleFlag,
        KeyCode::Char(' ') | KeyCode::Enter => Action::Reveal,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        _ => return None,
    })
}

/// Answer to "Play again? [y]".
pub(crate) fn is_yes(event: KeyEvent) -> bool {
    matches!(event.code, KeyCode::Char('y' | 'Y'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_vi_keys_move() {
        assert_eq!(decode_key(press(KeyCode::Up)), Some(Action::MoveUp));
        assert_eq!(decode_key(press(KeyCode::Char('j'))), Some(Action::MoveDown));
        assert_eq!(decode_key(press(KeyCode::Left)), Some(Action::MoveLeft));
        assert_eq!(decode_key(press(KeyCode::Char('l'))), Some(Action::MoveRight));
    }

    #[test]
    fn game_keys_map_to_actions() {
        assert_eq!(decode_key(press(KeyCode::Char('f'))), Some(Action::ToggleFlag));
        assert_eq!(decode_key(press(KeyCode::Char(' '))), Some(Action::Reveal));
        assert_eq!(decode_key(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            decode_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(decode_key(press(KeyCode::Char('c'))), None);
        assert_eq!(decode_key(press(KeyCode::Tab)), None);
    }

    #[test]
    fn releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        assert_eq!(decode_key(release), None);
    }

    #[test]
    fn resizes_are_reported() {
        assert_eq!(classify_event(Event::Resize(80, 24)), Some(Input::Resize));
        assert_eq!(
            classify_event(Event::Key(press(KeyCode::Char('f')))),
            Some(Input::Key(press(KeyCode::Char('f'))))
        );
        assert_eq!(classify_event(Event::FocusGained), None);
    }

    #[test]
    fn classify_drops_key_releases() {
        let mut release = press(KeyCode::Char('y'));
        release.kind = KeyEventKind::Release;

        assert_eq!(classify_event(Event::Key(release)), None);
    }

    #[test]
    fn play_again_accepts_either_case() {
        assert!(is_yes(press(KeyCode::Char('y'))));
        assert!(is_yes(press(KeyCode::Char('Y'))));
        assert!(!is_yes(press(KeyCode::Char('n'))));
        assert!(!is_yes(press(KeyCode::Enter)));
    }
}
