//! Text commands typed at the prompt, mapped to shell intents.

use trek_core::{Difficulty, Direction};

use crate::app_loop::{AppMode, Intent};

/// Maps one whitespace-separated token to an intent for the current mode. Unknown tokens, and
/// tokens that mean nothing in this mode, yield `None`.
pub fn parse_intent(token: &str, mode: AppMode) -> Option<Intent> {
    let token = token.trim().to_ascii_lowercase();
    if token.is_empty() {
        return None;
    }

    match token.as_str() {
        "q" | "quit" | "exit" => return Some(Intent::Quit),
        "esc" | "menu" => return Some(Intent::Back),
        _ => {}
    }

    match mode {
        AppMode::Menu => match token.as_str() {
            "space" | "start" | "s" => Some(Intent::Start),
            other => other.parse::<Difficulty>().ok().map(Intent::SetDifficulty),
        },
        AppMode::Playing => match token.as_str() {
            "w" | "up" | "k" => Some(Intent::Move(Direction::Up)),
            "d" | "right" | "l" => Some(Intent::Move(Direction::Right)),
            "s" | "down" | "j" => Some(Intent::Move(Direction::Down)),
            "a" | "left" | "h" => Some(Intent::Move(Direction::Left)),
            "r" | "restart" => Some(Intent::Restart),
            _ => None,
        },
        AppMode::GameOver | AppMode::LevelComplete => match token.as_str() {
            "space" | "c" | "continue" | "start" => Some(Intent::Continue),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_and_arrow_names_move_while_playing() {
        assert_eq!(parse_intent("w", AppMode::Playing), Some(Intent::Move(Direction::Up)));
        assert_eq!(parse_intent("LEFT", AppMode::Playing), Some(Intent::Move(Direction::Left)));
        assert_eq!(parse_intent("s", AppMode::Playing), Some(Intent::Move(Direction::Down)));
        assert_eq!(parse_intent("d", AppMode::Playing), Some(Intent::Move(Direction::Right)));
    }

    #[test]
    fn menu_accepts_difficulty_digits_and_start() {
        assert_eq!(
            parse_intent("3", AppMode::Menu),
            Some(Intent::SetDifficulty(Difficulty::Hard))
        );
        assert_eq!(parse_intent("space", AppMode::Menu), Some(Intent::Start));
        assert_eq!(parse_intent("w", AppMode::Menu), None);
    }

    #[test]
    fn quit_and_back_work_everywhere() {
        for mode in [AppMode::Menu, AppMode::Playing, AppMode::GameOver, AppMode::LevelComplete] {
            assert_eq!(parse_intent("q", mode), Some(Intent::Quit));
            assert_eq!(parse_intent("esc", mode), Some(Intent::Back));
        }
    }

    #[test]
    fn end_screens_continue_on_space() {
        assert_eq!(parse_intent("space", AppMode::GameOver), Some(Intent::Continue));
        assert_eq!(parse_intent("c", AppMode::LevelComplete), Some(Intent::Continue));
        assert_eq!(parse_intent("w", AppMode::GameOver), None);
    }
}
