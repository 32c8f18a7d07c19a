//! Text formatting for the board, prompts, status lines, and recaps.

use app::app_loop::{AppMode, AppState};
use app::{APP_NAME, format_seed, format_snapshot_hash, reason_code};
use trek_core::{Difficulty, GridSnapshot, PlayerMove, Pos, PursuitOutcome, TurnReport};

/// One line per row. Pursuer draws over player, player over goal.
pub fn board_lines(snapshot: &GridSnapshot) -> Vec<String> {
    (0..snapshot.height)
        .map(|y| {
            (0..snapshot.width)
                .map(|x| {
                    let pos = Pos::new(x as i32, y as i32);
                    if pos == snapshot.pursuer {
                        'E'
                    } else if pos == snapshot.player {
                        'P'
                    } else if pos == snapshot.goal {
                        'G'
                    } else if snapshot.is_obstacle(pos) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>()
        })
        .collect()
}

pub fn menu_lines(selected: Difficulty) -> Vec<String> {
    let mut lines = vec![APP_NAME.to_uppercase(), "Reach G before E catches you.".to_string()];
    for (index, difficulty) in Difficulty::ALL.iter().enumerate() {
        let marker = if *difficulty == selected { '>' } else { ' ' };
        lines.push(format!("{marker} {}={}", index + 1, difficulty.label()));
    }
    lines.push("start=begin  q=quit".to_string());
    lines
}

/// What the last turn did that the board alone does not show.
pub fn turn_note(report: &TurnReport) -> Option<&'static str> {
    match (report.player, report.pursuer) {
        (PlayerMove::Blocked, _) => Some("blocked"),
        (_, Some(PursuitOutcome::Stalled)) => Some("pursuer stalled"),
        _ => None,
    }
}

pub fn status_text(state: &AppState) -> String {
    let moves = state.level().map_or(0, |level| level.moves());
    match state.mode() {
        AppMode::Menu => "Menu (1/2/3 pick difficulty, start to play)".to_string(),
        AppMode::Playing => {
            let note = state
                .last_turn()
                .and_then(turn_note)
                .map(|note| format!("  [{note}]"))
                .unwrap_or_default();
            format!(
                "Level {} [{}]  Moves: {moves}  Score: {}{note}  (w/a/s/d, r=restart, esc=menu)",
                state.level_number(),
                state.difficulty().label(),
                state.score()
            )
        }
        AppMode::LevelComplete => format!(
            "LEVEL COMPLETE  Level {}  Moves: {moves}  Score: {} (c=next level)",
            state.level_number(),
            state.score()
        ),
        AppMode::GameOver => format!(
            "GAME OVER  Level {}  Moves: {moves}  Score: {} (c=menu)",
            state.level_number(),
            state.score()
        ),
    }
}

pub fn finished_recap_lines(state: &AppState) -> Vec<String> {
    let Some(level) = state.level() else {
        return Vec::new();
    };
    vec![
        "Level recap:".to_string(),
        format!("Reason: {}", reason_code(level.status())),
        format!("Run seed: {}", format_seed(state.run_seed())),
        format!("Level seed: {}", format_seed(level.seed())),
        format!("Snapshot: {}", format_snapshot_hash(level.snapshot_hash())),
        format!("Moves: {}", level.moves()),
    ]
}
