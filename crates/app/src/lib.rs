pub mod app_loop;
pub mod config;
pub mod input;
pub mod seed;

use trek_core::LevelStatus;

pub const APP_NAME: &str = "Tower Trek";

pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Zero-padded so recap lines from different runs line up.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

pub fn reason_code(status: LevelStatus) -> &'static str {
    match status {
        LevelStatus::Idle => "LVL_IDLE",
        LevelStatus::Active => "LVL_ACTIVE",
        LevelStatus::Captured => "LOSS_CAPTURED",
        LevelStatus::GoalReached => "WIN_GOAL",
    }
}

/// Points awarded for clearing a level in `moves` moves. Long routes can go negative.
pub fn level_score(moves: u32) -> i64 {
    1000 - i64::from(moves) * 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recap_numbers_render_stably() {
        assert_eq!(format_seed(2_024), "2024");
        assert_eq!(format_snapshot_hash(0xbeef), "0x000000000000beef");
        assert_eq!(format_snapshot_hash(u64::MAX).len(), 18);
    }

    #[test]
    fn terminal_statuses_have_outcome_codes() {
        assert_eq!(reason_code(LevelStatus::Idle), "LVL_IDLE");
        assert_eq!(reason_code(LevelStatus::Captured), "LOSS_CAPTURED");
        assert_eq!(reason_code(LevelStatus::GoalReached), "WIN_GOAL");
    }

    #[test]
    fn level_score_drops_ten_per_move() {
        assert_eq!(level_score(0), 1000);
        assert_eq!(level_score(18), 820);
        assert_eq!(level_score(150), -500);
    }
}
