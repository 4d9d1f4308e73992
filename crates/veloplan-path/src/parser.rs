use crate::lexer::{Direction, lex};
use serde::Serialize;

/// A single discrete directive extracted from a path description.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MotionCommand {
    pub direction: Direction,
    pub value: f64,
}

/// Parse a path description like `"F10L45B5R90"` into ordered motion
/// commands.
///
/// Matching is case-insensitive and non-overlapping; characters that do
/// not form a direction-plus-number pair are ignored, so this never
/// fails. Junk-only or empty input yields an empty vector.
pub fn parse_motion_path(input: &str) -> Vec<MotionCommand> {
    lex(input)
        .map(|token| MotionCommand {
            direction: token.direction,
            value: token.value,
        })
        .collect()
}
