use crate::lexer::lex;
use crate::testing::snapshot_from_str;
use crate::{Direction, MotionCommand, parse_motion_path};

fn cmd(direction: Direction, value: f64) -> MotionCommand {
    MotionCommand { direction, value }
}

#[test]
fn parses_commands_in_order() {
    assert_eq!(
        parse_motion_path("F10L45B5R90"),
        vec![
            cmd(Direction::Forward, 10.0),
            cmd(Direction::Left, 45.0),
            cmd(Direction::Backward, 5.0),
            cmd(Direction::Right, 90.0),
        ]
    );
}

#[test]
fn empty_and_junk_input_yield_nothing() {
    assert!(parse_motion_path("").is_empty());
    assert!(parse_motion_path("XYZ").is_empty());
    assert!(parse_motion_path("   12.5 ??").is_empty());
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(parse_motion_path("f10"), parse_motion_path("F10"));
    assert_eq!(
        parse_motion_path("f10l45b5r90"),
        parse_motion_path("F10L45B5R90")
    );
}

#[test]
fn parses_decimal_values() {
    assert_eq!(
        parse_motion_path("F1.25R0.5"),
        vec![cmd(Direction::Forward, 1.25), cmd(Direction::Right, 0.5)]
    );
}

#[test]
fn trailing_dot_is_part_of_the_number() {
    assert_eq!(parse_motion_path("F10."), vec![cmd(Direction::Forward, 10.0)]);
}

#[test]
fn second_dot_terminates_the_number() {
    assert_eq!(
        parse_motion_path("F1.2.3"),
        vec![cmd(Direction::Forward, 1.2)]
    );
}

#[test]
fn letter_without_digits_produces_no_command() {
    assert!(parse_motion_path("F").is_empty());
    assert!(parse_motion_path("FLBR").is_empty());
    // The letter run does not swallow the following match.
    assert_eq!(parse_motion_path("LR5"), vec![cmd(Direction::Right, 5.0)]);
}

#[test]
fn junk_between_commands_is_skipped() {
    assert_eq!(
        parse_motion_path("go F10, then L45!"),
        vec![cmd(Direction::Forward, 10.0), cmd(Direction::Left, 45.0)]
    );
}

#[test]
fn tokens_carry_columns() {
    let tokens: Vec<_> = lex("F10 L45").collect();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].column, 1);
    assert_eq!(tokens[1].column, 5);
}

#[test]
fn snapshot_canonical_path() {
    insta::assert_snapshot!(snapshot_from_str("F10L45B5R90"), @r#"
    [
      {
        "direction": "Forward",
        "value": 10.0
      },
      {
        "direction": "Left",
        "value": 45.0
      },
      {
        "direction": "Backward",
        "value": 5.0
      },
      {
        "direction": "Right",
        "value": 90.0
      }
    ]
    "#);
}

#[test]
fn snapshot_junk_only_path() {
    insta::assert_snapshot!(snapshot_from_str("XYZ"), @"[]");
}
