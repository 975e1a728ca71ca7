use super::*;
use crate::error::ErrorKind;
use crate::test_utils::MockLineSource;

#[test]
fn test_parse_known_commands() {
    assert_eq!(
        "next-indent-block".parse::<NavCommand>().unwrap(),
        NavCommand::NextIndentBlock
    );
    assert_eq!(
        "prev-indent-block".parse::<NavCommand>().unwrap(),
        NavCommand::PrevIndentBlock
    );
    assert_eq!(
        "indent-block-motion".parse::<NavCommand>().unwrap(),
        NavCommand::BlockMotion
    );
    assert_eq!(
        "indent-block-select".parse::<NavCommand>().unwrap(),
        NavCommand::BlockSelect
    );
}

#[test]
fn test_parse_unknown_command() {
    let err = "indent-sideways".parse::<NavCommand>().unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parse);
    assert_eq!(err.code, "UNKNOWN_COMMAND");
    assert!(err.contains_msg("indent-sideways"));
}

#[test]
fn test_name_round_trip() {
    for cmd in [
        NavCommand::NextIndentBlock,
        NavCommand::PrevIndentBlock,
        NavCommand::BlockMotion,
        NavCommand::BlockSelect,
    ] {
        assert_eq!(cmd.name().parse::<NavCommand>().unwrap(), cmd);
    }
}

#[test]
fn test_execute_next_indent_block() {
    let mut doc = MockLineSource::new(&["a", "  b", "  c", "d"]);

    assert!(NavCommand::NextIndentBlock.execute(&mut doc));
    assert_eq!(doc.cursor, 4);
}

#[test]
fn test_execute_prev_indent_block() {
    let mut doc = MockLineSource::new(&["a", "  b", "  c", "d"]).at_line(4);

    assert!(NavCommand::PrevIndentBlock.execute(&mut doc));
    assert_eq!(doc.cursor, 1);
}

#[test]
fn test_execute_block_motion() {
    let mut doc = MockLineSource::new(&["a", "  b", "  c", "d"]);

    assert!(NavCommand::BlockMotion.execute(&mut doc));
    assert_eq!(doc.selection, Some((1, 3)));
}

#[test]
fn test_execute_block_select_requires_selection() {
    let mut doc = MockLineSource::new(&["a", "  b"]);

    assert!(!NavCommand::BlockSelect.execute(&mut doc));
    assert!(!doc.mutated());

    doc.selection = Some((1, 1));
    assert!(NavCommand::BlockSelect.execute(&mut doc));
    assert_eq!(doc.selection, Some((1, 2)));
}

#[test]
fn test_execute_noop_at_boundary() {
    let mut doc = MockLineSource::new(&["a"]);

    assert!(!NavCommand::NextIndentBlock.execute(&mut doc));
    assert!(!NavCommand::PrevIndentBlock.execute(&mut doc));
    assert!(!doc.mutated());
}
