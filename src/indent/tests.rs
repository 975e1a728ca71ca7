use super::*;

#[test]
fn test_is_blank() {
    assert!(is_blank(""));
    assert!(is_blank("   "));
    assert!(is_blank("\t\t"));
    assert!(is_blank(" \t "));
    assert!(!is_blank("hello"));
    assert!(!is_blank("  hello  "));
}

#[test]
fn test_indent_width_spaces() {
    assert_eq!(indent_width("hello", 8), 0);
    assert_eq!(indent_width("  hello", 8), 2);
    assert_eq!(indent_width("    hello", 8), 4);
}

#[test]
fn test_indent_width_tabs() {
    assert_eq!(indent_width("\thello", 8), 8);
    assert_eq!(indent_width("\t\thello", 8), 16);
    assert_eq!(indent_width("\thello", 4), 4);
}

#[test]
fn test_indent_width_mixed() {
    // Two spaces, then a tab snaps to the next tab stop
    assert_eq!(indent_width("  \thello", 8), 8);
    assert_eq!(indent_width("  \thello", 4), 4);
    // Tab, then spaces continue past the stop
    assert_eq!(indent_width("\t  hello", 8), 10);
}

#[test]
fn test_indent_width_whole_line_whitespace() {
    assert_eq!(indent_width("", 8), 0);
    assert_eq!(indent_width("    ", 8), 4);
    assert_eq!(indent_width("\t", 8), 8);
}

#[test]
fn test_indent_width_wide_whitespace() {
    // U+3000 ideographic space occupies two display columns
    assert_eq!(indent_width("\u{3000}hello", 8), 2);
    assert_eq!(indent_width("\u{3000}\u{3000}hello", 8), 4);
}

#[test]
fn test_indent_width_zero_tab_stop() {
    // A zero tab stop is treated as one
    assert_eq!(indent_width("\thello", 0), 1);
}

#[test]
fn test_first_non_ws_column() {
    assert_eq!(first_non_ws_column("hello", 8), 1);
    assert_eq!(first_non_ws_column("  hello", 8), 3);
    assert_eq!(first_non_ws_column("\thello", 8), 9);
}

#[test]
fn test_first_non_ws_column_blank_fallback() {
    assert_eq!(first_non_ws_column("", 8), 1);
    assert_eq!(first_non_ws_column("    ", 8), 1);
    assert_eq!(first_non_ws_column("\t\t", 8), 1);
}
