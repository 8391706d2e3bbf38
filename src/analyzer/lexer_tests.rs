use super::*;

fn kinds(text: &str) -> Vec<LineKind> {
    scan_lines(text).iter().map(|l| l.kind).collect()
}

#[test]
fn classifies_blank_comment_and_code() {
    let text = "x = 1\n\n   \n# note\n    # indented note\ny = 2";
    assert_eq!(
        kinds(text),
        vec![
            LineKind::Code,
            LineKind::Blank,
            LineKind::Blank,
            LineKind::Comment,
            LineKind::Comment,
            LineKind::Code,
        ]
    );
}

#[test]
fn triple_quoted_string_lines_are_continuations() {
    let text = "def f():\n    \"\"\"Doc.\n\nNot indented.\n    \"\"\"\n    pass\n";
    assert_eq!(
        kinds(text),
        vec![
            LineKind::Code,
            LineKind::Code,
            LineKind::Continuation,
            LineKind::Continuation,
            LineKind::Continuation,
            LineKind::Code,
        ]
    );
}

#[test]
fn escaped_quote_does_not_close_triple_string() {
    let text = "'''a \\''' still open\nx'''\ny";
    assert_eq!(
        kinds(text),
        vec![LineKind::Code, LineKind::Continuation, LineKind::Code]
    );
}

#[test]
fn open_brackets_continue_lines() {
    let text = "def f(a,\nb):\n    pass\nx = [\n]\n";
    assert_eq!(
        kinds(text),
        vec![
            LineKind::Code,
            LineKind::Continuation,
            LineKind::Code,
            LineKind::Code,
            LineKind::Continuation,
        ]
    );
}

#[test]
fn brackets_inside_strings_and_comments_are_ignored() {
    let text = "x = '(' # (\ny = \"[\"\nz";
    assert_eq!(
        kinds(text),
        vec![LineKind::Code, LineKind::Code, LineKind::Code]
    );
}

#[test]
fn backslash_continuation() {
    let text = "x = 1 + \\\n2\ny";
    assert_eq!(
        kinds(text),
        vec![LineKind::Code, LineKind::Continuation, LineKind::Code]
    );
}

#[test]
fn line_offsets_and_indent() {
    let lines = scan_lines("a\r\n  b\n\tc");
    assert_eq!(lines[0].start, 0);
    assert_eq!(lines[0].text, "a");
    assert_eq!(lines[1].start, 3);
    assert_eq!(lines[1].indent, 2);
    assert_eq!(lines[1].content_start(), 5);
    assert_eq!(lines[2].indent, 1);
}

#[test]
fn empty_text_has_no_lines() {
    assert!(scan_lines("").is_empty());
}

#[test]
fn feed_reports_depth_zero_colon() {
    let mut state = ScanState::default();
    let line = "def f(a: int = {'k': 1}) -> 'x:y':";
    let found = state.feed(line, |_, ch, depth| ch == ':' && depth == 0);
    assert_eq!(found, Some(line.len() - 1));
    assert!(!state.is_open());
}

#[test]
fn feed_stops_at_comment() {
    let mut state = ScanState::default();
    let found = state.feed("x = 1  # a: b", |_, ch, depth| ch == ':' && depth == 0);
    assert_eq!(found, None);
}

#[test]
fn indent_width_counts_spaces_and_tabs() {
    assert_eq!(indent_width("    x"), 4);
    assert_eq!(indent_width("\t x"), 2);
    assert_eq!(indent_width("x"), 0);
}
