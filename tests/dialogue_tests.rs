// Host-side tests for the sentinel dialogue and its typewriter reveal.

#![allow(dead_code)]
include!("support/tree.rs");

use crate::constants::{REVEAL_MAX_SEC, REVEAL_SEC_PER_CHAR};
use crate::core::dialogue::*;

#[test]
fn starts_closed_with_nothing_visible() {
    let d = Dialogue::default();
    assert_eq!(d.mode(), DialogueMode::Closed);
    assert_eq!(d.visible_text(), "");
    assert!(d.reveal().is_none());
    assert_eq!(d.line_count(), SENTINEL_LINES.len());
}

#[test]
fn open_starts_at_first_line() {
    let mut d = Dialogue::default();
    d.open();
    d.advance();
    d.advance();
    d.close();
    d.open();
    assert_eq!(d.line_index(), 0);
    assert_eq!(d.current_line(), SENTINEL_LINES[0]);
    assert_eq!(d.reveal().map(|r| r.shown), Some(0));
}

#[test]
fn advancing_n_times_wraps_to_first_line() {
    let mut d = Dialogue::default();
    d.open();
    for i in 1..SENTINEL_LINES.len() {
        d.advance();
        assert_eq!(d.line_index(), i);
    }
    d.advance();
    assert_eq!(d.line_index(), 0);
}

#[test]
fn advance_while_closed_is_ignored() {
    let mut d = Dialogue::default();
    d.advance();
    assert_eq!(d.line_index(), 0);
    assert!(!d.is_open());
    assert!(d.reveal().is_none());
}

#[test]
fn reveal_is_partial_midway() {
    let mut d = Dialogue::default();
    d.open();
    let line = SENTINEL_LINES[0];
    assert_eq!(line.chars().count(), 44);

    // 44 chars reveal over 1.232s; half a second shows floor(44 * 0.5 / 1.232)
    let text = d.tick(0.5).expect("text changed");
    assert_eq!(text.chars().count(), 17);
    assert!(line.starts_with(text));
    assert_eq!(d.visible_text(), text);

    let full = d.tick(2.0).expect("text changed");
    assert_eq!(full, line);
    assert!(d.reveal().unwrap().is_done());
    assert_eq!(d.tick(0.1), None);
}

#[test]
fn close_cancels_reveal() {
    let mut d = Dialogue::default();
    d.open();
    d.tick(0.2);
    d.close();
    assert!(d.reveal().is_none());
    assert_eq!(d.tick(1.0), None);
    assert_eq!(d.visible_text(), "");
}

#[test]
fn advance_restarts_reveal_for_next_line() {
    let mut d = Dialogue::default();
    d.open();
    d.tick(5.0);
    d.advance();
    let r = d.reveal().unwrap();
    assert_eq!(r.shown, 0);
    assert_eq!(r.total, SENTINEL_LINES[1].chars().count());
    assert_eq!(d.visible_text(), "");
}

#[test]
fn reveal_duration_is_capped() {
    assert!((reveal_duration(10) - 10.0 * REVEAL_SEC_PER_CHAR).abs() < 1e-6);
    assert_eq!(reveal_duration(10_000), REVEAL_MAX_SEC);
    assert_eq!(reveal_duration(0), 0.0);
}

#[test]
fn empty_line_reveals_immediately() {
    let mut r = Reveal::new(0);
    assert!(r.is_done());
    assert_eq!(r.step(0.1), None);
}

#[test]
fn prefix_chars_respects_utf8() {
    assert_eq!(prefix_chars("héllo", 2), "hé");
    assert_eq!(prefix_chars("⚛ core", 1), "⚛");
    assert_eq!(prefix_chars("abc", 10), "abc");
    assert_eq!(prefix_chars("abc", 0), "");
}

#[test]
fn custom_lines_wrap() {
    static LINES: &[&str] = &["one", "two"];
    let mut d = Dialogue::new(LINES);
    d.open();
    d.advance();
    d.advance();
    assert_eq!(d.current_line(), "one");
}
