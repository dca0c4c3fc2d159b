use ropey::Rope;

use super::*;

#[test]
fn ascii_steps_one_char() {
	let text = Rope::from("abc");
	let slice = text.slice(..);
	assert_eq!(next_grapheme_boundary(slice, 1), 2);
	assert_eq!(prev_grapheme_boundary(slice, 2), 1);
}

#[test]
fn combining_mark_is_skipped() {
	// "e" followed by a combining acute accent forms one cluster.
	let text = Rope::from("ae\u{301}b");
	let slice = text.slice(..);
	assert_eq!(next_grapheme_boundary(slice, 1), 3);
	assert_eq!(prev_grapheme_boundary(slice, 3), 1);
}

#[test]
fn boundaries_saturate_at_ends() {
	let text = Rope::from("xy");
	let slice = text.slice(..);
	assert_eq!(prev_grapheme_boundary(slice, 0), 0);
	assert_eq!(next_grapheme_boundary(slice, 2), 2);
}

#[test]
fn grapheme_len_counts_clusters() {
	assert_eq!(grapheme_len(""), 0);
	assert_eq!(grapheme_len("the fo"), 6);
	assert_eq!(grapheme_len("ae\u{301}"), 2);
}

#[test]
fn flag_pair_is_one_step() {
	// Two regional indicators form a single flag.
	let text = Rope::from("a\u{1F1F3}\u{1F1FF}b");
	let slice = text.slice(..);
	assert_eq!(next_grapheme_boundary(slice, 1), 3);
	assert_eq!(prev_grapheme_boundary(slice, 3), 1);
}
