use super::*;

#[test]
fn missing_selection_is_not_collapsed() {
	assert!(!is_collapsed::<usize>(None));
	assert_eq!(caret::<usize>(None), None);
}

#[test]
fn caret_selection_is_collapsed() {
	let sel: Option<Range> = Some(Range::point(7));
	assert!(is_collapsed(sel.as_ref()));
	assert_eq!(caret(sel.as_ref()), Some(7));
}

#[test]
fn drag_selection_has_no_caret() {
	let sel: Option<Range> = Some(Range::new(9, 3));
	assert!(!is_collapsed(sel.as_ref()));
	assert_eq!(caret(sel.as_ref()), None);
}
