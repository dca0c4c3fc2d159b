//! End-to-end typing sessions against the rope host.

use caret_autocomplete::{
	AutocompleteExtension, BoundaryLimits, BoundarySearch, LabelRenderer, MenuView, Placement, PrefixSearch, ReplaceWithText,
	TriggerSearch, menu_position,
};
use caret_primitives::{Key, KeyCode, KeyEvent, Position, Range, Rect, RopeDocument, TextModel};
use pretty_assertions::assert_eq;

type Session<A> = AutocompleteExtension<A, ReplaceWithText>;

fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::TRACE)
		.try_init();
}

fn commands() -> PrefixSearch {
	PrefixSearch::new(["word", "world", "wombat", "table", "todo"])
}

fn type_each<A>(session: &mut Session<A>, doc: &mut RopeDocument, text: &str)
where
	A: caret_autocomplete::Autocomplete<RopeDocument>,
{
	for ch in text.chars() {
		doc.type_text(ch.encode_utf8(&mut [0; 4]));
		session.on_text_change(doc, |_| {});
	}
}

fn press<A>(session: &mut Session<A>, doc: &mut RopeDocument, code: KeyCode) -> bool {
	let mut event = KeyEvent::new(Key::new(code));
	session.on_key_down(&mut event, doc, |_, _| {})
}

fn labels<A>(session: &Session<A>) -> Vec<String> {
	session.menu().items().iter().map(|item| item.text.clone()).collect()
}

/// Lays the document out one cell per character, one row per line.
fn layout(doc: &RopeDocument) -> impl Fn(&Range) -> Option<Rect> + '_ {
	move |range: &Range| {
		let rope = doc.rope();
		let line = rope.char_to_line(range.start());
		let col = range.start() - rope.line_to_char(line);
		Some(Rect::new(col as u16, line as u16, range.len() as u16, 1))
	}
}

#[test]
fn slash_command_is_narrowed_and_committed() {
	init_tracing();
	let mut session: Session<_> = AutocompleteExtension::new(TriggerSearch::new("/", 10, commands()).unwrap(), ReplaceWithText);
	let mut doc = RopeDocument::with_caret_at_end("");

	type_each(&mut session, &mut doc, "hello");
	assert!(!session.menu().is_open());

	type_each(&mut session, &mut doc, " /");
	assert_eq!(labels(&session).len(), 5);
	assert_eq!(session.menu().target_range(), Some(&Range::new(6, 7)));

	type_each(&mut session, &mut doc, "wor");
	assert_eq!(labels(&session), ["word", "world"]);

	assert!(press(&mut session, &mut doc, KeyCode::Down));
	assert!(press(&mut session, &mut doc, KeyCode::Enter));
	assert_eq!(doc.rope().to_string(), "hello world");
	assert_eq!(doc.selection(), Some(Range::point(11)));
	assert!(!session.menu().is_open());

	type_each(&mut session, &mut doc, " again");
	assert!(!session.menu().is_open());
	assert!(!press(&mut session, &mut doc, KeyCode::Enter));
}

#[test]
fn down_wraps_back_to_start() {
	let mut session: Session<_> = AutocompleteExtension::new(TriggerSearch::new("/", 10, commands()).unwrap(), ReplaceWithText);
	let mut doc = RopeDocument::with_caret_at_end("");
	type_each(&mut session, &mut doc, "/");

	let count = session.menu().items().len();
	for _ in 0..count {
		press(&mut session, &mut doc, KeyCode::Down);
	}
	assert_eq!(session.menu().item_index(), 0);
}

#[test]
fn menu_view_is_placed_under_the_trigger() {
	let mut session: Session<_> = AutocompleteExtension::new(TriggerSearch::new("/", 10, commands()).unwrap(), ReplaceWithText);
	let mut doc = RopeDocument::with_caret_at_end("intro\n");
	type_each(&mut session, &mut doc, "see /t");

	let position = menu_position(&layout(&doc), session.menu().target_range(), Position::new(0, 20), Placement::default());
	assert_eq!(position, Some(Position::new(4, 22)));

	let view = MenuView::build(session.menu(), &LabelRenderer, position).unwrap();
	let rows: Vec<_> = view.rows.iter().map(|row| (row.content.as_str(), row.highlighted)).collect();
	assert_eq!(rows, [("table", true), ("todo", false)]);

	let todo = view.rows[1].index;
	assert!(session.select_item(todo, &mut doc));
	assert_eq!(doc.rope().to_string(), "intro\nsee todo");
}

#[test]
fn boundary_session_commits_over_its_own_window() {
	let words = PrefixSearch::new(["the format", "format", "fold"]);
	let limits = BoundaryLimits {
		max_boundaries: 2,
		farthest_first: false,
		max_suggestions: 10,
	};
	let mut session: Session<_> = AutocompleteExtension::new(BoundarySearch::new(r"^|\s", limits, words).unwrap(), ReplaceWithText);
	let mut doc = RopeDocument::with_caret_at_end("");
	type_each(&mut session, &mut doc, "find the fo");

	assert_eq!(session.menu().target_range(), Some(&Range::new(9, 11)));
	assert_eq!(labels(&session), ["format", "fold", "the format"]);

	press(&mut session, &mut doc, KeyCode::Up);
	assert!(press(&mut session, &mut doc, KeyCode::Tab));
	assert_eq!(doc.rope().to_string(), "find the format");
}

#[test]
fn drag_selection_then_escape() {
	let mut session: Session<_> = AutocompleteExtension::new(TriggerSearch::new("/", 10, commands()).unwrap(), ReplaceWithText);
	let mut doc = RopeDocument::with_caret_at_end("");
	type_each(&mut session, &mut doc, "/wo");
	assert!(press(&mut session, &mut doc, KeyCode::Esc));
	assert!(!session.menu().is_open());

	let mut reached = false;
	let mut event = KeyEvent::new(KeyCode::Esc);
	assert!(!session.on_key_down(&mut event, &mut doc, |_, _| reached = true));
	assert!(reached);
	assert!(!event.is_default_prevented());

	session.on_text_change(&doc, |_| {});
	assert!(session.menu().is_open());
	doc.set_selection(Some(Range::new(0, 3))).unwrap();
	session.on_text_change(&doc, |_| {});
	assert!(!session.menu().is_open());
}
