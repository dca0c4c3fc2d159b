//! Host hooks tying a matcher to the selection menu.
//!
//! The host calls [`AutocompleteExtension::on_text_change`] after every edit
//! and [`AutocompleteExtension::on_key_down`] for every key press. Each hook
//! receives a `next` continuation: text changes always continue down the
//! host's chain, key presses only when the open menu did not consume them.

use std::fmt::Debug;

use caret_primitives::{CharIdx, Editable, KeyCode, KeyEvent, Range, TextModel};
use tracing::debug;

use crate::item::ComboboxItem;
use crate::menu::{Commit, MenuOptions, MenuState};
use crate::suggest::Autocomplete;

/// Applies a committed item to the host document.
pub trait CommitHandler<M: TextModel, D = ()> {
	fn commit(&mut self, model: &mut M, item: &ComboboxItem<M::Point, D>, target_range: Range<M::Point>);
}

impl<M: TextModel, D, C: CommitHandler<M, D> + ?Sized> CommitHandler<M, D> for &mut C {
	fn commit(&mut self, model: &mut M, item: &ComboboxItem<M::Point, D>, target_range: Range<M::Point>) {
		(**self).commit(model, item, target_range)
	}
}

/// Closure-backed commit handler.
pub struct FnCommit<F> {
	f: F,
}

impl<F> FnCommit<F> {
	pub fn new(f: F) -> Self {
		Self { f }
	}
}

impl<M, D, F> CommitHandler<M, D> for FnCommit<F>
where
	M: TextModel,
	F: FnMut(&mut M, &ComboboxItem<M::Point, D>, Range<M::Point>),
{
	fn commit(&mut self, model: &mut M, item: &ComboboxItem<M::Point, D>, target_range: Range<M::Point>) {
		(self.f)(model, item, target_range)
	}
}

/// Replaces the target range with the item's text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplaceWithText;

impl<M: Editable, D> CommitHandler<M, D> for ReplaceWithText {
	fn commit(&mut self, model: &mut M, item: &ComboboxItem<M::Point, D>, target_range: Range<M::Point>) {
		model.replace(&target_range, &item.text);
	}
}

/// An autocomplete algorithm, a commit handler and the menu they drive.
#[derive(Debug)]
pub struct AutocompleteExtension<A, C, P = CharIdx, D = ()> {
	algorithm: A,
	on_commit: C,
	menu: MenuState<P, D>,
}

impl<A, C, P: Copy + Debug, D> AutocompleteExtension<A, C, P, D> {
	pub fn new(algorithm: A, on_commit: C) -> Self {
		Self::with_options(algorithm, on_commit, MenuOptions::default())
	}

	pub fn with_options(algorithm: A, on_commit: C, options: MenuOptions) -> Self {
		Self {
			algorithm,
			on_commit,
			menu: MenuState::new(options),
		}
	}

	/// Read access for the rendering layer.
	pub fn menu(&self) -> &MenuState<P, D> {
		&self.menu
	}

	pub fn algorithm_mut(&mut self) -> &mut A {
		&mut self.algorithm
	}

	pub fn commit_handler(&self) -> &C {
		&self.on_commit
	}

	/// Cancels the menu without committing.
	pub fn close_menu(&mut self) {
		self.menu.close();
	}

	/// Recomputes candidates for the new document state, then calls `next`.
	///
	/// A match (re)opens the menu with fresh candidates; anything else,
	/// including a drag selection, closes it.
	pub fn on_text_change<M>(&mut self, model: &M, next: impl FnOnce(&M))
	where
		M: TextModel<Point = P>,
		A: Autocomplete<M, D>,
	{
		match self.algorithm.suggest(model) {
			Some(found) => self.menu.open(found.target_range, found.items),
			None => self.menu.close(),
		}
		next(model);
	}

	/// Handles navigation and commit keys while the menu is open.
	///
	/// `down`/`up` move the highlight, `tab`/`enter` commit and `esc`
	/// cancels. Consumed presses have their default prevented and do not
	/// reach `next`. Returns whether the press was consumed.
	pub fn on_key_down<M>(&mut self, event: &mut KeyEvent, model: &mut M, next: impl FnOnce(&mut KeyEvent, &mut M)) -> bool
	where
		M: TextModel<Point = P>,
		C: CommitHandler<M, D>,
	{
		if !self.menu.is_open() {
			next(event, model);
			return false;
		}

		let key = event.key();
		if key.is_bare(KeyCode::Down) {
			self.menu.move_highlight(1);
		} else if key.is_bare(KeyCode::Up) {
			self.menu.move_highlight(-1);
		} else if key.is_bare(KeyCode::Tab) || key.is_bare(KeyCode::Enter) {
			let commit = self.menu.take_commit();
			self.apply(model, commit);
		} else if key.is_bare(KeyCode::Esc) {
			self.menu.close();
		} else {
			next(event, model);
			return false;
		}

		event.prevent_default();
		true
	}

	/// Commits the item at `index`, as a pointer press on a menu row does.
	///
	/// Returns whether a commit reached the host. The menu closes either way.
	pub fn select_item<M>(&mut self, index: usize, model: &mut M) -> bool
	where
		M: TextModel<Point = P>,
		C: CommitHandler<M, D>,
	{
		let commit = self.menu.take_commit_at(index);
		self.apply(model, commit)
	}

	fn apply<M>(&mut self, model: &mut M, commit: Option<Commit<P, D>>) -> bool
	where
		M: TextModel<Point = P>,
		C: CommitHandler<M, D>,
	{
		let Some(Commit { item, target_range }) = commit else {
			debug!("stale commit skipped");
			return false;
		};
		debug!(key = %item.key, range = ?target_range, "committing item");
		self.on_commit.commit(model, &item, target_range);
		true
	}
}
