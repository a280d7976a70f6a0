//! Context-scoped begin/end stack
//!
//! `begin()` pushes a tag onto the stack of the current execution context and
//! `end::<T>()` pops it again, emitting the closing markup.
//!
//! ## Contexts
//!
//! - **Scope**: inside [`with_tag_scope`] or [`with_tag_scope_sync`] the stack
//!   is task-local and is released with the scope.
//! - **Task**: inside a tokio task without a scope the stack is keyed by the
//!   task id. It is created on the first `begin()` and removed once empty.
//! - **Fallback**: outside any task a thread-local stack is used.
//!
//! Scope and task stacks follow their task across the threads of a
//! work-stealing runtime; interleaved tasks never see each other's entries.
//!
//! A scope or fallback stack that is dropped while it still holds open tags
//! logs a warning; the entries are discarded. A task stack left non-empty by
//! a finished task stays in the registry under its unique id.

use crate::render;
use crate::tag::{Tag, TagExt, type_label};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::any::TypeId;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use vellum_exception::{Error, Result};

/// Execution context a stack belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
	/// Task-local stack created by a tag scope.
	Scope,
	/// Stack keyed by the id of the running tokio task.
	Task,
	/// Thread-local stack used outside any task.
	Fallback,
}

impl ContextKind {
	pub const fn as_str(&self) -> &'static str {
		match self {
			ContextKind::Scope => "scope",
			ContextKind::Task => "task",
			ContextKind::Fallback => "fallback",
		}
	}
}

impl fmt::Display for ContextKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A begun tag waiting for its `end()`.
trait OpenTag: Send {
	fn tag_type(&self) -> TypeId;
	fn type_label(&self) -> &'static str;
	/// Renders the closing fragment.
	fn close(self: Box<Self>) -> String;
}

impl<T: Tag> OpenTag for T {
	fn tag_type(&self) -> TypeId {
		TypeId::of::<T>()
	}

	fn type_label(&self) -> &'static str {
		type_label::<T>()
	}

	fn close(self: Box<Self>) -> String {
		self.render()
	}
}

struct ContextStack {
	kind: ContextKind,
	entries: Vec<Box<dyn OpenTag>>,
}

impl ContextStack {
	fn new(kind: ContextKind) -> Self {
		Self {
			kind,
			entries: Vec::new(),
		}
	}

	fn push(&mut self, entry: Box<dyn OpenTag>) {
		self.entries.push(entry);
	}

	fn pop(&mut self) -> Option<Box<dyn OpenTag>> {
		let entry = self.entries.pop();
		if self.entries.is_empty() {
			// Release the allocation once the last tag is closed
			self.entries = Vec::new();
		}
		entry
	}
}

impl Drop for ContextStack {
	fn drop(&mut self) {
		if self.entries.is_empty() {
			return;
		}
		let open: Vec<&str> = self.entries.iter().map(|entry| entry.type_label()).collect();
		tracing::warn!(
			context = self.kind.as_str(),
			depth = open.len(),
			open = ?open,
			"tag context dropped with tags begun but never ended"
		);
	}
}

tokio::task_local! {
	/// Task-local tag stack. Follows the task across thread boundaries in
	/// work-stealing runtimes.
	static TASK_STACK: RefCell<ContextStack>;
}

thread_local! {
	static FALLBACK_STACK: RefCell<ContextStack> =
		RefCell::new(ContextStack::new(ContextKind::Fallback));
}

/// Stacks of tokio tasks running without a tag scope, keyed by task id.
static SPAWNED_STACKS: Lazy<Mutex<HashMap<tokio::task::Id, ContextStack>>> =
	Lazy::new(|| Mutex::new(HashMap::new()));

fn in_task_scope() -> bool {
	TASK_STACK.try_with(|_| ()).is_ok()
}

/// Runs `f` against the stack of the current context.
///
/// The borrow (or lock) is released before `f`'s result is used, so
/// rendering a popped tag may itself begin or end tags. `f` must not begin or
/// end tags itself.
fn with_stack<R>(f: impl FnOnce(&mut ContextStack) -> R) -> R {
	if in_task_scope() {
		return TASK_STACK.with(|stack| f(&mut stack.borrow_mut()));
	}
	match tokio::task::try_id() {
		Some(id) => {
			let mut stacks = SPAWNED_STACKS.lock();
			let stack = stacks
				.entry(id)
				.or_insert_with(|| ContextStack::new(ContextKind::Task));
			let result = f(stack);
			if stack.entries.is_empty() {
				stacks.remove(&id);
			}
			result
		}
		None => FALLBACK_STACK.with(|stack| f(&mut stack.borrow_mut())),
	}
}

/// Executes a future within a tag scope.
///
/// Tags begun inside the future land on a stack private to this scope. If a
/// scope is already active, the future runs directly within it.
pub async fn with_tag_scope<F, T>(f: F) -> T
where
	F: Future<Output = T>,
{
	if in_task_scope() {
		f.await
	} else {
		TASK_STACK
			.scope(RefCell::new(ContextStack::new(ContextKind::Scope)), f)
			.await
	}
}

/// Synchronous variant of [`with_tag_scope`].
pub fn with_tag_scope_sync<F, R>(f: F) -> R
where
	F: FnOnce() -> R,
{
	if in_task_scope() {
		f()
	} else {
		TASK_STACK.sync_scope(RefCell::new(ContextStack::new(ContextKind::Scope)), f)
	}
}

/// Kind of the context `begin()` and `end()` currently resolve to.
pub fn current_context() -> ContextKind {
	if in_task_scope() {
		ContextKind::Scope
	} else if tokio::task::try_id().is_some() {
		ContextKind::Task
	} else {
		ContextKind::Fallback
	}
}

/// Number of tags begun but not yet ended in the current context.
pub fn open_tag_depth() -> usize {
	with_stack(|stack| stack.entries.len())
}

pub(crate) fn begin<T: Tag>(tag: &T) -> Result<String> {
	let state = tag.state();
	if state.tag().is_void() {
		return Err(Error::VoidElementBlock {
			tag: state.tag().as_str(),
		});
	}

	let fragment = render::decorate(
		state.template(),
		state.prefix(),
		&render::begin_fragment(state),
		"",
	);

	let mut open = tag.clone();
	open.state_mut().begun = true;
	let (kind, depth) = with_stack(|stack| {
		stack.push(Box::new(open));
		(stack.kind, stack.entries.len())
	});
	tracing::debug!(
		tag = state.tag().as_str(),
		tag_type = type_label::<T>(),
		context = kind.as_str(),
		depth,
		"tag begun"
	);
	Ok(fragment)
}

/// Closes the innermost open tag of the current context.
///
/// Fails with [`Error::NoMatchingBegin`] if nothing is open, and with
/// [`Error::TagTypeMismatch`] if the innermost open tag is not a `T`. A
/// mismatched entry stays on the stack.
///
/// # Example
///
/// ```
/// use vellum_tags::{Div, Span, TagExt, end};
///
/// let mut html = Div::new().class("box").begin().unwrap();
/// html.push_str(&Span::new().content("hi").render());
/// html.push_str(&end::<Div>().unwrap());
/// assert_eq!(html, "<div class=\"box\"><span>hi</span></div>");
/// ```
pub fn end<T: Tag>() -> Result<String> {
	let expected = type_label::<T>();
	let (entry, kind, depth) = with_stack(|stack| {
		let entry = stack.pop().ok_or(Error::NoMatchingBegin { tag_type: expected })?;
		if entry.tag_type() != TypeId::of::<T>() {
			let found = entry.type_label();
			stack.push(entry);
			return Err(Error::TagTypeMismatch { expected, found });
		}
		Ok((entry, stack.kind, stack.entries.len()))
	})?;

	tracing::debug!(tag_type = expected, context = kind.as_str(), depth, "tag ended");
	Ok(entry.close())
}
