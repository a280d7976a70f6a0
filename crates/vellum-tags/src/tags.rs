//! Concrete tag types
//!
//! One type per catalog tag name, plus [`Element`] for names chosen at run
//! time.

use crate::state::TagState;
use crate::tag::{Tag, TagExt};
use std::fmt;
use vellum_types::{BlockTag, InlineTag, ListTag, RootTag, TableTag, TagName, VoidTag};

macro_rules! concrete_tags {
	($category:ident($catalog:ident) { $($name:ident),+ $(,)? }) => {
		$(
			#[doc = concat!("The `", stringify!($name), "` element.")]
			#[derive(Debug, Clone, PartialEq, Eq)]
			pub struct $name {
				state: TagState,
			}

			impl $name {
				pub fn new() -> Self {
					Self {
						state: TagState::new(TagName::$category($catalog::$name)),
					}
				}
			}

			impl Default for $name {
				fn default() -> Self {
					Self::new()
				}
			}

			impl Tag for $name {
				const NAME: Option<TagName> = Some(TagName::$category($catalog::$name));

				fn from_state(state: TagState) -> Self {
					Self { state }
				}

				fn state(&self) -> &TagState {
					&self.state
				}

				fn state_mut(&mut self) -> &mut TagState {
					&mut self.state
				}
			}

			impl fmt::Display for $name {
				fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
					f.write_str(&self.render())
				}
			}
		)+
	};
}

concrete_tags!(Block(BlockTag) {
	Address, Article, Aside, Audio, Blockquote, Datalist, Details, Dialog, Div, Fieldset,
	Figcaption, Figure, Footer, Form, H1, H2, H3, H4, H5, H6, Header, Hgroup, Main, Nav,
	Noscript, Optgroup, P, Pre, Search, Section, Select, Summary, Template, Video,
});

concrete_tags!(Inline(InlineTag) {
	A, Abbr, B, Bdi, Bdo, Button, Cite, Code, Data, Del, Dfn, Em, I, Ins, Kbd, Label, Legend,
	Mark, Meter, SelectOption, Output, Progress, Q, Rp, Rt, Ruby, S, Samp, Script, Small, Span,
	Strong, Style, Sub, Sup, Textarea, Time, Title, U, Var,
});

concrete_tags!(Void(VoidTag) {
	Area, Base, Br, Col, Embed, Hr, Img, Input, Link, Meta, Source, Track, Wbr,
});

concrete_tags!(List(ListTag) { Dd, Dl, Dt, Li, Menu, Ol, Ul });

concrete_tags!(Table(TableTag) {
	Caption, Colgroup, Table, Tbody, Td, Tfoot, Th, Thead, Tr,
});

concrete_tags!(Root(RootTag) { Body, Head, Html });

/// A tag whose name is chosen at construction.
///
/// `Element` is abstract: the factory cannot create it by type, only through
/// [`TagFactory::create_named`](crate::TagFactory::create_named).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	state: TagState,
}

impl Element {
	pub fn named(tag: impl Into<TagName>) -> Self {
		Self {
			state: TagState::new(tag.into()),
		}
	}
}

impl Tag for Element {
	const NAME: Option<TagName> = None;

	fn from_state(state: TagState) -> Self {
		Self { state }
	}

	fn state(&self) -> &TagState {
		&self.state
	}

	fn state_mut(&mut self) -> &mut TagState {
		&mut self.state
	}
}

impl fmt::Display for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}
