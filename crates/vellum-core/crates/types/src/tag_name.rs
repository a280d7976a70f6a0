//! HTML tag name catalogs.
//!
//! Tag names are partitioned into categories. The category decides the
//! rendering [`Layout`], with list and table items overriding their container
//! category to render inline.

use std::fmt;
use std::str::FromStr;

/// How a tag lays out its content when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
	/// Content on its own line between the opening and closing tags.
	Block,
	/// Content directly between the opening and closing tags.
	Inline,
	/// No content and no closing tag.
	Void,
}

/// Category a tag name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagCategory {
	Block,
	Inline,
	Void,
	List,
	Table,
	Root,
}

impl TagCategory {
	pub const fn as_str(&self) -> &'static str {
		match self {
			TagCategory::Block => "block",
			TagCategory::Inline => "inline",
			TagCategory::Void => "void",
			TagCategory::List => "list",
			TagCategory::Table => "table",
			TagCategory::Root => "root",
		}
	}
}

macro_rules! tag_catalog {
	(
		$(#[$meta:meta])*
		pub enum $name:ident => $category:ident {
			$($variant:ident => $tag:literal),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum $name {
			$($variant),+
		}

		impl $name {
			/// Every tag in the catalog.
			pub const ALL: &'static [$name] = &[$($name::$variant),+];

			/// Lowercase tag name.
			pub const fn as_str(&self) -> &'static str {
				match self {
					$($name::$variant => $tag),+
				}
			}

			fn lookup(name: &str) -> Option<Self> {
				Self::ALL.iter().copied().find(|t| t.as_str() == name)
			}
		}

		impl From<$name> for TagName {
			fn from(tag: $name) -> Self {
				TagName::$category(tag)
			}
		}
	};
}

tag_catalog! {
	/// Block-level elements.
	pub enum BlockTag => Block {
		Address => "address",
		Article => "article",
		Aside => "aside",
		Audio => "audio",
		Blockquote => "blockquote",
		Datalist => "datalist",
		Details => "details",
		Dialog => "dialog",
		Div => "div",
		Fieldset => "fieldset",
		Figcaption => "figcaption",
		Figure => "figure",
		Footer => "footer",
		Form => "form",
		H1 => "h1",
		H2 => "h2",
		H3 => "h3",
		H4 => "h4",
		H5 => "h5",
		H6 => "h6",
		Header => "header",
		Hgroup => "hgroup",
		Main => "main",
		Nav => "nav",
		Noscript => "noscript",
		Optgroup => "optgroup",
		P => "p",
		Pre => "pre",
		Search => "search",
		Section => "section",
		Select => "select",
		Summary => "summary",
		Template => "template",
		Video => "video",
	}
}

tag_catalog! {
	/// Phrasing elements rendered on a single line.
	pub enum InlineTag => Inline {
		A => "a",
		Abbr => "abbr",
		B => "b",
		Bdi => "bdi",
		Bdo => "bdo",
		Button => "button",
		Cite => "cite",
		Code => "code",
		Data => "data",
		Del => "del",
		Dfn => "dfn",
		Em => "em",
		I => "i",
		Ins => "ins",
		Kbd => "kbd",
		Label => "label",
		Legend => "legend",
		Mark => "mark",
		Meter => "meter",
		SelectOption => "option",
		Output => "output",
		Progress => "progress",
		Q => "q",
		Rp => "rp",
		Rt => "rt",
		Ruby => "ruby",
		S => "s",
		Samp => "samp",
		Script => "script",
		Small => "small",
		Span => "span",
		Strong => "strong",
		Style => "style",
		Sub => "sub",
		Sup => "sup",
		Textarea => "textarea",
		Time => "time",
		Title => "title",
		U => "u",
		Var => "var",
	}
}

tag_catalog! {
	/// Elements without content or a closing tag.
	pub enum VoidTag => Void {
		Area => "area",
		Base => "base",
		Br => "br",
		Col => "col",
		Embed => "embed",
		Hr => "hr",
		Img => "img",
		Input => "input",
		Link => "link",
		Meta => "meta",
		Source => "source",
		Track => "track",
		Wbr => "wbr",
	}
}

tag_catalog! {
	/// List containers and list items.
	pub enum ListTag => List {
		Dd => "dd",
		Dl => "dl",
		Dt => "dt",
		Li => "li",
		Menu => "menu",
		Ol => "ol",
		Ul => "ul",
	}
}

tag_catalog! {
	/// Table structure elements.
	pub enum TableTag => Table {
		Caption => "caption",
		Colgroup => "colgroup",
		Table => "table",
		Tbody => "tbody",
		Td => "td",
		Tfoot => "tfoot",
		Th => "th",
		Thead => "thead",
		Tr => "tr",
	}
}

tag_catalog! {
	/// Document root elements.
	pub enum RootTag => Root {
		Body => "body",
		Head => "head",
		Html => "html",
	}
}

/// A tag name from any catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagName {
	Block(BlockTag),
	Inline(InlineTag),
	Void(VoidTag),
	List(ListTag),
	Table(TableTag),
	Root(RootTag),
}

impl TagName {
	/// Lowercase tag name.
	pub const fn as_str(&self) -> &'static str {
		match self {
			TagName::Block(t) => t.as_str(),
			TagName::Inline(t) => t.as_str(),
			TagName::Void(t) => t.as_str(),
			TagName::List(t) => t.as_str(),
			TagName::Table(t) => t.as_str(),
			TagName::Root(t) => t.as_str(),
		}
	}

	pub const fn category(&self) -> TagCategory {
		match self {
			TagName::Block(_) => TagCategory::Block,
			TagName::Inline(_) => TagCategory::Inline,
			TagName::Void(_) => TagCategory::Void,
			TagName::List(_) => TagCategory::List,
			TagName::Table(_) => TagCategory::Table,
			TagName::Root(_) => TagCategory::Root,
		}
	}

	/// Rendering layout.
	///
	/// List items and table cells render inline even though their category
	/// is a block-level container category.
	pub const fn layout(&self) -> Layout {
		match self {
			TagName::Void(_) => Layout::Void,
			TagName::Inline(_) => Layout::Inline,
			TagName::List(ListTag::Li | ListTag::Dt | ListTag::Dd) => Layout::Inline,
			TagName::Table(TableTag::Td | TableTag::Th | TableTag::Caption) => Layout::Inline,
			TagName::Block(_) | TagName::List(_) | TagName::Table(_) | TagName::Root(_) => {
				Layout::Block
			}
		}
	}

	pub const fn is_void(&self) -> bool {
		matches!(self, TagName::Void(_))
	}
}

impl fmt::Display for TagName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when a string names no known tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tag name '{0}'")]
pub struct UnknownTagName(pub String);

impl FromStr for TagName {
	type Err = UnknownTagName;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let name = s.to_ascii_lowercase();
		BlockTag::lookup(&name)
			.map(TagName::Block)
			.or_else(|| InlineTag::lookup(&name).map(TagName::Inline))
			.or_else(|| VoidTag::lookup(&name).map(TagName::Void))
			.or_else(|| ListTag::lookup(&name).map(TagName::List))
			.or_else(|| TableTag::lookup(&name).map(TagName::Table))
			.or_else(|| RootTag::lookup(&name).map(TagName::Root))
			.ok_or_else(|| UnknownTagName(s.to_string()))
	}
}
