//! Enumerated attribute constants.
//!
//! Each catalog is a closed set of string payloads. Catalog values convert
//! into [`AttrValue::Enum`](crate::AttrValue::Enum) and render as their
//! payload; they are never validated again at write time.

use std::fmt;
use std::str::FromStr;
use vellum_exception::Error;

/// A resolved enumerated constant: the catalog it came from and its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumValue {
	catalog: &'static str,
	value: &'static str,
}

impl EnumValue {
	pub const fn new(catalog: &'static str, value: &'static str) -> Self {
		Self { catalog, value }
	}

	/// Name of the catalog, e.g. `"Direction"`.
	pub const fn catalog(&self) -> &'static str {
		self.catalog
	}

	/// String payload rendered into the attribute.
	pub const fn value(&self) -> &'static str {
		self.value
	}
}

impl fmt::Display for EnumValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.value)
	}
}

/// A closed set of attribute constants with string payloads.
pub trait AttributeEnum: Copy + 'static {
	/// Catalog name used in diagnostics.
	const CATALOG: &'static str;

	/// Attribute the catalog constrains, used when parsing fails.
	const ATTRIBUTE: &'static str;

	/// Every constant in declaration order.
	fn variants() -> &'static [Self];

	/// String payload of this constant.
	fn as_str(&self) -> &'static str;

	/// Resolves this constant to an [`EnumValue`].
	fn to_enum_value(self) -> EnumValue {
		EnumValue::new(Self::CATALOG, self.as_str())
	}

	/// All payloads in declaration order.
	fn allowed_values() -> Vec<&'static str> {
		Self::variants().iter().map(|v| v.as_str()).collect()
	}

	/// Looks up a constant by payload.
	fn parse_payload(value: &str) -> Result<Self, Error> {
		Self::variants()
			.iter()
			.copied()
			.find(|v| v.as_str() == value)
			.ok_or_else(|| Error::EnumValueNotAllowed {
				attribute: Self::ATTRIBUTE.to_string(),
				value: value.to_string(),
				allowed: Self::allowed_values()
					.into_iter()
					.map(str::to_string)
					.collect(),
			})
	}
}

macro_rules! attribute_enum {
	(
		$(#[$meta:meta])*
		pub enum $name:ident for $attribute:literal {
			$($(#[$vmeta:meta])* $variant:ident => $payload:literal),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum $name {
			$($(#[$vmeta])* $variant),+
		}

		impl $name {
			const VARIANTS: &'static [$name] = &[$($name::$variant),+];

			/// Every payload in declaration order.
			pub const PAYLOADS: &'static [&'static str] = &[$($payload),+];

			/// String payload of this constant.
			pub const fn as_str(&self) -> &'static str {
				match self {
					$($name::$variant => $payload),+
				}
			}
		}

		impl AttributeEnum for $name {
			const CATALOG: &'static str = stringify!($name);
			const ATTRIBUTE: &'static str = $attribute;

			fn variants() -> &'static [Self] {
				Self::VARIANTS
			}

			fn as_str(&self) -> &'static str {
				$name::as_str(self)
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl FromStr for $name {
			type Err = Error;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				<$name as AttributeEnum>::parse_payload(s)
			}
		}

		impl From<$name> for EnumValue {
			fn from(value: $name) -> Self {
				value.to_enum_value()
			}
		}

		impl From<$name> for crate::AttrValue {
			fn from(value: $name) -> Self {
				crate::AttrValue::Enum(value.to_enum_value())
			}
		}
	};
}

attribute_enum! {
	/// Values of the `dir` attribute.
	pub enum Direction for "dir" {
		Ltr => "ltr",
		Rtl => "rtl",
		Auto => "auto",
	}
}

attribute_enum! {
	/// Values of the `contenteditable` attribute.
	pub enum ContentEditable for "contenteditable" {
		True => "true",
		False => "false",
		PlaintextOnly => "plaintext-only",
	}
}

attribute_enum! {
	/// Values of the `draggable` attribute.
	pub enum Draggable for "draggable" {
		True => "true",
		False => "false",
	}
}

attribute_enum! {
	/// Values of the `translate` attribute.
	pub enum Translate for "translate" {
		Yes => "yes",
		No => "no",
	}
}

attribute_enum! {
	/// WAI-ARIA roles accepted by the `role` attribute.
	pub enum Role for "role" {
		Alert => "alert",
		AlertDialog => "alertdialog",
		Application => "application",
		Article => "article",
		Banner => "banner",
		Button => "button",
		Cell => "cell",
		Checkbox => "checkbox",
		ColumnHeader => "columnheader",
		Combobox => "combobox",
		Complementary => "complementary",
		ContentInfo => "contentinfo",
		Definition => "definition",
		Dialog => "dialog",
		Document => "document",
		Feed => "feed",
		Figure => "figure",
		Form => "form",
		Generic => "generic",
		Grid => "grid",
		GridCell => "gridcell",
		Group => "group",
		Heading => "heading",
		Img => "img",
		Link => "link",
		List => "list",
		Listbox => "listbox",
		ListItem => "listitem",
		Log => "log",
		Main => "main",
		Marquee => "marquee",
		Math => "math",
		Menu => "menu",
		Menubar => "menubar",
		MenuItem => "menuitem",
		MenuItemCheckbox => "menuitemcheckbox",
		MenuItemRadio => "menuitemradio",
		Meter => "meter",
		Navigation => "navigation",
		None => "none",
		Note => "note",
		Option => "option",
		Presentation => "presentation",
		Progressbar => "progressbar",
		Radio => "radio",
		RadioGroup => "radiogroup",
		Region => "region",
		Row => "row",
		RowGroup => "rowgroup",
		RowHeader => "rowheader",
		Scrollbar => "scrollbar",
		Search => "search",
		Searchbox => "searchbox",
		Separator => "separator",
		Slider => "slider",
		SpinButton => "spinbutton",
		Status => "status",
		Switch => "switch",
		Tab => "tab",
		Table => "table",
		TabList => "tablist",
		TabPanel => "tabpanel",
		Term => "term",
		Textbox => "textbox",
		Timer => "timer",
		Toolbar => "toolbar",
		Tooltip => "tooltip",
		Tree => "tree",
		TreeGrid => "treegrid",
		TreeItem => "treeitem",
	}
}

attribute_enum! {
	/// Event handler attribute keys. The payload is the full `on…` key.
	pub enum Event for "event" {
		Abort => "onabort",
		AnimationEnd => "onanimationend",
		AnimationStart => "onanimationstart",
		AuxClick => "onauxclick",
		BeforeInput => "onbeforeinput",
		Blur => "onblur",
		Cancel => "oncancel",
		Change => "onchange",
		Click => "onclick",
		Close => "onclose",
		ContextMenu => "oncontextmenu",
		Copy => "oncopy",
		Cut => "oncut",
		DblClick => "ondblclick",
		Drag => "ondrag",
		DragEnd => "ondragend",
		DragEnter => "ondragenter",
		DragLeave => "ondragleave",
		DragOver => "ondragover",
		DragStart => "ondragstart",
		Drop => "ondrop",
		Error => "onerror",
		Focus => "onfocus",
		FocusIn => "onfocusin",
		FocusOut => "onfocusout",
		Input => "oninput",
		Invalid => "oninvalid",
		KeyDown => "onkeydown",
		KeyUp => "onkeyup",
		Load => "onload",
		MouseDown => "onmousedown",
		MouseEnter => "onmouseenter",
		MouseLeave => "onmouseleave",
		MouseMove => "onmousemove",
		MouseOut => "onmouseout",
		MouseOver => "onmouseover",
		MouseUp => "onmouseup",
		Paste => "onpaste",
		PointerDown => "onpointerdown",
		PointerMove => "onpointermove",
		PointerUp => "onpointerup",
		Reset => "onreset",
		Resize => "onresize",
		Scroll => "onscroll",
		Select => "onselect",
		Submit => "onsubmit",
		Toggle => "ontoggle",
		TouchEnd => "ontouchend",
		TouchMove => "ontouchmove",
		TouchStart => "ontouchstart",
		TransitionEnd => "ontransitionend",
		Wheel => "onwheel",
	}
}

attribute_enum! {
	/// Attribute names that can be used as keys.
	pub enum Attribute for "attribute" {
		Accesskey => "accesskey",
		Action => "action",
		Alt => "alt",
		Aria => "aria",
		Autocapitalize => "autocapitalize",
		Autofocus => "autofocus",
		Charset => "charset",
		Checked => "checked",
		Class => "class",
		Content => "content",
		Contenteditable => "contenteditable",
		Data => "data",
		Dir => "dir",
		Disabled => "disabled",
		Draggable => "draggable",
		Enterkeyhint => "enterkeyhint",
		For => "for",
		Height => "height",
		Hidden => "hidden",
		Href => "href",
		Id => "id",
		Inert => "inert",
		Inputmode => "inputmode",
		Lang => "lang",
		Method => "method",
		Multiple => "multiple",
		Name => "name",
		Nonce => "nonce",
		Placeholder => "placeholder",
		Popover => "popover",
		Readonly => "readonly",
		Rel => "rel",
		Required => "required",
		Role => "role",
		Selected => "selected",
		Slot => "slot",
		Spellcheck => "spellcheck",
		Src => "src",
		Style => "style",
		Tabindex => "tabindex",
		Target => "target",
		Title => "title",
		Translate => "translate",
		Type => "type",
		Value => "value",
		Width => "width",
	}
}
