use derive_more::From;
use std::borrow::Cow;
use std::fmt::Write;
use std::rc::Rc;

#[derive(Clone, From)]
pub enum Node {
	Raw(RawTextNode),
	Text(TextNode),
	Fragment(FragmentNode),
	Element(ElementNode),
	Option(Option<Box<Node>>),
	Vec(Vec<Node>),
}

#[derive(Clone)]
pub struct RawTextNode(pub Cow<'static, str>);

#[derive(Clone)]
pub struct TextNode(pub Cow<'static, str>);

#[derive(Clone)]
pub struct FragmentNode {
	pub children: Vec<Node>,
}

#[derive(Clone)]
pub struct ElementNode {
	pub name: &'static str,
	pub attributes: Vec<(&'static str, AttributeValue)>,
	pub listeners: Vec<(&'static str, EventListener)>,
	pub children: Vec<Node>,
	pub void: bool,
}

#[derive(Clone, From)]
pub enum AttributeValue {
	Bool(Option<bool>),
	String(Option<Cow<'static, str>>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Event {
	pub name: &'static str,
	pub value: String,
}

#[derive(Clone)]
pub struct EventListener(Rc<dyn Fn(&Event)>);

pub trait Component {
	fn render(self) -> Node;
}

impl Event {
	pub fn new(name: &'static str, value: impl Into<String>) -> Event {
		Event {
			name,
			value: value.into(),
		}
	}
}

impl EventListener {
	pub fn new(listener: impl Fn(&Event) + 'static) -> EventListener {
		EventListener(Rc::new(listener))
	}
	pub fn call(&self, event: &Event) {
		(self.0)(event)
	}
}

impl ElementNode {
	pub fn new(name: &'static str) -> ElementNode {
		ElementNode {
			name,
			attributes: Vec::new(),
			listeners: Vec::new(),
			children: Vec::new(),
			void: false,
		}
	}

	/// A void element renders as `<name ... />` and may not have children.
	pub fn void(name: &'static str) -> ElementNode {
		ElementNode {
			name,
			attributes: Vec::new(),
			listeners: Vec::new(),
			children: Vec::new(),
			void: true,
		}
	}

	pub fn attribute(mut self, key: &'static str, value: impl Into<AttributeValue>) -> ElementNode {
		self.attributes.push((key, value.into()));
		self
	}

	pub fn listener(mut self, event: &'static str, listener: EventListener) -> ElementNode {
		self.listeners.push((event, listener));
		self
	}

	pub fn child(mut self, child: impl Into<Node>) -> ElementNode {
		self.children.push(child.into());
		self
	}

	pub fn string_attribute(&self, key: &'static str) -> Option<&str> {
		self.attributes.iter().find_map(|(k, value)| match value {
			AttributeValue::String(Some(value)) if *k == key => Some(value.as_ref()),
			_ => None,
		})
	}

	pub fn bool_attribute(&self, key: &'static str) -> bool {
		self.attributes.iter().any(|(k, value)| match value {
			AttributeValue::Bool(Some(value)) => *k == key && *value,
			_ => false,
		})
	}
}

impl Node {
	pub fn render_to_string(self) -> String {
		self.to_string()
	}

	pub fn element_by_id(&self, id: &str) -> Option<&ElementNode> {
		match self {
			Node::Element(element) => {
				if element.string_attribute("id") == Some(id) {
					return Some(element);
				}
				element
					.children
					.iter()
					.find_map(|child| child.element_by_id(id))
			}
			Node::Fragment(fragment) => fragment
				.children
				.iter()
				.find_map(|child| child.element_by_id(id)),
			Node::Option(node) => node.as_ref().and_then(|node| node.element_by_id(id)),
			Node::Vec(nodes) => nodes.iter().find_map(|child| child.element_by_id(id)),
			_ => None,
		}
	}

	/// Deliver an event to the element with the given id. Returns false
	/// when no such element exists or when the element carries a truthy
	/// `disabled` attribute, in which case no listener runs.
	pub fn dispatch(&self, id: &str, event: &Event) -> bool {
		let element = match self.element_by_id(id) {
			Some(element) => element,
			None => return false,
		};
		if element.bool_attribute("disabled") {
			return false;
		}
		for (name, listener) in element.listeners.iter() {
			if *name == event.name {
				listener.call(event);
			}
		}
		true
	}
}

impl std::fmt::Display for Node {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Node::Raw(node) => {
				write!(f, "{}", node)?;
			}
			Node::Text(node) => {
				write!(f, "{}", node)?;
			}
			Node::Fragment(node) => {
				write!(f, "{}", node)?;
			}
			Node::Element(node) => {
				write!(f, "{}", node)?;
			}
			Node::Option(node) => {
				if let Some(node) = node {
					write!(f, "{}", node)?;
				}
			}
			Node::Vec(nodes) => {
				for node in nodes {
					write!(f, "{}", node)?;
				}
			}
		};
		Ok(())
	}
}

impl std::fmt::Display for FragmentNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for child in self.children.iter() {
			write!(f, "{}", child)?;
		}
		Ok(())
	}
}

impl std::fmt::Display for ElementNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "<{}", self.name)?;
		for (key, value) in self.attributes.iter() {
			match value {
				AttributeValue::Bool(value) => {
					if let Some(true) = value {
						write!(f, " {}", key)?;
					}
				}
				AttributeValue::String(value) => {
					if let Some(value) = value {
						write!(f, r#" {}=""#, key)?;
						write_escaped(f, value)?;
						write!(f, r#"""#)?;
					}
				}
			}
		}
		if self.void {
			write!(f, " />")?;
			return Ok(());
		}
		write!(f, ">")?;
		for child in self.children.iter() {
			write!(f, "{}", child)?;
		}
		write!(f, "</{}>", self.name)?;
		Ok(())
	}
}

impl std::fmt::Display for RawTextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::fmt::Display for TextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write_escaped(f, &self.0)
	}
}

fn write_escaped(f: &mut std::fmt::Formatter<'_>, value: &str) -> std::fmt::Result {
	for c in value.chars() {
		match c {
			'>' => write!(f, "&gt;")?,
			'<' => write!(f, "&lt;")?,
			'"' => write!(f, "&quot;")?,
			'&' => write!(f, "&amp;")?,
			'\'' => write!(f, "&apos;")?,
			c => f.write_char(c)?,
		};
	}
	Ok(())
}

impl From<Option<String>> for AttributeValue {
	fn from(value: Option<String>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<&'static str> for AttributeValue {
	fn from(value: &'static str) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> AttributeValue {
		AttributeValue::Bool(Some(value))
	}
}

impl From<String> for Node {
	fn from(value: String) -> Node {
		Node::Text(TextNode(value.into()))
	}
}

impl From<&'static str> for Node {
	fn from(value: &'static str) -> Node {
		Node::Text(TextNode(value.into()))
	}
}

impl<T> From<Option<T>> for Node
where
	T: Into<Node>,
{
	fn from(value: Option<T>) -> Node {
		Node::Option(value.map(|value| Box::new(value.into())))
	}
}
