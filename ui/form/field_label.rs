use markup::{Component, ElementNode, Node};

#[derive(Clone, Default)]
pub struct FieldLabel {
	pub html_for: Option<String>,
	pub children: Vec<Node>,
}

impl Component for FieldLabel {
	fn render(self) -> Node {
		let mut label = ElementNode::new("label")
			.attribute("class", "field-label")
			.attribute("for", self.html_for);
		for child in self.children {
			label = label.child(child);
		}
		label.into()
	}
}
