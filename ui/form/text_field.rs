use super::FieldLabel;
use markup::{Component, ElementNode, EventListener, Node};

#[derive(Clone, Default)]
pub struct TextField {
	pub aria_described_by: Option<String>,
	pub aria_label: Option<String>,
	pub aria_labelled_by: Option<String>,
	pub description: Option<String>,
	pub disabled: Option<bool>,
	pub error_message: Option<String>,
	pub on_change: Option<EventListener>,
	pub required: Option<bool>,
	pub title: String,
	pub value: String,
}

impl Component for TextField {
	fn render(self) -> Node {
		let input_id = input_id(&self.title);
		let disabled = self.disabled.unwrap_or(false);
		let required = self.required.unwrap_or(false);
		let aria_label = match self.aria_label {
			Some(aria_label) => aria_label,
			None => self.title.clone(),
		};
		let described_by = match self.aria_described_by {
			Some(described_by) => described_by,
			None => {
				if self.error_message.is_some() {
					format!("error-{}", self.title)
				} else if self.description.is_some() {
					format!("description-{}", self.title)
				} else {
					String::new()
				}
			}
		};
		// aria-describedby carries the message text itself after the
		// identifier, not a second element id.
		let described_by = match self.error_message.as_ref() {
			Some(error_message) => format!("{} {}", described_by, error_message),
			None => described_by,
		};
		let mut input_class = "form-text-field".to_owned();
		if disabled {
			input_class.push_str(" form-text-field-disabled");
		}
		if self.error_message.is_some() {
			input_class.push_str(" form-text-field-error");
		}
		let mut label_children: Vec<Node> = vec![self.title.clone().into()];
		if required {
			label_children.push(
				ElementNode::new("span")
					.attribute("class", "field-required-marker")
					.child("*")
					.into(),
			);
		}
		let label = FieldLabel {
			html_for: Some(input_id.clone()),
			children: label_children,
		}
		.render();
		let mut input = ElementNode::void("input")
			.attribute("class", input_class)
			.attribute("type", "text")
			.attribute("id", input_id)
			.attribute("name", self.title.clone())
			.attribute("value", self.value)
			.attribute("disabled", self.disabled)
			.attribute("required", self.required)
			.attribute("aria-label", aria_label)
			.attribute("aria-labelledby", self.aria_labelled_by)
			.attribute("aria-describedby", described_by);
		if let Some(on_change) = self.on_change {
			input = input.listener("input", on_change);
		}
		let error_id = format!("error-{}", self.title);
		let error = self.error_message.map(|error_message| {
			Node::from(
				ElementNode::new("div")
					.attribute("class", "field-error")
					.attribute("id", error_id)
					.attribute("role", "alert")
					.child(error_message),
			)
		});
		let description = self.description.map(|description| {
			Node::from(
				ElementNode::new("p")
					.attribute("class", "field-description")
					.child(description),
			)
		});
		ElementNode::new("div")
			.attribute("class", "form-field-wrapper")
			.child(label)
			.child(input)
			.child(error)
			.child(description)
			.into()
	}
}

fn input_id(title: &str) -> String {
	let mut input_id = "input-".to_owned();
	let mut in_whitespace = false;
	for c in title.chars() {
		if c.is_whitespace() {
			if !in_whitespace {
				input_id.push('-');
			}
			in_whitespace = true;
		} else {
			for c in c.to_lowercase() {
				input_id.push(c);
			}
			in_whitespace = false;
		}
	}
	input_id
}

#[cfg(target_arch = "wasm32")]
pub fn text_field_on_change(id: String, on_change: Box<dyn Fn(String)>) {
	use wasm_bindgen::prelude::*;
	use wasm_bindgen::JsCast;
	let document = web_sys::window().unwrap().document().unwrap();
	let input_element = document.get_element_by_id(&id).unwrap();
	let callback_fn = Closure::<dyn Fn(_)>::wrap(Box::new(move |event: web_sys::Event| {
		if let Some(event) = event.current_target() {
			if let Some(input_element) = event.dyn_ref::<web_sys::HtmlInputElement>() {
				on_change(input_element.value());
			}
		}
	}));
	input_element
		.add_event_listener_with_callback("input", callback_fn.as_ref().unchecked_ref())
		.unwrap();
	callback_fn.forget();
}

#[test]
fn test_input_id() {
	assert_eq!(input_id("Email"), "input-email");
	assert_eq!(input_id("Email Address"), "input-email-address");
	assert_eq!(input_id("First  Name"), "input-first-name");
}

#[test]
fn test_render_required() {
	let html = TextField {
		required: Some(true),
		title: "Email".to_owned(),
		value: "".to_owned(),
		..Default::default()
	}
	.render()
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<div class="form-field-wrapper"><label class="field-label" for="input-email">Email<span class="field-required-marker">*</span></label><input class="form-text-field" type="text" id="input-email" name="Email" value="" required aria-label="Email" aria-describedby="" /></div>"###);
}

#[test]
fn test_render_error() {
	let html = TextField {
		error_message: Some("Invalid address".to_owned()),
		title: "Email".to_owned(),
		value: "hello".to_owned(),
		..Default::default()
	}
	.render()
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<div class="form-field-wrapper"><label class="field-label" for="input-email">Email</label><input class="form-text-field form-text-field-error" type="text" id="input-email" name="Email" value="hello" aria-label="Email" aria-describedby="error-Email Invalid address" /><div class="field-error" id="error-Email" role="alert">Invalid address</div></div>"###);
}

#[test]
fn test_render_description() {
	let html = TextField {
		description: Some("We will never share it.".to_owned()),
		title: "Email".to_owned(),
		value: "".to_owned(),
		..Default::default()
	}
	.render()
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<div class="form-field-wrapper"><label class="field-label" for="input-email">Email</label><input class="form-text-field" type="text" id="input-email" name="Email" value="" aria-label="Email" aria-describedby="description-Email" /><p class="field-description">We will never share it.</p></div>"###);
}

#[test]
fn test_render_disabled() {
	let html = TextField {
		disabled: Some(true),
		title: "Email".to_owned(),
		value: "x".to_owned(),
		..Default::default()
	}
	.render()
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<div class="form-field-wrapper"><label class="field-label" for="input-email">Email</label><input class="form-text-field form-text-field-disabled" type="text" id="input-email" name="Email" value="x" disabled aria-label="Email" aria-describedby="" /></div>"###);
}

#[test]
fn test_render_aria_overrides() {
	let html = TextField {
		aria_described_by: Some("email-hint".to_owned()),
		aria_label: Some("Electronic mail".to_owned()),
		aria_labelled_by: Some("email-heading".to_owned()),
		error_message: Some("Bad".to_owned()),
		title: "Email".to_owned(),
		value: "".to_owned(),
		..Default::default()
	}
	.render()
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<div class="form-field-wrapper"><label class="field-label" for="input-email">Email</label><input class="form-text-field form-text-field-error" type="text" id="input-email" name="Email" value="" aria-label="Electronic mail" aria-labelledby="email-heading" aria-describedby="email-hint Bad" /><div class="field-error" id="error-Email" role="alert">Bad</div></div>"###);
}

#[test]
fn test_on_change() {
	use markup::Event;
	use std::cell::RefCell;
	use std::rc::Rc;
	let received = Rc::new(RefCell::new(Vec::new()));
	let received_for_listener = received.clone();
	let tree = TextField {
		on_change: Some(EventListener::new(move |event| {
			received_for_listener.borrow_mut().push(event.value.clone())
		})),
		title: "Email".to_owned(),
		value: "".to_owned(),
		..Default::default()
	}
	.render();
	assert!(tree.dispatch("input-email", &Event::new("input", "a")));
	assert!(tree.dispatch("input-email", &Event::new("input", "ab")));
	assert_eq!(*received.borrow(), vec!["a".to_owned(), "ab".to_owned()]);
}

#[test]
fn test_on_change_disabled() {
	use markup::Event;
	use std::cell::RefCell;
	use std::rc::Rc;
	let received = Rc::new(RefCell::new(Vec::<String>::new()));
	let received_for_listener = received.clone();
	let tree = TextField {
		disabled: Some(true),
		on_change: Some(EventListener::new(move |event| {
			received_for_listener.borrow_mut().push(event.value.clone())
		})),
		title: "Email".to_owned(),
		value: "".to_owned(),
		..Default::default()
	}
	.render();
	assert!(!tree.dispatch("input-email", &Event::new("input", "a")));
	assert!(received.borrow().is_empty());
}
