use markup::{ElementNode, Event, EventListener, FragmentNode, Node, RawTextNode};

#[test]
fn test_render_element() {
	let html = Node::from(
		ElementNode::new("div")
			.attribute("class", "greeting")
			.child("Hello World"),
	)
	.render_to_string();
	assert_eq!(html, r#"<div class="greeting">Hello World</div>"#);
}

#[test]
fn test_render_void_element() {
	let html = Node::from(
		ElementNode::void("input")
			.attribute("type", "text")
			.attribute("value", "hi".to_owned()),
	)
	.render_to_string();
	assert_eq!(html, r#"<input type="text" value="hi" />"#);
}

#[test]
fn test_render_bool_attributes() {
	let html = Node::from(
		ElementNode::void("input")
			.attribute("disabled", true)
			.attribute("required", false)
			.attribute("readonly", Option::<bool>::None),
	)
	.render_to_string();
	assert_eq!(html, "<input disabled />");
}

#[test]
fn test_render_optional_string_attributes() {
	let html = Node::from(
		ElementNode::new("a")
			.attribute("href", Some("/".to_owned()))
			.attribute("title", Option::<String>::None),
	)
	.render_to_string();
	assert_eq!(html, r#"<a href="/"></a>"#);
}

#[test]
fn test_escape_text() {
	let html = Node::from("<b> & \"quoted\"".to_owned()).render_to_string();
	assert_eq!(html, "&lt;b&gt; &amp; &quot;quoted&quot;");
}

#[test]
fn test_escape_attribute_value() {
	let html = Node::from(
		ElementNode::void("input").attribute("value", "say \"hi\" & <run>".to_owned()),
	)
	.render_to_string();
	assert_eq!(
		html,
		r#"<input value="say &quot;hi&quot; &amp; &lt;run&gt;" />"#,
	);
}

#[test]
fn test_render_raw_text() {
	let html = Node::from(RawTextNode("<em>verbatim</em>".into())).render_to_string();
	assert_eq!(html, "<em>verbatim</em>");
}

#[test]
fn test_render_fragment_and_optional_children() {
	let html = Node::from(FragmentNode {
		children: vec![
			"a".into(),
			Node::from(Option::<String>::None),
			Node::from(Some("b".to_owned())),
		],
	})
	.render_to_string();
	assert_eq!(html, "ab");
}

#[test]
fn test_element_by_id() {
	let tree = Node::from(
		ElementNode::new("div").attribute("id", "outer").child(
			ElementNode::new("span")
				.attribute("id", "inner")
				.child("text"),
		),
	);
	assert_eq!(tree.element_by_id("inner").map(|e| e.name), Some("span"));
	assert_eq!(tree.element_by_id("outer").map(|e| e.name), Some("div"));
	assert!(tree.element_by_id("missing").is_none());
}

#[test]
fn test_dispatch_invokes_matching_listeners() {
	use std::cell::RefCell;
	use std::rc::Rc;
	let received = Rc::new(RefCell::new(Vec::new()));
	let received_for_listener = received.clone();
	let tree = Node::from(
		ElementNode::void("input").attribute("id", "field").listener(
			"input",
			EventListener::new(move |event| {
				received_for_listener.borrow_mut().push(event.value.clone())
			}),
		),
	);
	assert!(tree.dispatch("field", &Event::new("input", "x")));
	assert_eq!(*received.borrow(), vec!["x".to_owned()]);
	// An event of a different name is delivered but matches no listener.
	assert!(tree.dispatch("field", &Event::new("change", "y")));
	assert_eq!(*received.borrow(), vec!["x".to_owned()]);
	assert!(!tree.dispatch("missing", &Event::new("input", "z")));
}

#[test]
fn test_dispatch_skips_disabled_elements() {
	use std::cell::RefCell;
	use std::rc::Rc;
	let received = Rc::new(RefCell::new(Vec::<String>::new()));
	let received_for_listener = received.clone();
	let tree = Node::from(
		ElementNode::void("input")
			.attribute("id", "field")
			.attribute("disabled", true)
			.listener(
				"input",
				EventListener::new(move |event| {
					received_for_listener.borrow_mut().push(event.value.clone())
				}),
			),
	);
	assert!(!tree.dispatch("field", &Event::new("input", "x")));
	assert!(received.borrow().is_empty());
}
