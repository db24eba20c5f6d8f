//! Property-based tests for the markup parser
//!
//! These tests use proptest to verify:
//! 1. Generated documents parse into exactly the tree they were built from
//! 2. Arbitrary input never panics and every successful parse keeps the
//!    offset invariants

use brackdom::{parse, Element, Input, Node};
use proptest::prelude::*;

/// Document shape used to generate markup
#[derive(Clone, Debug)]
struct Shape {
    tag: String,
    attrs: Vec<(String, String)>,
    content: String,
    /// Text written after this node inside its parent, dropped by the parser
    tail: String,
    children: Vec<Shape>,
}

/// Write `shape` as markup and build the node the parser should produce
fn render(shape: &Shape, out: &mut String) -> Node {
    out.push('[');
    out.push_str(&shape.tag);
    for (key, value) in &shape.attrs {
        out.push_str(&format!(" {key}=\"{value}\""));
    }
    out.push(']');
    out.push_str(&shape.content);

    let mut children = Vec::with_capacity(shape.children.len());
    for child in &shape.children {
        children.push(render(child, out));
        out.push_str(&child.tail);
    }

    out.push_str(&format!("[/{}]", shape.tag));
    let element = Element::new(shape.tag.as_str(), shape.content.trim())
        .with_attributes(shape.attrs.iter().map(|(k, v)| (k, v.as_str())));
    Node::new(element, out.chars().count(), children)
}

fn arb_name() -> impl Strategy<Value = String> {
    "[\\p{L}0-9_-]{1,8}"
}

fn arb_text() -> impl Strategy<Value = String> {
    "[^\\[]{0,12}"
}

fn arb_attrs() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-zA-Z0-9_-]{1,6}", "[^\"\\]]{0,8}"), 0..4)
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    let leaf = (arb_name(), arb_attrs(), arb_text(), arb_text()).prop_map(
        |(tag, attrs, content, tail)| Shape {
            tag,
            attrs,
            content,
            tail,
            children: Vec::new(),
        },
    );

    leaf.prop_recursive(5, 64, 6, |inner| {
        (
            arb_name(),
            arb_attrs(),
            arb_text(),
            arb_text(),
            prop::collection::vec(inner, 0..6),
        )
            .prop_map(|(tag, attrs, content, tail, children)| Shape {
                tag,
                attrs,
                content,
                tail,
                children,
            })
    })
}

fn check_invariants(node: &Node, sanitized: &[char]) -> Result<(), TestCaseError> {
    let end = node.end_offset();
    prop_assert!(end <= sanitized.len());

    let closing: Vec<char> = format!("[/{}]", node.tag()).chars().collect();
    prop_assert!(end >= closing.len());
    prop_assert_eq!(sanitized.get(end - closing.len()..end), Some(closing.as_slice()));

    let mut previous_end = None;
    for child in node.children() {
        prop_assert!(child.end_offset() < end);
        if let Some(previous) = previous_end {
            prop_assert!(child.end_offset() > previous);
        }
        previous_end = Some(child.end_offset());
        check_invariants(child, sanitized)?;
    }
    Ok(())
}

proptest! {
    /// A rendered document parses back into the tree it was rendered from
    #[test]
    fn rendered_documents_parse(
        roots in prop::collection::vec(arb_shape(), 0..4),
        padding in "[ \t\n]{0,3}",
    ) {
        let mut markup = String::new();
        let mut expected = Vec::new();
        for (i, root) in roots.iter().enumerate() {
            if i > 0 {
                markup.push('\n');
            }
            expected.push(render(root, &mut markup));
        }

        let input = format!("{padding}{markup}{padding}");
        let parsed = parse(&input);
        prop_assert_eq!(parsed, Ok(expected));
    }

    /// Bracket-heavy noise never panics, and successes keep the invariants
    #[test]
    fn arbitrary_input_keeps_invariants(input in "[\\[\\]/ab =\"'\n]{0,48}") {
        if let Ok(nodes) = parse(&input) {
            let sanitized = Input::new(&input);
            let chars: Vec<char> = sanitized.as_str().chars().collect();
            prop_assert_eq!(chars.len(), sanitized.char_len());
            let mut previous_end = 0;
            for node in &nodes {
                prop_assert!(node.end_offset() > previous_end);
                previous_end = node.end_offset();
                check_invariants(node, &chars)?;
            }
        }
    }

    /// Any string at all is either a forest or an error
    #[test]
    fn any_string_never_panics(input in "\\PC{0,64}") {
        let _result = parse(&input);
    }
}
