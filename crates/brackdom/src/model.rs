//! Element tree data model

use indexmap::IndexMap;

/// Attribute mapping of an element
///
/// Keys are lower-cased. Equality ignores insertion order.
pub type Attributes = IndexMap<String, String>;

/// Tag name, direct text and attributes of one markup element
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Element {
    tag: String,
    content: String,
    attributes: Attributes,
}

impl Element {
    pub fn new(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            content: content.into(),
            attributes: Attributes::new(),
        }
    }

    /// Replace the attributes, lower-casing every key
    pub fn with_attributes<K, V>(mut self, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        self.attributes = attributes
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
            .collect();
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Trimmed text preceding the first child tag
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Look up an attribute, ignoring the case of `key`
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .get(key)
            .or_else(|| self.attributes.get(&key.to_lowercase()))
            .map(String::as_str)
    }

    pub(crate) fn from_parts(tag: String, content: String, attributes: Attributes) -> Self {
        Self {
            tag,
            content,
            attributes,
        }
    }
}

/// Parsed element with its position and children
///
/// `end_offset` is the character index, in the sanitized input, of the
/// character right after the `]` of this node's closing tag. For
/// `[h][p][/p][/h]` the `h` node ends at 14 and the `p` node at 10.
///
/// `Clone`, `PartialEq` and `Drop` walk the tree with an explicit stack, so
/// they work at any depth. Serialization stops with an error past
/// [`MAX_SERIALIZE_DEPTH`] levels, and `Debug` output recurses.
#[derive(Debug)]
pub struct Node {
    element: Element,
    end_offset: usize,
    children: Vec<Node>,
}

impl Node {
    pub fn new(element: Element, end_offset: usize, children: Vec<Self>) -> Self {
        Self {
            element,
            end_offset,
            children,
        }
    }

    /// Childless node
    pub fn leaf(element: Element, end_offset: usize) -> Self {
        Self::new(element, end_offset, Vec::new())
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn tag(&self) -> &str {
        self.element.tag()
    }

    pub fn content(&self) -> &str {
        self.element.content()
    }

    pub fn attributes(&self) -> &Attributes {
        self.element.attributes()
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.element.attribute(key)
    }

    pub fn end_offset(&self) -> usize {
        self.end_offset
    }

    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Pre-order walk over this node and all of its descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Split into element, end offset and children
    pub fn into_parts(mut self) -> (Element, usize, Vec<Self>) {
        let element = std::mem::take(&mut self.element);
        let children = std::mem::take(&mut self.children);
        (element, self.end_offset, children)
    }
}

/// Deepest tree `Serialize` writes before failing
pub const MAX_SERIALIZE_DEPTH: u16 = crate::parser::DEFAULT_MAX_DEPTH;

impl Clone for Node {
    fn clone(&self) -> Self {
        // Each parent waits on the stack with the children cloned so far.
        let mut parents: Vec<(&Self, Vec<Self>)> = Vec::new();
        let mut source = self;
        let mut cloned = Vec::with_capacity(self.children.len());

        loop {
            if let Some(child) = source.children.get(cloned.len()) {
                let siblings =
                    std::mem::replace(&mut cloned, Vec::with_capacity(child.children.len()));
                parents.push((source, siblings));
                source = child;
                continue;
            }

            let node = Self::new(
                source.element.clone(),
                source.end_offset,
                std::mem::take(&mut cloned),
            );
            match parents.pop() {
                Some((parent, mut siblings)) => {
                    siblings.push(node);
                    source = parent;
                    cloned = siblings;
                }
                None => return node,
            }
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.end_offset != b.end_offset
                || a.children.len() != b.children.len()
                || a.element != b.element
            {
                return false;
            }
            pending.extend(a.children.iter().zip(&b.children));
        }
        true
    }
}

impl Eq for Node {}

// Deep trees would overflow the stack with the derived recursive drop.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Iterator returned by [`Node::descendants`]
#[derive(Clone, Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(feature = "serde")]
mod serialize {
    use serde::ser::{Error as _, SerializeStruct};
    use serde::{Serialize, Serializer};

    use super::{Node, MAX_SERIALIZE_DEPTH};

    impl Serialize for Node {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            Nested {
                node: self,
                depth: 1,
            }
            .serialize(serializer)
        }
    }

    /// Node paired with its depth below the node being serialized
    struct Nested<'a> {
        node: &'a Node,
        depth: usize,
    }

    impl Serialize for Nested<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if self.depth > usize::from(MAX_SERIALIZE_DEPTH) {
                return Err(S::Error::custom(format_args!(
                    "tree deeper than {MAX_SERIALIZE_DEPTH} levels cannot be serialized"
                )));
            }

            let mut state = serializer.serialize_struct("Node", 3)?;
            state.serialize_field("element", &self.node.element)?;
            state.serialize_field("end_offset", &self.node.end_offset)?;
            state.serialize_field(
                "children",
                &Children {
                    nodes: &self.node.children,
                    depth: self.depth + 1,
                },
            )?;
            state.end()
        }
    }

    struct Children<'a> {
        nodes: &'a [Node],
        depth: usize,
    }

    impl Serialize for Children<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.nodes.iter().map(|node| Nested {
                node,
                depth: self.depth,
            }))
        }
    }
}
