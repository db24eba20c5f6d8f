//! Indented outline of a parsed forest

use brackdom::Node;

const INDENT: &str = "    ";

/// Render one line per node, children indented under their parent
///
/// A line holds the tag, its attributes, the quoted content when present and
/// the node's end offset, e.g. `p class="lead" "Hello" (end 27)`.
pub fn render(nodes: &[Node]) -> String {
    let mut out = String::new();
    let mut pending: Vec<(usize, &Node)> = nodes.iter().rev().map(|node| (0, node)).collect();

    while let Some((depth, node)) = pending.pop() {
        out.push_str(&INDENT.repeat(depth));
        out.push_str(node.tag());
        for (key, value) in node.attributes() {
            out.push_str(&format!(" {key}={value:?}"));
        }
        if !node.content().is_empty() {
            out.push_str(&format!(" {:?}", node.content()));
        }
        out.push_str(&format!(" (end {})\n", node.end_offset()));

        pending.extend(node.children().iter().rev().map(|child| (depth + 1, child)));
    }

    out
}
