//! Recursive serializer.

use std::fmt;

use crate::node::Node;

/// Written between consecutive children of an element.
pub const SEPARATOR: &str = "\n";

/// Serialize a tree into markup.
///
/// Text is returned as is. An element becomes `<name>`, its rendered
/// children joined by [`SEPARATOR`], then `</name>`. An element without
/// children renders as an empty tag pair.
#[must_use]
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    node.render_into(&mut out);
    out
}

impl Node {
    /// Serialize into an existing buffer.
    pub fn render_into(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element { name, children } => {
                out.push('<');
                out.push_str(name);
                out.push('>');
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        out.push_str(SEPARATOR);
                    }
                    child.render_into(out);
                }
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_text_unchanged() {
        assert_eq!(render(&Node::trusted("a &amp; b")), "a &amp; b");
    }

    #[test]
    fn test_render_empty_element() {
        assert_eq!(
            render(&Node::element("table", Vec::new())),
            "<table></table>"
        );
    }

    #[test]
    fn test_render_single_child_has_no_separator() {
        let node = Node::wrap("th", Node::trusted("Title"));

        assert_eq!(render(&node), "<th>Title</th>");
    }

    #[test]
    fn test_render_children_separated() {
        let node = Node::element(
            "tr",
            vec![
                Node::wrap("th", Node::trusted("URL")),
                Node::wrap("td", Node::escaped("http://example.org")),
            ],
        );

        assert_eq!(
            render(&node),
            "<tr><th>URL</th>\n<td>http://example.org</td></tr>"
        );
    }

    #[test]
    fn test_render_nested() {
        let node = Node::element(
            "html",
            vec![
                Node::element("head", vec![Node::wrap("title", Node::trusted("T"))]),
                Node::element("body", Vec::new()),
            ],
        );

        assert_eq!(
            render(&node),
            "<html><head><title>T</title></head>\n<body></body></html>"
        );
    }

    #[test]
    fn test_render_arbitrary_tag_names() {
        let node = Node::wrap("custom-tag", Node::wrap("x", Node::trusted("y")));

        assert_eq!(render(&node), "<custom-tag><x>y</x></custom-tag>");
    }

    #[test]
    fn test_render_deep_tree() {
        let mut node = Node::trusted("leaf");
        for _ in 0..64 {
            node = Node::wrap("div", node);
        }

        let html = render(&node);

        assert!(html.starts_with(&"<div>".repeat(64)));
        assert!(html.ends_with(&"</div>".repeat(64)));
        assert!(html.contains(">leaf<"));
    }

    #[test]
    fn test_display_matches_render() {
        let node = Node::element("p", vec![Node::trusted("a"), Node::trusted("b")]);

        assert_eq!(node.to_string(), render(&node));
    }

    #[test]
    fn test_render_into_appends() {
        let mut out = String::from("<!DOCTYPE html>");
        Node::wrap("html", Node::trusted("x")).render_into(&mut out);

        assert_eq!(out, "<!DOCTYPE html><html>x</html>");
    }
}
