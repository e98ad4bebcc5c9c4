//! Markup fragments written into the rendering surface.
//!
//! Overlay slots are filled with structured [`Node`] trees so that callers can
//! inspect what was rendered (tile counts, credit order) without parsing HTML.
//! Translation fragments are trusted and stored as [`Node::Raw`].

use serde::{
    Deserialize,
    Serialize,
};

/// A node of a markup fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        classes: Vec<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<Node>,
    },
    /// Plain text, escaped when serialized to HTML.
    Text { text: String },
    /// Trusted HTML inserted verbatim.
    Raw { html: String },
}

impl Node {
    #[must_use]
    pub fn element<I, S>(tag: &str, classes: I, children: Vec<Self>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Element {
            tag: tag.to_string(),
            classes: classes
                .into_iter()
                .map(Into::<String>::into)
                .filter(|c| !c.is_empty())
                .collect(),
            children,
        }
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    #[must_use]
    pub fn raw(html: impl Into<String>) -> Self {
        Self::Raw { html: html.into() }
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        matches!(self, Self::Element { classes, .. } if classes.iter().any(|c| c == class))
    }

    /// Collects every element (this node included) carrying `class`, in document order.
    #[must_use]
    pub fn find_by_class<'a>(&'a self, class: &str) -> Vec<&'a Self> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Self>) {
        if self.has_class(class) {
            found.push(self);
        }
        if let Self::Element { children, .. } = self {
            for child in children {
                child.collect_by_class(class, found);
            }
        }
    }

    /// Concatenated text of this node and its descendants. Raw fragments contribute their source.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Element { children, .. } => children.iter().map(Self::text_content).collect(),
            Self::Text { text } => text.clone(),
            Self::Raw { html } => html.clone(),
        }
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Element { tag, classes, children } => {
                out.push('<');
                out.push_str(tag);
                if !classes.is_empty() {
                    out.push_str(" class=\"");
                    out.push_str(&escape_html(&classes.join(" ")));
                    out.push('"');
                }
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            Self::Text { text } => out.push_str(&escape_html(text)),
            Self::Raw { html } => out.push_str(html),
        }
    }
}

/// Finds every node carrying `class` in a list of sibling fragments.
#[must_use]
pub fn find_by_class<'a>(nodes: &'a [Node], class: &str) -> Vec<&'a Node> {
    nodes.iter().flat_map(|node| node.find_by_class(class)).collect()
}

/// Serializes a list of sibling fragments to HTML.
#[must_use]
pub fn to_html(nodes: &[Node]) -> String {
    nodes.iter().map(Node::to_html).collect()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    fn tile(glyph: &str, size: &str) -> Node {
        Node::element("div", ["gallery-item", size], vec![Node::text(glyph)])
    }

    #[googletest::test]
    fn test_to_html_escapes_text_but_not_raw() {
        let node = Node::element(
            "p",
            Vec::<String>::new(),
            vec![Node::text("Fish & <Chips>"), Node::raw("<em>Move</em>")],
        );

        expect_that!(node.to_html(), eq("<p>Fish &amp; &lt;Chips&gt;<em>Move</em></p>"));
    }

    #[googletest::test]
    fn test_element_drops_empty_classes() {
        let node = tile("◇", "");

        expect_that!(node.to_html(), eq("<div class=\"gallery-item\">◇</div>"));
    }

    #[googletest::test]
    fn test_find_by_class_preserves_document_order() {
        let grid = Node::element(
            "div",
            ["gallery-grid"],
            vec![tile("◆", "gallery-item-wide"), tile("◇", ""), tile("□", "gallery-item-tall")],
        );

        let tiles = grid.find_by_class("gallery-item");

        expect_that!(tiles, len(eq(3)));
        expect_that!(
            tiles.iter().map(|t| t.text_content()).collect::<Vec<_>>(),
            elements_are![eq("◆"), eq("◇"), eq("□")]
        );
        expect_that!(grid.find_by_class("gallery-item-tall"), len(eq(1)));
    }

    #[googletest::test]
    fn test_to_html_of_sibling_fragments() {
        let nodes = vec![
            Node::element("h3", Vec::<String>::new(), vec![Node::text("About the Project")]),
            Node::element("p", Vec::<String>::new(), vec![Node::text("Body")]),
        ];

        expect_that!(to_html(&nodes), eq("<h3>About the Project</h3><p>Body</p>"));
        expect_that!(find_by_class(&nodes, "missing"), is_empty());
    }
}
