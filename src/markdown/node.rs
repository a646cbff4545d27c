//! Element tree produced by the markdown pipeline and consumed by overrides.

use maud::Render;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input"];

/// Node in the rendered document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Plain text, escaped on output.
    Text(String),
    /// Trusted markup, emitted verbatim.
    Raw(String),
}

impl Node {
    /// Concatenated text of this node and all descendants.
    ///
    /// Raw markup contributes its literal source, which mirrors how a
    /// non-text child coerces to a string.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) | Node::Raw(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// HTML element with ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`Element::set_attr`].
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Appends a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends a sequence of child nodes.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Returns the value of an attribute, if present.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets an attribute, replacing an existing value in place.
    ///
    /// New attributes are appended so output order follows insertion order.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Removes an attribute and returns its value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|(key, _)| key == name)?;
        Some(self.attrs.remove(pos).1)
    }

    /// Whitespace separated tokens of the `class` attribute.
    pub fn class_tokens(&self) -> impl Iterator<Item = &str> {
        self.attr_value("class").unwrap_or("").split_whitespace()
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }
}

impl Render for Node {
    fn render_to(&self, buffer: &mut String) {
        match self {
            Node::Text(text) => text.as_str().render_to(buffer),
            Node::Raw(markup) => buffer.push_str(markup),
            Node::Element(element) => element.render_to(buffer),
        }
    }
}

impl Render for Element {
    fn render_to(&self, buffer: &mut String) {
        buffer.push('<');
        buffer.push_str(&self.tag);
        for (name, value) in &self.attrs {
            buffer.push(' ');
            buffer.push_str(name);
            buffer.push_str("=\"");
            value.as_str().render_to(buffer);
            buffer.push('"');
        }
        buffer.push('>');

        if self.is_void() {
            return;
        }

        for child in &self.children {
            child.render_to(buffer);
        }
        buffer.push_str("</");
        buffer.push_str(&self.tag);
        buffer.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_escapes_text_and_attributes() {
        // Arrange
        let node = Node::from(
            Element::new("a")
                .attr("href", "/search?q=\"a&b\"")
                .child(Node::Text("<b>".to_string())),
        );

        // Act
        let html = node.render().into_string();

        // Assert
        assert_eq!(
            html,
            "<a href=\"/search?q=&quot;a&amp;b&quot;\">&lt;b&gt;</a>"
        );
    }

    #[test]
    fn test_render_raw_is_verbatim() {
        // Arrange
        let node = Node::from(Element::new("div").child(Node::Raw("<pre>x</pre>".to_string())));

        // Act
        let html = node.render().into_string();

        // Assert
        assert_eq!(html, "<div><pre>x</pre></div>");
    }

    #[test]
    fn test_render_void_element() {
        // Arrange
        let node = Node::from(Element::new("img").attr("src", "a.png"));

        // Act
        let html = node.render().into_string();

        // Assert
        assert_eq!(html, "<img src=\"a.png\">");
    }

    #[test]
    fn test_text_content_preserves_order() {
        // Arrange
        let element = Element::new("h2")
            .child(Node::Text("Getting ".to_string()))
            .child(Element::new("em").child(Node::Text("Started".to_string())))
            .child(Node::Text("!".to_string()));

        // Act
        let text = element.text_content();

        // Assert
        assert_eq!(text, "Getting Started!");
    }

    #[test]
    fn test_set_attr_replaces_in_place() {
        // Arrange
        let mut element = Element::new("img").attr("src", "a.png").attr("alt", "A");

        // Act
        element.set_attr("src", "b.png");

        // Assert
        assert_eq!(
            element.attrs,
            vec![
                ("src".to_string(), "b.png".to_string()),
                ("alt".to_string(), "A".to_string())
            ]
        );
    }

    #[test]
    fn test_class_tokens_without_class() {
        // Arrange
        let element = Element::new("code");

        // Act
        let tokens: Vec<&str> = element.class_tokens().collect();

        // Assert
        assert!(tokens.is_empty());
    }
}
