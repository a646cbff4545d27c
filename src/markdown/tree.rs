//! Conversion of the comrak AST into the element tree.
//!
//! The walk is bottom-up: every element's children are converted first,
//! then the element itself is offered to the override table. Override
//! output is final and is not walked again, so an override may emit the
//! very tag it replaces.

use comrak::nodes::{AstNode, ListType, NodeValue};

use super::error::RenderError;
use super::node::{Element, Node};
use super::overrides::{Overrides, RenderContext};

/// Converts a parsed document into rendered nodes.
pub(crate) struct TreeBuilder<'t, 'c> {
    overrides: &'t Overrides,
    ctx: &'t RenderContext<'c>,
}

impl<'t, 'c> TreeBuilder<'t, 'c> {
    pub(crate) fn new(overrides: &'t Overrides, ctx: &'t RenderContext<'c>) -> Self {
        Self { overrides, ctx }
    }

    /// Converts `node` and its descendants, in document order.
    pub(crate) fn build<'a>(&self, node: &'a AstNode<'a>) -> Result<Vec<Node>, RenderError> {
        let value = node.data.borrow().value.clone();

        let element = match value {
            NodeValue::Document => return self.block_children(node),
            NodeValue::FrontMatter(_) => return Ok(Vec::new()),
            NodeValue::Text(text) => return Ok(vec![Node::Text(text.to_string())]),
            NodeValue::SoftBreak => return Ok(vec![Node::Text("\n".to_string())]),
            NodeValue::HtmlBlock(block) => return Ok(vec![Node::Raw(block.literal)]),
            NodeValue::HtmlInline(html) => return Ok(vec![Node::Raw(html.to_string())]),
            NodeValue::Paragraph if in_tight_list(node) => return self.children(node),
            NodeValue::Paragraph => Element::new("p").children(self.children(node)?),
            NodeValue::BlockQuote => Element::new("blockquote").children(self.block_children(node)?),
            NodeValue::List(list) => {
                let mut element = match list.list_type {
                    ListType::Bullet => Element::new("ul"),
                    ListType::Ordered => Element::new("ol"),
                };
                if list.list_type == ListType::Ordered && list.start != 1 {
                    element.set_attr("start", list.start.to_string());
                }
                element.children(self.block_children(node)?)
            }
            NodeValue::Item(_) => Element::new("li").children(self.children(node)?),
            NodeValue::Heading(heading) => {
                Element::new(format!("h{}", heading.level)).children(self.children(node)?)
            }
            NodeValue::ThematicBreak => Element::new("hr"),
            NodeValue::LineBreak => Element::new("br"),
            NodeValue::CodeBlock(block) => {
                let mut code = Element::new("code");
                if let Some(language) = block.info.split_whitespace().next() {
                    code.set_attr("class", format!("language-{}", language));
                }
                Element::new("pre").child(code.child(Node::Text(block.literal)))
            }
            NodeValue::Code(code) => Element::new("code").child(Node::Text(code.literal)),
            NodeValue::Emph => Element::new("em").children(self.children(node)?),
            NodeValue::Strong => Element::new("strong").children(self.children(node)?),
            NodeValue::Strikethrough => Element::new("del").children(self.children(node)?),
            NodeValue::Link(link) => {
                let mut element = Element::new("a").attr("href", link.url);
                if !link.title.is_empty() {
                    element.set_attr("title", link.title);
                }
                element.children(self.children(node)?)
            }
            NodeValue::Image(link) => {
                let mut element = Element::new("img").attr("src", link.url);
                let alt = self
                    .children(node)?
                    .iter()
                    .map(Node::text_content)
                    .collect::<String>();
                if node.first_child().is_some() {
                    element.set_attr("alt", alt);
                }
                if !link.title.is_empty() {
                    element.set_attr("title", link.title);
                }
                element
            }
            NodeValue::Table(_) => self.table(node)?,
            NodeValue::TableRow(_) => Element::new("tr").children(self.children(node)?),
            NodeValue::TableCell => {
                let header = node
                    .parent()
                    .is_some_and(|row| matches!(row.data.borrow().value, NodeValue::TableRow(true)));
                Element::new(if header { "th" } else { "td" }).children(self.children(node)?)
            }
            _ => return self.children(node),
        };

        Ok(vec![self.overrides.apply(element, self.ctx)?])
    }

    fn children<'a>(&self, node: &'a AstNode<'a>) -> Result<Vec<Node>, RenderError> {
        let mut out = Vec::new();
        for child in node.children() {
            out.extend(self.build(child)?);
        }
        Ok(out)
    }

    /// Like [`Self::children`], separating block children with newlines.
    fn block_children<'a>(&self, node: &'a AstNode<'a>) -> Result<Vec<Node>, RenderError> {
        let mut out = Vec::new();
        for child in node.children() {
            let built = self.build(child)?;
            if built.is_empty() {
                continue;
            }
            out.extend(built);
            out.push(Node::Text("\n".to_string()));
        }
        Ok(out)
    }

    /// Groups header rows into `thead` and body rows into `tbody`.
    fn table<'a>(&self, node: &'a AstNode<'a>) -> Result<Element, RenderError> {
        let mut head = Element::new("thead");
        let mut body = Element::new("tbody");
        for row in node.children() {
            let is_header = matches!(row.data.borrow().value, NodeValue::TableRow(true));
            let built = self.build(row)?;
            if is_header {
                head.children.extend(built);
            } else {
                body.children.extend(built);
            }
        }

        let mut table = Element::new("table");
        if !head.children.is_empty() {
            table.children.push(head.into());
        }
        if !body.children.is_empty() {
            table.children.push(body.into());
        }
        Ok(table)
    }
}

/// True for paragraphs directly inside an item of a tight list.
fn in_tight_list<'a>(node: &'a AstNode<'a>) -> bool {
    node.parent()
        .and_then(|item| item.parent())
        .is_some_and(|list| matches!(&list.data.borrow().value, NodeValue::List(l) if l.tight))
}
