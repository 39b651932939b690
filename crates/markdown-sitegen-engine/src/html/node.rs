use crate::error::RenderError;

use super::attributes::Attributes;

/// A node that holds text and no children.
///
/// Fields are optional so a malformed node is representable; serialization
/// rejects it with [`RenderError::MissingValue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    /// `None` renders the value as raw text.
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Attributes,
}

impl LeafNode {
    /// A tag-less leaf: serializes to `value` exactly.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    fn write_html(&self, out: &mut String) -> Result<(), RenderError> {
        let value = self.value.as_deref().ok_or(RenderError::MissingValue)?;
        match &self.tag {
            None => out.push_str(value),
            Some(tag) => {
                open_tag(out, tag, &self.attributes);
                out.push_str(value);
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

/// A node that wraps an ordered list of children in a tag.
///
/// An empty child list is valid and renders as an empty element; `None`
/// children is a structural error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Option<Vec<HtmlNode>>,
    pub attributes: Attributes,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children: Some(children),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    fn write_html(&self, out: &mut String) -> Result<(), RenderError> {
        let tag = self.tag.as_deref().ok_or(RenderError::MissingTag)?;
        let children = self.children.as_ref().ok_or(RenderError::MissingChildren)?;

        open_tag(out, tag, &self.attributes);
        for child in children {
            child.write_html(out)?;
        }
        close_tag(out, tag);
        Ok(())
    }
}

/// A renderable node of the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Serializes this node and its descendants.
    ///
    /// Children are concatenated with no separator. Fails on the first
    /// structurally invalid node encountered in document order.
    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    pub fn write_html(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.write_html(out),
            HtmlNode::Parent(parent) => parent.write_html(out),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    /// Children of a parent node; leaves have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Parent(ParentNode {
                children: Some(children),
                ..
            }) => children,
            _ => &[],
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    attributes.write_html(out);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
