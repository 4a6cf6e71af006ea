//! Document tree.

use std::borrow::Cow;

/// A unit of the document tree.
///
/// Each element exclusively owns its children, so a tree is always acyclic
/// and is dropped as a whole once rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Safe text, inserted into output unchanged.
    Text(Cow<'static, str>),
    /// Named element with children in output order.
    Element {
        /// Tag name.
        name: Cow<'static, str>,
        /// Child nodes.
        children: Vec<Node>,
    },
}

impl Node {
    /// Create a leaf from a program literal.
    ///
    /// Only `'static` strings are accepted here, so trusted leaves cannot be
    /// built from request data by accident.
    #[must_use]
    pub const fn trusted(text: &'static str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }

    /// Create a leaf from text that has already been escaped.
    #[must_use]
    pub fn escaped(text: impl Into<String>) -> Self {
        Self::Text(Cow::Owned(text.into()))
    }

    /// Create an element with the given children.
    #[must_use]
    pub fn element(name: impl Into<Cow<'static, str>>, children: Vec<Node>) -> Self {
        Self::Element {
            name: name.into(),
            children,
        }
    }

    /// Create an element holding a single child.
    #[must_use]
    pub fn wrap(name: impl Into<Cow<'static, str>>, child: Node) -> Self {
        Self::element(name, vec![child])
    }

    /// Tag name for elements, `None` for text.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Element { name, .. } => Some(name.as_ref()),
        }
    }

    /// Children of an element. Text has none.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Text(_) => &[],
            Self::Element { children, .. } => children,
        }
    }

    /// Depth of the tree rooted at this node (a leaf has depth 1).
    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        1 + self.children().iter().map(Node::depth).max().unwrap_or(0)
    }
}
