//! Generic node tree and recursive markup serializer.
//!
//! A document is a tree of [`Node`]s: either already-safe text or a named
//! element with ordered children. [`render`] walks the tree once and emits
//! nested opening/closing tags without knowing what any tag means. All
//! tag-specific structure belongs to whoever builds the tree.
//!
//! Text leaves are written verbatim. Escaping untrusted input is the
//! builder's job and must happen before a leaf is created.
//!
//! # Example
//!
//! ```
//! use wikisum_markup::{Node, render};
//!
//! let doc = Node::element("p", vec![Node::trusted("a"), Node::trusted("b")]);
//! assert_eq!(render(&doc), "<p>a\nb</p>");
//! ```

mod node;
mod render;

pub use node::Node;
pub use render::{SEPARATOR, render};
