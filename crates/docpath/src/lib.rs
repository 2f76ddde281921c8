//! Compact selector language for locating and relating nodes in XML/DOM-like trees.
//!
//! ```
//! use docpath::simple_node::{doc, elem, text};
//! use docpath::{DocNode, select_all, select_first};
//!
//! let document = doc()
//!     .child(
//!         elem("w:body")
//!             .child(elem("w:p").child(elem("w:r").child(elem("w:t").child(text("First")))))
//!             .child(
//!                 elem("w:p")
//!                     .attr("id", "p2")
//!                     .child(elem("w:ins").child(elem("w:r").child(elem("w:t").child(text("Second"))))),
//!             ),
//!     )
//!     .build();
//!
//! let direct: Vec<String> = select_all(&document, "w:p > w:r w:t")?
//!     .iter()
//!     .map(|t| t.text_content())
//!     .collect();
//! assert_eq!(direct, ["First"]);
//!
//! let p2 = select_first(&document, "#p2")?.unwrap();
//! assert_eq!(p2.attribute("id").as_deref(), Some("p2"));
//! # Ok::<(), docpath::Error>(())
//! ```
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod query;
pub mod simple_node;

pub use engine::{Direction, all_until, nearest, resolve_all, resolve_first};
pub use error::{Error, GrammarError};
pub use model::{DocNode, NodeKind};
pub use parser::ast::{AttributeFilter, NodeNames, Path, Selector};
pub use parser::parse;
pub use query::{all_next, all_previous, next, previous, select_all, select_first};
pub use simple_node::{SimpleNode, SimpleNodeBuilder};
