//! tagnet core - co-occurrence graphs from social-media post corpora.
//!
//! This crate turns a corpus of posts into weighted edge tables and per-node
//! attribute tables, ready for graph-visualization tools such as Cytoscape.
//!
//! # Features
//!
//! - **Four relations**: hashtag–hashtag, user–user, user–hashtag (bipartite),
//!   and a node attribute table
//! - **Role disambiguation**: a label used both as a hashtag and as a username
//!   becomes two distinct nodes (`rust (hashtag)`, `rust (user)`)
//! - **Deterministic output**: ordered maps keyed by structural key types
//! - **Tab-separated export** with a header derived from the value schema
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use tagnet_core::{aggregate, Corpus, Namespaces, Relation};
//!
//! let corpus = Corpus::load(Path::new("tweets.json"))?;
//! let namespaces = Namespaces::index(&corpus);
//! let table = aggregate::build(Relation::Hashtags, &corpus, &namespaces)?;
//! std::fs::write("tweets.net", table.render()?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aggregate;
pub mod corpus;
pub mod error;
pub mod exporter;
pub mod namespace;
pub mod types;

pub use aggregate::{AttributeMap, EdgeMap, Relation, RelationTable};
pub use corpus::Corpus;
pub use error::{GraphError, Result};
pub use exporter::ExportFormat;
pub use namespace::{Namespaces, Role};
pub use types::{EdgeKey, EdgeStats, NodeAttributes, NodeKey, NodeType, Post};
