//! Relation selection and dispatch.
//!
//! Each relation has its own aggregator, and each aggregator is a pure
//! function of the corpus and its namespaces. A run owns the map it returns.

pub mod attributes;
pub mod pairs;

use std::fmt;
use std::str::FromStr;

use crate::corpus::Corpus;
use crate::error::Result;
use crate::exporter;
use crate::namespace::Namespaces;

pub use attributes::{node_attributes, AttributeMap};
pub use pairs::{bipartite_edges, hashtag_edges, mention_edges, pairwise, EdgeMap};

/// Which graph or table to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Hashtag co-occurrence edges
    #[default]
    Hashtags,
    /// User co-occurrence edges (mentions plus author)
    Mentions,
    /// User-to-hashtag edges
    Bipartite,
    /// Per-node attribute table
    Attributes,
}

impl Relation {
    pub const ALL: [Relation; 4] = [
        Relation::Hashtags,
        Relation::Mentions,
        Relation::Bipartite,
        Relation::Attributes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hashtags => "hashtags",
            Self::Mentions => "mentions",
            Self::Bipartite => "bipartite",
            Self::Attributes => "attributes",
        }
    }
}

impl FromStr for Relation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hashtags" => Ok(Self::Hashtags),
            "mentions" => Ok(Self::Mentions),
            "bipartite" => Ok(Self::Bipartite),
            "attributes" => Ok(Self::Attributes),
            _ => Err(format!("Unknown relation type: '{}'", s)),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationTable {
    Edges(EdgeMap),
    Attributes(AttributeMap),
}

impl RelationTable {
    /// Number of edges or attribute records.
    pub fn len(&self) -> usize {
        match self {
            Self::Edges(edges) => edges.len(),
            Self::Attributes(nodes) => nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Noun for the table's rows, for user-facing messages.
    pub fn entity_name(&self) -> &'static str {
        match self {
            Self::Edges(_) => "edges",
            Self::Attributes(_) => "nodes",
        }
    }

    /// Render as a tab-separated table.
    pub fn render(&self) -> Result<String> {
        match self {
            Self::Edges(edges) => exporter::render(edges),
            Self::Attributes(nodes) => exporter::render(nodes),
        }
    }
}

/// Run the aggregator for one relation.
pub fn build(
    relation: Relation,
    corpus: &Corpus,
    namespaces: &Namespaces,
) -> Result<RelationTable> {
    let table = match relation {
        Relation::Hashtags => RelationTable::Edges(hashtag_edges(corpus, namespaces)?),
        Relation::Mentions => RelationTable::Edges(mention_edges(corpus, namespaces)?),
        Relation::Bipartite => RelationTable::Edges(bipartite_edges(corpus, namespaces)?),
        Relation::Attributes => RelationTable::Attributes(node_attributes(corpus, namespaces)?),
    };
    Ok(table)
}

/// All four relations of one corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relations {
    pub hashtags: EdgeMap,
    pub mentions: EdgeMap,
    pub bipartite: EdgeMap,
    pub attributes: AttributeMap,
}

/// Build every relation in parallel.
///
/// The aggregators share only read-only inputs and each owns its output map,
/// so no synchronization is needed.
pub fn build_all(corpus: &Corpus, namespaces: &Namespaces) -> Result<Relations> {
    let ((hashtags, mentions), (bipartite, attributes)) = rayon::join(
        || {
            rayon::join(
                || hashtag_edges(corpus, namespaces),
                || mention_edges(corpus, namespaces),
            )
        },
        || {
            rayon::join(
                || bipartite_edges(corpus, namespaces),
                || node_attributes(corpus, namespaces),
            )
        },
    );

    Ok(Relations {
        hashtags: hashtags?,
        mentions: mentions?,
        bipartite: bipartite?,
        attributes: attributes?,
    })
}
