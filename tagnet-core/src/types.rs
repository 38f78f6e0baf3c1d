//! Data models for posts, graph keys and aggregated values.
//!
//! Posts are the input unit. Edge and attribute maps are keyed by the
//! structural [`EdgeKey`] / [`NodeKey`] types and hold [`EdgeStats`] /
//! [`NodeAttributes`] values, whose serialized field order is the column
//! order of the exported table.

use serde::{Deserialize, Serialize};

/// A single social-media post as delivered by the corpus source.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    #[serde(default)]
    pub text: String,
    /// Author identity.
    pub user: String,
    /// Creation timestamp, kept as delivered.
    #[serde(default)]
    pub date: String,
    pub fav: u64,
    pub rt: u64,
    #[serde(default)]
    pub source: String,
    /// Hashtags in post order, case preserved.
    pub hashtags: Vec<String>,
    /// Mentioned users in post order, case preserved.
    pub mentions: Vec<String>,
}

impl Post {
    /// Fields that must be present on every post record.
    pub const REQUIRED_FIELDS: &'static [&'static str] =
        &["user", "fav", "rt", "hashtags", "mentions"];

    /// Lowercased hashtags, in post order.
    pub fn hashtag_labels(&self) -> Vec<String> {
        self.hashtags.iter().map(|h| h.to_lowercase()).collect()
    }

    /// Lowercased mentions in post order, followed by the lowercased author.
    pub fn identity_labels(&self) -> Vec<String> {
        self.mentions
            .iter()
            .chain(std::iter::once(&self.user))
            .map(|m| m.to_lowercase())
            .collect()
    }

    /// Lowercased mentions only, in post order.
    pub fn mention_labels(&self) -> Vec<String> {
        self.mentions.iter().map(|m| m.to_lowercase()).collect()
    }

    /// Lowercased author.
    pub fn author_label(&self) -> String {
        self.user.to_lowercase()
    }
}

/// Key of an edge between two rendered labels.
///
/// Ordering is structural (`source`, then `target`), which is also the row
/// order of an exported edge table.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey {
    pub source: String,
    pub target: String,
}

impl EdgeKey {
    /// Canonical key for an undirected edge: the smaller label comes first.
    pub fn undirected(a: String, b: String) -> Self {
        if b < a {
            Self {
                source: b,
                target: a,
            }
        } else {
            Self {
                source: a,
                target: b,
            }
        }
    }

    /// Key with a fixed orientation (bipartite edges: user side first).
    pub fn directed(source: String, target: String) -> Self {
        Self { source, target }
    }
}

/// Key of a node attribute record: a single rendered label.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeKey(pub String);

impl NodeKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Aggregated weight of one edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeStats {
    /// Number of contributing posts.
    pub n: u64,
    pub fav: u64,
    pub rt: u64,
    /// Always `n * (fav + rt)`.
    pub score: u64,
}

impl EdgeStats {
    /// Stats for an edge seen for the first time, or `None` if `fav + rt`
    /// does not fit a `u64`.
    pub fn first(fav: u64, rt: u64) -> Option<Self> {
        let mut stats = Self::default();
        stats.accumulate(fav, rt)?;
        Some(stats)
    }

    /// Fold one more contributing post into the edge.
    ///
    /// Returns `None` and leaves the stats untouched if any counter or the
    /// score would overflow.
    pub fn accumulate(&mut self, fav: u64, rt: u64) -> Option<()> {
        let n = self.n.checked_add(1)?;
        let fav = self.fav.checked_add(fav)?;
        let rt = self.rt.checked_add(rt)?;
        let score = n.checked_mul(fav.checked_add(rt)?)?;
        *self = Self { n, fav, rt, score };
        Some(())
    }
}

/// Role a node plays in the attribute table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    User,
    Hashtag,
}

/// Per-node statistics for the attribute table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAttributes {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Times the label appeared as a mention (or as a hashtag, for hashtag nodes).
    pub mentions: u64,
    /// Posts authored by the label.
    pub tweets: u64,
    pub fav: u64,
    pub rt: u64,
    /// Always `mentions * (fav + rt)`.
    pub score: u64,
}

impl NodeAttributes {
    /// Empty record with all counters at zero.
    pub fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            mentions: 0,
            tweets: 0,
            fav: 0,
            rt: 0,
            score: 0,
        }
    }

    /// Record for a label seen for the first time in a mention slot, or
    /// `None` if its engagement overflows.
    pub fn first_mention(node_type: NodeType, fav: u64, rt: u64) -> Option<Self> {
        let mut attrs = Self::new(node_type);
        attrs.record_mention(fav, rt)?;
        Some(attrs)
    }

    /// Record for an author seen for the first time.
    pub fn first_tweet(node_type: NodeType) -> Self {
        let mut attrs = Self::new(node_type);
        attrs.record_tweet();
        attrs
    }

    /// Count one mention occurrence and its post's engagement.
    ///
    /// On overflow returns `None` and leaves the record untouched.
    pub fn record_mention(&mut self, fav: u64, rt: u64) -> Option<()> {
        let mentions = self.mentions.checked_add(1)?;
        let fav = self.fav.checked_add(fav)?;
        let rt = self.rt.checked_add(rt)?;
        self.score = mentions.checked_mul(fav.checked_add(rt)?)?;
        self.mentions = mentions;
        self.fav = fav;
        self.rt = rt;
        Some(())
    }

    /// Count one authored post. Engagement is not attributed to the author.
    pub fn record_tweet(&mut self) {
        self.tweets += 1;
    }
}
