//! Per-node attribute table.
//!
//! Classifies every rendered label as `user` or `hashtag` and tallies how
//! often it was mentioned, how many posts it authored, and the engagement of
//! the posts that mentioned it.
//!
//! Engagement flows only through mention slots (user mentions and hashtags).
//! Authoring a post counts toward `tweets` but adds no `fav`/`rt`, so a
//! prolific author who is rarely mentioned keeps a low score.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::corpus::Corpus;
use crate::error::{GraphError, Result};
use crate::namespace::{Namespaces, Role};
use crate::types::{NodeAttributes, NodeKey, NodeType};

/// Attribute records of one run, ordered by key.
pub type AttributeMap = BTreeMap<NodeKey, NodeAttributes>;

/// Build the attribute table for a corpus.
///
/// Fails with [`GraphError::EngagementOverflow`] if a node's totals leave the
/// `u64` range.
pub fn node_attributes(corpus: &Corpus, namespaces: &Namespaces) -> Result<AttributeMap> {
    let mut nodes = AttributeMap::new();

    for post in corpus.posts() {
        for mention in post.mention_labels() {
            let key = NodeKey(namespaces.render(&mention, Role::User));
            record_mention(&mut nodes, key, NodeType::User, post.fav, post.rt)?;
        }

        let author = NodeKey(namespaces.render(&post.author_label(), Role::User));
        match nodes.entry(author) {
            Entry::Vacant(slot) => {
                slot.insert(NodeAttributes::first_tweet(NodeType::User));
            }
            Entry::Occupied(mut slot) => slot.get_mut().record_tweet(),
        }

        for hashtag in post.hashtag_labels() {
            let key = NodeKey(namespaces.render(&hashtag, Role::Hashtag));
            record_mention(&mut nodes, key, NodeType::Hashtag, post.fav, post.rt)?;
        }
    }

    tracing::debug!(
        "Built {} attribute records from {} posts",
        nodes.len(),
        corpus.len()
    );
    Ok(nodes)
}

fn record_mention(
    nodes: &mut AttributeMap,
    key: NodeKey,
    node_type: NodeType,
    fav: u64,
    rt: u64,
) -> Result<()> {
    match nodes.entry(key) {
        Entry::Vacant(slot) => {
            let attrs = NodeAttributes::first_mention(node_type, fav, rt)
                .ok_or_else(|| overflow(slot.key()))?;
            slot.insert(attrs);
        }
        Entry::Occupied(mut slot) => {
            slot.get_mut()
                .record_mention(fav, rt)
                .ok_or_else(|| overflow(slot.key()))?;
        }
    }
    Ok(())
}

fn overflow(key: &NodeKey) -> GraphError {
    GraphError::EngagementOverflow {
        entity: format!("node {}", key.as_str()),
    }
}
