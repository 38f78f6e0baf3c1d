//! Co-occurrence edge aggregation.
//!
//! Hashtag and mention graphs combine each post's labels with themselves
//! (every unordered pair once). The bipartite graph crosses a post's user
//! labels with its hashtag labels. In every case an edge is weighted by the
//! number of contributing posts and their cumulative engagement.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::corpus::Corpus;
use crate::error::{GraphError, Result};
use crate::namespace::{Namespaces, Role};
use crate::types::{EdgeKey, EdgeStats, Post};

/// Edges of one relation, ordered by key.
pub type EdgeMap = BTreeMap<EdgeKey, EdgeStats>;

/// Hashtag co-occurrence edges. Labels are rendered in the hashtag role.
pub fn hashtag_edges(corpus: &Corpus, namespaces: &Namespaces) -> Result<EdgeMap> {
    let edges = pairwise(corpus, Post::hashtag_labels, |label| {
        namespaces.render(label, Role::Hashtag)
    })?;
    tracing::debug!("Built {} hashtag edges from {} posts", edges.len(), corpus.len());
    Ok(edges)
}

/// User co-occurrence edges over each post's mentions plus its author.
pub fn mention_edges(corpus: &Corpus, namespaces: &Namespaces) -> Result<EdgeMap> {
    let edges = pairwise(corpus, Post::identity_labels, |label| {
        namespaces.render(label, Role::User)
    })?;
    tracing::debug!("Built {} mention edges from {} posts", edges.len(), corpus.len());
    Ok(edges)
}

/// User-to-hashtag edges, keyed `user -> hashtag` without reordering.
pub fn bipartite_edges(corpus: &Corpus, namespaces: &Namespaces) -> Result<EdgeMap> {
    let mut edges = EdgeMap::new();

    for post in corpus.posts() {
        let users = rendered(post.identity_labels(), |l| namespaces.render(l, Role::User));
        let hashtags = rendered(post.hashtag_labels(), |l| namespaces.render(l, Role::Hashtag));

        for user in &users {
            for hashtag in &hashtags {
                let key = EdgeKey::directed(user.clone(), hashtag.clone());
                upsert(&mut edges, key, post.fav, post.rt)?;
            }
        }
    }

    tracing::debug!("Built {} bipartite edges from {} posts", edges.len(), corpus.len());
    Ok(edges)
}

/// Combine every unordered pair of distinct labels within each post.
///
/// `extract` yields a post's lowercased labels; `render` turns a label into
/// its output form. A post with fewer than two distinct labels adds nothing,
/// and a label repeated within one post counts once.
///
/// Fails with [`GraphError::EngagementOverflow`] if an edge's totals leave
/// the `u64` range.
pub fn pairwise<E, R>(corpus: &Corpus, extract: E, render: R) -> Result<EdgeMap>
where
    E: Fn(&Post) -> Vec<String>,
    R: Fn(&str) -> String,
{
    let mut edges = EdgeMap::new();

    for post in corpus.posts() {
        let labels = rendered(extract(post), &render);

        for (i, first) in labels.iter().enumerate() {
            for second in &labels[i + 1..] {
                let key = EdgeKey::undirected(first.clone(), second.clone());
                upsert(&mut edges, key, post.fav, post.rt)?;
            }
        }
    }

    Ok(edges)
}

/// Deduplicate labels (first occurrence wins) and render them.
fn rendered<R>(labels: Vec<String>, render: R) -> Vec<String>
where
    R: Fn(&str) -> String,
{
    let mut seen = Vec::with_capacity(labels.len());
    for label in labels {
        if !seen.contains(&label) {
            seen.push(label);
        }
    }
    seen.iter().map(|label| render(label)).collect()
}

fn upsert(edges: &mut EdgeMap, key: EdgeKey, fav: u64, rt: u64) -> Result<()> {
    match edges.entry(key) {
        Entry::Vacant(slot) => {
            let stats = EdgeStats::first(fav, rt).ok_or_else(|| overflow(slot.key()))?;
            slot.insert(stats);
        }
        Entry::Occupied(mut slot) => {
            slot.get_mut()
                .accumulate(fav, rt)
                .ok_or_else(|| overflow(slot.key()))?;
        }
    }
    Ok(())
}

fn overflow(key: &EdgeKey) -> GraphError {
    GraphError::EngagementOverflow {
        entity: format!("edge {} -> {}", key.source, key.target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(user: &str, hashtags: &[&str], mentions: &[&str], fav: u64, rt: u64) -> Post {
        Post {
            user: user.to_string(),
            fav,
            rt,
            hashtags: hashtags.iter().map(|s| s.to_string()).collect(),
            mentions: mentions.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn key(source: &str, target: &str) -> EdgeKey {
        EdgeKey::directed(source.to_string(), target.to_string())
    }

    /// Two-post corpus: alice tags AI and NLP; bob tags nlp and mentions alice.
    fn scenario() -> (Corpus, Namespaces) {
        let corpus = Corpus::from_posts([
            ("1", post("alice", &["AI", "NLP"], &[], 2, 1)),
            ("2", post("bob", &["nlp"], &["alice"], 0, 3)),
        ]);
        let namespaces = Namespaces::index(&corpus);
        (corpus, namespaces)
    }

    #[test]
    fn test_scenario_hashtag_edges() {
        let (corpus, ns) = scenario();
        let edges = hashtag_edges(&corpus, &ns).unwrap();

        assert_eq!(edges.len(), 1);
        assert_eq!(
            edges[&key("ai", "nlp")],
            EdgeStats {
                n: 1,
                fav: 2,
                rt: 1,
                score: 3
            }
        );
    }

    #[test]
    fn test_scenario_mention_edges() {
        let (corpus, ns) = scenario();
        let edges = mention_edges(&corpus, &ns).unwrap();

        // Post 1 has only its author, so only post 2 contributes
        assert_eq!(edges.len(), 1);
        assert_eq!(
            edges[&key("alice", "bob")],
            EdgeStats {
                n: 1,
                fav: 0,
                rt: 3,
                score: 3
            }
        );
    }

    #[test]
    fn test_scenario_bipartite_edges() {
        let (corpus, ns) = scenario();
        let edges = bipartite_edges(&corpus, &ns).unwrap();

        assert_eq!(edges.len(), 3);
        assert_eq!(edges[&key("alice", "ai")].n, 1);
        assert_eq!(edges[&key("alice", "nlp")].n, 2);
        assert_eq!(edges[&key("alice", "nlp")].score, 2 * (2 + 4));
        assert_eq!(edges[&key("bob", "nlp")].rt, 3);
    }

    #[test]
    fn test_symmetry_across_label_order() {
        let forward = Corpus::from_posts([("1", post("u", &["Zeta", "alpha"], &[], 1, 1))]);
        let backward = Corpus::from_posts([("1", post("u", &["alpha", "Zeta"], &[], 1, 1))]);

        let a = hashtag_edges(&forward, &Namespaces::index(&forward)).unwrap();
        let b = hashtag_edges(&backward, &Namespaces::index(&backward)).unwrap();
        assert_eq!(a, b);
        assert!(a.contains_key(&key("alpha", "zeta")));
    }

    #[test]
    fn test_single_label_posts_add_no_edges() {
        let corpus = Corpus::from_posts([
            ("1", post("u", &["solo"], &[], 5, 5)),
            ("2", post("v", &["Solo", "SOLO"], &[], 5, 5)),
        ]);
        let ns = Namespaces::index(&corpus);

        assert!(hashtag_edges(&corpus, &ns).unwrap().is_empty());
        // Each post has only its author as identity label
        assert!(mention_edges(&corpus, &ns).unwrap().is_empty());
    }

    #[test]
    fn test_count_is_number_of_posts_containing_both_endpoints() {
        let corpus = Corpus::from_posts([
            ("1", post("u", &["a", "b", "c"], &[], 1, 0)),
            ("2", post("u", &["B", "a", "b"], &[], 0, 1)),
            ("3", post("u", &["a", "c"], &[], 1, 1)),
            ("4", post("u", &["b"], &[], 9, 9)),
        ]);
        let edges = hashtag_edges(&corpus, &Namespaces::index(&corpus)).unwrap();

        assert_eq!(edges[&key("a", "b")].n, 2);
        assert_eq!(edges[&key("a", "c")].n, 2);
        assert_eq!(edges[&key("b", "c")].n, 1);
        for stats in edges.values() {
            assert_eq!(stats.score, stats.n * (stats.fav + stats.rt));
        }
    }

    #[test]
    fn test_ambiguous_label_is_suffixed_in_every_role() {
        // "rust" is a hashtag in post 1 and an author in post 2
        let corpus = Corpus::from_posts([
            ("1", post("alice", &["rust", "async"], &["carol"], 1, 0)),
            ("2", post("rust", &["Tokio"], &["alice"], 0, 1)),
        ]);
        let ns = Namespaces::index(&corpus);

        let tags = hashtag_edges(&corpus, &ns).unwrap();
        assert!(tags.contains_key(&key("async", "rust (hashtag)")));

        let users = mention_edges(&corpus, &ns).unwrap();
        assert!(users.contains_key(&key("alice", "rust (user)")));

        let bipartite = bipartite_edges(&corpus, &ns).unwrap();
        assert!(bipartite.contains_key(&key("carol", "rust (hashtag)")));
        assert!(bipartite.contains_key(&key("rust (user)", "tokio")));

        let all_labels = tags
            .keys()
            .chain(users.keys())
            .chain(bipartite.keys())
            .flat_map(|k| [k.source.as_str(), k.target.as_str()]);
        for label in all_labels {
            assert_ne!(label, "rust");
        }
    }

    #[test]
    fn test_suffixed_pair_keeps_both_members() {
        // "go" as hashtag renders "go (hashtag)"; paired with "gopher" the
        // canonical key must hold both distinct strings
        let corpus = Corpus::from_posts([("1", post("go", &["gopher", "go"], &[], 0, 0))]);
        let edges = hashtag_edges(&corpus, &Namespaces::index(&corpus)).unwrap();

        assert_eq!(edges.len(), 1);
        let only = edges.keys().next().unwrap();
        assert_eq!(only.source, "go (hashtag)");
        assert_eq!(only.target, "gopher");
    }

    #[test]
    fn test_bipartite_is_not_reordered() {
        let corpus = Corpus::from_posts([("1", post("zed", &["aardvark"], &[], 0, 0))]);
        let edges = bipartite_edges(&corpus, &Namespaces::index(&corpus)).unwrap();
        assert!(edges.contains_key(&key("zed", "aardvark")));
    }

    #[test]
    fn test_pairwise_with_custom_extractor() {
        let corpus = Corpus::from_posts([("1", post("u", &[], &["x", "y", "z"], 1, 2))]);
        let edges = pairwise(&corpus, Post::mention_labels, |l| l.to_uppercase()).unwrap();

        assert_eq!(edges.len(), 3);
        assert!(edges.contains_key(&key("X", "Z")));
    }

    #[test]
    fn test_author_mentioning_self_adds_no_self_pair() {
        let corpus = Corpus::from_posts([("1", post("Alice", &[], &["alice"], 4, 1))]);
        let ns = Namespaces::index(&corpus);
        assert!(mention_edges(&corpus, &ns).unwrap().is_empty());

        let corpus = Corpus::from_posts([("1", post("Alice", &[], &["alice", "Bob"], 4, 1))]);
        let edges = mention_edges(&corpus, &Namespaces::index(&corpus)).unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(
            edges[&key("alice", "bob")],
            EdgeStats {
                n: 1,
                fav: 4,
                rt: 1,
                score: 5
            }
        );
    }

    #[test]
    fn test_engagement_overflow_is_an_error() {
        let corpus = Corpus::from_posts([("1", post("u", &["a", "b"], &[], u64::MAX, 1))]);
        let ns = Namespaces::index(&corpus);

        let err = hashtag_edges(&corpus, &ns).unwrap_err();
        assert!(matches!(err, GraphError::EngagementOverflow { .. }));
        assert!(err.to_string().contains("a -> b"));
        assert!(bipartite_edges(&corpus, &ns).is_err());

        // Each post fits on its own; the running totals do not
        let corpus = Corpus::from_posts([
            ("1", post("u", &["a", "b"], &[], u64::MAX - 1, 0)),
            ("2", post("v", &["a", "b"], &[], 1, 0)),
        ]);
        let err = hashtag_edges(&corpus, &Namespaces::index(&corpus)).unwrap_err();
        assert!(matches!(err, GraphError::EngagementOverflow { .. }));
    }

    #[test]
    fn test_engagement_at_u64_max_is_kept_exact() {
        let corpus = Corpus::from_posts([("1", post("u", &["a", "b"], &[], u64::MAX, 0))]);
        let edges = hashtag_edges(&corpus, &Namespaces::index(&corpus)).unwrap();
        assert_eq!(edges[&key("a", "b")].score, u64::MAX);
    }
}
