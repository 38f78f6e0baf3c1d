//! Hashtag and user namespaces, and role-based label disambiguation.
//!
//! A label such as `rust` may be used both as a hashtag and as a username.
//! When it is, each rendering gets a role suffix so the two graph nodes stay
//! distinct: `rust (hashtag)` and `rust (user)`.

use std::collections::HashSet;

use crate::corpus::Corpus;

/// Suffix appended to a hashtag that is also a user identity.
pub const HASHTAG_SUFFIX: &str = " (hashtag)";

/// Suffix appended to a user identity that is also a hashtag.
pub const USER_SUFFIX: &str = " (user)";

/// Role in which a label is being rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Hashtag,
    User,
}

/// Distinct lowercased hashtags and user identities of one corpus.
///
/// Built once per run and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Namespaces {
    hashtags: HashSet<String>,
    mentions: HashSet<String>,
}

impl Namespaces {
    /// Scan the corpus once and collect both namespaces.
    ///
    /// `mentions` covers mentioned users and post authors alike.
    pub fn index(corpus: &Corpus) -> Self {
        let mut hashtags = HashSet::new();
        let mut mentions = HashSet::new();

        for post in corpus.posts() {
            hashtags.extend(post.hashtag_labels());
            mentions.extend(post.identity_labels());
        }

        tracing::debug!(
            "Indexed {} hashtags and {} user identities",
            hashtags.len(),
            mentions.len()
        );

        Self { hashtags, mentions }
    }

    pub fn hashtags(&self) -> &HashSet<String> {
        &self.hashtags
    }

    pub fn mentions(&self) -> &HashSet<String> {
        &self.mentions
    }

    /// Render a lowercased label for output in the given role.
    ///
    /// A hashtag is checked against the user namespace and a user against
    /// the hashtag namespace; a collision appends the role suffix.
    pub fn render(&self, label: &str, role: Role) -> String {
        match role {
            Role::Hashtag if self.mentions.contains(label) => {
                format!("{}{}", label, HASHTAG_SUFFIX)
            }
            Role::User if self.hashtags.contains(label) => format!("{}{}", label, USER_SUFFIX),
            _ => label.to_string(),
        }
    }
}
