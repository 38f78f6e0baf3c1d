//! Corpus loading and validation.
//!
//! The corpus is a JSON object mapping post identifiers to post records.
//! Loading is strict: a malformed document, a record that is not an object,
//! a record lacking a required field, or a label containing a tab or line
//! break stops the run.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::error::{GraphError, Result};
use crate::types::Post;

/// Characters that delimit exported columns and rows.
const SEPARATORS: [char; 3] = ['\t', '\r', '\n'];

/// In-memory collection of posts keyed by post identifier.
///
/// Iteration follows identifier order, so aggregation over the same corpus
/// always visits posts in the same sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    posts: BTreeMap<String, Post>,
}

impl Corpus {
    /// Build a corpus from already-decoded posts.
    pub fn from_posts<I, K>(posts: I) -> Self
    where
        I: IntoIterator<Item = (K, Post)>,
        K: Into<String>,
    {
        Self {
            posts: posts.into_iter().map(|(id, post)| (id.into(), post)).collect(),
        }
    }

    /// Read and validate a corpus file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| GraphError::InputNotFound {
                path: path.display().to_string(),
                source,
            })?;
        let corpus = Self::from_json_str(&content)?;
        tracing::debug!("Loaded {} posts from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    /// Parse and validate a corpus from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content)?;
        let records = match root {
            Value::Object(records) => records,
            other => {
                return Err(GraphError::ParseError {
                    message: format!(
                        "expected an object of posts at the top level, found {}",
                        json_kind(&other)
                    ),
                })
            }
        };

        let mut posts = BTreeMap::new();
        for (post_id, record) in records {
            let post = decode_post(&post_id, record)?;
            posts.insert(post_id, post);
        }

        Ok(Self { posts })
    }

    /// Iterate over `(post_id, post)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Post)> {
        self.posts.iter().map(|(id, post)| (id.as_str(), post))
    }

    /// Iterate over posts in identifier order.
    pub fn posts(&self) -> impl Iterator<Item = &Post> {
        self.posts.values()
    }

    pub fn get(&self, post_id: &str) -> Option<&Post> {
        self.posts.get(post_id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

fn decode_post(post_id: &str, record: Value) -> Result<Post> {
    let fields = match &record {
        Value::Object(fields) => fields,
        other => {
            return Err(GraphError::ParseError {
                message: format!("post {} is {}, expected an object", post_id, json_kind(other)),
            })
        }
    };

    if let Some(field) = Post::REQUIRED_FIELDS
        .iter()
        .find(|field| !fields.contains_key(**field))
    {
        return Err(GraphError::MissingFieldError {
            post_id: post_id.to_string(),
            field: *field,
        });
    }

    let post: Post = serde_json::from_value(record).map_err(|e| GraphError::ParseError {
        message: format!("post {}: {}", post_id, e),
    })?;

    let mut labels = std::iter::once(&post.user)
        .chain(&post.hashtags)
        .chain(&post.mentions);
    if let Some(label) = labels.find(|label| label.contains(SEPARATORS)) {
        return Err(GraphError::ParseError {
            message: format!("post {}: label {:?} contains a tab or line break", post_id, label),
        });
    }

    Ok(post)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
