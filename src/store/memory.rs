//! In-memory post store.

use std::collections::HashMap;
use std::path::Path;

use crate::error::StoreError;
use crate::filter::SearchFilters;
use crate::store::repository::PostRepository;
use crate::types::{Post, PostId};

/// In-memory post store keyed by id.
#[derive(Debug, Default, Clone)]
pub struct InMemoryPostStore {
    posts: HashMap<PostId, Post>,
}

impl InMemoryPostStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from posts, rejecting duplicate ids.
    pub fn from_posts<I>(posts: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = Post>,
    {
        let mut store = Self::new();
        for post in posts {
            store.insert(post)?;
        }
        Ok(store)
    }

    /// Parse a JSON array of posts.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let posts: Vec<Post> = serde_json::from_str(json)?;
        Self::from_posts(posts)
    }

    /// Read a JSON array of posts from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), posts = store.len(), "loaded posts");
        Ok(store)
    }

    /// Number of stored posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the store holds no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl PostRepository for InMemoryPostStore {
    fn insert(&mut self, post: Post) -> Result<(), StoreError> {
        if self.posts.contains_key(&post.id) {
            return Err(StoreError::DuplicateId(post.id));
        }
        self.posts.insert(post.id.clone(), post);
        Ok(())
    }

    fn update(&mut self, post: Post) -> Result<(), StoreError> {
        match self.posts.get_mut(&post.id) {
            Some(slot) => {
                *slot = post;
                Ok(())
            }
            None => Err(StoreError::NotFound(post.id)),
        }
    }

    fn remove(&mut self, id: &PostId) -> Result<Post, StoreError> {
        self.posts
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn get(&self, id: &PostId) -> Option<&Post> {
        self.posts.get(id)
    }

    fn find(&self, filters: &SearchFilters) -> Vec<Post> {
        let mut found: Vec<Post> = self
            .posts
            .values()
            .filter(|post| filters.evaluate(post))
            .cloned()
            .collect();

        // Newest first; ids break ties so listings are stable.
        found.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        found
    }
}
