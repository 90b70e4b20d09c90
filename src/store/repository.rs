//! Defines the `PostRepository` trait for pluggable post storage.

use crate::error::StoreError;
use crate::filter::SearchFilters;
use crate::types::{Post, PostId};

/// A trait that defines the common interface for a post store.
///
/// `PostRepository` covers what the blog needs from its document store: the
/// admin panel's create/update/delete, and `find` for listings. Search itself
/// takes a plain slice of posts, so any repository can feed the engine via
/// [`all`](Self::all) or [`find`](Self::find).
///
/// The `Send` and `Sync` bounds allow a repository to be shared across
/// request handlers.
pub trait PostRepository: Send + Sync {
  /// Adds a new post.
  ///
  /// # Errors
  ///
  /// [`StoreError::DuplicateId`] if a post with the same id exists.
  fn insert(&mut self, post: Post) -> Result<(), StoreError>;

  /// Replaces an existing post, matched by id.
  ///
  /// # Errors
  ///
  /// [`StoreError::NotFound`] if no post has that id.
  fn update(&mut self, post: Post) -> Result<(), StoreError>;

  /// Removes a post and returns it.
  ///
  /// # Errors
  ///
  /// [`StoreError::NotFound`] if no post has that id.
  fn remove(&mut self, id: &PostId) -> Result<Post, StoreError>;

  /// Retrieves a post by id.
  fn get(&self, id: &PostId) -> Option<&Post>;

  /// Returns the posts admitted by `filters`, newest first.
  fn find(&self, filters: &SearchFilters) -> Vec<Post>;

  /// Returns every post, newest first.
  fn all(&self) -> Vec<Post> {
    self.find(&SearchFilters::default())
  }
}
