//! Post storage behind the blog listing, the reader and the admin panel.

pub mod memory;
pub mod repository;

pub use memory::InMemoryPostStore;
pub use repository::PostRepository;
