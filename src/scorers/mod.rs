//! The built-in `FieldScorer` implementations.
//!
//! The default engine runs them in this order, which is part of the ranking
//! contract because later scorers read the label left by earlier ones:
//!
//! - [`TitleScorer`]: whole query or query words in the title.
//! - [`ExcerptScorer`]: whole query or query words in the excerpt.
//! - [`TaggedScorer`]: tags containing the whole query.
//! - [`ContentScorer`]: distinct query words in the body.
//!
//! # Example
//!
//! ```rust
//! use blogsearch::prelude::*;
//!
//! let weights = ScoringWeights::default().tag(40);
//! let engine = BlogSearchEngine::builder()
//!     .with(Box::new(TitleScorer::new(&weights)))
//!     .with(Box::new(TaggedScorer::new(&weights)))
//!     .build();
//!
//! let posts = vec![Post::new("a", "Intro").tags(["Rust"])];
//! let results = engine.search(&posts, "rust");
//! assert_eq!(results[0].relevance_score, 40);
//! ```

pub mod content;
pub mod excerpt;
pub mod tagged;
pub mod title;
pub mod tokenizer;

pub use content::ContentScorer;
pub use excerpt::ExcerptScorer;
pub use tagged::TaggedScorer;
pub use title::TitleScorer;

use crate::scorer::FieldScorer;
use crate::weights::ScoringWeights;

/// The four built-in scorers in ranking order.
pub fn standard_scorers(weights: &ScoringWeights) -> Vec<Box<dyn FieldScorer>> {
  vec![
    Box::new(TitleScorer::new(weights)),
    Box::new(ExcerptScorer::new(weights)),
    Box::new(TaggedScorer::new(weights)),
    Box::new(ContentScorer::new(weights)),
  ]
}
