//! Dictionary-based entity recognition over text
//!
//! Given phrase -> label rules, this crate finds every occurrence of the
//! phrases in a document, resolves overlaps between candidate matches, and
//! renders the result in a standard annotation scheme (IOB2, BILOU, IOBES,
//! or raw JSON spans).
//!
//! The pipeline: build a [`DictionaryMatcher`] once, wrap each document in
//! an [`IndexedText`], collect candidate [`Entity`] values with
//! [`DictionaryMatcher::find`], reduce them with a [`Resolver`], and render
//! with a [`Serializer`].
//!
//! ```
//! use shirushi_core::{
//!     DictionaryMatcher, IndexedText, Iob2Serializer, LongestMatch, Resolver, Serializer,
//! };
//!
//! # fn main() -> shirushi_core::Result<()> {
//! let mut matcher = DictionaryMatcher::new();
//! matcher.add(vec![("東京", "LOC"), ("東京都", "LOC"), ("京都", "LOC")]);
//! matcher.compile()?;
//!
//! let text = IndexedText::raw("日本の首都は東京都です。");
//! let entities = LongestMatch.resolve(matcher.find(&text)?);
//! let tagged = Iob2Serializer.save(&text, &entities)?;
//! assert!(tagged.contains("東\tB-LOC"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod entity;
pub mod error;
pub mod matcher;
pub mod resolver;
pub mod serializer;
pub mod text;

pub use entity::Entity;
pub use error::{LabelError, Result};
pub use matcher::DictionaryMatcher;
pub use resolver::{overlap, LongestMatch, MaximizedCount, Resolver};
pub use serializer::{
    BilouSerializer, Iob2Serializer, IobesSerializer, JsonlSerializer, Serializer,
};
pub use text::IndexedText;
