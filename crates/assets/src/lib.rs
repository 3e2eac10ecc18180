//! Asset resolution: image references to decoded byte buffers
//!
//! A reference is a URL or a `data:` URL. Resolution never fails a build:
//! any fetch or decode problem degrades to `None` and the caller renders a
//! placeholder. Results, including negative ones, are memoized for the
//! lifetime of one build through [`AssetCache`].

mod cache;
mod error;
mod source;

pub use cache::*;
pub use error::*;
pub use source::*;
