//! Domain entities - posts and the form state around them.

mod draft;
mod post;
pub mod timestamp;

pub use draft::{Draft, EditTarget};
pub use post::{Post, PostId};
