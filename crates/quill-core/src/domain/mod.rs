//! Domain records - the objects written to the fixture file.

mod comment;

mod post;

pub use comment::Comment;
pub use post::BlogPost;
