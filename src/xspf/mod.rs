//! XSPF serialization

mod writer;

pub use writer::{format_duration, write_document};
