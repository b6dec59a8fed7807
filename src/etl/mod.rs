//! Source abstraction for the record snapshot
//!
//! Retrieving records is the job of an external collaborator; the table only
//! needs something that hands over the whole snapshot once.

mod extract;

pub use extract::Extractor;
