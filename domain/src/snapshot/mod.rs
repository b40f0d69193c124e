//! Snapshot codec.
//!
//! A snapshot is the full session encoded as JSON, used to save a session and
//! resume it later. Decoding validates the document against the session rules
//! before handing out a [`Session`](crate::Session), so a rejected snapshot
//! never replaces a live one.

mod codec;
mod document;

pub use codec::{deserialize, serialize, serialize_results};
