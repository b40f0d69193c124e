//! Logging infrastructure: structured session event logging.
//!
//! Provides [`JsonlSessionLogger`], a JSONL file writer that implements
//! the [`SessionEventLogger`](scrum_poker_application::SessionEventLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlSessionLogger;
