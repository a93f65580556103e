// Prompt improvement: heuristics that answer trivial inputs locally, and the
// dispatcher that hands everything else to a generation provider.
// Provider calls go through crate::providers — never reqwest directly.

pub mod dispatcher;
pub mod handlers;
pub mod prompts;
pub mod short_input;
pub mod structure;
