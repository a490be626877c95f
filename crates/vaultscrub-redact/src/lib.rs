//! Redaction engine for JSON documents
//!
//! Walks a `serde_json::Value` and returns a structurally identical copy with
//! sensitive properties removed or masked according to a [`RuleSet`].

pub mod redactor;

pub use redactor::{
    RedactionInfo, RedactionKind, RedactionSummary, Redactor, redact, summarize,
};
pub use vaultscrub_core::RuleSet;
