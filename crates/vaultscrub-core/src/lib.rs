//! Core rule model for vaultscrub
//!
//! This crate contains:
//! - The `RuleSet` (key-name, exact-property and value-pattern rules plus output policy)
//! - The override structure read from config files and the merge onto defaults
//! - Key and value classification
//! - Error types shared by the engine and its callers

pub mod defaults;
pub mod error;
pub mod rules;

pub use error::{ConfigError, InputError, Result};
pub use rules::{RuleMatch, RuleSet, RuleSetSource, ValuePattern};
