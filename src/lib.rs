// src/lib.rs

pub mod core;
pub mod lookup;

pub use crate::core::engine::ChainEngine;
pub use crate::core::types::{ChainConfig, PhonemeSequence, WordEntry};
pub use crate::lookup::datamuse::{ClientConfig, DatamuseClient, Relation};
pub use crate::lookup::{LookupError, WordLookup};
