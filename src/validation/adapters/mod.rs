//! Adapter implementations for validation ports.

pub mod file;
pub mod memory;

pub use file::JsonFileRuleSource;
pub use memory::InMemoryRuleSource;
