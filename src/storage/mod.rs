//! Storage implementations for record services

pub mod in_memory;

pub use in_memory::InMemoryRecordService;
