//! Port traits (interfaces for adapters).
//!
//! The service depends on these traits, not on concrete implementations.

mod id_generator;

pub use id_generator::IdGenerator;
