//! In-memory adapters for fleet persistence.

mod fleet;

pub use fleet::InMemoryFleetRepository;
