//! Unit tests for the fleet module.
