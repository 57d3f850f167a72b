//! Unit tests for the inventory module.
