//! Property-based tests

mod derived_paths;
