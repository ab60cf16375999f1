//! Integration tests for is-it-rick configuration resolution

mod config_resolution;
mod test_utils;
