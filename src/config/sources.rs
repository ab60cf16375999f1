//! Override sources layered on top of the defaults.

pub mod local_file;
