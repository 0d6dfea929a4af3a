//! Utility modules shared by the build.

pub mod exec;
pub mod minify;
