// src/lib.rs

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod fetch;
pub mod labels;
pub mod logging;
pub mod param;
pub mod tree;

pub use bootstrap::{bootstrap, Application};
pub use labels::load_labels;
pub use prc::hash40::Hash40;
