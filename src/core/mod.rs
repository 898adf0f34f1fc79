//! Core functionality for posts, source documents, and quote matching

pub mod config;
pub mod matcher;
pub mod post;
pub mod source;
