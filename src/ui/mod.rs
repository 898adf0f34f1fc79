//! UI components for Veriquote

pub mod feed;
pub mod popup;
pub mod reveal;
