//! HTTP request handlers.

pub(crate) mod content;
pub(crate) mod navigation;
pub(crate) mod pages;
