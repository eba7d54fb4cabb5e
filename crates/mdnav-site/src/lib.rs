//! Navigation tree and page rendering for mdnav.
//!
//! This crate sits between storage and transport:
//! - [`build_navigation`] folds discovered routes into a [`NavItem`] forest
//! - [`Template`] substitutes rendered HTML into the page template
//! - [`Site`] ties storage, rendering and the template together

mod navigation;
mod site;
mod template;

pub use navigation::{NavItem, build_navigation, display_name};
pub use site::{RenderError, RenderedPage, Site};
pub use template::{CONTENT_PLACEHOLDER, Template, TemplateError};
