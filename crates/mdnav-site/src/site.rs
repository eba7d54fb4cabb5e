//! Site facade over storage, navigation and rendering.
//!
//! [`Site`] exposes the operations the transport layer needs: listing
//! routes, building navigation, raw content access and rendered pages.
//! Nothing is cached; every call goes back to storage.
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use mdnav_site::Site;
//! use mdnav_storage::FsStorage;
//!
//! let site = Site::new(
//!     Arc::new(FsStorage::new("content")),
//!     PathBuf::from("template.html"),
//! );
//!
//! let nav = site.navigation()?;
//! if let Some(page) = site.render("guide")? {
//!     println!("{}", page.html);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use mdnav_renderer::MarkdownRenderer;
use mdnav_storage::{DiscoveryError, Resolution, ResolutionError, Storage};

use crate::navigation::{NavItem, build_navigation};
use crate::template::{Template, TemplateError};

/// A page rendered into the site template.
#[derive(Clone, Debug)]
pub struct RenderedPage {
    /// Route identity of the page.
    pub route: String,
    /// Source location of the index document.
    pub source_path: PathBuf,
    /// Full HTML document (template with content substituted).
    pub html: String,
}

/// Error returned when page rendering fails.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Content could not be resolved.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    /// Template could not be read.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Documentation site backed by a [`Storage`].
pub struct Site {
    storage: Arc<dyn Storage>,
    renderer: MarkdownRenderer,
    template_path: PathBuf,
}

impl Site {
    /// Create a new site.
    ///
    /// # Arguments
    ///
    /// * `storage` - Storage backend for routes and content
    /// * `template_path` - HTML template with a `{{content}}` placeholder
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, template_path: PathBuf) -> Self {
        Self {
            storage,
            renderer: MarkdownRenderer::new(),
            template_path,
        }
    }

    /// List route identities in discovery order.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError`] if the content tree cannot be walked.
    pub fn routes(&self) -> Result<Vec<String>, DiscoveryError> {
        self.storage.routes()
    }

    /// Discover routes and fold them into the navigation tree.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError`] if the content tree cannot be walked.
    pub fn navigation(&self) -> Result<Vec<NavItem>, DiscoveryError> {
        let routes = self.storage.routes()?;
        Ok(build_navigation(&routes))
    }

    /// Resolve the raw markdown for a route.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError`] for invalid routes and filesystem faults.
    pub fn content(&self, route: &str) -> Result<Resolution, ResolutionError> {
        self.storage.resolve(route)
    }

    /// Render a route into the site template.
    ///
    /// Returns `Ok(None)` if the route has no content. The template is only
    /// read once content has been found.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if resolution fails or the template cannot be
    /// read.
    pub fn render(&self, route: &str) -> Result<Option<RenderedPage>, RenderError> {
        let Resolution::Found(content) = self.storage.resolve(route)? else {
            return Ok(None);
        };

        let body = self.renderer.render(&content.text);
        let template = Template::load(&self.template_path)?;

        tracing::debug!(route = %route, source = %content.path.display(), "Rendered page");

        Ok(Some(RenderedPage {
            route: content.route,
            source_path: content.path,
            html: template.apply(&body),
        }))
    }
}
