//! Route discovery and content resolution for mdnav.
//!
//! A content root is a directory tree where every directory holding an index
//! document (`index.md` by default) is an addressable page. This crate turns
//! that tree into route identities and resolves route identities back into
//! raw markdown.
//!
//! # Route Identity Convention
//!
//! All route parameters are slash-joined paths relative to the content root,
//! without leading or trailing slashes:
//! - `""` - root (the root's own index document)
//! - `"guide"` - `guide/index.md`
//! - `"guide/setup"` - `guide/setup/index.md`
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `routes()` and `resolve()` methods
//! - [`FsStorage`] implementation reading the local filesystem on every call
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//! - Path helpers ([`normalize_request_path`], [`join_route`], [`split_route`])
//!
//! # Example
//!
//! ```no_run
//! use mdnav_storage::{FsStorage, Resolution, Storage};
//!
//! let storage = FsStorage::new("content");
//! for route in storage.routes()? {
//!     if let Resolution::Found(content) = storage.resolve(&route)? {
//!         println!("{route}: {} bytes", content.text.len());
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod fs;
#[cfg(feature = "mock")]
mod mock;
mod path;
mod scanner;
mod storage;

pub use error::{DiscoveryError, ResolutionError, StorageErrorKind};
pub use fs::{DEFAULT_INDEX_FILE, FsStorage};
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use path::{join_route, normalize_request_path, split_route};
pub use storage::{Content, Resolution, Storage};
