//! A compressing radix tree router for HTTP request paths.
//!
//! Patterns are made of static text, named parameters (`:name`) and a trailing catch-all
//! (`*name`). Lookups never backtrack: a [Tree] rejects patterns that could make a request
//! path ambiguous when they are inserted, so every path matches at most one pattern.
//!
//! [Tree] is the bare matcher. [Router] keeps one tree per HTTP method and turns near misses
//! into redirects, `OPTIONS` replies or `405`s. [SharedRouter] lets a running server swap its
//! routes atomically.
//!
//! ```
//! use http::Method;
//! use waymark::{Lookup, Router};
//!
//! let mut router = Router::new();
//! router
//!     .get("/", "index")?
//!     .get("/blog/:slug", "post")?
//!     .get("/assets/*file", "assets")?;
//!
//! if let Lookup::Found { handler, params } = router.lookup(&Method::GET, "/blog/hello")? {
//!     assert_eq!(*handler, "post");
//!     assert_eq!(params.get("slug"), Some("hello"));
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![warn(rust_2018_idioms)]

pub mod params;
mod path;
pub mod reload;
pub mod router;
pub mod tree;

#[doc(inline)]
pub use params::{Param, Params, UriError};
#[doc(inline)]
pub use path::clean_path;
#[doc(inline)]
pub use reload::SharedRouter;
#[doc(inline)]
pub use router::{Lookup, Router, RouterConfig};
#[doc(inline)]
pub use tree::{count_params, InsertError, MatchError, NodeKind, Route, Tree};
