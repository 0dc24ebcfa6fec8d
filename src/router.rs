//! Per-method routing on top of [Tree].
//!
//! A [Router] keeps one tree per HTTP method and decides what a request that doesn't match
//! exactly should turn into: a redirect to the canonical path, an `OPTIONS` reply, a
//! `405 Method Not Allowed`, or a plain miss.
//!
//! ```
//! use http::{Method, StatusCode};
//! use waymark::{Lookup, Router};
//!
//! let mut router = Router::new();
//! router
//!     .get("/user/:name", "show")?
//!     .post("/user/:name", "update")?;
//!
//! match router.lookup(&Method::GET, "/user/gordon")? {
//!     Lookup::Found { handler, params } => {
//!         assert_eq!(*handler, "show");
//!         assert_eq!(params.get("name"), Some("gordon"));
//!     }
//!     other => panic!("unexpected {:?}", other),
//! }
//!
//! match router.lookup(&Method::GET, "/user/gordon/")? {
//!     Lookup::Redirect { location, status } => {
//!         assert_eq!(location, "/user/gordon");
//!         assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
//!     }
//!     other => panic!("unexpected {:?}", other),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
use super::{
    params::Params,
    path::clean_path,
    tree::{InsertError, MatchError, Tree},
};
use http::{Method, StatusCode};
use std::collections::HashMap;
use tracing::debug;

/// Fallback behavior of a [Router].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RouterConfig {
    /// Redirect to the path with(out) a trailing slash if only that variant has a handler.
    pub redirect_trailing_slash: bool,

    /// Clean the path and retry case-insensitively, redirecting to the registered spelling.
    pub redirect_fixed_path: bool,

    /// Answer with the allowed methods instead of a miss if another method matches.
    pub handle_method_not_allowed: bool,

    /// Answer `OPTIONS` requests automatically unless a handler is registered for them.
    pub handle_options: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            redirect_trailing_slash: true,
            redirect_fixed_path: true,
            handle_method_not_allowed: true,
            handle_options: true,
        }
    }
}

/// The outcome of [Router::lookup].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup<'n, 'p, H> {
    /// A handler is registered for the method and path.
    Found {
        handler: &'n H,
        params: Params<'n, 'p>,
    },

    /// The request should be redirected to `location`.
    ///
    /// `status` is `301` for `GET` and `308` otherwise, so clients keep the method and body.
    Redirect { location: String, status: StatusCode },

    /// An `OPTIONS` request for a path other methods are registered for.
    Options { allow: Vec<Method> },

    /// The path is registered, but not for this method.
    MethodNotAllowed { allow: Vec<Method> },

    /// Nothing matches, not even after fixing the path.
    NotFound,
}

/// A set of route trees keyed by HTTP method.
#[derive(Clone, Debug)]
pub struct Router<H> {
    trees: HashMap<Method, Tree<H>>,
    config: RouterConfig,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::with_config(RouterConfig::default())
    }
}

impl<H> Router<H> {
    /// An empty router with the default [RouterConfig].
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty router with the given fallback behavior.
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            trees: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// The total number of registered routes across all methods.
    pub fn len(&self) -> usize {
        self.trees.values().map(Tree::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The route tree for `method`, if anything was registered for it.
    pub fn tree(&self, method: &Method) -> Option<&Tree<H>> {
        self.trees.get(method)
    }

    /// Register `handler` for requests with `method` whose path matches `pattern`.
    ///
    /// See [Tree::insert] for the pattern syntax and the errors.
    pub fn handle(
        &mut self,
        method: Method,
        pattern: &str,
        handler: H,
    ) -> Result<&mut Self, InsertError> {
        let tree = self.trees.entry(method.clone()).or_default();

        if let Err(err) = tree.insert(pattern, handler) {
            if tree.is_empty() {
                self.trees.remove(&method);
            }
            return Err(err);
        }

        debug!(%method, pattern, "registered route");
        Ok(self)
    }

    /// Shorthand for [handle](Router::handle) with `GET`.
    pub fn get(&mut self, pattern: &str, handler: H) -> Result<&mut Self, InsertError> {
        self.handle(Method::GET, pattern, handler)
    }

    /// Shorthand for [handle](Router::handle) with `HEAD`.
    pub fn head(&mut self, pattern: &str, handler: H) -> Result<&mut Self, InsertError> {
        self.handle(Method::HEAD, pattern, handler)
    }

    /// Shorthand for [handle](Router::handle) with `POST`.
    pub fn post(&mut self, pattern: &str, handler: H) -> Result<&mut Self, InsertError> {
        self.handle(Method::POST, pattern, handler)
    }

    /// Shorthand for [handle](Router::handle) with `PUT`.
    pub fn put(&mut self, pattern: &str, handler: H) -> Result<&mut Self, InsertError> {
        self.handle(Method::PUT, pattern, handler)
    }

    /// Shorthand for [handle](Router::handle) with `PATCH`.
    pub fn patch(&mut self, pattern: &str, handler: H) -> Result<&mut Self, InsertError> {
        self.handle(Method::PATCH, pattern, handler)
    }

    /// Shorthand for [handle](Router::handle) with `DELETE`.
    pub fn delete(&mut self, pattern: &str, handler: H) -> Result<&mut Self, InsertError> {
        self.handle(Method::DELETE, pattern, handler)
    }

    /// Shorthand for [handle](Router::handle) with `OPTIONS`.
    pub fn options(&mut self, pattern: &str, handler: H) -> Result<&mut Self, InsertError> {
        self.handle(Method::OPTIONS, pattern, handler)
    }

    /// Resolve a request.
    ///
    /// Exact matches win. Otherwise, depending on the [RouterConfig], the request is
    /// redirected to a path that does match, answered as an `OPTIONS` request, or refused
    /// with the list of methods that would have matched.
    pub fn lookup<'n, 'p>(
        &'n self,
        method: &Method,
        path: &'p str,
    ) -> Result<Lookup<'n, 'p, H>, MatchError> {
        if let Some(tree) = self.trees.get(method) {
            let route = tree.find(path)?;

            if let Some(handler) = route.handler {
                return Ok(Lookup::Found {
                    handler,
                    params: route.params,
                });
            }

            if *method != Method::CONNECT && path != "/" {
                let status = if *method == Method::GET {
                    StatusCode::MOVED_PERMANENTLY
                } else {
                    StatusCode::PERMANENT_REDIRECT
                };

                if route.tsr && self.config.redirect_trailing_slash {
                    let location = match path.strip_suffix('/') {
                        Some(stripped) => stripped.to_owned(),
                        None => format!("{}/", path),
                    };
                    return Ok(Lookup::Redirect { location, status });
                }

                if self.config.redirect_fixed_path {
                    let fixed = tree.find_case_insensitive(
                        &clean_path(path),
                        self.config.redirect_trailing_slash,
                    );

                    if let Some(location) = fixed {
                        return Ok(Lookup::Redirect { location, status });
                    }
                }
            }
        }

        if *method == Method::OPTIONS && self.config.handle_options {
            let allow = self.allowed(path, method)?;
            if !allow.is_empty() {
                return Ok(Lookup::Options { allow });
            }
        } else if self.config.handle_method_not_allowed {
            let allow = self.allowed(path, method)?;
            if !allow.is_empty() {
                return Ok(Lookup::MethodNotAllowed { allow });
            }
        }

        Ok(Lookup::NotFound)
    }

    /// The methods `path` could be requested with, besides `method`.
    ///
    /// The server-wide path `*` allows every registered method. `OPTIONS` is included
    /// whenever anything else is; the list is sorted by method name.
    pub fn allowed(&self, path: &str, method: &Method) -> Result<Vec<Method>, MatchError> {
        let mut allow = vec![];

        for (m, tree) in &self.trees {
            if *m == Method::OPTIONS {
                continue;
            }

            if path == "*" {
                allow.push(m.clone());
                continue;
            }

            if m == method {
                continue;
            }

            if tree.find(path)?.handler.is_some() {
                allow.push(m.clone());
            }
        }

        if !allow.is_empty() {
            allow.push(Method::OPTIONS);
            allow.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        }

        Ok(allow)
    }
}
