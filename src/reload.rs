//! Hot-swappable routing tables.
//!
//! Trees are read-only once built. To change the routes of a running server, build a new
//! [Router] and publish it through a [SharedRouter]: readers that already loaded the old one
//! keep using it until they drop their handle.
use super::{router::Router, tree::InsertError};
use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::{error, info};

/// A [Router] that can be replaced while other threads are reading it.
///
/// ```
/// use http::Method;
/// use waymark::{Lookup, Router, SharedRouter};
///
/// let mut router = Router::new();
/// router.get("/v1/status", "v1")?;
/// let shared = SharedRouter::new(router);
///
/// let before = shared.load();
/// shared.rebuild(|r| r.get("/v2/status", "v2").map(drop))?;
///
/// assert!(matches!(
///     before.lookup(&Method::GET, "/v1/status")?,
///     Lookup::Found { .. }
/// ));
/// assert!(matches!(
///     shared.load().lookup(&Method::GET, "/v1/status")?,
///     Lookup::NotFound
/// ));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct SharedRouter<H> {
    current: ArcSwap<Router<H>>,
}

impl<H> From<Router<H>> for SharedRouter<H> {
    fn from(router: Router<H>) -> Self {
        Self::new(router)
    }
}

impl<H> SharedRouter<H> {
    pub fn new(router: Router<H>) -> Self {
        Self {
            current: ArcSwap::from_pointee(router),
        }
    }

    /// A snapshot of the current router. Lock-free.
    pub fn load(&self) -> Arc<Router<H>> {
        self.current.load_full()
    }

    /// Replace the current router, returning the one it replaced.
    pub fn store(&self, router: Router<H>) -> Arc<Router<H>> {
        let routes = router.len();
        let previous = self.current.swap(Arc::new(router));

        info!(routes, previous = previous.len(), "swapped router");
        previous
    }

    /// Build a fresh router with the current configuration and swap it in.
    ///
    /// If `build` fails the current router stays in place and the error is returned. On
    /// success the replaced router is returned.
    pub fn rebuild<F>(&self, build: F) -> Result<Arc<Router<H>>, InsertError>
    where
        F: FnOnce(&mut Router<H>) -> Result<(), InsertError>,
    {
        let config = *self.current.load().config();
        let mut router = Router::with_config(config);

        match build(&mut router) {
            Ok(()) => Ok(self.store(router)),
            Err(err) => {
                error!(%err, "failed to rebuild router, keeping current routes");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lookup, RouterConfig};
    use http::Method;
    use std::thread;

    fn found<H: PartialEq>(router: &Router<H>, path: &str, expected: &H) -> bool {
        match router.lookup(&Method::GET, path) {
            Ok(Lookup::Found { handler, .. }) => handler == expected,
            _ => false,
        }
    }

    #[test]
    fn test_store_returns_previous() {
        let mut a = Router::new();
        a.get("/a", 1).unwrap();
        let mut b = Router::new();
        b.get("/b", 2).unwrap();

        let shared = SharedRouter::new(a);
        let previous = shared.store(b);

        assert!(found(&previous, "/a", &1));
        assert!(found(&shared.load(), "/b", &2));
        assert!(!found(&shared.load(), "/a", &1));
    }

    #[test]
    fn test_rebuild_keeps_config() {
        let config = RouterConfig {
            redirect_trailing_slash: false,
            ..RouterConfig::default()
        };
        let shared = SharedRouter::new(Router::<u8>::with_config(config));

        shared.rebuild(|r| r.get("/x", 0).map(drop)).unwrap();

        let current = shared.load();
        assert_eq!(*current.config(), config);
        assert_eq!(current.lookup(&Method::GET, "/x/").unwrap(), Lookup::NotFound);
    }

    #[test]
    fn test_failed_rebuild_keeps_current() {
        let mut router = Router::new();
        router.get("/keep", 7).unwrap();
        let shared = SharedRouter::from(router);

        let err = shared
            .rebuild(|r| {
                r.get("/users/:id", 1)?;
                r.get("/users/:name", 2)?;
                Ok(())
            })
            .unwrap_err();

        assert!(matches!(err, InsertError::RouteConflict { .. }));
        assert!(found(&shared.load(), "/keep", &7));
        assert_eq!(shared.load().len(), 1);
    }

    #[test]
    fn test_readers_keep_snapshot_across_swaps() {
        let mut router = Router::new();
        router.get("/gen", 0usize).unwrap();
        let shared = Arc::new(SharedRouter::new(router));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for _ in 0..100 {
                        let snapshot = shared.load();
                        let first = snapshot.lookup(&Method::GET, "/gen").unwrap();
                        let again = snapshot.lookup(&Method::GET, "/gen").unwrap();
                        assert_eq!(first, again);
                    }
                })
            })
            .collect();

        for gen in 1..50 {
            shared.rebuild(|r| r.get("/gen", gen).map(drop)).unwrap();
        }

        for reader in readers {
            reader.join().unwrap();
        }

        assert!(found(&shared.load(), "/gen", &49));
    }
}
