//! Router core module - ordered route table and request lookup.

use arc_swap::ArcSwap;
use http::Method;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::pathmatch::{CompileError, Matcher, Values};
use crate::runtime_config::RuntimeConfig;

/// A registered route: optional method filter, compiled pattern, and handler
pub struct Route<H> {
    method: Option<Method>,
    matcher: Matcher,
    handler: Arc<H>,
}

impl<H> Route<H> {
    /// Method this route is restricted to; `None` accepts every method
    #[must_use]
    pub fn method(&self) -> Option<&Method> {
        self.method.as_ref()
    }

    #[must_use]
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    #[must_use]
    pub fn handler(&self) -> &Arc<H> {
        &self.handler
    }

    fn accepts(&self, method: &Method) -> bool {
        self.method.as_ref().is_none_or(|m| m == method)
    }
}

impl<H> fmt::Debug for Route<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("pattern", &self.matcher.pattern())
            .finish_non_exhaustive()
    }
}

/// Result of successfully matching a request to a route
///
/// Captures are handed to the caller explicitly; nothing is stashed in
/// request-scoped state.
#[derive(Debug)]
pub struct RouteMatch<H> {
    /// The matched route (shared with the routing table)
    pub route: Arc<Route<H>>,
    /// Named captures extracted from the path (e.g., `{id}` → `{"id": "123"}`)
    pub values: Values,
}

impl<H> RouteMatch<H> {
    #[must_use]
    pub fn handler(&self) -> &Arc<H> {
        &self.route.handler
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.route.matcher.pattern()
    }

    /// Captured value for `name`, `""` when absent
    #[inline]
    #[must_use]
    pub fn param(&self, name: &str) -> &str {
        self.values.get(name)
    }
}

/// Router that dispatches on HTTP method and path pattern
///
/// Routes are tried in registration order; the first route whose method
/// filter accepts the request method and whose pattern matches the path
/// wins. There is no priority or longest-match resolution.
///
/// Lookups read an immutable snapshot of the table through [`ArcSwap`], so
/// registering a route never blocks concurrent lookups.
///
/// # Example
///
/// ```rust
/// use http::Method;
/// use pathmux::router::Router;
///
/// let router = Router::new();
/// router.get("/users/{id}", "get_user").unwrap();
/// router.any("/files/{rest:.*$}", "files").unwrap();
///
/// let m = router.route(&Method::GET, "/users/123").unwrap();
/// assert_eq!(**m.handler(), "get_user");
/// assert_eq!(m.param("id"), "123");
/// ```
pub struct Router<H> {
    routes: ArcSwap<Vec<Arc<Route<H>>>>,
    config: RuntimeConfig,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::with_config(RuntimeConfig::default())
    }
}

impl<H> Router<H> {
    /// Create an empty router with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: RuntimeConfig) -> Self {
        Self {
            routes: ArcSwap::from_pointee(Vec::new()),
            config,
        }
    }

    /// Register `handler` for `method` (or any method when `None`) and `pattern`
    ///
    /// The pattern is compiled immediately; a malformed pattern is returned
    /// as an error and the table is left unchanged.
    pub fn handle(
        &self,
        method: Option<Method>,
        pattern: &str,
        handler: H,
    ) -> Result<(), CompileError> {
        let matcher = Matcher::new(pattern).map_err(|err| {
            warn!(
                method = %method_label(method.as_ref()),
                pattern = %pattern,
                error = %err,
                "Failed to register route"
            );
            err
        })?;

        let route = Arc::new(Route {
            method,
            matcher,
            handler: Arc::new(handler),
        });

        self.routes.rcu(|current| {
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend(current.iter().map(Arc::clone));
            next.push(Arc::clone(&route));
            next
        });

        info!(
            method = %method_label(route.method.as_ref()),
            pattern = %route.matcher.pattern(),
            routes_count = self.len(),
            "Route registered"
        );
        Ok(())
    }

    /// Register a route that responds to every HTTP method
    pub fn any(&self, pattern: &str, handler: H) -> Result<(), CompileError> {
        self.handle(None, pattern, handler)
    }

    pub fn get(&self, pattern: &str, handler: H) -> Result<(), CompileError> {
        self.handle(Some(Method::GET), pattern, handler)
    }

    pub fn head(&self, pattern: &str, handler: H) -> Result<(), CompileError> {
        self.handle(Some(Method::HEAD), pattern, handler)
    }

    pub fn post(&self, pattern: &str, handler: H) -> Result<(), CompileError> {
        self.handle(Some(Method::POST), pattern, handler)
    }

    pub fn put(&self, pattern: &str, handler: H) -> Result<(), CompileError> {
        self.handle(Some(Method::PUT), pattern, handler)
    }

    pub fn patch(&self, pattern: &str, handler: H) -> Result<(), CompileError> {
        self.handle(Some(Method::PATCH), pattern, handler)
    }

    pub fn delete(&self, pattern: &str, handler: H) -> Result<(), CompileError> {
        self.handle(Some(Method::DELETE), pattern, handler)
    }

    pub fn connect(&self, pattern: &str, handler: H) -> Result<(), CompileError> {
        self.handle(Some(Method::CONNECT), pattern, handler)
    }

    pub fn options(&self, pattern: &str, handler: H) -> Result<(), CompileError> {
        self.handle(Some(Method::OPTIONS), pattern, handler)
    }

    pub fn trace(&self, pattern: &str, handler: H) -> Result<(), CompileError> {
        self.handle(Some(Method::TRACE), pattern, handler)
    }

    /// Match a request to the first registered route that accepts it
    ///
    /// # Returns
    ///
    /// * `Some(RouteMatch)` - the winning route and its captures
    /// * `None` - no route matches (the HTTP layer answers 404)
    #[must_use]
    pub fn route(&self, method: &Method, path: &str) -> Option<RouteMatch<H>> {
        debug!(method = %method, path = %path, "Route match attempt");

        let match_start = Instant::now();
        let routes = self.routes.load();
        let found = routes.iter().find_map(|route| {
            if !route.accepts(method) {
                return None;
            }
            route
                .matcher
                .match_path(path)
                .ok()
                .map(|values| (Arc::clone(route), values))
        });
        let match_duration = match_start.elapsed();

        let Some((route, values)) = found else {
            warn!(
                method = %method,
                path = %path,
                duration_us = match_duration.as_micros(),
                "No route matched"
            );
            return None;
        };

        if match_duration > self.config.slow_match_threshold {
            warn!(
                method = %method,
                path = %path,
                route_pattern = %route.matcher.pattern(),
                path_params = ?values,
                duration_us = match_duration.as_micros(),
                "Slow route matching detected"
            );
        } else {
            info!(
                method = %method,
                path = %path,
                route_pattern = %route.matcher.pattern(),
                path_params = ?values,
                duration_us = match_duration.as_micros(),
                "Route matched"
            );
        }

        Some(RouteMatch { route, values })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.load().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.load().is_empty()
    }

    /// Registered routes as `METHOD pattern`, in registration order
    ///
    /// Routes that accept any method are listed as `* pattern`.
    #[must_use]
    pub fn patterns(&self) -> Vec<String> {
        self.routes
            .load()
            .iter()
            .map(|route| {
                format!(
                    "{} {}",
                    method_label(route.method()),
                    route.matcher().pattern()
                )
            })
            .collect()
    }
}

fn method_label(method: Option<&Method>) -> &str {
    method.map_or("*", Method::as_str)
}
