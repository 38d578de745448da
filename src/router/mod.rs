//! # Router Module
//!
//! The router module associates compiled path patterns with handlers and
//! resolves incoming requests to them.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Compiling route patterns at registration time (see [`crate::pathmatch`])
//! - Filtering routes by HTTP method
//! - Matching request paths in registration order
//! - Returning the winning handler together with its captured values
//!
//! ## Architecture
//!
//! The router uses a two-phase approach:
//!
//! 1. **Registration**: patterns such as `/pets/{id}` or `/files/{rest:.*$}`
//!    are compiled into [`Matcher`](crate::pathmatch::Matcher)s. A malformed
//!    pattern fails registration; it never fails a request.
//!
//! 2. **Matching**: each request is tested against the routes in the order
//!    they were registered. A pattern mismatch means "try the next route";
//!    the first route that accepts the method and matches the path wins.
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use pathmux::router::Router;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let router = Router::new();
//! router.get("/pets/{id:^[0-9]+$}", "get_pet")?;
//! router.post("/pets", "add_pet")?;
//!
//! if let Some(route_match) = router.route(&Method::GET, "/pets/123") {
//!     println!("Handler: {}", route_match.handler());
//!     println!("Pet id: {}", route_match.param("id"));
//! }
//! # Ok(())
//! # }
//! ```

mod core;

pub use core::{Route, RouteMatch, Router};
