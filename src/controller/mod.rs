//! HTTP handlers.
//!
//! Handlers translate extractor values into service calls and service results
//! into responses. Authentication is per-handler: protected routes call
//! [`util::authenticate`] on the session cookie before touching a service.

pub mod application;
pub mod auth;
pub mod hostel;
pub mod notification;
pub mod room;
pub mod util;
