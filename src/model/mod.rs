//! Server application models and type definitions.
//!
//! Application state, session token claims, and the request/response DTOs
//! that shape persisted entities into the wire format.

pub mod app;
pub mod dto;
pub mod token;
