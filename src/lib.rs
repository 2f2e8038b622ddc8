//! Hostel room allocation backend.
//!
//! This crate provides the complete backend for hostel room allocation: account
//! registration and login, room and hostel catalogues, room applications with an
//! admin-driven approval workflow, and notifications generated when an
//! application's status changes. HTTP routing is built with axum and documented
//! with utoipa; persistence goes through SeaORM repositories.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
