//! AWS Lambda integration for the greeting function.
//!
//! This crate owns runtime integration details (the Lambda handler, logging
//! setup, and environment configuration). The response contract itself lives
//! in `hola_core`.

pub mod config;
pub mod handlers;
pub mod telemetry;
