//! Shared greeting function primitives.
//!
//! This crate owns the response contract returned to API Gateway. It excludes
//! the Lambda runtime and logging concerns, which live in `hola_lambda`.

pub mod contract;
