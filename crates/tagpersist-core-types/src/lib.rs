//! Core types shared across tagpersist facilities
//!
//! This crate provides the canonical field keys and event names used by the
//! structured logging macros and the error facility of `tagpersist-core`.

pub mod schema;
