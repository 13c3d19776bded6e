//! Copydesk evaluates editorial submissions before publication.
//!
//! The crate exposes two review operations: lexical quality scoring
//! ([`workflows::review`]) and originality checking against an external
//! search collaborator ([`workflows::originality`]). Both are wired to
//! axum routers here so deployable services only add operational routes.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
