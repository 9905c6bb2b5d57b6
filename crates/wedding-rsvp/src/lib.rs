//! Core library for the wedding RSVP service.
//!
//! The interesting logic lives under [`rsvp`]: the guest roster matcher, the
//! submission service with its mail notifications, the HTTP router, and the
//! client flow state machine. `config`, `error`, and `telemetry` carry the
//! service plumbing.

pub mod config;
pub mod error;
pub mod rsvp;
pub mod telemetry;
