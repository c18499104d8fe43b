//! Code Tracker - mobile verification codes with status lookup.
//!
//! A caller submits a mobile number and gets back a short code (e.g. `ABC123`).
//! The code can later be looked up to see the request's current status, which
//! privileged callers move along through the admin endpoints.

pub mod api;
pub mod codes;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod lookup;
pub mod mobile;
pub mod session;

pub use config::Config;
pub use error::TrackerError;
pub use lifecycle::{submit, Submission};
pub use lookup::{lookup, LookupOutcome};
pub use session::AuthSession;
