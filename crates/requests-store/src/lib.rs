//! Store adapter for verification-code requests.
//!
//! The only component that talks to the hosted `requests` table. Backends:
//! - Supabase over its PostgREST interface
//! - an in-memory table for local runs and tests
//! - an unconfigured handle that fails every call without touching the network

mod error;
mod memory;
mod postgrest;
mod store;
mod types;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgrest::PostgrestStore;
pub use store::Store;
pub use types::*;
