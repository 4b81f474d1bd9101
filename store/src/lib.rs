//! Storage abstraction for voting-session state.
//!
//! Every storage backend implements [`SessionStore`]; the session crate
//! depends only on the trait. Values are opaque byte blobs — the session
//! crate owns the serialization format. [`MemoryStore`] is the provided
//! backend.

pub mod error;
pub mod memory;
pub mod session;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use session::SessionStore;
