//! Storage layer for the persisted wallet-session flag.
//!
//! The wallet session consults this layer once on start-up to decide whether
//! to show the signed-in UI, and writes to it on every connect and disconnect.
//!
//! # Modules
//!
//! - `backend`: Store trait abstraction
//! - `json`: JSON file implementation
//! - `memory`: In-process implementation
//! - `models`: Storage record types separate from live state

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::SessionStore;
pub use json::JsonSessionStore;
pub use memory::MemorySessionStore;
pub use models::SessionRecord;
