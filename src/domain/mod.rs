//! Domain Layer
//!
//! Pure types and rules with no I/O: assets, symbols, content hashes and the
//! event port the driver reports through.

pub mod asset;
pub mod events;
pub mod hash;
pub mod symbol;

pub use asset::{Asset, AssetEntry, DiscoveredFile};
pub use events::{GenerateEvent, GenerateEventSink, NoopEventSink};
pub use hash::ContentHash;
pub use symbol::{derive_symbol, find_collision, Collision, LEN_SUFFIX, SYMBOL_PREFIX};
