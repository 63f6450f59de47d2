//! In-memory repository implementations backed by HashMaps.

pub mod room;
pub mod session;

pub use room::InMemoryRoomRepository;
pub use session::InMemorySessionRegistry;
