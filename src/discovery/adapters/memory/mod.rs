//! In-memory adapters for the agent discovery ports.

mod disco;
mod handlers;
mod router;
mod session;

pub use disco::InMemoryDiscoService;
pub use handlers::InMemoryHandlerRegistry;
pub use router::InMemoryIqRouter;
pub use session::InMemorySessionRegistry;
