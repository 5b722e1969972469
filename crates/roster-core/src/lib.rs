pub mod bridge;
pub mod debounce;
pub mod session;
pub mod store;

pub use bridge::{CacheBridge, RemoteSource, SourceError};
pub use debounce::Debouncer;
pub use session::{PageView, Session, SessionConfig};
pub use store::RecordStore;
