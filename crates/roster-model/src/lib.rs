pub mod edit;
pub mod error;
pub mod query;
pub mod record;

pub use edit::EditBuffer;
pub use error::{Result, RosterError};
pub use query::{QueryState, SortOrder, WebsiteFilter};
pub use record::{RecordId, RecordPatch, UserRecord};
