mod duplicate;
mod filters;
mod media_file;

pub use duplicate::{DuplicatePair, Fingerprint};
pub use filters::{SortKey, SortOrder, filter_entries, sort_entries};
pub use media_file::{MediaEntry, MediaKind};
