mod datetime;
mod media_types;

pub use datetime::system_time_to_local;
pub use media_types::{MEDIA_EXTENSIONS, kind_for_extension};
