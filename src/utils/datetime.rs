use std::time::SystemTime;

use chrono::{DateTime, Local};

#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn system_time_to_local(time: std::io::Result<SystemTime>) -> Option<DateTime<Local>> {
    time.ok().and_then(|t| {
        t.duration_since(SystemTime::UNIX_EPOCH)
            .ok()
            .and_then(|d| DateTime::from_timestamp(d.as_secs() as i64, d.subsec_nanos()))
            .map(|dt| dt.with_timezone(&Local))
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::io;
    use std::time::Duration;

    #[test]
    fn converts_a_known_timestamp() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000);
        let result = system_time_to_local(Ok(time)).unwrap();
        assert_eq!(result.timestamp(), 1_000_000_000);
    }

    #[test]
    fn io_error_yields_none() {
        let result = system_time_to_local(Err(io::Error::other("no mtime")));
        assert!(result.is_none());
    }

    #[test]
    fn pre_epoch_time_yields_none() {
        let time = SystemTime::UNIX_EPOCH - Duration::from_secs(1);
        assert!(system_time_to_local(Ok(time)).is_none());
    }
}
