use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const INFO_FORMAT: &[FormatItem<'static>] = format_description!(
    "[weekday repr:short] [month repr:short] [day] [year] [hour]:[minute]:[second] GMT[offset_hour sign:mandatory][offset_minute]"
);

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Timestamp(pub OffsetDateTime);

impl Timestamp {
    pub fn now_utc() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub fn from(dt: OffsetDateTime) -> Self {
        Self(dt.to_offset(UtcOffset::UTC))
    }

    pub fn as_inner(&self) -> OffsetDateTime {
        self.0
    }

    /// Human readable rendering used by the `/info` page,
    /// e.g. `Fri Oct 16 2026 09:05:01 GMT+0000`.
    pub fn to_info_string(&self) -> String {
        self.0.format(INFO_FORMAT).unwrap_or_else(|_| self.0.to_string())
    }
}
