use chrono::{DateTime, Local, NaiveDateTime, ParseResult};

/// Second-precision local stamp used by every profile rendering.
pub const RECORD_STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub trait RecordStampExt {
    fn to_record_stamp(&self) -> String;
}

impl RecordStampExt for DateTime<Local> {
    fn to_record_stamp(&self) -> String {
        self.format(RECORD_STAMP_FORMAT).to_string()
    }
}

/// Inverse of [`RecordStampExt::to_record_stamp`]; the zone is not recorded.
pub fn parse_record_stamp(raw: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, RECORD_STAMP_FORMAT)
}
