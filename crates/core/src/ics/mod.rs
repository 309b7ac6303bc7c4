mod builder;
mod escape;
mod filename;

pub use builder::{
    build_ics, format_ics_timestamp, IcsDocumentBuilder, DEFAULT_CALENDAR_NAME, PRODUCT_ID,
};
pub use escape::ics_escape;
pub use filename::ics_filename;

/// MIME type for `.ics` response bodies.
pub const ICS_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";
