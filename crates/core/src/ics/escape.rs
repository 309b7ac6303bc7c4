/// Escapes a TEXT property value (RFC 5545 section 3.3.11).
///
/// Backslashes are escaped first so the backslashes inserted for `;`, `,`
/// and newlines are not escaped again. Apply exactly once per value.
pub fn ics_escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}
