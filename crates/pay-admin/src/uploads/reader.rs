use csv::{ReaderBuilder, StringRecordsIntoIter, Trim};

/// Headerless reader over uploaded text.
///
/// Accepts `\r\n`, `\r` and `\n` line endings and skips empty lines. Fields are
/// split on every comma; double quotes are ordinary characters. Rows may have
/// differing field counts; callers decide what shape is acceptable.
pub(super) fn rows(content: &str) -> StringRecordsIntoIter<&[u8]> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(content.as_bytes())
        .into_records()
}
