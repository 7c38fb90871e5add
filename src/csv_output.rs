//! CSV serialization of post records.
//!
//! The header always lists the thirteen `PostRecord::FIELD_NAMES` columns,
//! even for an empty record list. `None` becomes an empty cell, so an
//! absent field and a present-but-empty field look the same in the output.

use std::io::Write;

use crate::error::Result;
use crate::result::PostRecord;

/// Download name used for CSV attachments.
pub const CSV_FILENAME: &str = "extracted_posts.csv";

/// Media type of the CSV output.
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// `Content-Disposition` value that makes browsers save the CSV.
pub const CSV_CONTENT_DISPOSITION: &str = "attachment; filename=extracted_posts.csv";

/// Write the header and one row per record to `writer`.
///
/// Rows end in CRLF and fields are quoted only when they contain a
/// delimiter, quote or line break.
pub fn write_csv<W: Write>(records: &[PostRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(PostRecord::FIELD_NAMES)?;
    for record in records {
        csv_writer.write_record(record.to_row())?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Serialize records to an in-memory CSV buffer.
pub fn to_csv_bytes(records: &[PostRecord]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    Ok(buffer)
}
