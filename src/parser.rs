//! Tabular row codec
//!
//! Thin wrapper over the `csv` crate: decodes a menu document into rows of
//! cells and encodes rows back into document text. Quoting follows RFC 4180
//! (a doubled quote inside a quoted cell is a literal quote).

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};

use crate::error::MenuResult;

/// A decoded row of cells
pub type Row = Vec<String>;

const UTF8_BOM: char = '\u{feff}';

/// Decode document text into rows.
///
/// Rows may have different lengths. Blank lines are dropped. A record the
/// decoder cannot read ends the document rather than failing it, so a
/// damaged tail never hides the rows before it.
pub fn decode_rows(text: &str) -> Vec<Row> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        match record {
            Ok(record) => rows.push(record.iter().map(str::to_string).collect()),
            Err(e) => {
                tracing::warn!(error = %e, row = rows.len() + 1, "stopped decoding at unreadable row");
                break;
            }
        }
    }
    rows
}

/// Encode rows as document text, quoting cells only where needed
pub fn encode_rows<R, C>(rows: R) -> MenuResult<String>
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = C>,
    C: AsRef<[u8]>,
{
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// True when every cell is empty or whitespace
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}
