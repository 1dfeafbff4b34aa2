//! CSV export
//!
//! Writes scored words as a two-column `Word,Score` table.

use crate::solver::SolveResult;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Column header row
pub const CSV_HEADER: &str = "Word,Score";

/// Quote a field if it contains a delimiter, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Write the scored words in result order
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_csv<W: Write>(result: &SolveResult, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for scored in &result.scored_words {
        writeln!(writer, "{},{}", csv_field(&scored.word), scored.score)?;
    }
    writer.flush()
}

/// Export the scored words to a CSV file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn export_csv<P: AsRef<Path>>(result: &SolveResult, path: P) -> io::Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(result, BufWriter::new(file))?;

    info!(
        "Wrote {} words to {}",
        result.scored_words.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;
    use tempfile::TempDir;

    #[test]
    fn csv_has_header_and_rows_in_score_order() {
        let result = solve(&["nice", "vice", "evil", "civic"], 'i', "cevnlb");

        let mut out = Vec::new();
        write_csv(&result, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Word,Score\ncivic,5\nnice,1\nvice,1\nevil,1\n");
    }

    #[test]
    fn csv_for_empty_result_is_header_only() {
        let result = SolveResult::default();

        let mut out = Vec::new();
        write_csv(&result, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Word,Score\n");
    }

    #[test]
    fn csv_field_quotes_special_characters() {
        assert_eq!(csv_field("nice"), "nice");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn export_csv_writes_file() {
        let result = solve(&["civic"], 'i', "cevnlb");
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("words.csv");

        export_csv(&result, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        assert_eq!(text, "Word,Score\ncivic,5\n");
    }
}
