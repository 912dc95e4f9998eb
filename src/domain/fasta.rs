use crate::domain::model::FastaRecord;
use crate::utils::error::{PipeError, Result};
use std::path::Path;

/// Parses `FASTA` text into records.
///
/// A `>` line starts a record and every following line up to the next header
/// is appended to its sequence. Blank lines are skipped. Headers without any
/// sequence are dropped. `source_name` only labels errors and log lines.
pub fn parse_fasta(source_name: &str, text: &str) -> Result<Vec<FastaRecord>> {
    let mut records = Vec::new();
    let mut current: Option<FastaRecord> = None;

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim_end();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                push_record(source_name, &mut records, record);
            }
            current = Some(FastaRecord {
                header: header.trim().to_string(),
                sequence: String::new(),
            });
        } else {
            match current.as_mut() {
                Some(record) => record.sequence.push_str(line.trim_start()),
                None => {
                    return Err(PipeError::InvalidFasta {
                        source_name: source_name.to_string(),
                        line: index + 1,
                        reason: "sequence data before first header".to_string(),
                    });
                }
            }
        }
    }

    if let Some(record) = current.take() {
        push_record(source_name, &mut records, record);
    }

    tracing::debug!("Parsed {} records from {}", records.len(), source_name);
    Ok(records)
}

fn push_record(source_name: &str, records: &mut Vec<FastaRecord>, record: FastaRecord) {
    if record.sequence.is_empty() {
        tracing::warn!(
            "⚠️ Skipping record '{}' in {}: empty sequence",
            record.header,
            source_name
        );
    } else {
        records.push(record);
    }
}

/// Reads and parses a `FASTA` file.
pub async fn read_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path).await?;
    parse_fasta(&path.display().to_string(), &text)
}
