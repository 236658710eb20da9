use crate::error::DetectorError;
use crate::similarity::LanguageScore;
use log::info;
use serde::Serialize;
use std::io;
use std::path::Path;

/// Ranked matches for one query.
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub query: String,
    pub ranking: Vec<LanguageScore>,
}

#[derive(Serialize)]
struct ExportRow<'a> {
    query: &'a str,
    rank: usize,
    label: &'a str,
    score: f64,
}

/// Write one CSV row per (query, ranked language) with a header line.
pub fn write_results<W: io::Write>(
    writer: W,
    results: &[QueryResult],
) -> Result<(), DetectorError> {
    let mut writer = csv::Writer::from_writer(writer);
    write_rows(&mut writer, results)
}

pub fn export_to_path(path: &Path, results: &[QueryResult]) -> Result<(), DetectorError> {
    let mut writer = csv::Writer::from_path(path)?;
    write_rows(&mut writer, results)?;
    info!("Exported {} query results to {}", results.len(), path.display());
    Ok(())
}

fn write_rows<W: io::Write>(
    writer: &mut csv::Writer<W>,
    results: &[QueryResult],
) -> Result<(), DetectorError> {
    for result in results {
        for (i, entry) in result.ranking.iter().enumerate() {
            writer.serialize(ExportRow {
                query: &result.query,
                rank: i + 1,
                label: &entry.label,
                score: entry.score,
            })?;
        }
    }

    writer.flush()?;
    Ok(())
}
