use std::{io::Read, path::Path};

use tracing::info;

use crate::{error::PipelineError, models::MovieRecord};

/// Columns the dataset must carry. Anything extra is ignored; anything
/// missing is a fatal load error.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "Title",
    "Cast",
    "Genre",
    "Director",
    "Year",
    "Duration (min)",
    "Rating",
    "Metascore",
    "Description",
    "Review",
];

/// Loads the dataset and keeps only records whose Cast column contains the
/// subject's name. Rows with an empty Cast cell are dropped outright.
pub fn load_filtered(path: &Path, subject: &str) -> Result<Vec<MovieRecord>, PipelineError> {
    let reader = csv::Reader::from_path(path).map_err(|source| PipelineError::DataLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_records(reader, path)?;
    let total = records.len();
    let filtered = filter_by_cast(records, subject);
    info!(
        "Loaded {} rows from {}, {} feature \"{}\"",
        total,
        path.display(),
        filtered.len(),
        subject
    );
    Ok(filtered)
}

fn read_records<R: Read>(
    mut reader: csv::Reader<R>,
    path: &Path,
) -> Result<Vec<MovieRecord>, PipelineError> {
    let headers = reader
        .headers()
        .map_err(|source| PipelineError::DataLoad {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(PipelineError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: MovieRecord = row.map_err(|source| PipelineError::DataLoad {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

fn filter_by_cast(records: Vec<MovieRecord>, subject: &str) -> Vec<MovieRecord> {
    records
        .into_iter()
        .filter(|r| r.cast.as_deref().is_some_and(|cast| cast.contains(subject)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{filter_by_cast, read_records};
    use crate::error::PipelineError;

    const HEADER: &str =
        "Title,Cast,Genre,Director,Year,Duration (min),Rating,Metascore,Description,Review";

    fn parse(csv_text: &str) -> Result<Vec<crate::models::MovieRecord>, PipelineError> {
        let reader = csv::Reader::from_reader(csv_text.as_bytes());
        read_records(reader, Path::new("test.csv"))
    }

    #[test]
    fn missing_column_is_a_typed_error() {
        let reader =
            csv::Reader::from_reader("Title,Cast,Genre\nA,Nicolas Cage,Drama\n".as_bytes());
        let err = read_records(reader, Path::new("test.csv")).unwrap_err();
        match err {
            PipelineError::MissingColumn { column, .. } => assert_eq!(column, "Director"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn empty_cells_deserialize_to_none() {
        let rows = parse(&format!(
            "{HEADER}\nFace/Off,\"John Travolta, Nicolas Cage\",\"Action, Crime\",John Woo,1997,138,7.3,,desc,rev\n"
        ))
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].year, Some(1997));
        assert!(rows[0].metascore.is_none());
    }

    #[test]
    fn cast_filter_is_substring_and_drops_null_cast() {
        let rows = parse(&format!(
            "{HEADER}\n\
             A,\"Nicolas Cage, Someone Else\",Drama,D,1999,100,6.0,50,d,r\n\
             B,\"Someone Else\",Drama,D,1999,100,6.0,50,d,r\n\
             C,,Drama,D,1999,100,6.0,50,d,r\n"
        ))
        .unwrap();
        let kept = filter_by_cast(rows, "Nicolas Cage");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title.as_deref(), Some("A"));
    }

    #[test]
    fn cast_match_is_case_sensitive() {
        let rows = parse(&format!(
            "{HEADER}\nA,\"nicolas cage\",Drama,D,1999,100,6.0,50,d,r\n"
        ))
        .unwrap();
        assert!(filter_by_cast(rows, "Nicolas Cage").is_empty());
    }
}
