use serde::Deserialize;
use std::io::Read;
use thiserror::Error;

use crate::models::{NewWorker, WorkerType};

/// Errors that can occur while reading an import file
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),
}

/// One row of a worker import file
#[derive(Debug, Clone, Deserialize)]
pub struct WorkerRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Telephone", default)]
    pub telephone: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

impl From<WorkerRow> for NewWorker {
    fn from(row: WorkerRow) -> Self {
        NewWorker {
            name: row.name,
            title: row.title,
            telephone: row.telephone,
            lat: row.latitude,
            long: row.longitude,
            worker_type: WorkerType::default(),
        }
    }
}

/// Read worker rows (`Name, Title, Telephone, Latitude, Longitude`)
///
/// The first malformed row fails the whole read.
pub fn read_worker_rows<R: Read>(reader: R) -> Result<Vec<NewWorker>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut workers = Vec::new();
    for row in csv_reader.deserialize() {
        let row: WorkerRow = row?;
        workers.push(row.into());
    }
    Ok(workers)
}

/// Read the non-empty values of the `Name` column
///
/// Values are kept verbatim; worker names are matched exactly.
pub fn read_names<R: Read>(reader: R) -> Result<Vec<String>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let column = csv_reader
        .headers()?
        .iter()
        .position(|h| h == "Name")
        .ok_or_else(|| ImportError::MissingColumn("Name".to_string()))?;

    let mut names = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if let Some(name) = record.get(column).filter(|n| !n.is_empty()) {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_worker_rows() {
        let data = "Name,Title,Telephone,Latitude,Longitude\n\
                    Jane Smith,Carer,07700900123,53.48,-2.24\n\
                    John Doe, Nurse ,01612345678,51.5,-0.12\n";

        let workers = read_worker_rows(data.as_bytes()).unwrap();
        assert_eq!(workers.len(), 2);
        assert_eq!(workers[0].name, "Jane Smith");
        assert_eq!(workers[0].telephone, "07700900123");
        assert_eq!(workers[1].title, "Nurse");
        assert_eq!(workers[1].long, -0.12);
        assert_eq!(workers[1].worker_type, WorkerType::Worker);
    }

    #[test]
    fn test_read_worker_rows_bad_latitude() {
        let data = "Name,Title,Telephone,Latitude,Longitude\nJane,Carer,1,north,-2.24\n";
        assert!(matches!(read_worker_rows(data.as_bytes()), Err(ImportError::CsvError(_))));
    }

    #[test]
    fn test_read_names() {
        let data = "Id, Name \n1,Jane Smith\n2,\n3, John Doe \n";
        let names = read_names(data.as_bytes()).unwrap();
        assert_eq!(names, vec!["Jane Smith".to_string(), " John Doe ".to_string()]);
    }

    #[test]
    fn test_read_names_missing_column() {
        let data = "Id,Surname\n1,Smith\n";
        assert!(matches!(read_names(data.as_bytes()), Err(ImportError::MissingColumn(_))));
    }
}
