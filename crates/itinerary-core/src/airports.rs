// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Columns every airport lookup must carry, in any order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "name",
    "iso_country",
    "municipality",
    "icao_code",
    "iata_code",
    "coordinates",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct AirportRecord {
    pub name: String,
    pub iso_country: String,
    pub municipality: String,
    pub icao_code: String,
    pub iata_code: String,
    pub coordinates: String,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("Not enough columns (found {found}, need {})", REQUIRED_COLUMNS.len())]
    NotEnoughColumns { found: usize },
    #[error("Empty column")]
    EmptyColumn { position: usize },
    #[error("Missing column '{0}'")]
    MissingColumn(&'static str),
    /// `line` is the line in the file, so the header is line 1 and the
    /// first data row is line 2.
    #[error("Empty field on line {line}")]
    EmptyField { line: u64 },
}

/// Reads an airport lookup CSV from disk.
pub fn load_airports_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<AirportRecord>, LoadError> {
    let file = File::open(path)?;
    load_airports(file)
}

/// Reads an airport lookup CSV. The first row is a header naming the columns;
/// columns are matched by name so their order does not matter and extra
/// columns are ignored. Every field of every data row must be non-blank;
/// a blank field is reported with its file line number, header included.
pub fn load_airports<R: Read>(reader: R) -> Result<Vec<AirportRecord>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    if headers.len() < REQUIRED_COLUMNS.len() {
        return Err(LoadError::NotEnoughColumns {
            found: headers.len(),
        });
    }
    if let Some(position) = headers.iter().position(|column| column.is_empty()) {
        return Err(LoadError::EmptyColumn { position });
    }
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|column| column == required) {
            return Err(LoadError::MissingColumn(required));
        }
    }

    let mut airports = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.iter().any(|field| field.trim().is_empty()) {
            return Err(LoadError::EmptyField { line });
        }

        airports.push(record.deserialize::<AirportRecord>(Some(&headers))?);
    }

    log::debug!("Loaded airport lookup — rows={}", airports.len());
    Ok(airports)
}

/// Read-only airport lookup keyed by IATA and ICAO code.
///
/// Rows keep their original order. When several rows share a code the
/// earliest row wins, exactly as a front-to-back scan would.
#[derive(Debug, Clone, Default)]
pub struct AirportIndex {
    records: Vec<AirportRecord>,
    by_iata: HashMap<String, usize>,
    by_icao: HashMap<String, usize>,
}

impl AirportIndex {
    pub fn new(records: Vec<AirportRecord>) -> Self {
        let mut by_iata = HashMap::with_capacity(records.len());
        let mut by_icao = HashMap::with_capacity(records.len());

        for (i, record) in records.iter().enumerate() {
            by_iata.entry(record.iata_code.clone()).or_insert(i);
            by_icao.entry(record.icao_code.clone()).or_insert(i);
        }

        Self {
            records,
            by_iata,
            by_icao,
        }
    }

    pub fn records(&self) -> &[AirportRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_iata(&self, code: &str) -> Option<&AirportRecord> {
        self.by_iata.get(code).map(|&i| &self.records[i])
    }

    pub fn find_by_icao(&self, code: &str) -> Option<&AirportRecord> {
        self.by_icao.get(code).map(|&i| &self.records[i])
    }

    /// Municipality markers may carry either code length, so both keys are
    /// tried and the earlier row wins.
    pub fn find_by_municipality_key(&self, code: &str) -> Option<&AirportRecord> {
        let icao = self.by_icao.get(code).copied();
        let iata = self.by_iata.get(code).copied();
        let position = match (icao, iata) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        position.map(|i| &self.records[i])
    }
}

impl From<Vec<AirportRecord>> for AirportIndex {
    fn from(records: Vec<AirportRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<AirportRecord> for AirportIndex {
    fn from_iter<I: IntoIterator<Item = AirportRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn airport(name: &str, municipality: &str, icao: &str, iata: &str) -> AirportRecord {
        AirportRecord {
            name: name.to_string(),
            iso_country: "GB".to_string(),
            municipality: municipality.to_string(),
            icao_code: icao.to_string(),
            iata_code: iata.to_string(),
            coordinates: "0.0, 0.0".to_string(),
        }
    }

    #[test]
    fn test_parse_lookup() {
        let data = "\
name,iso_country,municipality,icao_code,iata_code,coordinates
London Heathrow Airport,GB,London,EGLL,LHR,\"-0.461941, 51.4706\"
Manchester Airport,GB,Manchester,EGCC,MAN,\"-2.27495, 53.3537\"
";
        let airports = load_airports(Cursor::new(data)).unwrap();

        assert_eq!(airports.len(), 2);
        assert_eq!(airports[0].name, "London Heathrow Airport");
        assert_eq!(airports[0].icao_code, "EGLL");
        assert_eq!(airports[0].coordinates, "-0.461941, 51.4706");
        assert_eq!(airports[1].municipality, "Manchester");
    }

    #[test]
    fn test_columns_located_by_name() {
        let data = "\
coordinates,iata_code,icao_code,municipality,iso_country,name,type
\"1, 2\",LHR,EGLL,London,GB,Heathrow,large_airport
";
        let airports = load_airports(Cursor::new(data)).unwrap();

        assert_eq!(airports.len(), 1);
        assert_eq!(airports[0].name, "Heathrow");
        assert_eq!(airports[0].iata_code, "LHR");
        assert_eq!(airports[0].coordinates, "1, 2");
    }

    #[test]
    fn test_empty_source_is_empty_dataset() {
        let airports = load_airports(Cursor::new("")).unwrap();
        assert!(airports.is_empty());
    }

    #[test]
    fn test_rejects_short_header() {
        let err = load_airports(Cursor::new("name,iso_country\nA,B\n")).unwrap_err();
        assert!(matches!(err, LoadError::NotEnoughColumns { found: 2 }));
    }

    #[test]
    fn test_rejects_empty_header_column() {
        let data = "name,iso_country,,icao_code,iata_code,coordinates\n";
        let err = load_airports(Cursor::new(data)).unwrap_err();
        assert!(matches!(err, LoadError::EmptyColumn { position: 2 }));
    }

    #[test]
    fn test_rejects_missing_column() {
        let data = "name,iso_country,city,icao_code,iata_code,coordinates\n";
        let err = load_airports(Cursor::new(data)).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("municipality")));
    }

    #[test]
    fn test_rejects_blank_field_with_line() {
        let data = "\
name,iso_country,municipality,icao_code,iata_code,coordinates
Heathrow,GB,London,EGLL,LHR,\"1, 2\"
Nowhere,GB,   ,XXXX,XXX,\"1, 2\"
";
        let err = load_airports(Cursor::new(data)).unwrap_err();
        // Header is line 1, so the second data row is line 3.
        assert!(matches!(err, LoadError::EmptyField { line: 3 }));
        assert_eq!(err.to_string(), "Empty field on line 3");
    }

    #[test]
    fn test_blank_first_data_row_is_line_two() {
        let data = "\
name,iso_country,municipality,icao_code,iata_code,coordinates
,GB,London,EGLL,LHR,\"1, 2\"
";
        let err = load_airports(Cursor::new(data)).unwrap_err();
        assert!(matches!(err, LoadError::EmptyField { line: 2 }));
    }

    #[test]
    fn test_rejects_ragged_row() {
        let data = "\
name,iso_country,municipality,icao_code,iata_code,coordinates
Heathrow,GB,London,EGLL
";
        let err = load_airports(Cursor::new(data)).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn test_lookups() {
        let index = AirportIndex::new(vec![
            airport("Heathrow", "London", "EGLL", "LHR"),
            airport("Gatwick", "Crawley", "EGKK", "LGW"),
        ]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.find_by_iata("LGW").unwrap().name, "Gatwick");
        assert_eq!(index.find_by_icao("EGLL").unwrap().name, "Heathrow");
        assert!(index.find_by_iata("EGLL").is_none());
        assert!(index.find_by_icao("LHR").is_none());
        assert_eq!(
            index.find_by_municipality_key("EGKK").unwrap().municipality,
            "Crawley"
        );
        assert_eq!(
            index.find_by_municipality_key("LHR").unwrap().municipality,
            "London"
        );
        assert!(index.find_by_municipality_key("ZZZ").is_none());
    }

    #[test]
    fn test_first_row_wins_on_duplicate_codes() {
        let index = AirportIndex::new(vec![
            airport("First", "A", "AAAA", "DUP"),
            airport("Second", "B", "BBBB", "DUP"),
        ]);
        assert_eq!(index.find_by_iata("DUP").unwrap().name, "First");
    }

    #[test]
    fn test_municipality_key_prefers_earlier_row_across_code_kinds() {
        // Row 0 has IATA "ABC", row 1 has nothing matching, row 2 has ICAO "ABC".
        let index = AirportIndex::new(vec![
            airport("Iata Match", "Early Town", "ZZZZ", "ABC"),
            airport("Other", "Other Town", "YYYY", "YYY"),
            airport("Icao Match", "Late Town", "ABC", "XXX"),
        ]);
        assert_eq!(
            index.find_by_municipality_key("ABC").unwrap().municipality,
            "Early Town"
        );
    }
}
