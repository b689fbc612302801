//! Load client cases from JSON case files

use super::ClientCase;
use crate::error::Result;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a single client case from a JSON file
pub fn load_case<P: AsRef<Path>>(path: P) -> Result<ClientCase> {
    let file = File::open(path)?;
    load_case_from_reader(BufReader::new(file))
}

/// Load a single client case from any reader
pub fn load_case_from_reader<R: std::io::Read>(reader: R) -> Result<ClientCase> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a JSON array of client cases
pub fn load_cases<P: AsRef<Path>>(path: P) -> Result<Vec<ClientCase>> {
    let file = File::open(path)?;
    load_cases_from_reader(BufReader::new(file))
}

/// Load a JSON array of client cases from any reader
pub fn load_cases_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<ClientCase>> {
    let cases: Vec<ClientCase> = serde_json::from_reader(reader)?;
    log::debug!("loaded {} client cases", cases.len());
    Ok(cases)
}
