use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::{Result, WordSearchError};

/// Reads and deserializes a JSON file
pub fn load_json<T: DeserializeOwned, TPath: AsRef<Path>>(path: TPath) -> Result<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| WordSearchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| WordSearchError::Json {
        path: path.to_path_buf(),
        source,
    })
}
