use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ports::catalog_source::{CatalogSource, Result, SeedData};

/// 初期データファイルの読み込みエラー
#[derive(Debug, Error)]
pub enum SeedFileError {
    #[error("failed to open seed file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// JSONファイルから初期データを読み込むアダプター
///
/// 形式は`SeedData`のシリアライズ形式と同じ（`books`, `movies`, `customers`）。
#[derive(Debug, Clone)]
pub struct JsonFileSeed {
    path: PathBuf,
}

impl JsonFileSeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSeed {
    fn load(&self) -> Result<SeedData> {
        let file = File::open(&self.path).map_err(|source| SeedFileError::Io {
            path: self.path.clone(),
            source,
        })?;

        let seed: SeedData =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| SeedFileError::Parse {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!(
            path = %self.path.display(),
            books = seed.books.len(),
            movies = seed.movies.len(),
            customers = seed.customers.len(),
            "seed file loaded"
        );
        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SEED: &str = r#"{
        "books": [
            { "title": "Hard Times", "author": "Charles Dickens", "year": "1854" }
        ],
        "movies": [
            { "title": "Jackie Brown", "year": "1997", "director": "Quentin Tarantino", "rating": 7 },
            { "title": "Death Proof", "year": "2007", "director": "Quentin Tarantino" }
        ],
        "customers": [
            {
                "first_name": "Charles",
                "last_name": "Dickens",
                "email_address": "charles@example.com",
                "password": "Password1",
                "library_number": "123-4567",
                "phone_number": "07712345678"
            }
        ]
    }"#;

    #[test]
    fn test_load_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEED.as_bytes()).unwrap();

        let seed = JsonFileSeed::new(file.path()).load().unwrap();

        assert_eq!(seed.books[0].title, "Hard Times");
        assert_eq!(seed.movies[1].rating, None);
        assert_eq!(seed.customers[0].phone_number(), Some("07712345678"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileSeed::new(dir.path().join("missing.json"))
            .load()
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SeedFileError>(),
            Some(SeedFileError::Io { .. })
        ));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ \"books\": [").unwrap();

        let err = JsonFileSeed::new(file.path()).load().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SeedFileError>(),
            Some(SeedFileError::Parse { .. })
        ));
    }

    #[test]
    fn test_empty_library_number_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEED.replace("123-4567", "").as_bytes()).unwrap();

        assert!(JsonFileSeed::new(file.path()).load().is_err());
    }
}
