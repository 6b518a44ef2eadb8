use crate::domain::{Customer, LibraryNumber};
use crate::ports::catalog_source::{BookSeed, CatalogSource, MovieSeed, Result, SeedData};

/// 組み込みのカタログ
///
/// `--seed`が指定されない場合に使われる固定データ。
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSeed;

impl BuiltinSeed {
    pub fn new() -> Self {
        Self
    }
}

fn book(title: &str, author: &str, year: &str) -> BookSeed {
    BookSeed {
        title: title.to_string(),
        author: author.to_string(),
        year: year.to_string(),
    }
}

fn movie(title: &str, year: &str, director: &str, rating: Option<u8>) -> MovieSeed {
    MovieSeed {
        title: title.to_string(),
        year: year.to_string(),
        director: director.to_string(),
        rating,
    }
}

impl CatalogSource for BuiltinSeed {
    fn load(&self) -> Result<SeedData> {
        let customers = vec![
            Customer::new(
                "Charles",
                "Dickens",
                "charles@example.com",
                "Password1",
                LibraryNumber::new("123-4567")?,
            )?,
            Customer::new(
                "Quentin",
                "Tarantino",
                "quentin@example.com",
                "Password2",
                LibraryNumber::new("234-5678")?,
            )?,
        ];

        Ok(SeedData {
            books: vec![
                book("Great Expectations", "Charles Dickens", "1860"),
                book("The Pickwick Papers", "Charles Dickens", "1837"),
                book("Bleak House", "Charles Dickens", "1853"),
            ],
            movies: vec![
                movie("Pulp Fiction", "1994", "Quentin Tarantino", Some(9)),
                movie("Reservoir Dogs", "1992", "Quentin Tarantino", Some(8)),
                movie("Kill Bill", "2003", "Quentin Tarantino", None),
            ],
            customers,
        })
    }
}
