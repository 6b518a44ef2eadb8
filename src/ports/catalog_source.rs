use serde::{Deserialize, Serialize};

use crate::domain::Customer;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 本の初期データ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSeed {
    pub title: String,
    pub author: String,
    pub year: String,
}

/// 映画の初期データ（評価は任意）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSeed {
    pub title: String,
    pub year: String,
    pub director: String,
    #[serde(default)]
    pub rating: Option<u8>,
}

/// 起動時に一度だけ読み込まれるカタログと会員の初期データ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    pub books: Vec<BookSeed>,
    pub movies: Vec<MovieSeed>,
    pub customers: Vec<Customer>,
}

/// 初期データの供給元ポート
///
/// 組み込みデータ、JSONファイルなどの実装を差し替えられるようにする。
pub trait CatalogSource {
    fn load(&self) -> Result<SeedData>;
}
