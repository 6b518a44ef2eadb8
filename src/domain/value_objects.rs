use serde::{Deserialize, Serialize};

use super::ValidationError;

/// 空白のみの文字列を拒否する共通チェック
pub(crate) fn ensure_present(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

/// 前後の空白を除いた値を返す。空なら拒否。
fn non_empty(value: String, field: &'static str) -> Result<String, ValidationError> {
    ensure_present(&value, field)?;
    Ok(value.trim().to_string())
}

/// タイトル - 台帳内の自然キー
///
/// 同じ種類の台帳内で一意。並び順は辞書順（`Ord`）で、一覧表示の順序になる。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_empty(value.into(), "title").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Title {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Title> for String {
    fn from(title: Title) -> Self {
        title.0
    }
}

impl std::borrow::Borrow<str> for Title {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 発表年（表示用の文字列として保持する）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Year(String);

impl Year {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_empty(value.into(), "year").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Year {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for String {
    fn from(year: Year) -> Self {
        year.0
    }
}

/// 図書館番号 - ログインIDとして使う会員の識別子（例: `123-4567`）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LibraryNumber(String);

impl LibraryNumber {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_empty(value.into(), "library number").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LibraryNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LibraryNumber> for String {
    fn from(number: LibraryNumber) -> Self {
        number.0
    }
}

impl std::borrow::Borrow<str> for LibraryNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LibraryNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 映画の評価
///
/// 不変条件：1〜10の範囲
/// 型システムでこの制約を強制し、範囲外の値を作成できないようにする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::RatingOutOfRange(value));
        }
        Ok(Self(value))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}
