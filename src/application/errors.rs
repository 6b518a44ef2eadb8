use thiserror::Error;

use crate::domain::{LibraryNumber, Title, ValidationError};

/// カタログ操作のエラー
///
/// すべて回復可能。呼び出し側は種類ごとに固定メッセージを表示して処理を続ける。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// 資料が台帳に存在しない（未知のタイトル、他の台帳の参照など）
    #[error("{kind} not found")]
    NotFound { kind: &'static str },

    /// 既に貸出中の資料を貸し出そうとした
    #[error("{kind} '{title}' is not available")]
    NotAvailable { kind: &'static str, title: Title },

    /// 貸出されていない資料を返却しようとした
    #[error("{kind} '{title}' is not checked out")]
    NotCheckedOut { kind: &'static str, title: Title },

    /// 図書館番号が未登録、またはパスワード不一致
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// 現在のログイン状態ではこの操作を実行できない
    #[error("Command not permitted in the current login state")]
    AuthRequired,

    /// 登録されていないコマンド
    #[error("Unknown command: {0:?}")]
    UnknownCommand(String),
}

/// 台帳構築時のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// 資料が1件もない
    #[error("{kind} registry cannot be empty")]
    Empty { kind: &'static str },

    /// 同じタイトルの資料が複数ある
    #[error("duplicate {kind} title: {title}")]
    DuplicateTitle { kind: &'static str, title: Title },

    /// 同じ図書館番号の会員が複数いる
    #[error("duplicate library number: {library_number}")]
    DuplicateLibraryNumber { library_number: LibraryNumber },
}

/// 起動時（初期データからの構築）のエラー
#[derive(Debug, Error)]
pub enum SetupError {
    /// 初期データの供給元のエラー
    #[error("failed to load catalog data")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// 初期データの項目が不正
    #[error("invalid catalog entry: {0}")]
    InvalidEntry(#[from] ValidationError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CatalogError>;
