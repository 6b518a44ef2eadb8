/// 値オブジェクト・エンティティ生成時の検証エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 必須項目が空
    EmptyField(&'static str),
    /// 評価が1〜10の範囲外
    RatingOutOfRange(u8),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyField(field) => write!(f, "{field} cannot be empty"),
            ValidationError::RatingOutOfRange(value) => {
                write!(f, "rating must be between 1 and 10 (got {value})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// 貸出状態の遷移エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStateError {
    /// 既に貸出中
    NotAvailable,
    /// 貸出されていない
    NotCheckedOut,
}
