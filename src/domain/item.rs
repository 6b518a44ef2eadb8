use super::{Customer, ItemStateError, Title, Year};

// ============================================================================
// 貸出状態
// ============================================================================

/// 資料の貸出状態
///
/// 状態遷移：
/// - `Available` --checkout(borrower)--> `CheckedOut(borrower)`
/// - `CheckedOut(_)` --return--> `Available`
///
/// 貸出中は必ず借り手が1人存在する（型で保証）。終端状態はない。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckoutState {
    #[default]
    Available,
    CheckedOut(Customer),
}

impl CheckoutState {
    pub fn is_available(&self) -> bool {
        matches!(self, CheckoutState::Available)
    }

    pub fn borrower(&self) -> Option<&Customer> {
        match self {
            CheckoutState::Available => None,
            CheckoutState::CheckedOut(borrower) => Some(borrower),
        }
    }

    /// Available → CheckedOut
    fn checkout(&mut self, borrower: Customer) -> Result<(), ItemStateError> {
        if !self.is_available() {
            return Err(ItemStateError::NotAvailable);
        }
        *self = CheckoutState::CheckedOut(borrower);
        Ok(())
    }

    /// CheckedOut → Available。直前の借り手を返す。
    fn check_in(&mut self) -> Result<Customer, ItemStateError> {
        match std::mem::take(self) {
            CheckoutState::CheckedOut(borrower) => Ok(borrower),
            CheckoutState::Available => Err(ItemStateError::NotCheckedOut),
        }
    }
}

// ============================================================================
// 貸出可能な資料の契約
// ============================================================================

/// 貸出・返却できる資料が満たすべき契約
///
/// 実装側はタイトルと状態へのアクセスだけを提供し、
/// 遷移ルールはデフォルト実装（`CheckoutState`）に任せる。
pub trait CheckoutableItem {
    fn title(&self) -> &Title;

    fn checkout_state(&self) -> &CheckoutState;

    fn checkout_state_mut(&mut self) -> &mut CheckoutState;

    fn is_available(&self) -> bool {
        self.checkout_state().is_available()
    }

    fn is_checked_out(&self) -> bool {
        !self.is_available()
    }

    /// 借り手を返す
    ///
    /// # エラー
    /// 貸出中でなければ`ItemStateError::NotCheckedOut`
    fn checked_out_by(&self) -> Result<&Customer, ItemStateError> {
        self.checkout_state()
            .borrower()
            .ok_or(ItemStateError::NotCheckedOut)
    }

    /// 貸し出す
    ///
    /// # エラー
    /// 既に貸出中なら`ItemStateError::NotAvailable`（状態は変わらない）
    fn checkout(&mut self, borrower: Customer) -> Result<(), ItemStateError> {
        self.checkout_state_mut().checkout(borrower)
    }

    /// 返却する
    ///
    /// # エラー
    /// 貸出中でなければ`ItemStateError::NotCheckedOut`
    fn return_item(&mut self) -> Result<Customer, ItemStateError> {
        self.checkout_state_mut().check_in()
    }
}

/// カタログの一種類（本、映画など）としての表示情報
pub trait CatalogEntry: CheckoutableItem {
    /// 種類名（コマンド名に使う。例: `Book` → `List Books`）
    const KIND: &'static str;

    /// 一覧表示のヘッダ行
    const HEADERS: &'static str;

    /// 一覧表示の1行
    fn row(&self) -> String;
}

// ============================================================================
// 共通フィールド
// ============================================================================

/// すべての資料で共有されるコアデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCore {
    pub title: Title,
    pub year: Year,
    pub state: CheckoutState,
}

impl ItemCore {
    pub fn new(title: Title, year: Year) -> Self {
        Self {
            title,
            year,
            state: CheckoutState::Available,
        }
    }
}
