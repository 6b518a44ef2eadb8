use std::collections::HashMap;

use crate::domain::{Customer, LibraryNumber};

use super::errors::{CatalogError, RegistryError, Result};

/// ログイン状態の問い合わせ
///
/// コマンドの実行可否・表示可否の判定に使われる。
pub trait SecurityStatus {
    fn is_logged_in(&self) -> bool;
}

/// 認証セッション
///
/// 状態遷移：`LoggedOut`（初期） ⇄ `LoggedIn(customer)`
///
/// 同時にログインできるのは1人まで。会員表は構築時に渡され、以降は変更されない。
#[derive(Debug, Default)]
pub struct AuthSession {
    customers: HashMap<LibraryNumber, Customer>,
    current: Option<Customer>,
}

impl AuthSession {
    /// 会員表からセッションを作る（ログアウト状態）
    ///
    /// # エラー
    /// 図書館番号が重複していれば`DuplicateLibraryNumber`
    pub fn new(
        customers: impl IntoIterator<Item = Customer>,
    ) -> std::result::Result<Self, RegistryError> {
        let mut table = HashMap::new();
        for customer in customers {
            let library_number = customer.library_number().clone();
            if table.insert(library_number.clone(), customer).is_some() {
                return Err(RegistryError::DuplicateLibraryNumber { library_number });
            }
        }
        Ok(Self {
            customers: table,
            current: None,
        })
    }

    /// ログインする
    ///
    /// 失敗時は現在の状態を変更しない。
    ///
    /// # エラー
    /// 図書館番号が未登録、またはパスワード不一致なら`InvalidCredentials`
    pub fn login(&mut self, library_number: &str, password: &str) -> Result<&Customer> {
        let customer = self
            .customers
            .get(library_number)
            .filter(|customer| customer.verify_password(password))
            .ok_or_else(|| {
                tracing::warn!(library_number, "login rejected");
                CatalogError::InvalidCredentials
            })?;

        tracing::info!(library_number, "customer logged in");
        Ok(self.current.insert(customer.clone()))
    }

    /// ログアウトする。ログアウトした会員を返す。
    ///
    /// # エラー
    /// ログインしていなければ`AuthRequired`
    pub fn logout(&mut self) -> Result<Customer> {
        let customer = self.current.take().ok_or(CatalogError::AuthRequired)?;
        tracing::info!(library_number = %customer.library_number(), "customer logged out");
        Ok(customer)
    }

    /// ログイン中の会員
    ///
    /// # エラー
    /// ログインしていなければ`AuthRequired`
    pub fn current_principal(&self) -> Result<&Customer> {
        self.current.as_ref().ok_or(CatalogError::AuthRequired)
    }
}

impl SecurityStatus for AuthSession {
    fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }
}
