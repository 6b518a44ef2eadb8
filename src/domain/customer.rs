use serde::{Deserialize, Serialize};

use super::value_objects::ensure_present;
use super::{LibraryNumber, ValidationError};

/// 会員 - ログインし、資料を借りる主体
///
/// 起動時に一度だけ読み込まれ、以降は変更されない。
/// 同一性は全フィールドの一致で判定する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    first_name: String,
    last_name: String,
    email_address: String,
    password: String,
    library_number: LibraryNumber,
    #[serde(default)]
    phone_number: Option<String>,
}

impl Customer {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email_address: impl Into<String>,
        password: impl Into<String>,
        library_number: LibraryNumber,
    ) -> Result<Self, ValidationError> {
        let customer = Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email_address: email_address.into(),
            password: password.into(),
            library_number,
            phone_number: None,
        };
        customer.validate()?;
        Ok(customer)
    }

    /// 電話番号を設定する
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into()).filter(|p| !p.is_empty());
        self
    }

    /// 必須項目の検証（デシリアライズ後にも呼ぶ）
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            (&self.first_name, "first name"),
            (&self.last_name, "last name"),
            (&self.email_address, "email address"),
            (&self.password, "password"),
        ];
        for (value, field) in fields {
            ensure_present(value, field)?;
        }
        Ok(())
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    pub fn library_number(&self) -> &LibraryNumber {
        &self.library_number
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    /// 入力されたパスワードが一致するか
    pub fn verify_password(&self, entered: &str) -> bool {
        self.password == entered
    }

    /// 「My Details」で表示するプロフィール
    pub fn details(&self) -> String {
        let mut details = format!(
            "Name: {} {}\nEmail Address: {}",
            self.first_name, self.last_name, self.email_address
        );
        if let Some(phone) = &self.phone_number {
            details.push_str("\nPhone: ");
            details.push_str(phone);
        }
        details
    }
}
