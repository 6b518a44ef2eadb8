use crate::application::CatalogError;
use crate::application::dispatch::Reply;

pub const WELCOME: &str = "Welcome to Biblioteca!";
pub const MENU_HEADER: &str = "Please use one of the following options:";
pub const FAREWELL: &str = "Thank you for using Biblioteca App!";

/// コマンドの実行結果を表示用の行に変換する
pub fn reply_lines(reply: &Reply) -> Vec<String> {
    match reply {
        Reply::Items { headers, rows } => std::iter::once(headers.to_string())
            .chain(rows.iter().cloned())
            .collect(),
        Reply::CheckedOut { kind } => {
            vec![format!("Thank you! Enjoy the {}.", kind.to_lowercase())]
        }
        Reply::Returned { kind } => {
            vec![format!("Thank you for returning the {}.", kind.to_lowercase())]
        }
        Reply::LoggedIn => vec!["Login Successful!".to_string()],
        Reply::LoggedOut => vec!["Logout Successful!".to_string()],
        Reply::Details(details) => vec![details.clone()],
        Reply::Quit => vec![FAREWELL.to_string()],
    }
}

/// エラーの種類ごとの固定メッセージ
///
/// `NotFound`は貸出と返却の両方で起こるため、コマンド名で文言を切り替える。
pub fn error_message(err: &CatalogError, command: &str) -> String {
    match err {
        CatalogError::NotFound { kind } if command.starts_with("Return ") => {
            format!("That is not a valid {} to return.", kind.to_lowercase())
        }
        CatalogError::NotFound { kind } | CatalogError::NotAvailable { kind, .. } => {
            format!("That {} is not available.", kind.to_lowercase())
        }
        CatalogError::NotCheckedOut { kind, .. } => {
            format!("That is not a valid {} to return.", kind.to_lowercase())
        }
        CatalogError::InvalidCredentials => "Login Failed! Please try again.".to_string(),
        CatalogError::AuthRequired => "You must be logged in to perform that task.".to_string(),
        CatalogError::UnknownCommand(_) => "Select a valid option!".to_string(),
    }
}
