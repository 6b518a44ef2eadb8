use crate::application::errors::Result;

/// ログイン状態に対する条件
///
/// 実行可否と表示可否の両方に使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// 常に許可
    Public,
    /// ログイン中のみ
    LoggedIn,
    /// ログアウト中のみ
    LoggedOut,
}

impl Access {
    pub fn permits(self, logged_in: bool) -> bool {
        match self {
            Access::Public => true,
            Access::LoggedIn => logged_in,
            Access::LoggedOut => !logged_in,
        }
    }
}

/// コマンドの実行結果
///
/// 表示は呼び出し側（コンソール）の責務。`Quit`は終了の合図であり、エラーではない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// 貸出可能な資料の一覧
    Items {
        headers: &'static str,
        rows: Vec<String>,
    },
    CheckedOut { kind: &'static str },
    Returned { kind: &'static str },
    LoggedIn,
    LoggedOut,
    /// 会員のプロフィール
    Details(String),
    Quit,
}

/// コマンドのハンドラ
///
/// 第1引数は実行コンテキスト（台帳やセッションを持つ）、第2引数はコマンド引数。
pub type Handler<C> = Box<dyn Fn(&mut C, Option<&str>) -> Result<Reply>>;

/// 名前で呼び出される処理の単位
///
/// データ＋クロージャのレコードとして表現し、コマンドごとの型は作らない。
pub struct Command<C> {
    name: String,
    arg_hint: Option<String>,
    access: Access,
    visibility: Access,
    handler: Handler<C>,
}

impl<C> Command<C> {
    /// 引数なし・常に実行可能なコマンドを作る
    pub fn new(
        name: impl Into<String>,
        handler: impl Fn(&mut C, Option<&str>) -> Result<Reply> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            arg_hint: None,
            access: Access::Public,
            visibility: Access::Public,
            handler: Box::new(handler),
        }
    }

    /// 引数を取るコマンドにする（表示用のヒント付き）
    pub fn with_arg_hint(mut self, arg_hint: impl Into<String>) -> Self {
        self.arg_hint = Some(arg_hint.into());
        self
    }

    /// 実行条件を設定する。表示条件も同じ値になる。
    pub fn requires(mut self, access: Access) -> Self {
        self.access = access;
        self.visibility = access;
        self
    }

    /// 表示条件だけを上書きする
    pub fn visible(mut self, visibility: Access) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arg_hint(&self) -> Option<&str> {
        self.arg_hint.as_deref()
    }

    pub fn access(&self) -> Access {
        self.access
    }

    pub fn takes_argument(&self) -> bool {
        self.arg_hint.is_some()
    }

    /// メニューに表示する文字列（例: `Checkout Book: <Title>`）
    pub fn display(&self) -> String {
        match &self.arg_hint {
            Some(hint) => format!("{}: {}", self.name, hint),
            None => self.name.clone(),
        }
    }

    pub fn is_visible(&self, logged_in: bool) -> bool {
        self.visibility.permits(logged_in)
    }

    pub(super) fn invoke(&self, context: &mut C, argument: Option<&str>) -> Result<Reply> {
        let argument = if self.takes_argument() { argument } else { None };
        (self.handler)(context, argument)
    }
}

impl<C> std::fmt::Debug for Command<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("arg_hint", &self.arg_hint)
            .field("access", &self.access)
            .field("visibility", &self.visibility)
            .finish_non_exhaustive()
    }
}
