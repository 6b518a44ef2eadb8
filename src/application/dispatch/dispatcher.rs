use std::collections::HashMap;

use crate::application::errors::{CatalogError, Result};
use crate::application::session::SecurityStatus;

use super::command::{Command, Reply};

/// 入力行の分解結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub name: &'a str,
    pub argument: Option<&'a str>,
}

impl<'a> ParsedLine<'a> {
    /// 最初の`:`でコマンド名と引数に分ける
    ///
    /// 引数は前後の空白を取り除く。`:`がなければ引数なし。
    pub fn parse(line: &'a str) -> Self {
        match line.split_once(':') {
            Some((name, argument)) => Self {
                name,
                argument: Some(argument.trim()),
            },
            None => Self {
                name: line,
                argument: None,
            },
        }
    }
}

/// 入力行をコマンドに振り分けるディスパッチャ
///
/// コマンド名が振り分けのキー。同名のコマンドが複数登録された場合は後勝ち
/// （表示用の一覧には登録順にすべて残る）。
pub struct CommandDispatcher<C> {
    commands: Vec<Command<C>>,
    index: HashMap<String, usize>,
}

impl<C: SecurityStatus> CommandDispatcher<C> {
    pub fn new(commands: Vec<Command<C>>) -> Self {
        let mut index = HashMap::new();
        for (position, command) in commands.iter().enumerate() {
            if let Some(previous) = index.insert(command.name().to_string(), position) {
                tracing::debug!(name = command.name(), previous, position, "command overridden");
            }
        }
        Self { commands, index }
    }

    /// 1行を解釈して実行する
    ///
    /// # エラー
    /// - `UnknownCommand`: 名前が登録されていない
    /// - `AuthRequired`: ログイン状態が実行条件を満たさない（ハンドラは呼ばれない）
    /// - その他: ハンドラのエラーをそのまま返す
    pub fn execute(&self, context: &mut C, line: &str) -> Result<Reply> {
        let parsed = ParsedLine::parse(line);
        let command = self
            .resolve(parsed.name)
            .ok_or_else(|| CatalogError::UnknownCommand(parsed.name.to_string()))?;

        if !command.access().permits(context.is_logged_in()) {
            tracing::warn!(command = command.name(), "command rejected by login state");
            return Err(CatalogError::AuthRequired);
        }

        tracing::debug!(command = command.name(), argument = ?parsed.argument, "dispatching");
        command.invoke(context, parsed.argument)
    }

    /// 名前からコマンドを引く
    pub fn resolve(&self, name: &str) -> Option<&Command<C>> {
        self.index.get(name).map(|&position| &self.commands[position])
    }

    /// 現在のログイン状態で表示すべきコマンド（登録順）
    pub fn visible_commands(&self, status: &impl SecurityStatus) -> Vec<&Command<C>> {
        let logged_in = status.is_logged_in();
        self.commands
            .iter()
            .filter(|command| command.is_visible(logged_in))
            .collect()
    }

    /// 登録されたすべてのコマンド（登録順）
    pub fn commands(&self) -> &[Command<C>] {
        &self.commands
    }
}

impl<C> std::fmt::Debug for CommandDispatcher<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDispatcher")
            .field("commands", &self.commands)
            .finish()
    }
}
