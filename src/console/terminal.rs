use std::io::{BufRead, Write};

use thiserror::Error;

use crate::application::Library;
use crate::application::dispatch::{CommandDispatcher, ParsedLine, Reply};

use super::render::{MENU_HEADER, WELCOME, error_message, reply_lines};

/// コンソールの入出力エラー（これだけが致命的）
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error),
}

/// ループの終わり方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `Quit`コマンドで終了した
    Quit,
    /// 入力が尽きた
    EndOfInput,
}

/// 1行ずつコマンドを読み、結果を書き出す対話ループ
///
/// 各行は解釈・認可・実行・表示まで完了してから次の行を読む。
/// ドメインのエラーはメッセージを表示して続行する。
pub struct Console<R, W> {
    library: Library,
    dispatcher: CommandDispatcher<Library>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(
        library: Library,
        dispatcher: CommandDispatcher<Library>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            library,
            dispatcher,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 歓迎メッセージとメニューを表示し、入力が尽きるか`Quit`まで処理する
    pub fn run(&mut self) -> Result<Outcome, ConsoleError> {
        self.write_line(WELCOME)?;
        self.display_menu()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("end of input");
                return Ok(Outcome::EndOfInput);
            }

            let command = line.trim_end_matches(['\r', '\n']);
            if let Some(outcome) = self.handle(command)? {
                return Ok(outcome);
            }
        }
    }

    /// 1行を処理する。終了すべきなら`Some(Outcome::Quit)`を返す。
    pub fn handle(&mut self, line: &str) -> Result<Option<Outcome>, ConsoleError> {
        let reply = match self.dispatcher.execute(&mut self.library, line) {
            Ok(reply) => reply,
            Err(err) => {
                tracing::debug!(error = %err, "command failed");
                let message = error_message(&err, ParsedLine::parse(line).name);
                self.write_line(&message)?;
                return Ok(None);
            }
        };

        for text in reply_lines(&reply) {
            self.write_line(&text)?;
        }

        match reply {
            Reply::Quit => Ok(Some(Outcome::Quit)),
            Reply::LoggedIn | Reply::LoggedOut => {
                self.display_menu()?;
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn display_menu(&mut self) -> Result<(), ConsoleError> {
        let options: Vec<String> = self
            .dispatcher
            .visible_commands(&self.library)
            .iter()
            .map(|command| command.display())
            .collect();

        self.write_line(MENU_HEADER)?;
        for option in options {
            self.write_line(&option)?;
        }
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}
