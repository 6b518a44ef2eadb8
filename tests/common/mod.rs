use catalog_desk::adapters::seed::BuiltinSeed;
use catalog_desk::application::{Library, load_library, standard_dispatcher};
use catalog_desk::console::{Console, ConsoleError, Outcome};

/// 組み込みカタログで図書館を作成
pub fn builtin_library() -> Library {
    load_library(&BuiltinSeed::new()).expect("Failed to load built-in catalog")
}

/// 入力行をまとめて流し込み、終了理由と出力を返す
pub fn run_session(lines: &[&str]) -> (Result<Outcome, ConsoleError>, String) {
    let input = lines.iter().map(|line| format!("{line}\n")).collect::<String>();
    let mut console = Console::new(
        builtin_library(),
        standard_dispatcher(),
        input.as_bytes(),
        Vec::new(),
    );
    let outcome = console.run();
    let output = String::from_utf8(console.into_output()).expect("Output is not UTF-8");
    (outcome, output)
}
