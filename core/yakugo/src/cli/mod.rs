//! CLI レイヤー（引数解析と補完スクリプト生成）

pub mod args;

pub use args::{build_cli, parse_args, print_completion, ParseOutcome};
