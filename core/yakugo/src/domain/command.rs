//! CLI から実行するコマンドのドメイン型

use std::path::PathBuf;

/// 実行するコマンド（cli::args が Config から変換して main がディスパッチする）
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// 語を解析して履歴の先頭に追加する
    Analyze {
        term: String,
        /// -m / --model: 生成モデル名の上書き
        model: Option<String>,
        /// --provider: 解析プロバイダ名（省略時は gemini）
        provider: Option<String>,
    },
    /// 履歴を新しい順に一覧表示する
    List,
    /// カード 1 件を全文表示する
    Show { id: String },
    /// カード 1 件を削除する（存在しなければ何もしない）
    Delete { id: String },
    /// 履歴を日付入りファイル名の JSON に書き出す
    Export { out_dir: Option<PathBuf> },
    /// エクスポートファイルからカードを統合する
    Import { file: PathBuf },
    /// API キーを保存する
    KeySet { value: String },
    /// 保存済み API キーを削除する
    KeyClear,
    /// API キーの保存状態を表示する
    KeyStatus,
}

impl Command {
    /// ログ用のコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            Command::Analyze { .. } => "analyze",
            Command::List => "list",
            Command::Show { .. } => "show",
            Command::Delete { .. } => "delete",
            Command::Export { .. } => "export",
            Command::Import { .. } => "import",
            Command::KeySet { .. } => "key set",
            Command::KeyClear => "key clear",
            Command::KeyStatus => "key status",
        }
    }
}
