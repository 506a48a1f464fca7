//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::domain::Command;
use crate::error::Error;

/// 解析済みのコマンドを実行する Inbound ポート
///
/// main はこの trait を実装した Runner の run を呼び出す。
pub trait CommandRunner {
    fn run(&mut self, command: Command) -> Result<i32, Error>;
}
