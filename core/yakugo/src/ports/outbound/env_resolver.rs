//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリと環境変数経由の API キーを解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// アプリのホームディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. YAKUGO_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/yakugo（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/yakugo
    fn resolve_home_dir(&self) -> Result<PathBuf, Error>;

    /// 環境変数 YAKUGO_API_KEY からの API キー（保存値より優先）
    fn api_key_from_env(&self) -> Option<String>;
}
