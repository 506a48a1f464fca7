//! エラーハンドリング
//!
//! クレート全体で使う単一のエラー型。層ごとの失敗はヘルパーで変換して統一する。
//! 終了コードは sysexits 準拠。

/// クレート共通のエラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正（CLI レイヤー）
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// API キー未設定、またはサービス側で拒否された
    #[error("credential error: {0}")]
    Credential(String),
    /// 生成 API の応答が期待する形に解析できない
    #[error("response format error: {0}")]
    ResponseFormat(String),
    /// インポートファイルのトップレベルが JSON 配列でない
    #[error("import format error: {0}")]
    ImportFormat(String),
    /// 保存済み履歴の JSON が壊れている（起動時に空として回復する）
    #[error("persisted history unreadable: {0}")]
    PersistenceParse(String),
    /// HTTP トランスポート・サービス側の失敗
    #[error("http error: {0}")]
    Http(String),
    /// JSON シリアライズ・デシリアライズの失敗
    #[error("json error: {0}")]
    Json(String),
    /// ファイル I/O の失敗
    #[error("io error: {0}")]
    Io(String),
    /// 環境変数の解決に失敗
    #[error("environment error: {0}")]
    Env(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn credential(msg: impl Into<String>) -> Self {
        Error::Credential(msg.into())
    }

    pub fn response_format(msg: impl Into<String>) -> Self {
        Error::ResponseFormat(msg.into())
    }

    pub fn import_format(msg: impl Into<String>) -> Self {
        Error::ImportFormat(msg.into())
    }

    pub fn persistence_parse(msg: impl Into<String>) -> Self {
        Error::PersistenceParse(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Error::Http(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 64,
            Error::ImportFormat(_) => 65,
            Error::ResponseFormat(_) => 76,
            Error::Credential(_) | Error::Env(_) => 78,
            Error::PersistenceParse(_) | Error::Http(_) | Error::Json(_) | Error::Io(_) => 74,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let err = Error::invalid_argument("bad flag");
        assert_eq!(err, Error::InvalidArgument("bad flag".to_string()));
        assert_eq!(err.exit_code(), 64);

        let err = Error::credential("key missing");
        assert_eq!(err.exit_code(), 78);

        let err = Error::import_format("not an array");
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn test_error_display() {
        let err = Error::response_format("missing term");
        assert_eq!(err.to_string(), "response format error: missing term");
    }
}
