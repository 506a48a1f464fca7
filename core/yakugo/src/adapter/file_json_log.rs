//! ファイルへ JSONL で追記する Log 実装
//!
//! ログの出力先はファイルのみ。エラー時のコンソール表示（stderr）とは別。

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};

/// ファイルへ JSONL を追記する Log 実装
pub struct FileJsonLog {
    path: PathBuf,
}

impl FileJsonLog {
    /// ログファイルパスへ追記する logger を生成する。
    /// 親ディレクトリが無ければ作成する（初回書き込み時）。
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Log for FileJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::io_msg(format!("create_dir_all {}: {}", parent.display(), e)))?;
        }
        let line = serde_json::to_string(record).map_err(|e| Error::Json(e.to_string()))?;
        let mut f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io_msg(format!("open {}: {}", self.path.display(), e)))?;
        writeln!(f, "{}", line).map_err(|e| Error::io_msg(e.to_string()))?;
        Ok(())
    }
}

/// 何も出力しない Log 実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{now_iso8601, LogLevel};

    fn record(message: &str) -> LogRecord {
        LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: message.to_string(),
            layer: None,
            kind: None,
            fields: None,
        }
    }

    #[test]
    fn test_appends_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("yakugo.log.jsonl");
        let log = FileJsonLog::new(&path);

        log.log(&record("first")).unwrap();
        log.log(&record("second")).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("first"));
        assert!(lines[1].contains("second"));
        for line in lines {
            serde_json::from_str::<serde_json::Value>(line).unwrap();
        }
    }

    #[test]
    fn test_noop_log() {
        let log = NoopLog;
        assert!(log.log(&record("ignored")).is_ok());
    }
}
