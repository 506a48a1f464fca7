//! 履歴・クレデンシャルのファイル永続化
//!
//! ホームディレクトリ直下の history.json と credential の 2 値を独立に読み書きする。
//! 履歴は人が読める pretty JSON で保存し、そのままインポートにも使える。

use std::path::{Path, PathBuf};

use crate::domain::CorpusCard;
use crate::error::Error;
use crate::ports::outbound::CorpusStorage;

const HISTORY_FILENAME: &str = "history.json";
const CREDENTIAL_FILENAME: &str = "credential";

/// ファイルベースの CorpusStorage 実装
pub struct FileCorpusStorage {
    dir: PathBuf,
}

impl FileCorpusStorage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn history_path(&self) -> PathBuf {
        self.dir.join(HISTORY_FILENAME)
    }

    fn credential_path(&self) -> PathBuf {
        self.dir.join(CREDENTIAL_FILENAME)
    }

    fn ensure_dir(&self) -> Result<(), Error> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| Error::io_msg(format!("create_dir_all {}: {}", self.dir.display(), e)))
    }
}

impl CorpusStorage for FileCorpusStorage {
    fn load_history(&self) -> Result<Vec<CorpusCard>, Error> {
        let path = self.history_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let s = std::fs::read_to_string(&path)
            .map_err(|e| Error::io_msg(format!("read {}: {}", path.display(), e)))?;
        serde_json::from_str(&s)
            .map_err(|e| Error::persistence_parse(format!("parse {}: {}", path.display(), e)))
    }

    fn save_history(&self, cards: &[CorpusCard]) -> Result<(), Error> {
        self.ensure_dir()?;
        let path = self.history_path();
        let json = serde_json::to_string_pretty(cards).map_err(|e| Error::Json(e.to_string()))?;
        std::fs::write(&path, json)
            .map_err(|e| Error::io_msg(format!("write {}: {}", path.display(), e)))
    }

    fn load_credential(&self) -> Result<Option<String>, Error> {
        let path = self.credential_path();
        if !path.exists() {
            return Ok(None);
        }
        let s = std::fs::read_to_string(&path)
            .map_err(|e| Error::io_msg(format!("read {}: {}", path.display(), e)))?;
        let value = s.trim_end_matches('\n').to_string();
        if value.is_empty() {
            return Ok(None);
        }
        Ok(Some(value))
    }

    fn save_credential(&self, value: &str) -> Result<(), Error> {
        let path = self.credential_path();
        if value.is_empty() {
            // 空の保存は削除として扱い、「未設定」と同じ状態に収束させる
            if path.exists() {
                std::fs::remove_file(&path)
                    .map_err(|e| Error::io_msg(format!("remove {}: {}", path.display(), e)))?;
            }
            return Ok(());
        }
        self.ensure_dir()?;
        std::fs::write(&path, value)
            .map_err(|e| Error::io_msg(format!("write {}: {}", path.display(), e)))
    }
}
