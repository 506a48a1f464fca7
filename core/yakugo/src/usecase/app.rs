//! アプリケーション UseCase
//!
//! 解析・削除・入出力・クレデンシャル操作を束ねる。クレデンシャルは起動時に
//! 一度だけ解決してプロセス中はメモリに保持する（環境変数が保存値より優先）。

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapter::transfer;
use crate::domain::{CorpusCard, History};
use crate::error::Error;
use crate::ports::outbound::{
    now_iso8601, AnalysisProvider, CorpusStorage, EnvResolver, Log, LogLevel, LogRecord,
};
use crate::usecase::store::HistoryStore;

/// アプリケーション UseCase
pub struct AppUseCase {
    store: HistoryStore,
    provider: Arc<dyn AnalysisProvider>,
    storage: Arc<dyn CorpusStorage>,
    log: Arc<dyn Log>,
    credential: Option<String>,
}

impl AppUseCase {
    pub fn new(
        store: HistoryStore,
        provider: Arc<dyn AnalysisProvider>,
        storage: Arc<dyn CorpusStorage>,
        env: Arc<dyn EnvResolver>,
        log: Arc<dyn Log>,
    ) -> Result<Self, Error> {
        let credential = match env.api_key_from_env() {
            Some(key) => Some(key),
            None => storage.load_credential()?,
        };
        Ok(Self {
            store,
            provider,
            storage,
            log,
            credential,
        })
    }

    pub fn history(&self) -> &History {
        self.store.history()
    }

    /// term を解析して履歴の先頭に追加し、追加したカードを返す
    ///
    /// 外部リクエストは 1 回だけ。このメソッドが戻るまで次の解析は始められない
    /// （&mut self で多重実行を型レベルで防ぐ）。
    pub fn analyze(&mut self, term: &str) -> Result<CorpusCard, Error> {
        let term = term.trim();
        if term.is_empty() {
            return Err(Error::invalid_argument("term is empty"));
        }

        let key = self.credential.as_deref().unwrap_or("");
        let entry = self.provider.analyze(term, key)?;
        let card = self.store.new_card(entry);
        self.store.prepend(card.clone())?;

        let mut fields = BTreeMap::new();
        fields.insert("term".to_string(), serde_json::json!(term));
        fields.insert("card_id".to_string(), serde_json::json!(card.id));
        fields.insert("provider".to_string(), serde_json::json!(self.provider.name()));
        let _ = self.log.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "analysis stored".to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("history".to_string()),
            fields: Some(fields),
        });

        Ok(card)
    }

    /// カード 1 件を取得する
    pub fn find(&self, id: &str) -> Option<&CorpusCard> {
        self.store.history().find(id)
    }

    /// カード 1 件を削除する。存在しなければ false（エラーではない）。
    /// 削除前の確認は呼び出し側（CLI）の責務。
    pub fn remove(&mut self, id: &str) -> Result<bool, Error> {
        self.store.remove(id)
    }

    /// 履歴を日付入りファイル名で書き出し、パスを返す。省略時はカレントディレクトリ。
    pub fn export(&self, out_dir: Option<&Path>) -> Result<PathBuf, Error> {
        let dir = out_dir.unwrap_or_else(|| Path::new("."));
        let path = transfer::export_history(self.store.history().cards(), dir)?;

        let mut fields = BTreeMap::new();
        fields.insert("path".to_string(), serde_json::json!(path.display().to_string()));
        fields.insert("cards".to_string(), serde_json::json!(self.store.history().len()));
        let _ = self.log.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "history exported".to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("transfer".to_string()),
            fields: Some(fields),
        });

        Ok(path)
    }

    /// エクスポートファイルを読み込んで履歴へ統合する。受理した件数を返す。
    pub fn import(&mut self, file: &Path) -> Result<usize, Error> {
        let bytes = std::fs::read(file)
            .map_err(|e| Error::io_msg(format!("read {}: {}", file.display(), e)))?;
        let candidates = transfer::parse_import(&bytes)?;
        self.store.merge_import(candidates)
    }

    /// クレデンシャルを保存する。空文字列は消去。メモリ上のキャッシュも更新する。
    pub fn set_credential(&mut self, value: &str) -> Result<(), Error> {
        self.storage.save_credential(value)?;
        self.credential = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };

        let _ = self.log.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: if value.is_empty() {
                "credential cleared".to_string()
            } else {
                "credential saved".to_string()
            },
            layer: Some("usecase".to_string()),
            kind: Some("credential".to_string()),
            fields: None,
        });
        Ok(())
    }

    /// 保存済みクレデンシャルを消去する
    pub fn clear_credential(&mut self) -> Result<(), Error> {
        self.set_credential("")
    }

    pub fn credential_is_set(&self) -> bool {
        self.credential.is_some()
    }
}
