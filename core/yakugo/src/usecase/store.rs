//! 履歴ストア
//!
//! メモリ上の History を唯一の所有者とし、変更のたびに永続化を完了してから戻る。
//! 後続の読み取りが変更前の状態を観測することはない。

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::domain::{CorpusCard, CorpusEntry, History};
use crate::error::Error;
use crate::ports::outbound::{now_iso8601, Clock, CorpusStorage, IdGenerator, Log, LogLevel, LogRecord};

/// 履歴ストア（History + 永続化 + id/時刻の採番）
pub struct HistoryStore {
    history: History,
    storage: Arc<dyn CorpusStorage>,
    id_gen: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
}

impl HistoryStore {
    /// 起動時に一度だけ呼ぶ。保存データが壊れていても起動は失敗させず、
    /// 空の履歴から始めて warn を記録する。
    pub fn load(
        storage: Arc<dyn CorpusStorage>,
        id_gen: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
        log: Arc<dyn Log>,
    ) -> Self {
        let history = match storage.load_history() {
            Ok(cards) => History::from_cards(cards),
            Err(e) => {
                let mut fields = BTreeMap::new();
                fields.insert("error".to_string(), serde_json::json!(e.to_string()));
                let _ = log.log(&LogRecord {
                    ts: now_iso8601(),
                    level: LogLevel::Warn,
                    message: "stored history unreadable, starting empty".to_string(),
                    layer: Some("usecase".to_string()),
                    kind: Some("history".to_string()),
                    fields: Some(fields),
                });
                History::new()
            }
        };
        Self {
            history,
            storage,
            id_gen,
            clock,
            log,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// 解析結果から新しいカードを作る（id と作成時刻を採番）
    pub fn new_card(&self, entry: CorpusEntry) -> CorpusCard {
        CorpusCard::new(self.id_gen.next_id(), self.clock.now_ms() as i64, entry)
    }

    /// カードを先頭に追加して永続化する
    pub fn prepend(&mut self, card: CorpusCard) -> Result<(), Error> {
        self.history.prepend(card);
        self.persist()
    }

    /// 指定 id のカードを削除して永続化する。存在しなければ no-op（エラーではない）。
    pub fn remove(&mut self, id: &str) -> Result<bool, Error> {
        let removed = self.history.remove(id);
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// インポート候補を検証して履歴へ統合する。受理した件数を返す。
    ///
    /// 受理条件: term と meaning が非空文字列で、id が既存・ブロック内のどれとも
    /// 重複しないこと。カード形に読めない要素は黙って捨てる。
    /// id / createdAt を持たない要素は新規採番で補う。
    pub fn merge_import(&mut self, candidates: Vec<Value>) -> Result<usize, Error> {
        let mut block: Vec<CorpusCard> = Vec::new();
        for candidate in candidates {
            if !has_nonempty_str(&candidate, "term") || !has_nonempty_str(&candidate, "meaning") {
                continue;
            }
            let Ok(mut card) = serde_json::from_value::<CorpusCard>(candidate) else {
                continue;
            };
            if card.id.is_empty() {
                card.id = self.id_gen.next_id();
            }
            if card.created_at == 0 {
                card.created_at = self.clock.now_ms() as i64;
            }
            block.push(card);
        }

        let accepted = self.history.merge_front(block);
        if accepted > 0 {
            self.persist()?;
        }

        let mut fields = BTreeMap::new();
        fields.insert("accepted".to_string(), serde_json::json!(accepted));
        let _ = self.log.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "import merged".to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("history".to_string()),
            fields: Some(fields),
        });

        Ok(accepted)
    }

    fn persist(&self) -> Result<(), Error> {
        self.storage.save_history(self.history.cards())
    }
}

fn has_nonempty_str(v: &Value, key: &str) -> bool {
    v.get(key).and_then(|x| x.as_str()).is_some_and(|s| !s.is_empty())
}
