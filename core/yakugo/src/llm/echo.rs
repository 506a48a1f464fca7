//! Echo プロバイダの実装
//!
//! このプロバイダは実際に生成 API を呼び出さず、固定の解析結果を返します。
//! デバッグやテスト用に使用します。

use crate::domain::{CorpusEntry, ParaphraseGroup};
use crate::error::Error;
use crate::llm::provider::AnalysisProvider;

/// Echo プロバイダ
pub struct EchoProvider;

impl EchoProvider {
    /// 新しい Echo プロバイダを作成
    pub fn new() -> Self {
        Self
    }
}

impl Default for EchoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn analyze(&self, term: &str, _api_key: &str) -> Result<CorpusEntry, Error> {
        Ok(CorpusEntry {
            term: term.to_string(),
            meaning: format!("dummy analysis for {} (no API call made)", term),
            paraphrases: vec![ParaphraseGroup {
                category: "類語".to_string(),
                words: vec![format!("{}-1", term), format!("{}-2", term)],
            }],
            localization_memo: vec!["echo プロバイダが生成したダミーです".to_string()],
            examples: vec![format!("{} を使った例文です。", term)],
            tags: vec!["echo".to_string()],
        })
    }
}
