//! 語彙カードのドメイン型
//!
//! 生成 API の解析結果（CorpusEntry）と、ローカルで識別子・作成時刻を付けた
//! カード（CorpusCard）。ディスク上・エクスポートファイル上は camelCase。

use serde::{Deserialize, Serialize};

/// 言い換えカテゴリ 1 件（カテゴリ名とその語のリスト）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParaphraseGroup {
    pub category: String,
    #[serde(default)]
    pub words: Vec<String>,
}

/// 生成 API が返す解析結果 1 件。作成後は変更しない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusEntry {
    pub term: String,
    pub meaning: String,
    #[serde(default)]
    pub paraphrases: Vec<ParaphraseGroup>,
    /// 訳し方・ローカライズ上の注意（自由文のリスト）
    #[serde(default)]
    pub localization_memo: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// 履歴に保持するカード（解析結果 + 識別子 + 作成時刻）
///
/// 同一性は `id` で判定する。`created_at` は Unix epoch ミリ秒。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusCard {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(flatten)]
    pub entry: CorpusEntry,
}

impl CorpusCard {
    pub fn new(id: impl Into<String>, created_at: i64, entry: CorpusEntry) -> Self {
        Self {
            id: id.into(),
            created_at,
            entry,
        }
    }
}
