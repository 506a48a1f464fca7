//! 解析履歴のドメイン型
//!
//! カードを新しい順（先頭が最新）に保持する。同一 id のカードは共存しない。

use crate::domain::CorpusCard;

/// 解析履歴（カードの新しい順のリスト）
#[derive(Debug, Clone, Default)]
pub struct History {
    cards: Vec<CorpusCard>,
}

impl History {
    pub fn new() -> Self {
        History { cards: Vec::new() }
    }

    /// 保存データから復元する。id が重複するカードは先勝ちで捨てる。
    pub fn from_cards(cards: Vec<CorpusCard>) -> Self {
        let mut history = History::new();
        for card in cards {
            if !history.contains(&card.id) {
                history.cards.push(card);
            }
        }
        history
    }

    pub fn cards(&self) -> &[CorpusCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&CorpusCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// カードを先頭に挿入する。同一 id の既存カードがあれば置き換える。
    pub fn prepend(&mut self, card: CorpusCard) {
        self.cards.retain(|c| c.id != card.id);
        self.cards.insert(0, card);
    }

    /// 指定 id のカードを削除する。存在しなければ何もしない。
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| c.id != id);
        self.cards.len() != before
    }

    /// ブロックを相対順のまま先頭へ統合する。
    /// 既存の id、およびブロック内で先に受理した id と重複するカードは捨てる。
    /// 受理した件数を返す。
    pub fn merge_front(&mut self, block: Vec<CorpusCard>) -> usize {
        let mut accepted: Vec<CorpusCard> = Vec::new();
        for card in block {
            if self.contains(&card.id) || accepted.iter().any(|c| c.id == card.id) {
                continue;
            }
            accepted.push(card);
        }
        let count = accepted.len();
        accepted.append(&mut self.cards);
        self.cards = accepted;
        count
    }
}
