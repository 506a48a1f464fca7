//! 永続化 Outbound ポート
//!
//! 履歴とクレデンシャルはそれぞれ固定の置き場に独立して保存する。
//! 履歴の保存は常に全量上書き（マージは usecase 側で済ませてから渡す）。

use crate::domain::CorpusCard;
use crate::error::Error;

/// 履歴・クレデンシャルの永続化抽象（Outbound ポート）
///
/// 実装は `adapter::FileCorpusStorage` やテスト用のメモリ実装など。
pub trait CorpusStorage: Send + Sync {
    /// 保存済み履歴を読み込む。未保存なら空を返す。
    /// JSON が壊れている場合は PersistenceParse（回復は呼び出し側の責務）。
    fn load_history(&self) -> Result<Vec<CorpusCard>, Error>;

    /// 履歴全体を上書き保存する
    fn save_history(&self, cards: &[CorpusCard]) -> Result<(), Error>;

    /// 保存済みクレデンシャル。未設定なら None。
    fn load_credential(&self) -> Result<Option<String>, Error>;

    /// クレデンシャルを保存する。空文字列は保存値の削除として扱う
    /// （「未設定」と「消去済み」は同じ観測結果になる）。
    fn save_credential(&self, value: &str) -> Result<(), Error>;
}
