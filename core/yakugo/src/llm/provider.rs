//! 解析プロバイダのトレイト定義

use crate::domain::CorpusEntry;
use crate::error::Error;

/// 語を解析して構造化した結果を返すプロバイダ
///
/// 各プロバイダ（Gemini、Echo など）はこのトレイトを実装する。
/// 1 回の呼び出しにつき外部リクエストは最大 1 回。リトライ・キャッシュは行わない。
pub trait AnalysisProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// term を解析して CorpusEntry を返す
    ///
    /// # Arguments
    /// * `term` - 解析対象の語
    /// * `api_key` - 認証に使うキー（空ならリクエストを発行せず Credential エラー）
    ///
    /// # Returns
    /// * `Ok(CorpusEntry)` - 解析結果
    /// * `Err(Error)` - Credential / ResponseFormat / Http のいずれか
    fn analyze(&self, term: &str, api_key: &str) -> Result<CorpusEntry, Error>;
}
