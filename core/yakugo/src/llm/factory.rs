//! プロバイダファクトリー
//!
//! プロバイダタイプに基づいて適切なプロバイダを作成します。

use std::sync::Arc;

use crate::llm::echo::EchoProvider;
use crate::llm::gemini::GeminiProvider;
use crate::llm::provider::AnalysisProvider;

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// Gemini（既定）
    Gemini,
    /// Echo（API を呼ばずダミーを返す）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gemini" => Some(Self::Gemini),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    /// プロバイダタイプを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Echo => "echo",
        }
    }
}

/// タイプに応じたプロバイダを作成する
pub fn create(provider_type: ProviderType, model: Option<String>) -> Arc<dyn AnalysisProvider> {
    match provider_type {
        ProviderType::Gemini => Arc::new(GeminiProvider::new(model)),
        ProviderType::Echo => Arc::new(EchoProvider::new()),
    }
}
