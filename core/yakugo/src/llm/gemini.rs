//! Gemini プロバイダの実装
//!
//! generateContent を 1 回呼び、generationConfig.responseSchema で
//! CorpusEntry 形の JSON 出力を強制する。

use serde_json::{json, Value};

use crate::domain::CorpusEntry;
use crate::error::Error;
use crate::llm::provider::AnalysisProvider;

/// 省略時に使うモデル名
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// 解析の方針を固定するシステム指示
const SYSTEM_INSTRUCTION: &str = "あなたは翻訳者・ローカライザ向けの語彙アナリストです。\
与えられた語について、意味、カテゴリ別の言い換え、訳し方・ローカライズ上の注意、\
例文、タグを日本語で簡潔に返してください。出力は指定されたスキーマに従う JSON のみとします。";

/// Gemini プロバイダ
pub struct GeminiProvider {
    model: String,
}

impl GeminiProvider {
    /// 新しい Gemini プロバイダを作成
    ///
    /// # Arguments
    /// * `model` - モデル名（省略時は DEFAULT_MODEL）
    pub fn new(model: Option<String>) -> Self {
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Self { model }
    }

    /// リクエストペイロードを生成
    fn make_request_payload(&self, term: &str) -> Value {
        json!({
            "systemInstruction": {
                "parts": [{ "text": SYSTEM_INSTRUCTION }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": term }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema()
            }
        })
    }

    /// HTTP リクエストを実行してレスポンス本文を取得
    fn make_http_request(&self, api_key: &str, request_json: &str) -> Result<String, Error> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, api_key
        );

        let client = reqwest::blocking::Client::new();
        let response = client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            // エラーレスポンスを解析してメッセージを抽出
            let error_msg = if let Ok(v) = serde_json::from_str::<Value>(&response_text) {
                v["error"]["message"]
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
            } else {
                format!("HTTP {}: {}", status, response_text)
            };
            if is_credential_rejection(status.as_u16(), &error_msg) {
                return Err(Error::credential(format!(
                    "Gemini API rejected the key: {}",
                    error_msg
                )));
            }
            return Err(Error::http(format!("Gemini API error: {}", error_msg)));
        }

        Ok(response_text)
    }

    /// レスポンスから解析結果を抽出
    fn parse_entry(&self, response_json: &str) -> Result<CorpusEntry, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::response_format(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(error) = v.get("error") {
            let error_msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("Gemini API error: {}", error_msg)));
        }

        let text = v["candidates"][0]["content"]["parts"]
            .as_array()
            .and_then(|parts| parts.iter().find_map(|part| part["text"].as_str()))
            .ok_or_else(|| Error::response_format("No text in response".to_string()))?;

        let entry: CorpusEntry = serde_json::from_str(text.trim()).map_err(|e| {
            Error::response_format(format!("Analysis JSON does not match the expected shape: {}", e))
        })?;

        if entry.term.is_empty() || entry.meaning.is_empty() {
            return Err(Error::response_format(
                "Analysis JSON is missing term or meaning".to_string(),
            ));
        }

        Ok(entry)
    }
}

impl AnalysisProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn analyze(&self, term: &str, api_key: &str) -> Result<CorpusEntry, Error> {
        if api_key.is_empty() {
            return Err(Error::credential(
                "API key is not set (use `yakugo key set` or YAKUGO_API_KEY)".to_string(),
            ));
        }

        let payload = self.make_request_payload(term);
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::Json(format!("Failed to serialize request: {}", e)))?;
        let response_json = self.make_http_request(api_key, &request_json)?;
        self.parse_entry(&response_json)
    }
}

/// キー不正として扱うステータス・メッセージの組か
fn is_credential_rejection(status: u16, message: &str) -> bool {
    if status == 401 || status == 403 {
        return true;
    }
    status == 400 && message.to_ascii_lowercase().contains("api key")
}

/// CorpusEntry と同形のレスポンススキーマ（Gemini の型表現）
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "term": { "type": "STRING" },
            "meaning": { "type": "STRING" },
            "paraphrases": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "category": { "type": "STRING" },
                        "words": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["category", "words"]
                }
            },
            "localizationMemo": { "type": "ARRAY", "items": { "type": "STRING" } },
            "examples": { "type": "ARRAY", "items": { "type": "STRING" } },
            "tags": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["term", "meaning", "paraphrases", "localizationMemo", "examples", "tags"]
    })
}
