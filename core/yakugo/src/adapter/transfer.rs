//! 履歴のエクスポート・インポート変換
//!
//! エクスポートは当日の日付入りファイル名で pretty JSON を書き出す
//! （日をまたいだ上書きを避けるため。同日内は上書きされる）。
//! インポートはトップレベルが配列であることだけを検査し、
//! 要素ごとの検証は usecase::store 側に寄せる。

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::CorpusCard;
use crate::error::Error;

const EXPORT_BASENAME: &str = "yakugo_corpus";

/// 当日日付のエクスポートファイル名
pub fn export_filename() -> String {
    let date = chrono::Local::now().format("%Y-%m-%d");
    format!("{}_{}.json", EXPORT_BASENAME, date)
}

/// 履歴全体を <dir>/yakugo_corpus_<YYYY-MM-DD>.json へ書き出し、パスを返す
pub fn export_history(cards: &[CorpusCard], dir: &Path) -> Result<PathBuf, Error> {
    std::fs::create_dir_all(dir)
        .map_err(|e| Error::io_msg(format!("create_dir_all {}: {}", dir.display(), e)))?;
    let path = dir.join(export_filename());
    let json = serde_json::to_string_pretty(cards).map_err(|e| Error::Json(e.to_string()))?;
    std::fs::write(&path, json)
        .map_err(|e| Error::io_msg(format!("write {}: {}", path.display(), e)))?;
    Ok(path)
}

/// インポートファイルの中身を候補列として解析する
///
/// トップレベルが JSON 配列でなければ ImportFormat。要素は未検証のまま返す。
pub fn parse_import(bytes: &[u8]) -> Result<Vec<Value>, Error> {
    let v: Value = serde_json::from_slice(bytes)
        .map_err(|e| Error::import_format(format!("not a JSON document: {}", e)))?;
    match v {
        Value::Array(items) => Ok(items),
        other => Err(Error::import_format(format!(
            "top-level value is not an array (found {})",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CorpusEntry;

    fn card(id: &str, term: &str) -> CorpusCard {
        CorpusCard::new(
            id,
            100,
            CorpusEntry {
                term: term.to_string(),
                meaning: "m".to_string(),
                paraphrases: Vec::new(),
                localization_memo: Vec::new(),
                examples: Vec::new(),
                tags: Vec::new(),
            },
        )
    }

    #[test]
    fn test_export_writes_dated_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let cards = vec![card("a", "賄賂")];

        let path = export_history(&cards, dir.path()).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("yakugo_corpus_"));
        assert!(name.ends_with(".json"));

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains('\n')); // pretty-printed
        let back: Vec<CorpusCard> = serde_json::from_str(&contents).unwrap();
        assert_eq!(back, cards);
    }

    #[test]
    fn test_parse_import_accepts_array() {
        let items = parse_import(br#"[{"term":"a"},{"x":1}]"#).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_parse_import_rejects_non_array() {
        let err = parse_import(br#"{"term":"a"}"#).unwrap_err();
        assert!(matches!(err, Error::ImportFormat(_)));
    }

    #[test]
    fn test_parse_import_rejects_truncated_json() {
        let full = br#"[{"term":"a","meaning":"b"}]"#;
        let truncated = &full[..full.len() - 5];
        let err = parse_import(truncated).unwrap_err();
        assert!(matches!(err, Error::ImportFormat(_)));
    }
}
