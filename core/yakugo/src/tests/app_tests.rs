use std::path::Path;
use std::sync::Arc;

use crate::adapter::NoopLog;
use crate::error::Error;
use crate::llm::echo::EchoProvider;
use crate::llm::gemini::GeminiProvider;
use crate::ports::outbound::{AnalysisProvider, EnvResolver, Log};
use crate::tests::fixtures::{storage_in, store_in, TestEnv};
use crate::usecase::AppUseCase;

fn app_with_provider(
    dir: &Path,
    provider: Arc<dyn AnalysisProvider>,
    api_key: Option<String>,
) -> AppUseCase {
    let env: Arc<dyn EnvResolver> = Arc::new(TestEnv {
        home: dir.to_path_buf(),
        api_key,
    });
    let log: Arc<dyn Log> = Arc::new(NoopLog);
    AppUseCase::new(store_in(dir), provider, storage_in(dir), env, log).unwrap()
}

fn echo_app(dir: &Path) -> AppUseCase {
    app_with_provider(dir, Arc::new(EchoProvider::new()), None)
}

#[test]
fn test_analyze_prepends_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = echo_app(dir.path());

    app.analyze("賄賂").unwrap();
    let history = app.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history.cards()[0].entry.term, "賄賂");

    app.analyze("情報").unwrap();
    let terms: Vec<&str> = app
        .history()
        .cards()
        .iter()
        .map(|c| c.entry.term.as_str())
        .collect();
    assert_eq!(terms, vec!["情報", "賄賂"]);
}

#[test]
fn test_analyze_empty_term_is_invalid_argument() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = echo_app(dir.path());
    let err = app.analyze("   ").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn test_analyze_without_credential_fails_with_credential_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_provider(dir.path(), Arc::new(GeminiProvider::new(None)), None);

    for term in ["賄賂", "情報", "hello"] {
        let err = app.analyze(term).unwrap_err();
        assert!(matches!(err, Error::Credential(_)), "term {}", term);
    }
    assert!(app.history().is_empty());
}

#[test]
fn test_cleared_credential_behaves_like_never_set() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut app = app_with_provider(dir.path(), Arc::new(GeminiProvider::new(None)), None);
        app.set_credential("sk-test").unwrap();
        assert!(app.credential_is_set());
        app.clear_credential().unwrap();
        assert!(!app.credential_is_set());
    }

    // 再起動相当: 保存値も消えている
    let mut app = app_with_provider(dir.path(), Arc::new(GeminiProvider::new(None)), None);
    assert!(!app.credential_is_set());
    let err = app.analyze("賄賂").unwrap_err();
    assert!(matches!(err, Error::Credential(_)));
}

#[test]
fn test_env_key_takes_precedence_over_stored() {
    let dir = tempfile::tempdir().unwrap();
    storage_in(dir.path()).save_credential("stored-key").unwrap();

    let app = app_with_provider(
        dir.path(),
        Arc::new(EchoProvider::new()),
        Some("env-key".to_string()),
    );
    assert!(app.credential_is_set());
}

#[test]
fn test_export_import_roundtrip_into_empty_history() {
    let src_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();

    let mut src = echo_app(src_dir.path());
    src.analyze("賄賂").unwrap();
    src.analyze("情報").unwrap();
    let exported = src.export(Some(out_dir.path())).unwrap();

    let dst_dir = tempfile::tempdir().unwrap();
    let mut dst = echo_app(dst_dir.path());
    assert_eq!(dst.import(&exported).unwrap(), 2);

    let src_cards = src.history().cards();
    let dst_cards = dst.history().cards();
    assert_eq!(src_cards, dst_cards);
}

#[test]
fn test_reimport_of_same_file_accepts_zero() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();

    let mut app = echo_app(dir.path());
    app.analyze("賄賂").unwrap();
    let exported = app.export(Some(out_dir.path())).unwrap();

    assert_eq!(app.import(&exported).unwrap(), 0);
    assert_eq!(app.history().len(), 1);
}

#[test]
fn test_truncated_import_fails_and_history_is_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();

    let mut app = echo_app(dir.path());
    app.analyze("賄賂").unwrap();
    app.analyze("情報").unwrap();
    let exported = app.export(Some(out_dir.path())).unwrap();

    let bytes = std::fs::read(&exported).unwrap();
    let truncated_path = out_dir.path().join("truncated.json");
    std::fs::write(&truncated_path, &bytes[..bytes.len() / 2]).unwrap();

    let before: Vec<String> = app.history().cards().iter().map(|c| c.id.clone()).collect();
    let err = app.import(&truncated_path).unwrap_err();
    assert!(matches!(err, Error::ImportFormat(_)));
    let after: Vec<String> = app.history().cards().iter().map(|c| c.id.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_import_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = echo_app(dir.path());
    let err = app.import(Path::new("/no/such/file.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
