mod app_tests;

pub(crate) mod fixtures {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    use crate::adapter::{FileCorpusStorage, NoopLog};
    use crate::error::Error;
    use crate::ports::outbound::{Clock, CorpusStorage, EnvResolver, IdGenerator, Log};
    use crate::usecase::HistoryStore;

    /// 固定時刻を返す Clock
    pub struct FixedClock(pub u64);

    impl Clock for FixedClock {
        fn now_ms(&self) -> u64 {
            self.0
        }
    }

    /// 連番 id を返す IdGenerator
    #[derive(Default)]
    pub struct SeqIdGenerator(AtomicU64);

    impl IdGenerator for SeqIdGenerator {
        fn next_id(&self) -> String {
            format!("test-{:04}", self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    /// プロセスの環境変数に依存しない EnvResolver
    pub struct TestEnv {
        pub home: PathBuf,
        pub api_key: Option<String>,
    }

    impl EnvResolver for TestEnv {
        fn resolve_home_dir(&self) -> Result<PathBuf, Error> {
            Ok(self.home.clone())
        }

        fn api_key_from_env(&self) -> Option<String> {
            self.api_key.clone()
        }
    }

    pub fn storage_in(dir: &std::path::Path) -> Arc<dyn CorpusStorage> {
        Arc::new(FileCorpusStorage::new(dir))
    }

    pub fn store_in(dir: &std::path::Path) -> HistoryStore {
        let log: Arc<dyn Log> = Arc::new(NoopLog);
        HistoryStore::load(
            storage_in(dir),
            Arc::new(SeqIdGenerator::default()),
            Arc::new(FixedClock(1_700_000_000_000)),
            log,
        )
    }
}
