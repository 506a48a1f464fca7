//! Outbound ポート: usecase が外界（時刻・ID・環境・永続化・生成 API・ログ）を使うための trait

pub mod analysis;
pub mod clock;
pub mod env_resolver;
pub mod id_generator;
pub mod log;
pub mod storage;

pub use analysis::AnalysisProvider;
pub use clock::Clock;
pub use env_resolver::EnvResolver;
pub use id_generator::IdGenerator;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
pub use storage::CorpusStorage;
