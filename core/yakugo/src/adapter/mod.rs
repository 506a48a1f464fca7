//! 標準アダプタ（Outbound ポートの実装）

pub mod file_json_log;
pub mod file_storage;
pub mod std_clock;
pub mod std_env_resolver;
pub mod std_id_generator;
pub mod transfer;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use file_storage::FileCorpusStorage;
pub use std_clock::StdClock;
pub use std_env_resolver::StdEnvResolver;
pub use std_id_generator::StdIdGenerator;
