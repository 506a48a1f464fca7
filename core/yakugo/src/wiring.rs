//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use crate::adapter::{FileCorpusStorage, FileJsonLog, StdClock, StdEnvResolver, StdIdGenerator};
use crate::error::Error;
use crate::llm::factory::{self, ProviderType};
use crate::ports::outbound::{Clock, CorpusStorage, EnvResolver, Log};
use crate::usecase::{AppUseCase, HistoryStore};

const LOG_FILENAME: &str = "yakugo.log.jsonl";

/// 組み立て済みアプリケーション
pub struct App {
    pub use_case: AppUseCase,
    pub logger: Arc<dyn Log>,
}

/// 配線: 標準アダプタで App を組み立てる
///
/// 履歴とクレデンシャルはここで一度だけ読み込む。
pub fn wire(provider_name: Option<&str>, model: Option<String>) -> Result<App, Error> {
    let provider_type = match provider_name {
        None => ProviderType::Gemini,
        Some(name) => ProviderType::from_str(name)
            .ok_or_else(|| Error::invalid_argument(format!("unknown provider: {}", name)))?,
    };

    let env: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let home = env.resolve_home_dir()?;
    let logger: Arc<dyn Log> = Arc::new(FileJsonLog::new(home.join("logs").join(LOG_FILENAME)));
    let storage: Arc<dyn CorpusStorage> = Arc::new(FileCorpusStorage::new(&home));
    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let id_gen = Arc::new(StdIdGenerator::new(Arc::clone(&clock)));
    let provider = factory::create(provider_type, model);

    let store = HistoryStore::load(
        Arc::clone(&storage),
        id_gen,
        Arc::clone(&clock),
        Arc::clone(&logger),
    );
    let use_case = AppUseCase::new(store, provider, storage, env, Arc::clone(&logger))?;

    Ok(App { use_case, logger })
}
