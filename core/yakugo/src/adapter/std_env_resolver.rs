//! 標準環境変数解決実装（std::env を委譲）

use std::env;
use std::path::PathBuf;

use crate::error::Error;
use crate::ports::outbound::EnvResolver;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn resolve_home_dir(&self) -> Result<PathBuf, Error> {
        if let Ok(home) = env::var("YAKUGO_HOME") {
            if !home.is_empty() {
                return Ok(PathBuf::from(home));
            }
        }

        let config_base = env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .filter(|s| !s.is_empty())
                    .map(|h| PathBuf::from(h).join(".config"))
            })
            .ok_or_else(|| Error::env("HOME is not set"))?;

        Ok(config_base.join("yakugo"))
    }

    fn api_key_from_env(&self) -> Option<String> {
        env::var("YAKUGO_API_KEY").ok().filter(|s| !s.is_empty())
    }
}
