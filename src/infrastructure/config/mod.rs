use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::shared::constants;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub users_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(skip_serializing)]
    pub api_key: String,
    /// 是否使用了内置的回退密钥
    pub using_default_api_key: bool,
}

impl Config {
    /// 从进程环境变量加载配置
    ///
    /// 只读取进程环境；`.env` 文件由 `main` 在启动时加载一次。
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// 从任意键值来源构建配置，缺失或无法解析的值使用默认值
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("API_KEY").filter(|key| !key.is_empty());
        let using_default_api_key = api_key.is_none();

        Config {
            server: ServerConfig {
                port: lookup("PORT")
                    .and_then(|port| port.parse().ok())
                    .unwrap_or(constants::server::DEFAULT_PORT),
                host: lookup("HOST")
                    .unwrap_or_else(|| constants::server::DEFAULT_HOST.to_string()),
            },

            storage: StorageConfig {
                users_file: lookup("USERS_FILE")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(constants::storage::DEFAULT_USERS_FILE)),
            },

            auth: AuthConfig {
                api_key: api_key
                    .unwrap_or_else(|| constants::auth::DEFAULT_API_KEY.to_string()),
                using_default_api_key,
            },
        }
    }

    /// 监听地址
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
