use std::env;
use std::time::Duration;

use crate::cache::operations::bookmark::BOOKMARK_CACHE_EXPIRE;
use crate::cache::operations::user::USER_CACHE_EXPIRE;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub database_url: String,
    /// 未配置时使用进程内缓存
    pub redis_url: Option<String>,
    pub jwt_secret: String,
    pub jwt_expiration_secs: u64,
    pub bookmark_cache_ttl_secs: u64,
    pub user_cache_ttl_secs: u64,
    pub bcrypt_cost: u32,
    pub server_host: String,
    pub server_port: u16,
    pub api_base_uri: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        // JWT_EXPIRATION 以分钟为单位，例如 "15m"
        let jwt_expiration = env::var("JWT_EXPIRATION")
            .ok()
            .and_then(|v| v.trim_end_matches('m').parse::<u64>().ok())
            .unwrap_or(15);

        Ok(Config {
            database_url: env::var("DATABASE_URL")?,
            redis_url: env::var("REDIS_URL").ok().filter(|v| !v.is_empty()),
            jwt_secret: env::var("JWT_SECRET")?,
            jwt_expiration_secs: jwt_expiration * 60,
            bookmark_cache_ttl_secs: parse_or("BOOKMARK_CACHE_TTL", BOOKMARK_CACHE_EXPIRE),
            user_cache_ttl_secs: parse_or("USER_CACHE_TTL", USER_CACHE_EXPIRE),
            bcrypt_cost: parse_or("BCRYPT_COST", bcrypt::DEFAULT_COST),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            server_port: parse_or("SERVER_PORT", 3000),
            api_base_uri: env::var("API_BASE_URI").unwrap_or_else(|_| "/v1".into()),
        })
    }

    pub fn jwt_expiration(&self) -> Duration {
        Duration::from_secs(self.jwt_expiration_secs)
    }

    pub fn bookmark_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.bookmark_cache_ttl_secs)
    }

    pub fn user_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.user_cache_ttl_secs)
    }
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
