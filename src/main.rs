use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use bookmark_backend::{
    AppState,
    cache::{CacheStore, MemoryCacheStore, RedisCacheStore},
    config::Config,
    database::{BookmarkOperation, UserOperation},
    router::create_router,
};
use sqlx::Executor;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");

    // 设置数据库连接池
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.execute("SET application_name = 'bookmark_backend';")
                    .await?;
                Ok(())
            })
        })
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to Postgres");
    let pool = Arc::new(pool);

    // 设置缓存，未配置 Redis 时使用进程内缓存
    let cache: Arc<dyn CacheStore> = match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str()).expect("Failed to create Redis client");
            Arc::new(RedisCacheStore::new(Arc::new(client)))
        }
        None => {
            tracing::warn!("REDIS_URL not set, falling back to in-process cache");
            Arc::new(MemoryCacheStore::new())
        }
    };

    // 设置应用状态
    let state = AppState {
        config: config.clone(),
        users: Arc::new(UserOperation::new(pool.clone())),
        bookmarks: Arc::new(BookmarkOperation::new(pool)),
        cache,
    };

    let router = create_router(state);

    // 根据编译模式决定是否添加CORS
    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        router.layer(tower_http::cors::CorsLayer::permissive())
    };

    // 启动服务器
    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        router,
    )
    .await
    .expect("Failed to start server");
}
