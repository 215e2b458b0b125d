use std::sync::Arc;

use cache::CacheStore;
use config::Config;
use database::{BookmarkStore, UserStore};
use services::{AuthService, BookmarkService, SessionService, UserService};

pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod services;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub users: Arc<dyn UserStore>,
    pub bookmarks: Arc<dyn BookmarkStore>,
    pub cache: Arc<dyn CacheStore>,
}

impl AppState {
    pub fn auth_service(&self) -> AuthService {
        AuthService::new(self.users.clone(), self.config.clone())
    }

    pub fn session_service(&self) -> SessionService {
        SessionService::new(
            self.users.clone(),
            self.cache.clone(),
            self.config.user_cache_ttl(),
        )
    }

    pub fn user_service(&self) -> UserService {
        UserService::new(
            self.users.clone(),
            self.cache.clone(),
            self.config.user_cache_ttl(),
        )
    }

    pub fn bookmark_service(&self) -> BookmarkService {
        BookmarkService::new(
            self.bookmarks.clone(),
            self.cache.clone(),
            self.config.bookmark_cache_ttl(),
        )
    }
}
