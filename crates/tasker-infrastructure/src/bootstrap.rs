//! Application bootstrap
//!
//! Builds every service from a validated [`AppConfig`]. Wiring is explicit:
//! each use case receives its collaborators through its constructor.

use std::sync::Arc;

use tasker_application::{
    AuthorizationGate, TaskServiceImpl, TaskServiceInterface, UserServiceImpl,
    UserServiceInterface,
};
use tasker_domain::error::Result;
use tasker_domain::ports::{PasswordHasher, TokenService};
use tasker_domain::repositories::{TaskRepository, UserRepository};
use tasker_providers::{InMemoryTaskRepository, InMemoryUserRepository, SqliteUserRepository};
use tracing::{info, warn};

use crate::config::{AppConfig, StoreBackend, StoreConfig};
use crate::crypto::{BcryptPasswordHasher, JwtTokenService};

/// Shared handles to the application services
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserServiceInterface>,
    pub tasks: Arc<dyn TaskServiceInterface>,
    pub gate: AuthorizationGate,
}

impl AppContext {
    /// Open the configured user directory, then wire the bcrypt hasher,
    /// JWT service and in-memory task store around it
    pub async fn build(config: AppConfig) -> Result<Self> {
        let user_store = open_user_store(&config.store).await?;
        let task_store: Arc<dyn TaskRepository> = Arc::new(InMemoryTaskRepository::new());
        Self::wire(config, user_store, task_store)
    }

    fn wire(
        config: AppConfig,
        user_store: Arc<dyn UserRepository>,
        task_store: Arc<dyn TaskRepository>,
    ) -> Result<Self> {
        let hasher: Arc<dyn PasswordHasher> =
            Arc::new(BcryptPasswordHasher::new(config.auth.password.bcrypt_cost)?);
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_config(&config.auth.jwt));
        let store_timeout = config.store.timeout();

        let users = Arc::new(UserServiceImpl::new(
            user_store,
            hasher,
            Arc::clone(&tokens),
            store_timeout,
        ));
        let tasks = Arc::new(TaskServiceImpl::new(task_store, store_timeout));

        info!(
            bcrypt_cost = config.auth.password.bcrypt_cost,
            token_ttl_secs = config.auth.jwt.expiration_secs,
            store_backend = ?config.store.backend,
            store_timeout_secs = config.store.timeout_secs,
            "application context ready"
        );

        Ok(Self {
            config: Arc::new(config),
            users,
            tasks,
            gate: AuthorizationGate::new(tokens),
        })
    }
}

async fn open_user_store(store: &StoreConfig) -> Result<Arc<dyn UserRepository>> {
    match store.backend {
        StoreBackend::Sqlite => {
            let repo = SqliteUserRepository::connect(&store.url, store.max_connections).await?;
            Ok(Arc::new(repo))
        }
        StoreBackend::Memory => {
            warn!("user directory is in memory; accounts are lost on restart");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
    }
}
