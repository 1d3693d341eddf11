mod command;
mod query;

use std::sync::Arc;

use self::command::UserCommandRepository;
use self::query::UserQueryRepository;

use crate::{
    abstract_trait::{DynUserCommandRepository, DynUserQueryRepository},
    config::ConnectionPool,
};

/// Postgres-backed storefront customer accounts, both password and Google sign-in.
#[derive(Clone)]
pub struct UserRepository {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
}

impl UserRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        Self {
            query: Arc::new(UserQueryRepository::new(pool.clone())),
            command: Arc::new(UserCommandRepository::new(pool)),
        }
    }
}

const USER_COLUMNS: &str = "user_id, name, email, password, firebase_uid, created_at, updated_at";
