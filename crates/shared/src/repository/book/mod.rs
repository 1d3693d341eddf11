mod command;
mod query;

use self::command::BookCommandRepository;
use self::query::BookQueryRepository;

use crate::{
    abstract_trait::{DynBookCommandRepository, DynBookQueryRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct BookRepository {
    pub query: DynBookQueryRepository,
    pub command: DynBookCommandRepository,
}

impl BookRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(BookQueryRepository::new(pool.clone())) as DynBookQueryRepository;
        let command =
            Arc::new(BookCommandRepository::new(pool.clone())) as DynBookCommandRepository;

        Self { query, command }
    }
}
