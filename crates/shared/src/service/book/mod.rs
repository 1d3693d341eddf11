mod command;
mod query;

use self::command::{BookCommandService, BookCommandServiceDeps};
use self::query::BookQueryService;
use crate::abstract_trait::{
    DynActivityService, DynBookCommandRepository, DynBookCommandService, DynBookQueryRepository,
    DynBookQueryService, DynImageStore,
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct BookService {
    pub query: DynBookQueryService,
    pub command: DynBookCommandService,
}

impl fmt::Debug for BookService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookService")
            .field("query", &"Arc<dyn BookQueryServiceTrait>")
            .field("command", &"Arc<dyn BookCommandServiceTrait>")
            .finish()
    }
}

pub struct BookServiceDeps {
    pub query: DynBookQueryRepository,
    pub command: DynBookCommandRepository,
    pub images: DynImageStore,
    pub activity: DynActivityService,
}

impl BookService {
    pub fn new(deps: BookServiceDeps) -> Self {
        let BookServiceDeps {
            query,
            command,
            images,
            activity,
        } = deps;

        let query_service = Arc::new(BookQueryService::new(query.clone())) as DynBookQueryService;

        let command_service = Arc::new(BookCommandService::new(BookCommandServiceDeps {
            query,
            command,
            images,
            activity,
        })) as DynBookCommandService;

        Self {
            query: query_service,
            command: command_service,
        }
    }
}
