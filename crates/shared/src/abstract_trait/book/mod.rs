mod command;
mod query;

pub use self::command::{
    BookCommandRepositoryTrait, BookCommandServiceTrait, DynBookCommandRepository,
    DynBookCommandService,
};
pub use self::query::{
    BookQueryRepositoryTrait, BookQueryServiceTrait, DynBookQueryRepository, DynBookQueryService,
};
