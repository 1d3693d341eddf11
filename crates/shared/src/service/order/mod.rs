mod command;
mod query;

use self::command::{OrderCommandService, OrderCommandServiceDeps};
use self::query::OrderQueryService;
use crate::{
    abstract_trait::{
        DynActivityService, DynBookQueryRepository, DynOrderCommandRepository,
        DynOrderCommandService, DynOrderQueryRepository, DynOrderQueryService, DynPaymentGateway,
    },
    config::PricingConfig,
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct OrderService {
    pub query: DynOrderQueryService,
    pub command: DynOrderCommandService,
}

impl fmt::Debug for OrderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderService")
            .field("query", &"Arc<dyn OrderQueryServiceTrait>")
            .field("command", &"Arc<dyn OrderCommandServiceTrait>")
            .finish()
    }
}

#[derive(Clone)]
pub struct OrderServiceDeps {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
    pub books: DynBookQueryRepository,
    pub payment: DynPaymentGateway,
    pub activity: DynActivityService,
    pub pricing: PricingConfig,
    pub callback_url: String,
}

impl OrderService {
    pub fn new(deps: OrderServiceDeps) -> Self {
        let query_service =
            Arc::new(OrderQueryService::new(deps.query.clone())) as DynOrderQueryService;

        let command_service = Arc::new(OrderCommandService::new(OrderCommandServiceDeps {
            query: deps.query,
            command: deps.command,
            books: deps.books,
            payment: deps.payment,
            activity: deps.activity,
            pricing: deps.pricing,
            callback_url: deps.callback_url,
        })) as DynOrderCommandService;

        Self {
            query: query_service,
            command: command_service,
        }
    }
}
