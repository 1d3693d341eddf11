use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::{
        requests::FindAllOrders,
        responses::{ApiResponse, OrderCounts, OrderListResponse, OrderResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponse<OrderListResponse>, ServiceError> {
        let orders = self.query.find_all(req).await.map_err(|e| {
            error!("❌ Failed to fetch orders: {e:?}");
            ServiceError::Repo(e)
        })?;

        let counts = OrderCounts::tally(orders.iter().map(|o| &o.order));

        info!("✅ Found {} order(s)", counts.total_orders);

        Ok(ApiResponse::success(
            "Orders retrieved successfully",
            OrderListResponse {
                counts,
                orders: orders.into_iter().map(OrderResponse::from).collect(),
            },
        ))
    }

    async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = self.query.find_by_user(user_id).await?;

        Ok(ApiResponse::success(
            "Orders retrieved successfully",
            orders.into_iter().map(OrderResponse::from).collect(),
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self
            .query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Order not found".to_string()))?;

        Ok(ApiResponse::success(
            "Order retrieved successfully",
            OrderResponse::from(order),
        ))
    }
}
