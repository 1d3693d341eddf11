use crate::{
    abstract_trait::{
        DynActivityService, DynBookQueryRepository, DynOrderCommandRepository,
        DynOrderQueryRepository, DynPaymentGateway, InitializePayment, OrderCommandServiceTrait,
    },
    config::PricingConfig,
    domain::{
        pricing,
        requests::{
            ConfirmPaymentQuery, CreateOrderRecord, CreateOrderRequest, NewActivity, NewOrderItem,
            UpdateOrderRequest,
        },
        responses::{AdminResponse, ApiResponse, CreateOrderResponse, OrderResponse, UserResponse},
    },
    errors::ServiceError,
    model::{EntityType, OrderWithItems, PaymentMethod, PaymentStatus},
};
use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

pub struct OrderCommandService {
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
    books: DynBookQueryRepository,
    payment: DynPaymentGateway,
    activity: DynActivityService,
    pricing: PricingConfig,
    callback_url: String,
}

pub struct OrderCommandServiceDeps {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
    pub books: DynBookQueryRepository,
    pub payment: DynPaymentGateway,
    pub activity: DynActivityService,
    pub pricing: PricingConfig,
    pub callback_url: String,
}

impl OrderCommandService {
    pub fn new(deps: OrderCommandServiceDeps) -> Self {
        let OrderCommandServiceDeps {
            query,
            command,
            books,
            payment,
            activity,
            pricing,
            callback_url,
        } = deps;

        Self {
            query,
            command,
            books,
            payment,
            activity,
            pricing,
            callback_url,
        }
    }

    async fn existing(&self, id: i32) -> Result<OrderWithItems, ServiceError> {
        self.query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Order not found".to_string()))
    }

    async fn snapshot_items(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<Vec<NewOrderItem>, ServiceError> {
        let mut items = Vec::with_capacity(req.items.len());

        for line in &req.items {
            let book = self
                .books
                .find_by_id(line.id)
                .await?
                .ok_or_else(|| ServiceError::BadRequest(format!("Book not found: {}", line.id)))?;

            items.push(NewOrderItem {
                book_id: book.book_id,
                title: book.title,
                author: book.author,
                image: book.image,
                price: book.price,
                quantity: line.quantity,
            });
        }

        Ok(items)
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        user: &UserResponse,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<CreateOrderResponse>, ServiceError> {
        if req.items.is_empty() {
            return Err(ServiceError::BadRequest(
                "Invalid or empty items array".to_string(),
            ));
        }

        req.validate()?;

        let payment_method = PaymentMethod::normalize(req.payment_method.as_deref());
        let items = self.snapshot_items(req).await?;

        let summary = pricing::summarize(
            items.iter().map(|item| (item.price, item.quantity)),
            &self.pricing,
        )?;

        let order_code = format!("ORD-{}", Uuid::new_v4());

        info!(
            "🧾 Creating order {order_code} for user {} ({:?}, total {})",
            user.id, payment_method, summary.total
        );

        let (payment_reference, checkout_url) = match payment_method {
            PaymentMethod::OnlinePayment => {
                let init = self
                    .payment
                    .initialize(&InitializePayment {
                        email: req.customer.email.clone(),
                        amount: summary.total,
                        order_code: order_code.clone(),
                        callback_url: self.callback_url.clone(),
                    })
                    .await
                    .map_err(|e| {
                        error!("❌ Payment initialization failed for {order_code}: {e}");
                        ServiceError::Payment("Payment initialization failed".to_string())
                    })?;

                (Some(init.reference), Some(init.authorization_url))
            }
            PaymentMethod::CashOnDelivery => (None, None),
        };

        let record = CreateOrderRecord {
            order_code,
            user_id: user.id,
            full_name: req.customer.name.trim().to_string(),
            email: req.customer.email.trim().to_string(),
            phone_number: req.customer.phone.trim().to_string(),
            street: req.customer.address.street.clone(),
            city: req.customer.address.city.clone(),
            state: req.customer.address.state.clone(),
            zip_code: req.customer.address.zip.clone(),
            shipping_charge: summary.shipping,
            total_amount: summary.subtotal,
            tax_amount: summary.tax,
            payment_method,
            payment_reference,
            notes: req.notes.clone(),
            delivery_date: req.delivery_date,
            items,
        };

        let order = self.command.create_order(&record).await.map_err(|e| {
            error!("❌ Failed to store order {}: {e:?}", record.order_code);
            ServiceError::Repo(e)
        })?;

        info!("✅ Order {} created", order.order.order_code);

        Ok(ApiResponse::success(
            "Order created successfully",
            CreateOrderResponse {
                order: OrderResponse::from(order),
                checkout_url,
            },
        ))
    }

    async fn confirm_payment(
        &self,
        user_id: i32,
        req: &ConfirmPaymentQuery,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let reference = req
            .reference
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or_else(|| ServiceError::BadRequest("Payment reference is required".to_string()))?;

        let order = self
            .query
            .find_by_reference(user_id, reference)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Order not found".to_string()))?;

        let verification = self.payment.verify(reference).await.map_err(|e| {
            error!("❌ Payment verification failed for {reference}: {e}");
            ServiceError::Payment("Payment verification failed".to_string())
        })?;

        if !verification.is_success() {
            warn!(
                "⚠️ Payment {reference} not completed: {}",
                verification.status
            );
            return Err(ServiceError::BadRequest("Payment not completed".to_string()));
        }

        if verification.amount != order.order.grand_total() {
            warn!(
                "⚠️ Payment {reference} amount {} does not match order total {}",
                verification.amount,
                order.order.grand_total()
            );
            return Err(ServiceError::BadRequest("Payment amount mismatch".to_string()));
        }

        let order = if order.order.payment_status == PaymentStatus::Paid {
            order
        } else {
            self.command.mark_paid(order.order.order_id).await?
        };

        info!("✅ Payment confirmed for order {}", order.order.order_code);

        Ok(ApiResponse::success(
            "Payment confirmed",
            OrderResponse::from(order),
        ))
    }

    async fn update_order(
        &self,
        admin: &AdminResponse,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        if req.is_empty() {
            return Err(ServiceError::BadRequest(
                "No valid fields to update".to_string(),
            ));
        }

        let before = self.existing(id).await?;

        let updated = self.command.update_order(id, req).await.map_err(|e| {
            error!("❌ Failed to update order {id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        self.activity
            .log(NewActivity {
                admin_id: admin.id,
                action: "UPDATED ORDER".to_string(),
                entity_type: EntityType::Order,
                entity_id: id,
                details: json!({
                    "user": before.order.full_name,
                    "userEmail": before.order.email,
                    "adminName": admin.name,
                    "adminEmail": admin.email,
                    "orderId": before.order.order_code,
                    "paymentStatus": before.order.payment_status,
                    "previousStatus": before.order.order_status,
                    "newStatus": updated.order.order_status,
                }),
            })
            .await;

        info!(
            "✅ Order {} updated: {} -> {}",
            updated.order.order_code,
            before.order.order_status.as_str(),
            updated.order.order_status.as_str()
        );

        Ok(ApiResponse::success(
            "Order updated successfully",
            OrderResponse::from(updated),
        ))
    }

    async fn delete_order(
        &self,
        admin: &AdminResponse,
        id: i32,
    ) -> Result<ApiResponse<()>, ServiceError> {
        let existing = self.existing(id).await?;

        self.command.delete_order(id).await?;

        self.activity
            .log(NewActivity {
                admin_id: admin.id,
                action: "DELETED ORDER".to_string(),
                entity_type: EntityType::Order,
                entity_id: id,
                details: json!({
                    "orderId": existing.order.order_code,
                    "user": existing.order.full_name,
                    "adminName": admin.name,
                    "adminEmail": admin.email,
                }),
            })
            .await;

        info!("🗑️ Order {} deleted", existing.order.order_code);

        Ok(ApiResponse::success("Order deleted successfully", ()))
    }
}
