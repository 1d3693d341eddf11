use crate::{
    abstract_trait::{CartServiceTrait, DynBookQueryRepository, DynCartRepository},
    config::PricingConfig,
    domain::{
        pricing,
        requests::CartItemRequest,
        responses::{ApiResponse, CartItemResponse, CartResponse, CartSummary},
    },
    errors::ServiceError,
    model::Cart as CartModel,
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct CartService {
    carts: DynCartRepository,
    books: DynBookQueryRepository,
    pricing: PricingConfig,
}

pub struct CartServiceDeps {
    pub carts: DynCartRepository,
    pub books: DynBookQueryRepository,
    pub pricing: PricingConfig,
}

impl CartService {
    pub fn new(deps: CartServiceDeps) -> Self {
        Self {
            carts: deps.carts,
            books: deps.books,
            pricing: deps.pricing,
        }
    }

    async fn existing_cart(&self, user_id: i32) -> Result<CartModel, ServiceError> {
        self.carts
            .find_cart(user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Cart not found".to_string()))
    }

    async fn render(&self, cart_id: i32) -> Result<CartResponse, ServiceError> {
        let items = self.carts.find_items(cart_id).await?;

        let summary = pricing::summarize(
            items.iter().map(|item| (item.book.price, item.quantity)),
            &self.pricing,
        )?;

        Ok(CartResponse {
            items: items
                .into_iter()
                .map(CartItemResponse::try_from)
                .collect::<Result<_, _>>()?,
            summary: CartSummary::from(summary),
        })
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn add_item(
        &self,
        user_id: i32,
        req: &CartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        req.validate()?;

        if self.books.find_by_id(req.book_id).await?.is_none() {
            return Err(ServiceError::NotFound("Book not found".to_string()));
        }

        let cart = self.carts.get_or_create_cart(user_id).await?;

        self.carts
            .upsert_item(cart.cart_id, req.book_id, req.quantity)
            .await
            .map_err(|e| {
                error!("❌ Failed to add book {} to cart: {e:?}", req.book_id);
                ServiceError::Repo(e)
            })?;

        info!(
            "🛒 User {user_id} set book {} to quantity {}",
            req.book_id, req.quantity
        );

        Ok(ApiResponse::success(
            "Item added to cart",
            self.render(cart.cart_id).await?,
        ))
    }

    async fn get_cart(&self, user_id: i32) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let data = match self.carts.find_cart(user_id).await? {
            Some(cart) => self.render(cart.cart_id).await?,
            None => CartResponse::default(),
        };

        Ok(ApiResponse::success("Cart retrieved successfully", data))
    }

    async fn update_item(
        &self,
        user_id: i32,
        req: &CartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        req.validate()?;

        let cart = self.existing_cart(user_id).await?;

        let updated = self
            .carts
            .update_item(cart.cart_id, req.book_id, req.quantity)
            .await?;

        if !updated {
            return Err(ServiceError::NotFound("Item not found in cart".to_string()));
        }

        Ok(ApiResponse::success(
            "Cart updated successfully",
            self.render(cart.cart_id).await?,
        ))
    }

    async fn remove_item(
        &self,
        user_id: i32,
        book_id: i32,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let cart = self.existing_cart(user_id).await?;

        self.carts.remove_item(cart.cart_id, book_id).await?;

        Ok(ApiResponse::success(
            "Item removed from cart",
            self.render(cart.cart_id).await?,
        ))
    }

    async fn clear_cart(&self, user_id: i32) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let cart = self.existing_cart(user_id).await?;

        self.carts.clear(cart.cart_id).await?;

        info!("🧹 Cart cleared for user {user_id}");

        Ok(ApiResponse::success("Cart cleared", CartResponse::default()))
    }
}
