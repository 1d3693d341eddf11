use crate::{
    abstract_trait::{
        ActivityRepositoryTrait, AdminRepositoryTrait, BookCommandRepositoryTrait,
        BookQueryRepositoryTrait, CartRepositoryTrait, OrderCommandRepositoryTrait,
        OrderQueryRepositoryTrait, UserCommandRepositoryTrait, UserQueryRepositoryTrait,
    },
    domain::requests::{
        CreateAdminRecord, CreateBookRequest, CreateOrderRecord, CreateUserRecord, FindAllBooks,
        FindAllOrders, NewActivity, UpdateOrderRequest,
    },
    errors::RepositoryError,
    model::{
        Activity, Admin, Book, Cart, CartItem, Order, OrderItem, OrderStatus, OrderWithItems,
        PaymentStatus, User,
    },
};
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone)]
struct CartLine {
    cart_id: i32,
    book_id: i32,
    quantity: i32,
    seq: i32,
}

#[derive(Debug, Default)]
struct Tables {
    next_id: i32,
    users: Vec<User>,
    admins: Vec<Admin>,
    books: Vec<Book>,
    carts: Vec<Cart>,
    cart_lines: Vec<CartLine>,
    orders: Vec<Order>,
    order_items: Vec<OrderItem>,
    activities: Vec<Activity>,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn with_items(&self, order: Order) -> OrderWithItems {
        let items = self
            .order_items
            .iter()
            .filter(|i| i.order_id == order.order_id)
            .cloned()
            .collect();

        OrderWithItems { order, items }
    }

    fn matches_search(&self, order: &Order, needle: &str) -> bool {
        let hit = |value: &str| value.to_lowercase().contains(needle);

        hit(&order.order_code)
            || hit(&order.full_name)
            || hit(&order.email)
            || self
                .order_items
                .iter()
                .any(|i| i.order_id == order.order_id && hit(&i.title))
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn newest_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| {
        b.placed_at
            .cmp(&a.placed_at)
            .then(b.order_id.cmp(&a.order_id))
    });
}

/// Shared in-memory tables implementing every repository trait.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDb {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryDb {
    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn seed_book(&self, title: &str, author: &str, category: &str, price: i64) -> Book {
        let mut tables = self.lock();
        let at = now();

        let book = Book {
            book_id: tables.next_id(),
            title: title.to_string(),
            author: author.to_string(),
            price,
            rating: 0,
            category: category.to_string(),
            description: String::new(),
            image: None,
            created_at: at,
            updated_at: at,
        };

        tables.books.push(book.clone());
        book
    }

    pub fn set_admin_active(&self, admin_id: i32, active: bool) {
        let mut tables = self.lock();
        if let Some(admin) = tables.admins.iter_mut().find(|a| a.admin_id == admin_id) {
            admin.is_active = active;
        }
    }

    pub fn books(&self) -> Vec<Book> {
        self.lock().books.clone()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.lock().orders.clone()
    }

    pub fn order_items(&self) -> Vec<OrderItem> {
        self.lock().order_items.clone()
    }

    pub fn activities(&self) -> Vec<Activity> {
        self.lock().activities.clone()
    }

    pub fn users(&self) -> Vec<User> {
        self.lock().users.clone()
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for InMemoryDb {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        Ok(self.lock().users.iter().find(|u| u.user_id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for InMemoryDb {
    async fn create_user(&self, req: &CreateUserRecord) -> Result<User, RepositoryError> {
        let mut tables = self.lock();

        if tables
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&req.email))
        {
            return Err(RepositoryError::AlreadyExists("users_email_key".into()));
        }

        let at = now();
        let user = User {
            user_id: tables.next_id(),
            name: req.name.clone(),
            email: req.email.clone(),
            password: req.password.clone(),
            firebase_uid: req.firebase_uid.clone(),
            created_at: at,
            updated_at: at,
        };

        tables.users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl AdminRepositoryTrait for InMemoryDb {
    async fn find_by_id(&self, id: i32) -> Result<Option<Admin>, RepositoryError> {
        Ok(self.lock().admins.iter().find(|a| a.admin_id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, RepositoryError> {
        Ok(self
            .lock()
            .admins
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create_admin(&self, req: &CreateAdminRecord) -> Result<Admin, RepositoryError> {
        let mut tables = self.lock();

        if tables
            .admins
            .iter()
            .any(|a| a.email.eq_ignore_ascii_case(&req.email))
        {
            return Err(RepositoryError::AlreadyExists("admins_email_key".into()));
        }

        let at = now();
        let admin = Admin {
            admin_id: tables.next_id(),
            name: req.name.clone(),
            email: req.email.clone(),
            password: req.password.clone(),
            is_active: true,
            created_at: at,
            updated_at: at,
        };

        tables.admins.push(admin.clone());
        Ok(admin)
    }
}

#[async_trait]
impl BookQueryRepositoryTrait for InMemoryDb {
    async fn find_all(&self, req: &FindAllBooks) -> Result<(Vec<Book>, i64), RepositoryError> {
        let tables = self.lock();
        let needle = req.search.trim().to_lowercase();
        let category = req.category.as_deref().map(str::trim).filter(|c| !c.is_empty());

        let mut books: Vec<Book> = tables
            .books
            .iter()
            .filter(|b| {
                needle.is_empty()
                    || b.title.to_lowercase().contains(&needle)
                    || b.author.to_lowercase().contains(&needle)
            })
            .filter(|b| category.is_none_or(|c| b.category == c))
            .cloned()
            .collect();

        books.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.book_id.cmp(&a.book_id))
        });

        let total = books.len() as i64;
        let offset = usize::try_from(req.offset()).unwrap_or(usize::MAX);

        let page = books
            .into_iter()
            .skip(offset)
            .take(req.page_size.max(0) as usize)
            .collect();

        Ok((page, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, RepositoryError> {
        Ok(self.lock().books.iter().find(|b| b.book_id == id).cloned())
    }
}

#[async_trait]
impl BookCommandRepositoryTrait for InMemoryDb {
    async fn create_book(
        &self,
        req: &CreateBookRequest,
        image: Option<&str>,
    ) -> Result<Book, RepositoryError> {
        let mut tables = self.lock();
        let at = now();

        let book = Book {
            book_id: tables.next_id(),
            title: req.title.clone(),
            author: req.author.clone(),
            price: req.price,
            rating: req.rating,
            category: req.category.clone(),
            description: req.description.clone(),
            image: image.map(str::to_string),
            created_at: at,
            updated_at: at,
        };

        tables.books.push(book.clone());
        Ok(book)
    }

    async fn delete_book(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tables = self.lock();

        let before = tables.books.len();
        tables.books.retain(|b| b.book_id != id);

        if tables.books.len() == before {
            return Err(RepositoryError::NotFound);
        }

        tables.cart_lines.retain(|l| l.book_id != id);
        for item in tables.order_items.iter_mut().filter(|i| i.book_id == Some(id)) {
            item.book_id = None;
        }

        Ok(())
    }
}

#[async_trait]
impl CartRepositoryTrait for InMemoryDb {
    async fn find_cart(&self, user_id: i32) -> Result<Option<Cart>, RepositoryError> {
        Ok(self.lock().carts.iter().find(|c| c.user_id == user_id).cloned())
    }

    async fn get_or_create_cart(&self, user_id: i32) -> Result<Cart, RepositoryError> {
        let mut tables = self.lock();

        if let Some(cart) = tables.carts.iter().find(|c| c.user_id == user_id) {
            return Ok(cart.clone());
        }

        let at = now();
        let cart = Cart {
            cart_id: tables.next_id(),
            user_id,
            created_at: at,
            updated_at: at,
        };

        tables.carts.push(cart.clone());
        Ok(cart)
    }

    async fn find_items(&self, cart_id: i32) -> Result<Vec<CartItem>, RepositoryError> {
        let tables = self.lock();

        let mut lines: Vec<&CartLine> = tables
            .cart_lines
            .iter()
            .filter(|l| l.cart_id == cart_id)
            .collect();
        lines.sort_by_key(|l| l.seq);

        Ok(lines
            .into_iter()
            .filter_map(|line| {
                tables
                    .books
                    .iter()
                    .find(|b| b.book_id == line.book_id)
                    .map(|book| CartItem {
                        book: book.clone(),
                        quantity: line.quantity,
                    })
            })
            .collect())
    }

    async fn upsert_item(
        &self,
        cart_id: i32,
        book_id: i32,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        let mut tables = self.lock();

        if let Some(line) = tables
            .cart_lines
            .iter_mut()
            .find(|l| l.cart_id == cart_id && l.book_id == book_id)
        {
            line.quantity = quantity;
            return Ok(());
        }

        let seq = tables.next_id();
        tables.cart_lines.push(CartLine {
            cart_id,
            book_id,
            quantity,
            seq,
        });

        Ok(())
    }

    async fn update_item(
        &self,
        cart_id: i32,
        book_id: i32,
        quantity: i32,
    ) -> Result<bool, RepositoryError> {
        let mut tables = self.lock();

        match tables
            .cart_lines
            .iter_mut()
            .find(|l| l.cart_id == cart_id && l.book_id == book_id)
        {
            Some(line) => {
                line.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove_item(&self, cart_id: i32, book_id: i32) -> Result<(), RepositoryError> {
        self.lock()
            .cart_lines
            .retain(|l| !(l.cart_id == cart_id && l.book_id == book_id));
        Ok(())
    }

    async fn clear(&self, cart_id: i32) -> Result<(), RepositoryError> {
        self.lock().cart_lines.retain(|l| l.cart_id != cart_id);
        Ok(())
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for InMemoryDb {
    async fn find_all(&self, req: &FindAllOrders) -> Result<Vec<OrderWithItems>, RepositoryError> {
        let tables = self.lock();
        let needle = req.search.trim().to_lowercase();

        let mut orders: Vec<Order> = tables
            .orders
            .iter()
            .filter(|o| needle.is_empty() || tables.matches_search(o, &needle))
            .filter(|o| req.status.is_none_or(|s| o.order_status == s))
            .cloned()
            .collect();

        newest_first(&mut orders);

        Ok(orders.into_iter().map(|o| tables.with_items(o)).collect())
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<OrderWithItems>, RepositoryError> {
        let tables = self.lock();

        let mut orders: Vec<Order> = tables
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();

        newest_first(&mut orders);

        Ok(orders.into_iter().map(|o| tables.with_items(o)).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderWithItems>, RepositoryError> {
        let tables = self.lock();

        Ok(tables
            .orders
            .iter()
            .find(|o| o.order_id == id)
            .cloned()
            .map(|o| tables.with_items(o)))
    }

    async fn find_by_reference(
        &self,
        user_id: i32,
        reference: &str,
    ) -> Result<Option<OrderWithItems>, RepositoryError> {
        let tables = self.lock();

        Ok(tables
            .orders
            .iter()
            .find(|o| o.user_id == user_id && o.payment_reference.as_deref() == Some(reference))
            .cloned()
            .map(|o| tables.with_items(o)))
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for InMemoryDb {
    async fn create_order(
        &self,
        req: &CreateOrderRecord,
    ) -> Result<OrderWithItems, RepositoryError> {
        let mut tables = self.lock();

        if tables.orders.iter().any(|o| o.order_code == req.order_code) {
            return Err(RepositoryError::AlreadyExists("orders_order_code_key".into()));
        }

        let at = now();
        let order = Order {
            order_id: tables.next_id(),
            order_code: req.order_code.clone(),
            user_id: req.user_id,
            full_name: req.full_name.clone(),
            email: req.email.clone(),
            phone_number: req.phone_number.clone(),
            street: req.street.clone(),
            city: req.city.clone(),
            state: req.state.clone(),
            zip_code: req.zip_code.clone(),
            shipping_charge: req.shipping_charge,
            total_amount: req.total_amount,
            tax_amount: req.tax_amount,
            payment_method: req.payment_method,
            payment_status: PaymentStatus::Unpaid,
            order_status: OrderStatus::Pending,
            notes: req.notes.clone(),
            delivery_date: req.delivery_date,
            payment_reference: req.payment_reference.clone(),
            placed_at: at,
            updated_at: at,
        };

        let mut items = Vec::with_capacity(req.items.len());
        for item in &req.items {
            items.push(OrderItem {
                order_item_id: tables.next_id(),
                order_id: order.order_id,
                book_id: Some(item.book_id),
                title: item.title.clone(),
                author: item.author.clone(),
                image: item.image.clone(),
                price: item.price,
                quantity: item.quantity,
            });
        }

        tables.orders.push(order.clone());
        tables.order_items.extend(items.iter().cloned());

        Ok(OrderWithItems { order, items })
    }

    async fn update_order(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<OrderWithItems, RepositoryError> {
        let mut tables = self.lock();

        let order = tables
            .orders
            .iter_mut()
            .find(|o| o.order_id == id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(status) = req.order_status {
            order.order_status = status;
        }
        if let Some(status) = req.payment_status {
            order.payment_status = status;
        }
        if let Some(date) = req.delivery_date {
            order.delivery_date = Some(date);
        }
        if let Some(notes) = &req.notes {
            order.notes = Some(notes.clone());
        }
        order.updated_at = now();

        let order = order.clone();
        Ok(tables.with_items(order))
    }

    async fn mark_paid(&self, id: i32) -> Result<OrderWithItems, RepositoryError> {
        let mut tables = self.lock();

        let order = tables
            .orders
            .iter_mut()
            .find(|o| o.order_id == id)
            .ok_or(RepositoryError::NotFound)?;

        order.payment_status = PaymentStatus::Paid;
        order.updated_at = now();

        let order = order.clone();
        Ok(tables.with_items(order))
    }

    async fn delete_order(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tables = self.lock();

        let before = tables.orders.len();
        tables.orders.retain(|o| o.order_id != id);

        if tables.orders.len() == before {
            return Err(RepositoryError::NotFound);
        }

        tables.order_items.retain(|i| i.order_id != id);
        Ok(())
    }
}

#[async_trait]
impl ActivityRepositoryTrait for InMemoryDb {
    async fn create(&self, req: &NewActivity) -> Result<Activity, RepositoryError> {
        let mut tables = self.lock();

        let activity = Activity {
            activity_id: tables.next_id(),
            admin_id: req.admin_id,
            entity_type: req.entity_type,
            entity_id: req.entity_id,
            action: req.action.clone(),
            details: req.details.clone(),
            created_at: now(),
        };

        tables.activities.push(activity.clone());
        Ok(activity)
    }

    async fn find_recent(&self, limit: i64) -> Result<Vec<Activity>, RepositoryError> {
        let mut activities = self.lock().activities.clone();

        activities.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.activity_id.cmp(&a.activity_id))
        });
        activities.truncate(limit.max(0) as usize);

        Ok(activities)
    }
}
