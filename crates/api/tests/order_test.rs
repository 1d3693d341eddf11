mod common;

use axum::http::StatusCode;
use common::{TestApp, order_body};
use serde_json::json;
use shared::{config::PricingConfig, testing::TestOptions};

#[tokio::test]
async fn online_order_uses_catalog_prices_and_returns_checkout_url() {
    let app = TestApp::new().await;
    let token = app.register_user("reader", "reader@example.com").await;
    let book = app.harness.db.seed_book("Arrow of God", "Chinua Achebe", "Fiction", 2000);

    let (status, body) = app
        .post(
            "/api/order",
            Some(&token),
            order_body(
                json!([{ "id": book.book_id, "quantity": 2, "price": 1 }]),
                "Online Payment",
            ),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "{body}");

    let order = &body["data"]["order"];
    assert!(order["orderId"].as_str().unwrap().starts_with("ORD-"));
    assert_eq!(order["totalAmount"], 4000);
    assert_eq!(order["taxAmount"], 200);
    assert_eq!(order["grandTotal"], 4200);
    assert_eq!(order["paymentStatus"], "Unpaid");
    assert_eq!(order["orderStatus"], "Pending");
    assert_eq!(order["paymentMethod"], "Online Payment");
    assert_eq!(order["items"][0]["title"], "Arrow of God");
    assert_eq!(order["items"][0]["price"], 2000);
    assert_eq!(order["paymentReference"], "ref-1");
    assert_eq!(body["data"]["checkoutUrl"], "https://checkout.test/ref-1");

    let initialized = app.harness.payment.initialized();
    assert_eq!(initialized.len(), 1);
    assert_eq!(initialized[0].amount, 4200);
    assert_eq!(initialized[0].email, "ada@example.com");
    assert_eq!(initialized[0].callback_url, shared::testing::TEST_CALLBACK_URL);
}

#[tokio::test]
async fn cash_on_delivery_skips_the_gateway() {
    let app = TestApp::with_options(TestOptions {
        pricing: PricingConfig {
            tax_rate_bps: 500,
            shipping_fee: 1500,
        },
        ..TestOptions::default()
    })
    .await;
    let token = app.register_user("reader", "reader@example.com").await;
    let book = app.harness.db.seed_book("Arrow of God", "Chinua Achebe", "Fiction", 2000);

    let (status, body) = app
        .post(
            "/api/order",
            Some(&token),
            order_body(json!([{ "id": book.book_id, "quantity": 1 }]), "Cash on Delivery"),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert!(body["data"]["checkoutUrl"].is_null());
    assert_eq!(body["data"]["order"]["shippingCharge"], 1500);
    assert_eq!(body["data"]["order"]["grandTotal"], 3600);
    assert!(app.harness.payment.initialized().is_empty());
}

#[tokio::test]
async fn invalid_orders_are_rejected() {
    let app = TestApp::new().await;
    let token = app.register_user("reader", "reader@example.com").await;

    let (status, body) = app
        .post("/api/order", Some(&token), order_body(json!([]), "Online Payment"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid or empty items array");

    let (status, body) = app
        .post(
            "/api/order",
            Some(&token),
            order_body(json!([{ "id": 404, "quantity": 1 }]), "Online Payment"),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Book not found: 404");

    assert!(app.harness.db.orders().is_empty());
}

#[tokio::test]
async fn oversized_orders_are_rejected_before_payment() {
    let app = TestApp::new().await;
    let token = app.register_user("reader", "reader@example.com").await;
    let book = app.harness.db.seed_book("First Folio", "William Shakespeare", "Drama", i64::MAX / 100);

    let (status, _) = app
        .post(
            "/api/order",
            Some(&token),
            order_body(json!([{ "id": book.book_id, "quantity": i32::MAX }]), "Online Payment"),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .post(
            "/api/order",
            Some(&token),
            order_body(json!([{ "id": book.book_id, "quantity": 1000 }]), "Online Payment"),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Amount is too large");

    assert!(app.harness.payment.initialized().is_empty());
    assert!(app.harness.db.orders().is_empty());
}

#[tokio::test]
async fn gateway_failure_stores_nothing() {
    let app = TestApp::new().await;
    let token = app.register_user("reader", "reader@example.com").await;
    let book = app.harness.db.seed_book("Arrow of God", "Chinua Achebe", "Fiction", 2000);
    app.harness.payment.fail_initialization(true);

    let (status, body) = app
        .post(
            "/api/order",
            Some(&token),
            order_body(json!([{ "id": book.book_id, "quantity": 1 }]), "Online Payment"),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["message"], "Payment initialization failed");
    assert!(app.harness.db.orders().is_empty());
}

#[tokio::test]
async fn confirming_payment_marks_the_order_paid() {
    let app = TestApp::new().await;
    let token = app.register_user("reader", "reader@example.com").await;
    let other = app.register_user("other", "other@example.com").await;
    let book = app.harness.db.seed_book("Arrow of God", "Chinua Achebe", "Fiction", 2000);

    app.post(
        "/api/order",
        Some(&token),
        order_body(json!([{ "id": book.book_id, "quantity": 1 }]), "Online Payment"),
    )
    .await;

    let (status, body) = app.get("/api/order/confirm", Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Payment reference is required");

    let (status, _) = app
        .get("/api/order/confirm?reference=ref-1", Some(&other))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.harness.payment.set_verification("ref-1", "abandoned", 2100);
    let (status, body) = app
        .get("/api/order/confirm?reference=ref-1", Some(&token))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Payment not completed");

    app.harness.payment.set_verification("ref-1", "success", 100);
    let (status, body) = app
        .get("/api/order/confirm?reference=ref-1", Some(&token))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Payment amount mismatch");

    app.harness.payment.set_verification("ref-1", "success", 2100);
    for _ in 0..2 {
        let (status, body) = app
            .get("/api/order/confirm?reference=ref-1", Some(&token))
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["data"]["paymentStatus"], "Paid");
    }
}

#[tokio::test]
async fn users_see_only_their_own_orders() {
    let app = TestApp::new().await;
    let reader = app.register_user("reader", "reader@example.com").await;
    let other = app.register_user("other", "other@example.com").await;
    let book = app.harness.db.seed_book("Arrow of God", "Chinua Achebe", "Fiction", 2000);

    for quantity in [1, 2] {
        app.post(
            "/api/order",
            Some(&reader),
            order_body(json!([{ "id": book.book_id, "quantity": quantity }]), "Cash on Delivery"),
        )
        .await;
    }

    let (status, body) = app.get("/api/order/user", Some(&reader)).await;
    assert_eq!(status, StatusCode::OK);
    let orders = body["data"].as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["items"][0]["quantity"], 2);

    let (_, body) = app.get("/api/order/user", Some(&other)).await;
    assert_eq!(body["data"], json!([]));

    let (status, _) = app.get("/api/order", Some(&reader)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_lists_filters_updates_and_deletes_orders() {
    let app = TestApp::new().await;
    let reader = app.register_user("reader", "reader@example.com").await;
    let admin = app.register_admin("Boss", "boss@example.com").await;
    let arrow = app.harness.db.seed_book("Arrow of God", "Chinua Achebe", "Fiction", 2000);
    let sun = app.harness.db.seed_book("Half of a Yellow Sun", "Chimamanda Adichie", "Fiction", 3500);

    let (_, first) = app
        .post(
            "/api/order",
            Some(&reader),
            order_body(json!([{ "id": arrow.book_id, "quantity": 1 }]), "Cash on Delivery"),
        )
        .await;
    let (_, second) = app
        .post(
            "/api/order",
            Some(&reader),
            order_body(json!([{ "id": sun.book_id, "quantity": 1 }]), "Online Payment"),
        )
        .await;
    let first_id = first["data"]["order"]["id"].as_i64().unwrap();
    let first_code = first["data"]["order"]["orderId"].as_str().unwrap().to_string();
    let second_id = second["data"]["order"]["id"].as_i64().unwrap();

    let (status, body) = app
        .put(
            &format!("/api/order/{first_id}"),
            Some(&admin),
            json!({ "orderStatus": "Shipped", "notes": "Dispatched", "grandTotal": 1 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["orderStatus"], "Shipped");
    assert_eq!(body["data"]["notes"], "Dispatched");
    assert_eq!(body["data"]["grandTotal"], 2100);

    let (status, body) = app
        .put(&format!("/api/order/{first_id}"), Some(&admin), json!({}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No valid fields to update");

    let (status, body) = app.get("/api/order", Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["counts"]["totalOrders"], 2);
    assert_eq!(body["data"]["counts"]["shipped"], 1);
    assert_eq!(body["data"]["counts"]["pending"], 1);
    assert_eq!(body["data"]["counts"]["pendingPayment"], 2);
    assert_eq!(body["data"]["orders"][0]["id"], second_id);

    let (_, body) = app.get("/api/order?status=Shipped", Some(&admin)).await;
    assert_eq!(body["data"]["orders"].as_array().unwrap().len(), 1);

    let (_, body) = app.get("/api/order?search=yellow", Some(&admin)).await;
    assert_eq!(body["data"]["orders"][0]["id"], second_id);
    assert_eq!(body["data"]["counts"]["totalOrders"], 1);

    let (status, body) = app
        .get(&format!("/api/order/{first_id}"), Some(&admin))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["orderId"], first_code);

    let (status, _) = app
        .delete(&format!("/api/order/{first_id}"), Some(&admin))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .get(&format!("/api/order/{first_id}"), Some(&admin))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let activities = app.harness.db.activities();
    assert_eq!(activities.len(), 2);
    assert_eq!(activities[0].action, "UPDATED ORDER");
    assert_eq!(activities[0].details["previousStatus"], "Pending");
    assert_eq!(activities[0].details["newStatus"], "Shipped");
    assert_eq!(activities[0].details["orderId"], first_code.as_str());
    assert_eq!(activities[1].action, "DELETED ORDER");
    assert_eq!(activities[1].details["adminEmail"], "boss@example.com");
}
