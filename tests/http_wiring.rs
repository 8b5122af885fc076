//! HTTP-layer wiring tests: handlers invoked with real extractor values
//! against in-memory infrastructure, asserting status codes, cookie
//! behavior, and error mapping.

use std::sync::Arc;

use axum::body::to_bytes;
use axum::extract::{Path, State};
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use cartwheel::adapters::auth::{Argon2CredentialHasher, JwtSessionTokens};
use cartwheel::adapters::email::MockMailer;
use cartwheel::adapters::http::account::{self, SigninRequest, SignupRequest};
use cartwheel::adapters::http::cart::{self, AddToCartRequest};
use cartwheel::adapters::http::catalog::{self, CreateItemRequest};
use cartwheel::adapters::http::middleware::OptionalIdentity;
use cartwheel::adapters::http::orders::{self, CreateOrderRequest};
use cartwheel::adapters::http::{AppState, SessionCookieSettings};
use cartwheel::adapters::memory::{
    InMemoryCartRepository, InMemoryItemRepository, InMemoryOrderRepository,
    InMemoryUserRepository,
};
use cartwheel::adapters::stripe::MockPaymentGateway;
use cartwheel::application::handlers::account::{
    ListUsersHandler, RequestResetHandler, ResetPasswordHandler, SigninHandler, SignupHandler,
    UpdatePermissionsHandler,
};
use cartwheel::application::handlers::cart::{AddToCartHandler, RemoveFromCartHandler};
use cartwheel::application::handlers::catalog::{
    CreateItemHandler, DeleteItemHandler, UpdateItemHandler,
};
use cartwheel::application::handlers::checkout::CreateOrderHandler;
use cartwheel::application::handlers::orders::{
    GetOrderHandler, ListAllOrdersHandler, ListOrdersHandler,
};
use cartwheel::domain::catalog::NewItem;
use cartwheel::domain::foundation::{Identity, ItemId, Permission, PermissionSet};
use cartwheel::ports::{ItemRepository, SessionTokens, UserRepository};
use secrecy::SecretString;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    state: AppState,
    users: Arc<InMemoryUserRepository>,
    items: Arc<InMemoryItemRepository>,
    cart: Arc<InMemoryCartRepository>,
    session_tokens: Arc<JwtSessionTokens>,
}

fn test_app() -> TestApp {
    let users = Arc::new(InMemoryUserRepository::new());
    let items = Arc::new(InMemoryItemRepository::new());
    let cart = Arc::new(InMemoryCartRepository::new(items.clone()));
    let orders = Arc::new(InMemoryOrderRepository::new());
    let hasher = Arc::new(Argon2CredentialHasher::new());
    let mailer = Arc::new(MockMailer::new());
    let gateway = Arc::new(MockPaymentGateway::capturing());
    let session_tokens = Arc::new(JwtSessionTokens::new(&SecretString::new(
        "integration-test-secret-0123456789ab".into(),
    )));

    let state = AppState {
        users: users.clone(),
        session_tokens: session_tokens.clone(),
        cookie: SessionCookieSettings { name: "token".into(), max_age_secs: 31_449_600 },

        signup: Arc::new(SignupHandler::new(users.clone(), hasher.clone())),
        signin: Arc::new(SigninHandler::new(users.clone(), hasher.clone())),
        request_reset: Arc::new(RequestResetHandler::new(
            users.clone(),
            mailer,
            "https://shop.example",
        )),
        reset_password: Arc::new(ResetPasswordHandler::new(users.clone(), hasher)),
        update_permissions: Arc::new(UpdatePermissionsHandler::new(users.clone())),
        list_users: Arc::new(ListUsersHandler::new(users.clone())),

        create_item: Arc::new(CreateItemHandler::new(items.clone())),
        update_item: Arc::new(UpdateItemHandler::new(items.clone())),
        delete_item: Arc::new(DeleteItemHandler::new(items.clone())),

        add_to_cart: Arc::new(AddToCartHandler::new(cart.clone(), items.clone())),
        remove_from_cart: Arc::new(RemoveFromCartHandler::new(cart.clone())),
        create_order: Arc::new(CreateOrderHandler::new(
            cart.clone(),
            orders.clone(),
            gateway,
            "usd",
        )),

        get_order: Arc::new(GetOrderHandler::new(orders.clone())),
        list_orders: Arc::new(ListOrdersHandler::new(orders.clone())),
        list_all_orders: Arc::new(ListAllOrdersHandler::new(orders)),
    };

    TestApp { state, users, items, cart, session_tokens }
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn cookie_of(response: &Response) -> String {
    response
        .headers()
        .get(SET_COOKIE)
        .expect("Set-Cookie present")
        .to_str()
        .unwrap()
        .to_string()
}

fn signup_request(email: &str) -> Json<SignupRequest> {
    Json(SignupRequest {
        email: email.into(),
        name: "Shopper".into(),
        password: "hunter2".into(),
        confirm_password: "hunter2".into(),
    })
}

async fn signed_up_identity(app: &TestApp, email: &str) -> Identity {
    account::handlers::signup(State(app.state.clone()), signup_request(email))
        .await
        .unwrap();
    let user = app.users.find_by_email(email).await.unwrap().unwrap();
    Identity::new(user.id, user.email, user.permissions)
}

fn admin_identity() -> Identity {
    Identity::new(
        cartwheel::domain::foundation::UserId::new(),
        "admin@shop.example",
        PermissionSet::new(vec![Permission::User, Permission::Admin]).unwrap(),
    )
}

async fn seeded_item(app: &TestApp, price_cents: i64) -> ItemId {
    let item = app
        .items
        .create(NewItem {
            title: "Kettle".into(),
            description: String::new(),
            price_cents,
            image: None,
            large_image: None,
            category_id: None,
            subcategory_id: None,
        })
        .await
        .unwrap();
    item.id
}

// =============================================================================
// Session cookie flow
// =============================================================================

#[tokio::test]
async fn signup_sets_a_verifiable_session_cookie() {
    let app = test_app();

    let response = account::handlers::signup(
        State(app.state.clone()),
        signup_request("alice@shop.example"),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let cookie = cookie_of(&response);
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Max-Age=31449600"));

    // The token inside the cookie verifies back to the created account
    let token = cookie
        .split(';')
        .next()
        .unwrap()
        .trim_start_matches("token=")
        .to_string();
    let user_id = app.session_tokens.verify(&token).unwrap();
    let stored = app.users.find_by_email("alice@shop.example").await.unwrap().unwrap();
    assert_eq!(user_id, stored.id);
}

#[tokio::test]
async fn signin_with_wrong_password_maps_to_400() {
    let app = test_app();
    signed_up_identity(&app, "bob@shop.example").await;

    let err = account::handlers::signin(
        State(app.state.clone()),
        Json(SigninRequest {
            email: "bob@shop.example".into(),
            password: "wrong".into(),
        }),
    )
    .await
    .unwrap_err();

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn signout_clears_the_cookie() {
    let app = test_app();
    let response = account::handlers::signout(State(app.state.clone())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = cookie_of(&response);
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn me_returns_null_for_anonymous() {
    let app = test_app();

    let response = account::handlers::me(State(app.state.clone()), OptionalIdentity(None))
        .await
        .unwrap();

    assert_eq!(body_json(response).await, serde_json::Value::Null);
}

#[tokio::test]
async fn me_returns_account_for_signed_in_requester() {
    let app = test_app();
    let identity = signed_up_identity(&app, "carol@shop.example").await;

    let response =
        account::handlers::me(State(app.state.clone()), OptionalIdentity(Some(identity)))
            .await
            .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["email"], "carol@shop.example");
    assert!(body.get("password_hash").is_none());
}

// =============================================================================
// Authorization mapping
// =============================================================================

#[tokio::test]
async fn anonymous_item_creation_maps_to_401() {
    let app = test_app();

    let err = catalog::handlers::create_item(
        State(app.state.clone()),
        OptionalIdentity(None),
        Json(CreateItemRequest {
            title: "Mug".into(),
            description: String::new(),
            price_cents: 900,
            image: None,
            large_image: None,
            category_id: None,
            subcategory_id: None,
        }),
    )
    .await
    .unwrap_err();

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.items.count(), 0);
}

#[tokio::test]
async fn non_admin_item_creation_maps_to_403() {
    let app = test_app();
    let shopper = signed_up_identity(&app, "dave@shop.example").await;

    let err = catalog::handlers::create_item(
        State(app.state.clone()),
        OptionalIdentity(Some(shopper)),
        Json(CreateItemRequest {
            title: "Mug".into(),
            description: String::new(),
            price_cents: 900,
            image: None,
            large_image: None,
            category_id: None,
            subcategory_id: None,
        }),
    )
    .await
    .unwrap_err();

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["code"], "FORBIDDEN");
}

#[tokio::test]
async fn foreign_cart_removal_maps_to_403() {
    let app = test_app();
    let owner = signed_up_identity(&app, "erin@shop.example").await;
    let stranger = signed_up_identity(&app, "frank@shop.example").await;
    let item_id = seeded_item(&app, 2100).await;

    let created = cart::handlers::add_to_cart(
        State(app.state.clone()),
        OptionalIdentity(Some(owner)),
        Json(AddToCartRequest { item_id }),
    )
    .await
    .unwrap();
    let entry_id = body_json(created).await["id"].as_str().unwrap().to_string();

    let err = cart::handlers::remove_from_cart(
        State(app.state.clone()),
        OptionalIdentity(Some(stranger)),
        Path(entry_id),
    )
    .await
    .unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);
}

// =============================================================================
// Checkout over HTTP
// =============================================================================

#[tokio::test]
async fn checkout_returns_created_order_and_empties_cart() {
    let app = test_app();
    let shopper = signed_up_identity(&app, "grace@shop.example").await;
    let item_id = seeded_item(&app, 500).await;

    // qty 2 via two adds
    for _ in 0..2 {
        cart::handlers::add_to_cart(
            State(app.state.clone()),
            OptionalIdentity(Some(shopper.clone())),
            Json(AddToCartRequest { item_id }),
        )
        .await
        .unwrap();
    }

    let response = orders::handlers::create_order(
        State(app.state.clone()),
        OptionalIdentity(Some(shopper.clone())),
        Json(CreateOrderRequest { token: "tok_visa".into() }),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["total_cents"], 1000);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(app.cart.count_for_user(&shopper.user_id), 0);
}

#[tokio::test]
async fn empty_cart_checkout_maps_to_400() {
    let app = test_app();
    let shopper = signed_up_identity(&app, "heidi@shop.example").await;

    let err = orders::handlers::create_order(
        State(app.state.clone()),
        OptionalIdentity(Some(shopper)),
        Json(CreateOrderRequest { token: "tok_visa".into() }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_order_id_maps_to_400() {
    let app = test_app();
    let shopper = signed_up_identity(&app, "ivan@shop.example").await;

    let err = orders::handlers::get_order(
        State(app.state.clone()),
        OptionalIdentity(Some(shopper)),
        Path("not-a-uuid".to_string()),
    )
    .await
    .unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn admin_order_listing_requires_admin() {
    let app = test_app();
    let shopper = signed_up_identity(&app, "judy@shop.example").await;

    let err = orders::handlers::list_all_orders(
        State(app.state.clone()),
        OptionalIdentity(Some(shopper)),
    )
    .await
    .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);

    let ok = orders::handlers::list_all_orders(
        State(app.state.clone()),
        OptionalIdentity(Some(admin_identity())),
    )
    .await;
    assert!(ok.is_ok());
}
