//! Service entry point: configuration, wiring, and the axum server.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use cartwheel::adapters::auth::{Argon2CredentialHasher, JwtSessionTokens};
use cartwheel::adapters::email::ResendMailer;
use cartwheel::adapters::http::{build_router, AppState, SessionCookieSettings};
use cartwheel::adapters::postgres::{
    PostgresCartRepository, PostgresItemRepository, PostgresOrderRepository,
    PostgresUserRepository,
};
use cartwheel::adapters::stripe::{StripeChargeClient, StripeConfig};
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
use cartwheel::config::AppConfig;
use cartwheel::ports::{
    CartRepository, CredentialHasher, ItemRepository, Mailer, OrderRepository, PaymentGateway,
    SessionTokens, UserRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Persistence gateway
    let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let items: Arc<dyn ItemRepository> = Arc::new(PostgresItemRepository::new(pool.clone()));
    let cart: Arc<dyn CartRepository> = Arc::new(PostgresCartRepository::new(pool.clone()));
    let orders: Arc<dyn OrderRepository> = Arc::new(PostgresOrderRepository::new(pool));

    // External services
    let gateway: Arc<dyn PaymentGateway> = Arc::new(StripeChargeClient::new(StripeConfig::new(
        config.payment.stripe_api_key.clone(),
    )));
    let mailer: Arc<dyn Mailer> = Arc::new(ResendMailer::new(&config.email));
    let hasher: Arc<dyn CredentialHasher> = Arc::new(Argon2CredentialHasher::new());
    let session_tokens: Arc<dyn SessionTokens> =
        Arc::new(JwtSessionTokens::new(&config.session.secret));

    let state = AppState {
        users: users.clone(),
        session_tokens,
        cookie: SessionCookieSettings {
            name: config.session.cookie_name.clone(),
            max_age_secs: config.session.cookie_max_age_secs,
        },

        signup: Arc::new(SignupHandler::new(users.clone(), hasher.clone())),
        signin: Arc::new(SigninHandler::new(users.clone(), hasher.clone())),
        request_reset: Arc::new(RequestResetHandler::new(
            users.clone(),
            mailer,
            config.server.frontend_url.clone(),
        )),
        reset_password: Arc::new(ResetPasswordHandler::new(users.clone(), hasher)),
        update_permissions: Arc::new(UpdatePermissionsHandler::new(users.clone())),
        list_users: Arc::new(ListUsersHandler::new(users)),

        create_item: Arc::new(CreateItemHandler::new(items.clone())),
        update_item: Arc::new(UpdateItemHandler::new(items.clone())),
        delete_item: Arc::new(DeleteItemHandler::new(items.clone())),

        add_to_cart: Arc::new(AddToCartHandler::new(cart.clone(), items)),
        remove_from_cart: Arc::new(RemoveFromCartHandler::new(cart.clone())),
        create_order: Arc::new(CreateOrderHandler::new(
            cart,
            orders.clone(),
            gateway,
            config.payment.currency.clone(),
        )),

        get_order: Arc::new(GetOrderHandler::new(orders.clone())),
        list_orders: Arc::new(ListOrdersHandler::new(orders.clone())),
        list_all_orders: Arc::new(ListAllOrdersHandler::new(orders)),
    };

    let router = build_router(state, &config.server.frontend_url);
    let addr = config.server.socket_addr();

    tracing::info!(%addr, test_mode = config.payment.is_test_mode(), "Server starting");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone()));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
