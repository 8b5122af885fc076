//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::application::handlers::account::{
    ListUsersHandler, RequestResetHandler, ResetPasswordHandler, SigninHandler, SignupHandler,
    UpdatePermissionsHandler,
};
use crate::application::handlers::cart::{AddToCartHandler, RemoveFromCartHandler};
use crate::application::handlers::catalog::{
    CreateItemHandler, DeleteItemHandler, UpdateItemHandler,
};
use crate::application::handlers::checkout::CreateOrderHandler;
use crate::application::handlers::orders::{
    GetOrderHandler, ListAllOrdersHandler, ListOrdersHandler,
};
use crate::ports::{SessionTokens, UserRepository};

/// Cookie shape for the session token.
#[derive(Clone)]
pub struct SessionCookieSettings {
    pub name: String,
    pub max_age_secs: u64,
}

/// Everything the HTTP handlers need, shared across requests.
#[derive(Clone)]
pub struct AppState {
    // Session resolution
    pub users: Arc<dyn UserRepository>,
    pub session_tokens: Arc<dyn SessionTokens>,
    pub cookie: SessionCookieSettings,

    // Account
    pub signup: Arc<SignupHandler>,
    pub signin: Arc<SigninHandler>,
    pub request_reset: Arc<RequestResetHandler>,
    pub reset_password: Arc<ResetPasswordHandler>,
    pub update_permissions: Arc<UpdatePermissionsHandler>,
    pub list_users: Arc<ListUsersHandler>,

    // Catalog
    pub create_item: Arc<CreateItemHandler>,
    pub update_item: Arc<UpdateItemHandler>,
    pub delete_item: Arc<DeleteItemHandler>,

    // Cart + checkout
    pub add_to_cart: Arc<AddToCartHandler>,
    pub remove_from_cart: Arc<RemoveFromCartHandler>,
    pub create_order: Arc<CreateOrderHandler>,

    // Orders
    pub get_order: Arc<GetOrderHandler>,
    pub list_orders: Arc<ListOrdersHandler>,
    pub list_all_orders: Arc<ListAllOrdersHandler>,
}
