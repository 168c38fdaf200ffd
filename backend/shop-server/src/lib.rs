pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_log;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{OAUTH_STATE_COOKIE, callback, login, logout},
        callback_query::CallbackQuery,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{cookies::cookie_value, current_user::CurrentUser, maybe_user::MaybeUser},
    products::{
        create_product_request::CreateProductRequest,
        list_products_query::ListProductsQuery,
        product_dto::ProductDto,
        product_list_response::ProductListResponse,
        product_response::ProductResponse,
        products::{create_product, delete_product, get_product, list_products, update_product},
        update_product_request::UpdateProductRequest,
    },
    users::{
        set_role_request::SetRoleRequest,
        user_dto::UserDto,
        user_response::UserResponse,
        users::{get_me, set_role},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
