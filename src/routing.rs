//! Application router configuration.

use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    receipt::{get_details_page, get_receipt_page, get_transaction_data},
    transfer::{
        field_input_endpoint, get_transfer_page, preview_endpoint, submit_transfer_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Files in `static_dir` are served under [endpoints::STATIC].
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let pages = Router::new()
        .route(endpoints::ROOT, get(get_transfer_page))
        .route(endpoints::RECEIPT_VIEW, get(get_receipt_page))
        .route(endpoints::DETAILS_VIEW, get(get_details_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    // These POST routes are called by HTMX and respond with HTML fragments.
    let partials = Router::new()
        .route(
            endpoints::SUBMIT_TRANSACTION,
            post(submit_transfer_endpoint),
        )
        .route(endpoints::FIELD_API, post(field_input_endpoint))
        .route(endpoints::PREVIEW_API, post(preview_endpoint));

    pages
        .merge(partials)
        .route(endpoints::TRANSACTION_DATA_API, get(get_transaction_data))
        .nest_service(endpoints::STATIC, ServeDir::new(static_dir.as_ref()))
        .fallback(get_404_not_found)
        .with_state(state)
}
