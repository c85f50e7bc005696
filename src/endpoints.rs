//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/fields/{field}', use [format_endpoint].

/// The root route which serves the transfer form.
pub const ROOT: &str = "/";
/// The page showing the receipt for the current session's transfer.
pub const RECEIPT_VIEW: &str = "/receipt";
/// The page listing every detail of the current session's transfer.
pub const DETAILS_VIEW: &str = "/details";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route the transfer form is submitted to.
pub const SUBMIT_TRANSACTION: &str = "/submit-transaction";
/// The route for getting the current session's transfer as JSON.
pub const TRANSACTION_DATA_API: &str = "/api/transaction-data";
/// The route for normalizing and validating a single form field.
pub const FIELD_API: &str = "/api/fields/{field}";
/// The route for rendering the confirmation message preview.
pub const PREVIEW_API: &str = "/api/preview";

/// Replace the parameter in `endpoint_path` with `value`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/fields/{field}', '{field}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, value: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |end| param_start + end + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        value,
        &endpoint_path[param_end..]
    )
}
