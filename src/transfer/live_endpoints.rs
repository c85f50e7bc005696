//! The HTMX endpoints that normalize and validate the form while it is filled in.

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState,
    app_state::SharedRng,
    html::FORM_ERROR_STYLE,
    internal_server_error::get_internal_server_error_redirect,
    transfer::{
        Field, FieldErrors, TransferForm, form::field_input, normalize_input, render_message,
        validate_field, validate_transfer,
    },
};

/// The HTMX trigger sent while the user is still typing.
const INPUT_TRIGGER: &str = "input";

/// The form data sent when a single field changes.
#[derive(Debug, Deserialize)]
pub struct LiveFieldForm {
    /// The type of the event that sent the request, e.g. "input" or "blur".
    #[serde(default)]
    pub trigger: Option<String>,
    /// The value of the field that changed.
    #[serde(flatten)]
    pub transfer: TransferForm,
}

impl LiveFieldForm {
    /// Errors are hidden while typing and shown once the user leaves the field.
    fn should_show_error(&self) -> bool {
        self.trigger.as_deref() != Some(INPUT_TRIGGER)
    }
}

/// A route handler that returns the input for `field` with its value
/// normalized, and an error message if the user has left an invalid field.
pub async fn field_input_endpoint(
    Path(field): Path<Field>,
    Form(form): Form<LiveFieldForm>,
) -> Response {
    let normalized = normalize_input(field, form.transfer.value(field));
    let error = if form.should_show_error() {
        validate_field(field, &normalized)
    } else {
        None
    };

    field_input(field, &normalized, error).into_response()
}

/// The state needed to preview the confirmation message.
#[derive(Debug, Clone)]
pub struct PreviewState {
    /// The source of the simulated balance.
    pub rng: SharedRng,
}

impl FromRef<AppState> for PreviewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            rng: state.rng.clone(),
        }
    }
}

/// A route handler that renders the confirmation message for the form as
/// it is now, or lists the fields that still need fixing.
///
/// The preview draws its own simulated balance, so the balance on the
/// receipt will differ.
pub async fn preview_endpoint(
    State(state): State<PreviewState>,
    Form(form): Form<TransferForm>,
) -> Response {
    let transfer = match validate_transfer(&form) {
        Ok(transfer) => transfer,
        Err(errors) => return outstanding_errors_view(&errors).into_response(),
    };

    let message = match state.rng.lock() {
        Ok(mut rng) => render_message(&transfer, &mut *rng),
        Err(error) => {
            tracing::error!("could not render message preview: {error}");
            return get_internal_server_error_redirect();
        }
    };

    html! {
        pre id="sms-message" class="whitespace-pre-wrap" { (message) }
    }
    .into_response()
}

fn outstanding_errors_view(errors: &FieldErrors) -> Markup {
    html! {
        p { "Fix the following before previewing the message:" }

        ul class="list-disc list-inside"
        {
            @for (field, message) in errors.iter() {
                li class=(FORM_ERROR_STYLE) { (field.label()) ": " (message) }
            }
        }
    }
}
