//! Defines the route handler for the page for filling in a new transfer.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    AppState, Error,
    html::{FORM_CONTAINER_STYLE, SMS_STYLE, base, naira_input_styles},
    timezone::get_local_offset,
    transfer::{
        FieldErrors, TransferForm,
        form::{PREVIEW_ID, transfer_form},
    },
};

/// The value format of a `datetime-local` input, e.g. "2025-01-31T13:45".
const DATE_TIME_INPUT_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

fn transfer_view(form: &TransferForm) -> Markup {
    let content = html! {
        div class=(FORM_CONTAINER_STYLE)
        {
            (transfer_form(form, &FieldErrors::default()))

            section class="w-full mt-6"
            {
                h3 class="text-lg font-semibold mb-2" { "Message Preview" }

                div id=(PREVIEW_ID) class=(SMS_STYLE)
                {
                    "Fill in the form and press \"Preview Message\" to see the alert."
                }
            }
        }
    };

    base("New Transfer", &[naira_input_styles()], &content)
}

/// The state needed for the new transfer page.
#[derive(Debug, Clone)]
pub struct TransferPageState {
    /// The local timezone as a canonical timezone name, e.g. "Africa/Lagos".
    pub local_timezone: String,
}

impl FromRef<AppState> for TransferPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Renders the page for filling in a new transfer.
///
/// The transaction date defaults to the current time in the local timezone.
pub async fn get_transfer_page(State(state): State<TransferPageState>) -> Result<Response, Error> {
    let local_offset = get_local_offset(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;

    let now = OffsetDateTime::now_utc().to_offset(local_offset);
    let transaction_date = now
        .format(DATE_TIME_INPUT_FORMAT)
        .inspect_err(|error| tracing::error!("could not format default transaction date: {error}"))
        .unwrap_or_default();

    let form = TransferForm {
        transaction_date,
        ..Default::default()
    };

    Ok(transfer_view(&form).into_response())
}
