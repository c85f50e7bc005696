//! Defines the route handler for the page listing every detail of the session's transfer.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error, endpoints,
    html::{PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_ROW_STYLE, base, format_naira, link},
    receipt::ReceiptState,
    session::get_session_record,
    timezone::to_local_time,
    transfer::{TransactionRecord, format_message_date},
};

const SUBMITTED_AT_FORMAT: &[BorrowedFormatItem] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second] [offset_hour sign:mandatory]:[offset_minute]"
);

fn details_view(record: &TransactionRecord, submitted_at: &str) -> Markup {
    let transfer = record.transfer();
    let amount = format_naira(transfer.amount());
    let transaction_date = format_message_date(transfer.transaction_date());
    let rows = [
        ("Reference Number", record.reference_number()),
        ("Account Name", transfer.account_name()),
        ("Bank", transfer.bank_name()),
        ("Account Number", transfer.account_number()),
        ("Phone Number", transfer.phone_number()),
        ("Amount", amount.as_str()),
        ("Narration", transfer.narration()),
        ("Transaction Date", transaction_date.as_str()),
        ("Submitted At", submitted_at),
    ];

    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            h2 class="text-2xl font-bold mb-4" { "Transfer Details" }

            div class="relative overflow-x-auto shadow-md rounded-lg w-full max-w-2xl"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    tbody
                    {
                        @for (label, value) in rows {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                th
                                    scope="row"
                                    class={ (TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white" }
                                {
                                    (label)
                                }
                                td class=(TABLE_CELL_STYLE) { (value) }
                            }
                        }
                    }
                }
            }

            p class="mt-6"
            {
                (link(endpoints::RECEIPT_VIEW, "Back to receipt"))
                " | "
                (link(endpoints::ROOT, "New transfer"))
            }
        }
    };

    base("Transfer Details", &[], &content)
}

/// Renders every detail of the session's transfer.
///
/// The submission time is shown in the local timezone. Redirects to the
/// transfer form if the session has no transfer.
pub async fn get_details_page(
    State(state): State<ReceiptState>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let record = get_session_record(&state.sessions, &jar, OffsetDateTime::now_utc())?;

    let submitted_at = to_local_time(record.submitted_at(), &state.local_timezone)
        .ok_or_else(|| {
            tracing::error!("Invalid timezone {}", state.local_timezone);
            Error::InvalidTimezoneError(state.local_timezone.clone())
        })?
        .format(SUBMITTED_AT_FORMAT)
        .inspect_err(|error| tracing::error!("could not format submission time: {error}"))
        .unwrap_or_else(|_| record.submitted_at().to_string());

    Ok(details_view(&record, &submitted_at).into_response())
}
