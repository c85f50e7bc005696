//! Defines the route handler for the receipt page.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};
use time::OffsetDateTime;

use crate::{
    Error, endpoints,
    html::{BUTTON_PRIMARY_STYLE, PAGE_CONTAINER_STYLE, SMS_STYLE, base, format_naira, link},
    receipt::ReceiptState,
    session::get_session_record,
    transfer::TransactionRecord,
};

fn receipt_view(record: &TransactionRecord) -> Markup {
    let transfer = record.transfer();

    let content = html! {
        div class={ (PAGE_CONTAINER_STYLE) " max-w-md" }
        {
            h2 class="text-2xl font-bold mb-2" { "Transfer Successful" }

            p class="text-3xl font-extrabold text-green-600 dark:text-green-500 mb-2"
            {
                (format_naira(transfer.amount()))
            }

            p class="mb-6 text-gray-600 dark:text-gray-400"
            {
                "Sent by " (transfer.account_name()) " from " (transfer.bank_name())
            }

            section class="w-full mb-6"
            {
                h3 class="text-lg font-semibold mb-2"
                {
                    "Alert sent to " (transfer.phone_number())
                }

                pre id="sms-message" class=(SMS_STYLE) { (record.message()) }
            }

            p class="mb-6"
            {
                "Reference: "
                span id="reference-number" class="font-mono" { (record.reference_number()) }
                " ("
                (link(endpoints::DETAILS_VIEW, "view details"))
                ")"
            }

            a href=(endpoints::ROOT) class={ (BUTTON_PRIMARY_STYLE) " text-center" }
            {
                "New Transfer"
            }
        }
    };

    base("Receipt", &[], &content)
}

/// Renders the receipt for the session's transfer.
///
/// Redirects to the transfer form if the session has no transfer.
pub async fn get_receipt_page(
    State(state): State<ReceiptState>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let record = get_session_record(&state.sessions, &jar, OffsetDateTime::now_utc())?;

    Ok(receipt_view(&record).into_response())
}
