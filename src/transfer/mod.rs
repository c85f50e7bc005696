//! Simulated bank transfers.
//!
//! This module contains everything related to a transfer:
//! - The form fields, their live normalization and validation
//! - The `TransactionRecord` built from a validated form
//! - The confirmation message renderer
//! - The page and endpoints for filling in and submitting the form
//!
//! The same validation and rendering code backs both the interactive
//! endpoints, which run on every keystroke or blur, and the submission endpoint.

mod create_page;
mod field;
mod form;
mod format;
mod live_endpoints;
mod message;
mod normalize;
mod record;
mod submit_endpoint;
mod validation;

pub use create_page::{TransferPageState, get_transfer_page};
pub use field::{Field, TransferForm};
pub use form::BANKS;
pub use format::{format_amount, format_message_date, mask_account_number, mask_phone_number};
pub use live_endpoints::{LiveFieldForm, PreviewState, field_input_endpoint, preview_endpoint};
pub use message::{
    PROMOTIONAL_FOOTER, render_message, render_message_with_balance, simulated_balance,
};
pub use normalize::{
    ACCOUNT_NUMBER_LENGTH, normalize_account_number, normalize_amount, normalize_input,
    normalize_phone_number,
};
pub use record::{TransactionRecord, generate_reference_number};
pub use submit_endpoint::{SubmitTransferState, submit_transfer_endpoint};
pub use validation::{
    FieldErrors, ValidatedTransfer, parse_amount, parse_transaction_date, validate_field,
    validate_transfer,
};

#[cfg(test)]
pub(crate) use validation::valid_test_form;
