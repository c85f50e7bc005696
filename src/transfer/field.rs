//! The fields of the transfer form and the raw, unvalidated form data.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A field of the transfer form.
///
/// The serialized name of each variant matches the `name` attribute of the
/// corresponding HTML input, e.g. [Field::AccountName] is `accountName`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// The name of the account holder sending the transfer.
    AccountName,
    /// The bank the transfer is sent from.
    BankName,
    /// The 10 digit account number.
    AccountNumber,
    /// The phone number the confirmation message is addressed to.
    PhoneNumber,
    /// The transfer amount.
    Amount,
    /// A short description of the transfer.
    Narration,
    /// The date and time of the transfer.
    TransactionDate,
}

impl Field {
    /// Every field in the order they appear on the form.
    pub const ALL: [Field; 7] = [
        Field::AccountName,
        Field::BankName,
        Field::AccountNumber,
        Field::PhoneNumber,
        Field::Amount,
        Field::Narration,
        Field::TransactionDate,
    ];

    /// The form input name for the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::AccountName => "accountName",
            Field::BankName => "bankName",
            Field::AccountNumber => "accountNumber",
            Field::PhoneNumber => "phoneNumber",
            Field::Amount => "amount",
            Field::Narration => "narration",
            Field::TransactionDate => "transactionDate",
        }
    }

    /// The human readable label for the field.
    pub fn label(self) -> &'static str {
        match self {
            Field::AccountName => "Account Name",
            Field::BankName => "Bank",
            Field::AccountNumber => "Account Number",
            Field::PhoneNumber => "Phone Number",
            Field::Amount => "Amount",
            Field::Narration => "Narration",
            Field::TransactionDate => "Transaction Date",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The raw strings submitted with the transfer form.
///
/// Missing fields are treated as empty strings so that validation can report
/// an error for every field instead of rejecting the whole request.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferForm {
    /// The account holder's name as typed.
    pub account_name: String,
    /// The selected bank, empty if none was selected.
    pub bank_name: String,
    /// The account number, possibly containing spaces or hyphens.
    pub account_number: String,
    /// The phone number, possibly containing spaces, parentheses or hyphens.
    pub phone_number: String,
    /// The amount, possibly containing thousands separators.
    pub amount: String,
    /// The transfer description.
    pub narration: String,
    /// The value of the `datetime-local` input, e.g. "2025-01-31T13:45".
    pub transaction_date: String,
}

impl TransferForm {
    /// The raw value submitted for `field`.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::AccountName => &self.account_name,
            Field::BankName => &self.bank_name,
            Field::AccountNumber => &self.account_number,
            Field::PhoneNumber => &self.phone_number,
            Field::Amount => &self.amount,
            Field::Narration => &self.narration,
            Field::TransactionDate => &self.transaction_date,
        }
    }
}
