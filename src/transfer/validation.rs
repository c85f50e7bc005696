//! Validation of the transfer form.
//!
//! Every rule is checked independently so that all problems can be shown to
//! the user at once.

use std::{collections::BTreeMap, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use time::{PrimitiveDateTime, format_description::BorrowedFormatItem, macros::format_description};
use unicode_segmentation::UnicodeSegmentation;

use crate::transfer::{Field, TransferForm, normalize::ACCOUNT_NUMBER_LENGTH};

/// The minimum number of characters in an account holder's name.
const MIN_ACCOUNT_NAME_LENGTH: usize = 2;
/// The allowed number of digits in a phone number, excluding the leading `+`.
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=15;
/// The largest accepted amount in kobo, 999,999,999,999,999.99 naira.
///
/// Keeps the simulated balance within the range of [Decimal].
const MAX_AMOUNT_KOBO: i64 = 99_999_999_999_999_999;

const ACCOUNT_NAME_ERROR: &str = "Account name must be at least 2 characters";
const BANK_NAME_ERROR: &str = "Please select a bank";
const ACCOUNT_NUMBER_ERROR: &str = "Account number must be exactly 10 digits";
const PHONE_NUMBER_ERROR: &str = "Please enter a valid phone number";
const AMOUNT_ERROR: &str = "Please enter a valid amount";
const NARRATION_ERROR: &str = "Narration is required";
const TRANSACTION_DATE_ERROR: &str = "Transaction date is required";

/// The format of a `datetime-local` input with seconds, e.g. "2025-01-31T13:45:10".
const DATE_TIME_SECONDS_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
/// The format of a `datetime-local` input without seconds, e.g. "2025-01-31T13:45".
const DATE_TIME_MINUTES_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

time::serde::format_description!(
    transaction_date_format,
    PrimitiveDateTime,
    "[year]-[month]-[day]T[hour]:[minute]:[second]"
);

/// A transfer whose fields have all passed validation.
///
/// The only way to get one is through [validate_transfer].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedTransfer {
    account_name: String,
    bank_name: String,
    account_number: String,
    phone_number: String,
    amount: Decimal,
    narration: String,
    #[serde(with = "transaction_date_format")]
    transaction_date: PrimitiveDateTime,
}

impl ValidatedTransfer {
    /// The trimmed name of the account holder.
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// The trimmed bank name.
    pub fn bank_name(&self) -> &str {
        &self.bank_name
    }

    /// The 10 digit account number.
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// The phone number without spaces, parentheses or hyphens.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// The positive amount rounded to two decimal places.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The trimmed narration.
    pub fn narration(&self) -> &str {
        &self.narration
    }

    /// The date and time entered by the user.
    pub fn transaction_date(&self) -> PrimitiveDateTime {
        self.transaction_date
    }
}

/// The validation error message for each invalid field.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    /// The error message for `field`, if it is invalid.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Whether there are no errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of invalid fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The invalid fields and their messages in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn check<T>(&mut self, field: Field, result: Result<T, &'static str>) -> Option<T> {
        result
            .map_err(|message| {
                self.0.insert(field, message);
            })
            .ok()
    }
}

/// Validate every field of `form`.
///
/// # Errors
///
/// Returns the error message of every invalid field.
pub fn validate_transfer(form: &TransferForm) -> Result<ValidatedTransfer, FieldErrors> {
    let mut errors = FieldErrors::default();

    let account_name = errors.check(Field::AccountName, check_account_name(&form.account_name));
    let bank_name = errors.check(Field::BankName, check_bank_name(&form.bank_name));
    let account_number = errors.check(
        Field::AccountNumber,
        check_account_number(&form.account_number),
    );
    let phone_number = errors.check(Field::PhoneNumber, check_phone_number(&form.phone_number));
    let amount = errors.check(Field::Amount, check_amount(&form.amount));
    let narration = errors.check(Field::Narration, check_narration(&form.narration));
    let transaction_date = errors.check(
        Field::TransactionDate,
        check_transaction_date(&form.transaction_date),
    );

    match (
        account_name,
        bank_name,
        account_number,
        phone_number,
        amount,
        narration,
        transaction_date,
    ) {
        (
            Some(account_name),
            Some(bank_name),
            Some(account_number),
            Some(phone_number),
            Some(amount),
            Some(narration),
            Some(transaction_date),
        ) => Ok(ValidatedTransfer {
            account_name,
            bank_name,
            account_number,
            phone_number,
            amount,
            narration,
            transaction_date,
        }),
        _ => Err(errors),
    }
}

/// Validate a single field, returning its error message if it is invalid.
pub fn validate_field(field: Field, raw: &str) -> Option<&'static str> {
    match field {
        Field::AccountName => check_account_name(raw).err(),
        Field::BankName => check_bank_name(raw).err(),
        Field::AccountNumber => check_account_number(raw).err(),
        Field::PhoneNumber => check_phone_number(raw).err(),
        Field::Amount => check_amount(raw).err(),
        Field::Narration => check_narration(raw).err(),
        Field::TransactionDate => check_transaction_date(raw).err(),
    }
}

/// Parse an amount that may contain thousands separators.
///
/// Returns `None` unless the amount is greater than zero after rounding to
/// two decimal places and no more than 999,999,999,999,999.99.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let without_separators: String = raw.chars().filter(|c| *c != ',').collect();
    let amount = Decimal::from_str(without_separators.trim()).ok()?;
    let amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    (amount > Decimal::ZERO && amount <= Decimal::new(MAX_AMOUNT_KOBO, 2)).then_some(amount)
}

/// Parse the value of a `datetime-local` input, with or without seconds.
pub fn parse_transaction_date(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();

    PrimitiveDateTime::parse(raw, DATE_TIME_SECONDS_FORMAT)
        .or_else(|_| PrimitiveDateTime::parse(raw, DATE_TIME_MINUTES_FORMAT))
        .ok()
}

fn check_account_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();

    if name.graphemes(true).count() >= MIN_ACCOUNT_NAME_LENGTH {
        Ok(name.to_owned())
    } else {
        Err(ACCOUNT_NAME_ERROR)
    }
}

fn check_bank_name(raw: &str) -> Result<String, &'static str> {
    let bank_name = raw.trim();

    if bank_name.is_empty() {
        Err(BANK_NAME_ERROR)
    } else {
        Ok(bank_name.to_owned())
    }
}

fn check_account_number(raw: &str) -> Result<String, &'static str> {
    let digits: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if digits.len() == ACCOUNT_NUMBER_LENGTH && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(digits)
    } else {
        Err(ACCOUNT_NUMBER_ERROR)
    }
}

fn check_phone_number(raw: &str) -> Result<String, &'static str> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '(' | ')' | '-')))
        .collect();
    let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);

    if PHONE_DIGITS.contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(cleaned)
    } else {
        Err(PHONE_NUMBER_ERROR)
    }
}

fn check_amount(raw: &str) -> Result<Decimal, &'static str> {
    parse_amount(raw).ok_or(AMOUNT_ERROR)
}

fn check_narration(raw: &str) -> Result<String, &'static str> {
    let narration = raw.trim();

    if narration.is_empty() {
        Err(NARRATION_ERROR)
    } else {
        Ok(narration.to_owned())
    }
}

fn check_transaction_date(raw: &str) -> Result<PrimitiveDateTime, &'static str> {
    parse_transaction_date(raw).ok_or(TRANSACTION_DATE_ERROR)
}

#[cfg(test)]
pub(crate) fn valid_test_form() -> TransferForm {
    TransferForm {
        account_name: "Jo".to_owned(),
        bank_name: "Test Bank".to_owned(),
        account_number: "1234567890".to_owned(),
        phone_number: "08012345678".to_owned(),
        amount: "5000".to_owned(),
        narration: "gift".to_owned(),
        transaction_date: "2025-01-31T13:45".to_owned(),
    }
}
