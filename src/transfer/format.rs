//! Display formatting for account numbers, dates and amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use time::PrimitiveDateTime;

/// The number of leading and trailing characters left visible by [mask_account_number].
const VISIBLE_DIGITS: usize = 3;
/// The number of characters of a value that are always hidden.
const MIN_HIDDEN_DIGITS: usize = 4;

/// Redact the middle of an account number, e.g. "1234567890" becomes "123****890".
///
/// At most the length minus four characters are shown, so short values show fewer digits
/// at each end, e.g. "12345678" becomes "12****78" and "12345" becomes "****".
pub fn mask_account_number(account_number: &str) -> String {
    let length = account_number.chars().count();
    let visible = VISIBLE_DIGITS.min(length.saturating_sub(MIN_HIDDEN_DIGITS) / 2);
    let head: String = account_number.chars().take(visible).collect();
    let tail: String = account_number.chars().skip(length - visible).collect();

    format!("{head}****{tail}")
}

/// Replace every character but the last three with `*`, e.g. "08012345678"
/// becomes "********678".
///
/// At most the length minus four characters are shown, so "123456" becomes
/// "****56" and "12" becomes "**".
pub fn mask_phone_number(phone_number: &str) -> String {
    let length = phone_number.chars().count();
    let hidden = length - VISIBLE_DIGITS.min(length.saturating_sub(MIN_HIDDEN_DIGITS));

    phone_number
        .chars()
        .enumerate()
        .map(|(i, c)| if i < hidden { '*' } else { c })
        .collect()
}

/// Format a date time as "DD/MM/YYYY hh:mm:ss AM", using a 12-hour clock.
pub fn format_message_date(date_time: PrimitiveDateTime) -> String {
    let hour = date_time.hour();
    let period = if hour >= 12 { "PM" } else { "AM" };
    let hour = match hour % 12 {
        0 => 12,
        hour => hour,
    };

    format!(
        "{:02}/{:02}/{} {:02}:{:02}:{:02} {period}",
        date_time.day(),
        u8::from(date_time.month()),
        date_time.year(),
        hour,
        date_time.minute(),
        date_time.second(),
    )
}

/// Format an amount with thousands separators and exactly two decimal places,
/// e.g. "12,345.67".
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().to_string();
    let (integer, fraction) = digits.split_once('.').unwrap_or((&digits, "00"));

    format!("{sign}{}.{fraction}", group_thousands(integer))
}

/// Insert a comma between every group of three digits, counting from the right.
pub(crate) fn group_thousands(digits: &str) -> String {
    let length = digits.chars().count();
    let mut grouped = String::with_capacity(length + length / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (length - i) % 3 == 0 {
            grouped.push(',');
        }

        grouped.push(digit);
    }

    grouped
}
