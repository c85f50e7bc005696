//! Live input normalization, applied while the user is typing.
//!
//! Every transform here is idempotent: normalizing an already normalized value
//! returns it unchanged.

use crate::transfer::{Field, format::group_thousands};

/// The maximum number of digits in an account number.
pub const ACCOUNT_NUMBER_LENGTH: usize = 10;

/// The country calling code that marks an international phone number.
const COUNTRY_CODE: &str = "234";

/// The maximum number of digits kept for an international phone number.
const INTERNATIONAL_PHONE_DIGITS: usize = 13;

/// The maximum number of digits kept for a local phone number, including the leading zero.
const LOCAL_PHONE_DIGITS: usize = 11;

/// Normalize the raw input for `field`.
///
/// Fields without a live format are returned unchanged.
pub fn normalize_input(field: Field, raw: &str) -> String {
    match field {
        Field::Amount => normalize_amount(raw),
        Field::AccountNumber => normalize_account_number(raw),
        Field::PhoneNumber => normalize_phone_number(raw),
        Field::AccountName | Field::BankName | Field::Narration | Field::TransactionDate => {
            raw.to_owned()
        }
    }
}

/// Keep digits and the first decimal point, cap the fraction at two digits and
/// group the integer part with commas.
///
/// Digits typed after a second decimal point are joined onto the fraction.
pub fn normalize_amount(raw: &str) -> String {
    let mut integer = String::new();
    let mut fraction = String::new();
    let mut has_point = false;

    for c in raw.chars() {
        match c {
            '0'..='9' if has_point => fraction.push(c),
            '0'..='9' => integer.push(c),
            '.' => has_point = true,
            _ => {}
        }
    }

    fraction.truncate(2);
    let integer = group_thousands(&integer);

    if has_point {
        format!("{integer}.{fraction}")
    } else {
        integer
    }
}

/// Keep at most the first ten digits.
pub fn normalize_account_number(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(ACCOUNT_NUMBER_LENGTH)
        .collect()
}

/// Format a phone number as either "+234…" or a spaced local number "0801 2345 678".
///
/// Numbers without a country code or leading zero get a leading zero.
pub fn normalize_phone_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.starts_with(COUNTRY_CODE) {
        let digits: String = digits.chars().take(INTERNATIONAL_PHONE_DIGITS).collect();
        format!("+{digits}")
    } else if digits.starts_with('0') {
        space_local_number(digits.chars().take(LOCAL_PHONE_DIGITS))
    } else if !digits.is_empty() {
        let digits = std::iter::once('0').chain(digits.chars().take(LOCAL_PHONE_DIGITS - 1));
        space_local_number(digits)
    } else {
        digits
    }
}

fn space_local_number(digits: impl Iterator<Item = char>) -> String {
    let mut spaced = String::with_capacity(LOCAL_PHONE_DIGITS + 2);

    for (i, digit) in digits.enumerate() {
        if i == 4 || i == 8 {
            spaced.push(' ');
        }

        spaced.push(digit);
    }

    spaced
}
