//! Renders the simulated confirmation SMS for a transfer.

use rand::Rng;
use rust_decimal::Decimal;

use crate::transfer::{
    ValidatedTransfer,
    format::{format_amount, format_message_date, mask_account_number},
};

/// The last line of every message.
pub const PROMOTIONAL_FOOTER: &str = "Dial *966# for quick airtime/Data purchase";

/// The smallest amount added to the transfer to simulate the balance, in cents.
const BALANCE_OFFSET_MIN_CENTS: i64 = 100_000;
/// The exclusive upper bound of the amount added to simulate the balance, in cents.
const BALANCE_OFFSET_MAX_CENTS: i64 = 1_100_000;

/// Simulate an account balance after receiving `amount`.
///
/// The balance is `amount` plus a random value in [1000.00, 11000.00) drawn
/// from `rng` in whole cents. The balance saturates at [Decimal::MAX].
pub fn simulated_balance<R: Rng + ?Sized>(amount: Decimal, rng: &mut R) -> Decimal {
    let offset_cents = rng.gen_range(BALANCE_OFFSET_MIN_CENTS..BALANCE_OFFSET_MAX_CENTS);

    amount
        .checked_add(Decimal::new(offset_cents, 2))
        .unwrap_or(Decimal::MAX)
}

/// Render the confirmation message for `transfer`, drawing the simulated
/// balance from `rng`.
pub fn render_message<R: Rng + ?Sized>(transfer: &ValidatedTransfer, rng: &mut R) -> String {
    let balance = simulated_balance(transfer.amount(), rng);

    render_message_with_balance(transfer, balance)
}

/// Render the confirmation message for `transfer` with a known `balance`.
pub fn render_message_with_balance(transfer: &ValidatedTransfer, balance: Decimal) -> String {
    [
        format!("Acct:{}", mask_account_number(transfer.account_number())),
        format!("DT:{}", format_message_date(transfer.transaction_date())),
        format!(
            "CR/CR//Transfer from {}",
            transfer.account_name().to_uppercase()
        ),
        format!("CR Amt:{}", format_amount(transfer.amount())),
        format!("Bal:{}", format_amount(balance)),
        PROMOTIONAL_FOOTER.to_owned(),
    ]
    .join("\n")
}

#[cfg(test)]
mod message_tests {
    use rand::{SeedableRng, rngs::StdRng};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::transfer::{TransferForm, validate_transfer, validation::valid_test_form};

    use super::{PROMOTIONAL_FOOTER, render_message, render_message_with_balance, simulated_balance};

    fn parse_formatted_amount(text: &str) -> Decimal {
        text.replace(',', "").parse().unwrap()
    }

    #[test]
    fn renders_transfer_example() {
        let transfer = validate_transfer(&valid_test_form()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let message = render_message(&transfer, &mut rng);

        assert!(message.contains("123****890"), "got message {message:?}");
        assert!(message.contains("CR Amt:5,000.00"), "got message {message:?}");

        let balance_line = message
            .lines()
            .find(|line| line.starts_with("Bal:"))
            .expect("message should have a balance line");
        let balance = parse_formatted_amount(balance_line.trim_start_matches("Bal:"));
        assert!(
            balance > dec!(6000.00) && balance < dec!(16000.00),
            "want balance strictly between 6,000.00 and 16,000.00, got {balance}"
        );
    }

    #[test]
    fn renders_fixed_template() {
        let transfer = validate_transfer(&valid_test_form()).unwrap();

        let message = render_message_with_balance(&transfer, dec!(12345.6));

        assert_eq!(
            message,
            "Acct:123****890\n\
             DT:31/01/2025 01:45:00 PM\n\
             CR/CR//Transfer from JO\n\
             CR Amt:5,000.00\n\
             Bal:12,345.60\n\
             Dial *966# for quick airtime/Data purchase"
        );
        assert_eq!(message.lines().last(), Some(PROMOTIONAL_FOOTER));
    }

    #[test]
    fn same_seed_renders_same_message() {
        let transfer = validate_transfer(&valid_test_form()).unwrap();

        let first = render_message(&transfer, &mut StdRng::seed_from_u64(99));
        let second = render_message(&transfer, &mut StdRng::seed_from_u64(99));

        assert_eq!(first, second);
    }

    #[test]
    fn renders_largest_amount() {
        let form = TransferForm {
            amount: "999,999,999,999,999.99".to_owned(),
            ..valid_test_form()
        };
        let transfer = validate_transfer(&form).unwrap();

        let message = render_message(&transfer, &mut StdRng::seed_from_u64(5));

        assert!(
            message.contains("CR Amt:999,999,999,999,999.99"),
            "got message {message:?}"
        );
    }

    #[test]
    fn balance_saturates_instead_of_overflowing() {
        let balance = simulated_balance(Decimal::MAX, &mut StdRng::seed_from_u64(5));

        assert_eq!(balance, Decimal::MAX);
    }

    #[test]
    fn balance_offset_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let amount = dec!(250.75);

        for _ in 0..1000 {
            let offset = simulated_balance(amount, &mut rng) - amount;

            assert!(
                offset >= dec!(1000) && offset < dec!(11000),
                "balance offset {offset} out of range"
            );
            assert!(offset.scale() <= 2, "balance offset {offset} has fractional cents");
        }
    }
}
