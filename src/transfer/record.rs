//! The transaction record stored in a session after a successful submission.

use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;

use crate::transfer::{ValidatedTransfer, message::render_message_with_balance, simulated_balance};

/// The characters used for the random suffix of a reference number.
const REFERENCE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// The number of random characters appended to a reference number.
const REFERENCE_SUFFIX_LENGTH: usize = 8;

/// One simulated transfer submission.
///
/// The simulated balance is drawn once when the record is created so that the
/// receipt shows the same message every time it is viewed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    #[serde(flatten)]
    transfer: ValidatedTransfer,
    simulated_balance: Decimal,
    reference_number: String,
    #[serde(with = "time::serde::rfc3339")]
    submitted_at: OffsetDateTime,
}

impl TransactionRecord {
    /// Create a record for `transfer` submitted at `submitted_at`, drawing the
    /// reference number and simulated balance from `rng`.
    pub fn new<R: Rng + ?Sized>(
        transfer: ValidatedTransfer,
        submitted_at: OffsetDateTime,
        rng: &mut R,
    ) -> Self {
        let reference_number = generate_reference_number(submitted_at, rng);
        let simulated_balance = simulated_balance(transfer.amount(), rng);

        Self {
            transfer,
            simulated_balance,
            reference_number,
            submitted_at,
        }
    }

    /// The validated form data.
    pub fn transfer(&self) -> &ValidatedTransfer {
        &self.transfer
    }

    /// The account balance shown in the confirmation message.
    pub fn simulated_balance(&self) -> Decimal {
        self.simulated_balance
    }

    /// The identifier generated for this submission.
    pub fn reference_number(&self) -> &str {
        &self.reference_number
    }

    /// When the record was created.
    pub fn submitted_at(&self) -> OffsetDateTime {
        self.submitted_at
    }

    /// The confirmation message for this record.
    pub fn message(&self) -> String {
        render_message_with_balance(&self.transfer, self.simulated_balance)
    }
}

/// Create a reference number from the Unix time of `now` in milliseconds
/// followed by eight random characters from 0-9 and A-Z.
///
/// Reference numbers are only practically unique.
pub fn generate_reference_number<R: Rng + ?Sized>(now: OffsetDateTime, rng: &mut R) -> String {
    let millis = now.unix_timestamp_nanos() / 1_000_000;
    let suffix: String = (0..REFERENCE_SUFFIX_LENGTH)
        .map(|_| REFERENCE_ALPHABET[rng.gen_range(0..REFERENCE_ALPHABET.len())] as char)
        .collect();

    format!("{millis}{suffix}")
}

#[cfg(test)]
mod record_tests {
    use rand::{SeedableRng, rngs::StdRng};
    use time::macros::datetime;

    use crate::transfer::{validate_transfer, validation::valid_test_form};

    use super::{TransactionRecord, generate_reference_number};

    #[test]
    fn reference_number_starts_with_unix_millis() {
        let now = datetime!(2025-01-31 12:00:00.123 UTC);
        let mut rng = StdRng::seed_from_u64(5);

        let reference = generate_reference_number(now, &mut rng);

        assert!(
            reference.starts_with("1738324800123"),
            "got reference number {reference}"
        );
        let suffix = &reference["1738324800123".len()..];
        assert_eq!(suffix.len(), 8);
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()),
            "got suffix {suffix}"
        );
    }

    #[test]
    fn reference_numbers_differ_between_draws() {
        let now = datetime!(2025-01-31 12:00:00 UTC);
        let mut rng = StdRng::seed_from_u64(5);

        let first = generate_reference_number(now, &mut rng);
        let second = generate_reference_number(now, &mut rng);

        assert_ne!(first, second);
    }

    #[test]
    fn message_is_stable_for_a_record() {
        let transfer = validate_transfer(&valid_test_form()).unwrap();
        let record = TransactionRecord::new(
            transfer,
            datetime!(2025-01-31 12:00:00 UTC),
            &mut StdRng::seed_from_u64(11),
        );

        assert_eq!(record.message(), record.message());
        assert!(record.message().contains("Bal:"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let transfer = validate_transfer(&valid_test_form()).unwrap();
        let record = TransactionRecord::new(
            transfer,
            datetime!(2025-01-31 12:00:00 UTC),
            &mut StdRng::seed_from_u64(11),
        );

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["accountName"], "Jo");
        assert_eq!(json["bankName"], "Test Bank");
        assert_eq!(json["accountNumber"], "1234567890");
        assert_eq!(json["phoneNumber"], "08012345678");
        assert_eq!(json["amount"], "5000");
        assert_eq!(json["narration"], "gift");
        assert_eq!(json["transactionDate"], "2025-01-31T13:45:00");
        assert_eq!(json["submittedAt"], "2025-01-31T12:00:00Z");
        assert_eq!(json["referenceNumber"], record.reference_number());
        assert!(json["simulatedBalance"].is_string());
    }
}
