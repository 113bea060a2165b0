//! Validation shared by every record type

use std::fmt;

use rust_decimal::Decimal;

use super::money::Money;

/// Longest description accepted on any record
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Largest amount, in whole euros, accepted on any record
pub const MAX_AMOUNT_EUROS: i64 = 1_000_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    EmptyDescription,
    DescriptionTooLong(usize),
    NegativeAmount(&'static str),
    AmountTooLarge(&'static str),
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::DescriptionTooLong(len) => write!(
                f,
                "Description too long ({} characters, max {})",
                len, MAX_DESCRIPTION_LEN
            ),
            Self::NegativeAmount(field) => write!(f, "{} cannot be negative", field),
            Self::AmountTooLarge(field) => {
                write!(f, "{} cannot exceed {}", field, MAX_AMOUNT_EUROS)
            }
        }
    }
}

impl std::error::Error for RecordValidationError {}

pub(crate) fn check_description(description: &str) -> Result<(), RecordValidationError> {
    if description.trim().is_empty() {
        return Err(RecordValidationError::EmptyDescription);
    }
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(RecordValidationError::DescriptionTooLong(len));
    }
    Ok(())
}

/// Amounts must be between zero and `MAX_AMOUNT_EUROS`
pub(crate) fn check_amount(
    amount: Money,
    field: &'static str,
) -> Result<(), RecordValidationError> {
    if amount.is_negative() {
        return Err(RecordValidationError::NegativeAmount(field));
    }
    if amount.amount() > Decimal::from(MAX_AMOUNT_EUROS) {
        return Err(RecordValidationError::AmountTooLarge(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_check_description() {
        assert!(check_description("Rent").is_ok());
        assert_eq!(
            check_description("   "),
            Err(RecordValidationError::EmptyDescription)
        );
        assert_eq!(
            check_description(&"x".repeat(MAX_DESCRIPTION_LEN + 1)),
            Err(RecordValidationError::DescriptionTooLong(MAX_DESCRIPTION_LEN + 1))
        );
    }

    #[test]
    fn test_check_amount_bounds() {
        assert!(check_amount(Money::zero(), "Amount").is_ok());
        assert!(check_amount(Money::new(dec!(1000000000000.00)), "Amount").is_ok());
        assert_eq!(
            check_amount(Money::new(dec!(1000000000000.01)), "Amount"),
            Err(RecordValidationError::AmountTooLarge("Amount"))
        );
        assert_eq!(
            check_amount(Money::new(dec!(79228162514264337593543950000)), "Amount"),
            Err(RecordValidationError::AmountTooLarge("Amount"))
        );
        assert_eq!(
            check_amount(Money::from_cents(-1), "Amount"),
            Err(RecordValidationError::NegativeAmount("Amount"))
        );
    }
}
