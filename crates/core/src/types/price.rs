//! Menu prices using decimal arithmetic.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors from parsing a price entered in the admin menu form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("price cannot be empty")]
    Empty,
    #[error("price must be a number")]
    NotANumber,
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (reais, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in the default currency from a number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, 2), CurrencyCode::default())
    }

    /// Parse a form value such as `47.90` or `47,90`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError`] if the input is blank or not a decimal number.
    pub fn parse(input: &str, currency_code: CurrencyCode) -> Result<Self, PriceError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }
        let amount =
            Decimal::from_str(&trimmed.replace(',', ".")).map_err(|_| PriceError::NotANumber)?;
        Ok(Self::new(amount, currency_code))
    }

    /// Whether the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Amount formatted for a form input (`47.90`).
    #[must_use]
    pub fn input_value(&self) -> String {
        format!("{:.2}", self.amount.round_dp(2))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plain = self.input_value();
        let (negative, digits) = plain
            .strip_prefix('-')
            .map_or((false, plain.as_str()), |rest| (true, rest));
        let (whole, cents) = digits.split_once('.').unwrap_or((digits, "00"));

        let (group_sep, decimal_sep) = self.currency_code.separators();
        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(group_sep);
            }
            grouped.push(ch);
        }

        let sign = if negative { "-" } else { "" };
        write!(
            f,
            "{sign}{}{grouped}{decimal_sep}{cents}",
            self.currency_code.prefix()
        )
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    BRL,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Symbol prefix including any spacing used by the locale.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::BRL => "R$\u{a0}",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// Thousands and decimal separators.
    const fn separators(self) -> (char, char) {
        match self {
            Self::BRL | Self::EUR => ('.', ','),
            Self::USD => (',', '.'),
        }
    }
}
