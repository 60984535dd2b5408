// Human quantity to base-unit conversion

use anyhow::{Context, Result};
use candid::Nat;
use std::fmt;
use std::str::FromStr;

/// Denominations of the native value, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Wei,
    Kwei,
    Mwei,
    Gwei,
    Szabo,
    Finney,
    Ether,
}

impl Unit {
    /// Number of decimal places between this unit and the base unit
    pub const fn decimals(self) -> u32 {
        match self {
            Self::Wei => 0,
            Self::Kwei => 3,
            Self::Mwei => 6,
            Self::Gwei => 9,
            Self::Szabo => 12,
            Self::Finney => 15,
            Self::Ether => 18,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wei => "wei",
            Self::Kwei => "kwei",
            Self::Mwei => "mwei",
            Self::Gwei => "gwei",
            Self::Szabo => "szabo",
            Self::Finney => "finney",
            Self::Ether => "ether",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wei" => Ok(Self::Wei),
            "kwei" => Ok(Self::Kwei),
            "mwei" => Ok(Self::Mwei),
            "gwei" => Ok(Self::Gwei),
            "szabo" => Ok(Self::Szabo),
            "finney" => Ok(Self::Finney),
            "ether" => Ok(Self::Ether),
            other => anyhow::bail!(
                "Unknown unit '{other}' (expected one of: wei, kwei, mwei, gwei, szabo, finney, ether)"
            ),
        }
    }
}

/// Convert a non-negative decimal amount in `unit` into base units.
///
/// `"1"` ether is `10^18`, `"0.5"` gwei is `500_000_000`. Fractions finer than
/// one base unit are rejected rather than truncated.
pub fn to_base_units(amount: &str, unit: Unit) -> Result<Nat> {
    let amount = amount.trim();
    if amount.is_empty() {
        anyhow::bail!("Amount is empty");
    }

    let (whole, fraction) = match amount.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (amount, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        anyhow::bail!("Amount '{amount}' has no digits");
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        anyhow::bail!("Amount '{amount}' is not a non-negative decimal number");
    }

    let decimals = unit.decimals() as usize;
    if fraction.len() > decimals {
        anyhow::bail!(
            "Amount '{amount}' has {} fractional digits but {unit} allows at most {decimals}",
            fraction.len()
        );
    }

    let mut digits = String::with_capacity(whole.len() + decimals);
    digits.push_str(whole);
    digits.push_str(fraction);
    digits.extend(std::iter::repeat_n('0', decimals - fraction.len()));

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(Nat::from(0u64));
    }

    Nat::from_str(digits).with_context(|| format!("Failed to parse amount '{amount}'"))
}

/// Plain decimal rendering of a base-unit amount (no digit separators)
pub fn format_base_units(amount: &Nat) -> String {
    amount.0.to_string()
}
