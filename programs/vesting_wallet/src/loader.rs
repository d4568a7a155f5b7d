//! Host-side parsing for the schedule-loading tool.
//!
//! The schedule file is CSV with a header row followed by
//! `month,destination,amount` rows; the allow-list file has one address per
//! line. Each row is accepted or rejected on its own so one bad line never
//! aborts the batch. Row order is the order the entries must be submitted in.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use anchor_lang::prelude::Pubkey;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleRow {
    /// 1-based line number in the source text.
    pub line: usize,
    pub month: u32,
    pub destination: Pubkey,
    pub amount: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowError {
    MissingField(&'static str),
    InvalidMonth(String),
    InvalidAddress(String),
    InvalidAmount(String),
    TooManyDecimals { max: u8 },
    AmountOverflow,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::MissingField(field) => write!(f, "missing field `{field}`"),
            RowError::InvalidMonth(raw) => write!(f, "invalid month `{raw}`"),
            RowError::InvalidAddress(raw) => write!(f, "invalid address `{raw}`"),
            RowError::InvalidAmount(raw) => write!(f, "invalid amount `{raw}`"),
            RowError::TooManyDecimals { max } => {
                write!(f, "amount has more than {max} fractional digits")
            }
            RowError::AmountOverflow => write!(f, "amount does not fit in u64"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowRejection {
    pub line: usize,
    pub error: RowError,
}

impl fmt::Display for RowRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

impl std::error::Error for RowRejection {}

/// Parses the schedule file. The first line is the header; blank lines are
/// skipped. `decimals` is the mint's decimals, used to scale amounts.
pub fn parse_schedule_csv(text: &str, decimals: u8) -> Vec<Result<ScheduleRow, RowRejection>> {
    text.lines()
        .enumerate()
        .skip(1)
        .filter(|(_, raw)| !raw.trim().is_empty())
        .map(|(idx, raw)| {
            let line = idx + 1;
            parse_row(raw, decimals).map(|(month, destination, amount)| ScheduleRow {
                line,
                month,
                destination,
                amount,
            })
            .map_err(|error| RowRejection { line, error })
        })
        .collect()
}

/// Parses the allow-list file: one base58 address per line, no header.
pub fn parse_allowed_addresses(text: &str) -> Vec<Result<Pubkey, RowRejection>> {
    text.lines()
        .enumerate()
        .filter(|(_, raw)| !raw.trim().is_empty())
        .map(|(idx, raw)| {
            parse_address(raw.trim()).map_err(|error| RowRejection {
                line: idx + 1,
                error,
            })
        })
        .collect()
}

/// Per-month sums of the accepted rows.
pub fn month_totals(rows: &[ScheduleRow]) -> BTreeMap<u32, u128> {
    let mut totals = BTreeMap::new();
    for row in rows {
        *totals.entry(row.month).or_insert(0u128) += u128::from(row.amount);
    }
    totals
}

/// Decimal string to base units, e.g. `"1.5"` with 6 decimals is 1_500_000.
pub fn parse_amount(raw: &str, decimals: u8) -> Result<u64, RowError> {
    let invalid = || RowError::InvalidAmount(raw.to_string());

    let (whole, frac) = match raw.split_once('.') {
        Some((w, f)) => (w, f),
        None => (raw, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid());
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if frac.len() > usize::from(decimals) {
        return Err(RowError::TooManyDecimals { max: decimals });
    }

    let whole_units = if whole.is_empty() {
        0
    } else {
        whole.parse::<u64>().map_err(|_| RowError::AmountOverflow)?
    };
    let frac_units = if frac.is_empty() {
        0
    } else {
        let digits = frac.parse::<u64>().map_err(|_| RowError::AmountOverflow)?;
        scale_up(digits, u32::from(decimals) - frac.len() as u32)?
    };

    scale_up(whole_units, u32::from(decimals))?
        .checked_add(frac_units)
        .ok_or(RowError::AmountOverflow)
}

/// `value * 10^exponent`; zero stays zero for any exponent.
fn scale_up(value: u64, exponent: u32) -> Result<u64, RowError> {
    if value == 0 {
        return Ok(0);
    }
    10u64
        .checked_pow(exponent)
        .and_then(|scale| value.checked_mul(scale))
        .ok_or(RowError::AmountOverflow)
}

fn parse_row(raw: &str, decimals: u8) -> Result<(u32, Pubkey, u64), RowError> {
    let mut fields = raw.split(',').map(str::trim);
    let month = fields
        .next()
        .filter(|f| !f.is_empty())
        .ok_or(RowError::MissingField("month"))?;
    let destination = fields
        .next()
        .filter(|f| !f.is_empty())
        .ok_or(RowError::MissingField("destination"))?;
    let amount = fields
        .next()
        .filter(|f| !f.is_empty())
        .ok_or(RowError::MissingField("amount"))?;

    let month = month
        .parse::<u32>()
        .map_err(|_| RowError::InvalidMonth(month.to_string()))?;
    let destination = parse_address(destination)?;
    let amount = parse_amount(amount, decimals)?;
    Ok((month, destination, amount))
}

fn parse_address(raw: &str) -> Result<Pubkey, RowError> {
    Pubkey::from_str(raw).map_err(|_| RowError::InvalidAddress(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(b: u8) -> Pubkey {
        Pubkey::new_from_array([b; 32])
    }

    #[test]
    fn amounts_scale_by_decimals() {
        assert_eq!(parse_amount("100", 0), Ok(100));
        assert_eq!(parse_amount("1.5", 6), Ok(1_500_000));
        assert_eq!(parse_amount(".25", 2), Ok(25));
        assert_eq!(parse_amount("7.", 3), Ok(7_000));
        assert_eq!(parse_amount("0.000001", 6), Ok(1));
    }

    #[test]
    fn bad_amounts_are_rejected() {
        assert_eq!(parse_amount("", 6), Err(RowError::InvalidAmount(String::new())));
        assert_eq!(parse_amount(".", 6), Err(RowError::InvalidAmount(".".into())));
        assert_eq!(parse_amount("1e9", 6), Err(RowError::InvalidAmount("1e9".into())));
        assert_eq!(parse_amount("-5", 6), Err(RowError::InvalidAmount("-5".into())));
        assert_eq!(parse_amount("1.2.3", 6), Err(RowError::InvalidAmount("1.2.3".into())));
        assert_eq!(parse_amount("0.1234567", 6), Err(RowError::TooManyDecimals { max: 6 }));
        assert_eq!(parse_amount("3500000000", 18), Err(RowError::AmountOverflow));
    }

    #[test]
    fn zero_parses_at_any_precision() {
        assert_eq!(parse_amount("0", 25), Ok(0));
        assert_eq!(parse_amount("0.000", 25), Ok(0));
        assert_eq!(parse_amount("1", 25), Err(RowError::AmountOverflow));
        assert_eq!(parse_amount("1", 19), Ok(10_000_000_000_000_000_000));
    }

    #[test]
    fn malformed_rows_do_not_abort_the_batch() {
        let text = format!(
            "month,destinationAddress,amount\n\
             0,{a},100\n\
             0,{b}\n\
             \n\
             x,{a},5\n\
             1,not-an-address,5\n\
             1,{b},ten\n\
             2,{b},2.5\r\n",
            a = addr(1),
            b = addr(2),
        );
        let rows = parse_schedule_csv(&text, 1);
        assert_eq!(rows.len(), 6);

        assert_eq!(
            rows[0],
            Ok(ScheduleRow { line: 2, month: 0, destination: addr(1), amount: 1_000 })
        );
        assert_eq!(
            rows[1],
            Err(RowRejection { line: 3, error: RowError::MissingField("amount") })
        );
        assert_eq!(rows[2].as_ref().unwrap_err().error, RowError::InvalidMonth("x".into()));
        assert_eq!(rows[2].as_ref().unwrap_err().line, 5);
        assert_eq!(
            rows[3].as_ref().unwrap_err().error,
            RowError::InvalidAddress("not-an-address".into())
        );
        assert_eq!(rows[4].as_ref().unwrap_err().error, RowError::InvalidAmount("ten".into()));
        assert_eq!(
            rows[5],
            Ok(ScheduleRow { line: 8, month: 2, destination: addr(2), amount: 25 })
        );
    }

    #[test]
    fn header_only_file_is_empty() {
        assert!(parse_schedule_csv("month,destinationAddress,amount\n", 6).is_empty());
        assert!(parse_schedule_csv("", 6).is_empty());
    }

    #[test]
    fn allowed_addresses_per_line() {
        let text = format!("{}\n\n  {}  \nbogus\n", addr(3), addr(4));
        let parsed = parse_allowed_addresses(&text);
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0], Ok(addr(3)));
        assert_eq!(parsed[1], Ok(addr(4)));
        assert_eq!(
            parsed[2],
            Err(RowRejection { line: 4, error: RowError::InvalidAddress("bogus".into()) })
        );
    }

    #[test]
    fn totals_group_by_month() {
        let rows = [
            ScheduleRow { line: 2, month: 0, destination: addr(1), amount: u64::MAX },
            ScheduleRow { line: 3, month: 0, destination: addr(2), amount: 1 },
            ScheduleRow { line: 4, month: 5, destination: addr(1), amount: 9 },
        ];
        let totals = month_totals(&rows);
        assert_eq!(totals.get(&0), Some(&(u128::from(u64::MAX) + 1)));
        assert_eq!(totals.get(&5), Some(&9));
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn rejection_display_names_the_line() {
        let r = RowRejection { line: 7, error: RowError::MissingField("amount") };
        assert_eq!(r.to_string(), "line 7: missing field `amount`");
    }
}
