//! Integer list parsing for command-line arguments

use crate::error::CliError;
use std::str::FromStr;

/// Parse a comma- or whitespace-separated list of integers
///
/// Empty items are skipped, so `"1, 2,,3"` and `"1 2 3"` both work. An
/// empty string is an empty list.
pub fn parse_sequence<T: FromStr>(input: &str) -> Result<Vec<T>, CliError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<T>().map_err(|_| {
                CliError::InvalidSequence(format!("'{item}' is not a valid integer"))
            })
        })
        .collect()
}
