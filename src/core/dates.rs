//! Date reformatting and sorting

use crate::error::{Error, Result};

/// Reorder a `MM-DD-YYYY` date into sortable `YYYY-MM-DD`
pub fn format_date(date: &str) -> Result<String> {
    let mut parts = date.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(month), Some(day), Some(year), None) => Ok(format!("{year}-{month}-{day}")),
        _ => Err(Error::InvalidDate(date.to_string())),
    }
}

/// Return the dates in chronological order, leaving the input untouched
pub fn sort_dates<S: AsRef<str>>(dates: &[S]) -> Result<Vec<String>> {
    let mut keyed = dates
        .iter()
        .map(|date| {
            let date = date.as_ref();
            format_date(date).map(|key| (key, date.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    keyed.sort();
    Ok(keyed.into_iter().map(|(_, date)| date).collect())
}
