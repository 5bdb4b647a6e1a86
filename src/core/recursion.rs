//! Recursive helpers: factorial, nested sums and palindromes

use serde::Deserialize;

use crate::error::{Error, Result};

/// An integer or an arbitrarily nested list of them
///
/// Deserializes straight from JSON such as `[1, [2, [3]]]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NestedList {
    Int(i64),
    List(Vec<NestedList>),
}

impl From<i64> for NestedList {
    fn from(value: i64) -> Self {
        NestedList::Int(value)
    }
}

impl From<Vec<NestedList>> for NestedList {
    fn from(items: Vec<NestedList>) -> Self {
        NestedList::List(items)
    }
}

/// `n!`, exact up to `34!`; anything larger is an overflow error
pub fn factorial_r(n: u32) -> Result<u128> {
    if n == 0 {
        return Ok(1);
    }
    u128::from(n)
        .checked_mul(factorial_r(n - 1)?)
        .ok_or(Error::Overflow("factorial"))
}

/// Sum every integer in the list, at any depth. A total outside the
/// `i64` range is an overflow error.
pub fn sum_nested_list(items: &[NestedList]) -> Result<i64> {
    items.iter().try_fold(0i64, |total, item| {
        let value = match item {
            NestedList::Int(value) => *value,
            NestedList::List(inner) => sum_nested_list(inner)?,
        };
        total
            .checked_add(value)
            .ok_or(Error::Overflow("nested list sum"))
    })
}

/// Check whether `text` reads the same backwards, comparing chars from
/// both ends inward
pub fn is_palindrome(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    is_palindrome_chars(&chars)
}

fn is_palindrome_chars(chars: &[char]) -> bool {
    match chars {
        [] | [_] => true,
        [first, middle @ .., last] => first == last && is_palindrome_chars(middle),
    }
}
