//! Removing resolved values from a statement.
//!
//! Removal is literal: the first occurrence of the value is cut out, even
//! when it sits inside a longer word. Surrounding whitespace is left alone.

/// Cut the first occurrence of `value` out of `statement`.
pub fn strip_value(statement: &str, value: &str) -> String {
    if value.is_empty() {
        return statement.to_string();
    }
    statement.replacen(value, "", 1)
}

/// Cut the first occurrence of each value, in order.
pub fn strip_values<'a, I>(statement: &str, values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .fold(statement.to_string(), |remaining, value| strip_value(&remaining, value))
}
