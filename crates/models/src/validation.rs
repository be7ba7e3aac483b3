//! Field validation shared by the plot and booking entities.
//!
//! Inputs are trimmed before checks, so whitespace-only values count as missing.
//! Length limits mirror the column widths in the migrations.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ModelError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
    )
    .expect("email regex compiles")
});

/// Trim `value` and require it to be non-empty and at most `max_len` characters.
pub fn required<'a>(field: &str, value: &'a str, max_len: usize) -> Result<&'a str, ModelError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(ModelError::Validation(format!("{field} is required")));
    }
    if v.chars().count() > max_len {
        return Err(ModelError::Validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(v)
}

/// Required, length-bounded and syntactically a mailbox address.
pub fn email<'a>(field: &str, value: &'a str, max_len: usize) -> Result<&'a str, ModelError> {
    let v = required(field, value, max_len)?;
    if !EMAIL_RE.is_match(v) {
        return Err(ModelError::Validation(format!("{field} must be a valid email address")));
    }
    Ok(v)
}
