//! Reusable field rules and report conversion

use crate::core::error::{FieldViolation, ValidationError};
use validator::Validate;

/// Rule: string must contain at least one non-whitespace character
///
/// Used through `#[validate(custom(function = "not_blank"))]`. A missing
/// value is caught separately by `required`.
pub fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        Err(validator::ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

/// Flatten a `validator` report into violations
///
/// Every rule has already been evaluated, so the report holds all
/// problems at once. Field names are converted to their camelCase JSON
/// form and the result is sorted by field so responses are stable.
pub fn violations(errors: &validator::ValidationErrors) -> Vec<FieldViolation> {
    let mut out: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = to_camel_case(&field);
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                FieldViolation::field(field.clone(), message)
            })
        })
        .collect();

    out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    out
}

/// Run every declared rule on `value`
///
/// Returns `ValidationError::Fields` carrying all violations when any rule
/// fails.
pub fn check<T: Validate>(value: &T) -> Result<(), ValidationError> {
    value
        .validate()
        .map_err(|errors| ValidationError::Fields(violations(&errors)))
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
