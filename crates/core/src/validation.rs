//! Bridges `validator` derive output into [`CoreError::Validation`].

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run the derived field checks on `input`.
pub fn validate<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Flatten validation errors into `field: code` pairs, sorted by field name
/// so messages are stable.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(move |e| format!("{field}: {}", e.code))
        })
        .collect();
    parts.sort();
    parts.join(", ")
}
