use crate::error::RuntimeError;

/// Largest integer magnitude an `f64` holds exactly (`2^53 - 1`).
pub const MAX_EXACT_FLOAT_INT: u64 = 9_007_199_254_740_991;

/// Promotes an integer operand to a float for mixed arithmetic.
///
/// Integers beyond `±MAX_EXACT_FLOAT_INT` would be rounded, so they are
/// rejected instead.
///
/// ## Errors
/// `RuntimeError::IntegerTooLarge` carrying `value` and `line`.
///
/// ## Example
/// ```
/// use mscript::util::num::{MAX_EXACT_FLOAT_INT, int_to_float};
///
/// assert_eq!(int_to_float(-7, 1).unwrap(), -7.0);
///
/// let big = MAX_EXACT_FLOAT_INT as i64 + 1;
/// assert!(int_to_float(big, 1).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn int_to_float(value: i64, line: usize) -> Result<f64, RuntimeError> {
    if value.unsigned_abs() > MAX_EXACT_FLOAT_INT {
        return Err(RuntimeError::IntegerTooLarge { value, line });
    }
    Ok(value as f64)
}
