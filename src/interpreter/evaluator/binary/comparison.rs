use crate::{ast::BinaryOperator, interpreter::value::Value};

/// Applies a comparison operator to two operands of the same kind.
///
/// The result is the language's truth value: `Integer(1)` or `Integer(0)`.
/// Returns `None` when `op` is not a comparison.
///
/// # Example
/// ```
/// use mscript::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::compare, value::Value},
/// };
///
/// assert_eq!(compare(BinaryOperator::Less, &2, &3), Some(Value::Integer(1)));
/// assert_eq!(compare(BinaryOperator::Equal, "a", "b"), Some(Value::Integer(0)));
/// assert_eq!(compare(BinaryOperator::Add, &2, &3), None);
/// ```
#[must_use]
pub fn compare<T: PartialOrd + ?Sized>(op: BinaryOperator, left: &T, right: &T) -> Option<Value> {
    let truth = match op {
        BinaryOperator::Equal => left == right,
        BinaryOperator::NotEqual => left != right,
        BinaryOperator::Less => left < right,
        BinaryOperator::LessEqual => left <= right,
        BinaryOperator::Greater => left > right,
        BinaryOperator::GreaterEqual => left >= right,
        BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul | BinaryOperator::Div => {
            return None;
        },
    };

    Some(Value::from(truth))
}

/// Whether `op` is `==` or `!=`.
#[must_use]
pub const fn is_equality(op: BinaryOperator) -> bool {
    matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
}
