use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

/// Builds the error for an operator applied to operand kinds it does not
/// support.
pub(crate) fn unsupported(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> RuntimeError {
    RuntimeError::UnsupportedBinaryOperation { op: op.to_string(),
                                               left: left.type_name(),
                                               right: right.type_name(),
                                               line }
}

impl Evaluator<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// The pair of operand kinds picks the handler:
    /// - two integers use integer arithmetic and comparison,
    /// - any other pair of numbers is promoted to floats,
    /// - two strings support `+`, `==` and `!=`,
    /// - two chars support `==` and `!=`.
    ///
    /// Every other combination is an unsupported operation.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use mscript::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    ///
    /// let text = Value::from("3");
    /// assert!(Evaluator::eval_binary(BinaryOperator::Add, &left, &text, 1).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use Value::{Char, Float, Integer, Str};

        match (left, right) {
            (Integer(a), Integer(b)) => Self::eval_integer_op(op, *a, *b, line),
            (Integer(_) | Float(_), Integer(_) | Float(_)) => {
                Self::eval_float_op(op, left, right, line)
            },
            (Str(a), Str(b)) => Self::eval_string_op(op, a, b, line),
            (Char(a), Char(b)) => Self::eval_char_op(op, *a, *b, line),
            _ => Err(unsupported(op, left, right, line)),
        }
    }
}
