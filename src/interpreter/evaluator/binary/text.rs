use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{
                comparison::{compare, is_equality},
                core::unsupported,
            },
            core::{EvalResult, Evaluator},
        },
        value::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a binary operation on two strings.
    ///
    /// `+` concatenates; `==` and `!=` compare contents.
    ///
    /// # Example
    /// ```
    /// use mscript::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let joined = Evaluator::eval_string_op(BinaryOperator::Add, "ab", "c", 1).unwrap();
    /// assert_eq!(joined, Value::from("abc"));
    ///
    /// assert!(Evaluator::eval_string_op(BinaryOperator::Less, "a", "b", 1).is_err());
    /// ```
    pub fn eval_string_op(op: BinaryOperator,
                          left: &str,
                          right: &str,
                          line: usize)
                          -> EvalResult<Value> {
        match op {
            BinaryOperator::Add => Ok(Value::Str(format!("{left}{right}"))),
            _ if is_equality(op) => compare(op, left, right).ok_or_else(|| {
                                        unsupported(op, &Value::from(left), &Value::from(right), line)
                                    }),
            _ => Err(unsupported(op, &Value::from(left), &Value::from(right), line)),
        }
    }

    /// Evaluates a binary operation on two chars.
    ///
    /// Only `==` and `!=` are defined, comparing code points.
    pub fn eval_char_op(op: BinaryOperator, left: char, right: char, line: usize) -> EvalResult<Value> {
        if is_equality(op)
           && let Some(value) = compare(op, &left, &right)
        {
            return Ok(value);
        }

        Err(unsupported(op, &Value::from(left), &Value::from(right), line))
    }
}
