use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{comparison::compare, core::unsupported},
            core::{EvalResult, Evaluator},
        },
        value::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a binary operation on two integers.
    ///
    /// Arithmetic stays in `i64`: division truncates toward zero, and any
    /// overflow is reported rather than wrapped. Comparisons yield `1` or
    /// `0`.
    ///
    /// # Example
    /// ```
    /// use mscript::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let quotient = Evaluator::eval_integer_op(BinaryOperator::Div, -7, 2, 1).unwrap();
    /// assert_eq!(quotient, Value::Integer(-3));
    ///
    /// assert!(Evaluator::eval_integer_op(BinaryOperator::Div, 1, 0, 1).is_err());
    /// ```
    pub fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                a.checked_div(b)
            },
            _ => {
                return compare(op, &a, &b).ok_or_else(|| {
                                               unsupported(op,
                                                           &Value::Integer(a),
                                                           &Value::Integer(b),
                                                           line)
                                           });
            },
        };

        result.map(Value::Integer)
              .ok_or(RuntimeError::Overflow { line })
    }

    /// Evaluates a binary operation on two numbers, at least one of them a
    /// float.
    ///
    /// Both operands are promoted to `f64` first. Division by `0.0` is
    /// reported, like integer division by zero.
    pub fn eval_float_op(op: BinaryOperator,
                         left: &Value,
                         right: &Value,
                         line: usize)
                         -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let (Some(a), Some(b)) = (left.as_float(line)?, right.as_float(line)?) else {
            return Err(unsupported(op, left, right, line));
        };

        Ok(Value::Float(match op {
                            Add => a + b,
                            Sub => a - b,
                            Mul => a * b,
                            Div => {
                                if b == 0.0 {
                                    return Err(RuntimeError::DivisionByZero { line });
                                }
                                a / b
                            },
                            _ => {
                                return compare(op, &a, &b).ok_or_else(|| {
                                                              unsupported(op, left, right, line)
                                                          });
                            },
                        }))
    }
}
