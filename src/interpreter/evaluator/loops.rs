use crate::{
    ast::{Expr, ForContext, Statement},
    interpreter::evaluator::core::{EvalResult, Evaluator, Flow},
};

impl Evaluator<'_> {
    /// Executes a `while` loop.
    ///
    /// The condition is checked before every iteration. A `break` from the
    /// body ends the loop; a `continue` goes straight back to the condition.
    /// Either signal is consumed here and not seen by enclosing statements.
    pub fn execute_while(&mut self, condition: &Expr, body: &Statement) -> EvalResult<Flow> {
        while self.evaluate(condition)?.is_truthy() {
            if matches!(self.execute(body)?, Flow::Break(_)) {
                break;
            }
        }

        Ok(Flow::Normal)
    }

    /// Executes a `for` loop.
    ///
    /// The loop runs in its own scope, so bindings created by the
    /// initializer are gone once the loop ends. Each iteration checks the
    /// condition (a missing condition counts as true), runs the body, and
    /// then the increment. A `continue` still runs the increment; a `break`
    /// skips it and ends the loop.
    ///
    /// # Example
    /// ```
    /// use mscript::interpreter::{evaluator::core::Evaluator, lexer::Scanner, parser::core::parse};
    ///
    /// let source = "for (i = 0; i < 3; i = i + 1) { print i; }";
    /// let program = parse(&Scanner::new(source).tokenize()).unwrap();
    ///
    /// let mut output = Vec::new();
    /// let mut evaluator = Evaluator::new(&mut output);
    /// evaluator.interpret(&program).unwrap();
    ///
    /// assert!(!evaluator.environment().exists("i"));
    /// drop(evaluator);
    /// assert_eq!(String::from_utf8(output).unwrap(), "0\n1\n2\n");
    /// ```
    pub fn execute_for(&mut self, context: &ForContext) -> EvalResult<Flow> {
        self.scoped(|evaluator| {
                if let Some(initializer) = &context.initializer {
                    evaluator.execute(initializer)?;
                }

                loop {
                    if let Some(condition) = &context.condition
                       && !evaluator.evaluate(condition)?.is_truthy()
                    {
                        break;
                    }

                    if matches!(evaluator.execute(&context.body)?, Flow::Break(_)) {
                        break;
                    }

                    if let Some(increment) = &context.increment {
                        evaluator.execute(increment)?;
                    }
                }

                Ok(Flow::Normal)
            })
    }
}
