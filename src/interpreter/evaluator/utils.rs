use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, Flow},
        value::Value,
    },
};

impl Evaluator<'_> {
    /// Looks up a variable by name.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` when no active scope binds
    /// `name`.
    ///
    /// # Example
    /// ```
    /// use mscript::interpreter::evaluator::core::Evaluator;
    ///
    /// let evaluator = Evaluator::new(std::io::sink());
    /// assert!(evaluator.eval_variable("missing", 1).is_err());
    /// ```
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.environment
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_owned(),
                                                             line })
    }

    /// Runs `body` inside a fresh scope.
    ///
    /// The scope is popped whichever way `body` finishes, so a `break`,
    /// `continue` or error leaving it cannot unbalance the scope stack.
    pub(crate) fn scoped<T>(&mut self,
                            body: impl FnOnce(&mut Self) -> EvalResult<T>)
                            -> EvalResult<T> {
        self.environment.push_scope();
        let result = body(self);
        let popped = self.environment.pop_scope();

        let value = result?;
        popped?;
        Ok(value)
    }

    /// Executes the statements of a block in a new scope.
    ///
    /// Stops at the first statement that returns a `break` or `continue`
    /// signal and hands that signal to the caller.
    pub fn execute_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        self.scoped(|evaluator| {
                for statement in statements {
                    let flow = evaluator.execute(statement)?;
                    if flow != Flow::Normal {
                        return Ok(flow);
                    }
                }
                Ok(Flow::Normal)
            })
    }
}
