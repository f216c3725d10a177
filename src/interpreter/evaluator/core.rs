use std::io::Write;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{Environment, ScopePolicy},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// `break` and `continue` do not unwind anything themselves; they return a
/// signal that every enclosing block hands upward until a loop consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Execution continues with the next statement.
    Normal,
    /// The innermost loop should stop. Carries the line of the `break`.
    Break(usize),
    /// The innermost loop should start its next iteration. Carries the line
    /// of the `continue`.
    Continue(usize),
}

/// Executes programs by walking their syntax tree.
///
/// The evaluator owns the variable [`Environment`] for one run and writes
/// the output of `print` statements to the sink it was created with.
///
/// ## Usage
///
/// ```
/// use mscript::interpreter::{evaluator::core::Evaluator, lexer::Scanner, parser::core::parse};
///
/// let tokens = Scanner::new("x = 2 + 3 * 4; print x;").tokenize();
/// let program = parse(&tokens).unwrap();
///
/// let mut output = Vec::new();
/// Evaluator::new(&mut output).interpret(&program).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "14\n");
/// ```
pub struct Evaluator<'out> {
    pub(crate) environment: Environment,
    out:                    Box<dyn Write + 'out>,
}

impl<'out> Evaluator<'out> {
    /// Creates an evaluator using the default (assign-to-nearest) scoping.
    #[must_use]
    pub fn new(out: impl Write + 'out) -> Self {
        Self::with_policy(out, ScopePolicy::default())
    }

    /// Creates an evaluator with an explicit assignment policy.
    #[must_use]
    pub fn with_policy(out: impl Write + 'out, policy: ScopePolicy) -> Self {
        Self { environment: Environment::with_policy(policy),
               out:         Box::new(out), }
    }

    /// The variable state.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Executes each statement in order.
    ///
    /// The first runtime error stops the run: statements after the failing
    /// one are not executed, while the effects of the earlier ones remain.
    /// A `break` or `continue` that reaches this level had no loop to act on
    /// and is reported as an error.
    ///
    /// # Errors
    /// Returns the `RuntimeError` that stopped execution.
    pub fn interpret(&mut self, statements: &[Statement]) -> EvalResult<()> {
        tracing::debug!(statements = statements.len(), "interpreting program");

        let result = self.execute_all(statements);
        self.out.flush()?;

        match &result {
            Ok(()) => tracing::debug!("program finished"),
            Err(error) => tracing::debug!(%error, "program aborted"),
        }
        result
    }

    fn execute_all(&mut self, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            let (keyword, line) = match self.execute(statement)? {
                Flow::Normal => continue,
                Flow::Break(line) => ("break", line),
                Flow::Continue(line) => ("continue", line),
            };

            return Err(RuntimeError::OutsideLoop { keyword, line });
        }

        Ok(())
    }

    /// Executes a single statement.
    ///
    /// # Returns
    /// The [`Flow`] signal the statement finished with. Only `break`,
    /// `continue`, and statements containing them yield anything other than
    /// [`Flow::Normal`].
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Print { expr, .. } => {
                let value = self.evaluate(expr)?;
                writeln!(self.out, "{value}")?;
                Ok(Flow::Normal)
            },
            Statement::Assignment { name, value, .. } => {
                let value = self.evaluate(value)?;
                self.environment.set(name, value);
                Ok(Flow::Normal)
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            },
            Statement::While { condition, body, .. } => self.execute_while(condition, body),
            Statement::For { context, .. } => self.execute_for(context),
            Statement::Block { statements, .. } => self.execute_block(statements),
            Statement::Break { line } => Ok(Flow::Break(*line)),
            Statement::Continue { line } => Ok(Flow::Continue(*line)),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Both operands of a binary operation are evaluated, left first, before
    /// the operator is applied.
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, line } => {
                let operand = self.evaluate(expr)?;
                Self::eval_unary(*op, &operand, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
        }
    }
}
