use std::collections::HashMap;

use crate::{error::RuntimeError, interpreter::value::Value};

/// How an assignment treats a name that is already bound in an outer scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScopePolicy {
    /// Search outward for an existing binding and overwrite it; only bind in
    /// the innermost scope when the name is new. `x = 1; { x = 2; } print x;`
    /// prints `2`.
    #[default]
    AssignToNearest,
    /// Always bind in the innermost scope, shadowing any outer binding.
    /// `x = 1; { x = 2; } print x;` prints `1`.
    DefineOrShadow,
}

/// A stack of lexical scopes mapping names to values.
///
/// The global scope is created with the environment and can never be popped,
/// so the stack is never empty. Lookups search innermost to outermost and
/// stop at the first match.
///
/// ## Example
/// ```
/// use mscript::interpreter::{environment::Environment, value::Value};
///
/// let mut env = Environment::new();
/// env.set("x", Value::Integer(1));
///
/// env.push_scope();
/// env.set("x", Value::Integer(2));
/// env.set("y", Value::Integer(3));
/// env.pop_scope().unwrap();
///
/// assert_eq!(env.get("x"), Some(&Value::Integer(2)));
/// assert!(!env.exists("y"));
/// ```
#[derive(Debug)]
pub struct Environment {
    scope_stack: Vec<HashMap<String, Value>>,
    policy:      ScopePolicy,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only the global scope, using
    /// [`ScopePolicy::AssignToNearest`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(ScopePolicy::default())
    }

    /// Creates an environment holding only the global scope.
    #[must_use]
    pub fn with_policy(policy: ScopePolicy) -> Self {
        Self { scope_stack: vec![HashMap::new()],
               policy }
    }

    /// The assignment policy in effect.
    #[must_use]
    pub const fn policy(&self) -> ScopePolicy {
        self.policy
    }

    /// Number of live scopes, the global scope included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scope_stack.len()
    }

    /// Binds `name` to `value` according to the environment's policy.
    pub fn set(&mut self, name: &str, value: Value) {
        if self.policy == ScopePolicy::AssignToNearest
           && let Some(slot) = self.scope_stack
                                   .iter_mut()
                                   .rev()
                                   .find_map(|scope| scope.get_mut(name))
        {
            *slot = value;
            return;
        }

        self.define_local(name, value);
    }

    /// Binds `name` in the innermost scope, regardless of policy.
    pub fn define_local(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scope_stack.last_mut() {
            scope.insert(name.to_owned(), value);
        }
    }

    /// Looks a name up, innermost scope first.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.scope_stack
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
    }

    /// Whether `name` is bound in any active scope.
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Enters a new, empty scope.
    pub fn push_scope(&mut self) {
        self.scope_stack.push(HashMap::new());
        tracing::trace!(depth = self.scope_stack.len(), "pushed scope");
    }

    /// Leaves the innermost scope, dropping its bindings.
    ///
    /// # Errors
    /// Returns `RuntimeError::ScopeUnderflow` when only the global scope is
    /// left. User code cannot trigger this; it indicates unbalanced scope
    /// bookkeeping in the evaluator.
    pub fn pop_scope(&mut self) -> Result<(), RuntimeError> {
        if self.scope_stack.len() <= 1 {
            return Err(RuntimeError::ScopeUnderflow);
        }

        self.scope_stack.pop();
        tracing::trace!(depth = self.scope_stack.len(), "popped scope");
        Ok(())
    }
}
