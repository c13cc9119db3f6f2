//! Lexical environments.
//!
//! An environment is a chain of scopes. Each scope owns a binding map and
//! optionally points at its parent. Closures keep the scope they were
//! created in alive, so scopes are shared (`Rc<RefCell<_>>`), not stacked.
//!
//! - `define` writes to the innermost scope only, shadowing outer bindings.
//! - `assign` walks outward to the first scope that *owns* the name and
//!   overwrites it there. It never creates a binding.
//! - `lookup` walks outward to the first scope that owns the name.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use egg_ir::Name;

use crate::Value;

/// Error returned by [`Environment::assign`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// No scope in the chain owns the name.
    Undefined,
}

/// A single-threaded, reference-counted, interior-mutable scope handle.
///
/// All scope allocations go through [`LocalScope::new`]. Not `Send`: the
/// evaluator is single-threaded.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// The inner value, if this is the only handle.
    pub fn try_unwrap(self) -> Result<T, Self> {
        Rc::try_unwrap(self.0)
            .map(RefCell::into_inner)
            .map_err(LocalScope)
    }

    /// Whether both handles point at the same scope.
    #[cfg(test)]
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single scope: its own bindings plus a link to the enclosing scope.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    /// Create a root scope.
    pub fn new() -> Self {
        Scope::default()
    }

    /// Create a scope nested in `parent`.
    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Whether this scope itself (not an ancestor) binds `name`.
    #[cfg(test)]
    pub(crate) fn owns(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }
}

// Unlinks the parent chain iteratively. A long chain of otherwise
// unreferenced scopes would overflow the stack if dropped recursively.
impl Drop for Scope {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(scope) = parent {
            parent = match scope.try_unwrap() {
                Ok(mut inner) => inner.parent.take(),
                Err(_shared) => None,
            };
        }
    }
}

/// Handle to the innermost scope of a chain.
///
/// Cloning the handle shares the scope.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// Create an empty root environment.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::new()),
        }
    }

    /// Create a fresh, empty scope whose parent is this one.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment {
            scope: LocalScope::new(Scope::with_parent(self.scope.clone())),
        }
    }

    /// The enclosing environment, if any.
    #[cfg(test)]
    pub(crate) fn parent(&self) -> Option<Environment> {
        self.scope
            .borrow()
            .parent
            .clone()
            .map(|scope| Environment { scope })
    }

    /// Bind `name` in this scope, replacing any binding this scope already
    /// has for it. Outer bindings are untouched.
    #[inline]
    pub fn define(&self, name: Name, value: Value) {
        self.scope.borrow_mut().bindings.insert(name, value);
    }

    /// Find the nearest binding of `name`.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let mut scope = self.scope.clone();
        loop {
            let parent = {
                let current = scope.borrow();
                if let Some(value) = current.bindings.get(name) {
                    return Some(value.clone());
                }
                current.parent.clone()?
            };
            scope = parent;
        }
    }

    /// Overwrite the nearest existing binding of `name`.
    pub fn assign(&self, name: &str, value: Value) -> Result<(), AssignError> {
        let mut scope = self.scope.clone();
        loop {
            let parent = {
                let mut current = scope.borrow_mut();
                if let Some(slot) = current.bindings.get_mut(name) {
                    *slot = value;
                    return Ok(());
                }
                current.parent.clone()
            };
            match parent {
                Some(parent) => scope = parent,
                None => return Err(AssignError::Undefined),
            }
        }
    }

    /// Whether this scope itself binds `name`.
    #[cfg(test)]
    pub(crate) fn owns(&self, name: &str) -> bool {
        self.scope.borrow().owns(name)
    }

    /// Whether both handles refer to the same scope.
    #[cfg(test)]
    pub(crate) fn ptr_eq(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.scope.borrow();
        let mut names: Vec<&str> = scope.bindings.keys().map(Name::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("has_parent", &scope.parent.is_some())
            .finish()
    }
}
