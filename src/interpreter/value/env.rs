use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::interpreter::value::core::Value;

/// A lexical scope: a mutable store of bindings plus an optional parent.
///
/// Environments are shared, not copied. A function value holds an
/// `Rc<Env>` to the frame it was defined in, so bindings added to that frame
/// after the function was created are visible on later calls.
#[derive(Debug, Default)]
pub struct Env {
    parent: Option<Rc<Env>>,
    store: RefCell<HashMap<String, Value>>,
}

impl Env {
    /// Creates the root environment.
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Creates a child environment whose lookups fall back to `parent`.
    #[must_use]
    pub fn with_parent(parent: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self { parent: Some(Rc::clone(parent)), store: RefCell::default() })
    }

    /// Looks `name` up in this frame, then in each parent frame in turn.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.borrow().get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|parent| parent.get(name))
    }

    /// Binds `name` to `value` in this frame, shadowing any outer binding.
    pub fn set(&self, name: &str, value: Value) {
        self.store.borrow_mut().insert(name.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::Env;
    use crate::interpreter::value::core::Value;

    #[test]
    fn lookup_walks_parents() {
        let root = Env::new();
        root.set("x", Value::Int(1));

        let child = Env::with_parent(&root);
        assert_eq!(child.get("x"), Some(Value::Int(1)));
        assert_eq!(child.get("y"), None);
    }

    #[test]
    fn set_writes_the_innermost_frame() {
        let root = Env::new();
        root.set("x", Value::Int(1));

        let child = Env::with_parent(&root);
        child.set("x", Value::Int(2));

        assert_eq!(child.get("x"), Some(Value::Int(2)));
        assert_eq!(root.get("x"), Some(Value::Int(1)));
    }

    #[test]
    fn bindings_added_later_are_visible_through_shared_frames() {
        let root = Env::new();
        let child = Env::with_parent(&root);

        assert_eq!(child.get("late"), None);
        root.set("late", Value::Int(3));
        assert_eq!(child.get("late"), Some(Value::Int(3)));
    }
}
