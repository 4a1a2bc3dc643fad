use std::sync::Arc;

use crate::builtins::Builtin;
use crate::runtime::Value;

/// The single, flat, global symbol table.
///
/// There is no scope chain: every lookup and every binding goes against this
/// one table. Bindings are stored in insertion order and found by linear
/// scan over name equality; nothing in the language observes the order.
///
/// The table only ever holds independent deep copies. [`Environment::put`]
/// copies the caller's value in, [`Environment::get`] copies the stored value
/// out, so no caller can mutate a binding behind the table's back (or have
/// its own value mutated by a later rebind).
///
/// Not synchronized: a multi-threaded embedding must serialize access
/// externally.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    entries: Vec<(String, Value)>,
}

impl Environment {
    /// Creates an empty environment
    pub fn new() -> Self {
        Environment {
            entries: Vec::new(),
        }
    }

    /// Looks up a symbol by name.
    ///
    /// On a hit the caller receives a deep copy it owns independently of the
    /// stored binding. A miss is a normal return, not a Rust error: it yields
    /// an error *value* with the message `Unbound Symbol!`.
    pub fn get(&self, name: &str) -> Value {
        for (key, value) in &self.entries {
            if key == name {
                return value.clone();
            }
        }
        tracing::trace!(symbol = name, "lookup missed");
        Value::err("Unbound Symbol!")
    }

    /// Binds a symbol to a deep copy of `value`, replacing any previous
    /// binding of the same name.
    ///
    /// The caller keeps ownership of its value; the table stores a copy.
    pub fn put(&mut self, name: &str, value: &Value) {
        for (key, slot) in &mut self.entries {
            if key == name {
                *slot = value.clone();
                return;
            }
        }
        self.entries.push((name.to_string(), value.clone()));
    }

    /// Wraps a native operation in a function value and binds it under its
    /// own name
    pub fn register<B: Builtin + 'static>(&mut self, builtin: B) {
        let name = builtin.name().to_string();
        self.put(&name, &Value::Fun(Arc::new(builtin)));
    }

    /// Number of bindings currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no bindings exist
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
