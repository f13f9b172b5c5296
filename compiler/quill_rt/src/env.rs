//! Variable environment for generated code.

use rustc_hash::FxHashMap;

use crate::Value;

/// One variable access, recorded in execution order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Read(String),
    Write(String),
}

/// Per-execution variable store.
///
/// Every `get_value`/`set_value` call is appended to an access trace so
/// callers can observe the order in which operands were evaluated.
#[derive(Clone, Debug, Default)]
pub struct Env {
    vars: FxHashMap<String, Value>,
    trace: Vec<Access>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable without recording an access.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.vars.insert(name.into(), value);
    }

    /// Read a variable. Undefined variables read as `null`.
    pub fn get_value(&mut self, name: &str) -> Value {
        self.trace.push(Access::Read(name.to_string()));
        self.vars.get(name).cloned().unwrap_or(Value::Null)
    }

    /// Assign a variable and return the assigned value.
    pub fn set_value(&mut self, name: &str, value: Value) -> Value {
        self.trace.push(Access::Write(name.to_string()));
        self.vars.insert(name.to_string(), value.clone());
        value
    }

    /// Peek at a variable without recording an access.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Box a native boolean.
    pub fn to_value(&self, b: bool) -> Value {
        Value::Bool(b)
    }

    pub fn create_string(&self, s: &str) -> Value {
        Value::string(s)
    }

    pub fn trace(&self) -> &[Access] {
        &self.trace
    }

    pub fn take_trace(&mut self) -> Vec<Access> {
        std::mem::take(&mut self.trace)
    }
}
