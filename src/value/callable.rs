//! Native callables carried inside [`Value`]
//!
//! A callable receives the receiver it was invoked on plus its arguments and
//! either returns a value or throws one. Binding fixes the receiver and may
//! prepend leading arguments.

use super::Value;
use std::fmt;
use std::sync::Arc;

/// Signature shared by every native callable
pub type NativeFn = dyn Fn(&Value, &[Value]) -> Result<Value, Value> + Send + Sync;

/// An invocable unit with arity, optional bound receiver and bound leading arguments
#[derive(Clone)]
pub struct Callable {
    func: Arc<NativeFn>,
    arity: usize,
    receiver: Option<Arc<Value>>,
    bound_args: Vec<Value>,
}

impl Callable {
    /// Wrap a native function declaring `arity` parameters
    pub fn new<F>(arity: usize, func: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value, Value> + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            arity,
            receiver: None,
            bound_args: Vec::new(),
        }
    }

    /// Wrap a function that ignores its receiver
    pub fn from_fn<F>(arity: usize, func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, Value> + Send + Sync + 'static,
    {
        Self::new(arity, move |_, args| func(args))
    }

    /// Number of parameters still expected after bound arguments
    pub fn arity(&self) -> usize {
        self.arity.saturating_sub(self.bound_args.len())
    }

    /// The receiver fixed by [`Callable::bind`], if any
    pub fn bound_receiver(&self) -> Option<&Value> {
        self.receiver.as_deref()
    }

    /// Arguments prepended to every call
    pub fn bound_args(&self) -> &[Value] {
        &self.bound_args
    }

    /// Invoke with an explicit receiver.
    ///
    /// A bound receiver always wins over the one supplied here.
    pub fn call(&self, receiver: &Value, args: &[Value]) -> Result<Value, Value> {
        let receiver = self.receiver.as_deref().unwrap_or(receiver);
        if self.bound_args.is_empty() {
            return (self.func)(receiver, args);
        }

        let mut all = Vec::with_capacity(self.bound_args.len() + args.len());
        all.extend_from_slice(&self.bound_args);
        all.extend_from_slice(args);
        (self.func)(receiver, &all)
    }

    /// Invoke with a `Null` receiver
    pub fn invoke(&self, args: &[Value]) -> Result<Value, Value> {
        self.call(&Value::Null, args)
    }

    /// Return a copy whose receiver is fixed to `receiver`, with `args` prepended.
    ///
    /// Binding an already bound callable keeps the first receiver and appends
    /// the new leading arguments after the existing ones.
    pub fn bind(&self, receiver: Value, args: impl IntoIterator<Item = Value>) -> Self {
        let mut bound_args = self.bound_args.clone();
        bound_args.extend(args);
        Self {
            func: Arc::clone(&self.func),
            arity: self.arity,
            receiver: self
                .receiver
                .clone()
                .or_else(|| Some(Arc::new(receiver))),
            bound_args,
        }
    }

    /// Whether both callables wrap the same native function
    pub fn same_function(&self, other: &Callable) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.func) as *const (),
            Arc::as_ptr(&other.func) as *const (),
        )
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.same_function(other)
            && self.bound_args == other.bound_args
            && self.receiver.as_deref() == other.receiver.as_deref()
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("arity", &self.arity)
            .field("bound_receiver", &self.receiver.is_some())
            .field("bound_args", &self.bound_args.len())
            .finish()
    }
}
