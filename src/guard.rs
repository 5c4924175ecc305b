//! Failure boundaries around callables
//!
//! A wrapped callable never throws. A thrown value or a panic from the inner
//! callable becomes the result; with an error handler the handler's result is
//! returned instead, and a failing handler degrades to `Null`.

use crate::error::common;
use crate::value::{Callable, Value};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, warn};

/// Wrap `func` so that failures become return values.
///
/// - success: the inner result
/// - failure without `on_error`: the thrown value itself
/// - failure with `on_error`: whatever the handler returns for the thrown value
/// - handler failure: `Null`
pub fn safe_fn(func: Callable, on_error: Option<Callable>) -> Callable {
    let arity = func.arity();
    Callable::new(arity, move |receiver, args| {
        let thrown = match guarded(|| func.call(receiver, args)) {
            Ok(value) => return Ok(value),
            Err(thrown) => thrown,
        };
        debug!(error = %thrown, "safe_fn caught failure");

        let Some(handler) = &on_error else {
            return Ok(thrown);
        };
        match guarded(|| handler.invoke(std::slice::from_ref(&thrown))) {
            Ok(handled) => Ok(handled),
            Err(secondary) => {
                warn!(error = %secondary, "safe_fn error handler failed");
                Ok(Value::Null)
            }
        }
    })
}

/// Run `call`, turning a panic into a thrown string value
fn guarded<F>(call: F) -> Result<Value, Value>
where
    F: FnOnce() -> Result<Value, Value>,
{
    catch_unwind(AssertUnwindSafe(call)).unwrap_or_else(|payload| Err(panic_value(payload)))
}

fn panic_value(payload: Box<dyn Any + Send>) -> Value {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    Value::from(common::callback_panicked(&message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn throwing(value: &'static str) -> Callable {
        Callable::from_fn(0, move |_| Err(Value::from(value)))
    }

    #[test]
    fn test_success_passes_through() {
        let double = Callable::from_fn(1, |args| {
            let n = args.first().and_then(Value::as_f64).unwrap_or(0.0);
            Ok(Value::from(n * 2.0))
        });
        let safe = safe_fn(double, None);
        assert_eq!(safe.invoke(&[Value::from(21)]), Ok(Value::from(42)));
        assert_eq!(safe.arity(), 1);
    }

    #[test]
    fn test_receiver_is_forwarded() {
        let echo = Callable::new(0, |receiver, _| Ok(receiver.clone()));
        let safe = safe_fn(echo, None);
        assert_eq!(safe.call(&Value::from("me"), &[]), Ok(Value::from("me")));
    }

    #[test]
    fn test_thrown_value_is_returned() {
        let safe = safe_fn(throwing("e"), None);
        assert_eq!(safe.invoke(&[]), Ok(Value::from("e")));
    }

    #[test]
    fn test_handler_result_is_returned() {
        let handler = Callable::from_fn(1, |_| Ok(Value::from("handled")));
        let safe = safe_fn(throwing("e"), Some(handler));
        assert_eq!(safe.invoke(&[]), Ok(Value::from("handled")));
    }

    #[test]
    fn test_handler_receives_thrown_value() {
        let handler = Callable::from_fn(1, |args| Ok(args[0].clone()));
        let safe = safe_fn(throwing("original"), Some(handler));
        assert_eq!(safe.invoke(&[]), Ok(Value::from("original")));
    }

    #[test]
    fn test_failing_handler_degrades_to_null() {
        let safe = safe_fn(throwing("e"), Some(throwing("secondary")));
        assert_eq!(safe.invoke(&[]), Ok(Value::Null));
    }

    #[test]
    fn test_panic_is_contained() {
        let panicking = Callable::from_fn(0, |_| panic!("kaboom"));
        let safe = safe_fn(panicking, None);
        let result = safe.invoke(&[]).unwrap();
        assert!(result.as_str().unwrap().contains("kaboom"));
    }

    #[test]
    fn test_panicking_handler_degrades_to_null() {
        let handler = Callable::from_fn(1, |_| panic!("handler kaboom"));
        let safe = safe_fn(throwing("e"), Some(handler));
        assert_eq!(safe.invoke(&[]), Ok(Value::Null));
    }
}
