//! Function adapter: wraps a host closure into the `Fun1` interface.
//!
//! Consumers program against `Fun1<T, R>` (or its boxed form `BoxFun1`).
//! `adapt` bridges any fallible host closure into that shape, funneling
//! every failure mode into [`GlueError::Wrapped`]:
//!
//! - an `Err` return becomes `Wrapped` with the original error as cause;
//! - a panic is caught and becomes `Wrapped` with the panic message as
//!   cause.
//!
//! Nothing is swallowed and nothing is retried; the failure surfaces
//! immediately to whoever invoked the adapted function.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::error::{BoxError, GlueError, PanicMessage, Result};

/// Single-method function interface expected by consumers.
pub trait Fun1<T, R> {
    fn apply(&self, x: T) -> Result<R>;
}

/// Owned, thread-shareable `Fun1`.
pub type BoxFun1<T, R> = Box<dyn Fun1<T, R> + Send + Sync>;

/// Any closure already returning the crate result type is a `Fun1` as-is.
impl<T, R, F> Fun1<T, R> for F
where
    F: Fn(T) -> Result<R>,
{
    fn apply(&self, x: T) -> Result<R> {
        self(x)
    }
}

/// Adapt a fallible host closure into a [`BoxFun1`].
///
/// `apply(x)` forwards to `f(x)` and returns its result unchanged on
/// success. Every failure, whether an `Err` return or a panic inside
/// `f`, is re-raised as [`GlueError::Wrapped`] with the original
/// failure as cause.
pub fn adapt<T, R, E, F>(f: F) -> BoxFun1<T, R>
where
    F: Fn(T) -> std::result::Result<R, E> + Send + Sync + 'static,
    E: Into<BoxError>,
    T: 'static,
    R: 'static,
{
    Box::new(move |x: T| -> Result<R> {
        match panic::catch_unwind(AssertUnwindSafe(|| f(x))) {
            Ok(Ok(r)) => Ok(r),
            Ok(Err(e)) => Err(GlueError::Wrapped(e.into())),
            Err(payload) => Err(GlueError::Wrapped(Box::new(PanicMessage(
                panic_text(payload),
            )))),
        }
    })
}

/// Adapt an infallible host closure into a [`BoxFun1`].
///
/// Equivalent to `adapt(move |x| Ok(f(x)))`; panics inside `f` are
/// still caught and wrapped.
pub fn adapt_infallible<T, R, F>(f: F) -> BoxFun1<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
    T: 'static,
    R: 'static,
{
    adapt(move |x| Ok::<_, BoxError>(f(x)))
}

/// Extract a readable message from a panic payload. Payloads raised by
/// `panic!` are `&str` or `String`; anything else gets a fixed marker.
fn panic_text(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "opaque panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn adapted_function_forwards_success() {
        let double = adapt_infallible(|x: i64| x * 2);
        assert_eq!(double.apply(21).unwrap(), 42);
    }

    #[test]
    fn adapted_function_forwards_ok_unchanged() {
        let parse = adapt(|s: &str| s.parse::<u32>());
        assert_eq!(parse.apply("17").unwrap(), 17);
    }

    #[test]
    fn err_return_is_wrapped_with_cause() {
        let fail = adapt(|_: u32| -> std::result::Result<u32, io::Error> {
            Err(io::Error::new(io::ErrorKind::InvalidData, "bad"))
        });
        let err = fail.apply(5).unwrap_err();
        let GlueError::Wrapped(cause) = &err;
        assert_eq!(cause.to_string(), "bad");
    }

    #[test]
    fn wrapped_cause_reachable_via_source() {
        use std::error::Error;
        let fail = adapt(|_: u32| Err::<u32, _>("boom"));
        let err = fail.apply(1).unwrap_err();
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "boom");
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn panic_is_caught_and_wrapped() {
        let hook = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        let explode = adapt_infallible(|_: u32| -> u32 { panic!("bad") });
        let err = explode.apply(5).unwrap_err();
        panic::set_hook(hook);
        let GlueError::Wrapped(cause) = &err;
        assert_eq!(cause.to_string(), "bad");
        assert!(cause.downcast_ref::<PanicMessage>().is_some());
    }

    #[test]
    fn panic_with_formatted_message() {
        let hook = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        let explode = adapt(|n: u32| -> std::result::Result<u32, io::Error> {
            panic!("limit exceeded: {n}")
        });
        let err = explode.apply(99).unwrap_err();
        panic::set_hook(hook);
        let GlueError::Wrapped(cause) = &err;
        assert_eq!(cause.to_string(), "limit exceeded: 99");
    }

    #[test]
    fn closures_returning_crate_result_are_fun1() {
        fn takes_fun1(f: &dyn Fun1<u32, u32>, x: u32) -> Result<u32> {
            f.apply(x)
        }
        let inc = |x: u32| -> Result<u32> { Ok(x + 1) };
        assert_eq!(takes_fun1(&inc, 41).unwrap(), 42);
    }

    #[test]
    fn adapted_function_is_reusable() {
        let double = adapt_infallible(|x: i64| x * 2);
        for i in 0..5 {
            assert_eq!(double.apply(i).unwrap(), i * 2);
        }
    }

    #[test]
    fn adapted_function_is_send_sync() {
        let double = adapt_infallible(|x: i64| x * 2);
        let shared = std::sync::Arc::new(double);
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let f = shared.clone();
                std::thread::spawn(move || f.apply(i).unwrap())
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap(), (i as i64) * 2);
        }
    }
}
