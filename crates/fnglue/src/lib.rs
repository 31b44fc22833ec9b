//! fnglue: shims at the boundary between host callables and a consumer
//! that expects a fixed function interface and immutable value shapes.
//!
//! Three independent, stateless operations:
//!
//! ```text
//! host closure  Fn(T) -> Result<R, E>
//!   |
//!   v  adapt() wraps failures and panics into GlueError::Wrapped
//! BoxFun1<T, R>   (the consumer-facing function interface)
//!
//! any finite iterable  --collect-->  Seq<T>   (immutable, order-preserving)
//! (x, y)               --pair()--->  Pair<T, U>
//! ```
//!
//! None of the operations hold state, perform I/O, or share mutable data
//! with their inputs; each may be called concurrently without coordination.

pub mod error;
pub mod fun;
pub mod pair;
pub mod seq;

pub use error::{BoxError, GlueError, PanicMessage, Result};
pub use fun::{adapt, adapt_infallible, BoxFun1, Fun1};
pub use pair::{pair, Pair};
pub use seq::Seq;
