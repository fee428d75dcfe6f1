//! Typed linear pipelines built by composing plain functions and closures.
//!
//! A pipeline starts from [`Pipeline`] and grows one [`Stage`] per call to
//! `then`. Each stage either hands its result to the next callable as a single
//! argument, or (after `then_tuple`) spreads a tuple result over the next
//! callable's positional parameters. Arity and types at every joint are
//! checked by the compiler; the pipeline keeps the parameters of its first
//! stage all the way to [`Stage::call`].
//!
//! ```
//! use linea::Pipeline;
//!
//! let pipeline = Pipeline::new()
//!     .then(|a: i32, b: i32| a + b)
//!     .then(|c| c * 2);
//!
//! assert_eq!(pipeline.call((1, 2)), 6);
//! ```

pub mod chain;
pub mod composer;
pub mod error;
#[cfg(feature = "unstable-call-operator")]
pub mod warnings;

// Re-export main types for easier access
pub use chain::callable::{Callable, Tuple};
pub use chain::compose::{compose, compose_regular, compose_tuple_unpack, Composed};
pub use chain::mode::{ComposeType, CompositionMode, Regular, TupleUnpack, Unpack};
pub use composer::{Pipeline, Stage};
pub use error::{PipelineError, Result};
