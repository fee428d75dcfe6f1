use crate::chain::callable::{Callable, Tuple};
use crate::chain::compose::Composed;
use crate::chain::mode::{ComposeType, CompositionMode, Regular, TupleUnpack, Unpack};
use crate::error::Result;
use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, instrument};

/// Entry point for building a new pipeline.
///
/// `Pipeline` holds nothing; appending the first callable yields a [`Stage`]
/// wrapping that callable as-is. Every later append composes the new callable
/// with the one already wrapped, so calling a pipeline of N stages calls the N
/// callables left to right.
///
/// # Examples
///
/// ```
/// use linea::Pipeline;
///
/// fn remove_stopwords(tokens: Vec<&str>) -> Vec<&str> {
///     tokens.into_iter().filter(|t| *t != "the").collect()
/// }
///
/// fn uppercase(tokens: Vec<&str>) -> Vec<String> {
///     tokens.iter().map(|t| t.to_uppercase()).collect()
/// }
///
/// let pipeline = Pipeline::new().then(remove_stopwords).then(uppercase);
///
/// let tokens = vec!["the", "quick", "brown", "fox"];
/// assert_eq!(pipeline.call((tokens,)), ["QUICK", "BROWN", "FOX"]);
/// ```
///
/// Tuple results can be spread over the parameters of the next stage:
///
/// ```
/// use linea::Pipeline;
///
/// let pipeline = Pipeline::new()
///     .then_tuple(|a: u32, b: u32| (a / b, a % b))
///     .then(|q: u32, r: u32| format!("{q}-{r}"));
///
/// assert_eq!(pipeline.call((17, 5)), "3-2");
/// ```
///
/// Closures appended to a `Pipeline` or after a tuple-unpacking stage need
/// annotated parameters; after a regular stage the parameter type is inferred.
///
/// `Pipeline` has no `>>` operator. A `Shr` impl on it would leave the first
/// callable's parameter tuple unconstrained (rustc E0207), so start the chain
/// with [`Pipeline::then`] and use `>>` from the first [`Stage`] on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pipeline;

impl Pipeline {
    /// Creates a new empty pipeline.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Always [`CompositionMode::NoCompose`]: there is no callable to join yet.
    pub const fn mode(&self) -> CompositionMode {
        CompositionMode::NoCompose
    }

    /// Starts the pipeline with `f`.
    ///
    /// # Arguments
    ///
    /// * `f` - The first callable; its parameters become the pipeline's parameters
    ///
    /// # Returns
    ///
    /// A stage handing `f`'s return value to the next appended callable
    #[must_use]
    pub fn then<Args, F>(self, f: F) -> Stage<F, Args, Regular>
    where
        F: Callable<Args>,
    {
        debug!(mode = %Regular::MODE, "Starting pipeline");
        Stage::new(f)
    }

    /// Starts the pipeline with a tuple-returning `f` whose result will be
    /// spread over the parameters of the next appended callable.
    #[must_use]
    pub fn then_tuple<Args, F>(self, f: F) -> Stage<F, Args, TupleUnpack>
    where
        F: Callable<Args>,
        F::Output: Tuple,
    {
        debug!(
            mode = %TupleUnpack::MODE,
            arity = <F::Output as Tuple>::ARITY,
            "Starting pipeline"
        );
        Stage::new(f)
    }

    /// Starts the pipeline with `f`, naming the result unpack mode.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::UnsupportedUnpack`](crate::PipelineError::UnsupportedUnpack)
    /// when `unpack` is not a recognized mode.
    #[instrument(skip(self, f))]
    pub fn then_unpack<Args, F>(self, f: F, unpack: &str) -> Result<Stage<F, Args, TupleUnpack>>
    where
        F: Callable<Args>,
        F::Output: Tuple,
    {
        match unpack.parse::<Unpack>()? {
            Unpack::Tuple => Ok(self.then_tuple(f)),
        }
    }
}

/// An immutable pipeline node.
///
/// A stage owns the composition of every callable appended so far and is
/// tagged with the mode (`Regular` or `TupleUnpack`) used to join it with the
/// next callable. Appending consumes the stage and returns a new one; clone a
/// stage to build several independent continuations from the same prefix.
///
/// A `TupleUnpack` tag on the last stage has no effect on [`Stage::call`],
/// which always returns the raw result of the composed callable.
///
/// # Rejected joins
///
/// A tuple result cannot be handed to a callable of a different arity:
///
/// ```compile_fail
/// use linea::Pipeline;
///
/// let _ = Pipeline::new()
///     .then_tuple(|a: u32, b: u32| (a / b, a % b))
///     .then(|q: u32| q);
/// ```
///
/// A regular stage hands over one value, even when that value is a tuple:
///
/// ```compile_fail
/// use linea::Pipeline;
///
/// let _ = Pipeline::new()
///     .then(|a: u32, b: u32| (a / b, a % b))
///     .then(|q: u32, r: u32| q + r);
/// ```
///
/// Only tuples can be marked for unpacking:
///
/// ```compile_fail
/// use linea::Pipeline;
///
/// let _ = Pipeline::new()
///     .then(|x: u32| x)
///     .then_tuple(|x: u32| x + 1);
/// ```
///
/// Each tuple element must match the parameter at the same position:
///
/// ```compile_fail
/// use linea::Pipeline;
///
/// let _ = Pipeline::new()
///     .then_tuple(|a: u32, b: u32| (a, b))
///     .then(|label: String, n: u32| format!("{label}{n}"));
/// ```
pub struct Stage<F, Args, Mode = Regular> {
    callable: F,
    _marker: PhantomData<(fn(Args), Mode)>,
}

impl<F, Args, Mode> Stage<F, Args, Mode> {
    fn new(callable: F) -> Self {
        Self {
            callable,
            _marker: PhantomData,
        }
    }

    fn join<G, Next>(self, g: G) -> Stage<Composed<F, G, Mode>, Args, Next> {
        Stage::new(Composed::new(self.callable, g))
    }

    /// Unwraps the composed callable.
    pub fn into_inner(self) -> F {
        self.callable
    }
}

impl<F, Args, Mode> Stage<F, Args, Mode>
where
    F: Callable<Args>,
    Mode: ComposeType,
{
    /// Runs every stage in order on `args` and returns the last result.
    ///
    /// `args` must match the parameters of the first stage. Panics raised by
    /// any callable unwind through here unchanged.
    pub fn call(&self, args: Args) -> F::Output {
        self.callable.invoke(args)
    }

    /// The mode used to join this stage with the next appended callable.
    pub fn mode(&self) -> CompositionMode {
        Mode::MODE
    }
}

impl<F, Args> Stage<F, Args, Regular>
where
    F: Callable<Args>,
{
    /// Appends `g`, which receives this stage's result as its only argument.
    #[must_use]
    pub fn then<G, R>(self, g: G) -> Stage<Composed<F, G, Regular>, Args, Regular>
    where
        G: Fn(F::Output) -> R,
    {
        debug!(join = %Regular::MODE, mode = %Regular::MODE, "Appending stage");
        self.join(g)
    }

    /// Appends a tuple-returning `g`, which receives this stage's result as its
    /// only argument; `g`'s result is spread over the next appended callable.
    #[must_use]
    pub fn then_tuple<G, R>(self, g: G) -> Stage<Composed<F, G, Regular>, Args, TupleUnpack>
    where
        G: Fn(F::Output) -> R,
        R: Tuple,
    {
        debug!(join = %Regular::MODE, mode = %TupleUnpack::MODE, "Appending stage");
        self.join(g)
    }

    /// Appends `g`, naming the result unpack mode.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::UnsupportedUnpack`](crate::PipelineError::UnsupportedUnpack)
    /// when `unpack` is not a recognized mode.
    #[instrument(skip(self, g))]
    pub fn then_unpack<G, R>(
        self,
        g: G,
        unpack: &str,
    ) -> Result<Stage<Composed<F, G, Regular>, Args, TupleUnpack>>
    where
        G: Fn(F::Output) -> R,
        R: Tuple,
    {
        match unpack.parse::<Unpack>()? {
            Unpack::Tuple => Ok(self.then_tuple(g)),
        }
    }
}

impl<F, Args> Stage<F, Args, TupleUnpack>
where
    F: Callable<Args>,
    F::Output: Tuple,
{
    /// Number of parameters the next appended callable receives.
    pub fn arity(&self) -> usize {
        <F::Output as Tuple>::ARITY
    }

    /// Appends `g`, whose positional parameters receive the elements of this
    /// stage's tuple result.
    #[must_use]
    pub fn then<G>(self, g: G) -> Stage<Composed<F, G, TupleUnpack>, Args, Regular>
    where
        G: Callable<F::Output>,
    {
        debug!(join = %TupleUnpack::MODE, mode = %Regular::MODE, "Appending stage");
        self.join(g)
    }

    /// Appends a tuple-returning `g` fed with the elements of this stage's
    /// tuple result; `g`'s result is spread over the next appended callable.
    #[must_use]
    pub fn then_tuple<G>(self, g: G) -> Stage<Composed<F, G, TupleUnpack>, Args, TupleUnpack>
    where
        G: Callable<F::Output>,
        G::Output: Tuple,
    {
        debug!(join = %TupleUnpack::MODE, mode = %TupleUnpack::MODE, "Appending stage");
        self.join(g)
    }

    /// Appends `g`, naming the result unpack mode.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::UnsupportedUnpack`](crate::PipelineError::UnsupportedUnpack)
    /// when `unpack` is not a recognized mode.
    #[instrument(skip(self, g))]
    pub fn then_unpack<G>(
        self,
        g: G,
        unpack: &str,
    ) -> Result<Stage<Composed<F, G, TupleUnpack>, Args, TupleUnpack>>
    where
        G: Callable<F::Output>,
        G::Output: Tuple,
    {
        match unpack.parse::<Unpack>()? {
            Unpack::Tuple => Ok(self.then_tuple(g)),
        }
    }
}

impl<F, Args, Mode> Callable<Args> for Stage<F, Args, Mode>
where
    F: Callable<Args>,
{
    type Output = F::Output;

    #[inline]
    fn invoke(&self, args: Args) -> Self::Output {
        self.callable.invoke(args)
    }
}

impl<F: Clone, Args, Mode> Clone for Stage<F, Args, Mode> {
    fn clone(&self) -> Self {
        Self::new(self.callable.clone())
    }
}

impl<F, Args, Mode: ComposeType> fmt::Debug for Stage<F, Args, Mode> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Stage")
            .field("args", &type_name::<Args>())
            .field("mode", &Mode::MODE)
            .finish_non_exhaustive()
    }
}
