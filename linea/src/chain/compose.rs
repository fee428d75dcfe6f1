use super::callable::Callable;
use super::mode::{Regular, TupleUnpack};
use std::fmt;
use std::marker::PhantomData;

/// Two callables joined into one; `Mode` decides how the output of `first`
/// reaches `second`.
///
/// Errors and panics raised by either callable are not intercepted.
pub struct Composed<F, G, Mode> {
    first: F,
    second: G,
    _mode: PhantomData<Mode>,
}

impl<F, G, Mode> Composed<F, G, Mode> {
    pub(crate) fn new(first: F, second: G) -> Self {
        Self {
            first,
            second,
            _mode: PhantomData,
        }
    }

    /// Splits the composition back into its two halves.
    pub fn into_parts(self) -> (F, G) {
        (self.first, self.second)
    }
}

impl<F: Clone, G: Clone, Mode> Clone for Composed<F, G, Mode> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<F, G, Mode> fmt::Debug for Composed<F, G, Mode> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Composed")
            .field("first", &std::any::type_name::<F>())
            .field("second", &std::any::type_name::<G>())
            .field("mode", &std::any::type_name::<Mode>())
            .finish()
    }
}

impl<Args, F, G> Callable<Args> for Composed<F, G, Regular>
where
    F: Callable<Args>,
    G: Callable<(F::Output,)>,
{
    type Output = G::Output;

    #[inline]
    fn invoke(&self, args: Args) -> Self::Output {
        self.second.invoke((self.first.invoke(args),))
    }
}

impl<Args, F, G> Callable<Args> for Composed<F, G, TupleUnpack>
where
    F: Callable<Args>,
    G: Callable<F::Output>,
{
    type Output = G::Output;

    #[inline]
    fn invoke(&self, args: Args) -> Self::Output {
        self.second.invoke(self.first.invoke(args))
    }
}

/// Composes `f` and `g` into `g(f(..))`.
///
/// ```
/// use linea::{compose, Callable};
///
/// let length_doubled = compose(|s: &str| s.len(), |n: usize| n * 2);
/// assert_eq!(length_doubled.invoke(("abc",)), 6);
/// ```
pub fn compose<Args, F, G, R>(f: F, g: G) -> Composed<F, G, Regular>
where
    F: Callable<Args>,
    G: Fn(F::Output) -> R,
{
    compose_regular(f, g)
}

/// Composes `f` and `g` so that `f`'s single return value is `g`'s sole argument.
pub fn compose_regular<Args, F, G, R>(f: F, g: G) -> Composed<F, G, Regular>
where
    F: Callable<Args>,
    G: Fn(F::Output) -> R,
{
    Composed::new(f, g)
}

/// Composes `f` and `g` so that the tuple returned by `f` is spread over `g`'s
/// positional parameters. Arity and per-position types must line up.
pub fn compose_tuple_unpack<Args, F, G>(f: F, g: G) -> Composed<F, G, TupleUnpack>
where
    F: Callable<Args>,
    G: Callable<F::Output>,
{
    Composed::new(f, g)
}
