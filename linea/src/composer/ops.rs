use super::pipeline::Stage;
use crate::chain::callable::{Callable, Tuple};
use crate::chain::compose::Composed;
use crate::chain::mode::{Regular, TupleUnpack};
use std::ops::Shr;

/// `stage >> g` is `stage.then(g)`.
impl<F, Args, G, R> Shr<G> for Stage<F, Args, Regular>
where
    F: Callable<Args>,
    G: Fn(F::Output) -> R,
{
    type Output = Stage<Composed<F, G, Regular>, Args, Regular>;

    fn shr(self, g: G) -> Self::Output {
        self.then(g)
    }
}

/// `stage >> g` is `stage.then(g)`, spreading the tuple over `g`.
impl<F, Args, G> Shr<G> for Stage<F, Args, TupleUnpack>
where
    F: Callable<Args>,
    F::Output: Tuple,
    G: Callable<F::Output>,
{
    type Output = Stage<Composed<F, G, TupleUnpack>, Args, Regular>;

    fn shr(self, g: G) -> Self::Output {
        self.then(g)
    }
}

#[cfg(feature = "unstable-call-operator")]
mod unstable {
    use super::Stage;
    use crate::chain::callable::Callable;
    use crate::chain::mode::ComposeType;
    use crate::warnings::warn_unstable_call_operator;
    use std::ops::BitOr;

    /// `stage | args` is `stage.call(args)`.
    ///
    /// Experimental: every use logs a warning on the `linea::unstable` target.
    /// Prefer [`Stage::call`].
    impl<F, Args, Mode> BitOr<Args> for Stage<F, Args, Mode>
    where
        F: Callable<Args>,
        Mode: ComposeType,
    {
        type Output = F::Output;

        #[track_caller]
        fn bitor(self, args: Args) -> Self::Output {
            warn_unstable_call_operator();
            self.call(args)
        }
    }

    /// `&stage | args` is `stage.call(args)` without consuming the stage.
    impl<F, Args, Mode> BitOr<Args> for &Stage<F, Args, Mode>
    where
        F: Callable<Args>,
        Mode: ComposeType,
    {
        type Output = F::Output;

        #[track_caller]
        fn bitor(self, args: Args) -> Self::Output {
            warn_unstable_call_operator();
            self.call(args)
        }
    }
}
