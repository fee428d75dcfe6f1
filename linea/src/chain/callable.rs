/// A unit of work whose positional parameters are packed into the tuple `Args`.
///
/// Every `Fn` of arity 0 through 12 is a `Callable`, so plain functions and
/// closures can be appended to a pipeline directly. Packing the parameter list
/// into one tuple type lets a pipeline carry the signature of its first stage
/// through every later stage.
///
/// ```
/// use linea::Callable;
///
/// fn area(width: u32, height: u32) -> u32 {
///     width * height
/// }
///
/// assert_eq!(area.invoke((3, 4)), 12);
/// ```
pub trait Callable<Args> {
    type Output;

    fn invoke(&self, args: Args) -> Self::Output;
}

/// Fixed-arity tuples, the only values a stage may spread across the
/// parameters of the next stage.
pub trait Tuple {
    const ARITY: usize;
}

macro_rules! one {
    ($ty:ident) => {
        1
    };
}

macro_rules! impl_for_arity {
    ($($ty:ident),*) => {
        impl<Func, Ret, $($ty,)*> Callable<($($ty,)*)> for Func
        where
            Func: Fn($($ty),*) -> Ret,
        {
            type Output = Ret;

            #[allow(non_snake_case, clippy::unused_unit)]
            #[inline]
            fn invoke(&self, ($($ty,)*): ($($ty,)*)) -> Ret {
                (self)($($ty),*)
            }
        }

        impl<$($ty,)*> Tuple for ($($ty,)*) {
            const ARITY: usize = 0 $(+ one!($ty))*;
        }
    };
}

impl_for_arity!();
impl_for_arity!(T1);
impl_for_arity!(T1, T2);
impl_for_arity!(T1, T2, T3);
impl_for_arity!(T1, T2, T3, T4);
impl_for_arity!(T1, T2, T3, T4, T5);
impl_for_arity!(T1, T2, T3, T4, T5, T6);
impl_for_arity!(T1, T2, T3, T4, T5, T6, T7);
impl_for_arity!(T1, T2, T3, T4, T5, T6, T7, T8);
impl_for_arity!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_for_arity!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_for_arity!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
impl_for_arity!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);
