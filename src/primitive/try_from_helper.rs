/// Implements TryFrom from Sexp-like containers into a Primitive variant.
///
/// Example:
///   impl_try_from!(Symbol;
///                  Sexp              ->  Symbol,
///                  ref Sexp          ->  ref Symbol,
///                  Option<ref Sexp>  ->  ref Symbol,
///   );
macro_rules! impl_try_from {
    ($name:ident; Sexp -> $to:ident, $($tail:tt)*) => {
        impl std::convert::TryFrom<$crate::sexp::Sexp> for $to {
            type Error = $crate::sexp::Sexp;

            fn try_from(value: $crate::sexp::Sexp) -> Result<Self, Self::Error> {
                if let $crate::sexp::Sexp::Primitive($crate::primitive::Primitive::$name(val)) =
                    value
                {
                    Ok(val)
                } else {
                    Err(value)
                }
            }
        }
        impl_try_from!($name; $($tail)*);
    };
    ($name:ident; ref Sexp -> ref $to:ident, $($tail:tt)*) => {
        impl<'a> std::convert::TryFrom<&'a $crate::sexp::Sexp> for &'a $to {
            type Error = &'a $crate::sexp::Sexp;

            fn try_from(value: &'a $crate::sexp::Sexp) -> Result<Self, Self::Error> {
                if let $crate::sexp::Sexp::Primitive($crate::primitive::Primitive::$name(val)) =
                    value
                {
                    Ok(val)
                } else {
                    Err(value)
                }
            }
        }
        impl_try_from!($name; $($tail)*);
    };
    ($name:ident; Option<ref Sexp> -> ref $to:ident, $($tail:tt)*) => {
        impl<'a> std::convert::TryFrom<Option<&'a $crate::sexp::Sexp>> for &'a $to {
            type Error = Option<&'a $crate::sexp::Sexp>;

            fn try_from(value: Option<&'a $crate::sexp::Sexp>) -> Result<Self, Self::Error> {
                if let Some($crate::sexp::Sexp::Primitive($crate::primitive::Primitive::$name(
                    val,
                ))) = value
                {
                    Ok(val)
                } else {
                    Err(value)
                }
            }
        }
        impl_try_from!($name; $($tail)*);
    };
    ($name:ident;) => {};
}
