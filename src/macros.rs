/// Implements `PartialEq` in both directions between two types, given a
/// comparison function taking `(&a, &b)`.
macro_rules! symmetric_eq {
    () => {};

    (($a:ty, $b:ty) = $f:path ; $($($other:tt)+)?) => {
        impl core::cmp::PartialEq<$a> for $b {
            #[inline]
            fn eq(&self, other: &$a) -> bool {
                $f(other, self)
            }
        }

        impl core::cmp::PartialEq<$b> for $a {
            #[inline]
            fn eq(&self, other: &$b) -> bool {
                $f(self, other)
            }
        }

        $( $crate::macros::symmetric_eq!( $($other)+ ); )?
    };
}

/// Implements `PartialOrd` in both directions between two types, given an
/// ordering function taking `(&a, &b)`.
macro_rules! symmetric_ord {
    () => {};

    (($a:ty, $b:ty) = $f:path ; $($($other:tt)+)?) => {
        impl core::cmp::PartialOrd<$a> for $b {
            #[inline]
            fn partial_cmp(&self, other: &$a) -> Option<core::cmp::Ordering> {
                $f(other, self).map(core::cmp::Ordering::reverse)
            }
        }

        impl core::cmp::PartialOrd<$b> for $a {
            #[inline]
            fn partial_cmp(&self, other: &$b) -> Option<core::cmp::Ordering> {
                $f(self, other)
            }
        }

        $( $crate::macros::symmetric_ord!( $($other)+ ); )?
    };
}

pub(crate) use {symmetric_eq, symmetric_ord};
