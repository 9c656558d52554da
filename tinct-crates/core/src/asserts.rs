//! Leveled assertions for the solver internals.
//!
//! Cheap checks run at [`TINCT_ASSERT_SIMPLE`]; the more expensive ones (e.g. re-deriving a
//! domain size from scratch) only run when the `debug-checks` feature raises the level.

#[cfg(not(feature = "debug-checks"))]
pub const TINCT_ASSERT_LEVEL_DEFINITION: u8 = TINCT_ASSERT_SIMPLE;

#[cfg(feature = "debug-checks")]
pub const TINCT_ASSERT_LEVEL_DEFINITION: u8 = TINCT_ASSERT_ADVANCED;

pub const TINCT_ASSERT_SIMPLE: u8 = 1;
pub const TINCT_ASSERT_MODERATE: u8 = 2;
pub const TINCT_ASSERT_ADVANCED: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! tinct_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::TINCT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::TINCT_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! tinct_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::TINCT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::TINCT_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! tinct_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::TINCT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::TINCT_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! tinct_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::TINCT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::TINCT_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}
