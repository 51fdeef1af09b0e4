/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Logging used by the pixedit library crates
//!
//! With the `log` feature the macros are the ones from the `log` crate.
//! Without it they expand to a format string that is type checked but
//! never evaluated, so variables only read by a log line stay "used"
//! and nothing is formatted at runtime.
//!
//! The binary configures the logger, libraries only emit `debug` and
//! `trace` messages.

#[cfg(feature = "log")]
pub use ::log::{debug, trace};

// #[macro_export] puts macros at the crate root, re-export them here
// so callers write `pixedit_core::log::trace` either way.
#[cfg(not(feature = "log"))]
pub use crate::{__pixedit_debug as debug, __pixedit_trace as trace};

#[cfg(not(feature = "log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __pixedit_discard {
    ($($arg:tt)+) => {
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    };
}

#[cfg(not(feature = "log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __pixedit_debug {
    ($($arg:tt)+) => {
        $crate::__pixedit_discard!($($arg)+)
    };
}

#[cfg(not(feature = "log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __pixedit_trace {
    ($($arg:tt)+) => {
        $crate::__pixedit_discard!($($arg)+)
    };
}

#[cfg(all(test, not(feature = "log")))]
mod tests {
    use crate::log::{debug, trace};

    #[test]
    fn disabled_macros_do_not_evaluate_arguments() {
        let mut calls = 0;
        let mut count = || {
            calls += 1;
            calls
        };
        trace!("{}", count());
        debug!("value {}", count());

        assert_eq!(calls, 0);
    }
}
