// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Contract-violation reporting.
//!
//! Tessera has no in-band error path for broken preconditions (normalizing a
//! zero-length vector, `unit_inverse` on a non-unit quaternion, dividing by a
//! zero scalar, out-of-range lane indices, inverting a singular matrix). Every
//! such check funnels through [`violation`], whose behaviour is fixed by the
//! build:
//!
//! | build | behaviour |
//! |---|---|
//! | `debug_assertions` | log, then panic ([`ViolationBehavior::Halt`]) |
//! | release + `release_contracts` | log, then abort ([`ViolationBehavior::Exit`]) |
//! | release | checks compiled out |
//!
//! Events are emitted through `tracing` under the `tessera_math::contract`
//! target; installing a subscriber is the caller's business.

use core::fmt;

/// What happens once a contract violation has been logged.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViolationBehavior {
    /// Unwind through the panic handler so a debugger or test harness can
    /// inspect the failure.
    Halt,
    /// Terminate the process immediately.
    Exit,
}

/// Whether contract checks are compiled into this build.
pub const CHECKS_ENABLED: bool = cfg!(any(debug_assertions, feature = "release_contracts"));

/// Behaviour selected for this build.
pub const fn behavior() -> ViolationBehavior {
    if cfg!(debug_assertions) {
        ViolationBehavior::Halt
    } else {
        ViolationBehavior::Exit
    }
}

/// Reports a broken precondition and never returns.
///
/// `condition` is the stringified check; `file` and `line` locate it.
#[cold]
#[inline(never)]
#[allow(clippy::panic)]
pub fn violation(condition: &str, message: fmt::Arguments<'_>, file: &str, line: u32) -> ! {
    tracing::error!(
        target: "tessera_math::contract",
        condition,
        file,
        line,
        "contract violation: {message}"
    );
    match behavior() {
        ViolationBehavior::Halt => {
            panic!("contract violation `{condition}` at {file}:{line}: {message}")
        }
        ViolationBehavior::Exit => std::process::abort(),
    }
}

/// Checks a precondition when [`CHECKS_ENABLED`] is set.
macro_rules! contract {
    ($cond:expr, $($arg:tt)+) => {
        if $crate::contract::CHECKS_ENABLED && !($cond) {
            $crate::contract::violation(
                stringify!($cond),
                format_args!($($arg)+),
                file!(),
                line!(),
            );
        }
    };
}

pub(crate) use contract;

/// Lane index check shared by every indexed accessor.
#[inline]
pub(crate) fn check_lane(index: usize, lanes: usize) {
    contract!(index < lanes, "lane index {index} out of range 0..{lanes}");
}
