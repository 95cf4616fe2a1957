/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Types used to report declarations the cascade could not apply.

#![deny(missing_docs)]

use std::fmt;

use crate::properties::PropertyId;
use crate::properties::value::CssValue;

/// Why a declared value was rejected by a property.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidValue {
    /// The value has a type the property does not accept.
    UnexpectedValue,
    /// The value is an identifier the property does not know.
    UnknownKeyword,
    /// The value is numerically out of range, e.g. a negative radius.
    OutOfRange,
}

impl fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            InvalidValue::UnexpectedValue => "unexpected value type",
            InvalidValue::UnknownKeyword => "unknown keyword",
            InvalidValue::OutOfRange => "value out of range",
        })
    }
}

/// A generic trait for an error reporter.
///
/// Invalid declarations never interrupt the cascade: the property keeps the
/// value it would have had without the declaration, and the reporter hears
/// about it.
pub trait CascadeErrorReporter: Sync + Send {
    /// Called when a declared value could not be applied.
    fn report_error(&self, property: PropertyId, value: &CssValue, error: InvalidValue);
}

/// An error reporter that uses [the `log` crate](https://github.com/rust-lang/log)
/// at `info` level.
///
/// This logging is silent by default, and can be enabled with a
/// `RUST_LOG=restyle=info` environment variable.
pub struct RustLogReporter;

impl CascadeErrorReporter for RustLogReporter {
    fn report_error(&self, property: PropertyId, value: &CssValue, error: InvalidValue) {
        if log_enabled!(log::Level::Info) {
            info!("Ignoring {}: {:?} ({})", property.name(), value, error)
        }
    }
}

/// Error reporter which silently forgets errors
pub struct NullReporter;

impl CascadeErrorReporter for NullReporter {
    fn report_error(&self, _: PropertyId, _: &CssValue, _: InvalidValue) {
        // do nothing
    }
}
