/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! `counter-reset` and `counter-increment`.
//!
//! Both properties write into the same per-name directive map, each owning
//! one half of every entry.

use crate::error_reporting::InvalidValue;
use crate::properties::builder::StyleBuilder;
use crate::properties::conversions::ConversionResult;
use crate::properties::handlers::ApplyProperty;
use crate::properties::value::CssValue;
use crate::values::content::{CounterDirectiveMap, CounterDirectives};

/// Which half of the counter directives a property sets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CounterProperty {
    /// `counter-reset`, defaulting to 0.
    Reset,
    /// `counter-increment`, defaulting to 1.
    Increment,
}

impl CounterProperty {
    fn directive(self, directives: &mut CounterDirectives) -> &mut Option<i32> {
        match self {
            CounterProperty::Reset => &mut directives.reset,
            CounterProperty::Increment => &mut directives.increment,
        }
    }

    fn default_value(self) -> i32 {
        match self {
            CounterProperty::Reset => 0,
            CounterProperty::Increment => 1,
        }
    }

    fn clear(self, map: &mut CounterDirectiveMap) {
        map.retain(|_, directives| {
            *self.directive(directives) = None;
            directives.reset.is_some() || directives.increment.is_some()
        });
    }

    /// Adds `value` to the directive of `name`. Resets replace, increments
    /// of the same name add up.
    fn add(self, map: &mut CounterDirectiveMap, name: &str, value: i32) {
        let directive = self.directive(map.entry(name.to_owned()).or_default());
        *directive = Some(match (self, *directive) {
            (CounterProperty::Increment, Some(previous)) => previous.saturating_add(value),
            _ => value,
        });
    }

    fn parse(self, value: &CssValue) -> ConversionResult<Vec<(String, i32)>> {
        value
            .as_slice()
            .iter()
            .map(|item| match *item {
                CssValue::Ident(ref name) => Ok((name.clone(), self.default_value())),
                CssValue::Pair(ref name, ref count) => {
                    let name = name.as_ident().ok_or(InvalidValue::UnexpectedValue)?;
                    let count = count.as_integer().ok_or(InvalidValue::UnexpectedValue)?;
                    Ok((name.to_owned(), count))
                },
                _ => Err(InvalidValue::UnexpectedValue),
            })
            .collect()
    }
}

impl ApplyProperty for CounterProperty {
    /// Merges the parent's directives of this kind into the element's own.
    fn apply_inherit(&self, builder: &mut StyleBuilder) {
        let parent = builder.inherited_style().counter_directives();
        let inherited: Vec<_> = parent
            .iter()
            .filter_map(|(name, directives)| {
                let mut directives = *directives;
                (*self.directive(&mut directives)).map(|value| (name.clone(), value))
            })
            .collect();
        if inherited.is_empty() {
            return;
        }
        let map = builder.style.counter_directives_mut();
        for (name, value) in inherited {
            *self.directive(map.entry(name).or_default()) = Some(value);
        }
    }

    fn apply_initial(&self, builder: &mut StyleBuilder) {
        if builder.style.counter_directives().is_empty() {
            return;
        }
        self.clear(builder.style.counter_directives_mut());
    }

    fn apply_value(&self, builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<()> {
        let directives = if value.is_ident("none") {
            Vec::new()
        } else {
            self.parse(value)?
        };
        if directives.is_empty() && builder.style.counter_directives().is_empty() {
            return Ok(());
        }
        let map = builder.style.counter_directives_mut();
        self.clear(map);
        for (name, value) in directives {
            self.add(map, &name, value);
        }
        Ok(())
    }
}
