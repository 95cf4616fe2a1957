/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! `-webkit-animation-*` and `-webkit-transition-*` longhands.

use crate::computed_style::ComputedStyle;
use crate::error_reporting::InvalidValue;
use crate::properties::PropertyId;
use crate::properties::builder::StyleBuilder;
use crate::properties::conversions::{self, ConversionResult};
use crate::properties::handlers::{ApplyProperty, Converter};
use crate::properties::value::CssValue;
use crate::values::animation::{
    Animation, AnimationFields, AnimationList, IterationCount, TimingFunction, TransitionProperty,
};

/// Whether a longhand belongs to the animation or the transition list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationListKind {
    /// `-webkit-animation-*`.
    Animations,
    /// `-webkit-transition-*`.
    Transitions,
}

/// One field of every entry of an animation or transition list.
pub struct AnimationProperty<T> {
    kind: AnimationListKind,
    field: AnimationFields,
    get: fn(&Animation) -> T,
    set: fn(&mut Animation, T),
    convert: Converter<T>,
}

impl<T> AnimationProperty<T> {
    #[allow(missing_docs)]
    pub fn new(
        kind: AnimationListKind,
        field: AnimationFields,
        get: fn(&Animation) -> T,
        set: fn(&mut Animation, T),
        convert: Converter<T>,
    ) -> Self {
        AnimationProperty {
            kind,
            field,
            get,
            set,
            convert,
        }
    }

    fn list<'s>(&self, style: &'s ComputedStyle) -> &'s AnimationList {
        match self.kind {
            AnimationListKind::Animations => style.animations(),
            AnimationListKind::Transitions => style.transitions(),
        }
    }

    fn list_mut<'s>(&self, style: &'s mut ComputedStyle) -> &'s mut AnimationList {
        match self.kind {
            AnimationListKind::Animations => style.animations_mut(),
            AnimationListKind::Transitions => style.transitions_mut(),
        }
    }

    fn write(&self, style: &mut ComputedStyle, values: Vec<T>) {
        let count = values.len();
        let list = self.list_mut(style);
        for (index, value) in values.into_iter().enumerate() {
            let animation = list.ensure(index);
            (self.set)(animation, value);
            animation.set_fields.insert(self.field);
        }
        for animation in list.0.iter_mut().skip(count) {
            animation.clear(self.field);
        }
    }
}

impl<T> ApplyProperty for AnimationProperty<T> {
    fn apply_inherit(&self, builder: &mut StyleBuilder) {
        let values = self
            .list(builder.inherited_style())
            .0
            .iter()
            .take_while(|animation| animation.is_set(self.field))
            .map(self.get)
            .collect();
        self.write(&mut builder.style, values);
    }

    fn apply_initial(&self, builder: &mut StyleBuilder) {
        let initial = (self.get)(&Animation::default());
        self.write(&mut builder.style, vec![initial]);
    }

    fn apply_value(&self, builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<()> {
        let items = value.as_slice();
        if items.is_empty() {
            return Err(InvalidValue::UnexpectedValue);
        }
        let values = items
            .iter()
            .map(|item| (self.convert)(builder, item))
            .collect::<ConversionResult<Vec<_>>>()?;
        self.write(&mut builder.style, values);
        Ok(())
    }
}

/// Converts a non-negative duration.
pub fn duration(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<f64> {
    match conversions::time(builder, value)? {
        duration if duration < 0. => Err(InvalidValue::OutOfRange),
        duration => Ok(duration),
    }
}

/// Converts an iteration count: `infinite` or a non-negative number.
pub fn iteration_count(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<IterationCount> {
    if value.is_ident("infinite") {
        return Ok(IterationCount::Infinite);
    }
    conversions::non_negative_number(builder, value).map(IterationCount::Number)
}

/// Converts an animation name; `none` is the empty name.
pub fn animation_name(_: &mut StyleBuilder, value: &CssValue) -> ConversionResult<String> {
    match *value {
        CssValue::Ident(ref ident) if ident.eq_ignore_ascii_case("none") => Ok(String::new()),
        CssValue::Ident(ref name) | CssValue::String(ref name) => Ok(name.clone()),
        _ => Err(InvalidValue::UnexpectedValue),
    }
}

/// Converts a timing function: a keyword, `cubic-bezier()` or `steps()`.
pub fn timing_function(_: &mut StyleBuilder, value: &CssValue) -> ConversionResult<TimingFunction> {
    match *value {
        CssValue::Ident(ref ident) => {
            TimingFunction::from_keyword(ident).ok_or(InvalidValue::UnknownKeyword)
        },
        CssValue::Function(ref name, ref args) if name.eq_ignore_ascii_case("cubic-bezier") => {
            let points = args
                .iter()
                .map(|arg| arg.as_number().ok_or(InvalidValue::UnexpectedValue))
                .collect::<ConversionResult<Vec<_>>>()?;
            let &[x1, y1, x2, y2] = points.as_slice() else {
                return Err(InvalidValue::UnexpectedValue);
            };
            if !(0. ..=1.).contains(&x1) || !(0. ..=1.).contains(&x2) {
                return Err(InvalidValue::OutOfRange);
            }
            Ok(TimingFunction::CubicBezier(x1, y1, x2, y2))
        },
        CssValue::Function(ref name, ref args) if name.eq_ignore_ascii_case("steps") => {
            let (steps, position) = match args[..] {
                [ref steps] => (steps, None),
                [ref steps, ref position] => (steps, Some(position)),
                _ => return Err(InvalidValue::UnexpectedValue),
            };
            let steps = steps.as_integer().ok_or(InvalidValue::UnexpectedValue)?;
            if steps < 1 {
                return Err(InvalidValue::OutOfRange);
            }
            let at_start = match position {
                None => false,
                Some(position) if position.is_ident("end") => false,
                Some(position) if position.is_ident("start") => true,
                Some(_) => return Err(InvalidValue::UnknownKeyword),
            };
            Ok(TimingFunction::Steps(steps as u32, at_start))
        },
        _ => Err(InvalidValue::UnexpectedValue),
    }
}

/// Converts a `-webkit-transition-property` entry.
pub fn transition_property(_: &mut StyleBuilder, value: &CssValue) -> ConversionResult<TransitionProperty> {
    let ident = value.as_ident().ok_or(InvalidValue::UnexpectedValue)?;
    if ident.eq_ignore_ascii_case("all") {
        return Ok(TransitionProperty::All);
    }
    if ident.eq_ignore_ascii_case("none") {
        return Ok(TransitionProperty::None);
    }
    Ok(match PropertyId::from_name(ident) {
        Some(id) => TransitionProperty::Property(id),
        None => TransitionProperty::Unknown(ident.to_owned()),
    })
}
