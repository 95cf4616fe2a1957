/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Animation and transition lists.

use bitflags::bitflags;

use crate::properties::PropertyId;
use crate::values::fill_unset_cyclically;

define_css_keyword_enum!(AnimationDirection:
    "normal" => Normal,
    "alternate" => Alternate,
    "reverse" => Reverse,
    "alternate-reverse" => AlternateReverse,
);

define_css_keyword_enum!(AnimationFillMode:
    "none" => None,
    "forwards" => Forwards,
    "backwards" => Backwards,
    "both" => Both,
);

define_css_keyword_enum!(AnimationPlayState:
    "running" => Running,
    "paused" => Paused,
);

/// An easing function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimingFunction {
    /// `linear`.
    Linear,
    /// A cubic Bézier curve through (0, 0), the two control points and (1, 1).
    CubicBezier(f32, f32, f32, f32),
    /// A step function with the given number of intervals; `true` when the
    /// change happens at the start of each interval.
    Steps(u32, bool),
}

impl TimingFunction {
    /// `ease`, the initial timing function.
    pub const EASE: TimingFunction = TimingFunction::CubicBezier(0.25, 0.1, 0.25, 1.0);

    /// Maps a timing function keyword.
    pub fn from_keyword(ident: &str) -> Option<TimingFunction> {
        let function = match ident.to_ascii_lowercase().as_str() {
            "linear" => TimingFunction::Linear,
            "ease" => TimingFunction::EASE,
            "ease-in" => TimingFunction::CubicBezier(0.42, 0.0, 1.0, 1.0),
            "ease-out" => TimingFunction::CubicBezier(0.0, 0.0, 0.58, 1.0),
            "ease-in-out" => TimingFunction::CubicBezier(0.42, 0.0, 0.58, 1.0),
            "step-start" => TimingFunction::Steps(1, true),
            "step-end" => TimingFunction::Steps(1, false),
            _ => return None,
        };
        Some(function)
    }
}

/// What a transition applies to.
#[derive(Clone, Debug, PartialEq)]
pub enum TransitionProperty {
    /// `all`.
    All,
    /// `none`.
    None,
    /// A single known property.
    Property(PropertyId),
    /// A property name this engine does not know about.
    Unknown(String),
}

/// The iteration count of an animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IterationCount {
    /// `infinite`.
    Infinite,
    /// A finite, non-negative number of iterations.
    Number(f32),
}

bitflags! {
    /// Which fields of an animation entry were explicitly given a value.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct AnimationFields: u16 {
        const DELAY = 1 << 0;
        const DIRECTION = 1 << 1;
        const DURATION = 1 << 2;
        const FILL_MODE = 1 << 3;
        const ITERATION_COUNT = 1 << 4;
        const NAME = 1 << 5;
        const PLAY_STATE = 1 << 6;
        const PROPERTY = 1 << 7;
        const TIMING_FUNCTION = 1 << 8;
    }
}

/// One entry of `-webkit-animation-*` or `-webkit-transition-*`.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    /// Delay, in seconds.
    pub delay: f64,
    #[allow(missing_docs)]
    pub direction: AnimationDirection,
    /// Duration, in seconds.
    pub duration: f64,
    #[allow(missing_docs)]
    pub fill_mode: AnimationFillMode,
    #[allow(missing_docs)]
    pub iteration_count: IterationCount,
    /// The `@keyframes` name; `none` is the empty string.
    pub name: String,
    #[allow(missing_docs)]
    pub play_state: AnimationPlayState,
    #[allow(missing_docs)]
    pub property: TransitionProperty,
    #[allow(missing_docs)]
    pub timing_function: TimingFunction,
    /// The fields that were given a value by the cascade.
    pub set_fields: AnimationFields,
}

impl Default for Animation {
    fn default() -> Self {
        Animation {
            delay: 0.,
            direction: AnimationDirection::Normal,
            duration: 0.,
            fill_mode: AnimationFillMode::None,
            iteration_count: IterationCount::Number(1.),
            name: String::new(),
            play_state: AnimationPlayState::Running,
            property: TransitionProperty::All,
            timing_function: TimingFunction::EASE,
            set_fields: AnimationFields::empty(),
        }
    }
}

impl Animation {
    /// Whether nothing has been set on this entry.
    pub fn is_empty(&self) -> bool {
        self.set_fields.is_empty()
    }

    /// Whether the given field has been explicitly set.
    pub fn is_set(&self, field: AnimationFields) -> bool {
        self.set_fields.contains(field)
    }

    /// Resets a field to its initial value and marks it as not set.
    pub fn clear(&mut self, field: AnimationFields) {
        copy_fields(&Animation::default(), self, field);
        self.set_fields.remove(field);
    }
}

fn copy_fields(from: &Animation, to: &mut Animation, fields: AnimationFields) {
    if fields.contains(AnimationFields::DELAY) {
        to.delay = from.delay;
    }
    if fields.contains(AnimationFields::DIRECTION) {
        to.direction = from.direction;
    }
    if fields.contains(AnimationFields::DURATION) {
        to.duration = from.duration;
    }
    if fields.contains(AnimationFields::FILL_MODE) {
        to.fill_mode = from.fill_mode;
    }
    if fields.contains(AnimationFields::ITERATION_COUNT) {
        to.iteration_count = from.iteration_count;
    }
    if fields.contains(AnimationFields::NAME) {
        to.name.clone_from(&from.name);
    }
    if fields.contains(AnimationFields::PLAY_STATE) {
        to.play_state = from.play_state;
    }
    if fields.contains(AnimationFields::PROPERTY) {
        to.property = from.property.clone();
    }
    if fields.contains(AnimationFields::TIMING_FUNCTION) {
        to.timing_function = from.timing_function;
    }
}

/// A list of animations or transitions. Empty means none.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationList(pub Vec<Animation>);

impl AnimationList {
    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Mutable access to the entry at `index`, appending defaults as needed.
    pub fn ensure(&mut self, index: usize) -> &mut Animation {
        if self.0.len() <= index {
            self.0.resize_with(index + 1, Animation::default);
        }
        &mut self.0[index]
    }

    /// Repeats the values of set fields over entries where they are unset.
    pub fn fill_unset_properties(&mut self) {
        for field in AnimationFields::all().iter() {
            fill_unset_cyclically(
                &mut self.0,
                |animation| animation.is_set(field),
                |from, to| copy_fields(from, to, field),
            );
        }
    }

    /// Drops the first empty entry and everything after it, then completes
    /// the remaining entries.
    pub fn adjust_animations(&mut self) {
        if let Some(first_empty) = self.0.iter().position(Animation::is_empty) {
            self.0.truncate(first_empty);
        }
        self.fill_unset_properties();
    }

    /// Same as `adjust_animations`, and additionally removes transitions
    /// that are overridden by a later entry for the same property.
    pub fn adjust_transitions(&mut self) {
        self.adjust_animations();
        let mut i = 0;
        while i < self.0.len() {
            let overridden = self.0[i + 1..]
                .iter()
                .any(|later| later.property == self.0[i].property);
            if overridden {
                self.0.remove(i);
            } else {
                i += 1;
            }
        }
    }
}
