/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Applying matched declarations to a style, in cascade order.
//!
//! The winning declaration of every property is found first, separately
//! for the regular and the visited-link channel. Winners are then applied
//! phase by phase: the high-priority properties, a font update, the line
//! height, and everything else.

use smallvec::SmallVec;

use crate::applicable_declarations::{LinkMatch, MatchResult, Origin};
use crate::computed_style::ComputedStyle;
use crate::font::font_size_for_keyword;
use crate::properties::{CascadePhase, DeclaredValue, PropertyDeclaration, PropertyId, StyleBuilder};
use crate::values::CSSFloat;

/// Which properties a cascade applies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CascadeMode {
    /// Every matched property.
    All,
    /// Only inherited properties, on top of non-inherited data copied from a
    /// matched-properties cache entry.
    InheritedOnly,
}

/// One declaration in cascade order.
struct CascadeEntry<'a> {
    declaration: &'a PropertyDeclaration,
    link_match: LinkMatch,
}

/// Flattens the matched blocks into their declarations, in the order in
/// which later entries win: normal declarations of every origin, then
/// author `!important`, then user `!important`.
///
/// The user agent has no important tier: its `!important` declarations
/// are treated as normal ones.
fn cascade_order(matched: &MatchResult) -> Vec<CascadeEntry<'_>> {
    let mut entries = Vec::new();
    let mut push_block = |origin: Origin, important: bool| {
        for block in matched.declarations_for(origin) {
            for (declaration, importance) in block.block.declarations() {
                let wanted = match origin {
                    Origin::UserAgent => !important,
                    _ => importance.important() == important,
                };
                if !wanted {
                    continue;
                }
                if block.is_in_region_rule && !declaration.id.is_valid_for_region() {
                    continue;
                }
                entries.push(CascadeEntry {
                    declaration,
                    link_match: block.link_match,
                });
            }
        }
    };

    push_block(Origin::UserAgent, false);
    push_block(Origin::User, false);
    push_block(Origin::Author, false);
    push_block(Origin::Author, true);
    push_block(Origin::User, true);
    entries
}

/// The index of the winning entry of each property, per link channel.
struct Winners {
    regular: Vec<Option<usize>>,
    visited: Vec<Option<usize>>,
}

impl Winners {
    fn compute(entries: &[CascadeEntry], mode: CascadeMode) -> Self {
        let mut winners = Winners {
            regular: vec![None; PropertyId::count()],
            visited: vec![None; PropertyId::count()],
        };
        for (index, entry) in entries.iter().enumerate() {
            let id = entry.declaration.id;
            if mode == CascadeMode::InheritedOnly && !id.is_inherited() {
                continue;
            }
            if entry.link_match.contains(LinkMatch::LINK) {
                winners.regular[id as usize] = Some(index);
            }
            if entry.link_match.contains(LinkMatch::VISITED) && id.is_valid_for_visited_link() {
                winners.visited[id as usize] = Some(index);
            }
        }
        winners
    }
}

/// A winning declaration to apply, with the link channels it applies to.
#[derive(Clone, Copy)]
struct Application {
    index: usize,
    rank: u8,
    channels: LinkMatch,
}

/// Properties the rest of the high-priority phase depends on.
fn is_writing_property(id: PropertyId) -> bool {
    matches!(
        id,
        PropertyId::Zoom |
            PropertyId::WebkitTextSizeAdjust |
            PropertyId::ColorScheme |
            PropertyId::WebkitWritingMode |
            PropertyId::WebkitTextOrientation |
            PropertyId::Direction
    )
}

fn applications_for_phase(phase: CascadePhase, winners: &Winners) -> SmallVec<[Application; 32]> {
    let mut applications = SmallVec::<[Application; 32]>::new();
    for id in PropertyId::all().filter(|id| id.phase() == phase) {
        let rank = if is_writing_property(id) { 0 } else { 1 };
        let regular = winners.regular[id as usize];
        let visited = winners.visited[id as usize];
        match (regular, visited) {
            (Some(regular), Some(visited)) if regular == visited => {
                applications.push(Application {
                    index: regular,
                    rank,
                    channels: LinkMatch::ALL,
                });
            },
            _ => {
                if let Some(index) = regular {
                    applications.push(Application {
                        index,
                        rank,
                        channels: LinkMatch::LINK,
                    });
                }
                if let Some(index) = visited {
                    applications.push(Application {
                        index,
                        rank,
                        channels: LinkMatch::VISITED,
                    });
                }
            },
        }
    }
    applications.sort_by_key(|application| (application.rank, application.index));
    applications
}

/// Applies the declarations of `matched` to the style held by `builder`.
///
/// `builder.style` is expected to already inherit from the parent style.
/// The font is brought up to date once the high-priority properties are
/// applied.
pub fn cascade(builder: &mut StyleBuilder, matched: &MatchResult, mode: CascadeMode) {
    let entries = cascade_order(matched);
    let winners = Winners::compute(&entries, mode);

    for phase in CascadePhase::ALL {
        if phase == CascadePhase::LineHeight {
            update_font(builder);
            apply_line_height(builder, &entries, &winners);
            continue;
        }

        for application in applications_for_phase(phase, &winners) {
            let declaration = entries[application.index].declaration;
            apply_in_channels(builder, declaration, application.channels);
        }
    }

    if builder.font_dirty {
        update_font(builder);
    }
}

fn apply_in_channels(builder: &mut StyleBuilder, declaration: &PropertyDeclaration, channels: LinkMatch) {
    builder.apply_to_regular_style = channels.contains(LinkMatch::LINK);
    builder.apply_to_visited_link_style = channels.contains(LinkMatch::VISITED);
    apply_declared_value(builder, declaration.id, &declaration.value);
    builder.apply_to_regular_style = true;
    builder.apply_to_visited_link_style = false;
}

/// Applies `line-height`, or the line height of the `font` shorthand when
/// the shorthand comes later in the cascade.
fn apply_line_height(builder: &mut StyleBuilder, entries: &[CascadeEntry], winners: &Winners) {
    let line_height = winners.regular[PropertyId::LineHeight as usize];
    let font = winners.regular[PropertyId::Font as usize];
    let deferred = builder.deferred_line_height.take();

    let from_font_shorthand = match (deferred.as_ref(), line_height, font) {
        (None, _, _) => false,
        (Some(_), None, _) => true,
        (Some(_), Some(line_height), Some(font)) => font > line_height,
        (Some(_), Some(_), None) => false,
    };

    if from_font_shorthand {
        if let Some(value) = deferred {
            apply_declared_value(builder, PropertyId::LineHeight, &value);
        }
        return;
    }

    if let Some(index) = line_height {
        apply_in_channels(builder, entries[index].declaration, LinkMatch::ALL);
    }
}

/// Applies one declared value, resolving the CSS-wide keywords.
pub fn apply_declared_value(builder: &mut StyleBuilder, id: PropertyId, value: &DeclaredValue) {
    let handler = builder.table.get(id);
    match *value {
        DeclaredValue::Value(ref specified) => {
            if let Err(error) = handler.apply_value(builder, specified) {
                trace!("Ignoring {}: {:?} ({})", id.name(), specified, error);
                builder.report_invalid(id, specified, error);
            }
        },
        DeclaredValue::Initial => handler.apply_initial(builder),
        DeclaredValue::Inherit => apply_inherit(builder, id),
        DeclaredValue::Unset => {
            if id.is_inherited() {
                apply_inherit(builder, id)
            } else {
                handler.apply_initial(builder)
            }
        },
    }
}

fn apply_inherit(builder: &mut StyleBuilder, id: PropertyId) {
    let handler = builder.table.get(id);
    if builder.parent_style.is_none() {
        // Nothing to inherit from at the root.
        handler.apply_initial(builder);
        return;
    }
    if !id.is_inherited() {
        builder.style.set_explicit_inheritance(true);
    }
    handler.apply_inherit(builder);
}

/// Runs the font fixups and rebuilds the font if any font property changed.
pub fn update_font(builder: &mut StyleBuilder) {
    if !builder.font_dirty {
        return;
    }
    if let Some(parent) = builder.parent_style {
        check_for_generic_family_change(builder, parent);
        check_for_zoom_change(builder, parent);
    }
    builder.style.update_font(builder.font_selector);
    builder.font_dirty = false;
}

/// When the family switches between monospace and anything else, sizes
/// derived from the default size switch between the two default sizes.
fn check_for_generic_family_change(builder: &mut StyleBuilder, parent: &ComputedStyle) {
    let child = builder.style.font_description();
    let parent_font = parent.font_description();
    if child.is_absolute_size || child.use_fixed_default_size() == parent_font.use_fixed_default_size() {
        return;
    }

    let mut description = child.clone();
    let size = if description.keyword_size != 0 {
        font_size_for_keyword(
            builder.device,
            description.keyword_size,
            description.use_fixed_default_size(),
        )
    } else {
        let device = builder.device;
        let fixed_scale_factor = if device.default_fixed_font_size != 0 && device.default_font_size != 0 {
            device.default_fixed_font_size as CSSFloat / device.default_font_size as CSSFloat
        } else {
            1.
        };
        if parent_font.use_fixed_default_size() {
            description.specified_size / fixed_scale_factor
        } else {
            description.specified_size * fixed_scale_factor
        }
    };

    builder.set_font_size(&mut description, size);
    builder.set_font_description(description);
}

/// Recomputes the font size when the zoom differs from the parent's, since
/// the computed size was derived under the parent's zoom.
fn check_for_zoom_change(builder: &mut StyleBuilder, parent: &ComputedStyle) {
    if builder.style.effective_zoom() == parent.effective_zoom() {
        return;
    }
    let mut description = builder.style.font_description().clone();
    let size = description.specified_size;
    builder.set_font_size(&mut description, size);
    builder.set_font_description(description);
}
