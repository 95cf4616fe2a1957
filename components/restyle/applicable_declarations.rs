/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Applicable declarations management.

use std::ops::Range;

use bitflags::bitflags;
use servo_arc::Arc;
use smallvec::SmallVec;

use crate::properties::PropertyDeclarationBlock;
use crate::selector_matching::StyleRelations;

/// List of applicable declarations. This is a transient structure that
/// shuttles declarations between selector matching and inserting into the
/// rule tree, and therefore we want to avoid heap-allocation where possible.
///
/// In measurements on wikipedia, we pretty much never have more than 8
/// applicable declarations, so we could consider making this 8 entries
/// instead of 16. However, it may be the case that the performance
/// characteristics are different on other sites, so we leave it at 16.
pub type ApplicableDeclarationList = SmallVec<[ApplicableDeclarationBlock; 16]>;

/// The origin of a style rule.
///
/// <https://drafts.csswg.org/css-cascade/#cascading-origins>
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Origin {
    /// The user-agent style sheet.
    UserAgent = 0,
    /// User style sheets.
    User = 1,
    /// Author style sheets, presentational hints and the `style` attribute.
    Author = 2,
}

bitflags! {
    /// Which link channels a matched declaration applies to.
    ///
    /// An element inside a visited link is matched twice, once treating every
    /// link as unvisited and once as visited. A declaration that matched in
    /// the first pass sets `LINK`, one that matched in the second sets
    /// `VISITED`.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct LinkMatch: u8 {
        /// Applies to the regular style.
        const LINK = 1 << 0;
        /// Applies to the visited-link style.
        const VISITED = 1 << 1;
        /// Applies to both.
        const ALL = Self::LINK.bits() | Self::VISITED.bits();
    }
}

/// A property declaration block together with the information the cascade
/// needs about the rule that contributed it.
#[derive(Clone, Debug)]
pub struct ApplicableDeclarationBlock {
    /// The declarations.
    pub block: Arc<PropertyDeclarationBlock>,
    /// The specificity of the selector that matched.
    pub specificity: u32,
    /// The source order of the rule within its rule set.
    pub source_order: u32,
    /// The link channels the declarations apply to.
    pub link_match: LinkMatch,
    /// Whether the block came from a region rule, so that only
    /// region-valid properties apply.
    pub is_in_region_rule: bool,
}

impl ApplicableDeclarationBlock {
    /// A block that applies to both link channels and was not found through
    /// a selector, such as the `style` attribute.
    pub fn from_declarations(block: Arc<PropertyDeclarationBlock>) -> Self {
        ApplicableDeclarationBlock {
            block,
            specificity: 0,
            source_order: 0,
            link_match: LinkMatch::ALL,
            is_in_region_rule: false,
        }
    }

    /// Whether two blocks would contribute the same declarations to a
    /// cascade. Blocks are compared by identity.
    pub fn same_declarations(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.block, &other.block) &&
            self.link_match == other.link_match &&
            self.is_in_region_rule == other.is_in_region_rule
    }
}

/// The output of matching one element: the ordered declarations, grouped by
/// origin.
#[derive(Clone, Debug)]
pub struct MatchResult {
    /// All matched blocks. UA blocks come first, then user blocks, then
    /// author blocks, each group in ascending cascade order.
    pub declarations: ApplicableDeclarationList,
    ranges: [Range<usize>; 3],
    /// Whether the result may be stored in the matched-properties cache.
    pub is_cacheable: bool,
    /// What the matched selectors depended on.
    pub relations: StyleRelations,
}

impl Default for MatchResult {
    fn default() -> Self {
        MatchResult::new()
    }
}

impl MatchResult {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        MatchResult {
            declarations: SmallVec::new(),
            ranges: [0..0, 0..0, 0..0],
            is_cacheable: true,
            relations: StyleRelations::empty(),
        }
    }

    /// Appends a block to the group of `origin`.
    ///
    /// Origins must be pushed in cascade order.
    pub fn push(&mut self, origin: Origin, block: ApplicableDeclarationBlock) {
        let index = self.declarations.len();
        let range = &mut self.ranges[origin as usize];
        if range.is_empty() {
            *range = index..index;
        }
        debug_assert_eq!(range.end, index, "declarations pushed out of origin order");
        range.end = index + 1;
        self.declarations.push(block);
    }

    /// The indices of the blocks of `origin`.
    pub fn range(&self, origin: Origin) -> Range<usize> {
        self.ranges[origin as usize].clone()
    }

    /// The blocks of `origin`.
    pub fn declarations_for(&self, origin: Origin) -> &[ApplicableDeclarationBlock] {
        &self.declarations[self.range(origin)]
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Whether two results contribute the same declarations, in the same
    /// order and with the same origin grouping.
    pub fn same_declarations(&self, other: &MatchResult) -> bool {
        self.ranges == other.ranges &&
            self.declarations.len() == other.declarations.len() &&
            self.declarations
                .iter()
                .zip(other.declarations.iter())
                .all(|(a, b)| a.same_declarations(b))
    }
}
