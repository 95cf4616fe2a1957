/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

#![cfg(test)]

use restyle::context::StyleSystemOptions;
use restyle::device::Device;
use restyle::error_reporting::NullReporter;
use restyle::properties::{
    CssValue, DeclaredValue, Importance, PropertyDeclaration, PropertyDeclarationBlock, PropertyId,
};
use restyle::rule_set::RuleSet;
use restyle::selector_parser::{NamespaceMap, SelectorList};
use restyle::values::CSSFloat;
use restyle::StyleResolver;
use servo_arc::Arc;

use crate::dom::TestElement;

mod bloom;
mod cascade;
mod dom;
mod matched_properties_cache;
mod pseudo_and_page;
mod restyle_damage;
mod selectors;
mod sharing;
mod style_adjuster;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn approx_eq(a: CSSFloat, b: CSSFloat) -> bool {
    (a - b).abs() < 1e-4
}

pub fn id(name: &str) -> PropertyId {
    PropertyId::from_name(name).unwrap_or_else(|| panic!("unknown property {}", name))
}

/// `property: value`.
pub fn decl(name: &str, value: CssValue) -> (PropertyDeclaration, Importance) {
    (PropertyDeclaration::new(id(name), value), Importance::Normal)
}

/// `property: value !important`.
pub fn important(name: &str, value: CssValue) -> (PropertyDeclaration, Importance) {
    (PropertyDeclaration::new(id(name), value), Importance::Important)
}

/// `property: inherit`, `initial` or `unset`.
pub fn keyword(name: &str, value: DeclaredValue) -> (PropertyDeclaration, Importance) {
    (PropertyDeclaration::with_declared(id(name), value), Importance::Normal)
}

pub fn block_from<I>(iterable: I) -> PropertyDeclarationBlock
where
    I: IntoIterator<Item = (PropertyDeclaration, Importance)>,
{
    let mut block = PropertyDeclarationBlock::new();
    for (declaration, importance) in iterable {
        block.push(declaration, importance);
    }
    block
}

/// A rule set made of `selectors { declarations }` rules.
pub fn stylesheet<I>(rules: I) -> Arc<RuleSet>
where
    I: IntoIterator<Item = (&'static str, Vec<(PropertyDeclaration, Importance)>)>,
{
    let mut rule_set = RuleSet::new();
    let namespaces = NamespaceMap::new();
    for (selectors, declarations) in rules {
        let selectors = SelectorList::parse(selectors, &namespaces).unwrap();
        rule_set.add_style_rule(&selectors, Arc::new(block_from(declarations)));
    }
    Arc::new(rule_set)
}

/// A resolver with every cache enabled and no error logging.
pub fn resolver<'a>() -> StyleResolver<TestElement<'a>> {
    init_logger();
    let mut resolver = StyleResolver::new(Device::default(), StyleSystemOptions::with_all_caches());
    resolver.set_error_reporter(Box::new(NullReporter));
    resolver
}
