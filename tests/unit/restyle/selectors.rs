/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use restyle::dom::ElementState;
use restyle::matching::RuleEnumerationFlags;
use restyle::properties::CssValue;
use restyle::selector_parser::{parse_nth, NamespaceMap, SelectorList, SelectorParseError};

use crate::dom::{TestDocument, TestElement};
use crate::{decl, resolver, stylesheet};

fn parse(selectors: &str) -> Result<SelectorList, SelectorParseError> {
    SelectorList::parse(selectors, &NamespaceMap::new())
}

/// Whether `selector` matches `element`.
fn matches(element: TestElement, selector: &'static str) -> bool {
    let mut resolver = resolver();
    resolver.set_author_rules(stylesheet(vec![(selector, vec![decl("margin-left", CssValue::px(1.))])]));
    !resolver
        .style_rules_for_element(element, None, RuleEnumerationFlags::ALL_BUT_EMPTY_RULES)
        .is_empty()
}

#[test]
fn invalid_selectors() {
    assert_eq!(parse("div >").unwrap_err(), SelectorParseError::Syntax);
    assert_eq!(parse("").unwrap_err(), SelectorParseError::Syntax);
    assert_eq!(parse("p, ").unwrap_err(), SelectorParseError::Syntax);
    assert_eq!(parse(":bogus-class").unwrap_err(), SelectorParseError::Syntax);
    assert_eq!(parse("foo|div").unwrap_err(), SelectorParseError::Namespace);

    let mut namespaces = NamespaceMap::new();
    namespaces
        .prefixes
        .insert("svg".to_owned(), "http://www.w3.org/2000/svg".to_owned());
    assert!(SelectorList::parse("svg|rect", &namespaces).is_ok());
}

#[test]
fn unknown_pseudo_elements_only_fail_queries() {
    let list = parse("p::bogus").unwrap();
    assert!(list.has_unknown_pseudo_elements());
    assert_eq!(
        SelectorList::parse_for_query("p::bogus", &NamespaceMap::new()).unwrap_err(),
        SelectorParseError::Syntax
    );
    assert!(SelectorList::parse_for_query("p::before", &NamespaceMap::new()).is_ok());
}

#[test]
fn nth_arguments() {
    assert_eq!(parse_nth("odd"), Ok((2, 1)));
    assert_eq!(parse_nth("even"), Ok((2, 0)));
    assert_eq!(parse_nth("2n+1"), Ok((2, 1)));
    assert_eq!(parse_nth(" -n + 3 "), Ok((-1, 3)));
    assert_eq!(parse_nth("n"), Ok((1, 0)));
    assert_eq!(parse_nth("5"), Ok((0, 5)));
    assert_eq!(parse_nth("3n2"), Err(SelectorParseError::Syntax));
    assert_eq!(parse_nth(""), Err(SelectorParseError::Syntax));
}

#[test]
fn specificity_counts_ids_classes_and_types() {
    let specificity = |selector| parse(selector).unwrap().selectors()[0].specificity;
    assert_eq!(specificity("*"), 0);
    assert_eq!(specificity("li"), 1);
    assert_eq!(specificity("ul li"), 2);
    assert_eq!(specificity("ul ol+li"), 3);
    assert_eq!(specificity("h1 + *[rel=up]"), 0x101);
    assert_eq!(specificity("ul ol li.red"), 0x103);
    assert_eq!(specificity("li.red.level"), 0x201);
    assert_eq!(specificity("#x34y"), 0x10000);
    assert_eq!(specificity("#s12:not(foo)"), 0x10001);
    assert_eq!(specificity("p::before"), 2);
}

#[test]
fn combinators() {
    let mut document = TestDocument::new("html");
    let body = document.append(TestDocument::ROOT, "body");
    let div = document.append(body, "div");
    let first = document.append(div, "p");
    let second = document.append(div, "p");
    let span = document.append(div, "span");
    let nested = document.append(span, "em");

    assert!(matches(document.element(first), "div > p"));
    assert!(matches(document.element(nested), "div em"));
    assert!(!matches(document.element(nested), "div > em"));
    assert!(matches(document.element(nested), "body div > span em"));
    assert!(matches(document.element(second), "p + p"));
    assert!(!matches(document.element(first), "p + p"));
    assert!(matches(document.element(span), "p ~ span"));
    assert!(!matches(document.element(span), "p + span + span"));
    assert!(matches(document.element(span), "div > p + p + span"));
}

#[test]
fn attributes_ids_and_classes() {
    let mut document = TestDocument::new("html");
    let element = document.append(TestDocument::ROOT, "a");
    document.set_id(element, "main");
    document.add_class(element, "one");
    document.add_class(element, "two");
    document.set_attribute(element, "lang", "en-US");
    document.set_attribute(element, "rel", "external nofollow");
    document.set_attribute(element, "href", "https://example.org/index.html");
    let element = document.element(element);

    assert!(matches(element, "#main"));
    assert!(!matches(element, "#other"));
    assert!(matches(element, ".one.two"));
    assert!(!matches(element, ".one.three"));
    assert!(matches(element, "A"));
    assert!(matches(element, "[lang]"));
    assert!(matches(element, "[lang|=en]"));
    assert!(!matches(element, "[lang|=e]"));
    assert!(matches(element, "[rel~=nofollow]"));
    assert!(!matches(element, "[rel=nofollow]"));
    assert!(matches(element, "[href^=https]"));
    assert!(matches(element, "[href$='.html']"));
    assert!(matches(element, "[href*=example]"));
    assert!(matches(element, "a:not(.three)"));
    assert!(!matches(element, "a:not(.one)"));
}

#[test]
fn structural_pseudo_classes() {
    let mut document = TestDocument::new("html");
    let list = document.append(TestDocument::ROOT, "ul");
    let items: Vec<usize> = (0..5).map(|_| document.append(list, "li")).collect();
    let trailer = document.append(list, "p");
    document.set_has_text(items[0]);

    assert!(matches(document.root(), ":root"));
    assert!(!matches(document.element(list), ":root"));
    assert!(matches(document.element(items[0]), "li:first-child"));
    assert!(matches(document.element(trailer), ":last-child"));
    assert!(matches(document.element(items[4]), "li:last-of-type"));
    assert!(matches(document.element(trailer), "p:only-of-type"));
    assert!(matches(document.element(items[2]), "li:nth-child(odd)"));
    assert!(!matches(document.element(items[1]), "li:nth-child(2n+1)"));
    assert!(matches(document.element(items[1]), "li:nth-last-child(5)"));
    assert!(matches(document.element(items[2]), "li:nth-of-type(-n+3)"));
    assert!(!matches(document.element(items[3]), "li:nth-of-type(-n+3)"));
    assert!(matches(document.element(items[1]), "li:empty"));
    assert!(!matches(document.element(items[0]), "li:empty"));
}

#[test]
fn state_pseudo_classes() {
    let mut document = TestDocument::new("html");
    let link = document.append(TestDocument::ROOT, "a");
    document.make_link(link, false);
    document.set_state(link, ElementState::HOVER | ElementState::FOCUS);
    let plain = document.append(TestDocument::ROOT, "a");

    assert!(matches(document.element(link), "a:link"));
    assert!(matches(document.element(link), ":any-link"));
    assert!(!matches(document.element(plain), ":link"));
    assert!(matches(document.element(link), "a:hover:focus"));
    assert!(!matches(document.element(link), "a:active"));
    assert!(!matches(document.element(plain), "a:hover"));
}

#[test]
fn rule_enumeration_respects_flags() {
    let mut document = TestDocument::new("html");
    let paragraph = document.append(TestDocument::ROOT, "p");
    document.add_class(paragraph, "intro");

    let mut resolver = resolver();
    resolver.set_user_agent_rules(stylesheet(vec![("p", vec![decl("margin-top", CssValue::px(1.))])]));
    resolver.set_author_rules(stylesheet(vec![
        (".intro", vec![decl("margin-left", CssValue::px(2.))]),
        ("p", vec![decl("margin-right", CssValue::px(3.))]),
        ("p.intro", vec![]),
        ("div", vec![decl("margin-left", CssValue::px(4.))]),
    ]));
    let element = document.element(paragraph);

    let all = resolver.style_rules_for_element(element, None, RuleEnumerationFlags::ALL_RULES);
    assert_eq!(all.len(), 4);
    // User agent rules come first, then author rules by specificity.
    assert_eq!(all[0].specificity(), 1);
    assert_eq!(all[1].specificity(), 1);
    assert_eq!(all[2].specificity(), 0x100);
    assert_eq!(all[3].specificity(), 0x101);
    assert!(all[3].declarations.is_empty());

    let non_empty = resolver.style_rules_for_element(element, None, RuleEnumerationFlags::ALL_BUT_EMPTY_RULES);
    assert_eq!(non_empty.len(), 3);

    let author = resolver.style_rules_for_element(element, None, RuleEnumerationFlags::AUTHOR_RULES);
    assert_eq!(author.len(), 2);

    let ua = resolver.style_rules_for_element(element, None, RuleEnumerationFlags::UA_AND_USER_RULES);
    assert_eq!(ua.len(), 1);
}
