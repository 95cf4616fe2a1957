/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The pseudo-classes and pseudo-elements supported by the style system,
//! and the glue that lets the `selectors` crate parse them.
//!
//! Parsed selectors are wrapped in [`Selector`], which also carries what the
//! cascade needs without walking the components again: the specificity in
//! the engine's packing, the pseudo-element, and the ancestor hashes the
//! bloom filter checks.

#![deny(missing_docs)]

use std::borrow::Borrow;
use std::cell::Cell;
use std::cmp;
use std::error::Error;
use std::fmt;

use cssparser::{
    CowRcStr, ParseError, Parser as CssParser, ParserInput, SourceLocation, ToCss,
    serialize_identifier,
};
use fnv::FnvHashMap;
use precomputed_hash::PrecomputedHash;
use selectors::parser::{
    Combinator, Component, ParseRelative, SelectorParseErrorKind,
    Selector as GenericSelector, SelectorList as GenericSelectorList,
};

use crate::bloom;
use crate::dom::ElementState;
use crate::values::keywords::PseudoId;

/// Why a selector list could not be built.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectorParseError {
    /// The text is not a valid selector, or names an unknown pseudo-element
    /// where one is not allowed.
    Syntax,
    /// A namespace prefix was never declared.
    Namespace,
}

impl fmt::Display for SelectorParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            SelectorParseError::Syntax => "invalid selector",
            SelectorParseError::Namespace => "undeclared namespace prefix",
        })
    }
}

impl Error for SelectorParseError {}

type ParseResult<T> = Result<T, SelectorParseError>;

/// The namespace declarations of a style sheet.
#[derive(Clone, Debug, Default)]
pub struct NamespaceMap {
    /// The default namespace, applied to type selectors without a prefix.
    pub default: Option<String>,
    /// Declared prefixes and their namespace URLs.
    pub prefixes: FnvHashMap<String, String>,
}

impl NamespaceMap {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        NamespaceMap::default()
    }
}

/// A name, identifier or attribute value inside a selector.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Atom(String);

impl Atom {
    #[allow(missing_docs)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'a> From<&'a str> for Atom {
    fn from(value: &'a str) -> Self {
        Atom(value.to_owned())
    }
}

impl Borrow<str> for Atom {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl ToCss for Atom {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        serialize_identifier(&self.0, dest)
    }
}

/// The bloom filter and the selectors' ancestor hashes agree on this hash.
impl PrecomputedHash for Atom {
    fn precomputed_hash(&self) -> u32 {
        bloom::hash_str(&self.0)
    }
}

/// The selector implementation of the style system.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RestyleSelectorImpl;

impl selectors::SelectorImpl for RestyleSelectorImpl {
    type ExtraMatchingData<'a> = ();
    type AttrValue = Atom;
    type Identifier = Atom;
    type LocalName = Atom;
    type NamespacePrefix = Atom;
    type NamespaceUrl = Atom;
    type BorrowedLocalName = str;
    type BorrowedNamespaceUrl = str;

    type NonTSPseudoClass = NonTSPseudoClass;
    type PseudoElement = PseudoElement;
}

/// The pseudo-classes that aren't tree-structural. The structural ones
/// (`:first-child`, `:nth-of-type()`, `:root`, `:empty`...) are built into
/// the `selectors` crate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(missing_docs)]
pub enum NonTSPseudoClass {
    AnyLink,
    Link,
    Visited,
    Hover,
    Active,
    Focus,
    Enabled,
    Disabled,
    Checked,
    Indeterminate,
}

const NON_TS_PSEUDO_CLASSES: [(&str, NonTSPseudoClass); 10] = [
    ("any-link", NonTSPseudoClass::AnyLink),
    ("link", NonTSPseudoClass::Link),
    ("visited", NonTSPseudoClass::Visited),
    ("hover", NonTSPseudoClass::Hover),
    ("active", NonTSPseudoClass::Active),
    ("focus", NonTSPseudoClass::Focus),
    ("enabled", NonTSPseudoClass::Enabled),
    ("disabled", NonTSPseudoClass::Disabled),
    ("checked", NonTSPseudoClass::Checked),
    ("indeterminate", NonTSPseudoClass::Indeterminate),
];

impl NonTSPseudoClass {
    fn from_name(name: &str) -> Option<Self> {
        NON_TS_PSEUDO_CLASSES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|&(_, pseudo_class)| pseudo_class)
    }

    fn name(self) -> &'static str {
        NON_TS_PSEUDO_CLASSES
            .iter()
            .find(|&&(_, pseudo_class)| pseudo_class == self)
            .map_or("", |&(name, _)| name)
    }

    /// The element state this pseudo-class matches, empty for the link
    /// pseudo-classes.
    pub fn state_flag(self) -> ElementState {
        match self {
            NonTSPseudoClass::AnyLink | NonTSPseudoClass::Link | NonTSPseudoClass::Visited => {
                ElementState::empty()
            },
            NonTSPseudoClass::Hover => ElementState::HOVER,
            NonTSPseudoClass::Active => ElementState::ACTIVE,
            NonTSPseudoClass::Focus => ElementState::FOCUS,
            NonTSPseudoClass::Enabled => ElementState::ENABLED,
            NonTSPseudoClass::Disabled => ElementState::DISABLED,
            NonTSPseudoClass::Checked => ElementState::CHECKED,
            NonTSPseudoClass::Indeterminate => ElementState::INDETERMINATE,
        }
    }
}

impl selectors::parser::NonTSPseudoClass for NonTSPseudoClass {
    type Impl = RestyleSelectorImpl;

    fn is_active_or_hover(&self) -> bool {
        matches!(*self, NonTSPseudoClass::Active | NonTSPseudoClass::Hover)
    }

    fn is_user_action_state(&self) -> bool {
        matches!(
            *self,
            NonTSPseudoClass::Active | NonTSPseudoClass::Hover | NonTSPseudoClass::Focus
        )
    }
}

impl ToCss for NonTSPseudoClass {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        dest.write_char(':')?;
        dest.write_str(self.name())
    }
}

/// The pseudo-element part of a selector.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PseudoElement {
    /// A supported pseudo-element.
    Known(PseudoId),
    /// A name the engine doesn't know. The selector never matches.
    Unknown(String),
}

impl selectors::parser::PseudoElement for PseudoElement {
    type Impl = RestyleSelectorImpl;
}

impl ToCss for PseudoElement {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        dest.write_str("::")?;
        match *self {
            PseudoElement::Known(pseudo) => dest.write_str(pseudo.name()),
            PseudoElement::Unknown(ref name) => serialize_identifier(name, dest),
        }
    }
}

/// The style system's selector parser.
struct SelectorParser<'a> {
    namespaces: &'a NamespaceMap,
    /// Whether the selectors come from a DOM query rather than a style
    /// sheet. Queries reject unknown pseudo-elements.
    for_query: bool,
    /// Set when a prefix without a declaration was looked up.
    undeclared_prefix: Cell<bool>,
}

impl<'a, 'i> selectors::parser::Parser<'i> for SelectorParser<'a> {
    type Impl = RestyleSelectorImpl;
    type Error = SelectorParseErrorKind<'i>;

    fn parse_is_and_where(&self) -> bool {
        true
    }

    fn parse_non_ts_pseudo_class(
        &self,
        location: SourceLocation,
        name: CowRcStr<'i>,
    ) -> Result<NonTSPseudoClass, ParseError<'i, Self::Error>> {
        match NonTSPseudoClass::from_name(&name) {
            Some(pseudo_class) => Ok(pseudo_class),
            None => Err(location.new_custom_error(
                SelectorParseErrorKind::UnsupportedPseudoClassOrElement(name),
            )),
        }
    }

    fn parse_pseudo_element(
        &self,
        location: SourceLocation,
        name: CowRcStr<'i>,
    ) -> Result<PseudoElement, ParseError<'i, Self::Error>> {
        if let Some(pseudo) = PseudoId::from_name(&name) {
            return Ok(PseudoElement::Known(pseudo));
        }
        if self.for_query {
            return Err(location.new_custom_error(
                SelectorParseErrorKind::UnsupportedPseudoClassOrElement(name),
            ));
        }
        Ok(PseudoElement::Unknown(name.to_ascii_lowercase()))
    }

    fn default_namespace(&self) -> Option<Atom> {
        self.namespaces.default.as_deref().map(Atom::from)
    }

    fn namespace_for_prefix(&self, prefix: &Atom) -> Option<Atom> {
        let url = self.namespaces.prefixes.get(prefix.as_str()).map(|url| Atom::from(&**url));
        if url.is_none() {
            self.undeclared_prefix.set(true);
        }
        url
    }
}

/// A comma-separated group of selectors.
#[derive(Clone, Debug)]
pub struct SelectorList {
    selectors: Vec<Selector>,
}

impl SelectorList {
    /// Parses a selector list as found in a style sheet.
    ///
    /// Selectors with an unknown pseudo-element parse fine and never match.
    pub fn parse(input: &str, namespaces: &NamespaceMap) -> ParseResult<SelectorList> {
        Self::parse_with(input, namespaces, false)
    }

    /// Parses a selector list for a DOM query such as `querySelector`, where
    /// an unknown pseudo-element is a syntax error.
    pub fn parse_for_query(input: &str, namespaces: &NamespaceMap) -> ParseResult<SelectorList> {
        Self::parse_with(input, namespaces, true)
    }

    fn parse_with(input: &str, namespaces: &NamespaceMap, for_query: bool) -> ParseResult<SelectorList> {
        let parser = SelectorParser {
            namespaces,
            for_query,
            undeclared_prefix: Cell::new(false),
        };
        let mut input = ParserInput::new(input);
        let result =
            GenericSelectorList::parse(&parser, &mut CssParser::new(&mut input), ParseRelative::No);
        match result {
            Ok(list) => Ok(SelectorList {
                selectors: list.slice().iter().map(Selector::new).collect(),
            }),
            Err(error) => {
                debug!("Invalid selector list: {:?}", error);
                if parser.undeclared_prefix.get() {
                    Err(SelectorParseError::Namespace)
                } else {
                    Err(SelectorParseError::Syntax)
                }
            },
        }
    }

    /// A list holding exactly the given selectors.
    pub fn from_vec(selectors: Vec<Selector>) -> Self {
        SelectorList { selectors }
    }

    #[allow(missing_docs)]
    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    /// Whether any selector of the list names an unknown pseudo-element.
    pub fn has_unknown_pseudo_elements(&self) -> bool {
        self.selectors.iter().any(|selector| {
            matches!(selector.pseudo_element, Some(PseudoElement::Unknown(..)))
        })
    }
}

/// One complex selector of a list.
#[derive(Clone, Debug)]
pub struct Selector {
    selector: GenericSelector<RestyleSelectorImpl>,
    /// The pseudo-element the selector targets, if any.
    pub pseudo_element: Option<PseudoElement>,
    /// The specificity, with ids weighing 0x10000, classes 0x100 and types 1.
    pub specificity: u32,
    /// Hashes of ids, classes and names that some ancestor must have for
    /// the selector to match, zero-terminated.
    pub(crate) ancestor_hashes: [u32; 4],
}

impl Selector {
    fn new(selector: &GenericSelector<RestyleSelectorImpl>) -> Self {
        Selector {
            pseudo_element: selector.pseudo_element().cloned(),
            specificity: repack_specificity(selector.specificity()),
            ancestor_hashes: compute_ancestor_hashes(selector),
            selector: selector.clone(),
        }
    }

    /// The selector as the `selectors` crate matches it.
    pub fn generic(&self) -> &GenericSelector<RestyleSelectorImpl> {
        &self.selector
    }

    /// The compound selector the subject element itself must match, not
    /// counting the pseudo-element.
    fn subject_compound(&self) -> &[Component<RestyleSelectorImpl>] {
        let components = self.selector.iter_raw_match_order().as_slice();
        let compound_end = |start: usize| {
            components[start..]
                .iter()
                .position(|component| matches!(*component, Component::Combinator(..)))
                .map_or(components.len(), |offset| start + offset)
        };
        let end = compound_end(0);
        match components.get(end) {
            Some(Component::Combinator(Combinator::PseudoElement)) => {
                &components[end + 1..compound_end(end + 1)]
            },
            _ => &components[..end],
        }
    }

    /// The first id selector of the rightmost compound.
    pub fn rightmost_id(&self) -> Option<&str> {
        self.subject_compound().iter().find_map(|component| match *component {
            Component::ID(ref id) => Some(id.as_str()),
            _ => None,
        })
    }

    /// The first class selector of the rightmost compound.
    pub fn rightmost_class(&self) -> Option<&str> {
        self.subject_compound().iter().find_map(|component| match *component {
            Component::Class(ref class) => Some(class.as_str()),
            _ => None,
        })
    }

    /// The lowercase type selector of the rightmost compound.
    pub fn rightmost_local_name(&self) -> Option<&str> {
        self.subject_compound().iter().find_map(|component| match *component {
            Component::LocalName(ref name) => Some(name.lower_name.as_str()),
            _ => None,
        })
    }
}

const ID_WEIGHT: u32 = 0x10000;
const CLASS_WEIGHT: u32 = 0x100;
const ELEMENT_WEIGHT: u32 = 1;
const MAX_COUNT: u32 = 0xff;

/// Converts the `selectors` crate packing (10 bits per category) into ours
/// (8 bits per category).
fn repack_specificity(specificity: u32) -> u32 {
    const MAX_10BIT: u32 = (1 << 10) - 1;
    let ids = specificity >> 20;
    let classes = (specificity >> 10) & MAX_10BIT;
    let elements = specificity & MAX_10BIT;

    cmp::min(ids, MAX_COUNT) * ID_WEIGHT +
        cmp::min(classes, MAX_COUNT) * CLASS_WEIGHT +
        cmp::min(elements, MAX_COUNT) * ELEMENT_WEIGHT
}

/// Collects the ancestor hashes of a selector: ids, classes and type names
/// of the compounds reached through descendant or child combinators.
fn compute_ancestor_hashes(selector: &GenericSelector<RestyleSelectorImpl>) -> [u32; 4] {
    let mut hashes = [0; 4];
    let mut count = 0;
    // The subject compound comes first in match order.
    let mut is_ancestor = false;
    for component in selector.iter_raw_match_order() {
        let hash = match *component {
            Component::Combinator(combinator) => {
                // Siblings share their parent, so only the compounds reached
                // by climbing are ancestors of the subject.
                is_ancestor = matches!(combinator, Combinator::Child | Combinator::Descendant);
                continue;
            },
            _ if !is_ancestor => continue,
            Component::ID(ref id) => id.precomputed_hash(),
            Component::Class(ref class) => class.precomputed_hash(),
            Component::LocalName(ref name) => name.lower_name.precomputed_hash(),
            _ => continue,
        };
        hashes[count] = hash;
        count += 1;
        if count == hashes.len() {
            break;
        }
    }
    hashes
}

/// Parses the `an+b` argument of the `:nth-*` pseudo-classes.
pub fn parse_nth(arguments: &str) -> ParseResult<(i32, i32)> {
    let mut input = ParserInput::new(arguments);
    let mut parser = CssParser::new(&mut input);
    parser
        .parse_entirely(|input| cssparser::parse_nth(input).map_err(ParseError::<()>::from))
        .map_err(|_| SelectorParseError::Syntax)
}
