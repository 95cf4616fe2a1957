/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Options and statistics shared by a style resolver.

use std::env;
use std::fmt;

/// Default number of matched-properties cache insertions between sweeps.
pub const DEFAULT_CACHE_SWEEP_INTERVAL: u32 = 100;

/// A set of style system options, read once from the environment.
#[derive(Clone, Debug)]
pub struct StyleSystemOptions {
    /// Whether the style sharing cache is disabled.
    pub disable_style_sharing_cache: bool,
    /// Whether the matched-properties cache is disabled.
    pub disable_matched_properties_cache: bool,
    /// Number of matched-properties cache insertions between two sweeps of
    /// entries nobody else references.
    pub cache_sweep_interval: u32,
    /// Whether to dump style statistics when the resolver goes away.
    pub dump_style_statistics: bool,
}

#[cfg(debug_assertions)]
fn get_env_bool(name: &str) -> bool {
    env::var_os(name).is_some_and(|value| !value.is_empty())
}

#[cfg(not(debug_assertions))]
fn get_env_bool(_name: &str) -> bool {
    // Disable these options in release builds.
    false
}

fn get_env_u32(name: &str, default: u32) -> u32 {
    match env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid value for {}: {:?}", name, value);
            default
        }),
        Err(..) => default,
    }
}

impl Default for StyleSystemOptions {
    fn default() -> Self {
        StyleSystemOptions {
            disable_style_sharing_cache: get_env_bool("DISABLE_STYLE_SHARING_CACHE"),
            disable_matched_properties_cache: get_env_bool("DISABLE_MATCHED_PROPERTIES_CACHE"),
            cache_sweep_interval: get_env_u32(
                "MATCHED_PROPERTIES_CACHE_SWEEP_INTERVAL",
                DEFAULT_CACHE_SWEEP_INTERVAL,
            )
            .max(1),
            dump_style_statistics: get_env_bool("DUMP_STYLE_STATISTICS"),
        }
    }
}

impl StyleSystemOptions {
    /// Options with every cache enabled, independent of the environment.
    pub fn with_all_caches() -> Self {
        StyleSystemOptions {
            disable_style_sharing_cache: false,
            disable_matched_properties_cache: false,
            cache_sweep_interval: DEFAULT_CACHE_SWEEP_INTERVAL,
            dump_style_statistics: false,
        }
    }
}

/// Counters describing the work a resolver did.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ResolverStatistics {
    /// Elements whose style was resolved.
    pub elements_styled: u32,
    /// Elements whose style came from the sharing cache.
    pub styles_shared: u32,
    /// Matched-properties cache lookups that reused a style entirely.
    pub cache_full_hits: u32,
    /// Lookups that reused the non-inherited data only.
    pub cache_partial_hits: u32,
    /// Lookups that found nothing usable.
    pub cache_misses: u32,
    /// Declarations ignored because their value did not fit the property.
    pub declarations_ignored: u32,
}

impl fmt::Display for ResolverStatistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "[RESTYLE] elements_styled,{}", self.elements_styled)?;
        writeln!(f, "[RESTYLE] styles_shared,{}", self.styles_shared)?;
        writeln!(f, "[RESTYLE] cache_full_hits,{}", self.cache_full_hits)?;
        writeln!(f, "[RESTYLE] cache_partial_hits,{}", self.cache_partial_hits)?;
        writeln!(f, "[RESTYLE] cache_misses,{}", self.cache_misses)?;
        write!(f, "[RESTYLE] declarations_ignored,{}", self.declarations_ignored)
    }
}
