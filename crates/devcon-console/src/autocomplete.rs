//! Incremental-prefix autocomplete over the command registry.
//!
//! `suggest` is called on every edit of the input line, so after warm-up it
//! must not rescan the registry. Candidates are indexed by a fixed-length
//! name prefix: the first lookup for a given prefix scans the registry once
//! and caches the matches grouped by the substring following the prefix;
//! later keystrokes only filter that group. Entries are never evicted — the
//! registry is immutable for the process lifetime, so the cache stays a
//! pure derived index.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::registry::{CommandDescriptor, CommandRegistry};

/// Fragments shorter than this produce no suggestions; the candidate set
/// would be too large to be useful and the scan is skipped entirely.
pub const MIN_PREFIX_LEN: usize = 2;

/// Descriptors matching one cache prefix, grouped by the substring that
/// follows the prefix's first occurrence in the (lower-cased) name. Each
/// entry keeps its registry enumeration index for deterministic ranking.
type PrefixBucket<'r> = Vec<(String, Vec<(usize, &'r CommandDescriptor)>)>;

/// Ranked autocomplete suggestions with a lazily-built prefix cache.
pub struct AutocompleteEngine<'r> {
    registry: &'r CommandRegistry,
    cache: RefCell<HashMap<String, PrefixBucket<'r>>>,
}

impl<'r> AutocompleteEngine<'r> {
    pub fn new(registry: &'r CommandRegistry) -> Self {
        Self {
            registry,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Suggest descriptors for a partial input line.
    ///
    /// Only the command-name fragment (everything before the first
    /// whitespace) matters. Matching is case-insensitive and substring
    /// based; descriptors whose name starts with the fragment rank before
    /// the remaining matches, and ties keep registration order.
    pub fn suggest(&self, partial: &str) -> Vec<&'r CommandDescriptor> {
        let frag = partial
            .split(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim()
            .to_lowercase();
        if frag.chars().count() < MIN_PREFIX_LEN {
            return Vec::new();
        }

        let prefix: String = frag.chars().take(MIN_PREFIX_LEN).collect();
        let remainder: String = frag.chars().skip(MIN_PREFIX_LEN).collect();

        let mut cache = self.cache.borrow_mut();
        let bucket = cache
            .entry(prefix.clone())
            .or_insert_with(|| build_bucket(self.registry, &prefix));

        let mut hits: Vec<(usize, &'r CommandDescriptor)> = Vec::new();
        for (suffix, entries) in bucket.iter() {
            if suffix.starts_with(&remainder) {
                hits.extend(entries.iter().copied());
            }
        }

        hits.sort_by_key(|&(index, desc)| {
            (!desc.name().to_lowercase().starts_with(&frag), index)
        });
        hits.into_iter().map(|(_, desc)| desc).collect()
    }
}

/// Scan the whole registry once for `prefix` and group the matches by the
/// substring following the prefix's first occurrence in each name.
fn build_bucket<'r>(registry: &'r CommandRegistry, prefix: &str) -> PrefixBucket<'r> {
    let mut groups: PrefixBucket<'r> = Vec::new();
    for (index, desc) in registry.iter().enumerate() {
        let lower = desc.name().to_lowercase();
        let Some(pos) = lower.find(prefix) else {
            continue;
        };
        let suffix = lower[pos + prefix.len()..].to_string();
        match groups.iter_mut().find(|(s, _)| *s == suffix) {
            Some((_, entries)) => entries.push((index, desc)),
            None => groups.push((suffix, vec![(index, desc)])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use devcon_types::error::Result;

    use super::*;
    use crate::registry::{CommandOutput, CommandSpec};
    use crate::value::{ArgKind, ArgValue};

    fn noop() -> impl Fn(&[ArgValue]) -> Result<CommandOutput> {
        |_args| Ok(CommandOutput::None)
    }

    fn registry_of(names: &[&str]) -> CommandRegistry {
        CommandRegistry::build(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    // Distinct arities keep same-named entries as overloads
                    // instead of overwriting each other.
                    let mut spec = CommandSpec::new(*name, noop());
                    for p in 0..i {
                        spec = spec.param(format!("p{p}"), ArgKind::Int);
                    }
                    spec
                })
                .collect::<Vec<_>>(),
        )
    }

    /// Reference implementation: full scan, no cache.
    fn brute_force<'r>(registry: &'r CommandRegistry, partial: &str) -> Vec<&'r CommandDescriptor> {
        let frag = partial
            .split(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim()
            .to_lowercase();
        if frag.chars().count() < MIN_PREFIX_LEN {
            return Vec::new();
        }
        let prefix: String = frag.chars().take(MIN_PREFIX_LEN).collect();
        let remainder: String = frag.chars().skip(MIN_PREFIX_LEN).collect();

        let mut hits: Vec<(usize, &CommandDescriptor)> = registry
            .iter()
            .enumerate()
            .filter(|(_, desc)| {
                let lower = desc.name().to_lowercase();
                match lower.find(&prefix) {
                    Some(pos) => lower[pos + prefix.len()..].starts_with(&remainder),
                    None => false,
                }
            })
            .collect();
        hits.sort_by_key(|&(index, desc)| {
            (!desc.name().to_lowercase().starts_with(&frag), index)
        });
        hits.into_iter().map(|(_, desc)| desc).collect()
    }

    fn names<'r>(descs: &[&'r CommandDescriptor]) -> Vec<&'r str> {
        descs.iter().map(|d| d.name()).collect()
    }

    #[test]
    fn below_threshold_is_empty() {
        let reg = registry_of(&["alpha", "anchor", "beta"]);
        let engine = AutocompleteEngine::new(&reg);
        assert!(engine.suggest("").is_empty());
        assert!(engine.suggest("a").is_empty());
    }

    #[test]
    fn leading_whitespace_yields_no_fragment() {
        let reg = registry_of(&["alpha"]);
        let engine = AutocompleteEngine::new(&reg);
        assert!(engine.suggest("  al").is_empty());
    }

    #[test]
    fn min_length_fragment_returns_all_containing() {
        let reg = registry_of(&["Echo", "EchoEnum", "TechDemo", "SpawnCube"]);
        let engine = AutocompleteEngine::new(&reg);
        // "ec" occurs in Echo, EchoEnum (prefix) and TechDemo (substring).
        assert_eq!(
            names(&engine.suggest("ec")),
            vec!["Echo", "EchoEnum", "TechDemo"]
        );
    }

    #[test]
    fn exact_prefix_ranks_before_substring() {
        let reg = registry_of(&["TechDemo", "Echo", "EchoEnum"]);
        let engine = AutocompleteEngine::new(&reg);
        // TechDemo registered first but is only a substring match.
        assert_eq!(
            names(&engine.suggest("ec")),
            vec!["Echo", "EchoEnum", "TechDemo"]
        );
    }

    #[test]
    fn longer_fragment_filters_by_remainder() {
        let reg = registry_of(&["Echo", "EchoEnum", "TechDemo", "SpawnCube"]);
        let engine = AutocompleteEngine::new(&reg);
        assert_eq!(names(&engine.suggest("echoe")), vec!["EchoEnum"]);
        assert!(engine.suggest("echoz").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let reg = registry_of(&["SetCubeColor", "SetCubePosition"]);
        let engine = AutocompleteEngine::new(&reg);
        assert_eq!(
            names(&engine.suggest("SETCUBE")),
            vec!["SetCubeColor", "SetCubePosition"]
        );
        assert_eq!(
            names(&engine.suggest("setcubec")),
            vec!["SetCubeColor"]
        );
    }

    #[test]
    fn fragment_stops_at_first_whitespace() {
        let reg = registry_of(&["Echo", "EchoEnum"]);
        let engine = AutocompleteEngine::new(&reg);
        assert_eq!(names(&engine.suggest("echo 123")), vec!["Echo", "EchoEnum"]);
    }

    #[test]
    fn remainder_follows_first_prefix_occurrence_only() {
        let reg = registry_of(&["xaxab"]);
        let engine = AutocompleteEngine::new(&reg);
        // First "xa" is at position 0; the suffix there is "xab", which does
        // not start with remainder "b". The later occurrence does not count.
        assert!(engine.suggest("xab").is_empty());
        assert_eq!(names(&engine.suggest("xax")), vec!["xaxab"]);
    }

    #[test]
    fn cache_builds_lazily_per_prefix() {
        let reg = registry_of(&["alpha", "anchor", "beta"]);
        let engine = AutocompleteEngine::new(&reg);
        assert_eq!(engine.cache.borrow().len(), 0);
        engine.suggest("al");
        assert_eq!(engine.cache.borrow().len(), 1);
        engine.suggest("alp");
        engine.suggest("alph");
        assert_eq!(engine.cache.borrow().len(), 1);
        engine.suggest("be");
        assert_eq!(engine.cache.borrow().len(), 2);
    }

    #[test]
    fn repeated_calls_are_stable() {
        let reg = registry_of(&["Echo", "EchoEnum", "TechDemo"]);
        let engine = AutocompleteEngine::new(&reg);
        let first = names(&engine.suggest("ec"));
        let second = names(&engine.suggest("ec"));
        assert_eq!(first, second);
    }

    #[test]
    fn overloads_appear_individually() {
        let reg = CommandRegistry::build([
            CommandSpec::new("Add", noop())
                .param("a", ArgKind::Int)
                .param("b", ArgKind::Int),
            CommandSpec::new("Add", noop())
                .param("a", ArgKind::Int)
                .param("b", ArgKind::Int)
                .param("c", ArgKind::Int),
        ]);
        let engine = AutocompleteEngine::new(&reg);
        let hits = engine.suggest("ad");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].arity(), 2);
        assert_eq!(hits[1].arity(), 3);
    }

    mod props {
        use proptest::prelude::*;

        use super::*;

        fn arb_names() -> impl Strategy<Value = Vec<String>> {
            prop::collection::vec("[a-d]{2,6}", 0..12)
        }

        proptest! {
            #[test]
            fn suggest_equals_brute_force_scan(
                cmd_names in arb_names(),
                partial in "[a-d]{0,5}",
            ) {
                let refs: Vec<&str> = cmd_names.iter().map(String::as_str).collect();
                let reg = registry_of(&refs);
                let engine = AutocompleteEngine::new(&reg);
                let expected = names(&brute_force(&reg, &partial));
                // Twice: the second call answers from the warm cache and
                // must not change the observable result.
                prop_assert_eq!(names(&engine.suggest(&partial)), expected.clone());
                prop_assert_eq!(names(&engine.suggest(&partial)), expected);
            }
        }
    }
}
