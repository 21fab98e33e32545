//! Minimal unique suffix resolution.
//!
//! Two questions share one shape: "what is the shortest output subpath that
//! keeps colliding filenames apart?" and "what is the shortest variable name
//! that keeps colliding base identifiers apart?". Both are answered by
//! walking path-segment suffixes from the right until a candidate differs
//! from every peer in the collision group, so both run through the same
//! engine and differ only in how a suffix is rendered, how deep the search
//! starts, and what the trivial/fallback values are.

use crate::naming::{strip_extension, suffix_identifier, to_identifier, NamingError, Style};
use crate::reference::FileReference;
use std::collections::HashMap;

/// Rightmost `depth` segments of `parts`. Depths beyond the full length
/// clamp to the whole path, which is how a short peer competes at a deep
/// candidate depth.
fn suffix_at<'a>(parts: &'a [&'a str], depth: usize) -> &'a [&'a str] {
    &parts[parts.len().saturating_sub(depth)..]
}

/// For each input, the first (shallowest) rendered suffix of its path that
/// differs from every same-depth candidate of its collision-group peers.
///
/// - `keys` assigns each index to a collision group; singleton groups get
///   `trivial(i)` without any search.
/// - The search runs from `min_depth` up to the member's own segment count;
///   a member whose every depth collides gets `fallback(i)`.
///
/// Each member is judged against the full set of its peers, never against
/// partially-computed results, so the outcome is independent of processing
/// order and deterministic for a fixed input order.
fn minimal_unique_suffixes(
    paths: &[&str],
    keys: &[String],
    min_depth: usize,
    render: impl Fn(&[&str]) -> String,
    trivial: impl Fn(usize) -> String,
    fallback: impl Fn(usize) -> String,
) -> Vec<String> {
    debug_assert_eq!(paths.len(), keys.len());

    let segments: Vec<Vec<&str>> = paths.iter().map(|p| p.split('/').collect()).collect();

    let mut groups: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, key) in keys.iter().enumerate() {
        groups.entry(key.as_str()).or_default().push(i);
    }

    let mut result = Vec::with_capacity(paths.len());
    for (i, parts) in segments.iter().enumerate() {
        let peers = &groups[keys[i].as_str()];
        if peers.len() == 1 {
            result.push(trivial(i));
            continue;
        }

        let mut resolved = None;
        for depth in min_depth..=parts.len() {
            let candidate = render(suffix_at(parts, depth));
            let collides = peers
                .iter()
                .filter(|&&j| j != i)
                .any(|&j| render(suffix_at(&segments[j], depth)) == candidate);
            if !collides {
                resolved = Some(candidate);
                break;
            }
        }

        // No suffix of this path told it apart from its peers; accept the
        // fallback even though it may still collide (the orchestrator
        // decides whether that is fatal).
        result.push(resolved.unwrap_or_else(|| fallback(i)));
    }
    result
}

/// Compute per-reference the minimal relative output subpath that avoids
/// filename collisions once everything is flattened into one output tree.
///
/// A globally unique `short_name` stays bare (depth 1). Colliding names grow
/// leftward one directory segment at a time until distinct; if the whole
/// `source_path` is exhausted without success it is used verbatim.
pub fn resolve_unique_paths(refs: &[FileReference]) -> Vec<String> {
    let paths: Vec<&str> = refs.iter().map(|r| r.source_path.as_str()).collect();
    let keys: Vec<String> = refs.iter().map(|r| r.short_name.clone()).collect();

    minimal_unique_suffixes(
        &paths,
        &keys,
        1,
        |suffix| suffix.join("/"),
        |i| refs[i].short_name.clone(),
        |i| refs[i].source_path.clone(),
    )
}

/// Compute per-path the minimal synthesized variable name that avoids base
/// identifier collisions.
///
/// The base identifier comes from the extension-stripped final segment; a
/// collision is always resolved by pulling in at least one directory
/// segment (depth floor 2), since depth 1 is exactly the colliding base
/// case. Exhausted groups keep the base identifier.
pub fn resolve_unique_names(paths: &[String], style: Style) -> Result<Vec<String>, NamingError> {
    let bases = paths
        .iter()
        .map(|p| {
            let short = p.rsplit('/').next().unwrap_or(p.as_str());
            to_identifier(short, style)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let borrowed: Vec<&str> = paths.iter().map(String::as_str).collect();
    Ok(minimal_unique_suffixes(
        &borrowed,
        &bases,
        2,
        |suffix| {
            let mut parts = suffix.to_vec();
            if let Some(last) = parts.last_mut() {
                *last = strip_extension(*last);
            }
            suffix_identifier(&parts, style)
        },
        |i| bases[i].clone(),
        |i| bases[i].clone(),
    ))
}
