//! Two-tier search over the catalog

use serde::Serialize;
use tracing::trace;

use super::strategies::{bidirectional_contains, bounded_edit_distance};
use crate::breed::Breed;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::normalize::normalize;
use crate::validate;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Which pass produced a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "tier", content = "distance", rename_all = "snake_case")]
pub enum MatchTier {
    Substring,
    EditDistance(usize),
}

/// A ranked search result, scored outside the breed itself
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchHit<'a> {
    pub breed: &'a Breed,
    pub tier: MatchTier,
}

/// Search canonical names (alternate names are not consulted).
///
/// The edit-distance pass runs on rayon once the catalog holds at least
/// `parallel_threshold` breeds and the `parallel` feature is enabled.
pub fn search<'a>(
    catalog: &'a Catalog,
    term: &str,
    max_distance: usize,
    parallel_threshold: usize,
) -> Result<Vec<SearchHit<'a>>> {
    validate::non_empty("Search term", term)?;
    let term = normalize(term);

    let names: Vec<String> = catalog.iter().map(|b| normalize(&b.name)).collect();
    let in_substring: Vec<bool> = names
        .iter()
        .map(|name| bidirectional_contains(name, &term))
        .collect();

    let mut hits: Vec<SearchHit<'a>> = catalog
        .iter()
        .zip(&in_substring)
        .filter(|(_, hit)| **hit)
        .map(|(breed, _)| SearchHit {
            breed,
            tier: MatchTier::Substring,
        })
        .collect();

    let mut fuzzy = fuzzy_pass(
        catalog,
        &names,
        &in_substring,
        &term,
        max_distance,
        parallel_threshold,
    );
    // sort_by_key is stable: equal distances keep catalog order
    fuzzy.sort_by_key(|(_, dist)| *dist);

    hits.extend(fuzzy.into_iter().map(|(breed, dist)| SearchHit {
        breed,
        tier: MatchTier::EditDistance(dist),
    }));
    Ok(hits)
}

/// Edit-distance candidates in catalog order
#[cfg(feature = "parallel")]
fn fuzzy_pass<'a>(
    catalog: &'a Catalog,
    names: &[String],
    in_substring: &[bool],
    term: &str,
    max_distance: usize,
    parallel_threshold: usize,
) -> Vec<(&'a Breed, usize)> {
    if catalog.len() >= parallel_threshold {
        catalog
            .breeds()
            .par_iter()
            .enumerate()
            .filter(|(idx, _)| !in_substring[*idx])
            .filter_map(|(idx, breed)| {
                let dist = bounded_edit_distance(term, &names[idx], max_distance);
                trace!(name = %breed.name, ?dist, "edit distance");
                dist.map(|d| (breed, d))
            })
            .collect()
    } else {
        fuzzy_sequential(catalog, names, in_substring, term, max_distance)
    }
}

#[cfg(not(feature = "parallel"))]
fn fuzzy_pass<'a>(
    catalog: &'a Catalog,
    names: &[String],
    in_substring: &[bool],
    term: &str,
    max_distance: usize,
    _parallel_threshold: usize,
) -> Vec<(&'a Breed, usize)> {
    fuzzy_sequential(catalog, names, in_substring, term, max_distance)
}

fn fuzzy_sequential<'a>(
    catalog: &'a Catalog,
    names: &[String],
    in_substring: &[bool],
    term: &str,
    max_distance: usize,
) -> Vec<(&'a Breed, usize)> {
    catalog
        .iter()
        .enumerate()
        .filter(|(idx, _)| !in_substring[*idx])
        .filter_map(|(idx, breed)| {
            let dist = bounded_edit_distance(term, &names[idx], max_distance);
            trace!(name = %breed.name, ?dist, "edit distance");
            dist.map(|d| (breed, d))
        })
        .collect()
}
