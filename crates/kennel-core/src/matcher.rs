//! Single-breed resolution
//!
//! First match in catalog order wins. There is no scoring, so when several
//! breeds satisfy the predicate the earliest one is returned.

use crate::breed::Breed;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::fuzzy::strategies::bidirectional_contains;
use crate::normalize::normalize;
use crate::validate;

/// Field label used in errors for breed-name arguments
pub const BREED_NAME: &str = "Breed name";

/// Resolve `query` to at most one breed.
///
/// The comparison name is the alternate name for `lang` when one exists
/// (and `lang` is not "en"), otherwise the canonical name. With `fuzzy` the
/// match is bidirectional containment, without it normalized equality.
pub fn find_one<'a>(
    catalog: &'a Catalog,
    query: &str,
    fuzzy: bool,
    lang: &str,
    label: &str,
) -> Result<Option<&'a Breed>> {
    validate::non_empty(label, query)?;
    let query = normalize(query);

    Ok(catalog.iter().find(|breed| {
        let candidate = normalize(breed.name_for(lang));
        if fuzzy {
            bidirectional_contains(&candidate, &query)
        } else {
            candidate == query
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breed::BreedBuilder;
    use crate::error::Error;

    fn test_catalog() -> Catalog {
        Catalog::new(vec![
            BreedBuilder::new("Labrador Retriever")
                .alternate_name("fr", "Retriever du Labrador")
                .build(),
            BreedBuilder::new("Golden Retriever").build(),
            BreedBuilder::new("Pug").build(),
        ])
        .unwrap()
    }

    #[test]
    fn test_containment_short_query() {
        let catalog = test_catalog();
        let found = find_one(&catalog, "Labrador", true, "en", BREED_NAME).unwrap();
        assert_eq!(found.map(|b| b.name.as_str()), Some("Labrador Retriever"));
    }

    #[test]
    fn test_containment_long_query() {
        let catalog = test_catalog();
        let found = find_one(&catalog, "my pug puppy", true, "en", BREED_NAME).unwrap();
        assert_eq!(found.map(|b| b.name.as_str()), Some("Pug"));
    }

    #[test]
    fn test_first_match_wins() {
        let catalog = test_catalog();
        let found = find_one(&catalog, "retriever", true, "en", BREED_NAME).unwrap();
        assert_eq!(found.map(|b| b.name.as_str()), Some("Labrador Retriever"));
    }

    #[test]
    fn test_exact_mode() {
        let catalog = test_catalog();
        assert!(find_one(&catalog, "Labrador", false, "en", BREED_NAME)
            .unwrap()
            .is_none());
        let found = find_one(&catalog, "  golden RETRIEVER ", false, "en", BREED_NAME).unwrap();
        assert_eq!(found.map(|b| b.name.as_str()), Some("Golden Retriever"));
    }

    #[test]
    fn test_alternate_language() {
        let catalog = test_catalog();
        let found = find_one(&catalog, "retriever du labrador", false, "fr", BREED_NAME).unwrap();
        assert_eq!(found.map(|b| b.name.as_str()), Some("Labrador Retriever"));

        // No French name for Pug, canonical name is used instead
        let found = find_one(&catalog, "pug", false, "fr", BREED_NAME).unwrap();
        assert_eq!(found.map(|b| b.name.as_str()), Some("Pug"));
    }

    #[test]
    fn test_blank_query() {
        let catalog = test_catalog();
        assert_eq!(
            find_one(&catalog, "   ", true, "en", "Breed 1"),
            Err(Error::EmptyString {
                field: "Breed 1".to_string()
            })
        );
    }
}
