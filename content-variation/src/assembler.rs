use serde::Serialize;
use time::Date;

use crate::catalog::{ContentPools, FacetPools, ReviewPools, FEATURE_COUNT, REVIEW_COUNT};
use crate::entity::EntityKey;
use crate::error::VariationError;
use crate::fragment::{CityServiceTemplate, CityTemplate};

/// Everything a page template needs from the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub hero_text: String,
    pub about_text: String,
    pub why_choose_text: String,
    pub features: Vec<String>,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub text: String,
    /// First name and last initial, "Sarah M."
    pub author: String,
    pub service: String,
    /// Month and year, "July 2026".
    pub date: String,
    pub months_ago: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSet {
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Content {
    Page(ContentRecord),
    Reviews(ReviewSet),
}

/// Builds the content for one page. `reference` is the month review dates count back
/// from; the engine never reads the clock itself.
pub fn get_content(
    pools: &ContentPools,
    key: &EntityKey,
    reference: Date,
) -> Result<Content, VariationError> {
    let identifier = key.identifier();
    match key {
        EntityKey::Location { city } => {
            assemble_location(pools, &identifier, city, reference).map(Content::Page)
        }
        EntityKey::LocationService { city, service } => {
            assemble_location_service(pools, &identifier, city, service, reference)
                .map(Content::Page)
        }
        EntityKey::Reviews { city } => {
            assemble_reviews(&pools.reviews, &identifier, city, None, reference)
                .map(|reviews| Content::Reviews(ReviewSet { reviews }))
        }
    }
}

fn assemble_location(
    pools: &ContentPools,
    id: &str,
    city: &str,
    reference: Date,
) -> Result<ContentRecord, VariationError> {
    let facets: &FacetPools<CityTemplate> = &pools.location;

    let hero_text = facets.hero.select(id, "hero")?.render(city);
    let about_text = facets.about.select(id, "about")?.render(city);
    let why_choose_text = facets.why_choose.select(id, "why")?.render(city);
    let features = facets
        .features
        .select_many(id, "features", FEATURE_COUNT)?
        .into_iter()
        .map(|fragment| fragment.render(city))
        .collect();
    let reviews = assemble_reviews(&pools.reviews, id, city, None, reference)?;

    Ok(ContentRecord {
        hero_text,
        about_text,
        why_choose_text,
        features,
        reviews,
    })
}

/// Same shape as a location page, drawn from the service pools. `id` is the composite
/// `city+service` identifier, so every service page of a city reads differently.
fn assemble_location_service(
    pools: &ContentPools,
    id: &str,
    city: &str,
    service: &str,
    reference: Date,
) -> Result<ContentRecord, VariationError> {
    let facets: &FacetPools<CityServiceTemplate> = &pools.service;

    let hero_text = facets.hero.select(id, "service-hero")?.render(city, service);
    let about_text = facets
        .about
        .select(id, "service-about")?
        .render(city, service);
    let why_choose_text = facets
        .why_choose
        .select(id, "service-why")?
        .render(city, service);
    let features = facets
        .features
        .select_many(id, "service-features", FEATURE_COUNT)?
        .into_iter()
        .map(|fragment| fragment.render(city, service))
        .collect();
    let reviews = assemble_reviews(&pools.reviews, id, city, Some(service), reference)?;

    Ok(ContentRecord {
        hero_text,
        about_text,
        why_choose_text,
        features,
        reviews,
    })
}

/// Draws [`REVIEW_COUNT`] distinct review templates for `identifier` and pairs each one with
/// its own salted reviewer name, initial, service and age. When `service` is given every
/// review mentions it instead of a drawn sub-service.
pub fn assemble_reviews(
    pools: &ReviewPools,
    identifier: &str,
    city: &str,
    service: Option<&str>,
    reference: Date,
) -> Result<Vec<Review>, VariationError> {
    let templates = pools
        .templates
        .select_many(identifier, "reviews", REVIEW_COUNT)?;

    let mut reviews = Vec::with_capacity(templates.len());
    for (slot, template) in templates.into_iter().enumerate() {
        let first_name = pools
            .first_names
            .select(identifier, &format!("review-name-{slot}"))?;
        let initial = pools
            .last_initials
            .select(identifier, &format!("review-initial-{slot}"))?;
        let mentioned = match service {
            Some(service) => service.to_lowercase(),
            None => pools
                .services
                .select(identifier, &format!("review-service-{slot}"))?
                .to_string(),
        };
        let months_ago = *pools
            .months_ago
            .select(identifier, &format!("review-month-{slot}"))?;

        reviews.push(Review {
            text: template.render(city, &mentioned),
            author: format!("{first_name} {initial}."),
            service: mentioned,
            date: month_label(reference, months_ago),
            months_ago,
        });
    }
    Ok(reviews)
}

/// "July 2026" for the month `months_ago` months before `reference`.
pub fn month_label(reference: Date, months_ago: u32) -> String {
    let total = i64::from(reference.year()) * 12 + i64::from(u8::from(reference.month()))
        - 1
        - i64::from(months_ago);
    let year = total.div_euclid(12);
    // rem_euclid(12) is in 0..12, so the month number is in 1..=12
    let month = time::Month::January.nth_next(total.rem_euclid(12) as u8);
    format!("{month} {year}")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use time::macros::date;

    use super::*;

    const REFERENCE: Date = date!(2026 - 03 - 15);

    fn page(pools: &ContentPools, key: EntityKey) -> ContentRecord {
        match get_content(pools, &key, REFERENCE).unwrap() {
            Content::Page(record) => record,
            Content::Reviews(_) => panic!("expected a page record"),
        }
    }

    #[test]
    fn month_labels_wrap_years() {
        assert_eq!(month_label(REFERENCE, 0), "March 2026");
        assert_eq!(month_label(REFERENCE, 2), "January 2026");
        assert_eq!(month_label(REFERENCE, 3), "December 2025");
        assert_eq!(month_label(REFERENCE, 11), "April 2025");
        assert_eq!(month_label(REFERENCE, 27), "December 2023");
    }

    #[test]
    fn location_record_shape() {
        let pools = ContentPools::standard().unwrap();
        let record = page(&pools, EntityKey::location("Kirkland"));

        assert_eq!(record.features.len(), FEATURE_COUNT);
        assert_eq!(record.reviews.len(), REVIEW_COUNT);
        assert!(!record.hero_text.is_empty());

        let features: HashSet<_> = record.features.iter().collect();
        assert_eq!(features.len(), FEATURE_COUNT);
    }

    #[test]
    fn location_record_is_reproducible() {
        let pools = ContentPools::standard().unwrap();
        let first = page(&pools, EntityKey::location("Bothell"));
        let again = page(&ContentPools::standard().unwrap(), EntityKey::location("Bothell"));
        assert_eq!(first, again);
    }

    #[test]
    fn review_set_matches_location_reviews() {
        let pools = ContentPools::standard().unwrap();
        let record = page(&pools, EntityKey::location("Redmond"));
        let content = get_content(&pools, &EntityKey::reviews("Redmond"), REFERENCE).unwrap();
        assert_eq!(
            content,
            Content::Reviews(ReviewSet {
                reviews: record.reviews
            })
        );
    }

    #[test]
    fn service_pages_mention_the_service() {
        let pools = ContentPools::standard().unwrap();
        let record = page(
            &pools,
            EntityKey::location_service("Renton", "Shower Refinishing"),
        );
        for review in &record.reviews {
            assert_eq!(review.service, "shower refinishing");
        }
    }

    #[test]
    fn reviews_render_author_and_date() {
        let pools = ContentPools::standard().unwrap();
        let reviews = assemble_reviews(&pools.reviews, "Kent", "Kent", None, REFERENCE).unwrap();
        for review in reviews {
            let (first, initial) = review.author.split_once(' ').unwrap();
            assert!(pools.reviews.first_names.iter().any(|name| *name == first));
            assert_eq!(initial.len(), 2);
            assert!(initial.ends_with('.'));
            assert!(review.months_ago < 12);
            assert_eq!(review.date, month_label(REFERENCE, review.months_ago));
            assert!(pools.reviews.services.iter().any(|s| *s == review.service));
        }
    }

    #[test]
    fn serializes_with_page_field_names() {
        let pools = ContentPools::standard().unwrap();
        let content = get_content(&pools, &EntityKey::location("Everett"), REFERENCE).unwrap();
        let json = serde_json::to_value(&content).unwrap();
        for field in ["heroText", "aboutText", "whyChooseText", "features", "reviews"] {
            assert!(json.get(field).is_some(), "missing {field}");
        }
        assert!(json["reviews"][0].get("monthsAgo").is_some());
    }
}
