//! The fixed fragment pools the assembler draws from.
//!
//! Pools are plain data compiled into the binary. [`ContentPools::standard`] turns them into
//! validated [`Pool`]s once at startup; after that they are only ever read.

pub mod location;
pub mod reviews;
pub mod service;

use crate::error::VariationError;
use crate::fragment::{CityServiceTemplate, CityTemplate, Fragment};
use crate::pool::Pool;

/// Number of feature bullets on every page.
pub const FEATURE_COUNT: usize = 4;
/// Number of reviews on every page.
pub const REVIEW_COUNT: usize = 5;

/// The four copy facets of one page kind.
#[derive(Clone)]
pub struct FacetPools<T> {
    pub hero: Pool<Fragment<T>>,
    pub about: Pool<Fragment<T>>,
    pub why_choose: Pool<Fragment<T>>,
    pub features: Pool<Fragment<T>>,
}

impl<T> std::fmt::Debug for FacetPools<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacetPools")
            .field("hero", &self.hero)
            .field("about", &self.about)
            .field("why_choose", &self.why_choose)
            .field("features", &self.features)
            .finish()
    }
}

impl<T> FacetPools<T> {
    fn validate(&self) -> Result<(), VariationError> {
        self.features.require(FEATURE_COUNT)
    }
}

#[derive(Debug, Clone)]
pub struct ReviewPools {
    pub templates: Pool<Fragment<CityServiceTemplate>>,
    pub first_names: Pool<&'static str>,
    pub last_initials: Pool<char>,
    pub services: Pool<&'static str>,
    pub months_ago: Pool<u32>,
}

impl ReviewPools {
    fn validate(&self) -> Result<(), VariationError> {
        self.templates.require(REVIEW_COUNT)
    }
}

#[derive(Debug, Clone)]
pub struct ContentPools {
    pub location: FacetPools<CityTemplate>,
    pub service: FacetPools<CityServiceTemplate>,
    pub reviews: ReviewPools,
}

impl ContentPools {
    /// Registers a set of pools, failing if any multi-slot facet is too small for the
    /// number of distinct items a page needs from it.
    pub fn new(
        location: FacetPools<CityTemplate>,
        service: FacetPools<CityServiceTemplate>,
        reviews: ReviewPools,
    ) -> Result<ContentPools, VariationError> {
        location.validate()?;
        service.validate()?;
        reviews.validate()?;
        Ok(ContentPools {
            location,
            service,
            reviews,
        })
    }

    /// The pools shipped with the site.
    pub fn standard() -> Result<ContentPools, VariationError> {
        let location = FacetPools {
            hero: Pool::new("location.hero", location::HERO.to_vec())?,
            about: Pool::new("location.about", location::ABOUT.to_vec())?,
            why_choose: Pool::new("location.why_choose", location::WHY_CHOOSE.to_vec())?,
            features: Pool::new("location.features", location::FEATURES.to_vec())?,
        };
        let service = FacetPools {
            hero: Pool::new("service.hero", service::HERO.to_vec())?,
            about: Pool::new("service.about", service::ABOUT.to_vec())?,
            why_choose: Pool::new("service.why_choose", service::WHY_CHOOSE.to_vec())?,
            features: Pool::new("service.features", service::FEATURES.to_vec())?,
        };
        let reviews = ReviewPools {
            templates: Pool::new("reviews.templates", reviews::TEMPLATES.to_vec())?,
            first_names: Pool::new("reviews.first_names", reviews::FIRST_NAMES.to_vec())?,
            last_initials: Pool::new("reviews.last_initials", reviews::LAST_INITIALS.to_vec())?,
            services: Pool::new("reviews.services", reviews::SUB_SERVICES.to_vec())?,
            months_ago: Pool::new("reviews.months_ago", reviews::MONTHS_AGO.to_vec())?,
        };

        let pools = ContentPools::new(location, service, reviews)?;
        tracing::debug!(
            location_hero = pools.location.hero.len(),
            service_hero = pools.service.hero.len(),
            review_templates = pools.reviews.templates.len(),
            "registered content pools"
        );
        Ok(pools)
    }
}
