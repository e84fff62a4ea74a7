use rayon::prelude::*;
use time::Date;

use crate::assembler::{get_content, Content};
use crate::catalog::ContentPools;
use crate::entity::EntityKey;
use crate::error::VariationError;

/// Builds content for many pages at once, e.g. every city and city×service pair of a static
/// build. Keys are independent, so they are assembled in parallel on the global rayon pool.
/// Results come back in the order of `keys`; one failing key does not affect the others.
pub fn assemble_batch(
    pools: &ContentPools,
    keys: &[EntityKey],
    reference: Date,
) -> Vec<Result<Content, VariationError>> {
    keys.par_iter()
        .map(|key| get_content(pools, key, reference))
        .collect()
}
