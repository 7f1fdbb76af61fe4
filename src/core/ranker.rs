use crate::core::{
    distance::{distance_between, ensure_finite},
    error::RankError,
    filters::{matches_name, normalize_filter},
};
use crate::models::{GeoPoint, Located, Named, RankedResult};
use std::cmp::Ordering;

/// Fraction of candidates kept by default (the closest half)
pub const DEFAULT_FRACTION: f64 = 0.5;

/// Number of results kept out of `count` candidates
///
/// `max(1, floor(fraction * count))` for a non-empty set, zero otherwise.
#[inline]
pub fn selection_count(fraction: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let kept = (fraction * count as f64).floor() as usize;
    kept.clamp(1, count)
}

/// Ascending order with NaN after every other value
#[inline]
fn compare_distance(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

fn validate_fraction(fraction: f64) -> Result<(), RankError> {
    if fraction > 0.0 && fraction <= 1.0 {
        Ok(())
    } else {
        Err(RankError::InvalidInput(format!(
            "fraction must be in (0, 1], got {}",
            fraction
        )))
    }
}

/// Rank candidates by great-circle distance from `query`
///
/// # Pipeline
/// 1. Distance from `query` to every candidate (full scan)
/// 2. Optional case-insensitive name filter
/// 3. Stable ascending sort by distance
/// 4. Truncation to [`selection_count`] of the filtered set
///
/// Candidates with equal distances keep their input order. A candidate with
/// non-finite stored coordinates gets a NaN distance and sorts after every
/// finite distance.
///
/// # Errors
/// `RankError::InvalidInput` when `fraction` is outside (0, 1] or the query
/// coordinates are not finite.
pub fn rank<'a, C>(
    query: GeoPoint,
    candidates: &'a [C],
    name_filter: Option<&str>,
    fraction: f64,
) -> Result<Vec<RankedResult<'a, C>>, RankError>
where
    C: Named + Located,
{
    validate_fraction(fraction)?;
    ensure_finite(query)?;

    let needle = normalize_filter(name_filter);

    let mut ranked: Vec<RankedResult<'a, C>> = candidates
        .iter()
        .map(|candidate| RankedResult {
            candidate,
            distance_miles: distance_between(query, candidate.point()),
        })
        .filter(|result| match &needle {
            Some(needle) => matches_name(result.candidate, needle),
            None => true,
        })
        .collect();

    let filtered = ranked.len();

    // sort_by is stable, so equal distances keep input order
    ranked.sort_by(|a, b| compare_distance(a.distance_miles, b.distance_miles));
    ranked.truncate(selection_count(fraction, filtered));

    tracing::debug!(
        "Ranked {} candidates ({} after filter), kept {}",
        candidates.len(),
        filtered,
        ranked.len()
    );

    Ok(ranked)
}

/// Ranker configured with a selection fraction
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    fraction: f64,
}

impl Ranker {
    pub fn new(fraction: f64) -> Result<Self, RankError> {
        validate_fraction(fraction)?;
        Ok(Self { fraction })
    }

    /// Ranker keeping the closest half
    pub fn closest_half() -> Self {
        Self {
            fraction: DEFAULT_FRACTION,
        }
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Rank with the configured fraction. See [`rank`].
    pub fn rank<'a, C>(
        &self,
        query: GeoPoint,
        candidates: &'a [C],
        name_filter: Option<&str>,
    ) -> Result<Vec<RankedResult<'a, C>>, RankError>
    where
        C: Named + Located,
    {
        rank(query, candidates, name_filter, self.fraction)
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::closest_half()
    }
}
