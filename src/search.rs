use std::{fmt::Display, time::Instant};

use anyhow::{anyhow, bail};
use rand::Rng;

use crate::{
    distance::sum_of_distances,
    median::{median_rank, quick_select_with, quick_sort},
    merchant::Merchant,
    report::Report,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Slow,
    Fast,
}

impl Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchType::Slow => write!(f, "slow"),
            SearchType::Fast => write!(f, "fast"),
        }
    }
}

/// Finds the optimal store location with the given strategy.
///
/// Only the strategy call is timed; the distance sum is computed afterwards.
pub fn search<R: Rng>(
    merchants: &[Merchant],
    search_type: SearchType,
    rng: &mut R,
) -> anyhow::Result<Report> {
    if merchants.is_empty() {
        bail!("no merchants to search");
    }
    let k = median_rank(merchants.len());

    let start = Instant::now();
    let optimal = match search_type {
        SearchType::Slow => quick_sort(merchants.iter().collect())
            .get(k)
            .copied()
            .cloned(),
        SearchType::Fast => quick_select_with(merchants.iter().collect(), k, rng).cloned(),
    }
    .ok_or_else(|| anyhow!("{} search found nothing at rank {}", search_type, k))?;
    let elapsed = start.elapsed();

    tracing::info!(
        "{} search over {} merchants took {:?}",
        search_type,
        merchants.len(),
        elapsed
    );

    let total = sum_of_distances(merchants, optimal.location);
    Ok(Report {
        search_type,
        num_merchants: merchants.len(),
        elapsed,
        optimal,
        total,
    })
}
