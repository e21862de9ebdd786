//! User sampling and the deterministic customer cap.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use crate::error::RestrictResult;
use crate::types::{TransactionTable, UserId};

use super::check_cap;

/// Seed used by [`sample_users`] when the caller does not supply one, so
/// repeated runs over the same table pick the same users.
pub const DEFAULT_SAMPLE_SEED: u64 = 42;

/// Keep a uniformly random subset of exactly `min(count, distinct_users)`
/// users, dropping all rows of unsampled users.
///
/// Sampling is seeded (`seed`, falling back to [`DEFAULT_SAMPLE_SEED`]) so a
/// restriction run is reproducible. Returns `InvalidParameter` if `count`
/// is zero.
pub fn sample_users(
    table: &TransactionTable,
    count: usize,
    seed: Option<u64>,
) -> RestrictResult<TransactionTable> {
    check_cap("sample size", count)?;

    let users = table.user_ids();
    if count >= users.len() {
        return Ok(table.clone());
    }

    let mut rng = StdRng::seed_from_u64(seed.unwrap_or(DEFAULT_SAMPLE_SEED));
    let chosen: HashSet<UserId> = index::sample(&mut rng, users.len(), count)
        .into_iter()
        .map(|i| users[i])
        .collect();

    Ok(table.filter_rows(|row| chosen.contains(&row.user_id)))
}

/// Keep the first `count` users in first-appearance order.
///
/// The deterministic variant of [`sample_users`] for callers that want
/// reproducibility without randomness. Returns `InvalidParameter` if
/// `count` is zero.
pub fn cap_customers(table: &TransactionTable, count: usize) -> RestrictResult<TransactionTable> {
    check_cap("customer cap", count)?;

    let keep: HashSet<UserId> = table.user_ids().into_iter().take(count).collect();
    Ok(table.filter_rows(|row| keep.contains(&row.user_id)))
}
