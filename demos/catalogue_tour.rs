//! A walk through the algorithm catalogue.
//!
//! Run with `RUST_LOG=cursorkit=debug cargo run --example catalogue_tour` to
//! see strategy decisions (scratch shortfalls, depth fallbacks, rotation
//! merges) as they happen.

use anyhow::{ensure, Context, Result};
use cursorkit::cursor::{span, BackInserter, ForwardList, ForwardOnly, ListCursor, Pos};
use cursorkit::random::{sample, seed_default_engine, shuffle_default, with_default_engine};
use cursorkit::sort::stable_sort_tuned;
use cursorkit::{
    by_key, counted, equal_range, inplace_merge, lower_bound, minmax_of, next_permutation,
    partial_sort, partition, rotate, set_intersection, sort, upper_bound, Less, Tuning,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    seed_default_engine(2024);

    // Sorting through every tier.
    let mut v = vec![5, 3, 3, 1, 4];
    let (first, last) = span(&v[..]);
    sort(&mut v[..], first, last, Less);
    info!(?v, "introsort over a slice");

    let mut list: ForwardList<i32> = [9, 2, 7, 2, 5].into_iter().collect();
    let begin = list.begin();
    sort(&mut list, begin, ListCursor::end(), Less);
    info!(list = ?list.to_vec(), "merge sort over a forward list");

    // Stable sort of records with scratch memory switched off.
    let mut people = vec![("ada", 36), ("bob", 29), ("cyd", 36), ("dee", 29)];
    let n = people.len();
    let tuning = Tuning::builder()
        .with_scratch_limit(Some(0))
        .build()
        .context("building tuning")?;
    stable_sort_tuned(
        &mut people[..],
        ForwardOnly(Pos(0)),
        ForwardOnly(Pos(n)),
        by_key(|p: &(&'static str, u32)| p.1),
        &tuning,
    );
    info!(?people, "stable sort by age without scratch");

    // Search.
    let sorted = [1, 2, 2, 2, 3];
    let lo = lower_bound(&sorted[..], Pos(0), Pos(5), &2, Less);
    let hi = upper_bound(&sorted[..], Pos(0), Pos(5), &2, Less);
    let range = equal_range(&sorted[..], Pos(0), Pos(5), &2, Less);
    ensure!(range.begin == lo && range.end == hi, "equal_range disagrees with the bounds");
    info!(lower = lo.index(), upper = hi.index(), "bounds of 2");

    // Rotation and permutations.
    let mut r = vec![1, 2, 3, 4, 5];
    rotate(&mut r[..], Pos(0), Pos(2), Pos(5));
    info!(?r, "rotated left by two");

    let mut p = vec![1, 2, 3];
    let mut orders = vec![p.clone()];
    while next_permutation(&mut p[..], Pos(0), Pos(3), Less) {
        orders.push(p.clone());
    }
    info!(count = orders.len(), ?orders, "permutations of [1, 2, 3]");

    // Partition a counted window and partially sort the rest.
    let mut w: Vec<i32> = (1..=12).collect();
    shuffle_default(&mut w[..], Pos(0), Pos(12));
    let (first, end) = counted(Pos(0), 6);
    let split = partition(&mut w[..], first, end, |x: &i32| x % 3 == 0);
    info!(?w, rest = split.count(), "moved multiples of three to the front of the first six");
    partial_sort(&mut w[..], Pos(0), Pos(3), Pos(12), Less);
    info!(smallest = ?&w[..3], "three smallest");

    // Merging.
    let mut runs = vec![1, 4, 9, 12, 2, 3, 10];
    inplace_merge(&mut runs[..], Pos(0), Pos(4), Pos(7), Less);
    let a = [1, 2, 2, 5, 8];
    let b = [2, 5, 5, 9];
    let mut common = Vec::new();
    set_intersection(
        &a[..],
        Pos(0),
        Pos(5),
        &b[..],
        Pos(0),
        Pos(4),
        &mut common,
        BackInserter::default(),
        Less,
    );
    info!(?runs, ?common, "merged runs and intersection");

    // Min/max and sampling.
    let extremes = minmax_of(&runs[..], Pos(0), Pos(7), Less).context("non-empty range")?;
    let mut picked = Vec::new();
    with_default_engine(|rng| {
        sample(&runs[..], Pos(0), Pos(7), &mut picked, BackInserter::default(), 3, rng);
    });
    info!(min = extremes.min, max = extremes.max, ?picked, "extremes and a sample of three");

    Ok(())
}
