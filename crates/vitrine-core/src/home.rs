//! Homepage list assembly.
//!
//! The storefront homepage shows two curated product lists, "featured" and
//! "best selling", each padded to [`DISPLAY_SLOTS`] items. New stores rarely
//! have six products in either list, so short lists are backfilled from the
//! newest-products list, which acts as a shared donor pool: an item drawn for
//! one list is consumed and cannot appear in the other.

use std::collections::VecDeque;

use crate::catalog::Product;

/// Number of display slots per homepage list.
pub const DISPLAY_SLOTS: usize = 6;

/// How many best-selling items the marquee shows.
pub const MARQUEE_COUNT: usize = 3;

/// How many products each upstream list is asked for. The two curated lists
/// match the six display slots; newest fetches twice that so it can donate
/// to both curated lists and still fill its own grid.
pub const FEATURED_FETCH_COUNT: u32 = 6;
pub const BEST_SELLING_FETCH_COUNT: u32 = 6;
pub const NEWEST_FETCH_COUNT: u32 = 12;

/// Ordered working copy of the newest-products list, drained without
/// replacement by successive [`backfill`] passes.
///
/// Kept as an explicit structure (rather than a mutable slice shared between
/// the two construction steps) so the cross-list exclusivity invariant can be
/// observed and tested in isolation.
#[derive(Debug, Clone)]
pub struct DonorQueue {
    items: VecDeque<Product>,
}

impl DonorQueue {
    /// Copies `newest` into a queue, preserving backend order.
    #[must_use]
    pub fn new(newest: &[Product]) -> Self {
        Self {
            items: newest.iter().cloned().collect(),
        }
    }

    /// Removes and returns the next donor, front first.
    pub fn pop(&mut self) -> Option<Product> {
        self.items.pop_front()
    }

    /// Donors still available.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.items.len()
    }
}

/// The two assembled homepage lists.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeLists {
    /// Padded featured list, ordered by price descending (see [`assemble_home`]
    /// for the exact tie-break behavior).
    pub featured: Vec<Product>,
    /// Padded best-selling list, in backfilled order.
    pub best_selling: Vec<Product>,
}

impl HomeLists {
    /// The best-selling items shown in the marquee (at most [`MARQUEE_COUNT`]).
    #[must_use]
    pub fn marquee(&self) -> &[Product] {
        let end = self.best_selling.len().min(MARQUEE_COUNT);
        &self.best_selling[..end]
    }
}

/// Fills `slots` positional slots from `curated`, drawing from `donors` for
/// every position `curated` does not cover.
///
/// Slot *i* resolves to `curated[i]` if present, otherwise to the next donor.
/// Slots that resolve to nothing (queue exhausted) are dropped, so the result
/// may be shorter than `slots`. Exhaustion is not an error.
#[must_use]
pub fn backfill(curated: &[Product], slots: usize, donors: &mut DonorQueue) -> Vec<Product> {
    (0..slots)
        .filter_map(|i| curated.get(i).cloned().or_else(|| donors.pop()))
        .collect()
}

/// Assembles the two homepage lists from the three fetched product lists.
///
/// Featured is backfilled first and then ordered by price: an ascending sort
/// followed by a reversal. This is not equivalent to a stable descending
/// sort — equal-priced items come out in *reversed* relative order. Downstream
/// consumers depend on that exact ordering, so it is preserved and pinned by
/// tests rather than corrected.
///
/// Best selling is backfilled second from the same queue, so items already
/// donated to featured are unavailable to it, and keeps its backfilled order.
#[must_use]
pub fn assemble_home(
    featured: &[Product],
    best_selling: &[Product],
    newest: &[Product],
) -> HomeLists {
    let mut donors = DonorQueue::new(newest);

    let mut featured_out = backfill(featured, DISPLAY_SLOTS, &mut donors);
    featured_out.sort_by(|a, b| a.price.value.cmp(&b.price.value));
    featured_out.reverse();

    let best_selling_out = backfill(best_selling, DISPLAY_SLOTS, &mut donors);

    HomeLists {
        featured: featured_out,
        best_selling: best_selling_out,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::catalog::Money;

    fn product(path: &str, price_cents: i64) -> Product {
        Product {
            path: path.to_string(),
            name: path.trim_start_matches('/').to_string(),
            price: Money {
                value: Decimal::new(price_cents, 2),
                currency_code: "USD".to_string(),
            },
            description: None,
            image: None,
        }
    }

    /// Twelve distinct donor products `/p1..=/p12` with increasing prices.
    fn twelve_newest() -> Vec<Product> {
        (1..=12)
            .map(|i| product(&format!("/p{i}"), i * 100))
            .collect()
    }

    fn paths(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.path.as_str()).collect()
    }

    #[test]
    fn fetch_counts_cover_both_display_lists() {
        // A fully-backfilled page draws at most one full list per side from
        // the donor pool, so newest must be fetched at double the slot count.
        assert_eq!(FEATURED_FETCH_COUNT as usize, DISPLAY_SLOTS);
        assert_eq!(BEST_SELLING_FETCH_COUNT as usize, DISPLAY_SLOTS);
        assert_eq!(NEWEST_FETCH_COUNT, FEATURED_FETCH_COUNT + BEST_SELLING_FETCH_COUNT);
    }

    #[test]
    fn outputs_never_exceed_display_slots() {
        let newest: Vec<Product> = (1..=30).map(|i| product(&format!("/n{i}"), i)).collect();
        let curated: Vec<Product> = (1..=10).map(|i| product(&format!("/c{i}"), i)).collect();
        let lists = assemble_home(&curated, &curated, &newest);
        assert_eq!(lists.featured.len(), DISPLAY_SLOTS);
        assert_eq!(lists.best_selling.len(), DISPLAY_SLOTS);
    }

    #[test]
    fn donor_items_are_consumed_exactly_once() {
        let lists = assemble_home(&[], &[], &twelve_newest());
        for p in &lists.featured {
            assert!(
                !lists.best_selling.iter().any(|q| q.path == p.path),
                "{} appears in both lists",
                p.path
            );
        }
    }

    #[test]
    fn full_curated_list_leaves_queue_untouched() {
        let featured: Vec<Product> = (1..=6).map(|i| product(&format!("/f{i}"), i * 10)).collect();
        let mut donors = DonorQueue::new(&twelve_newest());
        let out = backfill(&featured, DISPLAY_SLOTS, &mut donors);
        assert_eq!(out.len(), 6);
        assert_eq!(donors.remaining(), 12, "no donors should have been drawn");
    }

    #[test]
    fn partial_curated_list_draws_the_difference() {
        let featured: Vec<Product> = (1..=4).map(|i| product(&format!("/f{i}"), i * 10)).collect();
        let mut donors = DonorQueue::new(&twelve_newest());
        let out = backfill(&featured, DISPLAY_SLOTS, &mut donors);
        assert_eq!(out.len(), 6);
        assert_eq!(donors.remaining(), 10);
        assert_eq!(out[4].path, "/p1");
        assert_eq!(out[5].path, "/p2");
    }

    #[test]
    fn featured_sort_reverses_relative_order_of_price_ties() {
        // Prices [10, 10, 5]: ascending stable sort gives [5, 10a, 10b];
        // reversing gives [10b, 10a, 5] — the two equal-priced items swap
        // relative order versus their input order. A stable descending sort
        // would have kept [10a, 10b, 5]; this pins the difference.
        let featured = vec![
            product("/a", 1000),
            product("/b", 1000),
            product("/c", 500),
        ];
        let lists = assemble_home(&featured, &[], &[]);
        assert_eq!(paths(&lists.featured), vec!["/b", "/a", "/c"]);
    }

    #[test]
    fn empty_curated_lists_split_twelve_donors_six_and_six() {
        let lists = assemble_home(&[], &[], &twelve_newest());
        // Featured takes /p1../p6 and re-orders them by price descending.
        // All six have distinct prices, so the reversal is a plain descending
        // order here.
        assert_eq!(
            paths(&lists.featured),
            vec!["/p6", "/p5", "/p4", "/p3", "/p2", "/p1"]
        );
        // Best selling drains the remaining six in original donor order.
        assert_eq!(
            paths(&lists.best_selling),
            vec!["/p7", "/p8", "/p9", "/p10", "/p11", "/p12"]
        );
    }

    #[test]
    fn exhausted_queue_degrades_to_shorter_lists() {
        let newest: Vec<Product> = (1..=3).map(|i| product(&format!("/p{i}"), i * 100)).collect();
        let lists = assemble_home(&[], &[], &newest);
        assert_eq!(lists.featured.len(), 3, "first list drains the queue");
        assert!(
            lists.best_selling.is_empty(),
            "second list finds the queue empty"
        );
    }

    #[test]
    fn best_selling_keeps_backfilled_order_unsorted() {
        // Curated best sellers with deliberately unsorted prices.
        let best_selling = vec![
            product("/x", 300),
            product("/y", 100),
            product("/z", 200),
        ];
        let lists = assemble_home(&[], &best_selling, &twelve_newest());
        // Backend relevance order preserved, donors appended after.
        assert_eq!(
            paths(&lists.best_selling),
            vec!["/x", "/y", "/z", "/p7", "/p8", "/p9"]
        );
    }

    #[test]
    fn marquee_takes_first_three_best_sellers() {
        let lists = assemble_home(&[], &[], &twelve_newest());
        assert_eq!(paths(lists.marquee()), vec!["/p7", "/p8", "/p9"]);
    }

    #[test]
    fn marquee_is_shorter_when_best_selling_is() {
        let lists = HomeLists {
            featured: vec![],
            best_selling: vec![product("/only", 100)],
        };
        assert_eq!(lists.marquee().len(), 1);
    }
}
