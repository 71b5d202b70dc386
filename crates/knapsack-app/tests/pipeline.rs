// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use knapsack_app::{config::KnapsackConfig, pipeline, report};
use knapsack_core::num::{fixed::Cents, ratio::DensityRatio};
use knapsack_greedy::{rank::RankedCatalog, select::GreedySelector};
use knapsack_model::item::Item;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn render_scenario(items: &[Item], capacity: u32) -> String {
    let catalog = RankedCatalog::rank(items);
    let outcome = GreedySelector::new(capacity).select_silent(&catalog);

    let mut buf = Vec::new();
    report::write_catalog(&mut buf, &catalog).expect("vec write");
    report::write_contents(&mut buf, outcome.knapsack()).expect("vec write");
    String::from_utf8(buf).expect("report is UTF-8")
}

#[test]
fn test_three_item_report() {
    let items = [
        Item::new(1, Cents::new(500)),
        Item::new(2, Cents::new(300)),
        Item::new(1, Cents::new(100)),
    ];

    let text = render_scenario(&items, 2);

    assert_eq!(
        text,
        "Available items for knapsack:\n\
         -----------------------------\n\
         Weight: 1 Value: 5.00 Ratio:5.00\n\
         Weight: 2 Value: 3.00 Ratio:1.50\n\
         Weight: 1 Value: 1.00 Ratio:1.00\n\
         \n\
         \n\
         Optimized items in knapsack:\n\
         ----------------------------\n\
         Weight: 1 Value: 5.00\n\
         Weight: 1 Value: 1.00\n\
         Total weight: 2\n\
         Total value: 6.00\n"
    );
}

#[test]
fn test_colliding_items_are_both_listed() {
    let items = [Item::new(2, Cents::new(300)), Item::new(2, Cents::new(300))];

    let text = render_scenario(&items, 4);

    let listed = text
        .lines()
        .filter(|l| *l == "Weight: 2 Value: 3.00 Ratio:1.50")
        .count();
    assert_eq!(listed, 2);
    assert!(text.ends_with("Total weight: 4\nTotal value: 6.00\n"));
}

#[test]
fn test_seeded_default_shaped_run() {
    let config = KnapsackConfig::builder()
        .item_count(10_000)
        .build()
        .expect("valid configuration");
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut buf = Vec::new();

    let outcome = pipeline::run(&config, &mut rng, &mut buf).expect("vec write");
    let text = String::from_utf8(buf).expect("report is UTF-8");

    // Capacity 1 can only hold a single weight-1 item.
    let knapsack = outcome.knapsack();
    assert!(knapsack.len() <= 1);
    assert!(knapsack.total_weight() <= 1);
    for item in knapsack.items() {
        assert_eq!(item.weight(), 1);
    }

    // Ratios in the listing never increase.
    let ratios: Vec<&str> = text
        .lines()
        .filter_map(|l| l.split_once(" Ratio:").map(|(_, r)| r))
        .collect();
    assert_eq!(ratios.len(), 10_000);

    let parsed: Vec<DensityRatio> = ratios
        .iter()
        .map(|r| {
            let (whole, frac) = r.split_once('.').expect("ratio has two decimals");
            let whole: u64 = whole.parse().expect("whole part");
            let frac: u64 = frac.parse().expect("fraction part");
            DensityRatio::from_hundredths(whole * 100 + frac)
        })
        .collect();
    assert!(parsed.windows(2).all(|w| w[0] >= w[1]));

    assert!(text.contains("\nTotal execution time: "));
}
