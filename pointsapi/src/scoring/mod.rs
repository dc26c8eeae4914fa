use chrono::{Datelike, Timelike};

use crate::domain::prelude::*;

/// Computes the reward points for a validated receipt.
///
/// Seven independent rules, each contributing a non-negative number of
/// points; the total is their sum. The result depends only on the receipt,
/// so scoring the same receipt twice always yields the same total.
///
pub fn compute_points(receipt: &Receipt) -> u64 {
    let mut points = 0;

    // 1. One point for every word character in the retailer name.
    points += retailer_points(&receipt.retailer);

    // 2. 50 points if the total is a round dollar amount with no cents.
    if receipt.total.is_round_dollar() {
        points += 50;
    }

    // 3. 25 points if the total is a multiple of 0.25.
    if receipt.total.is_quarter_multiple() {
        points += 25;
    }

    // 4. 5 points for every two items on the receipt.
    points += 5 * (receipt.items.len() as u64 / 2);

    // 5. Description-length bonus per item.
    points += receipt.items.iter().map(description_points).sum::<u64>();

    // 6. 6 points if the day in the purchase date is odd.
    if receipt.purchase_date.day() % 2 == 1 {
        points += 6;
    }

    // 7. 10 points if the purchase was made between 2:00pm and 3:59pm.
    if (14..16).contains(&receipt.purchase_time.hour()) {
        points += 10;
    }

    points
}

fn retailer_points(retailer: &str) -> u64 {
    retailer
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .count() as u64
}

/// If the trimmed length of the item description is a multiple of 3, the
/// item earns its price multiplied by 0.2, rounded up to the nearest whole
/// point. A trimmed length of 0 counts as a multiple of 3.
fn description_points(item: &Item) -> u64 {
    if item.short_description.trim().chars().count() % 3 == 0 {
        // ceil(price * 0.2) on exact cents
        item.price.0.div_ceil(500)
    } else {
        0
    }
}
