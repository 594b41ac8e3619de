// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Cart total calculation
//!
//! The demo price list is fixed at startup and immutable for the
//! program's lifetime; the total is a pure function of the list and a
//! fractional tax rate.

/// The fixed demo price list
pub const DEMO_CART: [f64; 4] = [5.99, 2.50, 12.00, 3.25];

/// Tax rate used when the caller does not supply one
pub const DEFAULT_TAX_RATE: f64 = 0.08;

/// Sum of `prices` with tax applied, rounded to two decimal places
///
/// `tax_rate` is fractional (0.08 for 8%). Deterministic, no side
/// effects.
///
/// # Example
///
/// ```
/// use basics_playground::core::cart::{calculate_total, DEMO_CART};
///
/// assert_eq!(calculate_total(&DEMO_CART, 0.08), 25.64);
/// ```
pub fn calculate_total(prices: &[f64], tax_rate: f64) -> f64 {
    let subtotal: f64 = prices.iter().sum();
    let total = subtotal * (1.0 + tax_rate);
    (total * 100.0).round() / 100.0
}
