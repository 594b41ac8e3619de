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

use crate::core::cart::{calculate_total, DEFAULT_TAX_RATE, DEMO_CART};

#[test]
fn test_demo_cart_at_default_rate() {
    // 23.74 subtotal, 8% tax
    let total = calculate_total(&DEMO_CART, DEFAULT_TAX_RATE);
    assert_eq!(total, 25.64);
}

#[test]
fn test_zero_rate_is_subtotal() {
    let total = calculate_total(&DEMO_CART, 0.0);
    assert_eq!(total, 23.74);
}

#[test]
fn test_empty_cart() {
    assert_eq!(calculate_total(&[], 0.08), 0.0);
}

#[test]
fn test_rounds_to_two_decimals() {
    let total = calculate_total(&[10.0], 0.333);
    assert_eq!(total, 13.33);
}

#[test]
fn test_single_item() {
    let total = calculate_total(&[100.0], 0.25);
    assert_eq!(total, 125.0);
}

#[test]
fn test_deterministic() {
    let a = calculate_total(&DEMO_CART, 0.08);
    let b = calculate_total(&DEMO_CART, 0.08);
    assert_eq!(a, b);
}
