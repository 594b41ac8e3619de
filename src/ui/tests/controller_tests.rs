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

//! Controller tests
//!
//! Tests for the MVC Controller logic: input coercion at the handler
//! boundary, rendered output, and the explicit toggle state.

use crate::core::boxes::HUE_RANGE;
use crate::core::types::Theme;
use crate::ui::Controller;

#[test]
fn test_profile_summary_renders_sentence() {
    let controller = Controller::new();

    let sentence = controller.profile_summary("Ada", "17", "7");
    assert_eq!(
        sentence,
        "Hi Ada! You are 17 (a teenager). Your favorite number 7 is odd. You cannot vote yet."
    );
}

#[test]
fn test_profile_summary_coerces_blank_fields() {
    let controller = Controller::new();

    let sentence = controller.profile_summary("  Ada  ", "", "not a number");
    assert!(sentence.starts_with("Hi Ada!"), "name should be trimmed");
    assert!(sentence.contains("You are 0 (a child)"));
    assert!(sentence.contains("number 0 is even"));
}

#[test]
fn test_cart_json_matches_demo_cart() {
    let controller = Controller::new();
    assert_eq!(controller.cart_json(), "[5.99,2.5,12.0,3.25]");
}

#[test]
fn test_cart_total_default_rate_wording() {
    let controller = Controller::new();

    let line = controller.cart_total("8");
    assert_eq!(line, "Total with 8% tax: $25.64");
}

#[test]
fn test_cart_total_blank_defaults_to_zero() {
    let controller = Controller::new();

    let line = controller.cart_total("");
    assert_eq!(line, "Total with 0% tax: $23.74");
}

#[test]
fn test_cart_total_negative_substitutes_zero() {
    let controller = Controller::new();

    let line = controller.cart_total("-5");
    assert_eq!(line, "Total with 0% tax: $23.74");
}

#[test]
fn test_title_case_passthrough() {
    let controller = Controller::new();
    assert_eq!(controller.title_case("hello WORLD"), "Hello World");
}

#[test]
fn test_countdown_defaults_to_five() {
    let controller = Controller::new();

    assert_eq!(
        controller.countdown_text(""),
        "5… 4… 3… 2… 1… 🚀 Blast off!"
    );
}

#[test]
fn test_countdown_zero() {
    let controller = Controller::new();
    assert_eq!(controller.countdown_text("0"), "🚀 Blast off!");
}

#[test]
fn test_generate_boxes_clamps_count() {
    let controller = Controller::new();

    assert_eq!(controller.generate_boxes("0").len(), 1);
    assert_eq!(controller.generate_boxes("100").len(), 30);
    assert_eq!(controller.generate_boxes("").len(), 6);
    assert_eq!(controller.box_count(), 6, "last plan should be cached");
}

#[test]
fn test_generate_boxes_hues_in_range() {
    let controller = Controller::new();

    for spec in controller.generate_boxes("30") {
        assert!(spec.hue < HUE_RANGE, "hue {} out of range", spec.hue);
    }
}

#[test]
fn test_theme_toggle_involution() {
    let controller = Controller::new();

    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(controller.toggle_theme(), Theme::Dark);
    assert_eq!(controller.toggle_theme(), Theme::Light);
    assert_eq!(controller.theme(), Theme::Light);
}

#[test]
fn test_section_toggle_involution() {
    let controller = Controller::new();

    assert!(controller.functions_section_visible());
    assert!(!controller.toggle_functions_section());
    assert!(controller.toggle_functions_section());
    assert!(controller.functions_section_visible());
}
