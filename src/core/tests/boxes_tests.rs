// Copyright 2025 bakri (tidynest@proton.me)
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

use crate::core::boxes::{clamp_count, plan_boxes, HUE_RANGE, MAX_BOX_COUNT, MIN_BOX_COUNT};

/// Helper: hue source cycling through fixed values
fn fixed_hues(values: Vec<u16>) -> impl FnMut() -> u16 {
    let mut iter = values.into_iter().cycle();
    move || iter.next().unwrap_or(0)
}

#[test]
fn test_clamp_lower_bound() {
    assert_eq!(clamp_count(0), 1);
    assert_eq!(clamp_count(-10), 1);
    assert_eq!(clamp_count(MIN_BOX_COUNT), 1);
}

#[test]
fn test_clamp_upper_bound() {
    assert_eq!(clamp_count(100), 30);
    assert_eq!(clamp_count(MAX_BOX_COUNT), 30);
    assert_eq!(clamp_count(MAX_BOX_COUNT + 1), 30);
}

#[test]
fn test_clamp_passthrough_in_range() {
    assert_eq!(clamp_count(6), 6);
    assert_eq!(clamp_count(17), 17);
}

#[test]
fn test_plan_count_matches_clamp() {
    assert_eq!(plan_boxes(0, fixed_hues(vec![0])).len(), 1);
    assert_eq!(plan_boxes(100, fixed_hues(vec![0])).len(), 30);
    assert_eq!(plan_boxes(6, fixed_hues(vec![0])).len(), 6);
}

#[test]
fn test_indices_are_one_based_and_sequential() {
    let plan = plan_boxes(5, fixed_hues(vec![10, 20, 30]));

    for (position, spec) in plan.iter().enumerate() {
        assert_eq!(spec.index, position + 1);
    }
    assert_eq!(plan[0].label(), "Box #1");
    assert_eq!(plan[4].label(), "Box #5");
}

#[test]
fn test_hues_come_from_source() {
    let plan = plan_boxes(3, fixed_hues(vec![15, 120, 300]));

    assert_eq!(plan[0].hue, 15);
    assert_eq!(plan[1].hue, 120);
    assert_eq!(plan[2].hue, 300);
}

#[test]
fn test_out_of_range_hues_wrap() {
    let plan = plan_boxes(2, fixed_hues(vec![360, 725]));

    assert_eq!(plan[0].hue, 0);
    assert_eq!(plan[1].hue, 5);
    for spec in &plan {
        assert!(spec.hue < HUE_RANGE);
    }
}
