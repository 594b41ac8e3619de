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

//! Box grid planning
//!
//! Plans the colored box grid: the requested count is clamped to a
//! fixed inclusive range and each box gets a one-based index plus a
//! hue drawn from an injected source. Keeping the hue source a
//! parameter keeps this module deterministic under test while the UI
//! passes GLib's random generator.

use crate::core::types::BoxSpec;

/// Smallest grid the generator will produce
pub const MIN_BOX_COUNT: i64 = 1;

/// Largest grid the generator will produce
pub const MAX_BOX_COUNT: i64 = 30;

/// Count used when the field is blank or malformed
pub const DEFAULT_BOX_COUNT: i64 = 6;

/// Number of distinct hues on the color wheel
pub const HUE_RANGE: u16 = 360;

/// Clamps a requested count into the supported grid range
pub fn clamp_count(requested: i64) -> usize {
    requested.clamp(MIN_BOX_COUNT, MAX_BOX_COUNT) as usize
}

/// Plans a grid of `requested` boxes (clamped), hues from `hue_source`
///
/// The previous grid is always discarded by the caller; every plan is
/// complete in itself. Indices are one-based and sequential.
///
/// # Example
///
/// ```
/// use basics_playground::core::boxes::plan_boxes;
///
/// let mut next = 0_u16;
/// let plan = plan_boxes(3, || {
///     next += 100;
///     next
/// });
///
/// assert_eq!(plan.len(), 3);
/// assert_eq!(plan[0].index, 1);
/// assert_eq!(plan[2].hue, 300);
/// ```
pub fn plan_boxes<F>(requested: i64, mut hue_source: F) -> Vec<BoxSpec>
where
    F: FnMut() -> u16,
{
    let count = clamp_count(requested);

    (1..=count)
        .map(|index| BoxSpec {
            index,
            hue: hue_source() % HUE_RANGE,
        })
        .collect()
}
