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

//! Profile summary rendering
//!
//! Turns one [`Profile`] into the sentence the profile form displays:
//! age bracket, favorite-number parity, and voting eligibility, in a
//! single read-compute-render pass with no stored state.

use crate::core::types::{LifeStage, Parity, Profile};

/// Minimum age for voting eligibility
pub const VOTING_AGE: i64 = 18;

/// True when the age meets the voting threshold
pub fn can_vote(age: i64) -> bool {
    age >= VOTING_AGE
}

/// Renders the profile summary sentence
///
/// # Example
///
/// ```
/// use basics_playground::core::summary::summarize;
/// use basics_playground::core::types::Profile;
///
/// let profile = Profile {
///     name: "Ada".to_string(),
///     age: 17,
///     favorite_number: 7,
/// };
///
/// assert_eq!(
///     summarize(&profile),
///     "Hi Ada! You are 17 (a teenager). Your favorite number 7 is odd. \
///      You cannot vote yet."
/// );
/// ```
pub fn summarize(profile: &Profile) -> String {
    let stage = LifeStage::for_age(profile.age);
    let parity = Parity::of(profile.favorite_number);
    let voting = if can_vote(profile.age) {
        "You can vote."
    } else {
        "You cannot vote yet."
    };

    format!(
        "Hi {}! You are {} ({}). Your favorite number {} is {}. {}",
        profile.name, profile.age, stage, profile.favorite_number, parity, voting
    )
}
