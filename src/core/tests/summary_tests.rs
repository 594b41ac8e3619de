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

use crate::core::summary::{can_vote, summarize, VOTING_AGE};
use crate::core::types::Profile;

/// Helper to build test profiles
fn test_profile(name: &str, age: i64, fav: i64) -> Profile {
    Profile {
        name: name.to_string(),
        age,
        favorite_number: fav,
    }
}

#[test]
fn test_teenager_cannot_vote() {
    let sentence = summarize(&test_profile("Ada", 17, 7));

    assert_eq!(
        sentence,
        "Hi Ada! You are 17 (a teenager). Your favorite number 7 is odd. You cannot vote yet."
    );
}

#[test]
fn test_adult_can_vote() {
    let sentence = summarize(&test_profile("Grace", 18, 4));

    assert!(sentence.contains("an adult"), "18 should be an adult");
    assert!(sentence.contains("You can vote."));
    assert!(sentence.contains("is even"));
}

#[test]
fn test_child_bracket() {
    let sentence = summarize(&test_profile("Linus", 9, 2));

    assert!(sentence.contains("a child"));
    assert!(sentence.contains("You cannot vote yet."));
}

#[test]
fn test_senior_bracket() {
    let sentence = summarize(&test_profile("Margaret", 70, 3));

    assert!(sentence.contains("a senior"));
    assert!(sentence.contains("You can vote."));
}

#[test]
fn test_coerced_zero_profile() {
    // Blank form fields coerce to 0 before reaching summarize
    let sentence = summarize(&test_profile("", 0, 0));

    assert_eq!(
        sentence,
        "Hi ! You are 0 (a child). Your favorite number 0 is even. You cannot vote yet."
    );
}

#[test]
fn test_voting_threshold() {
    assert!(!can_vote(VOTING_AGE - 1));
    assert!(can_vote(VOTING_AGE));
    assert!(can_vote(VOTING_AGE + 50));
}
