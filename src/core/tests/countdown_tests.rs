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

use crate::core::countdown::{countdown, BLAST_OFF};

#[test]
fn test_zero_is_marker_only() {
    assert_eq!(countdown(0), "🚀 Blast off!");
}

#[test]
fn test_countdown_from_three() {
    assert_eq!(countdown(3), "3… 2… 1… 🚀 Blast off!");
}

#[test]
fn test_countdown_from_one() {
    assert_eq!(countdown(1), "1… 🚀 Blast off!");
}

#[test]
fn test_negative_start_clamps_to_zero() {
    assert_eq!(countdown(-5), countdown(0));
}

#[test]
fn test_always_ends_with_marker() {
    for start in 0..10 {
        assert!(
            countdown(start).ends_with(BLAST_OFF),
            "countdown({}) must end with the terminal marker",
            start
        );
    }
}
