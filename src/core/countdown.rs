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

//! Countdown line generation
//!
//! Builds the descending "N… (N-1)… … 1…" sequence ending in the fixed
//! terminal marker. Purely textual.

/// Terminal marker appended at zero
pub const BLAST_OFF: &str = "🚀 Blast off!";

/// Start value used when the field is blank or malformed
pub const DEFAULT_START: i64 = 5;

/// Builds the countdown line from `start` down to the terminal marker
///
/// Negative starts clamp to 0, which yields the marker alone.
///
/// # Example
///
/// ```
/// use basics_playground::core::countdown::countdown;
///
/// assert_eq!(countdown(3), "3… 2… 1… 🚀 Blast off!");
/// assert_eq!(countdown(0), "🚀 Blast off!");
/// ```
pub fn countdown(start: i64) -> String {
    let mut text = String::new();
    let mut i = start.max(0);
    while i > 0 {
        text.push_str(&i.to_string());
        text.push_str("… ");
        i -= 1;
    }
    text.push_str(BLAST_OFF);
    text
}
