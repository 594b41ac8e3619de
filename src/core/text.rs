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

//! Title-case formatting
//!
//! Trims outer whitespace, splits on runs of whitespace, capitalizes
//! the first character of each word and lowercases the remainder,
//! rejoining with single spaces. Idempotent.

/// Title-cases arbitrary text
///
/// # Example
///
/// ```
/// use basics_playground::core::text::to_title_case;
///
/// assert_eq!(to_title_case("  hello   WORLD "), "Hello World");
/// ```
pub fn to_title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercases the first character, lowercases the rest
///
/// Unicode-aware: a single character may expand to several on case
/// conversion.
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
