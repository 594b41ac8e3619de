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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the pure logic behind every playground tool:
//! - Type definitions (profile, life stage, parity, theme, box specs)
//! - Profile summary rendering
//! - Cart total calculation
//! - Title-case formatting
//! - Countdown generation
//! - Box grid planning
//! - Numeric input coercion
//!
//! All business logic is isolated from UI and randomness concerns to
//! enable comprehensive unit testing without requiring a display
//! server.

pub mod boxes;
pub mod cart;
pub mod countdown;
pub mod input;
pub mod summary;
pub mod text;
pub mod types;

pub use input::{float_or, int_or, InputError};
pub use types::*;

#[cfg(test)]
mod tests;
