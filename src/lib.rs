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

//! Scripting Basics Playground
//!
//! An interactive playground of small, independent demonstration
//! tools with a GTK4 interface: profile summary, cart total with tax,
//! title-case formatting, countdown generation, a colored box grid,
//! and global dark-mode / section-visibility toggles.
//!
//! # Features
//!
//! - **Profile Summary:** age bracket, parity, and voting eligibility
//!   rendered as one sentence
//! - **Cart Total:** fixed demo price list with a per-invocation tax rate
//! - **Title Case:** whitespace-normalizing word capitalization
//! - **Countdown:** descending sequence ending in a fixed marker
//! - **Box Grid:** 1-30 randomly-hued squares, rebuilt per invocation
//! - **GTK4 Interface:** header-bar toggles for theme and section visibility
//! - **CLI:** every pure operation is runnable from the terminal
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, summary, cart, text, countdown,
//!   boxes, input coercion)
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//!
//! All numeric form input follows one rule: blank or malformed text
//! silently coerces to a component-specific default, and out-of-range
//! values clamp. Nothing is persisted; every handler is an independent
//! read-compute-render cycle.
//!
//! # Examples
//!
//! ## Computing a cart total
//!
//! ```
//! use basics_playground::core::cart::{calculate_total, DEMO_CART};
//!
//! let total = calculate_total(&DEMO_CART, 0.08);
//! assert_eq!(total, 25.64);
//! ```
//!
//! ## Title-casing text
//!
//! ```
//! use basics_playground::core::text::to_title_case;
//!
//! assert_eq!(to_title_case("hello WORLD"), "Hello World");
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use basics_playground::ui::App;
//!
//! let app = App::new();
//! app.run(); // Blocks until window closes
//! ```

pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use crate::core::types::{BoxSpec, LifeStage, Parity, Profile, Theme};
