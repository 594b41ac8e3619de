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

//! Reusable GTK4 UI components
//!
//! One component per playground tool; each owns its widgets, exposes
//! the root via `widget()`, and leaves wiring to the parent.

pub mod box_grid;
pub mod cart_panel;
pub mod countdown_panel;
pub mod profile_form;
pub mod text_panel;

pub use box_grid::BoxGrid;
pub use cart_panel::CartPanel;
pub use countdown_panel::CountdownPanel;
pub use profile_form::ProfileForm;
pub use text_panel::TextPanel;
