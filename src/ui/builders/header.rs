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

//! Header bar builder
//!
//! Creates the application header bar with the two global toggles and
//! the app menu.

use gtk4::{gio::Menu, Button, HeaderBar, MenuButton};

/// Builds the application header bar
///
/// Creates a HeaderBar containing:
/// - Theme toggle button (left)
/// - Functions-section visibility toggle button (left)
/// - Menu button with Quit (right)
///
/// # Returns
///
/// Tuple of (header_bar, theme_button, section_button)
pub fn build_header_bar() -> (HeaderBar, Button, Button) {
    let header_bar = HeaderBar::new();

    // Menu options
    let menu = Menu::new();
    menu.append(Some("Quit"), Some("app.quit"));

    // Menu button
    let menu_button = MenuButton::new();
    menu_button.set_icon_name("open-menu-symbolic");
    menu_button.set_menu_model(Some(&menu));

    let theme_button = Button::builder()
        .label("🌓 Dark Mode")
        .tooltip_text("Toggle between light and dark presentation")
        .build();

    let section_button = Button::builder()
        .label("👁 Functions Section")
        .tooltip_text("Show or hide the functions section")
        .build();

    header_bar.pack_start(&theme_button);
    header_bar.pack_start(&section_button);
    header_bar.pack_end(&menu_button);

    (header_bar, theme_button, section_button)
}
