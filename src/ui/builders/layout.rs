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

//! Layout builder
//!
//! Creates the main application layout structure.

use crate::ui::{
    components::{BoxGrid, CartPanel, CountdownPanel, ProfileForm, TextPanel},
    Controller,
};
use gtk4::{prelude::*, Box as GtkBox, Frame, Orientation};
use std::rc::Rc;

/// Builds the main application layout
///
/// Creates a vertical box containing three framed sections:
/// - Profile summary (form + output)
/// - Functions (cart total + title case), the visibility-toggle target
/// - Loops (countdown + box grid)
///
/// # Returns
///
/// Tuple of (main_vbox, profile_form, cart_panel, text_panel,
/// countdown_panel, box_grid, functions_frame)
pub fn build_main_layout(
    controller: Rc<Controller>,
) -> (
    GtkBox,
    Rc<ProfileForm>,
    Rc<CartPanel>,
    Rc<TextPanel>,
    Rc<CountdownPanel>,
    Rc<BoxGrid>,
    Frame,
) {
    // Create main vertical box
    let main_vbox = GtkBox::new(Orientation::Vertical, 16);
    main_vbox.set_margin_start(16);
    main_vbox.set_margin_end(16);
    main_vbox.set_margin_top(16);
    main_vbox.set_margin_bottom(16);

    // SECTION 1: Profile summary form
    let profile_form = Rc::new(ProfileForm::new());
    let profile_frame = Frame::builder().label("Profile Summary").build();
    profile_frame.set_child(Some(profile_form.widget()));
    main_vbox.append(&profile_frame);

    // SECTION 2: Functions (the toggle target)
    let functions_box = GtkBox::new(Orientation::Vertical, 0);

    let cart_panel = Rc::new(CartPanel::new());
    // The price list is rendered once at startup and never changes
    cart_panel.set_cart_text(&controller.cart_json());
    functions_box.append(cart_panel.widget());

    let text_panel = Rc::new(TextPanel::new());
    functions_box.append(text_panel.widget());

    let functions_frame = Frame::builder().label("Functions").build();
    functions_frame.set_child(Some(&functions_box));
    functions_frame.set_visible(controller.functions_section_visible());
    main_vbox.append(&functions_frame);

    // SECTION 3: Loops
    let loops_box = GtkBox::new(Orientation::Vertical, 0);

    let countdown_panel = Rc::new(CountdownPanel::new());
    loops_box.append(countdown_panel.widget());

    let box_grid = Rc::new(BoxGrid::new());
    loops_box.append(box_grid.widget());

    let loops_frame = Frame::builder().label("Loops").build();
    loops_frame.set_child(Some(&loops_box));
    main_vbox.append(&loops_frame);

    (
        main_vbox,
        profile_form,
        cart_panel,
        text_panel,
        countdown_panel,
        box_grid,
        functions_frame,
    )
}
