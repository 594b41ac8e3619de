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

//! Profile form component
//!
//! Three labeled entries (name, age, favorite number), a submit button
//! and the summary output region. Submission fires on the button and
//! on Enter in any entry, like a form submit.

use gtk4::{prelude::*, Box as GtkBox, Button, Entry, Grid, InputPurpose, Label, Orientation};
use std::rc::Rc;

/// The profile summary form
pub struct ProfileForm {
    /// Root widget
    widget: GtkBox,
    /// Name field
    name_entry: Entry,
    /// Age field (digits)
    age_entry: Entry,
    /// Favorite number field
    fav_entry: Entry,
    /// Submit button
    submit_button: Button,
    /// Summary output region
    output: Label,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileForm {
    /// Creates the form with empty fields
    pub fn new() -> Self {
        let widget = GtkBox::new(Orientation::Vertical, 10);
        widget.set_margin_start(10);
        widget.set_margin_end(10);
        widget.set_margin_top(10);
        widget.set_margin_bottom(10);

        let grid = Grid::builder().row_spacing(6).column_spacing(12).build();

        let name_entry = Entry::builder().placeholder_text("Your name").build();
        let age_entry = Entry::builder()
            .placeholder_text("Age")
            .input_purpose(InputPurpose::Digits)
            .build();
        let fav_entry = Entry::builder()
            .placeholder_text("Favorite number")
            .input_purpose(InputPurpose::Number)
            .build();

        grid.attach(&Label::builder().label("Name").xalign(0.0).build(), 0, 0, 1, 1);
        grid.attach(&name_entry, 1, 0, 1, 1);
        grid.attach(&Label::builder().label("Age").xalign(0.0).build(), 0, 1, 1, 1);
        grid.attach(&age_entry, 1, 1, 1, 1);
        grid.attach(
            &Label::builder().label("Favorite number").xalign(0.0).build(),
            0,
            2,
            1,
            1,
        );
        grid.attach(&fav_entry, 1, 2, 1, 1);

        let submit_button = Button::builder().label("Create Summary").build();
        submit_button.add_css_class("suggested-action");

        let output = Label::builder().xalign(0.0).wrap(true).selectable(true).build();
        output.add_css_class("output");

        widget.append(&grid);
        widget.append(&submit_button);
        widget.append(&output);

        Self {
            widget,
            name_entry,
            age_entry,
            fav_entry,
            submit_button,
            output,
        }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    /// Registers the submit callback
    ///
    /// The callback receives the raw text of the three fields. It fires
    /// on the submit button and on Enter in any entry.
    pub fn connect_submit<F>(&self, callback: F)
    where
        F: Fn(String, String, String) + 'static,
    {
        let callback = Rc::new(callback);

        let name_entry = self.name_entry.clone();
        let age_entry = self.age_entry.clone();
        let fav_entry = self.fav_entry.clone();
        let callback_for_click = callback.clone();

        self.submit_button.connect_clicked(move |_| {
            (*callback_for_click)(
                name_entry.text().to_string(),
                age_entry.text().to_string(),
                fav_entry.text().to_string(),
            );
        });

        // Enter in any field submits the whole form
        for entry in [&self.name_entry, &self.age_entry, &self.fav_entry] {
            let name_entry = self.name_entry.clone();
            let age_entry = self.age_entry.clone();
            let fav_entry = self.fav_entry.clone();
            let callback_for_activate = callback.clone();

            entry.connect_activate(move |_| {
                (*callback_for_activate)(
                    name_entry.text().to_string(),
                    age_entry.text().to_string(),
                    fav_entry.text().to_string(),
                );
            });
        }
    }

    /// Writes the summary sentence into the output region
    pub fn show_summary(&self, text: &str) {
        self.output.set_text(text);
    }
}
