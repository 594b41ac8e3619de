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

//! Countdown panel component
//!
//! Start value in, descending line out.

use gtk4::{prelude::*, Box as GtkBox, Button, Entry, InputPurpose, Label, Orientation};

/// Countdown generator panel
pub struct CountdownPanel {
    /// Root widget
    widget: GtkBox,
    /// Start value field
    start_entry: Entry,
    /// Launch button
    count_button: Button,
    /// Countdown output region
    output: Label,
}

impl Default for CountdownPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownPanel {
    /// Creates the panel
    pub fn new() -> Self {
        let widget = GtkBox::new(Orientation::Vertical, 10);
        widget.set_margin_start(10);
        widget.set_margin_end(10);
        widget.set_margin_top(10);
        widget.set_margin_bottom(10);

        let row = GtkBox::new(Orientation::Horizontal, 10);
        let start_entry = Entry::builder()
            .placeholder_text("Start from (default 5)")
            .input_purpose(InputPurpose::Digits)
            .build();
        let count_button = Button::builder().label("Count Down").build();
        row.append(&start_entry);
        row.append(&count_button);

        let output = Label::builder().xalign(0.0).wrap(true).selectable(true).build();
        output.add_css_class("output");

        widget.append(&row);
        widget.append(&output);

        Self {
            widget,
            start_entry,
            count_button,
            output,
        }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    /// Registers the countdown callback, fired with the raw field text
    pub fn connect_count<F>(&self, callback: F)
    where
        F: Fn(String) + 'static,
    {
        let start_entry = self.start_entry.clone();

        self.count_button.connect_clicked(move |_| {
            callback(start_entry.text().to_string());
        });
    }

    /// Writes the countdown line into the output region
    pub fn show_countdown(&self, text: &str) {
        self.output.set_text(text);
    }
}
