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

//! Title-case panel component
//!
//! Free text in, capitalized words out.

use gtk4::{prelude::*, Box as GtkBox, Button, Entry, Label, Orientation};

/// Title-case formatter panel
pub struct TextPanel {
    /// Root widget
    widget: GtkBox,
    /// Free text field
    input: Entry,
    /// Format button
    format_button: Button,
    /// Formatted output region
    output: Label,
}

impl Default for TextPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPanel {
    /// Creates the panel
    pub fn new() -> Self {
        let widget = GtkBox::new(Orientation::Vertical, 10);
        widget.set_margin_start(10);
        widget.set_margin_end(10);
        widget.set_margin_top(10);
        widget.set_margin_bottom(10);

        let row = GtkBox::new(Orientation::Horizontal, 10);
        let input = Entry::builder()
            .placeholder_text("some text to capitalize")
            .hexpand(true)
            .build();
        let format_button = Button::builder().label("Title Case").build();
        row.append(&input);
        row.append(&format_button);

        let output = Label::builder().xalign(0.0).wrap(true).selectable(true).build();
        output.add_css_class("output");

        widget.append(&row);
        widget.append(&output);

        Self {
            widget,
            input,
            format_button,
            output,
        }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    /// Registers the format callback, fired with the raw field text
    ///
    /// Fires on the button and on Enter in the field.
    pub fn connect_format<F>(&self, callback: F)
    where
        F: Fn(String) + 'static,
    {
        let callback = std::rc::Rc::new(callback);

        let input = self.input.clone();
        let callback_for_click = callback.clone();
        self.format_button.connect_clicked(move |_| {
            (*callback_for_click)(input.text().to_string());
        });

        self.input.connect_activate(move |entry| {
            (*callback)(entry.text().to_string());
        });
    }

    /// Writes the formatted text into the output region
    pub fn show_result(&self, text: &str) {
        self.output.set_text(text);
    }
}
