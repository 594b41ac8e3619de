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

//! Cart panel component
//!
//! Shows the fixed demo price list (as a JSON array, set once at
//! startup), a tax percentage field, and the total output region.

use gtk4::{prelude::*, Box as GtkBox, Button, Entry, InputPurpose, Label, Orientation};

/// Cart total calculator panel
pub struct CartPanel {
    /// Root widget
    widget: GtkBox,
    /// Price list display, set once at startup
    cart_label: Label,
    /// Tax percentage field
    tax_entry: Entry,
    /// Compute button
    total_button: Button,
    /// Total output region
    output: Label,
}

impl Default for CartPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl CartPanel {
    /// Creates the panel; call [`set_cart_text`](Self::set_cart_text)
    /// with the rendered price list before showing it.
    pub fn new() -> Self {
        let widget = GtkBox::new(Orientation::Vertical, 10);
        widget.set_margin_start(10);
        widget.set_margin_end(10);
        widget.set_margin_top(10);
        widget.set_margin_bottom(10);

        let cart_label = Label::builder().xalign(0.0).build();
        cart_label.add_css_class("cart-line");

        let row = GtkBox::new(Orientation::Horizontal, 10);
        let tax_entry = Entry::builder()
            .placeholder_text("Tax % (e.g. 8)")
            .input_purpose(InputPurpose::Number)
            .build();
        let total_button = Button::builder().label("Calculate Total").build();
        row.append(&tax_entry);
        row.append(&total_button);

        let output = Label::builder().xalign(0.0).selectable(true).build();
        output.add_css_class("output");

        widget.append(&cart_label);
        widget.append(&row);
        widget.append(&output);

        Self {
            widget,
            cart_label,
            tax_entry,
            total_button,
            output,
        }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    /// Sets the rendered price list line
    pub fn set_cart_text(&self, text: &str) {
        self.cart_label.set_text(text);
    }

    /// Registers the total callback, fired with the raw tax field text
    pub fn connect_total<F>(&self, callback: F)
    where
        F: Fn(String) + 'static,
    {
        let tax_entry = self.tax_entry.clone();

        self.total_button.connect_clicked(move |_| {
            callback(tax_entry.text().to_string());
        });
    }

    /// Writes the formatted total into the output region
    pub fn show_total(&self, text: &str) {
        self.output.set_text(text);
    }
}
