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

//! Box grid component
//!
//! A count field, a generate button, and a flow box of colored
//! squares. Every generation clears the previous squares and rebuilds
//! the grid from the given plan.

use gtk4::{
    gdk, prelude::*, Box as GtkBox, Button, DrawingArea, Entry, FlowBox, InputPurpose, Orientation,
};

use crate::core::types::BoxSpec;

/// Edge length of one generated square, in pixels
const BOX_SIZE: i32 = 48;

/// Colored box grid panel
pub struct BoxGrid {
    /// Root widget
    widget: GtkBox,
    /// Count field
    count_entry: Entry,
    /// Generate button
    generate_button: Button,
    /// Container for the generated squares
    flow_box: FlowBox,
}

impl Default for BoxGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxGrid {
    /// Creates an empty grid
    pub fn new() -> Self {
        let widget = GtkBox::new(Orientation::Vertical, 10);
        widget.set_margin_start(10);
        widget.set_margin_end(10);
        widget.set_margin_top(10);
        widget.set_margin_bottom(10);

        let row = GtkBox::new(Orientation::Horizontal, 10);
        let count_entry = Entry::builder()
            .placeholder_text("How many boxes? (1-30)")
            .input_purpose(InputPurpose::Digits)
            .build();
        let generate_button = Button::builder().label("Generate Boxes").build();
        row.append(&count_entry);
        row.append(&generate_button);

        let flow_box = FlowBox::builder()
            .selection_mode(gtk4::SelectionMode::None)
            .min_children_per_line(3)
            .max_children_per_line(10)
            .row_spacing(8)
            .column_spacing(8)
            .build();

        widget.append(&row);
        widget.append(&flow_box);

        Self {
            widget,
            count_entry,
            generate_button,
            flow_box,
        }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    /// Registers the generate callback, fired with the raw count text
    pub fn connect_generate<F>(&self, callback: F)
    where
        F: Fn(String) + 'static,
    {
        let count_entry = self.count_entry.clone();

        self.generate_button.connect_clicked(move |_| {
            callback(count_entry.text().to_string());
        });
    }

    /// Replaces the grid contents with the given plan
    pub fn rebuild(&self, plan: &[BoxSpec]) {
        // Clear previous squares
        while let Some(child) = self.flow_box.first_child() {
            self.flow_box.remove(&child);
        }

        for spec in plan {
            self.flow_box.append(&Self::create_square(spec));
        }
    }

    /// Count of squares currently in the grid
    pub fn square_count(&self) -> usize {
        let mut count = 0;
        let mut child = self.flow_box.first_child();
        while let Some(widget) = child {
            count += 1;
            child = widget.next_sibling();
        }
        count
    }

    /// Builds one colored square from its spec
    fn create_square(spec: &BoxSpec) -> DrawingArea {
        let area = DrawingArea::builder()
            .content_width(BOX_SIZE)
            .content_height(BOX_SIZE)
            .build();
        area.add_css_class("box");
        area.set_tooltip_text(Some(&spec.label()));

        // GDK parses the CSS hsl() form directly; gray if malformed
        let rgba = gdk::RGBA::parse(spec.css_color())
            .unwrap_or_else(|_| gdk::RGBA::new(0.8, 0.8, 0.8, 1.0));
        let (r, g, b) = (
            f64::from(rgba.red()),
            f64::from(rgba.green()),
            f64::from(rgba.blue()),
        );

        area.set_draw_func(move |_, cr, _width, _height| {
            cr.set_source_rgb(r, g, b);
            let _ = cr.paint();
        });

        area
    }
}
