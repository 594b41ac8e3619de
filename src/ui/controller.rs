//! MVC Controller - Mediates between Model (core logic) and View (GTK4 components)
//!
//! # Responsibilities
//!
//! - Coerce raw field text into numbers (component-specific defaults)
//! - Run the pure core operations and hand results back to the View
//! - Own the explicit presentation state (theme, section visibility)
//!
//! # Architecture
//!
//! The Controller holds no widget references. Presentation flags live
//! here as plain values and are returned from the toggle methods, so
//! the View never has to infer state by inspecting its own widgets.

use std::cell::{Cell, RefCell};

use crate::core::boxes::{plan_boxes, DEFAULT_BOX_COUNT, HUE_RANGE};
use crate::core::cart::{calculate_total, DEMO_CART};
use crate::core::countdown::{countdown, DEFAULT_START};
use crate::core::summary::summarize;
use crate::core::text::to_title_case;
use crate::core::types::{BoxSpec, Profile, Theme};
use crate::core::{float_or, int_or};

/// MVC Controller coordinating Model and View
///
/// Shared via `Rc` across handler closures; interior mutability covers
/// the few pieces of state the single-threaded main loop touches.
pub struct Controller {
    /// The fixed demo price list (immutable for the program's lifetime)
    prices: Vec<f64>,
    /// Current presentation theme
    theme: Cell<Theme>,
    /// Whether the functions section is currently shown
    functions_visible: Cell<bool>,
    /// Most recently generated box plan
    last_plan: RefCell<Vec<BoxSpec>>,
}

impl Controller {
    /// Creates a Controller with the demo cart and default presentation
    pub fn new() -> Self {
        Self {
            prices: DEMO_CART.to_vec(),
            theme: Cell::new(Theme::Light),
            functions_visible: Cell::new(true),
            last_plan: RefCell::new(Vec::new()),
        }
    }

    /// Runs the profile summary for raw form field text
    ///
    /// Blank or malformed age and favorite number coerce to 0; the name
    /// is trimmed. Pure read-compute-render, nothing is stored.
    pub fn profile_summary(&self, name: &str, age_text: &str, fav_text: &str) -> String {
        let profile = Profile {
            name: name.trim().to_string(),
            age: int_or(age_text, 0),
            favorite_number: int_or(fav_text, 0),
        };

        summarize(&profile)
    }

    /// The demo price list rendered as a JSON array
    pub fn cart_json(&self) -> String {
        serde_json::to_string(&self.prices).unwrap_or_else(|_| "[]".to_string())
    }

    /// Runs the cart total for a raw tax percentage field
    ///
    /// Blank, malformed, or negative percentages substitute 0.
    pub fn cart_total(&self, tax_text: &str) -> String {
        let pct = float_or(tax_text, 0.0).max(0.0);
        let total = calculate_total(&self.prices, pct / 100.0);

        format!("Total with {}% tax: ${}", pct, total)
    }

    /// Title-cases the raw text field content
    pub fn title_case(&self, raw: &str) -> String {
        to_title_case(raw)
    }

    /// Builds the countdown line for a raw start field
    ///
    /// Blank or malformed input starts at the default; negative starts
    /// clamp to zero inside the core function.
    pub fn countdown_text(&self, start_text: &str) -> String {
        countdown(int_or(start_text, DEFAULT_START))
    }

    /// Plans a fresh box grid for a raw count field
    ///
    /// Blank or malformed input requests the default count; the count
    /// is clamped to the supported range. Hues come from GLib's random
    /// generator. The previous plan is discarded.
    pub fn generate_boxes(&self, count_text: &str) -> Vec<BoxSpec> {
        let requested = int_or(count_text, DEFAULT_BOX_COUNT);
        let plan = plan_boxes(requested, || {
            glib::random_int_range(0, i32::from(HUE_RANGE)) as u16
        });

        *self.last_plan.borrow_mut() = plan.clone();
        plan
    }

    /// Count of boxes in the most recent plan
    pub fn box_count(&self) -> usize {
        self.last_plan.borrow().len()
    }

    /// Flips the theme and returns the new value
    pub fn toggle_theme(&self) -> Theme {
        let next = self.theme.get().toggle();
        self.theme.set(next);
        next
    }

    /// Current theme
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Flips the functions-section visibility and returns the new value
    pub fn toggle_functions_section(&self) -> bool {
        let next = !self.functions_visible.get();
        self.functions_visible.set(next);
        next
    }

    /// Whether the functions section is currently shown
    pub fn functions_section_visible(&self) -> bool {
        self.functions_visible.get()
    }

    /// The fixed demo price list
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
