//! Event handler setup
//!
//! Wires up all event handlers for the main UI:
//! - Profile form submission
//! - Total / title-case / countdown / box buttons
//! - Theme and section-visibility toggles

use gtk4::{prelude::*, ApplicationWindow, Button, Frame};
use std::rc::Rc;

use crate::core::types::Theme;
use crate::ui::components::{BoxGrid, CartPanel, CountdownPanel, ProfileForm, TextPanel};
use crate::ui::Controller;

/// Wires up all event handlers for the main UI
///
/// Each handler is an independent read-compute-render cycle: it reads
/// raw field text, asks the Controller for the result, and writes it
/// into the component's output region. Handlers never call each other.
#[allow(clippy::too_many_arguments)]
pub fn wire_up_handlers(
    window: &ApplicationWindow,
    controller: Rc<Controller>,
    profile_form: Rc<ProfileForm>,
    cart_panel: Rc<CartPanel>,
    text_panel: Rc<TextPanel>,
    countdown_panel: Rc<CountdownPanel>,
    box_grid: Rc<BoxGrid>,
    functions_frame: &Frame,
    theme_button: &Button,
    section_button: &Button,
) {
    // ============================================================================
    // Profile form submission
    // ============================================================================
    let controller_for_profile = controller.clone();
    let profile_form_for_submit = profile_form.clone();

    profile_form.connect_submit(move |name, age_text, fav_text| {
        let sentence = controller_for_profile.profile_summary(&name, &age_text, &fav_text);
        eprintln!("📝 Profile submitted: {}", name.trim());
        profile_form_for_submit.show_summary(&sentence);
    });

    // ============================================================================
    // Cart total button
    // ============================================================================
    let controller_for_total = controller.clone();
    let cart_panel_for_total = cart_panel.clone();

    cart_panel.connect_total(move |tax_text| {
        let line = controller_for_total.cart_total(&tax_text);
        eprintln!("🧾 {}", line);
        cart_panel_for_total.show_total(&line);
    });

    // ============================================================================
    // Title-case button
    // ============================================================================
    let controller_for_title = controller.clone();
    let text_panel_for_format = text_panel.clone();

    text_panel.connect_format(move |raw| {
        let formatted = controller_for_title.title_case(&raw);
        text_panel_for_format.show_result(&formatted);
    });

    // ============================================================================
    // Countdown button
    // ============================================================================
    let controller_for_count = controller.clone();
    let countdown_panel_for_count = countdown_panel.clone();

    countdown_panel.connect_count(move |start_text| {
        let line = controller_for_count.countdown_text(&start_text);
        countdown_panel_for_count.show_countdown(&line);
    });

    // ============================================================================
    // Box generation button
    // ============================================================================
    let controller_for_boxes = controller.clone();
    let box_grid_for_generate = box_grid.clone();

    box_grid.connect_generate(move |count_text| {
        let plan = controller_for_boxes.generate_boxes(&count_text);
        eprintln!("📦 Generated {} boxes", plan.len());
        box_grid_for_generate.rebuild(&plan);
    });

    // ============================================================================
    // Theme toggle
    // ============================================================================
    let controller_for_theme = controller.clone();
    let window_for_theme = window.clone();

    theme_button.connect_clicked(move |_| {
        let theme = controller_for_theme.toggle_theme();
        match theme {
            Theme::Dark => window_for_theme.add_css_class("dark"),
            Theme::Light => window_for_theme.remove_css_class("dark"),
        }
        eprintln!("🌓 Theme: {}", theme);
    });

    // ============================================================================
    // Functions-section visibility toggle
    // ============================================================================
    let controller_for_section = controller.clone();
    let functions_frame_for_toggle = functions_frame.clone();

    section_button.connect_clicked(move |_| {
        let visible = controller_for_section.toggle_functions_section();
        functions_frame_for_toggle.set_visible(visible);
        eprintln!("👁 Functions section visible: {}", visible);
    });
}
