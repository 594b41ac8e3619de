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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. It uses the Controller to run the playground
//! operations and own the presentation state.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates Controller
//!   ├─ Builds main window (header bar + three sections)
//!   └─ Wires components to Controller
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider, PolicyType, ScrolledWindow};
use std::rc::Rc;

use crate::ui::builders::{build_header_bar, build_main_layout, wire_up_handlers};
use crate::ui::{actions, Controller};

/// GTK4 Application for the scripting-basics playground
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new App with a fresh Controller
    ///
    /// # Example
    ///
    /// ```no_run
    /// use basics_playground::ui::App;
    ///
    /// let app = App::new();
    /// app.run(); // Blocks until window closes
    /// ```
    pub fn new() -> Self {
        // Create GTK4 Application
        let app = Application::builder()
            .application_id("com.tidynest.basics-playground")
            .build();

        let controller = Rc::new(Controller::new());

        Self { app, controller }
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop and blocks until the application
    /// exits. Returns the process exit status reported by GLib.
    pub fn run(self) -> i32 {
        let controller = self.controller.clone();

        // Connect activate signal (called when app starts)
        self.app.connect_activate(move |app| {
            Self::build_ui(app, controller.clone());
        });

        // Run the application (blocks until exit)
        i32::from(self.app.run_with_args::<&str>(&[]))
    }

    /// Loads custom CSS styling for the application
    ///
    /// Applies the CSS from `style.css` to the default display
    /// at APPLICATION priority level.
    fn load_css() {
        let provider = CssProvider::new();
        let css = include_str!("style.css");
        provider.load_from_string(css);

        // Apply CSS to the default display
        gtk4::style_context_add_provider_for_display(
            &gdk::Display::default().expect("Could not connect to a display"),
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }

    /// Builds the main window UI
    ///
    /// This is called when the application activates. It creates
    /// the window, the header bar, and all components, then wires
    /// every handler.
    fn build_ui(app: &Application, controller: Rc<Controller>) {
        // Load custom CSS styling
        Self::load_css();

        // Create application window
        let window = ApplicationWindow::builder()
            .application(app)
            .title("Scripting Basics Playground")
            .default_width(860)
            .default_height(720)
            .build();

        // Header bar with the two global toggles
        let (header_bar, theme_button, section_button) = build_header_bar();
        window.set_titlebar(Some(&header_bar));

        // Main layout: three framed sections
        let (main_vbox, profile_form, cart_panel, text_panel, countdown_panel, box_grid, functions_frame) =
            build_main_layout(controller.clone());

        // Scrollable content area
        let scrolled = ScrolledWindow::builder()
            .hscrollbar_policy(PolicyType::Never)
            .vexpand(true)
            .build();
        scrolled.set_child(Some(&main_vbox));
        window.set_child(Some(&scrolled));

        // Wire up every handler
        wire_up_handlers(
            &window,
            controller,
            profile_form,
            cart_panel,
            text_panel,
            countdown_panel,
            box_grid,
            &functions_frame,
            &theme_button,
            &section_button,
        );

        // App-level actions (menu)
        actions::setup_quit_action(app);

        // Show window
        window.present();
    }
}
