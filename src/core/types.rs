//! src/core/types.rs
//!
//! Core type definitions for the playground
//!
//! This module defines the fundamental types used throughout the application:
//! - `Profile`: the transient form input (name, age, favorite number)
//! - `LifeStage`: age bracket derived from a fixed threshold ladder
//! - `Parity`: evenness of the favorite number
//! - `Theme`: the binary presentation mode (light/dark)
//! - `BoxSpec`: one generated box in the colored grid
//!
//! All types implement serialization and `Display` renders exactly the
//! wording the output regions show.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Age bracket derived from a fixed ordered threshold ladder
///
/// Thresholds: child < 13, teenager < 20, adult < 65, senior otherwise.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum LifeStage {
    /// Under 13
    Child,
    /// 13 to 19
    Teenager,
    /// 20 to 64
    Adult,
    /// 65 and up
    Senior,
}

impl LifeStage {
    /// Classifies an age against the threshold ladder
    pub fn for_age(age: i64) -> Self {
        if age < 13 {
            LifeStage::Child
        } else if age < 20 {
            LifeStage::Teenager
        } else if age < 65 {
            LifeStage::Adult
        } else {
            LifeStage::Senior
        }
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeStage::Child => write!(f, "a child"),
            LifeStage::Teenager => write!(f, "a teenager"),
            LifeStage::Adult => write!(f, "an adult"),
            LifeStage::Senior => write!(f, "a senior"),
        }
    }
}

/// Evenness of an integer
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Parity {
    /// Divisible by 2
    Even,
    /// Not divisible by 2
    Odd,
}

impl Parity {
    /// Classifies an integer by divisibility by 2
    pub fn of(n: i64) -> Self {
        if n % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "even"),
            Parity::Odd => write!(f, "odd"),
        }
    }
}

/// The binary presentation mode
///
/// State is owned explicitly by the Controller and toggled there,
/// never inferred back from widget inspection.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Theme {
    /// Default light presentation
    #[default]
    Light,
    /// Dark presentation (the `dark` CSS class on the window)
    Dark,
}

impl Theme {
    /// Returns the other theme. Toggling twice restores the original.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// True for the dark presentation
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// The transient profile form input
///
/// Built per submission, rendered to one sentence, never stored.
///
/// # Example
/// ```ignore
/// let profile = Profile {
///     name: "Ada".to_string(),
///     age: 17,
///     favorite_number: 7,
/// };
/// // Renders: Hi Ada! You are 17 (a teenager). Your favorite number 7
/// // is odd. You cannot vote yet.
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Profile {
    /// Display name, trimmed of outer whitespace
    pub name: String,

    /// Age in years; blank or non-numeric form input coerces to 0
    pub age: i64,

    /// Favorite number; blank or non-numeric form input coerces to 0
    pub favorite_number: i64,
}

/// One generated box in the colored grid
///
/// The plan is structurally deterministic (count and ordering); only
/// the hue varies between invocations.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BoxSpec {
    /// One-based position in the grid
    pub index: usize,

    /// Hue in [0, 360)
    pub hue: u16,
}

impl BoxSpec {
    /// CSS color for this box (fixed 80% saturation / 80% lightness)
    pub fn css_color(&self) -> String {
        format!("hsl({}, 80%, 80%)", self.hue)
    }

    /// Tooltip label shown on hover
    pub fn label(&self) -> String {
        format!("Box #{}", self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_stage_thresholds() {
        assert_eq!(LifeStage::for_age(12), LifeStage::Child);
        assert_eq!(LifeStage::for_age(13), LifeStage::Teenager);
        assert_eq!(LifeStage::for_age(19), LifeStage::Teenager);
        assert_eq!(LifeStage::for_age(20), LifeStage::Adult);
        assert_eq!(LifeStage::for_age(64), LifeStage::Adult);
        assert_eq!(LifeStage::for_age(65), LifeStage::Senior);
    }

    #[test]
    fn test_life_stage_display() {
        assert_eq!(format!("{}", LifeStage::Child), "a child");
        assert_eq!(format!("{}", LifeStage::Senior), "a senior");
    }

    #[test]
    fn test_parity() {
        assert_eq!(Parity::of(4), Parity::Even);
        assert_eq!(Parity::of(7), Parity::Odd);
        assert_eq!(Parity::of(0), Parity::Even);
        assert_eq!(Parity::of(-3), Parity::Odd);
    }

    #[test]
    fn test_theme_toggle_is_involution() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }

    #[test]
    fn test_box_spec_css_color() {
        let spec = BoxSpec { index: 1, hue: 210 };
        assert_eq!(spec.css_color(), "hsl(210, 80%, 80%)");
        assert_eq!(spec.label(), "Box #1");
    }
}
