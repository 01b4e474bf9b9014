/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use crossterm::style::{Color, ContentStyle, Stylize};

/// Colors for the rows of the selection widgets. Precedence when a row qualifies for
/// more than one: focused, then checked, then unselected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StyleSheet {
    pub focused_style: ContentStyle,
    pub checked_style: ContentStyle,
    pub unselected_style: ContentStyle,
    pub header_style: ContentStyle,
}

mod colors {
    use super::Color;

    pub const LIZARD_GREEN: Color = Color::Rgb { r: 20, g: 244, b: 0 };
    pub const LAVENDER: Color = Color::Rgb { r: 183, g: 135, b: 255 };
    pub const FROZEN_BLUE: Color = Color::Rgb { r: 171, g: 204, b: 242 };
    pub const MOONLIGHT_BLUE: Color = Color::Rgb { r: 31, g: 36, b: 46 };
    pub const BRIGHT_CYAN: Color = Color::Rgb { r: 0, g: 255, b: 255 };
    pub const LIGHT_CYAN: Color = Color::Rgb { r: 190, g: 253, b: 255 };
    pub const DARK_TEAL: Color = Color::Rgb { r: 0, g: 85, b: 85 };
    pub const LIGHT_GRAY: Color = Color::Rgb { r: 180, g: 180, b: 180 };
    pub const NIGHT_BLUE: Color = Color::Rgb { r: 14, g: 17, b: 23 };
    pub const LIGHT_YELLOW_GREEN: Color = Color::Rgb { r: 190, g: 255, b: 130 };
}

impl Default for StyleSheet {
    fn default() -> Self {
        StyleSheet {
            focused_style: ContentStyle::new().with(colors::LIZARD_GREEN).bold(),
            checked_style: ContentStyle::new().with(colors::LAVENDER),
            unselected_style: ContentStyle::new(),
            header_style: ContentStyle::new()
                .with(colors::FROZEN_BLUE)
                .on(colors::MOONLIGHT_BLUE),
        }
    }
}

impl StyleSheet {
    #[must_use]
    pub fn sea_foam_style() -> Self {
        StyleSheet {
            focused_style: ContentStyle::new()
                .with(colors::BRIGHT_CYAN)
                .on(colors::DARK_TEAL)
                .bold(),
            checked_style: ContentStyle::new()
                .with(colors::LIGHT_CYAN)
                .on(colors::NIGHT_BLUE),
            unselected_style: ContentStyle::new()
                .with(colors::LIGHT_GRAY)
                .on(colors::NIGHT_BLUE),
            header_style: ContentStyle::new()
                .with(colors::LIGHT_YELLOW_GREEN)
                .on(colors::MOONLIGHT_BLUE),
        }
    }

    /// Pick the style for an item row.
    #[must_use]
    pub fn row_style(&self, is_focused: bool, is_checked: bool) -> ContentStyle {
        if is_focused {
            self.focused_style
        } else if is_checked {
            self.checked_style
        } else {
            self.unselected_style
        }
    }
}
