//! Styling constants and theme configuration

use iced::Color;

// Status line colors
pub const SUCCESS_TEXT: Color = Color::from_rgb(0.45, 0.8, 0.45);
pub const INFO_TEXT: Color = Color::from_rgb(0.7, 0.7, 0.75);
pub const ERROR_TEXT: Color = Color::from_rgb(0.9, 0.4, 0.4);

// Chart colors
pub const BAR_COLOR: Color = Color::from_rgb(0.2, 0.6, 0.25); // Green

// Dimensions
pub const WINDOW_WIDTH: f32 = 640.0;
pub const WINDOW_HEIGHT: f32 = 560.0;
pub const FORM_WIDTH: f32 = 320.0;
pub const BAR_WIDTH: f32 = 48.0;
pub const BAR_MAX_HEIGHT: f32 = 300.0;
