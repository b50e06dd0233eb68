//! CLI output: error mapping from domain errors to the user-facing surface.

use crate::error::ApiError;
use owo_colors::OwoColorize;

/// Map domain/service errors to a string for CLI output, red when `color`.
pub fn map_error(e: &ApiError, color: bool) -> String {
    let message = e.to_string();
    if color {
        format!("{}", message.red())
    } else {
        message
    }
}
