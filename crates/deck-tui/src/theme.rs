//! Color palette for the tunedeck dashboard.

use ratatui::style::Color;

// ── Color palette ─────────────────────────────────────────────────────────────

pub const C_PRIMARY: Color = Color::Rgb(210, 210, 225);
pub const C_SECONDARY: Color = Color::Rgb(180, 120, 220);
pub const C_ACCENT: Color = Color::Rgb(80, 200, 220);
pub const C_PLAYING: Color = Color::Rgb(80, 200, 120);
pub const C_MUTED: Color = Color::Rgb(115, 115, 138);
pub const C_METER: Color = Color::Rgb(80, 140, 200);
pub const C_MARKER: Color = Color::Rgb(80, 200, 220);
pub const C_PANEL_BORDER: Color = Color::Rgb(100, 100, 125);

/// Colors the icon panel may pick for a freshly chosen animation.
pub const ANIMATION_COLORS: [Color; 3] = [C_PLAYING, C_ACCENT, C_SECONDARY];
