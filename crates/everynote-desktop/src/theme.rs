//! Color palette for the desktop app

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_gradient: &'static str,
    pub bg_panel: &'static str,
    pub bg_card: &'static str,
    pub bg_card_active: &'static str,
    pub bg_input: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub badge: &'static str,
}

/// The app only ships a dark theme
pub const PALETTE: ColorPalette = ColorPalette {
    bg_gradient: "linear-gradient(135deg, #111827 0%, #1f2937 50%, #000000 100%)",
    bg_panel: "rgba(31, 41, 55, 0.5)",
    bg_card: "rgba(31, 41, 55, 0.5)",
    bg_card_active: "rgba(55, 65, 81, 0.5)",
    bg_input: "#1f2937",
    text_primary: "#ffffff",
    text_secondary: "#d1d5db",
    text_muted: "#6b7280",
    border: "#374151",
    accent: "#2563eb",
    accent_text: "#ffffff",
    badge: "#374151",
};
