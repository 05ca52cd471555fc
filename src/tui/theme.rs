use ratatui::style::Color;

// Accent colors
pub const ACCENT_CORAL: Color = Color::Rgb(232, 131, 136);     // #E88388
pub const ACCENT_GOLD: Color = Color::Rgb(219, 171, 121);      // #DBAB79
pub const ACCENT_LIGHT_BLUE: Color = Color::Rgb(124, 175, 194); // #7CAFC2

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);        // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);      // #FFFFFF
pub const BACKDROP_FG: Color = Color::Rgb(88, 88, 88);        // #585858
pub const PANEL_BG: Color = Color::Rgb(28, 28, 30);           // #1C1C1E
pub const SELECTION_BG: Color = Color::Rgb(58, 58, 60);       // #3A3A3C
