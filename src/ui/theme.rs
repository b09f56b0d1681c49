use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub code: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub positive_index: Color,
    pub negative_index: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    code: Color::Rgb(166, 227, 161),           // Green, like a terminal prompt
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    selected_bg: Color::Rgb(137, 180, 250),
    selected_fg: Color::Rgb(30, 30, 46),
    positive_index: Color::Rgb(148, 226, 213), // Cyan
    negative_index: Color::Rgb(245, 194, 231), // Pink
};
