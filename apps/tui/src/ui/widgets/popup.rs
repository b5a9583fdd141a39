use ratatui::layout::Rect;

/// Area of at most `height` rows hanging from the top of `area`, inset by one
/// column on each side.
pub fn dropdown_rect(height: u16, area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y,
        width: area.width.saturating_sub(2),
        height: height.min(area.height),
    }
}
