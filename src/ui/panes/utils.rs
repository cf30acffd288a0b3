use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};

/// Bordered, titled block
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border(is_focused))
}

/// Rows that fit inside a bordered `area`, minus `reserved` header rows
pub(crate) fn visible_rows(area: Rect, reserved: usize) -> usize {
    (area.height.saturating_sub(2) as usize)
        .saturating_sub(reserved)
        .max(1)
}

/// Clamp `offset` so the last page stays full; 0 when everything fits
pub(crate) fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let mut offset = usize::MAX;
        clamp_scroll(&mut offset, 10, 4);
        assert_eq!(offset, 6);

        let mut offset = 3;
        clamp_scroll(&mut offset, 2, 4);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_visible_rows_never_zero() {
        assert_eq!(visible_rows(Rect::new(0, 0, 10, 2), 1), 1);
        assert_eq!(visible_rows(Rect::new(0, 0, 10, 12), 1), 9);
    }
}
