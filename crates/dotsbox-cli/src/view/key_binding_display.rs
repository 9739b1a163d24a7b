use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Key label and what it does.
pub type KeyBinding<'a> = (&'a str, &'a str);

/// One-line legend such as `h Hint | u Undo | q Quit`.
#[derive(Debug)]
pub struct KeyBindingDisplay<'a> {
    bindings: &'a [KeyBinding<'a>],
}

impl<'a> KeyBindingDisplay<'a> {
    pub fn new(bindings: &'a [KeyBinding<'a>]) -> Self {
        Self { bindings }
    }
}

const KEY_STYLE: Style = Style::new().fg(Color::Cyan);
const DESCRIPTION_STYLE: Style = Style::new().fg(Color::White);
const SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![];
        for (i, (key, description)) in self.bindings.iter().copied().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", SEPARATOR_STYLE));
            }
            spans.push(Span::styled(key, KEY_STYLE));
            spans.push(Span::from(" "));
            spans.push(Span::styled(description, DESCRIPTION_STYLE));
        }
        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_legend() {
        let area = Rect::new(0, 0, 24, 1);
        let mut buf = Buffer::empty(area);
        KeyBindingDisplay::new(&[("h", "Hint"), ("q", "Quit")]).render(area, &mut buf);
        let text: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(text.trim_end(), "h Hint | q Quit");
        assert_eq!(buf[(0, 0)].style().fg, Some(Color::Cyan));
    }
}
