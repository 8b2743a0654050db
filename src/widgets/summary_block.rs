use ratatui::{
    buffer::Buffer,
    layout::{Rect, Alignment},
    style::{Stylize, Style, Color},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget, BorderType},
};

use crate::core::Snapshot;

#[derive(Default)]
pub struct SummaryWidget {
    cpu: Option<f32>,
    mem: Option<f32>,
    shown: usize,
    skipped: usize,
}

impl SummaryWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, snapshot: &Snapshot<'_>, skipped: usize) {
        self.cpu = snapshot.cpu_history.latest();
        self.mem = snapshot.mem_history.latest();
        self.shown = snapshot.ranked.len();
        self.skipped = skipped;
    }
}

fn percent(value: Option<f32>) -> String {
    value.map(|v| format!("{v:.1}%")).unwrap_or_else(|| "--".to_string())
}

impl Widget for &SummaryWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let value_style = Style::default().fg(Color::Green).bold();

        let text = Text::from(vec![
            Line::from(vec![
                Span::raw("CPU: "),
                Span::styled(percent(self.cpu), value_style),
            ]),
            Line::from(vec![
                Span::raw("Memory: "),
                Span::styled(percent(self.mem), value_style),
            ]),
            Line::from(vec![
                Span::raw("Shown: "),
                Span::styled(self.shown.to_string(), value_style),
                Span::raw("  Skipped: "),
                Span::styled(self.skipped.to_string(), Style::default().fg(Color::Yellow)),
            ]),
        ]);

        let paragraph = Paragraph::new(text)
            .block(
                Block::bordered()
                    .title("System")
                    .title_style(Style::new().bold().fg(Color::Cyan))
                    .border_type(BorderType::Plain)
                    .border_style(Style::new().fg(Color::Blue))
            )
            .alignment(Alignment::Left);

        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ProcessRecord, RollingHistory};

    #[test]
    fn shows_latest_readings_and_counts() {
        let mut cpu = RollingHistory::new(50);
        let mut mem = RollingHistory::new(50);
        cpu.push(17.5);
        mem.push(42.0);
        let ranked = vec![ProcessRecord::new(1, "a", 1.0, 50.0)];
        let snapshot = Snapshot { cpu_history: &cpu, mem_history: &mem, ranked: &ranked };

        let mut widget = SummaryWidget::new();
        widget.update(&snapshot, 2);

        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 5));
        (&widget).render(buf.area, &mut buf);
        let text: String = (0..5u16)
            .flat_map(|y| (0..40u16).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();

        assert!(text.contains("CPU: 17.5%"));
        assert!(text.contains("Memory: 42.0%"));
        assert!(text.contains("Shown: 1"));
        assert!(text.contains("Skipped: 2"));
    }

    #[test]
    fn placeholders_before_first_tick() {
        assert_eq!(percent(None), "--");
    }
}
