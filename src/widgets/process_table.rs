use ratatui::{
    buffer::Buffer,
    layout::{Rect, Constraint},
    style::{Stylize, Style, Color},
    widgets::{Block, Table, Row, Cell, Widget, BorderType},
};

use crate::core::ProcessRecord;

/// Borders, header and the gap below the header.
const CHROME_ROWS: u16 = 4;

pub struct ProcessTableWidget {
    rows: Vec<ProcessRecord>,
    name_width: usize,
    scroll_offset: usize,
}

impl ProcessTableWidget {
    pub fn new(name_width: usize) -> Self {
        Self {
            rows: Vec::new(),
            name_width,
            scroll_offset: 0,
        }
    }

    /// Replace every row with the latest ranking.
    pub fn set_rows(&mut self, rows: &[ProcessRecord]) {
        self.rows.clear();
        self.rows.extend_from_slice(rows);
        self.scroll_offset = self.scroll_offset.min(self.rows.len().saturating_sub(1));
    }

    pub fn rows(&self) -> &[ProcessRecord] {
        &self.rows
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn visible_rows(area_height: u16) -> usize {
        area_height.saturating_sub(CHROME_ROWS) as usize
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize, visible_rows: usize) {
        let max_scroll = self.rows.len().saturating_sub(visible_rows);
        self.scroll_offset = (self.scroll_offset + amount).min(max_scroll);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self, visible_rows: usize) {
        self.scroll_offset = self.rows.len().saturating_sub(visible_rows);
    }
}

impl Widget for &ProcessTableWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible_rows = ProcessTableWidget::visible_rows(area.height);
        let total_rows = self.rows.len();

        let start_idx = self.scroll_offset.min(total_rows);
        let end_idx = (start_idx + visible_rows).min(total_rows);

        let rows: Vec<Row> = self.rows[start_idx..end_idx].iter().map(|record| {
            Row::new(vec![
                Cell::from(record.pid.to_string()).style(Style::new().fg(Color::Green)),
                Cell::from(record.display_name(self.name_width).to_string()),
                Cell::from(format!("{:.1}%", record.cpu_percent)),
                Cell::from(format!("{:.1}%", record.mem_percent)),
            ])
        }).collect();

        let widths = [
            Constraint::Percentage(12),  // PID
            Constraint::Percentage(52),  // Name
            Constraint::Percentage(18),  // CPU
            Constraint::Percentage(18),  // Memory
        ];

        let title = if total_rows > visible_rows && visible_rows > 0 {
            format!("Processes by Memory ({}-{} of {})", start_idx + 1, end_idx, total_rows)
        } else {
            "Processes by Memory".to_string()
        };

        let table = Table::new(rows, widths)
            .header(
                Row::new(vec![
                    "PID",
                    "Process Name",
                    "CPU %",
                    "Memory %",
                ])
                .style(Style::new().bold().fg(Color::White))
                .bottom_margin(1)
            )
            .block(
                Block::bordered()
                    .title(title)
                    .title_style(Style::new().bold().fg(Color::Cyan))
                    .border_type(BorderType::Plain)
                    .border_style(Style::new().fg(Color::Blue))
            );

        table.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: u32) -> Vec<ProcessRecord> {
        (0..n)
            .map(|i| ProcessRecord::new(i + 1, format!("proc-{i}"), 1.0, 50.0 - i as f32))
            .collect()
    }

    fn lines(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| (area.left()..area.right()).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn renders_formatted_percentages() {
        let mut widget = ProcessTableWidget::new(30);
        widget.set_rows(&[ProcessRecord::new(42, "firefox", 7.34, 12.0)]);

        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 8));
        (&widget).render(buf.area, &mut buf);

        let text = lines(&buf).join("\n");
        assert!(text.contains("42"));
        assert!(text.contains("firefox"));
        assert!(text.contains("7.3%"));
        assert!(text.contains("12.0%"));
    }

    #[test]
    fn long_names_are_truncated_in_the_table() {
        let mut widget = ProcessTableWidget::new(5);
        widget.set_rows(&[ProcessRecord::new(1, "abcdefghij", 0.0, 1.0)]);

        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 8));
        (&widget).render(buf.area, &mut buf);

        let text = lines(&buf).join("\n");
        assert!(text.contains("abcde"));
        assert!(!text.contains("abcdef"));
    }

    #[test]
    fn scrolling_is_clamped_to_the_last_page() {
        let mut widget = ProcessTableWidget::new(30);
        widget.set_rows(&records(30));

        widget.scroll_down(100, 10);
        assert_eq!(widget.scroll_offset(), 20);

        widget.scroll_up(3);
        assert_eq!(widget.scroll_offset(), 17);

        widget.scroll_to_top();
        assert_eq!(widget.scroll_offset(), 0);

        widget.scroll_to_bottom(10);
        assert_eq!(widget.scroll_offset(), 20);
    }

    #[test]
    fn shrinking_rows_pulls_scroll_back() {
        let mut widget = ProcessTableWidget::new(30);
        widget.set_rows(&records(30));
        widget.scroll_to_bottom(5);

        widget.set_rows(&records(3));

        assert!(widget.scroll_offset() < 3);
        assert_eq!(widget.rows().len(), 3);
    }
}
