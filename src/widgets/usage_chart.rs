use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Stylize, Style, Color},
    symbols,
    widgets::{Axis, Block, BorderType, Chart, Dataset, GraphType, Widget},
};

use crate::core::RollingHistory;

/// Line chart of one rolling percentage history, y fixed to 0-100.
pub struct UsageChartWidget {
    title: &'static str,
    color: Color,
    points: Vec<(f64, f64)>,
    latest: Option<f32>,
}

impl UsageChartWidget {
    pub fn new(title: &'static str, color: Color) -> Self {
        Self {
            title,
            color,
            points: Vec::new(),
            latest: None,
        }
    }

    /// Replace the plotted series with `history`.
    pub fn update(&mut self, history: &RollingHistory) {
        self.points = history.points();
        self.latest = history.latest();
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    fn x_bound(&self) -> f64 {
        (self.points.len() as f64).max(1.0)
    }
}

impl Widget for &UsageChartWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.latest {
            Some(value) => format!("{} {:.1}%", self.title, value),
            None => self.title.to_string(),
        };

        let block = Block::bordered()
            .title(title)
            .title_style(Style::new().bold().fg(Color::Cyan))
            .border_type(BorderType::Plain)
            .border_style(Style::new().fg(Color::Blue));

        let dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(self.color))
            .data(&self.points);

        let chart = Chart::new(vec![dataset])
            .block(block)
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, self.x_bound()]),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, 100.0])
                    .labels(["0", "50", "100"]),
            );

        chart.render(area, buf);
    }
}
