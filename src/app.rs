use std::time::{Duration, Instant};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use crossterm::{execute, event::EnableMouseCapture, event::DisableMouseCapture};
use ratatui::{DefaultTerminal, Frame};
use tracing::{error, info, warn};

use crate::config::MonitorConfig;
use crate::core::{Collector, Sampler, SysinfoCollector};
use crate::error::Result;
use crate::widgets::{ProcessTableWidget, SummaryWidget, UsageChartWidget};

use ratatui::layout::{Layout, Direction, Constraint};
use ratatui::widgets::{Paragraph, Tabs};
use ratatui::style::{Stylize, Style, Color};
use ratatui::text::{Span, Line};

const MEMORY_ORANGE: Color = Color::Rgb(255, 165, 0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Processes,
    Performance,
}

impl View {
    pub fn index(&self) -> usize {
        match self {
            View::Processes => 0,
            View::Performance => 1,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            View::Processes => View::Performance,
            View::Performance => View::Processes,
        }
    }
}

pub struct App<C = SysinfoCollector> {
    pub sampler: Sampler<C>,
    pub process_table_widget: ProcessTableWidget,
    pub cpu_chart_widget: UsageChartWidget,
    pub mem_chart_widget: UsageChartWidget,
    pub summary_widget: SummaryWidget,
    pub view: View,
    pub exit: bool,
    pub last_tick: Instant,
    pub tick_rate: Duration,
    pub mouse_enabled: bool,
    table_height: u16,
    render_pending: bool,
}

impl App<SysinfoCollector> {
    pub fn new(config: &MonitorConfig) -> Self {
        Self::with_collector(SysinfoCollector::new(), config)
    }
}

impl<C: Collector> App<C> {
    pub fn with_collector(collector: C, config: &MonitorConfig) -> Self {
        App {
            sampler: Sampler::new(collector, config),
            process_table_widget: ProcessTableWidget::new(config.name_width),
            cpu_chart_widget: UsageChartWidget::new("CPU Usage", Color::LightGreen),
            mem_chart_widget: UsageChartWidget::new("Memory Usage", MEMORY_ORANGE),
            summary_widget: SummaryWidget::new(),
            view: View::Processes,
            exit: false,
            last_tick: Instant::now(),
            tick_rate: config.tick_interval,
            mouse_enabled: false,
            table_height: 0,
            render_pending: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        if let Ok(()) = execute!(
            std::io::stdout(),
            EnableMouseCapture
        ) {
            self.mouse_enabled = true;
        }

        let result = self.run_loop(terminal);

        if self.mouse_enabled {
            let _ = execute!(
                std::io::stdout(),
                DisableMouseCapture
            );
        }

        result
    }

    /// One tick in flight at a time; the next is due `tick_rate` after the
    /// previous one has been drawn, so a slow tick delays rather than bunches.
    fn run_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        self.tick()?;

        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.frame_drawn();

            let timeout = self.tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                self.handle_events()?;
            }

            if !self.exit && self.last_tick.elapsed() >= self.tick_rate {
                self.tick()?;
            }
        }
        info!(ticks = self.sampler.ticks(), "exiting");
        Ok(())
    }

    pub fn tick(&mut self) -> Result<()> {
        let started = Instant::now();

        if let Err(e) = self.sampler.tick() {
            error!("tick failed: {e}");
            return Err(e);
        }
        self.refresh_widgets();

        let elapsed = started.elapsed();
        if elapsed > self.tick_rate {
            warn!(
                elapsed_ms = elapsed.as_millis() as u64,
                interval_ms = self.tick_rate.as_millis() as u64,
                "tick overran its interval"
            );
        }

        self.render_pending = true;
        Ok(())
    }

    /// Start the wait for the next tick once the last one is on screen.
    fn frame_drawn(&mut self) {
        if self.render_pending {
            self.render_pending = false;
            self.last_tick = Instant::now();
        }
    }

    fn refresh_widgets(&mut self) {
        let snapshot = self.sampler.snapshot();
        let skipped = self.sampler.skipped_last_tick();

        self.process_table_widget.set_rows(snapshot.ranked);
        self.cpu_chart_widget.update(snapshot.cpu_history);
        self.mem_chart_widget.update(snapshot.mem_history);
        self.summary_widget.update(&snapshot, skipped);
    }

    fn reset(&mut self) {
        self.sampler.reset();
        self.process_table_widget.scroll_to_top();
        self.refresh_widgets();
    }

    fn draw(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),   // Tabs
                Constraint::Min(0),      // Active view
                Constraint::Length(1),   // Status bar
            ])
            .margin(1)
            .split(frame.area());

        let tabs = Tabs::new(["Processes", "Performance"])
            .select(self.view.index())
            .style(Style::new().fg(Color::Gray))
            .highlight_style(Style::new().bold().fg(Color::Yellow))
            .divider("|");
        frame.render_widget(tabs, main_chunks[0]);

        match self.view {
            View::Processes => {
                self.table_height = main_chunks[1].height;
                frame.render_widget(&self.process_table_widget, main_chunks[1]);
            }
            View::Performance => {
                let perf_chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(5),   // Summary
                        Constraint::Min(0),      // Charts
                    ])
                    .split(main_chunks[1]);

                let chart_chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Percentage(50),
                        Constraint::Percentage(50),
                    ])
                    .split(perf_chunks[1]);

                frame.render_widget(&self.summary_widget, perf_chunks[0]);
                frame.render_widget(&self.cpu_chart_widget, chart_chunks[0]);
                frame.render_widget(&self.mem_chart_widget, chart_chunks[1]);
            }
        }

        let mut status_text = Vec::new();

        status_text.push(Span::styled("Tab/1/2", Style::default().fg(Color::Green)));
        status_text.push(Span::raw(": Switch View "));

        status_text.push(Span::styled("↑↓", Style::default().fg(Color::Green)));
        status_text.push(Span::raw(": Scroll "));

        status_text.push(Span::styled("r", Style::default().fg(Color::Green)));
        status_text.push(Span::raw(": Reset "));

        status_text.push(Span::styled("q", Style::default().fg(Color::Green)));
        status_text.push(Span::raw(": Quit"));

        let status_bar = Paragraph::new(Line::from(status_text));
        frame.render_widget(status_bar, main_chunks[2]);
    }

    fn handle_events(&mut self) -> Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            Event::Mouse(mouse_event) => {
                self.handle_mouse_event(mouse_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => self.exit(),
            KeyCode::Char('q') | KeyCode::Esc => self.exit(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('1') => self.view = View::Processes,
            KeyCode::Char('2') => self.view = View::Performance,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.view = self.view.toggle()
            }
            KeyCode::Up => self.process_table_widget.scroll_up(1),
            KeyCode::Down => self.scroll_table_down(1),
            KeyCode::PageUp => self.process_table_widget.scroll_up(10),
            KeyCode::PageDown => self.scroll_table_down(10),
            KeyCode::Home => self.process_table_widget.scroll_to_top(),
            KeyCode::End => {
                let visible_rows = self.visible_table_rows();
                self.process_table_widget.scroll_to_bottom(visible_rows)
            }
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        if !self.mouse_enabled || self.view != View::Processes {
            return;
        }

        match mouse_event.kind {
            MouseEventKind::ScrollUp => {
                self.process_table_widget.scroll_up(3);
            }
            MouseEventKind::ScrollDown => {
                self.scroll_table_down(3);
            }
            _ => {}
        }
    }

    fn visible_table_rows(&self) -> usize {
        ProcessTableWidget::visible_rows(self.table_height)
    }

    fn scroll_table_down(&mut self, amount: usize) {
        let visible_rows = self.visible_table_rows();
        self.process_table_widget.scroll_down(amount, visible_rows);
    }

    fn exit(&mut self) {
        self.exit = true
    }
}
