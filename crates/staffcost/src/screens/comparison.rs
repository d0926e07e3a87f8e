//! Comparison results screen
//!
//! Shows the two comparable totals, the recommendation, the itemized
//! category breakdown with percentage shares and a bar chart of the
//! category sums. The result is recomputed from the live parameters on
//! every draw.

use crate::components::{Component, EventResult};
use crate::report;
use crate::state::AppState;
use crate::util::format::{format_eur, format_eur_signed, format_percent};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};
use staffcost_core::{CostComparison, Recommendation};

pub struct ComparisonScreen;

impl ComparisonScreen {
    pub fn new() -> Self {
        Self
    }

    fn export_report(state: &mut AppState) {
        let result = state.results();
        match report::write_report(&state.data_dir, &state.params, &result) {
            Ok(path) => state.set_status(format!("Report written to {}", path.display())),
            Err(e) => state.set_error(format!("Failed to write report: {e}")),
        }
    }

    fn render_metrics(&self, frame: &mut Frame, area: Rect, result: &CostComparison) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        let hire = Paragraph::new(vec![
            Line::from(Span::styled(
                format_eur(result.total_hire),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("delta {}", format_eur_signed(result.savings())),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" NEW HIRE (ADDITIONAL) "),
        );
        frame.render_widget(hire, chunks[0]);

        let raise = Paragraph::new(Line::from(Span::styled(
            format_eur(result.total_salary_increase),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" SALARY INCREASE "),
        );
        frame.render_widget(raise, chunks[1]);

        let savings = Paragraph::new(vec![
            Line::from(Span::styled(
                format_eur(result.savings().abs()),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format_percent(result.savings_percent()),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title(" SAVINGS "));
        frame.render_widget(savings, chunks[2]);
    }

    fn render_recommendation(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        result: &CostComparison,
    ) {
        let (text, color) = match result.cheaper_option() {
            Recommendation::SalaryIncrease => (
                format!(
                    "Recommendation: salary increase is cheaper (save {})",
                    format_eur(result.savings().abs())
                ),
                Color::Green,
            ),
            Recommendation::NewHire => (
                format!(
                    "Recommendation: replacement hire is cheaper (save {})",
                    format_eur(result.savings().abs())
                ),
                Color::Cyan,
            ),
        };

        let mut spans = vec![Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )];

        let gap = state.params.salary_gap();
        if gap != 0.0 {
            spans.push(Span::styled(
                format!("   (new hire salary gap: {} /year)", format_eur_signed(gap)),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_breakdown(&self, frame: &mut Frame, area: Rect, result: &CostComparison) {
        let mut lines: Vec<Line> = Vec::new();

        for (name, category) in [
            ("RECRUITING", &result.recruiting),
            ("VACANCY", &result.vacancy),
            ("ONBOARDING", &result.onboarding),
            ("OTHER COSTS", &result.other),
        ] {
            lines.push(Line::from(Span::styled(
                format!(
                    "{name}  {} ({})",
                    format_eur(category.sum),
                    format_percent(result.share_of_total(category.sum))
                ),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            for item in &category.items {
                let style = if item.amount < 0.0 {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                lines.push(Line::from(Span::styled(
                    format!("  {:<24} {:>12}", item.label, format_eur(item.amount)),
                    style,
                )));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            format!(
                "PRODUCTIVITY LOSS  {} ({})",
                format_eur(result.productivity),
                format_percent(result.share_of_total(result.productivity))
            ),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "SALARY DIFFERENCE  {} ({})",
                format_eur(result.salary_difference),
                format_percent(result.share_of_total(result.salary_difference))
            ),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));

        let paragraph = lines_block(lines, " HIRE COST BREAKDOWN ");
        frame.render_widget(paragraph, area);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, result: &CostComparison) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" CATEGORY SUMS ");

        let bars: Vec<Bar> = result
            .categories()
            .iter()
            .map(|(name, sum)| {
                let style = if *sum < 0.0 {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::Blue)
                };
                Bar::default()
                    // Bar heights are magnitudes; the sign shows in the label
                    .value(sum.abs().round() as u64)
                    .label(Line::from(short_label(name)))
                    .text_value(format_eur(*sum))
                    .style(style)
                    .value_style(style.reversed())
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(9)
            .bar_gap(1)
            .direction(Direction::Vertical);

        frame.render_widget(chart, area);
    }

    fn render_raise_panel(&self, frame: &mut Frame, area: Rect, result: &CostComparison) {
        let lines = vec![
            Line::from(format!(
                "  Increase:             {:>12}",
                format_eur(result.salary_breakdown.increase)
            )),
            Line::from(format!(
                "  Social contributions: {:>12}",
                format_eur(result.salary_breakdown.social)
            )),
            Line::from(format!(
                "  Benefits:             {:>12}",
                format_eur(result.salary_breakdown.benefits)
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "  Total:                {:>12}",
                    format_eur(result.total_salary_increase)
                ),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        let paragraph = lines_block(lines, " SALARY INCREASE BREAKDOWN ");
        frame.render_widget(paragraph, area);
    }
}

fn lines_block<'a>(lines: Vec<Line<'a>>, title: &'a str) -> Paragraph<'a> {
    Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title))
}

fn short_label(name: &str) -> &'static str {
    match name {
        "Recruiting" => "Recr",
        "Vacancy" => "Vac",
        "Onboarding" => "Onbrd",
        "Productivity loss" => "Prod",
        "Other costs" => "Other",
        "Salary difference" => "SalDif",
        _ => "?",
    }
}

impl Default for ComparisonScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ComparisonScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('e') => {
                Self::export_report(state);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let result = state.results();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Metrics
                Constraint::Length(1), // Recommendation
                Constraint::Min(0),    // Breakdown + chart
            ])
            .split(area);

        self.render_metrics(frame, chunks[0], &result);
        self.render_recommendation(frame, chunks[1], state, &result);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[2]);

        self.render_breakdown(frame, columns[0], &result);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(7)])
            .split(columns[1]);

        self.render_chart(frame, right[0], &result);
        self.render_raise_panel(frame, right[1], &result);
    }
}
