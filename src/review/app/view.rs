use super::super::format::{marker, preview_text, readable_id, truncate_text};
use super::App;
use crate::session::{Judgment, JudgmentCapture, Snippet};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

impl App {
    pub(in crate::review) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(2),
                Constraint::Length(1),
            ])
            .split(area);

        self.draw_header(frame, layout[0]);
        self.draw_batch(frame, layout[1]);
        self.draw_footer(frame, layout[2]);

        if self.is_decision_visible() {
            self.draw_decision(frame);
        }
        if self.show_help {
            self.draw_help(frame);
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let line1 = Line::from(vec![
            Span::raw("Document: "),
            Span::styled(
                self.session.document_id.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | Reference: "),
            Span::styled(
                readable_id(&self.session.snippet_id),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        let search = if self.context.search.is_empty() {
            "<none>".to_string()
        } else {
            self.context.search.clone()
        };
        let line2 = Line::from(format!(
            "Batch: {}..{} of {} | Judged: {}/{} | Search: {}",
            self.session.from,
            self.session.from + self.context.more_like_this_size,
            self.candidates.candidates.len(),
            self.judged_in_batch(),
            self.batch().len(),
            search,
        ));
        let paragraph = Paragraph::new(vec![line1, line2]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn draw_batch(&self, frame: &mut Frame, area: Rect) {
        let batch = self.batch();
        if batch.is_empty() {
            let paragraph = Paragraph::new("No candidates in this batch window.")
                .block(Block::default().borders(Borders::ALL).title("Snippets"));
            frame.render_widget(paragraph, area);
            return;
        }
        let title = format!("Snippets ({} in batch)", batch.len());
        let items = batch
            .iter()
            .map(|snippet| self.snippet_item(snippet))
            .collect::<Vec<_>>();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = ListState::default();
        state.select(Some(self.selection));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn snippet_item(&self, snippet: &Snippet) -> ListItem<'static> {
        let capture = JudgmentCapture::new(snippet, self.session.judgment(&snippet.id));
        let mut spans = vec![Span::styled(
            readable_id(capture.id()),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        for option in Judgment::ALL {
            spans.push(Span::raw("  "));
            let active = capture.is_active(option);
            let label = format!("{} {}", marker(active), option.label());
            let style = if active {
                Style::default()
                    .fg(judgment_color(option))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(label, style));
        }
        let lines = vec![
            Line::from(spans),
            Line::from(format!("  {}", preview_text(capture.text()))),
        ];
        ListItem::new(lines)
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let message = self.message.clone().unwrap_or_else(|| {
            if self.is_decision_visible() {
                "1 more snippets | 2 seed set | 3 new search | q quit | ? help".to_string()
            } else {
                "q quit | j/k move | y/n/m judge | c commit | ? help".to_string()
            }
        });
        let message = truncate_text(&message, area.width as usize);
        let paragraph =
            Paragraph::new(message).style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_widget(paragraph, area);
    }

    fn draw_decision(&self, frame: &mut Frame) {
        let decision = self.decision();
        let Some(menu) = decision.menu() else {
            return;
        };
        let area = centered_rect(60, 40, frame.area());
        let lines = vec![
            Line::from("Your answers have been saved."),
            Line::from(""),
            Line::from(format!("  1: Review more snippets ({})", menu.query_more_target())),
            Line::from(format!("  2: Return to seed set ({})", menu.seed_set_target())),
            Line::from(format!("  3: New search ({})", menu.new_search_target())),
        ];
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Follow-up"))
            .wrap(Wrap { trim: true });
        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }

    fn draw_help(&self, frame: &mut Frame) {
        let area = centered_rect(70, 70, frame.area());
        let lines = vec![
            Line::from("Keys:"),
            Line::from("  q / Esc: quit (judgments are saved)"),
            Line::from("  Up/Down or k/j: move selection"),
            Line::from("  y: relevant"),
            Line::from("  n: not relevant"),
            Line::from("  m: maybe"),
            Line::from("  c: commit the batch"),
            Line::from("  1/2/3: follow-up action once committed"),
            Line::from("  ?: toggle help"),
        ];
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .wrap(Wrap { trim: true });
        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}

fn judgment_color(judgment: Judgment) -> Color {
    match judgment {
        Judgment::Yes => Color::Green,
        Judgment::No => Color::Red,
        Judgment::Maybe => Color::Yellow,
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
