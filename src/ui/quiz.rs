use crate::quiz::QuizRun;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz_menu(f: &mut Frame, area: Rect) {
    let card = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Element Quiz",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Test your knowledge of the periodic table."),
        Line::from("Can you identify elements by symbol, name,"),
        Line::from("and atomic number?"),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Start Challenge"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "10 Questions - Multiple Choice",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let menu = Paragraph::new(card)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(menu, centered_card(area, 48, 12));
}

pub fn draw_quiz(f: &mut Frame, area: Rect, run: &QuizRun) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(6),
        ])
        .split(area);

    let question = run.current();
    let progress = format!(
        "Question {} of {}   Score: {}",
        run.current_index + 1,
        run.total(),
        run.score
    );
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let prompt = Paragraph::new(question.kind.question_text(question.target))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Question "));
    f.render_widget(prompt, chunks[1]);

    let card = Paragraph::new(Span::styled(
        question.kind.card_text(question.target),
        Style::default()
            .fg(question.target.category.color())
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(card, chunks[2]);

    let mut option_lines: Vec<Line> = vec![Line::from("")];
    for (i, option) in question.options.iter().enumerate() {
        let label = question.kind.option_label(option);
        let style = option_style(run, &label);
        option_lines.push(Line::from(vec![
            Span::styled(
                format!("  [{}] ", i + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(label, style),
        ]));
        option_lines.push(Line::from(""));
    }
    let options = Paragraph::new(option_lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Answers "));
    f.render_widget(options, chunks[3]);
}

fn option_style(run: &QuizRun, label: &str) -> Style {
    if !run.answered {
        return Style::default().fg(Color::White);
    }
    let question = run.current();
    if label == question.correct_answer {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else if run.selected_answer.as_deref() == Some(label) {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn draw_quiz_summary(f: &mut Frame, area: Rect, run: &QuizRun) {
    let percentage = run.score as f64 / run.total() as f64 * 100.0;
    let card = vec![
        Line::from(""),
        Line::from(Span::styled(
            run.feedback(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("You scored"),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}", run.score, run.total()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{:.0}%", percentage),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "r",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Play Again  "),
            Span::styled(
                "m",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Quiz Menu"),
        ]),
    ];

    let summary = Paragraph::new(card)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, centered_card(area, 44, 12));
}

fn centered_card(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}
