//! TUI rendering with ratatui
//!
//! Root word tiles, the input field and the list of accepted words, with
//! rejections shown as a popup over everything else.

use super::app::{Alert, App, MessageStyle};
use crate::output::formatters::{consumed_letters, word_count};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Root word
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_root_word(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Used words
            Constraint::Percentage(50), // Progress and messages
        ])
        .split(chunks[2]);

    render_used_words(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if let Some(alert) = &app.screen.alert {
        render_alert(f, alert);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD SCRAMBLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_root_word(f: &mut Frame, app: &App, area: Rect) {
    let root = &app.screen.title;
    let consumed = consumed_letters(root, app.controller.input());

    // Letters already claimed by the input are dimmed
    let mut tiles = Vec::new();
    for (i, (c, used)) in root.chars().zip(consumed).enumerate() {
        if i > 0 {
            tiles.push(Span::raw(" "));
        }
        let style = if used {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        };
        tiles.push(Span::styled(c.to_uppercase().to_string(), style));
    }

    let content = vec![Line::from(""), Line::from(tiles)];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Round {} ", app.controller.round()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_used_words(f: &mut Frame, app: &App, area: Rect) {
    let used = &app.screen.used_words;

    let items: Vec<ListItem> = if used.is_empty() {
        vec![ListItem::new("No words yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        used.iter()
            .map(|word| {
                let line = Line::from(vec![
                    Span::styled(
                        format!("{} ", word.chars().count()),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(word.clone()),
                ]);
                ListItem::new(line)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Your Words ({}) ", used.len()))
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Found gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let found = app.screen.used_words.len();
    let possible = app.possible_words;
    let ratio = if possible == 0 {
        0.0
    } else {
        (found as f64 / possible as f64).min(1.0)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Found ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{found}/{possible}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .screen
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.controller.input())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter your word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats = Paragraph::new(format!(
        "{} found | {} possible",
        word_count(app.screen.used_words.len()),
        app.possible_words
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.screen.alert.is_some() {
        "Enter: Okay | Ctrl-C: Quit"
    } else {
        "Enter: Submit | Ctrl-R: New Word | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_alert(f: &mut Frame, alert: &Alert) {
    let area = centered_rect(50, 7, f.area());

    let content = vec![
        Line::from(Span::raw(alert.message.clone())),
        Line::from(""),
        Line::from(Span::styled(
            "[ Okay ]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// A rect `percent_x` wide and `height` rows tall in the middle of `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::RoundController;
    use crate::spell::DictionarySpellChecker;
    use crate::wordlists::WordSource;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let checker = DictionarySpellChecker::english(["rag", "garden", "danger"]);
        let source = WordSource::Words(vec!["garden".to_string()]);
        let mut app = App::new(RoundController::new(source, checker, Some(3)));
        app.start_round().unwrap();
        app
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_root_tiles() {
        let screen = draw(&app());
        assert!(screen.contains("G A R D E N"));
        assert!(screen.contains("No words yet"));
    }

    #[test]
    fn renders_accepted_words() {
        let mut app = app();
        app.controller.set_input("rag");
        app.submit();

        let screen = draw(&app);
        assert!(screen.contains("Your Words (1)"));
        assert!(screen.contains("3 rag"));
    }

    #[test]
    fn renders_alert_popup() {
        let mut app = app();
        for c in "xyz".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .unwrap();
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();

        let screen = draw(&app);
        assert!(screen.contains("Invalid word!"));
        assert!(screen.contains("Please enter a valid word."));
        assert!(screen.contains("[ Okay ]"));
    }

    #[test]
    fn centered_rect_is_inside() {
        let area = Rect::new(0, 0, 80, 30);
        let rect = centered_rect(50, 7, area);
        assert_eq!(rect.height, 7);
        assert_eq!(rect.width, 40);
        assert!(rect.x >= 20 && rect.y >= 11);
    }
}
