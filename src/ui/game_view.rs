use crate::game::{winning_line, Board, Cell, GameOutcome, Mark, SIZE};
use crate::score::ScoreTally;
use crate::session::{GameMode, Session};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, session: &Session, cursor: usize, message: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Score
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_board(frame, session, cursor, chunks[1]);
    render_score(frame, session.score(), chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Cyan,
        Mark::O => Color::Magenta,
    }
}

/// Turn line as shown above the board
pub fn turn_text(session: &Session) -> String {
    let state = session.state();
    match state.outcome() {
        Some(GameOutcome::Winner(mark)) => format!("{} WINS!", mark),
        Some(GameOutcome::Draw) => "IT'S A TIE!".to_string(),
        None => match (session.mode(), state.current_player()) {
            (GameMode::HumanVsHuman, Mark::X) => "Player 1's TURN".to_string(),
            (GameMode::HumanVsHuman, Mark::O) => "Player 2's TURN".to_string(),
            (GameMode::HumanVsAi, mark) => format!("{}'s TURN", mark),
        },
    }
}

fn render_header(frame: &mut Frame, session: &Session, area: Rect) {
    let color = mark_color(session.state().current_player());
    let status = format!("{}  |  {}", turn_text(session), session.mode());

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Four in a Row"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, session: &Session, cursor: usize, area: Rect) {
    let board: &Board = session.state().board();
    let highlight = match session.state().outcome() {
        Some(GameOutcome::Winner(mark)) => winning_line(board, mark),
        _ => None,
    };

    let mut lines = Vec::new();
    lines.push(Line::from("╔═══╤═══╤═══╤═══╗"));

    for row in 0..SIZE {
        let mut spans = vec![Span::raw("║")];
        for col in 0..SIZE {
            let index = row * SIZE + col;
            let (symbol, mut style) = match board.get(index) {
                Some(Cell::Taken(mark)) => (
                    format!(" {} ", mark),
                    Style::default().fg(mark_color(mark)).add_modifier(Modifier::BOLD),
                ),
                _ => (" · ".to_string(), Style::default().fg(Color::DarkGray)),
            };
            if highlight.is_some_and(|line| line.contains(&index)) {
                style = style.bg(Color::Green);
            }
            if index == cursor && !session.state().is_over() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(symbol, style));
            spans.push(Span::raw(if col < SIZE - 1 { "│" } else { "║" }));
        }
        lines.push(Line::from(spans));
        if row < SIZE - 1 {
            lines.push(Line::from("╟───┼───┼───┼───╢"));
        }
    }

    lines.push(Line::from("╚═══╧═══╧═══╧═══╝"));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_score(frame: &mut Frame, score: ScoreTally, area: Rect) {
    let line = Line::from(vec![
        Span::styled("X ", Style::default().fg(mark_color(Mark::X)).add_modifier(Modifier::BOLD)),
        Span::raw(format!("{}", score.wins_x())),
        Span::raw("   Ties "),
        Span::raw(format!("{}", score.ties())),
        Span::raw("   "),
        Span::styled("O ", Style::default().fg(mark_color(Mark::O)).add_modifier(Modifier::BOLD)),
        Span::raw(format!("{}", score.wins_o())),
    ]);

    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));

    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let text = message.unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("Arrows: Move  |  Enter: Place  |  R: Restart  |  Q: Quit");
    let line2 = Line::from("H: Human vs Human  |  A: Human vs AI");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
