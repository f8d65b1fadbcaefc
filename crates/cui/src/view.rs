use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color as TermColor, Line, Modifier, Span, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;
use trichroma_core::{Color, Grid, Level, GRID_SIDE, ROUND_COUNT};

const CARDS_PER_ROW: usize = 5;
const CARD_WIDTH: u16 = 11;
const CARD_HEIGHT: u16 = 5;

pub fn draw(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(7),
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(8),
        ])
        .split(frame.area());

    draw_header(frame, root[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(24)])
        .split(root[1]);
    draw_target(frame, middle[0], app);
    draw_scores(frame, middle[1], app);

    draw_cards(frame, root[2], app);
    draw_events(frame, root[3], app);

    if app.show_help {
        draw_help_popup(frame);
    }
}

/// `mm:ss.d`, tenths precision.
pub fn format_ms(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let tenths = (ms % 1_000) / 100;
    format!("{minutes:02}:{seconds:02}.{tenths}")
}

fn cell_color(color: Color) -> TermColor {
    match color {
        Color::White => TermColor::Rgb(0xff, 0xff, 0xff),
        Color::Red => TermColor::Rgb(0xff, 0x4d, 0x4d),
        Color::Blue => TermColor::Rgb(0x4d, 0x79, 0xff),
        Color::Yellow => TermColor::Rgb(0xff, 0xd2, 0x4d),
        Color::Purple => TermColor::Rgb(0xb8, 0x4d, 0xff),
        Color::Orange => TermColor::Rgb(0xff, 0x94, 0x4d),
        Color::Green => TermColor::Rgb(0x4d, 0xff, 0x88),
        Color::Black => TermColor::Rgb(0x11, 0x11, 0x11),
    }
}

fn grid_lines(grid: &Grid) -> Vec<Line<'static>> {
    (0..GRID_SIDE)
        .map(|r| {
            let spans: Vec<Span> = (0..GRID_SIDE)
                .map(|c| {
                    let color = grid.get(r, c);
                    let fg = if color == Color::Black {
                        TermColor::Rgb(0xee, 0xee, 0xee)
                    } else {
                        TermColor::Rgb(0x33, 0x33, 0x33)
                    };
                    Span::styled(
                        format!("{} ", color.token()),
                        Style::default().bg(cell_color(color)).fg(fg),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let hud = if app.session.is_active() {
        let round = app.session.round().unwrap_or(0);
        let level = app.session.level().map(Level::id).unwrap_or("-");
        format!(
            "Round: {}/{}  Bank: {}  Time: {}  Penalty: +{}",
            round + 1,
            ROUND_COUNT,
            level,
            format_ms(app.session.elapsed_ms(App::now_ms())),
            format_ms(app.session.penalty_ms())
        )
    } else {
        format!(
            "Round: -  Bank: {}  Time: 00:00.0  Penalty: +00:00.0",
            app.level_choice.id()
        )
    };
    let picked = app.session.selection().len();
    let lines = vec![
        Line::from(
            format!(
                "Trichroma | seed {} | picked {}/3",
                app.session.seed(),
                picked
            )
            .bold(),
        ),
        Line::from(hud),
        Line::from(format!("Status: {}", app.status_line)),
    ];
    let block = Block::default().borders(Borders::ALL).title("Overview");
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
}

fn draw_target(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Target");
    let lines = match app.session.puzzle() {
        Some(puzzle) => grid_lines(&puzzle.target),
        None => vec![Line::from("no puzzle")],
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_scores(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Top Scores");
    if app.leaderboard.is_empty() {
        frame.render_widget(Paragraph::new("No records yet.").block(block), area);
        return;
    }
    let items: Vec<ListItem> = app
        .leaderboard
        .records()
        .iter()
        .enumerate()
        .map(|(rank, record)| {
            ListItem::new(format!(
                "{}. {}  (penalty +{})  ts {}",
                rank + 1,
                format_ms(record.total_ms),
                format_ms(record.penalty_ms),
                record.ts / 1_000
            ))
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn draw_cards(frame: &mut Frame, area: Rect, app: &App) {
    let outer = Block::default().borders(Borders::ALL).title("Cards");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let Some(puzzle) = app.session.puzzle() else {
        frame.render_widget(Paragraph::new("press n for a puzzle"), inner);
        return;
    };

    let count = puzzle.cards.len();
    let row_count = count.div_ceil(CARDS_PER_ROW);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); row_count])
        .split(inner);

    for (index, card) in puzzle.cards.iter().enumerate() {
        let row = index / CARDS_PER_ROW;
        if row >= rows.len() {
            break;
        }
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(CARD_WIDTH); CARDS_PER_ROW])
            .split(rows[row]);
        let slot = columns[index % CARDS_PER_ROW];

        let badge = app.session.selection().badge(index);
        let title = match badge {
            Some(slot_number) => format!("#{} [{}]", index + 1, slot_number),
            None => format!("#{}", index + 1),
        };
        let mut style = Style::default();
        if badge.is_some() {
            style = style.fg(TermColor::Yellow);
        }
        if index == app.cursor {
            style = style.add_modifier(Modifier::BOLD).fg(TermColor::Cyan);
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(title);
        frame.render_widget(Paragraph::new(grid_lines(card)).block(block), slot);
    }
}

fn draw_events(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Events");
    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = app
        .event_log
        .iter()
        .rev()
        .take(visible.max(1))
        .rev()
        .map(|line| ListItem::new(line.clone()))
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(46, 12, frame.area());
    let lines = vec![
        Line::from("h/l or arrows  move between cards"),
        Line::from("space          pick / unpick a card"),
        Line::from("enter          submit the three picks"),
        Line::from("n              new manual puzzle"),
        Line::from("tab/backtab    cycle level (manual play)"),
        Line::from("s              start a timed run"),
        Line::from("r              reset the run"),
        Line::from("esc            clear picks / close help"),
        Line::from("q              quit"),
    ];
    let block = Block::default().borders(Borders::ALL).title("Help");
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
