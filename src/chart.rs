use crate::results::PageRecord;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};
use std::io;

pub const CHART_TITLE: &str = "Word Count per URL";
pub const AXIS_CAPTION: &str = "Word Count";

/// One (label, value) pair per record, in stored order
pub fn word_count_bars(records: &[PageRecord]) -> Vec<(String, u64)> {
    records
        .iter()
        .map(|r| (r.url().to_string(), r.word_count() as u64))
        .collect()
}

/// Draws a horizontal bar chart of word counts into the frame
pub fn draw_word_counts(f: &mut Frame, bars: &[(String, u64)]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let bars = bars
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .value(*value)
                .label(Line::from(label.clone()))
                .style(Style::default().fg(Color::LightBlue))
        })
        .collect::<Vec<_>>();

    let chart = BarChart::default()
        .block(Block::default().title(CHART_TITLE).borders(Borders::ALL))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, chunks[0]);

    let caption = Paragraph::new(format!("{}  (press any key to close)", AXIS_CAPTION));
    f.render_widget(caption, chunks[1]);
}

/// Shows the chart in the terminal until a key is pressed
pub fn show_word_counts(records: &[PageRecord]) -> io::Result<()> {
    let bars = word_count_bars(records);

    let mut terminal = setup_terminal()?;

    let result = draw_until_key(&mut terminal, &bars);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Raw mode plus alternate screen; raw mode is switched back off if the rest fails
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    undo_on_error(enter_alternate_screen(), || {
        let _ = disable_raw_mode();
    })
}

fn enter_alternate_screen() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Runs `undo` when `result` is an error, then passes the result through
fn undo_on_error<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

fn draw_until_key(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    bars: &[(String, u64)],
) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw_word_counts(f, bars))?;

        // Redraw on resize, close on any key
        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}
