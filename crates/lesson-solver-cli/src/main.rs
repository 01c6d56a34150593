mod app;
mod cards;

use anyhow::Result;
use app::{Action, App};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use lesson_solver_config::Config;
use lesson_solver_engine::{ContentBlock, Solution, io};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Determine response source from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if args.len() == 2 => {
            log::warn!("Ignoring unreadable config file: {e}");
            None
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} <response-file>", args[0]);
            process::exit(1);
        }
    };

    let source = if args.len() == 2 {
        args[1].clone()
    } else if args.len() == 1 {
        match config.as_ref().and_then(|c| c.response_path.clone()) {
            Some(path) => path.to_string_lossy().into_owned(),
            None => {
                eprintln!("Error: No response file provided and none set in config");
                eprintln!("Usage: {} <response-file>", args[0]);
                eprintln!(
                    "Or set response_path in the config file at {}",
                    config_path.display()
                );
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [response-file | -]", args[0]);
        process::exit(1);
    };

    let raw = if source == "-" {
        io::read_response_from(std::io::stdin().lock())
    } else {
        io::read_response(&PathBuf::from(&source))
    };
    let raw = match raw {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Error: Could not read response '{source}': {e}");
            process::exit(1);
        }
    };

    let config = config.unwrap_or_default();
    let solution = Solution::from_raw(raw);
    log::info!(
        "Loaded {} exercise(s) with {} question(s)",
        solution.exercise_count(),
        solution.question_count()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(solution, config.export_dir, config.reveal_answers);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match app.handle_key(key.code) {
                Action::Quit => return Ok(()),
                Action::Exported => terminal.clear()?,
                Action::None => {}
            }
        }
    }
}

fn card_style(block: &ContentBlock) -> Style {
    match block {
        ContentBlock::Heading { .. } => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        ContentBlock::Qa { .. } => Style::default(),
        ContentBlock::FillIn { .. } => Style::default().fg(Color::Green),
        ContentBlock::Table { .. } => Style::default().fg(Color::Magenta),
        ContentBlock::Other { .. } => Style::default().fg(Color::Gray),
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(2)].as_ref())
        .split(f.area());

    let numbered = app.solution.numbered();
    let items: Vec<ListItem> = numbered
        .iter()
        .zip(&app.revealed)
        .map(|(nb, revealed)| {
            let style = card_style(nb.block);
            let mut lines: Vec<Line> = cards::card_lines(nb, *revealed)
                .into_iter()
                .map(|line| Line::from(Span::styled(line, style)))
                .collect();
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let title = format!(
        "Solution: {} exercise(s), {} question(s)",
        app.solution.exercise_count(),
        app.solution.question_count()
    );

    if items.is_empty() {
        let empty = Paragraph::new("The response contained nothing to display.")
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(empty, chunks[0]);
    } else {
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().bg(Color::DarkGray));
        f.render_stateful_widget(list, chunks[0], &mut app.list_state);
    }

    let mut footer = vec![Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("Enter/Space: Answer | a: All | s: Save .txt | h: Save .html"),
    ])];
    if let Some(status) = &app.status {
        footer.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Yellow),
        )));
    }

    f.render_widget(Paragraph::new(footer), chunks[1]);
}
