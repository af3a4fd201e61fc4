//! Terminal demo: scroll a list whose row heights are discovered as rows
//! first render.
//!
//! Every row is a paragraph of unknown height until its text is measured at
//! the current terminal width; the list starts from a one-line estimate and
//! refines itself as measurements stream in. Watch the scrollbar-free
//! progressive relayout by paging to the bottom right after startup.
//!
//! Run with `cargo run --example dynamic_scroll`.
//! Up/Down scroll by line, PageUp/PageDown by screen, Home/End jump,
//! `q` or Esc quits.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use dynlist::list::{DynamicList, ListOptions};
use dynlist::measure::text::{measured_height, wrap_cells};
use dynlist::measure::{Observation, SizeCallback, SizeObserver};
use dynlist::model::{Nonce, RowKey};
use dynlist::store::{SizeStore, StyleCache};
use dynlist::window::Viewport;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;

/// Reports the wrapped height of one row's text when it attaches, the way
/// content with a stable layout measures once after first paint.
struct TextMeasure {
    text: String,
    width: usize,
}

impl SizeObserver for TextMeasure {
    fn observe(&mut self, mut on_size: SizeCallback) -> Observation {
        on_size(measured_height(&self.text, self.width, 1.0));
        Observation::untracked()
    }
}

/// Deterministic filler paragraphs of wildly varying length.
fn sample_rows(count: usize) -> Vec<String> {
    const WORDS: &[&str] = &[
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india",
        "juliet", "kilo", "lima", "mike", "november", "oscar", "papa", "quebec", "romeo",
        "sierra", "tango", "uniform", "victor", "whiskey", "xray", "yankee", "zulu",
    ];

    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        seed = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (seed >> 33) as usize
    };

    (0..count)
        .map(|i| {
            let word_count = 3 + next() % 80;
            let words: Vec<&str> = (0..word_count).map(|_| WORDS[next() % WORDS.len()]).collect();
            format!("{i:>4} | {}", words.join(" "))
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;

    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let result = run(terminal);

    io::stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn run(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<(), Box<dyn std::error::Error>> {
    let size = terminal.size()?;
    let options = ListOptions::new(
        Viewport::new(size.height as f64, size.width as f64),
        Nonce::new("demo"),
        |index, _items: &[String]| RowKey::from(index),
        (),
    )
    .with_default_size(1.0)
    .with_overscan(4);

    let mut list = DynamicList::new(
        options,
        sample_rows(2000),
        SizeStore::shared(),
        StyleCache::shared(),
    );

    loop {
        let pass = list.render();

        // Bind a measurer to every newly rendered row; its report lands on
        // the next pass.
        let width_cells = list.window().viewport().width as usize;
        for row in &pass.rows {
            let text = row.data[row.index].clone();
            if let Some(measurer) = list.measurer_mut(&row.id) {
                if !measurer.is_attached() {
                    measurer.attach(&mut TextMeasure {
                        text,
                        width: width_cells,
                    });
                }
            }
        }

        let scroll = list.scroll_offset();
        terminal.draw(|frame| {
            let area = frame.area();
            for row in &pass.rows {
                let top = row.style.top - scroll;
                if top + row.style.height <= 0.0 || top >= area.height as f64 {
                    continue;
                }

                // Clip rows straddling the top edge line by line.
                let clipped = (-top).max(0.0) as usize;
                let y = top.max(0.0) as u16;
                let lines: Vec<Line> = wrap_cells(&row.data[row.index], area.width as usize)
                    .into_iter()
                    .skip(clipped)
                    .map(Line::from)
                    .collect();
                let height = (lines.len() as u16).min(area.height - y);
                if height == 0 {
                    continue;
                }
                frame.render_widget(
                    Paragraph::new(lines),
                    Rect::new(0, y, area.width, height),
                );
            }
        })?;

        // Short poll keeps progressive refinement flowing while idle.
        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let viewport_height = list.window().viewport().height;
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Down | KeyCode::Char('j') => {
                        list.set_scroll_offset(list.scroll_offset() + 1.0);
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        list.set_scroll_offset(list.scroll_offset() - 1.0);
                    }
                    KeyCode::PageDown => {
                        list.set_scroll_offset(list.scroll_offset() + viewport_height);
                    }
                    KeyCode::PageUp => {
                        list.set_scroll_offset(list.scroll_offset() - viewport_height);
                    }
                    KeyCode::Home => list.scroll_to(0),
                    KeyCode::End => {
                        let last = list.len().saturating_sub(1);
                        list.scroll_to(last);
                    }
                    _ => {}
                }
            }
            Event::Resize(width, height) => {
                // Width changed: measurers re-attach at the new width and
                // sizes converge again.
                list.set_viewport(Viewport::new(height as f64, width as f64));
            }
            _ => {}
        }
    }
}
