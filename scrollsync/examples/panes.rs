use std::cell::RefCell;
use std::fs::File;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseEventKind};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::{cursor, execute, queue, terminal};
use scrollsync::{
    Axis, ScrollHandle, ScrollSync, SharedHandle, SyncOptions, SyncType, SyncedHandle,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const SCROLL_STEP: f64 = 3.0;
const CONTENT_ROWS: usize = 200;

/// One scrollable text pane.
struct Pane {
    title: &'static str,
    /// Current scroll position, in rows.
    offset: f64,
    /// Position last reported to the coordinator. Panes report one loop turn
    /// after they move, the way native views emit scroll events after the
    /// fact.
    reported: f64,
}

impl Pane {
    fn shared(title: &'static str) -> SharedHandle<Self> {
        Rc::new(RefCell::new(Self {
            title,
            offset: 0.0,
            reported: 0.0,
        }))
    }
}

impl ScrollHandle for Pane {
    fn jump_to(&mut self, offset: f64, _axis: Axis) {
        self.offset = offset.max(0.0);
    }
}

/// Raw-mode terminal guard.
struct Screen {
    stdout: io::Stdout,
}

impl Screen {
    fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;
        Ok(Self { stdout })
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("panes.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut screen = Screen::new()?;
    let mut sync = ScrollSync::new();

    let panes = [
        Pane::shared("Alpha"),
        Pane::shared("Beta"),
        Pane::shared("Gamma"),
        Pane::shared("Delta"),
    ];

    // Alpha and Beta mirror each other's position; Gamma and Delta follow
    // each other's motion from wherever they already sit.
    let handles: Vec<SyncedHandle<Pane>> = vec![
        sync.register(SyncOptions::new().sync_key("pair-one"), panes[0].clone()),
        sync.register(SyncOptions::new().sync_key("pair-one"), panes[1].clone()),
        sync.register(
            SyncOptions::new()
                .sync_key("pair-two")
                .sync_type(SyncType::Relative),
            panes[2].clone(),
        ),
        sync.register(
            SyncOptions::new()
                .sync_key("pair-two")
                .sync_type(SyncType::Relative),
            panes[3].clone(),
        ),
    ];

    loop {
        // Deferred reports: any pane that moved since its last report feeds
        // the coordinator now. Followers commanded during a report land here
        // one turn later and are merely recorded.
        for (pane, handle) in panes.iter().zip(&handles) {
            let pending = {
                let pane = pane.borrow();
                (pane.offset != pane.reported).then_some(pane.offset)
            };
            if let Some(offset) = pending {
                pane.borrow_mut().reported = offset;
                sync.on_scroll(handle.id(), offset, Axis::Vertical);
            }
        }

        draw(&mut screen.stdout, &panes, &handles, &sync)?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char(c @ '1'..='4') => {
                    let index = c as usize - '1' as usize;
                    handles[index].scroll_to(&mut sync, 0.0);
                }
                _ => {}
            },
            Event::Mouse(mouse) => {
                let (cols, _) = terminal::size()?;
                let index = pane_at(mouse.column, cols);
                match mouse.kind {
                    MouseEventKind::ScrollDown => {
                        wheel(&mut sync, &panes, &handles, index, SCROLL_STEP)
                    }
                    MouseEventKind::ScrollUp => {
                        wheel(&mut sync, &panes, &handles, index, -SCROLL_STEP)
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

/// Apply a wheel tick to the pane under the cursor, which claims the driver
/// role for its pair.
fn wheel(
    sync: &mut ScrollSync,
    panes: &[SharedHandle<Pane>],
    handles: &[SyncedHandle<Pane>],
    index: usize,
    step: f64,
) {
    sync.on_interaction_begin(handles[index].id());
    let mut pane = panes[index].borrow_mut();
    pane.offset = (pane.offset + step).max(0.0);
}

/// Which pane column the cursor sits in.
fn pane_at(column: u16, cols: u16) -> usize {
    let width = (cols / 4).max(1);
    ((column / width) as usize).min(3)
}

fn draw(
    stdout: &mut io::Stdout,
    panes: &[SharedHandle<Pane>],
    handles: &[SyncedHandle<Pane>],
    sync: &ScrollSync,
) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let width = (cols / 4).max(10);
    let content_rows = rows.saturating_sub(3) as usize;

    queue!(stdout, terminal::Clear(terminal::ClearType::All))?;

    for (index, (pane, handle)) in panes.iter().zip(handles).enumerate() {
        let pane = pane.borrow();
        let x = index as u16 * width;

        // Title bar, highlighted for the pane driving its pair.
        queue!(stdout, cursor::MoveTo(x, 0))?;
        if sync.is_active(handle.id()) {
            queue!(stdout, SetAttribute(Attribute::Reverse))?;
        }
        let title = format!(" {} @ {:>4.0}", pane.title, pane.offset);
        queue!(
            stdout,
            Print(format!("{title:<w$.w$}", w = width as usize - 1)),
            SetAttribute(Attribute::Reset)
        )?;

        let start = pane.offset.max(0.0) as usize;
        for row in 0..content_rows {
            let line = start + row;
            if line >= CONTENT_ROWS {
                break;
            }
            let text = format!(" {} row {line:>3}", pane.title);
            queue!(
                stdout,
                cursor::MoveTo(x, row as u16 + 2),
                Print(format!("{text:<w$.w$}", w = width as usize - 1))
            )?;
        }
    }

    queue!(
        stdout,
        cursor::MoveTo(0, rows.saturating_sub(1)),
        Print("wheel: scroll pane under cursor  1-4: jump pane to top  q: quit")
    )?;
    stdout.flush()
}
