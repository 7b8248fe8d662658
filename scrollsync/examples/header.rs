use std::cell::RefCell;
use std::fs::File;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseEventKind};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::{cursor, execute, queue, terminal};
use scrollsync::{
    Axis, DEFAULT_SYNC_KEY, ScrollHandle, ScrollSync, SharedHandle, SyncInterval, SyncOptions,
    SyncedHandle,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const HEADER_MAX: u16 = 12;
const HEADER_MIN: u16 = 3;
const COLLAPSE_RANGE: f64 = (HEADER_MAX - HEADER_MIN) as f64;
const CONTENT_ROWS: usize = 160;

/// One scrollable list under the shared header.
struct Pane {
    title: &'static str,
    offset: f64,
    /// Position last reported to the coordinator, one loop turn behind.
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
    // Trace shows the per-event path, including suppressed broadcasts.
    let log_file = File::create("header.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut screen = Screen::new()?;
    let mut sync = ScrollSync::new();

    let panes = [Pane::shared("Left"), Pane::shared("Right")];

    // Both lists share the header: their positions mirror each other while
    // the header collapses, then drift apart once it is fully collapsed.
    let window = SyncInterval::new(0.0, COLLAPSE_RANGE).expect("collapse window");
    let handles: Vec<SyncedHandle<Pane>> = panes
        .iter()
        .map(|pane| sync.register(SyncOptions::new().interval(window), pane.clone()))
        .collect();

    loop {
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
                KeyCode::Char('t') => {
                    // Jump the active list back to the top; its partner
                    // mirrors once the report comes through.
                    if let Some(active) = sync.active_member(DEFAULT_SYNC_KEY) {
                        sync.scroll_to(active, 0.0);
                    }
                }
                _ => {}
            },
            Event::Mouse(mouse) => {
                let (cols, _) = terminal::size()?;
                let index = usize::from(mouse.column >= cols / 2);
                match mouse.kind {
                    MouseEventKind::ScrollDown => wheel(&mut sync, &panes, &handles, index, 1.0),
                    MouseEventKind::ScrollUp => wheel(&mut sync, &panes, &handles, index, -1.0),
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

/// Apply a wheel tick to the list under the cursor.
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

fn draw(
    stdout: &mut io::Stdout,
    panes: &[SharedHandle<Pane>],
    handles: &[SyncedHandle<Pane>],
    sync: &ScrollSync,
) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let half = (cols / 2).max(10);

    // The header tracks the driving list's live position across the
    // collapse window.
    let active = sync.active_member(DEFAULT_SYNC_KEY);
    let driver_offset = handles
        .iter()
        .position(|handle| Some(handle.id()) == active)
        .map_or(0.0, |index| panes[index].borrow().offset);
    let collapse = driver_offset.clamp(0.0, COLLAPSE_RANGE);
    let header_rows = (f64::from(HEADER_MAX) - collapse).round() as u16;

    queue!(stdout, terminal::Clear(terminal::ClearType::All))?;

    for row in 0..header_rows {
        queue!(stdout, cursor::MoveTo(0, row))?;
        if row == 0 {
            let banner = format!(" Collapsing header ({header_rows} rows)");
            queue!(
                stdout,
                SetAttribute(Attribute::Reverse),
                Print(format!("{banner:<w$}", w = cols as usize)),
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            queue!(stdout, Print("|"))?;
        }
    }

    for (index, (pane, handle)) in panes.iter().zip(handles).enumerate() {
        let pane = pane.borrow();
        let x = index as u16 * half;

        queue!(stdout, cursor::MoveTo(x, header_rows))?;
        if sync.is_active(handle.id()) {
            queue!(stdout, SetAttribute(Attribute::Reverse))?;
        }
        let title = format!(" {} @ {:>4.0}", pane.title, pane.offset);
        queue!(
            stdout,
            Print(format!("{title:<w$.w$}", w = half as usize - 1)),
            SetAttribute(Attribute::Reset)
        )?;

        let start = pane.offset.max(0.0) as usize;
        let first_row = header_rows + 1;
        for row in 0..rows.saturating_sub(first_row + 1) {
            let line = start + row as usize;
            if line >= CONTENT_ROWS {
                break;
            }
            let text = format!(" {} item {line:>3}", pane.title);
            queue!(
                stdout,
                cursor::MoveTo(x, first_row + row),
                Print(format!("{text:<w$.w$}", w = half as usize - 1))
            )?;
        }
    }

    queue!(
        stdout,
        cursor::MoveTo(0, rows.saturating_sub(1)),
        Print("wheel: scroll list under cursor  t: active list to top  q: quit")
    )?;
    stdout.flush()
}
