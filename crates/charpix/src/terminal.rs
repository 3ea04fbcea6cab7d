#![forbid(unsafe_code)]

//! Terminal-backed input source and display sink.
//!
//! [`TerminalBackend`] owns the terminal for its lifetime: raw mode is
//! entered on construction and every enabled mode is rolled back in
//! reverse order on [`Drop`], so the shell is restored on any exit path
//! short of an abort.
//!
//! # Key level semantics
//!
//! Most terminals report key presses (and repeats) but not releases, so
//! a key's "down" level cannot be observed directly. The backend keeps
//! its own down-raster: press and repeat events mark a code down,
//! release events (terminals speaking the kitty protocol) mark it up.
//! Until a release event has been seen at least once, the raster is
//! cleared after every sample — a key event then reads as down for
//! exactly one tick, which is the closest a plain terminal gets to the
//! press/release contract.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::style::{Color as AnsiColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};

use charpix_core::event::{KEY_COUNT, codes};
use charpix_core::{ButtonMask, InputSample, Point};
use charpix_render::{Color, PixelBuffer};

use crate::backend::{DisplaySink, InputSource};

/// Terminal modes enabled for the backend's lifetime.
#[derive(Debug, Clone)]
pub struct TerminalOptions {
    /// Switch to the alternate screen buffer, preserving scrollback.
    pub alternate_screen: bool,
    /// Capture mouse movement and button events.
    pub mouse_capture: bool,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            mouse_capture: true,
        }
    }
}

/// Crossterm-backed [`InputSource`] + [`DisplaySink`].
#[derive(Debug)]
pub struct TerminalBackend {
    alternate_screen_enabled: bool,
    mouse_enabled: bool,
    down: [bool; KEY_COUNT],
    saw_release: bool,
    buttons: ButtonMask,
}

impl TerminalBackend {
    /// Enter raw mode and enable the requested terminal modes.
    ///
    /// # Errors
    ///
    /// Fails if raw mode or any requested mode cannot be enabled.
    pub fn new(options: TerminalOptions) -> io::Result<Self> {
        crossterm::terminal::enable_raw_mode()?;
        tracing::debug!("terminal raw mode enabled");

        let mut backend = Self {
            alternate_screen_enabled: false,
            mouse_enabled: false,
            down: [false; KEY_COUNT],
            saw_release: false,
            buttons: ButtonMask::empty(),
        };

        let mut stdout = io::stdout();
        if options.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
            backend.alternate_screen_enabled = true;
        }
        if options.mouse_capture {
            execute!(stdout, EnableMouseCapture)?;
            backend.mouse_enabled = true;
        }
        execute!(stdout, cursor::Hide)?;
        Ok(backend)
    }
}

impl Drop for TerminalBackend {
    fn drop(&mut self) {
        // reverse order of enabling; errors are moot on the way out
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        let _ = execute!(stdout, cursor::Show);
        if self.alternate_screen_enabled {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = crossterm::terminal::disable_raw_mode();
        tracing::debug!("terminal restored");
    }
}

impl InputSource for TerminalBackend {
    fn poll_input(&mut self) -> io::Result<InputSample> {
        let mut sample = InputSample::empty();
        let mut buttons_changed = false;

        while crossterm::event::poll(Duration::ZERO)? {
            match crossterm::event::read()? {
                Event::Key(key) => {
                    if let Some(code) = map_key_code(key.code) {
                        match key.kind {
                            KeyEventKind::Press | KeyEventKind::Repeat => {
                                self.down[code as usize] = true;
                            }
                            KeyEventKind::Release => {
                                self.down[code as usize] = false;
                                self.saw_release = true;
                            }
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    match mouse.kind {
                        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                            sample.pointer =
                                Some(Point::new(i32::from(mouse.column), i32::from(mouse.row)));
                        }
                        MouseEventKind::Down(button) => {
                            self.buttons |= map_button(button);
                            buttons_changed = true;
                        }
                        MouseEventKind::Up(button) => {
                            self.buttons -= map_button(button);
                            buttons_changed = true;
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        for (code, &down) in self.down.iter().enumerate() {
            if down {
                sample.keys_down.push(code as u8);
            }
        }
        if buttons_changed {
            sample.buttons = Some(self.buttons);
        }
        if !self.saw_release {
            // no release reporting: a key event counts for one tick
            self.down = [false; KEY_COUNT];
        }
        Ok(sample)
    }
}

impl DisplaySink for TerminalBackend {
    fn present(&mut self, buffer: &PixelBuffer) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());

        let mut current: Option<Color> = None;
        for (row, cells) in buffer.rows().enumerate() {
            queue!(out, cursor::MoveTo(0, row as u16))?;
            for cell in cells {
                // color runs: only emit SGR when the attribute changes
                if current != Some(cell.color) {
                    queue!(
                        out,
                        SetForegroundColor(ansi_color(cell.color.foreground())),
                        SetBackgroundColor(ansi_color(cell.color.background()))
                    )?;
                    current = Some(cell.color);
                }
                queue!(out, Print(cell.glyph))?;
            }
        }
        queue!(out, ResetColor)?;
        out.flush()
    }
}

/// Map a crossterm key code into the 256-entry code space.
fn map_key_code(code: KeyCode) -> Option<u8> {
    match code {
        KeyCode::Char(c) => match codes::from_char(c) {
            0 => None,
            v => Some(v),
        },
        KeyCode::Backspace => Some(codes::BACKSPACE),
        KeyCode::Tab => Some(codes::TAB),
        KeyCode::Enter => Some(codes::ENTER),
        KeyCode::Esc => Some(codes::ESCAPE),
        KeyCode::PageUp => Some(codes::PAGE_UP),
        KeyCode::PageDown => Some(codes::PAGE_DOWN),
        KeyCode::End => Some(codes::END),
        KeyCode::Home => Some(codes::HOME),
        KeyCode::Left => Some(codes::LEFT),
        KeyCode::Up => Some(codes::UP),
        KeyCode::Right => Some(codes::RIGHT),
        KeyCode::Down => Some(codes::DOWN),
        KeyCode::Insert => Some(codes::INSERT),
        KeyCode::Delete => Some(codes::DELETE),
        KeyCode::F(n) if (1..=12).contains(&n) => Some(codes::F1 + n - 1),
        _ => None,
    }
}

fn map_button(button: MouseButton) -> ButtonMask {
    match button {
        MouseButton::Left => ButtonMask::LEFT,
        MouseButton::Right => ButtonMask::RIGHT,
        MouseButton::Middle => ButtonMask::MIDDLE,
    }
}

/// Map a 4-bit console selector onto the matching ANSI color.
///
/// Channel order is the console's: bit 0 blue, bit 1 green, bit 2 red,
/// bit 3 intensity.
fn ansi_color(selector: u8) -> AnsiColor {
    match selector & 0x0F {
        0x00 => AnsiColor::Black,
        0x01 => AnsiColor::DarkBlue,
        0x02 => AnsiColor::DarkGreen,
        0x03 => AnsiColor::DarkCyan,
        0x04 => AnsiColor::DarkRed,
        0x05 => AnsiColor::DarkMagenta,
        0x06 => AnsiColor::DarkYellow,
        0x07 => AnsiColor::Grey,
        0x08 => AnsiColor::DarkGrey,
        0x09 => AnsiColor::Blue,
        0x0A => AnsiColor::Green,
        0x0B => AnsiColor::Cyan,
        0x0C => AnsiColor::Red,
        0x0D => AnsiColor::Magenta,
        0x0E => AnsiColor::Yellow,
        _ => AnsiColor::White,
    }
}
