//! Pane — one rectangular terminal region with its own frame buffer.
//!
//! Every panel owns a `Pane` and paints into it through a [`Canvas`] during
//! [`Pane::draw`]; the pane erases, draws the border, runs the paint closure
//! and flushes — in that order, always. Panels never talk to the backend
//! directly.
//!
//! A pane that is resized below its minimum, or repositioned so it no longer
//! fits the terminal, goes *inactive*: geometry bookkeeping continues but
//! drawing is suppressed until a later relayout regrows it. Backend errors
//! and out-of-bounds paints are logged and swallowed — a bad frame costs one
//! tick, never the process.

use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use tracing::{debug, trace, warn};
use unicode_width::UnicodeWidthStr;

use crate::theme::C_PANEL_BORDER;

/// One styled run of text inside a `print_string` call. Attributes are
/// independent flags that OR-combine into the final cell style.
#[derive(Debug, Clone, Copy)]
pub struct Fragment<'a> {
    pub text: &'a str,
    pub color: Option<Color>,
    pub bold: bool,
    pub reverse: bool,
}

impl<'a> Fragment<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            color: None,
            bold: false,
            reverse: false,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    fn style(&self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.color {
            style = style.fg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.reverse {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

pub struct Pane {
    buf: Buffer,
    border: bool,
    border_color: Option<Color>,
    min_width: u16,
    min_height: u16,
    active: bool,
    /// Whether the pane currently fits inside the terminal. An out-of-bounds
    /// pane is skipped entirely at draw time.
    contained: bool,
    draw_count: u64,
}

impl Pane {
    pub fn new(area: Rect, border: bool) -> Self {
        Self {
            buf: Buffer::empty(area),
            border,
            border_color: None,
            min_width: 1,
            min_height: 1,
            active: true,
            contained: true,
            draw_count: 0,
        }
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Fixed panels (the animation icon) need more than the 1×1 default
    /// before their content makes sense.
    pub fn with_min_size(mut self, min_width: u16, min_height: u16) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }

    pub fn width(&self) -> u16 {
        self.buf.area.width
    }

    pub fn height(&self) -> u16 {
        self.buf.area.height
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// How many times `draw` has run, regardless of outcome. Redraw cadence
    /// diagnostics key off this.
    pub fn draw_count(&self) -> u64 {
        self.draw_count
    }

    /// Re-request the pane's size. Below the minimum the pane goes inactive;
    /// the geometry is kept so a later regrow reactivates it.
    pub fn resize(&mut self, width: u16, height: u16, screen: Size) {
        let area = Rect::new(self.buf.area.x, self.buf.area.y, width, height);
        self.buf.resize(area);
        self.update_activity(screen);
        trace!(
            "pane resized to {}x{} at ({},{}), active={}",
            width,
            height,
            area.x,
            area.y,
            self.active
        );
    }

    /// Move the pane. A position that no longer fits the terminal turns the
    /// pane inactive instead of propagating an error.
    pub fn reposition(&mut self, top: u16, left: u16, screen: Size) {
        let area = Rect::new(left, top, self.buf.area.width, self.buf.area.height);
        self.buf.resize(area);
        self.update_activity(screen);
        if !self.contained {
            debug!("could not place pane at ({},{}) within {:?}", top, left, screen);
        }
    }

    fn update_activity(&mut self, screen: Size) {
        let a = self.buf.area;
        self.contained = a.right() <= screen.width && a.bottom() <= screen.height;
        let was_active = self.active;
        self.active =
            self.contained && a.width >= self.min_width && a.height >= self.min_height;
        if was_active != self.active {
            debug!(
                "pane at ({},{}) {}x{} is now {}",
                a.x,
                a.y,
                a.width,
                a.height,
                if self.active { "active" } else { "inactive" }
            );
        }
    }

    /// Erase → border → paint → flush. The paint closure only runs while the
    /// pane is active; an out-of-bounds pane skips the backend entirely.
    pub fn draw<B: Backend>(&mut self, backend: &mut B, paint: impl FnOnce(&mut Canvas)) {
        self.draw_count += 1;
        self.buf.reset();
        if !self.contained {
            trace!("skipping draw of out-of-bounds pane {:?}", self.buf.area);
            return;
        }
        if self.active {
            if self.border {
                self.paint_border();
            }
            let mut canvas = Canvas {
                buf: &mut self.buf,
                border: self.border,
            };
            paint(&mut canvas);
        }
        self.flush(backend);
    }

    fn flush<B: Backend>(&mut self, backend: &mut B) {
        let content = self.buf.content();
        let cells = content.iter().enumerate().map(|(i, cell)| {
            let (x, y) = self.buf.pos_of(i);
            (x, y, cell)
        });
        if let Err(e) = backend.draw(cells) {
            warn!("pane flush failed for {:?}: {}", self.buf.area, e);
            return;
        }
        if let Err(e) = backend.flush() {
            warn!("backend flush failed: {}", e);
        }
    }

    fn paint_border(&mut self) {
        let area = self.buf.area;
        if area.width < 2 || area.height < 2 {
            return;
        }
        let style = Style::default().fg(self.border_color.unwrap_or(C_PANEL_BORDER));
        let (left, right) = (area.left(), area.right() - 1);
        let (top, bottom) = (area.top(), area.bottom() - 1);
        for x in left + 1..right {
            set_symbol(&mut self.buf, x, top, "─", style);
            set_symbol(&mut self.buf, x, bottom, "─", style);
        }
        for y in top + 1..bottom {
            set_symbol(&mut self.buf, left, y, "│", style);
            set_symbol(&mut self.buf, right, y, "│", style);
        }
        set_symbol(&mut self.buf, left, top, "┌", style);
        set_symbol(&mut self.buf, right, top, "┐", style);
        set_symbol(&mut self.buf, left, bottom, "└", style);
        set_symbol(&mut self.buf, right, bottom, "┘", style);
    }
}

fn set_symbol(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol);
        cell.set_style(style);
    }
}

/// Drawing surface handed to a panel's paint closure. Coordinates are
/// pane-local; (0,0) is the pane's top-left corner including any border row.
pub struct Canvas<'a> {
    buf: &'a mut Buffer,
    border: bool,
}

impl Canvas<'_> {
    pub fn width(&self) -> u16 {
        self.buf.area.width
    }

    pub fn height(&self) -> u16 {
        self.buf.area.height
    }

    /// Columns available for text starting at `offset`, accounting for the
    /// border inset.
    fn max_len(&self, offset: u16) -> usize {
        let border_cols: u16 = if self.border { 2 } else { 0 };
        self.width().saturating_sub(border_cols + offset) as usize
    }

    fn total_len(&self, fragments: &[Fragment<'_>]) -> u16 {
        let total: usize = fragments.iter().map(|f| f.text.width()).sum();
        (total as u16).min(self.width())
    }

    /// Lay out `fragments` left to right from `x` (or centered on the full
    /// pane width). A fragment whose end exceeds the width is truncated to
    /// fit; a fragment starting past the edge stops layout altogether.
    pub fn print_string(&mut self, x: u16, y: u16, fragments: &[Fragment<'_>], centered: bool) {
        if y >= self.height() {
            debug!("print at row {} outside pane height {}", y, self.height());
            return;
        }
        let mut x = if centered {
            (self.width() - self.total_len(fragments)) / 2
        } else {
            x
        };
        for fragment in fragments {
            if x >= self.width() {
                break;
            }
            let max = self.max_len(x);
            if max == 0 {
                break;
            }
            let abs_x = self.buf.area.x + x;
            let abs_y = self.buf.area.y + y;
            self.buf
                .set_stringn(abs_x, abs_y, fragment.text, max, fragment.style());
            x = x.saturating_add(fragment.text.width() as u16);
        }
    }

    /// Overwrite a full row with blanks — inset one column each side when the
    /// pane is bordered. Used to clear ticker rows every frame.
    pub fn erase_line(&mut self, y: u16, reverse: bool) {
        if y >= self.height() {
            debug!("erase of row {} outside pane height {}", y, self.height());
            return;
        }
        let (x0, width) = if self.border {
            (1u16, self.width().saturating_sub(2))
        } else {
            (0u16, self.width())
        };
        let style = if reverse {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let blanks = " ".repeat(width as usize);
        self.buf.set_stringn(
            self.buf.area.x + x0,
            self.buf.area.y + y,
            &blanks,
            width as usize,
            style,
        );
    }
}
