//! Frame-based animation: validated frame sets plus a pure sequencer.
//!
//! The sequencer never renders anything — it hands frames out one
//! `advance()` at a time and reports cycle exhaustion through an explicit
//! [`Step`] sentinel, so callers decide what happens next without any
//! re-entrant callback.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("frame {index}: expected {expected} lines, got {got}")]
    WrongLineCount {
        index: usize,
        expected: usize,
        got: usize,
    },
    #[error("frame {index}, line {line}: expected {expected} characters, got {got}")]
    WrongLineWidth {
        index: usize,
        line: usize,
        expected: usize,
        got: usize,
    },
}

/// A named sequence of equally-sized character-cell frames. Dimensions are
/// fixed at construction; appending a mismatched frame fails immediately.
#[derive(Debug, Clone)]
pub struct Animation {
    name: &'static str,
    rows: usize,
    cols: usize,
    frames: Vec<Vec<String>>,
}

impl Animation {
    pub fn new(name: &'static str, rows: usize, cols: usize) -> Self {
        Self {
            name,
            rows,
            cols,
            frames: Vec::new(),
        }
    }

    pub fn push_frame(&mut self, lines: &[&str]) -> Result<(), AnimationError> {
        let index = self.frames.len();
        if lines.len() != self.rows {
            return Err(AnimationError::WrongLineCount {
                index,
                expected: self.rows,
                got: lines.len(),
            });
        }
        for (line, text) in lines.iter().enumerate() {
            let got = text.chars().count();
            if got != self.cols {
                return Err(AnimationError::WrongLineWidth {
                    index,
                    line,
                    expected: self.cols,
                    got,
                });
            }
        }
        self.frames
            .push(lines.iter().map(|s| s.to_string()).collect());
        Ok(())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
}

/// What one `advance()` call produced.
#[derive(Debug, PartialEq)]
pub enum Step<'a> {
    /// The next frame to show.
    Frame(&'a [String]),
    /// The cycle budget was just exhausted — returned exactly once.
    Completed,
    /// Advanced past completion without a re-init.
    Spent,
}

/// Frame/cycle counters over some [`Animation`]. One full traversal of the
/// frame list is a cycle; after `max_cycles` cycles the sequencer reports
/// [`Step::Completed`] once and then idles.
#[derive(Debug, Default)]
pub struct Sequencer {
    frame: usize,
    cycles: u32,
    max_cycles: u32,
    done: bool,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset counters for a fresh run of `max_cycles` cycles.
    pub fn init(&mut self, max_cycles: u32) {
        self.frame = 0;
        self.cycles = 0;
        self.max_cycles = max_cycles;
        self.done = false;
    }

    pub fn reset(&mut self) {
        self.frame = 0;
        self.cycles = 0;
        self.done = false;
    }

    pub fn advance<'a>(&mut self, animation: &'a Animation) -> Step<'a> {
        if self.done {
            return Step::Spent;
        }
        let num = animation.num_frames();
        if num == 0 {
            self.done = true;
            return Step::Completed;
        }
        self.frame += 1;
        if self.frame >= num {
            self.frame = 0;
            self.cycles += 1;
            if self.cycles >= self.max_cycles {
                self.done = true;
                return Step::Completed;
            }
        }
        Step::Frame(&animation.frames[self.frame])
    }
}

/// The built-in icon sequences: a radiating speaker, a windmill, and a
/// left-to-right sweep. All 7×3.
pub fn builtin_animations() -> Result<Vec<Animation>, AnimationError> {
    let mut speaker = Animation::new("speaker", 3, 7);
    speaker.push_frame(&["   @   ", "   |   ", " __|__ "])?;
    speaker.push_frame(&["  (@)  ", "   |   ", " __|__ "])?;
    speaker.push_frame(&[" ((@)) ", "   |   ", " __|__ "])?;
    speaker.push_frame(&["(((@)))", "   |   ", " __|__ "])?;
    speaker.push_frame(&["(( @ ))", "   |   ", " __|__ "])?;
    speaker.push_frame(&["(  @  )", "   |   ", " __|__ "])?;

    let mut mill = Animation::new("mill", 3, 7);
    mill.push_frame(&["   !   ", "   |   ", " __|__ "])?;
    mill.push_frame(&["   ./  ", "  /|   ", " __|__ "])?;
    mill.push_frame(&[" __.__ ", "   |   ", " __|__ "])?;
    mill.push_frame(&["  \\.   ", "   |\\  ", " __|__ "])?;

    let mut sweep = Animation::new("sweep", 3, 7);
    for col in 0..7 {
        let line: String = (0..7).map(|c| if c == col { '>' } else { ' ' }).collect();
        sweep.push_frame(&[&line, &line, &line])?;
    }
    sweep.push_frame(&["       ", "       ", "       "])?;

    Ok(vec![speaker, mill, sweep])
}
