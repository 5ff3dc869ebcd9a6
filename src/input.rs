//! Reading parameters from the console.
//!
//! Each parameter is asked on its own line.  A blank answer keeps the
//! default value; an answer that cannot be parsed also keeps it, and a
//! [`ParamError`] is recorded and logged.  A record asking for more
//! than [`MAX_POINTS`] points gets its default sample counts back, with
//! a diagnostic too.  Reading never fails because of what the user
//! typed, only if the console itself fails.

use std::{fmt::Display,
          io::{self, BufRead, Write},
          str::FromStr};
use log::{debug, warn};
use thiserror::Error;
use crate::shapes::{Hyperboloid, Lissajous, Shape, SineWave, Spiral,
                    Trefoil, MAX_POINTS};

/// Diagnostic for a console answer that was replaced by the default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("invalid input {input:?} for {name}, using default value {default}")]
    Invalid { name: &'static str, input: String, default: String },
    #[error("{shape} needs more than {max} points, using default sample counts")]
    TooManyPoints { shape: &'static str, max: usize },
}

/// Types of the values that can be read.
pub trait Param: FromStr + Display + Copy {
    /// Whether a successfully parsed value is acceptable.
    fn is_valid(&self) -> bool { true }
}

impl Param for f64 {
    // "inf" and "NaN" parse but are not usable as bounds.
    fn is_valid(&self) -> bool { self.is_finite() }
}

impl Param for usize {}

/// Parse the answer `text` to the question for `name`.  A blank
/// answer gives `default`.  An answer that does not parse gives an
/// error whose message names the default to use instead.
pub fn parse_or_default<T: Param>(name: &'static str, text: &str, default: T)
                                  -> Result<T, ParamError> {
    let text = text.trim();
    if text.is_empty() { return Ok(default) }
    match text.parse::<T>() {
        Ok(v) if v.is_valid() => Ok(v),
        _ => Err(ParamError::Invalid { name,
                                       input: text.to_string(),
                                       default: default.to_string() }),
    }
}

/// A parameter record together with the diagnostics collected while
/// reading it.  The record is always usable: invalid answers were
/// replaced by defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<P> {
    pub value: P,
    pub diagnostics: Vec<ParamError>,
}

/// Asks questions on `output` and reads the answers from `input`, one
/// line each.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    diagnostics: Vec<ParamError>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output, diagnostics: vec![] }
    }

    /// Ask `question` and return the answer or `default`.  End of
    /// input counts as a blank answer.
    pub fn ask<T: Param>(&mut self, name: &'static str, question: &str,
                         default: T) -> io::Result<T> {
        write!(self.output, "{} (default {}): ", question, default)?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        match parse_or_default(name, &line, default) {
            Ok(v) => {
                debug!("{} = {}", name, v);
                Ok(v)
            }
            Err(e) => {
                self.reject(e);
                Ok(default)
            }
        }
    }

    /// Record and log a replaced answer.
    fn reject(&mut self, e: ParamError) {
        warn!("{}", e);
        self.diagnostics.push(e);
    }

    /// Pair `value` with the diagnostics collected so far.
    pub fn finish<P>(self, value: P) -> Parsed<P> {
        Parsed { value, diagnostics: self.diagnostics }
    }
}

/// Parameter records whose interactive program asks a fixed list of
/// questions.  Fields that are not asked keep their default.
pub trait Prompted: Sized {
    fn prompt<R: BufRead, W: Write>(p: &mut Prompter<R, W>)
                                    -> io::Result<Self>;
}

/// Read a complete parameter record from the console.
pub fn read_params<P, R, W>(input: R, output: W) -> io::Result<Parsed<P>>
where P: Prompted + Shape, R: BufRead, W: Write {
    let mut p = Prompter::new(input, output);
    let mut value = P::prompt(&mut p)?;
    if !value.within_limit() {
        p.reject(ParamError::TooManyPoints { shape: P::NAME,
                                             max: MAX_POINTS });
        value = value.with_default_counts();
    }
    Ok(p.finish(value))
}

impl Prompted for SineWave {
    fn prompt<R: BufRead, W: Write>(p: &mut Prompter<R, W>)
                                    -> io::Result<Self> {
        let d = Self::default();
        Ok(SineWave {
            start_deg: p.ask("start_deg", "Enter start degree", d.start_deg)?,
            end_deg: p.ask("end_deg", "Enter end degree", d.end_deg)?,
            ..d })
    }
}

impl Prompted for Lissajous {
    fn prompt<R: BufRead, W: Write>(p: &mut Prompter<R, W>)
                                    -> io::Result<Self> {
        let d = Self::default();
        Ok(Lissajous {
            amp_x: p.ask("amp_x", "Enter amplitude A", d.amp_x)?,
            amp_y: p.ask("amp_y", "Enter amplitude B", d.amp_y)?,
            amp_z: p.ask("amp_z", "Enter amplitude C", d.amp_z)?,
            freq_x: p.ask("freq_x", "Enter frequency a", d.freq_x)?,
            freq_y: p.ask("freq_y", "Enter frequency b", d.freq_y)?,
            freq_z: p.ask("freq_z", "Enter frequency c", d.freq_z)?,
            ..d })
    }
}

impl Prompted for Trefoil {
    fn prompt<R: BufRead, W: Write>(p: &mut Prompter<R, W>)
                                    -> io::Result<Self> {
        let d = Self::default();
        Ok(Trefoil {
            t_start: p.ask("t_start", "Enter start value for t", d.t_start)?,
            t_end: p.ask("t_end", "Enter end value for t", d.t_end)?,
            n: p.ask("n", "Enter number of points", d.n)? })
    }
}

impl Prompted for Hyperboloid {
    fn prompt<R: BufRead, W: Write>(p: &mut Prompter<R, W>)
                                    -> io::Result<Self> {
        let d = Self::default();
        Ok(Hyperboloid {
            a: p.ask("a", "Enter parameter a", d.a)?,
            b: p.ask("b", "Enter parameter b", d.b)?,
            c: p.ask("c", "Enter parameter c", d.c)?,
            u_min: p.ask("u_min", "Enter minimum value of u", d.u_min)?,
            u_max: p.ask("u_max", "Enter maximum value of u", d.u_max)?,
            v_min: p.ask("v_min", "Enter minimum value of v", d.v_min)?,
            v_max: p.ask("v_max", "Enter maximum value of v", d.v_max)?,
            u_steps: p.ask("u_steps", "Enter number of steps in u-direction",
                           d.u_steps)?,
            v_steps: p.ask("v_steps", "Enter number of steps in v-direction",
                           d.v_steps)? })
    }
}

impl Prompted for Spiral {
    fn prompt<R: BufRead, W: Write>(p: &mut Prompter<R, W>)
                                    -> io::Result<Self> {
        let d = Self::default();
        Ok(Spiral {
            pitch: p.ask("pitch", "Enter pitch of the spiral", d.pitch)?,
            radius: p.ask("radius", "Enter radius of the spiral", d.radius)?,
            turns: p.ask("turns", "Enter number of turns", d.turns)?,
            ..d })
    }
}
