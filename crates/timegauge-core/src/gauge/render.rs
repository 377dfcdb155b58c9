//! Verb-driven string rendering of gauge durations.
//!
//! `render` expands `%`-prefixed directives in a layout string, leaving
//! everything else untouched. Each directive re-derives its rounding
//! base from the original duration, so adjacent directives are not one
//! consistent decomposition: `%h` and `%m` round independently and can
//! disagree with [`TimeGauge::rounds`] near a rounding edge. That
//! behavior is contractual.

use crate::gauge::interval::{
    round_nanos, total_nanos, TimeGauge, NANOS_PER_HOUR, NANOS_PER_MICRO, NANOS_PER_MILLI,
    NANOS_PER_MIN, NANOS_PER_SEC,
};

/// A single rendering directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `v`: the full duration in its default string form.
    Full,
    /// `h`: hours, from the duration rounded to the nearest hour.
    Hours,
    /// `m`: minutes of the hour, from the duration rounded to the
    /// nearest minute.
    Minutes,
    /// `s`: seconds of the minute, from the duration rounded to the
    /// nearest second.
    Seconds,
    /// `S`: milliseconds, three digits, from the duration rounded to
    /// the nearest millisecond.
    Millis,
    /// `M`: microseconds, three digits, from the duration rounded to
    /// the nearest microsecond.
    Micros,
    /// `n`: nanoseconds, three digits, unrounded.
    Nanos,
}

impl Directive {
    /// Map a verb character to its directive.
    pub fn from_verb(verb: char) -> Option<Self> {
        match verb {
            'v' => Some(Self::Full),
            'h' => Some(Self::Hours),
            'm' => Some(Self::Minutes),
            's' => Some(Self::Seconds),
            'S' => Some(Self::Millis),
            'M' => Some(Self::Micros),
            'n' => Some(Self::Nanos),
            _ => None,
        }
    }
}

impl TimeGauge {
    /// Expand `%`-prefixed directives in `layout`.
    ///
    /// Recognized verbs are `v`, `h`, `m`, `s`, `S`, `M` and `n`; `%%`
    /// is a literal percent sign. An unrecognized verb (or a trailing
    /// lone `%`) expands to nothing.
    pub fn render(&self, layout: &str) -> String {
        let mut out = String::with_capacity(layout.len());
        let mut chars = layout.chars();
        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('%') => out.push('%'),
                Some(verb) => {
                    if let Some(directive) = Directive::from_verb(verb) {
                        out.push_str(&self.render_directive(directive));
                    }
                }
                None => {}
            }
        }
        out
    }

    /// The expansion of a single directive.
    pub fn render_directive(&self, directive: Directive) -> String {
        let nanos = total_nanos(self.duration());
        match directive {
            Directive::Full => self.to_string(),
            Directive::Hours => {
                let n = round_nanos(nanos, NANOS_PER_HOUR);
                (n / NANOS_PER_HOUR).to_string()
            }
            Directive::Minutes => {
                let n = round_nanos(nanos, NANOS_PER_MIN);
                (n % NANOS_PER_HOUR / NANOS_PER_MIN).to_string()
            }
            Directive::Seconds => {
                let (_, _, seconds) = self.rounds();
                seconds.to_string()
            }
            Directive::Millis => {
                let n = round_nanos(nanos, NANOS_PER_MILLI);
                format!("{:03}", n % NANOS_PER_SEC / NANOS_PER_MILLI)
            }
            Directive::Micros => {
                let n = round_nanos(nanos, NANOS_PER_MICRO);
                format!("{:03}", n % NANOS_PER_MILLI / NANOS_PER_MICRO)
            }
            Directive::Nanos => {
                format!("{:03}", self.round_all().nanos)
            }
        }
    }
}
