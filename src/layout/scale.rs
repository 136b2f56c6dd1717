//! Base-10 logarithmic scale with decade-aware tick generation.

use super::format::format_si;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Maps a positive domain `[d0, d1]` onto a pixel range on a log10 axis.
///
/// A collapsed domain (`d0 == d1`) maps every input to the middle of the
/// range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LogScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Pixel position of `value`. Values outside the domain extrapolate.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = (self.domain.0.log10(), self.domain.1.log10());
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 {
            0.5
        } else {
            (value.log10() - d0) / span
        };
        r0 + t * (r1 - r0)
    }

    /// Whether the domain has collapsed to a single value.
    pub fn is_degenerate(&self) -> bool {
        self.domain.0 == self.domain.1
    }

    /// Tick values for roughly `count` ticks.
    ///
    /// Domains spanning fewer than `count` decades get every integer
    /// multiple of each power of ten inside the domain; wider domains get
    /// evenly spaced powers of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut u, mut v) = self.domain;
        let reversed = v < u;
        if reversed {
            std::mem::swap(&mut u, &mut v);
        }
        let n = count as f64;
        let (i, j) = (u.log10(), v.log10());

        let mut ticks = Vec::new();
        if j - i < n {
            if u > 0.0 {
                let (lo, hi) = (i.floor() as i32, j.ceil() as i32);
                'decades: for e in lo..=hi {
                    for k in 1..10 {
                        let k = k as f64;
                        let t = if e < 0 { k / pow10(-e as f64) } else { k * pow10(e as f64) };
                        if t < u {
                            continue;
                        }
                        if t > v {
                            break 'decades;
                        }
                        ticks.push(t);
                    }
                }
            }
            if ticks.len() * 2 < count {
                ticks = linear_ticks(u, v, n);
            }
        } else {
            ticks = linear_ticks(i, j, (j - i).min(n))
                .into_iter()
                .map(pow10)
                .collect();
        }

        if reversed {
            ticks.reverse();
        }
        ticks
    }

    /// Tick label formatter for an axis with `count` ticks.
    ///
    /// Only ticks whose leading digit is small enough get a label; the rest
    /// render as empty strings so minor ticks stay unlabeled.
    pub fn tick_format(&self, count: usize, precision: usize) -> TickFormat {
        let all = self.ticks(10).len() as f64;
        TickFormat {
            max_leading: (10.0 * count as f64 / all).max(1.0),
            precision,
        }
    }
}

/// Label filter and SI formatter produced by [`LogScale::tick_format`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickFormat {
    max_leading: f64,
    precision: usize,
}

impl TickFormat {
    pub fn label(&self, value: f64) -> String {
        let mut leading = value / pow10(round_half_up(value.log10()));
        if leading * 10.0 < 10.0 - 0.5 {
            leading *= 10.0;
        }
        if leading <= self.max_leading {
            format_si(value, self.precision)
        } else {
            String::new()
        }
    }
}

/// `10^x`, exact for integral exponents within f64's exact powers of ten.
fn pow10(x: f64) -> f64 {
    if x.fract() == 0.0 && x.abs() <= 22.0 {
        let p = 10f64.powi(x.abs() as i32);
        if x < 0.0 { 1.0 / p } else { p }
    } else {
        10f64.powf(x)
    }
}

fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// `(i1, i2, inc)`: ticks are `i * inc` for `i1..=i2`, or `i / -inc` when
/// `inc` is negative.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (i1, i2, inc) = if power < 0.0 {
        let scale = 10f64.powf(-power) / factor;
        let mut i1 = round_half_up(start * scale);
        let mut i2 = round_half_up(stop * scale);
        if i1 / scale < start {
            i1 += 1.0;
        }
        if i2 / scale > stop {
            i2 -= 1.0;
        }
        (i1, i2, -scale)
    } else {
        let step = 10f64.powf(power) * factor;
        let mut i1 = round_half_up(start / step);
        let mut i2 = round_half_up(stop / step);
        if i1 * step < start {
            i1 += 1.0;
        }
        if i2 * step > stop {
            i2 -= 1.0;
        }
        (i1, i2, step)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Nicely rounded, evenly spaced values covering `[start, stop]`.
pub fn linear_ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reversed = stop < start;
    let (lo, hi) = if reversed { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count);
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1 + 1.0) as usize;
    let mut ticks: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reversed {
        ticks.reverse();
    }
    ticks
}
