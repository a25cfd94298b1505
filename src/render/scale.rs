use std::collections::HashMap;
use std::hash::Hash;

/// Continuous affine mapping from a numeric domain onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Round step near `(stop - start) / count` of the form 1, 2 or 5 times a
    /// power of ten.
    pub fn tick_step(&self, count: usize) -> f64 {
        let (start, stop) = ordered(self.domain);
        let span = stop - start;
        if span <= 0.0 || count == 0 {
            return 0.0;
        }
        let raw = span / count as f64;
        let power = raw.log10().floor();
        let base = 10f64.powf(power);
        let error = raw / base;
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };
        factor * base
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (start, stop) = ordered(self.domain);
        let step = self.tick_step(count);
        if step == 0.0 {
            return if start.is_finite() { vec![start] } else { vec![] };
        }
        let first = (start / step).ceil() as i64;
        let last = (stop / step).floor() as i64;
        // integer multiples keep 0.1 * 3 from drifting to 0.30000000000000004
        let decimals = tick_decimals(step);
        (first..=last)
            .map(|i| round_to(i as f64 * step, decimals))
            .collect()
    }

    /// Labels for `ticks(count)`, with as many decimals as the step needs.
    pub fn tick_labels(&self, count: usize) -> Vec<(f64, String)> {
        let decimals = tick_decimals(self.tick_step(count));
        self.ticks(count)
            .into_iter()
            .map(|tick| (tick, format_grouped(tick, decimals)))
            .collect()
    }
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn tick_decimals(step: f64) -> usize {
    if step <= 0.0 || step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    }
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Fixed-point formatting with `,` thousands separators.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::new();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    if value < 0.0 && grouped.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.insert(0, '−');
    }
    grouped
}

/// Discrete keys laid out as evenly spaced bands of equal width.
#[derive(Clone, Debug)]
pub struct BandScale<K> {
    domain: Vec<K>,
    index: HashMap<K, usize>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
}

impl<K: Eq + Hash + Clone> BandScale<K> {
    /// Duplicate keys keep their first position.
    pub fn new(domain: impl IntoIterator<Item = K>, range: (f64, f64)) -> Self {
        let mut keys = Vec::new();
        let mut index = HashMap::new();
        for key in domain {
            if !index.contains_key(&key) {
                index.insert(key.clone(), keys.len());
                keys.push(key);
            }
        }
        Self {
            domain: keys,
            index,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
        }
    }

    /// Set inner and outer padding together.
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self.padding_outer = padding;
        self
    }

    pub fn domain(&self) -> &[K] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.domain.len() as f64;
        (r1 - r0) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    fn start(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.domain.len() as f64;
        r0 + ((r1 - r0) - self.step() * (n - self.padding_inner)) * self.align
    }

    /// Left edge of the band for `key`.
    pub fn position(&self, key: &K) -> Option<f64> {
        self.index
            .get(key)
            .map(|&i| self.start() + self.step() * i as f64)
    }

    pub fn center(&self, key: &K) -> Option<f64> {
        self.position(key).map(|x| x + self.bandwidth() / 2.0)
    }
}

/// Discrete keys mapped onto a cycling list of colours.
#[derive(Clone, Debug)]
pub struct OrdinalScale<K> {
    index: HashMap<K, usize>,
    colors: Vec<String>,
}

impl<K: Eq + Hash + Clone> OrdinalScale<K> {
    pub fn new(domain: impl IntoIterator<Item = K>, colors: &[String]) -> Self {
        let mut index = HashMap::new();
        for key in domain {
            let next = index.len();
            index.entry(key).or_insert(next);
        }
        Self {
            index,
            colors: colors.to_vec(),
        }
    }

    pub fn color(&self, key: &K) -> Option<&str> {
        if self.colors.is_empty() {
            return None;
        }
        let i = *self.index.get(key)?;
        Some(self.colors[i % self.colors.len()].as_str())
    }
}
