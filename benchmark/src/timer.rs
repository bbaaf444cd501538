use std::time::Instant;

/// Collects elapsed seconds of repeated runs.
pub struct Timer {
    times: Vec<f64>,
    start: Instant,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    pub fn new() -> Self {
        Self {
            times: vec![],
            start: Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start = Instant::now();
    }

    pub fn stop(&mut self) {
        self.times.push(self.start.elapsed().as_secs_f64());
    }

    pub fn reset(&mut self) {
        self.times.clear();
    }

    /// Drops the fastest and the slowest runs.
    pub fn trim(&mut self) {
        if self.times.len() > 2 {
            self.times.sort_unstable_by(f64::total_cmp);
            self.times.pop();
            self.times.remove(0);
        }
    }

    pub fn min(&self) -> f64 {
        self.times.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.times.iter().copied().fold(0.0, f64::max)
    }

    pub fn average(&self) -> f64 {
        self.times.iter().sum::<f64>() / self.times.len().max(1) as f64
    }
}
