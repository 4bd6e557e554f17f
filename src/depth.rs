#[allow(unused_imports)]
use crate::Rbtree;

// deeper paths than this are folded into the last bucket; a balanced tree
// of usize-addressable nodes never gets there.
const MAX_DEPTH: usize = 256;

/// Depth calculates minimum, maximum, average and percentile of
/// sentinel-reaching path lengths in the [`Rbtree`] tree. Collected by
/// [`Rbtree::validate`].
#[derive(Clone, Debug)]
pub struct Depth {
    samples: usize,
    min: usize,
    max: usize,
    total: usize,
    depths: Vec<u64>,
}

impl Depth {
    pub(crate) fn new() -> Depth {
        Default::default()
    }

    pub(crate) fn sample(&mut self, depth: usize) {
        if self.samples == 0 || depth < self.min {
            self.min = depth
        }
        if depth > self.max {
            self.max = depth
        }
        self.samples += 1;
        self.total += depth;
        self.depths[depth.min(MAX_DEPTH - 1)] += 1;
    }

    /// Return number of leaf paths sampled.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Return the shortest root to sentinel path.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Return the longest root to sentinel path.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Return the average path length, zero when nothing was sampled.
    pub fn mean(&self) -> usize {
        if self.samples == 0 {
            0
        } else {
            self.total / self.samples
        }
    }

    /// Return depth as tuple of percentiles, each tuple provides
    /// (percentile, depth). Only the depths where cumulative coverage
    /// crosses 90, 91 .. 100 percent are reported.
    pub fn percentiles(&self) -> Vec<(u8, usize)> {
        let mut percentiles: Vec<(u8, usize)> = vec![];
        if self.samples == 0 {
            return percentiles;
        }

        let mut acc = 0_u64;
        for (depth, &n) in self.depths.iter().enumerate() {
            if n == 0 {
                continue;
            }
            acc += n;
            let perc = ((acc * 100) / self.samples as u64) as u8;
            let last = percentiles.last().map(|(p, _)| *p);
            if perc >= 90 && last.map_or(true, |p| perc > p) {
                percentiles.push((perc, depth));
            }
        }
        percentiles
    }

    /// Log depth statistics in human readable format.
    pub fn log_summary(&self, prefix: &str) {
        log::info!(
            "{}depth (min, avg, max): {:?}",
            prefix,
            (self.min, self.mean(), self.max)
        );
        for (perc, depth) in self.percentiles().into_iter() {
            log::info!("{}  {} percentile = {}", prefix, perc, depth);
        }
    }

    /// Convert depth statistics to JSON format, useful for plotting.
    pub fn json(&self) -> String {
        let ps: Vec<String> = self
            .percentiles()
            .into_iter()
            .map(|(p, d)| format!("\"{}\": {}", p, d))
            .collect();
        format!(
            "{{ \"samples\": {}, \"min\": {}, \"mean\": {}, \"max\": {}, \"percentiles\": {{ {} }} }}",
            self.samples,
            self.min,
            self.mean(),
            self.max,
            ps.join(", ")
        )
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth {
            samples: 0,
            min: 0,
            max: 0,
            total: 0,
            depths: vec![0; MAX_DEPTH],
        }
    }
}
