//! Progress reporting for long compressions.
//!
//! Progress is measured in input bytes actually processed. A compression
//! passes over the input twice, once to count and once to pack, so each
//! pass reports its own stage.

/// Pipeline stage a progress report belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Tabulating symbol frequencies.
    Counting,
    /// Packing codes into the output buffer.
    Encoding,
}

impl Stage {
    /// Short human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Counting => "counting",
            Self::Encoding => "encoding",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single progress report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Current stage.
    pub stage: Stage,
    /// Input bytes processed in this stage so far.
    pub processed: u64,
    /// Input length.
    pub total: u64,
}

impl Progress {
    /// Create a progress report.
    pub fn new(stage: Stage, processed: u64, total: u64) -> Self {
        Self {
            stage,
            processed,
            total,
        }
    }

    /// Completed fraction of this stage, in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.processed as f64 / self.total as f64
        }
    }

    /// Overall position across both stages, in bytes out of `2 * total`.
    pub fn overall(&self) -> u64 {
        match self.stage {
            Stage::Counting => self.processed,
            Stage::Encoding => self.total + self.processed,
        }
    }
}
