//! Engine-agnostic metrics for a marching solve.
//!
//! Feature-gated and runtime-toggled to ensure zero overhead when
//! `metrics` is disabled.

#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;
use std::sync::atomic::AtomicBool;

/// Runtime toggle for metrics collection.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Is metrics collection enabled (both compile-time and runtime)?
#[inline]
pub fn is_enabled() -> bool {
  #[cfg(feature = "metrics")]
  {
    COLLECT_METRICS.load(Ordering::Relaxed)
  }
  #[cfg(not(feature = "metrics"))]
  {
    false
  }
}

/// Counters accumulated over a single `solve()` call: how many nodes were
/// finalized, how many local updates were attempted vs. rejected
/// (non-causal, degenerate, or non-improving), and the heap's high-water
/// mark (a proxy for the frontier's peak memory footprint).
#[derive(Debug, Clone, Copy, Default)]
pub struct MarchMetrics {
  pub nodes_finalized: u64,
  pub updates_attempted: u64,
  pub updates_rejected: u64,
  pub heap_high_water_mark: usize,
}

impl MarchMetrics {
  pub fn record_finalized(&mut self) {
    if is_enabled() {
      self.nodes_finalized += 1;
    }
  }

  pub fn record_update(&mut self, accepted: bool) {
    if is_enabled() {
      self.updates_attempted += 1;
      if !accepted {
        self.updates_rejected += 1;
      }
    }
  }

  pub fn observe_heap_size(&mut self, size: usize) {
    if is_enabled() && size > self.heap_high_water_mark {
      self.heap_high_water_mark = size;
    }
  }
}
