//! Ping-pong buffer pair with generation tracking.

use crate::error::ArenaError;

/// Sweep guard providing read access to the published buffer and write
/// access to the staging buffer.
///
/// Created by [`UtilityArena::begin_sweep()`] and dropped before
/// [`UtilityArena::publish()`]. Holding it borrows the arena mutably, so
/// no other access can observe a half-written staging buffer.
#[must_use]
pub struct SweepGuard<'a> {
    /// Values committed by the previous sweep.
    pub published: &'a [f64],
    /// Buffer receiving this sweep's values.
    pub staging: &'a mut [f64],
}

/// Double-buffered utility storage.
///
/// Both buffers start as copies of the initial values. Cells the solver
/// never writes (walls, terminals) therefore hold their initial value in
/// both buffers forever; cells it does write must be written on every
/// sweep.
#[derive(Clone, Debug)]
pub struct UtilityArena {
    /// Buffer A.
    buffer_a: Vec<f64>,
    /// Buffer B.
    buffer_b: Vec<f64>,
    /// Which buffer is currently staging (false = A staging, true = B staging).
    b_is_staging: bool,
    /// Number of successful publishes.
    generation: u64,
    /// Whether `begin_sweep()` was called and `publish()` not yet.
    sweep_in_progress: bool,
}

impl UtilityArena {
    /// Create an arena whose published buffer holds `initial`.
    ///
    /// Returns `Err(ArenaError::Empty)` if `initial` is empty.
    pub fn new(initial: Vec<f64>) -> Result<Self, ArenaError> {
        if initial.is_empty() {
            return Err(ArenaError::Empty);
        }
        Ok(Self {
            buffer_a: initial.clone(),
            buffer_b: initial,
            // A published at generation 0, so B stages first.
            b_is_staging: true,
            generation: 0,
            sweep_in_progress: false,
        })
    }

    /// Number of cells per buffer.
    pub fn len(&self) -> usize {
        self.buffer_a.len()
    }

    /// Always returns `false`; construction rejects empty buffers.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of sweeps published so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Values committed by the most recent publish.
    pub fn published(&self) -> &[f64] {
        if self.b_is_staging {
            &self.buffer_a
        } else {
            &self.buffer_b
        }
    }

    /// Start a sweep: borrow published for reading and staging for writing.
    ///
    /// Calling this again before [`publish()`](Self::publish) restarts the
    /// sweep; whatever was written to staging is simply overwritten.
    pub fn begin_sweep(&mut self) -> SweepGuard<'_> {
        self.sweep_in_progress = true;
        let (published, staging) = if self.b_is_staging {
            (&self.buffer_a, &mut self.buffer_b)
        } else {
            (&self.buffer_b, &mut self.buffer_a)
        };
        SweepGuard {
            published: published.as_slice(),
            staging: staging.as_mut_slice(),
        }
    }

    /// Discard the in-progress sweep. The published buffer is untouched.
    pub fn abandon(&mut self) {
        self.sweep_in_progress = false;
    }

    /// Make the staging buffer the published one and return the new
    /// generation.
    pub fn publish(&mut self) -> Result<u64, ArenaError> {
        if !self.sweep_in_progress {
            return Err(ArenaError::NoSweepInProgress);
        }
        self.sweep_in_progress = false;
        self.b_is_staging = !self.b_is_staging;
        self.generation += 1;
        Ok(self.generation)
    }

    /// Consume the arena, returning the published buffer.
    pub fn into_published(self) -> Vec<f64> {
        if self.b_is_staging {
            self.buffer_a
        } else {
            self.buffer_b
        }
    }
}
