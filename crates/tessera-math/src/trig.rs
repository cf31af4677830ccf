// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Lookup-table trigonometry.
//!
//! A [`MathContext`] optionally owns a table of `sin` samples over one full
//! period. Table reads:
//! - range-reduce `|angle|` into `[0, 2π)` and restore the sign afterwards
//! - scale into sample space and linearly interpolate between neighbours
//! - derive `cos` as a quarter-period phase shift and `tan` as `sin / cos`
//!
//! Building the table needs `&mut self`; reads only need `&self`, so a built
//! context can be shared freely.

use tracing::debug;

use crate::contract::contract;
use crate::error::MathError;
use crate::scalar::{self, PI_OVER_TWO, TWO_PI};

/// Sample count used by [`MathContext::setup_default_trig_tables`].
pub const DEFAULT_TRIG_TABLE_SIZE: usize = 4096;

#[derive(Debug, Clone)]
struct TrigTable {
    // One extra sample at 2π so interpolation never wraps.
    sin: Vec<f32>,
    factor: f32,
}

impl TrigTable {
    fn build(size: usize) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let n = size as f32;
        let sin = (0..=size)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let angle = TWO_PI * i as f32 / n;
                scalar::sin(angle)
            })
            .collect();
        Self { sin, factor: n / TWO_PI }
    }

    fn size(&self) -> usize {
        self.sin.len() - 1
    }

    fn sin(&self, x: f32) -> f32 {
        if !x.is_finite() {
            return f32::NAN;
        }
        // Reduce |x| and restore the sign so sin(-x) is exactly -sin(x).
        let t = x.abs().rem_euclid(TWO_PI) * self.factor;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let i0 = (t as usize).min(self.size() - 1);
        #[allow(clippy::cast_precision_loss)]
        let frac = t - i0 as f32;
        let y0 = self.sin[i0];
        let y1 = self.sin[i0 + 1];
        let s = y0 + frac * (y1 - y0);
        if x.is_sign_negative() {
            -s
        } else {
            s
        }
    }

    fn cos(&self, x: f32) -> f32 {
        self.sin(x.abs() + PI_OVER_TWO)
    }
}

/// Owner of optional trig acceleration tables.
///
/// ```
/// use tessera_math::MathContext;
/// let mut ctx = MathContext::new();
/// ctx.setup_default_trig_tables()?;
/// assert!((ctx.sin(1.0, true) - 1.0_f32.sin()).abs() < 1e-3);
/// # Ok::<(), tessera_math::MathError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MathContext {
    table: Option<TrigTable>,
}

impl MathContext {
    /// Context without tables; only direct evaluation is available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds tables with `size` samples per period, replacing any previous
    /// tables.
    pub fn setup_trig_tables(&mut self, size: usize) -> Result<(), MathError> {
        if size == 0 {
            return Err(MathError::InvalidTableSize(size));
        }
        self.table = Some(TrigTable::build(size));
        debug!(size, "trig tables ready");
        Ok(())
    }

    /// [`Self::setup_trig_tables`] with [`DEFAULT_TRIG_TABLE_SIZE`].
    pub fn setup_default_trig_tables(&mut self) -> Result<(), MathError> {
        self.setup_trig_tables(DEFAULT_TRIG_TABLE_SIZE)
    }

    /// Releases the tables. Safe to call when none are loaded.
    pub fn unload_trig_tables(&mut self) {
        if let Some(table) = self.table.take() {
            debug!(size = table.size(), "trig tables unloaded");
        }
    }

    /// Whether tables are loaded.
    pub fn has_trig_tables(&self) -> bool {
        self.table.is_some()
    }

    /// Samples per period of the loaded tables.
    pub fn trig_table_size(&self) -> Option<usize> {
        self.table.as_ref().map(TrigTable::size)
    }

    fn table(&self) -> Option<&TrigTable> {
        contract!(
            self.table.is_some(),
            "trig table lookup requested before setup_trig_tables"
        );
        self.table.as_ref()
    }

    /// Sine, through the table when `use_table` is set.
    ///
    /// Requesting the table before it is built is a contract violation; with
    /// checks compiled out the direct path is used instead.
    pub fn sin(&self, x: f32, use_table: bool) -> f32 {
        match use_table.then(|| self.table()).flatten() {
            Some(table) => table.sin(x),
            None => scalar::sin(x),
        }
    }

    /// Cosine, through the table when `use_table` is set.
    pub fn cos(&self, x: f32, use_table: bool) -> f32 {
        match use_table.then(|| self.table()).flatten() {
            Some(table) => table.cos(x),
            None => scalar::cos(x),
        }
    }

    /// Tangent, through the table when `use_table` is set.
    ///
    /// Near odd multiples of π/2 the table path loses precision quickly.
    pub fn tan(&self, x: f32, use_table: bool) -> f32 {
        match use_table.then(|| self.table()).flatten() {
            Some(table) => table.sin(x) / table.cos(x),
            None => scalar::tan(x),
        }
    }
}
