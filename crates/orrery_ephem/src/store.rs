//! In-memory ephemeris tables with Catmull-Rom interpolation.
//!
//! The store is constructed empty and filled by explicit `load` calls.
//! Tables are never mutated by queries, so a loaded store can be shared
//! across threads by reference.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::body::Body;
use crate::catmull_rom::{catmull_rom, catmull_rom_angle};
use crate::error::EphemError;
use crate::layout::EphemerisLayout;
use crate::sample::{ANGLE_CHANNELS, BodySample, CHANNELS, InterpolatedState};

/// Time-ordered samples for one body, stored as parallel arrays.
#[derive(Debug, Clone, Default)]
struct BodyTable {
    jd: Vec<f64>,
    channels: [Vec<f64>; CHANNELS],
}

impl BodyTable {
    fn len(&self) -> usize {
        self.jd.len()
    }

    fn channel_window(&self, ch: usize, idx: [usize; 4]) -> [f64; 4] {
        let c = &self.channels[ch];
        [c[idx[0]], c[idx[1]], c[idx[2]], c[idx[3]]]
    }
}

/// Per-body sample tables.
#[derive(Debug, Clone, Default)]
pub struct EphemerisStore {
    tables: HashMap<Body, BodyTable>,
}

impl EphemerisStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the sample table for `body`.
    ///
    /// Samples must be strictly increasing in Julian Date and there must be
    /// at least two of them.
    pub fn load(&mut self, body: Body, samples: &[BodySample]) -> Result<(), EphemError> {
        if samples.len() < 2 {
            return Err(EphemError::Malformed(format!(
                "{body} table needs at least two samples, got {}",
                samples.len()
            )));
        }

        let mut table = BodyTable::default();
        table.jd.reserve(samples.len());
        for ch in &mut table.channels {
            ch.reserve(samples.len());
        }

        for (i, s) in samples.iter().enumerate() {
            if !s.jd.is_finite() {
                return Err(EphemError::Malformed(format!(
                    "{body} sample {i} has a non-finite Julian Date"
                )));
            }
            if i > 0 && s.jd <= samples[i - 1].jd {
                return Err(EphemError::NonMonotonic { body, index: i });
            }
            table.jd.push(s.jd);
            for (ch, v) in s.channels().into_iter().enumerate() {
                table.channels[ch].push(v);
            }
        }

        debug!(
            body = body.name(),
            samples = table.len(),
            first_jd = table.jd[0],
            last_jd = table.jd[table.len() - 1],
            "loaded ephemeris table"
        );
        self.tables.insert(body, table);
        Ok(())
    }

    /// Split a flat little-endian stream into per-body tables.
    ///
    /// Returns the number of records read. A trailing partial record is an
    /// error, as is an empty stream.
    pub fn load_binary(
        &mut self,
        bytes: &[u8],
        layout: &EphemerisLayout,
    ) -> Result<usize, EphemError> {
        let record_bytes = layout.record_bytes();
        if bytes.is_empty() {
            return Err(EphemError::Malformed("empty ephemeris stream".into()));
        }
        if bytes.len() % record_bytes != 0 {
            return Err(EphemError::Malformed(format!(
                "stream length {} is not a multiple of the {record_bytes}-byte record",
                bytes.len()
            )));
        }

        let n_records = bytes.len() / record_bytes;
        let mut per_body: Vec<Vec<BodySample>> =
            vec![Vec::with_capacity(n_records); layout.bodies().len()];

        for record in bytes.chunks_exact(record_bytes) {
            let mut values = record.chunks_exact(8).map(read_f64_le);
            let jd = values.next().unwrap_or(f64::NAN);
            for samples in per_body.iter_mut() {
                let mut c = [0.0; CHANNELS];
                for slot in &mut c {
                    *slot = values.next().unwrap_or(f64::NAN);
                }
                samples.push(BodySample::from_channels(jd, c));
            }
        }

        for (body, samples) in layout.bodies().iter().zip(per_body.iter()) {
            self.load(*body, samples)?;
        }
        Ok(n_records)
    }

    /// Read a binary ephemeris file from disk. See [`Self::load_binary`].
    pub fn load_file(
        &mut self,
        path: impl AsRef<Path>,
        layout: &EphemerisLayout,
    ) -> Result<usize, EphemError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| EphemError::Io(format!("{}: {e}", path.display())))?;
        self.load_binary(&bytes, layout)
    }

    /// Interpolated state of `body` at `jd`.
    ///
    /// Fails with [`EphemError::OutOfRange`] outside the sampled interval;
    /// never extrapolates.
    pub fn interpolate(&self, body: Body, jd: f64) -> Result<InterpolatedState, EphemError> {
        let table = self.tables.get(&body).ok_or(EphemError::NotLoaded(body))?;
        let n = table.len();
        let first = table.jd[0];
        let last = table.jd[n - 1];

        if !(jd >= first && jd <= last) {
            return Err(EphemError::OutOfRange { body, jd });
        }

        // i1: last sample at or before jd, kept one short of the end so i2 exists.
        let i1 = (table.jd.partition_point(|&t| t <= jd) - 1).min(n - 2);
        let i2 = i1 + 1;
        let i0 = i1.saturating_sub(1);
        let i3 = (i2 + 1).min(n - 1);
        let idx = [i0, i1, i2, i3];

        let t = (jd - table.jd[i1]) / (table.jd[i2] - table.jd[i1]);

        let mut out = [0.0; CHANNELS];
        for (ch, slot) in out.iter_mut().enumerate() {
            let p = table.channel_window(ch, idx);
            *slot = if ANGLE_CHANNELS.contains(&ch) {
                catmull_rom_angle(p, t)
            } else {
                catmull_rom(p, t)
            };
        }

        Ok(InterpolatedState::from_channels(jd, out))
    }

    /// First and last Julian Date of the table for `body`.
    pub fn span(&self, body: Body) -> Option<(f64, f64)> {
        self.tables
            .get(&body)
            .map(|t| (t.jd[0], t.jd[t.len() - 1]))
    }

    /// Bodies with a loaded table, in [`Body`] order.
    pub fn bodies(&self) -> Vec<Body> {
        let mut v: Vec<Body> = self.tables.keys().copied().collect();
        v.sort();
        v
    }

    /// Number of samples for `body`, or 0 if not loaded.
    pub fn sample_count(&self, body: Body) -> usize {
        self.tables.get(&body).map_or(0, BodyTable::len)
    }
}

fn read_f64_le(chunk: &[u8]) -> f64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(chunk);
    f64::from_le_bytes(buf)
}
