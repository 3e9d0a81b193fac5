//! Lunar eclipse catalog records and phase windows.
//!
//! Phase boundaries come from the published durations, centred on the
//! tabulated instant of greatest eclipse. The cone geometry is not used for
//! timing.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ShadowError;

const MINUTES_PER_DAY: f64 = 1440.0;

/// Eclipse classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EclipseKind {
    Penumbral,
    Partial,
    Total,
}

/// One row of the eclipse catalog.
///
/// CSV columns: `greatest_jd, kind, penumbral_min, partial_min, total_min, magnitude`.
/// Missing partial/total durations are empty fields.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LunarEclipseRecord {
    pub greatest_jd: f64,
    pub kind: EclipseKind,
    pub penumbral_min: f64,
    pub partial_min: Option<f64>,
    pub total_min: Option<f64>,
    pub magnitude: f64,
}

/// Parse a catalog from any reader with a header row.
pub fn parse_catalog<R: Read>(reader: R) -> Result<Vec<LunarEclipseRecord>, ShadowError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let records = csv_reader
        .deserialize::<LunarEclipseRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    debug!(records = records.len(), "parsed eclipse catalog");
    Ok(records)
}

/// Read a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<LunarEclipseRecord>, ShadowError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| ShadowError::Io(format!("{}: {e}", path.display())))?;
    parse_catalog(file)
}

/// Closed time interval in Julian Dates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseInterval {
    pub start_jd: f64,
    pub end_jd: f64,
}

impl PhaseInterval {
    fn centred(mid_jd: f64, duration_min: f64) -> Self {
        let half = duration_min / MINUTES_PER_DAY / 2.0;
        Self {
            start_jd: mid_jd - half,
            end_jd: mid_jd + half,
        }
    }

    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd <= self.end_jd
    }

    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }
}

/// Which part of the shadow the Moon is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EclipsePhase {
    Penumbral,
    Partial,
    Total,
}

/// Nested phase windows of one eclipse: total ⊂ partial ⊂ penumbral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipsePhaseWindow {
    pub greatest_jd: f64,
    pub penumbral: Option<PhaseInterval>,
    pub partial: Option<PhaseInterval>,
    pub total: Option<PhaseInterval>,
}

impl EclipsePhaseWindow {
    /// Build the windows from a catalog record.
    ///
    /// Rejects negative or non-finite durations, inner phases longer than
    /// outer ones, and kinds that lack the durations they imply.
    pub fn from_record(rec: &LunarEclipseRecord) -> Result<Self, ShadowError> {
        if !rec.greatest_jd.is_finite() {
            return Err(ShadowError::InvalidRecord("greatest_jd must be finite"));
        }
        let check = |d: Option<f64>| -> Result<Option<f64>, ShadowError> {
            match d {
                Some(v) if !v.is_finite() || v < 0.0 => Err(ShadowError::InvalidRecord(
                    "durations must be finite and non-negative",
                )),
                Some(v) if v == 0.0 => Ok(None),
                other => Ok(other),
            }
        };
        let penumbral = check(Some(rec.penumbral_min))?;
        let partial = check(rec.partial_min)?;
        let total = check(rec.total_min)?;

        match rec.kind {
            EclipseKind::Total if total.is_none() || partial.is_none() => {
                return Err(ShadowError::InvalidRecord(
                    "total eclipse needs partial and total durations",
                ));
            }
            EclipseKind::Partial if partial.is_none() => {
                return Err(ShadowError::InvalidRecord(
                    "partial eclipse needs a partial duration",
                ));
            }
            EclipseKind::Partial if total.is_some() => {
                return Err(ShadowError::InvalidRecord(
                    "partial eclipse cannot have a total duration",
                ));
            }
            EclipseKind::Penumbral if partial.is_some() || total.is_some() => {
                return Err(ShadowError::InvalidRecord(
                    "penumbral eclipse cannot have umbral durations",
                ));
            }
            _ => {}
        }

        let outer = penumbral.unwrap_or(0.0);
        let mid = partial.unwrap_or(0.0);
        let inner = total.unwrap_or(0.0);
        if mid > outer || inner > mid {
            return Err(ShadowError::InvalidRecord(
                "phase durations must nest: total <= partial <= penumbral",
            ));
        }

        let jd = rec.greatest_jd;
        Ok(Self {
            greatest_jd: jd,
            penumbral: penumbral.map(|d| PhaseInterval::centred(jd, d)),
            partial: partial.map(|d| PhaseInterval::centred(jd, d)),
            total: total.map(|d| PhaseInterval::centred(jd, d)),
        })
    }

    /// Deepest phase in progress at `jd`, or `None` outside the eclipse.
    pub fn phase_at(&self, jd: f64) -> Option<EclipsePhase> {
        let inside = |w: &Option<PhaseInterval>| w.is_some_and(|i| i.contains(jd));
        if inside(&self.total) {
            Some(EclipsePhase::Total)
        } else if inside(&self.partial) {
            Some(EclipsePhase::Partial)
        } else if inside(&self.penumbral) {
            Some(EclipsePhase::Penumbral)
        } else {
            None
        }
    }

    /// Ordered contact instants `(label, jd)`: P1, U1, U2, greatest, U3, U4, P4.
    pub fn contacts(&self) -> Vec<(&'static str, f64)> {
        let mut out = Vec::with_capacity(7);
        if let Some(p) = self.penumbral {
            out.push(("penumbral begins", p.start_jd));
        }
        if let Some(p) = self.partial {
            out.push(("partial begins", p.start_jd));
        }
        if let Some(t) = self.total {
            out.push(("total begins", t.start_jd));
        }
        out.push(("greatest eclipse", self.greatest_jd));
        if let Some(t) = self.total {
            out.push(("total ends", t.end_jd));
        }
        if let Some(p) = self.partial {
            out.push(("partial ends", p.end_jd));
        }
        if let Some(p) = self.penumbral {
            out.push(("penumbral ends", p.end_jd));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_record() -> LunarEclipseRecord {
        // 2022-Nov-08 total lunar eclipse.
        LunarEclipseRecord {
            greatest_jd: 2_459_891.960_0,
            kind: EclipseKind::Total,
            penumbral_min: 359.0,
            partial_min: Some(219.0),
            total_min: Some(85.0),
            magnitude: 1.359,
        }
    }

    #[test]
    fn windows_centred_on_greatest() {
        let w = EclipsePhaseWindow::from_record(&total_record()).unwrap();
        let p = w.penumbral.unwrap();
        assert!(((p.start_jd + p.end_jd) / 2.0 - w.greatest_jd).abs() < 1e-9);
        assert!((p.duration_days() * 1440.0 - 359.0).abs() < 1e-6);
    }

    #[test]
    fn phase_lookup() {
        let w = EclipsePhaseWindow::from_record(&total_record()).unwrap();
        assert_eq!(w.phase_at(w.greatest_jd), Some(EclipsePhase::Total));
        assert_eq!(w.phase_at(w.greatest_jd + 60.0 / 1440.0), Some(EclipsePhase::Partial));
        assert_eq!(w.phase_at(w.greatest_jd - 150.0 / 1440.0), Some(EclipsePhase::Penumbral));
        assert_eq!(w.phase_at(w.greatest_jd + 1.0), None);
    }

    #[test]
    fn contacts_are_ordered() {
        let w = EclipsePhaseWindow::from_record(&total_record()).unwrap();
        let c = w.contacts();
        assert_eq!(c.len(), 7);
        for pair in c.windows(2) {
            assert!(pair[0].1 <= pair[1].1, "{:?} after {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn penumbral_only_has_no_umbral_windows() {
        let rec = LunarEclipseRecord {
            greatest_jd: 2_460_000.0,
            kind: EclipseKind::Penumbral,
            penumbral_min: 240.0,
            partial_min: None,
            total_min: None,
            magnitude: -0.1,
        };
        let w = EclipsePhaseWindow::from_record(&rec).unwrap();
        assert!(w.partial.is_none() && w.total.is_none());
        assert_eq!(w.contacts().len(), 3);
    }

    #[test]
    fn rejects_inverted_nesting() {
        let mut rec = total_record();
        rec.total_min = Some(300.0);
        assert!(EclipsePhaseWindow::from_record(&rec).is_err());
    }

    #[test]
    fn rejects_kind_mismatch() {
        let mut rec = total_record();
        rec.kind = EclipseKind::Partial;
        assert!(EclipsePhaseWindow::from_record(&rec).is_err());
        rec.total_min = None;
        assert!(EclipsePhaseWindow::from_record(&rec).is_ok());
    }

    #[test]
    fn parses_csv_with_empty_fields() {
        let data = "greatest_jd,kind,penumbral_min,partial_min,total_min,magnitude\n\
                    2459891.96,total,359,219,85,1.359\n\
                    2460000.00,penumbral, 240 ,,,-0.1\n";
        let recs = parse_catalog(data.as_bytes()).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].kind, EclipseKind::Total);
        assert_eq!(recs[1].partial_min, None);
        assert!((recs[1].penumbral_min - 240.0).abs() < 1e-12);
    }

    #[test]
    fn bad_kind_is_catalog_error() {
        let data = "greatest_jd,kind,penumbral_min,partial_min,total_min,magnitude\n\
                    2459891.96,annular,359,,,0.5\n";
        assert!(matches!(parse_catalog(data.as_bytes()), Err(ShadowError::Catalog(_))));
    }
}
