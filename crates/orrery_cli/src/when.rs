//! Parsing and printing of instants for the command line.

use anyhow::{Context, Result, bail};
use orrery_time::{calendar_to_jd, jd_to_calendar};

/// Calendar date `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<(i32, u32, u32)> {
    let parts: Vec<&str> = s.trim().split('-').collect();
    let [y, m, d] = parts.as_slice() else {
        bail!("expected YYYY-MM-DD, got {s:?}");
    };
    let year: i32 = y.parse().with_context(|| format!("bad year in {s:?}"))?;
    let month: u32 = m.parse().with_context(|| format!("bad month in {s:?}"))?;
    let day: u32 = d.parse().with_context(|| format!("bad day in {s:?}"))?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        bail!("date out of range: {s:?}");
    }
    Ok((year, month, day))
}

/// A Julian Date given either as a number or as
/// `YYYY-MM-DD[Thh:mm[:ss]][Z]` in UT.
pub fn parse_when(s: &str) -> Result<f64> {
    let s = s.trim();
    if let Ok(jd) = s.parse::<f64>() {
        return Ok(jd);
    }
    let s = s.trim_end_matches('Z');
    let (date, time) = match s.split_once(['T', ' ']) {
        Some((d, t)) => (d, Some(t)),
        None => (s, None),
    };
    let (year, month, day) = parse_date(date)?;

    let mut hours = 0.0;
    if let Some(time) = time {
        let fields: Vec<f64> = time
            .split(':')
            .map(|f| f.parse::<f64>())
            .collect::<Result<_, _>>()
            .with_context(|| format!("bad time in {s:?}"))?;
        let (h, m, sec) = match fields.as_slice() {
            [h, m] => (*h, *m, 0.0),
            [h, m, sec] => (*h, *m, *sec),
            _ => bail!("expected hh:mm or hh:mm:ss, got {time:?}"),
        };
        if !(0.0..24.0).contains(&h) || !(0.0..60.0).contains(&m) || !(0.0..61.0).contains(&sec)
        {
            bail!("time out of range: {time:?}");
        }
        hours = h + m / 60.0 + sec / 3600.0;
    }
    Ok(calendar_to_jd(year, month, day as f64 + hours / 24.0))
}

/// `YYYY-MM-DD hh:mm` in UT, rounded to the minute.
pub fn format_jd(jd: f64) -> String {
    let jd_min = ((jd + 0.5) * 1440.0).round() / 1440.0 - 0.5;
    let (year, month, day) = jd_to_calendar(jd_min);
    let day_int = day.floor();
    let minutes = (((day - day_int) * 1440.0).round() as i64).clamp(0, 1439);
    format!(
        "{year:04}-{month:02}-{:02} {:02}:{:02}",
        day_int as i64,
        minutes / 60,
        minutes % 60
    )
}
