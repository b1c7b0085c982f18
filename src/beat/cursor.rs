use crate::payload::model::BeatGrid;

/// Interval assumed when neither the grid nor the tempo gives one (120 bpm).
const FALLBACK_INTERVAL_SECS: f64 = 0.5;
/// Synthesized grids stop here even for absurd tempos.
const MAX_SYNTH_BEATS: usize = 100_000;

#[derive(Clone, Debug, Default, PartialEq)]
/// Sanitized, ascending beat timestamps plus the nominal beat interval.
pub struct BeatTrack {
    pub beats: Vec<f64>,
    /// Nominal seconds per beat, from `bpm` or the mean spacing of `beats`.
    pub interval: f64,
}

impl BeatTrack {
    /// Build a track from the payload grid.
    ///
    /// Non-finite beats are dropped and the rest sorted. An empty list with a positive tempo is
    /// synthesized from `song_start` up to `song_end`.
    pub fn from_grid(grid: &BeatGrid, song_start: f64, song_end: f64) -> Self {
        let bpm_interval = (grid.bpm.is_finite() && grid.bpm > 0.0).then(|| 60.0 / grid.bpm);

        let mut beats: Vec<f64> = grid.beats.iter().copied().filter(|b| b.is_finite()).collect();
        beats.sort_by(f64::total_cmp);
        beats.dedup();

        if beats.is_empty()
            && let Some(step) = bpm_interval
        {
            tracing::debug!(bpm = grid.bpm, "synthesizing beat grid from tempo");
            beats = (0..MAX_SYNTH_BEATS)
                .map(|i| song_start + step * i as f64)
                .take_while(|&b| b <= song_end)
                .collect();
        }

        let interval = bpm_interval
            .or_else(|| {
                let (first, last) = (beats.first()?, beats.last()?);
                (beats.len() > 1).then(|| (last - first) / (beats.len() - 1) as f64)
            })
            .filter(|i| *i > 0.0)
            .unwrap_or(FALLBACK_INTERVAL_SECS);

        Self { beats, interval }
    }

    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }

    /// Beat phase at an arbitrary time, found by binary search.
    ///
    /// Equals [`BeatCursor::phase`] of a cursor advanced to `t`.
    pub fn phase_at(&self, t: f64) -> f64 {
        let crossed = self.beats.partition_point(|&b| b <= t);
        self.phase_since(crossed.checked_sub(1), t)
    }

    /// Position inside the interval that starts at beat `current`, in `[0, 1)`.
    ///
    /// Before the first beat (or without beats) the phase runs off the nominal interval.
    fn phase_since(&self, current: Option<usize>, t: f64) -> f64 {
        let (anchor, interval) = match current {
            Some(i) => {
                let local = self
                    .beats
                    .get(i + 1)
                    .map(|next| next - self.beats[i])
                    .filter(|d| *d > 0.0)
                    .unwrap_or(self.interval);
                (self.beats[i], local)
            }
            None => (self.beats.first().copied().unwrap_or(0.0), self.interval),
        };
        let p = ((t - anchor) / interval).rem_euclid(1.0);
        if p.is_finite() && p < 1.0 { p } else { 0.0 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Forward-only position in a [`BeatTrack`].
///
/// Amortized O(1) per query; never rescans already crossed beats.
pub struct BeatCursor {
    next: usize,
}

impl BeatCursor {
    /// Move past every beat `<= t`; returns how many were crossed by this call.
    pub fn advance(&mut self, track: &BeatTrack, t: f64) -> usize {
        let before = self.next;
        while self.next < track.beats.len() && track.beats[self.next] <= t {
            self.next += 1;
        }
        self.next - before
    }

    /// Index of the most recently crossed beat.
    pub fn current(&self) -> Option<usize> {
        self.next.checked_sub(1)
    }

    /// Position inside the current beat interval, in `[0, 1)`.
    pub fn phase(&self, track: &BeatTrack, t: f64) -> f64 {
        track.phase_since(self.current(), t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/beat/cursor.rs"]
mod tests;
