use crate::bake::config::BakeConfig;
use crate::bake::frame::{BakeState, bake_frame};
use crate::bake::prebake::PrebakedData;
use crate::bake::timeline::{Keyframe, Timeline};
use crate::foundation::error::BakeResult;
use crate::layout::measure::{GlyphWidthEstimator, TextMeasure};
use crate::payload::model::Payload;

/// Bake `payload` in one call using the built-in glyph-width estimator.
pub fn bake(payload: &Payload, config: &BakeConfig) -> BakeResult<Timeline> {
    bake_with(payload, config, &mut GlyphWidthEstimator, None)
}

/// Bake `payload` in one call with a caller-chosen measurer.
///
/// `progress` receives `frames_done / frame_count` every `config.progress_every` frames and a
/// final `1.0`. Values never decrease.
#[tracing::instrument(skip_all, fields(lines = payload.lines.len()))]
pub fn bake_with(
    payload: &Payload,
    config: &BakeConfig,
    measure: &mut dyn TextMeasure,
    mut progress: Option<&mut dyn FnMut(f64)>,
) -> BakeResult<Timeline> {
    let data = PrebakedData::build(payload, config, measure)?;
    let mut state = BakeState::new(&data);
    let total = data.frame_count;
    let every = config.progress_every.max(1);

    let mut keyframes = Vec::with_capacity(total as usize);
    for frame in 0..total {
        keyframes.push(bake_frame(&data, &mut state, frame));
        let done = frame + 1;
        if done % every == 0
            && done < total
            && let Some(cb) = progress.as_deref_mut()
        {
            cb(done as f64 / total as f64);
        }
    }
    if let Some(cb) = progress {
        cb(1.0);
    }

    tracing::debug!(frames = total, "bake complete");
    Ok(into_timeline(&data, keyframes))
}

fn into_timeline(data: &PrebakedData, keyframes: Vec<Keyframe>) -> Timeline {
    Timeline {
        fps: data.config.fps,
        frame_count: data.frame_count,
        song_start: data.song_start,
        song_end: data.song_end,
        keyframes,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Outcome of one [`ChunkedBake::step`].
pub enum BakeStep {
    /// More batches remain.
    Pending { done: u64, total: u64 },
    /// Every frame has been baked.
    Done,
}

/// Resumable bake that produces frames in fixed-size batches.
///
/// The host calls [`step`](Self::step) and is free to do other work between calls. Dropping the
/// value abandons the bake; nothing needs cleaning up. The result is identical to [`bake_with`]
/// for any batch size.
pub struct ChunkedBake {
    data: PrebakedData,
    state: BakeState,
    keyframes: Vec<Keyframe>,
    next_frame: u64,
    batch_frames: u64,
}

impl ChunkedBake {
    /// Prebake `payload`; no frames are produced until the first [`step`](Self::step).
    #[tracing::instrument(skip_all, fields(lines = payload.lines.len()))]
    pub fn new(
        payload: &Payload,
        config: &BakeConfig,
        measure: &mut dyn TextMeasure,
    ) -> BakeResult<Self> {
        let data = PrebakedData::build(payload, config, measure)?;
        let state = BakeState::new(&data);
        Ok(Self {
            keyframes: Vec::with_capacity(data.frame_count as usize),
            batch_frames: config.chunk_frames.max(1),
            data,
            state,
            next_frame: 0,
        })
    }

    /// Override the batch size from the config.
    pub fn with_batch_frames(mut self, frames: u64) -> Self {
        self.batch_frames = frames.max(1);
        self
    }

    pub fn batch_frames(&self) -> u64 {
        self.batch_frames
    }

    pub fn frame_count(&self) -> u64 {
        self.data.frame_count
    }

    pub fn is_done(&self) -> bool {
        self.next_frame >= self.data.frame_count
    }

    /// Fraction of frames baked so far, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.data.frame_count == 0 {
            1.0
        } else {
            self.next_frame as f64 / self.data.frame_count as f64
        }
    }

    /// Bake the next batch.
    pub fn step(&mut self) -> BakeStep {
        let total = self.data.frame_count;
        let end = self.next_frame.saturating_add(self.batch_frames).min(total);
        for frame in self.next_frame..end {
            self.keyframes.push(bake_frame(&self.data, &mut self.state, frame));
        }
        tracing::trace!(from = self.next_frame, to = end, total, "baked batch");
        self.next_frame = end;

        if self.is_done() {
            BakeStep::Done
        } else {
            BakeStep::Pending { done: end, total }
        }
    }

    /// Bake whatever remains and return the timeline.
    pub fn finish(mut self) -> Timeline {
        while self.step() != BakeStep::Done {}
        into_timeline(&self.data, self.keyframes)
    }
}

/// Drive a [`ChunkedBake`] to completion, calling `on_yield` with the progress between batches.
///
/// `on_yield` is the host's chance to interleave other work; it always ends with `1.0`.
pub fn bake_chunked(
    payload: &Payload,
    config: &BakeConfig,
    measure: &mut dyn TextMeasure,
    mut on_yield: impl FnMut(f64),
) -> BakeResult<Timeline> {
    let mut bake = ChunkedBake::new(payload, config, measure)?;
    while let BakeStep::Pending { .. } = bake.step() {
        on_yield(bake.progress());
    }
    on_yield(1.0);
    Ok(bake.finish())
}

#[cfg(test)]
#[path = "../../tests/unit/bake/baker.rs"]
mod tests;
