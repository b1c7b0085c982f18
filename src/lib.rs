//! Scenebake compiles time-aligned lyric metadata into a frame-indexed animation timeline.
//!
//! The input is a [`Payload`]: lyric lines, optional word timing, a beat grid and a layered
//! cinematic direction. The output is a [`Timeline`] of self-sufficient [`Keyframe`]s at a fixed
//! step, which a renderer plays back without further interpretation.
//!
//! - Load a [`Payload`] (usually from JSON)
//! - Pick a [`BakeConfig`]
//! - Call [`bake`], [`bake_with`] or drive a [`ChunkedBake`]
//!
//! Baking is deterministic: the same payload and config always produce the same timeline, and the
//! chunked driver agrees exactly with the synchronous one.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod bake;
pub(crate) mod beat;
pub(crate) mod direction;
pub(crate) mod layout;
pub(crate) mod payload;
pub(crate) mod scene;
pub(crate) mod style;
pub(crate) mod words;

pub use crate::foundation::core::{Canvas, Fps, Point, Rect, Vec2};
pub use crate::foundation::error::{BakeError, BakeResult};

pub use crate::animation::behavior::{BehaviorStyle, eval_behavior};
pub use crate::animation::ease::Ease;
pub use crate::animation::entry::{EntryStyle, eval_entry};
pub use crate::animation::exit::{ExitStyle, eval_exit};
pub use crate::animation::state::{AnimState, CurveCtx, compose};
pub use crate::bake::baker::{BakeStep, ChunkedBake, bake, bake_chunked, bake_with};
pub use crate::bake::config::BakeConfig;
pub use crate::bake::fingerprint::{TimelineFingerprint, fingerprint_timeline};
pub use crate::bake::frame::{BakeState, bake_frame};
pub use crate::bake::prebake::{PrebakedData, WordPlan};
pub use crate::bake::timeline::{ChunkState, GhostEcho, Keyframe, LetterState, Timeline};
pub use crate::beat::cursor::{BeatCursor, BeatTrack};
pub use crate::beat::spring::{GLOW_TICKS, GlowBudget, Spring};
pub use crate::direction::resolver::{ResolvedPalette, ResolvedStyle, StyleResolver};
pub use crate::layout::measure::{GlyphWidthEstimator, ParleyMeasurer, TextMeasure};
pub use crate::layout::solver::{GroupLayout, LayoutKey, LayoutParams, WordPlacement};
pub use crate::payload::model::{
    BeatGrid, Chapter, CinematicDirection, LyricLine, Payload, SongDefaults, StoryboardBeat,
    StyleOverrides, TensionPoint, WordDirective, WordTiming,
};
pub use crate::scene::atmosphere::Particle;
pub use crate::scene::camera::CameraState;
pub use crate::style::lexicon::normalize_word;
pub use crate::style::tables::{MotionProfile, MotionProfileKind, TextureParams, Typography};
pub use crate::words::meta::{ResolvedDirective, WordMetaEntry, build_word_meta};
pub use crate::words::phrase::{MAX_GROUP_WORDS, MIN_GROUP_SECS, PhraseGroup, build_phrase_groups};
