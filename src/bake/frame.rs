use crate::animation::behavior::eval_behavior;
use crate::animation::entry::eval_entry;
use crate::animation::exit::eval_exit;
use crate::animation::state::{AnimState, CurveCtx, compose};
use crate::bake::prebake::{PrebakedData, WordPlan, exit_tail};
use crate::bake::timeline::{ChunkState, GhostEcho, Keyframe, LetterState};
use crate::beat::cursor::BeatCursor;
use crate::beat::spring::{GlowBudget, Spring};
use crate::foundation::core::Point;
use crate::foundation::math::{clamp01, hash_signed, progress};
use crate::scene::atmosphere::particles_at;
use crate::scene::camera::CameraRig;
use crate::words::meta::WordMetaEntry;
use crate::words::phrase::PhraseGroup;

/// Ghost echoes trail this many frames apart.
const GHOST_STEP_FRAMES: u64 = 3;
const GHOST_ALPHAS: [f64; 3] = [0.35, 0.2, 0.1];
/// Scale pulse gain per unit of spring offset.
const SPRING_SCALE_GAIN: f64 = 1.0;
/// Letter scatter reach in font sizes.
const SCATTER_REACH: f64 = 1.5;

#[derive(Clone, Debug, PartialEq)]
/// Mutable state of one bake run, threaded through every frame in order.
pub struct BakeState {
    pub cursor: BeatCursor,
    pub glow: GlowBudget,
    pub spring: Spring,
    pub camera: CameraRig,
}

impl BakeState {
    pub fn new(data: &PrebakedData) -> Self {
        Self {
            cursor: BeatCursor::default(),
            glow: GlowBudget::default(),
            spring: Spring::default(),
            camera: CameraRig::new(data.target_zoom(0)),
        }
    }
}

#[derive(Clone, Copy)]
/// Per-frame inputs shared by every word.
struct FrameCtx {
    frame: u64,
    t: f64,
    beat_phase: f64,
    tension_gain: f64,
}

/// Time of `frame` in song seconds.
pub fn frame_time(data: &PrebakedData, frame: u64) -> f64 {
    data.song_start + data.config.fps.frames_to_secs(frame)
}

/// Intensity multiplier from the tension at `frame`.
fn tension_gain(data: &PrebakedData, frame: u64) -> f64 {
    0.6 + 0.8 * data.tension_at_frame(frame)
}

/// Bake one keyframe.
///
/// Frames must be fed in increasing order with the same `state`; the beat cursor, glow budget,
/// spring and camera zoom all carry over from the previous frame.
pub fn bake_frame(data: &PrebakedData, state: &mut BakeState, frame: u64) -> Keyframe {
    let t = frame_time(data, frame);
    let style = data.style_at_frame(frame);
    let tension = data.tension_at_frame(frame);
    let profile = style.motion.profile();

    if state.cursor.advance(&data.beats, t) > 0 {
        state.glow.trigger();
        state.spring.kick(profile.spring_kick);
    } else {
        state.glow.tick();
    }
    state.spring.step();
    let beat_glow = state.glow.glow();

    let ctx = FrameCtx {
        frame,
        t,
        beat_phase: state.cursor.phase(&data.beats, t),
        tension_gain: tension_gain(data, frame),
    };

    let mut chunks = Vec::new();
    for group in &data.groups {
        if t < group.start || t >= group.end + exit_tail(group, &data.plans) {
            continue;
        }
        for &w in &group.words {
            if let Some(chunk) = word_chunk(data, group, w, &ctx, state.spring.offset, beat_glow) {
                chunks.push(chunk);
            }
        }
    }

    let camera = state.camera.update(
        data.target_zoom(frame),
        state.spring.offset,
        tension,
        t - data.song_start,
    );
    let particles = particles_at(
        style.atmosphere,
        data.config.canvas,
        tension,
        t - data.song_start,
        data.config.max_particles,
    );

    Keyframe {
        frame,
        time_sec: t,
        chunks,
        camera,
        particles,
        texture: *style.texture,
        background: style.palette.background.clone(),
        active_section: data.frame_chapter.get(frame as usize).copied().flatten(),
        active_line: data.line_at_frame(frame),
        beat_index: state.cursor.current(),
        beat_glow,
    }
}

/// Composed transform of one word at time `t`; `None` outside its visible window.
fn word_transform(
    plan: &WordPlan,
    word: &WordMetaEntry,
    group: &PhraseGroup,
    t: f64,
    beat_phase: f64,
    tension_gain: f64,
) -> Option<AnimState> {
    if t < word.start || t >= group.end + plan.exit_secs {
        return None;
    }
    let intensity = plan.intensity * tension_gain;

    let entry_p = progress(t, word.start, plan.entry_secs);
    let mut entry = eval_entry(plan.entry, &CurveCtx::at_progress(entry_p, intensity, plan.seed));
    if plan.letter_sequence && !plan.entry.is_binary() && entry.reveal.is_none() {
        entry.reveal = Some(entry_p);
    }

    let exit = (t >= group.end).then(|| {
        let p = progress(t, group.end, plan.exit_secs);
        eval_exit(plan.exit, &CurveCtx::at_progress(p, intensity, plan.seed))
    });

    let settled = word.start + plan.entry_secs;
    let behavior = if exit.is_none() && t >= settled {
        eval_behavior(
            plan.behavior,
            &CurveCtx {
                progress: 1.0,
                intensity,
                elapsed: t - settled,
                beat_phase,
                seed: plan.seed,
            },
        )
    } else {
        AnimState::IDENTITY
    };

    Some(compose(&entry, &behavior, exit.as_ref()))
}

fn word_chunk(
    data: &PrebakedData,
    group: &PhraseGroup,
    w: usize,
    ctx: &FrameCtx,
    spring_offset: f64,
    beat_glow: f64,
) -> Option<ChunkState> {
    let word = &data.words[w];
    let plan = &data.plans[w];
    let placement = data.placement(group, w)?;

    let anim = word_transform(plan, word, group, ctx.t, ctx.beat_phase, ctx.tension_gain);
    let visible = anim.is_some_and(|a| a.alpha > 0.0);
    let a = anim.unwrap_or(AnimState::with_alpha(0.0));

    let pulse = 1.0 + SPRING_SCALE_GAIN * spring_offset;
    let scale = (a.scale * plan.scale * pulse).max(0.0);
    let glow = (a.glow + plan.glow + beat_glow * plan.beat_glow * f64::from(plan.emphasis) / 5.0)
        .max(0.0);

    let letters = letter_states(plan, &a, placement.font_size);
    let ghosts = if plan.ghost_trail && visible {
        ghost_echoes(data, plan, word, group, ctx.frame, placement.center)
    } else {
        Vec::new()
    };

    Some(ChunkState {
        id: format!("{}-{}", word.line, word.index_in_line),
        text: plan.text.clone(),
        x: placement.center.x + a.offset.x,
        y: placement.center.y + a.offset.y,
        font_size: placement.font_size,
        font_family: plan.font_family.to_string(),
        font_weight: plan.font_weight,
        scale,
        alpha: clamp01(a.alpha),
        color: plan.color.clone(),
        glow,
        skew_x: a.skew_x,
        blur: a.blur,
        rotation: a.rotation,
        entry: plan.entry.tag(),
        behavior: plan.behavior.tag(),
        exit: plan.exit.tag(),
        emitter: plan.emitter.map(str::to_string),
        visible,
        letters,
        ghosts,
    })
}

/// Per-letter scatter offsets and reveal alphas; empty when neither applies.
fn letter_states(plan: &WordPlan, a: &AnimState, font_size: f64) -> Vec<LetterState> {
    if a.scatter <= 0.0 && a.reveal.is_none() {
        return Vec::new();
    }
    let n = plan.text.chars().count() as f64;
    plan.text
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let k = i as u64;
            let reveal = a.reveal.map_or(1.0, |r| clamp01(r * n - i as f64));
            LetterState {
                ch,
                dx: hash_signed(plan.seed, 2 * k + 11) * a.scatter * font_size * SCATTER_REACH,
                dy: hash_signed(plan.seed, 2 * k + 12) * a.scatter * font_size * SCATTER_REACH,
                alpha: clamp01(reveal * (1.0 - a.scatter)),
                rotation: hash_signed(plan.seed, k + 0x200) * a.scatter,
            }
        })
        .collect()
}

/// Re-evaluate the word a few frames back to place its echoes.
///
/// Each echo uses the beat phase and tension of its own frame, so it retraces the pose the word
/// actually had there.
fn ghost_echoes(
    data: &PrebakedData,
    plan: &WordPlan,
    word: &WordMetaEntry,
    group: &PhraseGroup,
    frame: u64,
    center: Point,
) -> Vec<GhostEcho> {
    GHOST_ALPHAS
        .iter()
        .zip(1u64..)
        .filter_map(|(&fade, k)| {
            let past = frame.checked_sub(k * GHOST_STEP_FRAMES)?;
            let t = frame_time(data, past);
            let phase = data.beats.phase_at(t);
            let a = word_transform(plan, word, group, t, phase, tension_gain(data, past))?;
            Some(GhostEcho {
                x: center.x + a.offset.x,
                y: center.y + a.offset.y,
                scale: a.scale * plan.scale,
                alpha: clamp01(a.alpha * fade),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/bake/frame.rs"]
mod tests;
