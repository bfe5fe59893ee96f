//! Pure mapping from effect progress and frame ticks to render parameters.
//!
//! One-shot transition steps map progress (0..1) to column offsets, color
//! interpolation, and brightness pulses. Looping chrome (title pulse,
//! border glow, cursor blink, empty-state bob) derives from the frame tick
//! counter alone.

use ratatui::style::Color;

/// Frame ticks per second the run loop targets. Looping-effect periods
/// below are expressed in ticks of this rate.
pub const TICKS_PER_SECOND: usize = 30;

const TITLE_PULSE_PERIOD: usize = 108; // ~3.6s full cycle
const GLOW_PERIOD: usize = 120; // ~4s full cycle
const CURSOR_BLINK_HALF: usize = 18; // ~600ms on, ~600ms off
const BOB_PERIOD: usize = 120; // ~4s full cycle

#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Decaying horizontal oscillation, in columns. Peaks at ±3.
#[must_use]
pub fn shake_offset(progress: f32) -> i32 {
    let t = progress.clamp(0.0, 1.0);
    let decay = 1.0 - t;
    let oscillations = 4.0;
    let amplitude = 3.0;
    (f32::sin(t * std::f32::consts::TAU * oscillations) * amplitude * decay).round() as i32
}

/// Remaining slide-in distance, in columns, for an entry transition.
#[must_use]
pub fn slide_in_offset(progress: f32, max: u16) -> u16 {
    let t = ease_out_cubic(progress);
    ((1.0 - t) * f32::from(max)).round() as u16
}

/// Small settle overshoot after the slide, in columns.
#[must_use]
pub fn bounce_offset(progress: f32) -> i32 {
    let t = progress.clamp(0.0, 1.0);
    (f32::sin(t * std::f32::consts::PI) * 1.5).round() as i32
}

/// Whether a flash step is currently on its bright half.
///
/// Three brightness pulses across the step, mirroring the source's
/// scale-up/down triplet.
#[must_use]
pub fn flash_bright(progress: f32) -> bool {
    let t = progress.clamp(0.0, 1.0);
    ((t * 3.0) as u32) % 2 == 0
}

/// Linear interpolation between two colors. Non-RGB colors snap at the
/// halfway point.
#[must_use]
pub fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let lerp = |a: u8, b: u8| -> u8 {
                (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
            };
            Color::Rgb(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
        }
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

/// Triangle wave in 0..=1 over `period` ticks.
fn triangle_wave(tick: usize, period: usize) -> f32 {
    if period == 0 {
        return 0.0;
    }
    let phase = (tick % period) as f32 / period as f32;
    if phase < 0.5 {
        phase * 2.0
    } else {
        2.0 - phase * 2.0
    }
}

/// Intensity of the looping title pulse, 0..=1.
#[must_use]
pub fn title_pulse(tick: usize, reduced_motion: bool) -> f32 {
    if reduced_motion {
        return 0.0;
    }
    triangle_wave(tick, TITLE_PULSE_PERIOD)
}

/// Current border color of the looping glow cycle.
#[must_use]
pub fn glow_color(tick: usize, base: Color, glow: Color, reduced_motion: bool) -> Color {
    if reduced_motion {
        return base;
    }
    lerp_color(base, glow, triangle_wave(tick, GLOW_PERIOD) * 0.6)
}

/// Whether the blinking cursor glyph is visible this frame.
#[must_use]
pub fn cursor_visible(tick: usize, reduced_motion: bool) -> bool {
    if reduced_motion {
        return true;
    }
    (tick / CURSOR_BLINK_HALF) % 2 == 0
}

/// Vertical bob of the empty-state hint, 0 or 1 rows.
#[must_use]
pub fn bob_offset(tick: usize, reduced_motion: bool) -> u16 {
    if reduced_motion {
        return 0;
    }
    u16::from(triangle_wave(tick, BOB_PERIOD) > 0.5)
}
