//! Intro Overlay
//!
//! Renders the core's one-shot intro sequence: a full-screen backdrop,
//! a centered mortarboard banner, and the confetti shower. Particle
//! positions come entirely from the core - this module only maps
//! fractional coordinates onto the current viewport, so a resize
//! mid-shower just re-projects the same particles.

use festejo_core::Guide;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::theme;

/// Mortarboard, front and center
const CAP: [&str; 4] = [
    r"   ____________   ",
    r"   \__________/   ",
    r"      |____|      ",
    r"        ))        ",
];

/// Confetti glyphs, assigned per particle index
const GLYPHS: [&str; 5] = ["✦", "❋", "•", "▪", "○"];

/// Draw the overlay if the sequence is visible
pub fn draw(frame: &mut Frame, guide: &Guide) {
    let intro = guide.intro();
    if !intro.is_visible() {
        return;
    }

    let area = frame.area();
    // Erase the page underneath, then repaint the backdrop.
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BACKGROUND)),
        area,
    );

    draw_banner(frame, guide, area);
    draw_confetti(frame, guide, area);
}

fn draw_banner(frame: &mut Frame, guide: &Guide, area: Rect) {
    let t = guide.strings();
    let buf = frame.buffer_mut();

    let banner_height = CAP.len() as u16 + 3;
    let top = area.height.saturating_sub(banner_height) / 2;

    let centered_x = |text: &str| area.x + area.width.saturating_sub(text.width() as u16) / 2;

    for (i, row) in CAP.iter().enumerate() {
        buf.set_string(
            centered_x(row),
            top + i as u16,
            row,
            Style::default().fg(theme::GOLD),
        );
    }

    let title_y = top + CAP.len() as u16 + 1;
    buf.set_string(
        centered_x(t.intro_title),
        title_y,
        t.intro_title,
        Style::default()
            .fg(theme::GOLD)
            .add_modifier(Modifier::BOLD),
    );
    buf.set_string(
        centered_x(t.intro_caption),
        title_y + 1,
        t.intro_caption,
        Style::default().fg(theme::MUTED),
    );
}

fn draw_confetti(frame: &mut Frame, guide: &Guide, area: Rect) {
    let intro = guide.intro();
    let elapsed = intro.elapsed();
    let buf = frame.buffer_mut();

    // Particles travel from one row above the viewport to one row past
    // its bottom, so they enter and leave cleanly.
    let travel = f32::from(area.height) + 2.0;

    for (index, particle) in intro.particles().iter().enumerate() {
        let Some(progress) = particle.progress(elapsed) else {
            continue;
        };

        let row = (progress * travel).floor() as i32 - 1;
        if row < 0 || row >= i32::from(area.height) {
            continue;
        }

        let col = ((particle.x * f32::from(area.width)) as u16).min(area.width.saturating_sub(1));
        let glyph = GLYPHS[index % GLYPHS.len()];
        let color = theme::CONFETTI[index % theme::CONFETTI.len()];

        buf.set_string(
            area.x + col,
            area.y + row as u16,
            glyph,
            Style::default().fg(color),
        );
    }
}
