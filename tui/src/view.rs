//! View Composition
//!
//! Translates the core's surface-agnostic state into terminal rows:
//! a navigation bar, the wrapped page body, and a status line. The
//! content area is dimmed by the guide's fade opacity; the navigation
//! chrome stays at full strength so the active-page indicator reads
//! instantly.

use chrono::Local;
use festejo_core::{days_until_ceremony, Fragment, Guide, Page};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::intro;
use crate::theme;
use crate::widgets::{StyledUnit, TextBlock, TextBlockState};

/// Horizontal padding around the content column
const CONTENT_MARGIN: u16 = 3;

/// Draw one full frame
pub fn draw(frame: &mut Frame, guide: &Guide, scroll: &mut TextBlockState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BACKGROUND)),
        area,
    );

    let [nav_area, content_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(nav_lines(guide, area.width)), nav_area);

    let units = content_units(guide);
    let inner = content_inset(content_area);
    frame.render_stateful_widget(TextBlock::new(&units), inner, scroll);

    frame.render_widget(Paragraph::new(status_line(guide, status_area.width)), status_area);

    // The one-shot overlay paints last, over everything.
    intro::draw(frame, guide);
}

fn content_inset(area: Rect) -> Rect {
    Rect {
        x: area.x + CONTENT_MARGIN,
        y: area.y + 1,
        width: area.width.saturating_sub(CONTENT_MARGIN * 2),
        height: area.height.saturating_sub(1),
    }
}

/// Tab row plus a separator rule
fn nav_lines(guide: &Guide, width: u16) -> Vec<Line<'static>> {
    let t = guide.strings();
    let active = guide.active_nav();

    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
    for page in Page::ALL {
        let label = t.nav_label(page);
        let style = if page == active {
            Style::default()
                .fg(theme::NAV_ACTIVE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::NAV_INACTIVE)
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }

    // Language toggle indicator, right-aligned.
    let toggle = format!("l: {} ", t.lang_toggle);
    let used: usize = spans.iter().map(|span| span.content.width()).sum();
    let pad = (width as usize).saturating_sub(used + toggle.width());
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(Span::styled(toggle, Style::default().fg(theme::MUTED)));

    vec![
        Line::from(spans),
        Line::from(Span::styled(
            "─".repeat(width as usize),
            Style::default().fg(theme::BORDER),
        )),
    ]
}

/// Flatten the rendered page body into styled, wrappable units
fn content_units(guide: &Guide) -> Vec<StyledUnit> {
    let body = guide.body();
    let opacity = guide.opacity();
    let styled = |color: Color| Style::default().fg(theme::faded(color, opacity));

    let mut units: Vec<StyledUnit> = Vec::new();

    if let Some(title) = body.title {
        units.push(StyledUnit::new(
            title,
            styled(theme::GOLD).add_modifier(Modifier::BOLD),
        ));
        units.push(StyledUnit::new(
            "─".repeat(title.width().min(40)),
            styled(theme::BORDER),
        ));
    }

    for block in &body.blocks {
        // The hero block (no headings anywhere) renders centered.
        let centered = body.title.is_none() && block.heading.is_none();
        let unit = |text: String, style: Style| {
            if centered {
                StyledUnit::centered(text, style)
            } else {
                StyledUnit::new(text, style)
            }
        };

        if centered {
            units.push(StyledUnit::blank());
            units.push(StyledUnit::blank());
        }

        if let Some(heading) = block.heading {
            units.push(StyledUnit::blank());
            units.push(StyledUnit::new(
                heading,
                styled(theme::GREEN).add_modifier(Modifier::BOLD),
            ));
        }

        for fragment in &block.fragments {
            match fragment {
                Fragment::Lead(text) => units.push(unit(
                    (*text).to_string(),
                    styled(theme::MUTED).add_modifier(Modifier::ITALIC),
                )),
                Fragment::Title(text) => {
                    units.push(unit(
                        (*text).to_string(),
                        styled(theme::GOLD).add_modifier(Modifier::BOLD),
                    ));
                }
                Fragment::Rule => units.push(unit("─".repeat(24), styled(theme::GOLD))),
                Fragment::Highlight(text) => {
                    units.push(unit((*text).to_string(), styled(theme::GOLD)));
                }
                Fragment::Strong(text) => units.push(unit(
                    (*text).to_string(),
                    styled(theme::BODY).add_modifier(Modifier::BOLD),
                )),
                Fragment::Text(text) => {
                    units.push(unit((*text).to_string(), styled(theme::BODY)));
                }
                Fragment::Note(text) => units.push(unit(
                    (*text).to_string(),
                    styled(theme::MUTED).add_modifier(Modifier::ITALIC),
                )),
                Fragment::Bullet(text) => {
                    units.push(unit(format!("• {text}"), styled(theme::BODY)));
                }
                Fragment::LabelValue(label, value) => units.push(unit(
                    format!("{label}: {value}"),
                    styled(theme::MUTED).add_modifier(Modifier::ITALIC),
                )),
                Fragment::Gap => units.push(StyledUnit::blank()),
            }
        }

        units.push(StyledUnit::blank());
    }

    units
}

/// Key hints left, ceremony countdown right
fn status_line(guide: &Guide, width: u16) -> Line<'static> {
    let t = guide.strings();
    let hints = format!(" {} · {} · {}", t.hint_navigate, t.hint_language, t.hint_quit);

    let countdown = days_until_ceremony(Local::now().date_naive())
        .filter(|days| *days > 0)
        .map(|days| format!("{days} {} ", t.days_to_go));

    let mut spans = vec![Span::styled(
        hints.clone(),
        Style::default().fg(theme::MUTED),
    )];
    if let Some(countdown) = countdown {
        let pad = (width as usize).saturating_sub(hints.width() + countdown.width());
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(countdown, Style::default().fg(theme::GOLD)));
    }

    Line::from(spans)
}
