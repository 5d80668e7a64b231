//! Plain-text rendering of a [`RoomView`] for terminals and logs.
//!
//! Dimmed seats are wrapped in parentheses and hosts are marked with `*`.
//! Grid layouts get a stage marker above the first row.

use std::fmt::Write;

use seatplan_core::{LayoutFormat, ZoneKind};

use crate::application::room_view::{RoomView, SeatView, ZoneView};

/// Renders `view` as a multi-line text block.
pub fn render_text(view: &RoomView) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "Layout: {} ({})",
        view.layout.label,
        view.layout.tag.as_str()
    );
    if view.suggested_layout.tag != view.layout.tag {
        let _ = writeln!(out, "Suggested: {}", view.suggested_layout.label);
    }
    if view.filtered {
        let _ = writeln!(
            out,
            "Filter active: {} of {} seats highlighted",
            view.visible_count, view.seat_count
        );
    }

    if view.seat_count == 0 {
        let _ = writeln!(out, "(no seats)");
        return out;
    }

    if has_stage(view) {
        let _ = writeln!(out, "[ Palco / Tela ]");
    }

    for zone in &view.zones {
        render_zone(&mut out, zone);
    }
    out
}

fn has_stage(view: &RoomView) -> bool {
    matches!(
        view.layout.tag,
        LayoutFormat::Theater | LayoutFormat::Classroom | LayoutFormat::Custom
    )
}

fn render_zone(out: &mut String, zone: &ZoneView) {
    let _ = writeln!(out, "{} ({})", zone.title, zone.seats.len());
    for seat in &zone.seats {
        let _ = writeln!(out, "  {}", seat_line(seat));
    }
    if zone.seats.is_empty() && matches!(zone.zone, ZoneKind::Table(_)) {
        let _ = writeln!(out, "  (empty table)");
    }
}

fn seat_line(seat: &SeatView) -> String {
    let host = if seat.is_host { "*" } else { "" };
    let score = seat
        .score
        .map_or_else(|| "-".to_string(), |s| s.to_string());
    let text = format!(
        "{:>4} {}{} - {} [{}] {}",
        seat.label, seat.name, host, seat.company, seat.segment, score
    );
    if seat.visible {
        text
    } else {
        format!("({text})")
    }
}
