//! Serializable room map handed to renderers and exporters.
//!
//! A [`RoomView`] is the partition with every seat resolved to display
//! fields and a visibility flag.  It is rebuilt on demand; changing only the
//! filter changes `visible` flags and nothing else.

use seatplan_core::{FilterState, LayoutFormat, Partition, ScoreIndex, Zone, ZoneKind};
use serde::Serialize;

/// A layout tag together with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutDto {
    pub tag: LayoutFormat,
    pub label: &'static str,
}

impl From<LayoutFormat> for LayoutDto {
    fn from(format: LayoutFormat) -> Self {
        Self {
            tag: format,
            label: format.label(),
        }
    }
}

/// One seat, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    pub number: usize,
    pub label: String,
    pub participant_id: String,
    pub name: String,
    pub company: String,
    pub segment: String,
    pub is_host: bool,
    /// `None` when the analysis did not score this participant.
    pub score: Option<u8>,
    pub visible: bool,
}

/// One zone of the room and its seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneView {
    pub zone: ZoneKind,
    pub title: String,
    pub seats: Vec<SeatView>,
}

/// The complete render model for one layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomView {
    pub layout: LayoutDto,
    pub suggested_layout: LayoutDto,
    /// `true` when a filter is active, i.e. some seats may be dimmed.
    pub filtered: bool,
    pub seat_count: usize,
    pub visible_count: usize,
    pub zones: Vec<ZoneView>,
}

impl RoomView {
    /// Builds the view of `partition` under `filter`.
    pub fn build(
        partition: &Partition<'_>,
        suggested: LayoutFormat,
        filter: &FilterState,
        scores: &ScoreIndex,
    ) -> Self {
        let zones: Vec<ZoneView> = partition
            .zones
            .iter()
            .map(|zone| ZoneView {
                zone: zone.kind,
                title: zone_title(zone),
                seats: zone
                    .seats
                    .iter()
                    .map(|seat| {
                        let p = seat.participant;
                        SeatView {
                            number: seat.number,
                            label: partition.seat_label(zone, seat),
                            participant_id: p.id.clone(),
                            name: p.name.clone(),
                            company: p.company.clone(),
                            segment: p.segment.clone(),
                            is_host: p.is_host,
                            score: scores.get(&p.id),
                            visible: filter.is_visible(p, scores),
                        }
                    })
                    .collect(),
            })
            .collect();

        let seats = zones.iter().flat_map(|z| z.seats.iter());
        let seat_count = seats.clone().count();
        let visible_count = seats.filter(|s| s.visible).count();

        Self {
            layout: partition.format.into(),
            suggested_layout: suggested.into(),
            filtered: filter.is_active(),
            seat_count,
            visible_count,
            zones,
        }
    }

    /// All seats in assignment order.
    pub fn seats(&self) -> impl Iterator<Item = &SeatView> {
        self.zones.iter().flat_map(|z| z.seats.iter())
    }
}

fn zone_title(zone: &Zone<'_>) -> String {
    match zone.kind {
        ZoneKind::Table(n) => format!("Mesa {n}"),
        ZoneKind::Row => "Mesa Principal".to_string(),
        ZoneKind::Left => "Lado Esquerdo".to_string(),
        ZoneKind::Top => "Cabeceira".to_string(),
        ZoneKind::Right => "Lado Direito".to_string(),
        ZoneKind::Bottom => "Base".to_string(),
        ZoneKind::Leg => "Haste".to_string(),
        ZoneKind::GridRow(n) => format!("Fileira {n}"),
    }
}
