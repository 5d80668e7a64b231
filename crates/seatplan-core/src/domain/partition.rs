//! Layout partitioning: mapping the seating order onto a room's geometry.
//!
//! Each [`LayoutFormat`] imposes a different adjacency topology.  The
//! partitioner cuts the flattened seating sequence into the zones that
//! topology needs (sides of a U, legs of a T, rows of a grid, ...) or, for
//! round-table formats, seats each seating group at its own table.
//!
//! # Purity
//!
//! [`partition`] is a pure function of `(seating, format, options)`.  It
//! keeps no state between calls and is cheap enough to run on every render.
//!
//! # Zone sizes
//!
//! The split arithmetic is user-visible: seat numbers printed on the room map
//! depend on it, so it must stay exactly as below.
//!
//! | Format | Zones (assignment order) | Sizes for `n` seats |
//! |--------|--------------------------|---------------------|
//! | `buffet`, `recepcao` | one table per group | group sizes |
//! | `conferencia` | row | `n` |
//! | `mesa_u` | left, top, right | `s = ⌊(n − ⌊n/2.5⌋)/2⌋`, `n − 2s`, `s` |
//! | `mesa_t` | top, leg | `t = min(n, max(4, ⌈0.4n⌉))`, `n − t` |
//! | `mesa_o` | top, right, bottom, left | `⌈(n − 2s)/2⌉`, `s`, rest, `s` with `s = ⌊n/4⌋` |
//! | `teatro`, `sala_aula`, `custom` | grid rows | `columns` per row |
//!
//! The `2.5` and `0.4` ratios are evaluated in exact integer form
//! (`⌊2n/5⌋` and `⌈2n/5⌉`), which matches the floating-point results for
//! every `n`.

use serde::Serialize;

use super::analysis::Participant;
use super::flatten::ResolvedGroups;
use super::layout_format::LayoutFormat;

/// Column count of the theater / classroom grid.
pub const DEFAULT_GRID_COLUMNS: usize = 6;

/// Minimum number of seats at the head bar of a T.
pub const T_BAR_MIN_SEATS: usize = 4;

// ── Partition model ───────────────────────────────────────────────────────────

/// Which part of the room a zone represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum ZoneKind {
    /// A round table, numbered from 1 in seating-group order.
    Table(usize),
    /// The single conference row.
    Row,
    Left,
    Top,
    Right,
    Bottom,
    /// The vertical leg of a T.
    Leg,
    /// A theater / classroom row, numbered from 1 nearest the stage.
    GridRow(usize),
}

impl ZoneKind {
    /// Letter prefix for hollow-square seat labels (`T1`, `R1`, `B1`, `L1`).
    fn side_letter(self) -> Option<char> {
        match self {
            ZoneKind::Top => Some('T'),
            ZoneKind::Right => Some('R'),
            ZoneKind::Bottom => Some('B'),
            ZoneKind::Left => Some('L'),
            _ => None,
        }
    }
}

/// One participant assigned to a seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seat<'a> {
    /// 1-based position in the whole seating order.
    pub number: usize,
    /// 1-based position within the seat's zone.
    pub position: usize,
    pub participant: &'a Participant,
}

/// A contiguous run of seats sharing one part of the room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zone<'a> {
    pub kind: ZoneKind,
    pub seats: Vec<Seat<'a>>,
}

impl<'a> Zone<'a> {
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}

/// The geometric assignment for one layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partition<'a> {
    pub format: LayoutFormat,
    pub zones: Vec<Zone<'a>>,
}

impl<'a> Partition<'a> {
    /// Returns the first zone of the given kind.
    pub fn zone(&self, kind: ZoneKind) -> Option<&Zone<'a>> {
        self.zones.iter().find(|z| z.kind == kind)
    }

    /// Number of seats in `kind`, `0` if the zone is absent.
    pub fn zone_len(&self, kind: ZoneKind) -> usize {
        self.zone(kind).map_or(0, Zone::len)
    }

    /// All seats in assignment order.
    pub fn seats(&self) -> impl Iterator<Item = &Seat<'a>> {
        self.zones.iter().flat_map(|z| z.seats.iter())
    }

    pub fn seat_count(&self) -> usize {
        self.zones.iter().map(Zone::len).sum()
    }

    /// Seated participant IDs in assignment order.
    pub fn participant_ids(&self) -> Vec<&'a str> {
        self.seats().map(|s| s.participant.id.as_str()).collect()
    }

    /// The label printed on a seat of `zone`.
    ///
    /// Hollow-square sides are labelled per side (`T1`, `R2`, ...); every
    /// other layout shows the global seat number.
    pub fn seat_label(&self, zone: &Zone<'_>, seat: &Seat<'_>) -> String {
        match (self.format, zone.kind.side_letter()) {
            (LayoutFormat::HollowSquare, Some(letter)) => format!("{letter}{}", seat.position),
            _ => seat.number.to_string(),
        }
    }
}

/// Tunables that do not change the zone arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionOptions {
    /// Seats per grid row; values below 1 are treated as 1.
    pub grid_columns: usize,
}

impl Default for PartitionOptions {
    fn default() -> Self {
        Self {
            grid_columns: DEFAULT_GRID_COLUMNS,
        }
    }
}

// ── Zone size arithmetic ──────────────────────────────────────────────────────

/// Side sizes of a U-shaped table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct USizes {
    pub left: usize,
    pub top: usize,
    pub right: usize,
}

/// Bar and leg sizes of a T-shaped table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TSizes {
    pub top: usize,
    pub leg: usize,
}

/// Side sizes of a hollow-square table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OSizes {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

/// `s = ⌊(n − ⌊n/2.5⌋)/2⌋` on each side, the rest across the top.
pub fn u_sizes(n: usize) -> USizes {
    let side = (n - n * 2 / 5) / 2;
    let top = n - 2 * side;
    USizes {
        left: side,
        top,
        right: n - side - top,
    }
}

/// `max(4, ⌈0.4n⌉)` at the bar, clamped to `n`; the rest down the leg.
pub fn t_sizes(n: usize) -> TSizes {
    let bar = T_BAR_MIN_SEATS.max((2 * n).div_ceil(5)).min(n);
    TSizes {
        top: bar,
        leg: n - bar,
    }
}

/// `⌊n/4⌋` on each of the two parallel sides; top takes the larger half
/// of what remains.
pub fn o_sizes(n: usize) -> OSizes {
    let side = n / 4;
    let across = n - 2 * side;
    let top = across.div_ceil(2);
    OSizes {
        top,
        right: side,
        bottom: across - top,
        left: side,
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// Signature shared by every per-layout partitioning function.
pub type PartitionFn =
    for<'a> fn(&ResolvedGroups<'a>, &PartitionOptions) -> Vec<Zone<'a>>;

/// Format → partitioning function.
const PARTITIONERS: [(LayoutFormat, PartitionFn); 9] = [
    (LayoutFormat::Banquet, partition_tables),
    (LayoutFormat::Reception, partition_tables),
    (LayoutFormat::Conference, partition_row),
    (LayoutFormat::UShape, partition_u),
    (LayoutFormat::TShape, partition_t),
    (LayoutFormat::HollowSquare, partition_o),
    (LayoutFormat::Theater, partition_grid),
    (LayoutFormat::Classroom, partition_grid),
    (LayoutFormat::Custom, partition_grid),
];

/// Returns the partitioning function for `format`.
pub fn partitioner_for(format: LayoutFormat) -> PartitionFn {
    PARTITIONERS
        .iter()
        .find(|(f, _)| *f == format)
        .map_or(partition_grid as PartitionFn, |(_, func)| *func)
}

/// Partitions `seating` into the zones of `format`.
pub fn partition<'a>(
    format: LayoutFormat,
    seating: &ResolvedGroups<'a>,
    options: &PartitionOptions,
) -> Partition<'a> {
    Partition {
        format,
        zones: partitioner_for(format)(seating, options),
    }
}

// ── Per-layout partitioners ───────────────────────────────────────────────────

/// One table per seating group.
pub fn partition_tables<'a>(
    seating: &ResolvedGroups<'a>,
    _options: &PartitionOptions,
) -> Vec<Zone<'a>> {
    let mut number = 0;
    seating
        .groups()
        .iter()
        .enumerate()
        .map(|(idx, group)| Zone {
            kind: ZoneKind::Table(idx + 1),
            seats: group
                .iter()
                .enumerate()
                .map(|(pos, &participant)| {
                    number += 1;
                    Seat {
                        number,
                        position: pos + 1,
                        participant,
                    }
                })
                .collect(),
        })
        .collect()
}

/// The whole sequence at a single table.
pub fn partition_row<'a>(
    seating: &ResolvedGroups<'a>,
    _options: &PartitionOptions,
) -> Vec<Zone<'a>> {
    carve(seating.linear(), &[(ZoneKind::Row, seating.len())])
}

pub fn partition_u<'a>(seating: &ResolvedGroups<'a>, _options: &PartitionOptions) -> Vec<Zone<'a>> {
    let sizes = u_sizes(seating.len());
    carve(
        seating.linear(),
        &[
            (ZoneKind::Left, sizes.left),
            (ZoneKind::Top, sizes.top),
            (ZoneKind::Right, sizes.right),
        ],
    )
}

pub fn partition_t<'a>(seating: &ResolvedGroups<'a>, _options: &PartitionOptions) -> Vec<Zone<'a>> {
    let sizes = t_sizes(seating.len());
    carve(
        seating.linear(),
        &[(ZoneKind::Top, sizes.top), (ZoneKind::Leg, sizes.leg)],
    )
}

pub fn partition_o<'a>(seating: &ResolvedGroups<'a>, _options: &PartitionOptions) -> Vec<Zone<'a>> {
    let sizes = o_sizes(seating.len());
    carve(
        seating.linear(),
        &[
            (ZoneKind::Top, sizes.top),
            (ZoneKind::Right, sizes.right),
            (ZoneKind::Bottom, sizes.bottom),
            (ZoneKind::Left, sizes.left),
        ],
    )
}

/// Left-to-right, top-to-bottom rows of `grid_columns` seats.
pub fn partition_grid<'a>(
    seating: &ResolvedGroups<'a>,
    options: &PartitionOptions,
) -> Vec<Zone<'a>> {
    let columns = options.grid_columns.max(1);
    let n = seating.len();
    let rows = n.div_ceil(columns);
    let plan: Vec<(ZoneKind, usize)> = (0..rows)
        .map(|row| (ZoneKind::GridRow(row + 1), columns.min(n - row * columns)))
        .collect();
    carve(seating.linear(), &plan)
}

/// Cuts `linear` into consecutive zones of the planned sizes.
///
/// Sizes are clamped to what is left, so a plan can never read past the end.
fn carve<'a>(linear: &[&'a Participant], plan: &[(ZoneKind, usize)]) -> Vec<Zone<'a>> {
    let mut offset = 0;
    plan.iter()
        .map(|&(kind, size)| {
            let end = (offset + size).min(linear.len());
            let seats = linear[offset..end]
                .iter()
                .enumerate()
                .map(|(pos, &participant)| Seat {
                    number: offset + pos + 1,
                    position: pos + 1,
                    participant,
                })
                .collect();
            offset = end;
            Zone { kind, seats }
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
