//! Property-style integration tests for the seating pipeline.
//!
//! These tests drive the public API end-to-end: snapshot JSON →
//! `ResolvedGroups` → `partition` → `FilterState`, across every layout
//! format and a spread of room sizes.

use seatplan_core::{
    o_sizes, partition, t_sizes, u_sizes, AnalysisResult, FilterState, LayoutFormat, Participant,
    ParticipantId, PartitionOptions, ResolvedGroups, ZoneKind,
};

// ── Fixtures ──────────────────────────────────────────────────────────────────

fn participants(n: usize) -> Vec<Participant> {
    (1..=n)
        .map(|i| Participant {
            id: format!("p{i}"),
            name: format!("Guest {i}"),
            company: format!("Company {}", i % 7),
            segment: if i % 2 == 0 { "Tech" } else { "Retail" }.to_string(),
            is_host: i == 1,
            event_name: None,
        })
        .collect()
}

/// Splits the participants into consecutive groups of `size`.
fn groups_of(participants: &[Participant], size: usize) -> Vec<Vec<ParticipantId>> {
    participants
        .chunks(size.max(1))
        .map(|chunk| chunk.iter().map(|p| p.id.clone()).collect())
        .collect()
}

const SIZES: [usize; 14] = [0, 1, 2, 3, 4, 5, 6, 7, 9, 10, 11, 17, 40, 101];

// ── Coverage and determinism ──────────────────────────────────────────────────

#[test]
fn test_every_format_seats_each_resolved_participant_exactly_once() {
    for n in SIZES {
        let people = participants(n);
        let groups = groups_of(&people, 6);
        let seating = ResolvedGroups::resolve(&groups, &people);

        for format in LayoutFormat::ALL {
            let room = partition(format, &seating, &PartitionOptions::default());
            let expected: Vec<&str> = seating.linear().iter().map(|p| p.id.as_str()).collect();
            assert_eq!(room.participant_ids(), expected, "{format} with n={n}");
        }
    }
}

#[test]
fn test_seat_numbers_are_consecutive_from_one() {
    for n in SIZES {
        let people = participants(n);
        let seating = ResolvedGroups::resolve(&groups_of(&people, 5), &people);

        for format in LayoutFormat::ALL {
            let room = partition(format, &seating, &PartitionOptions::default());
            let numbers: Vec<usize> = room.seats().map(|s| s.number).collect();
            assert_eq!(numbers, (1..=n).collect::<Vec<_>>(), "{format} with n={n}");
        }
    }
}

#[test]
fn test_partition_is_deterministic() {
    let people = participants(23);
    let seating = ResolvedGroups::resolve(&groups_of(&people, 4), &people);

    for format in LayoutFormat::ALL {
        let first = partition(format, &seating, &PartitionOptions::default());
        let second = partition(format, &seating, &PartitionOptions::default());
        assert_eq!(first, second, "{format} must be reproducible");
    }
}

// ── Size invariants ───────────────────────────────────────────────────────────

#[test]
fn test_zone_sizes_add_up_to_n() {
    for n in 0..200 {
        let u = u_sizes(n);
        assert_eq!(u.left + u.top + u.right, n, "mesa_u n={n}");
        assert_eq!(u.left, u.right, "mesa_u sides n={n}");

        let t = t_sizes(n);
        assert_eq!(t.top + t.leg, n, "mesa_t n={n}");
        assert!(t.top >= 4usize.min(n), "mesa_t bar n={n}");

        let o = o_sizes(n);
        assert_eq!(o.top + o.right + o.bottom + o.left, n, "mesa_o n={n}");
        assert_eq!(o.right, o.left, "mesa_o sides n={n}");
        assert!(o.top >= o.bottom, "mesa_o top n={n}");
    }
}

#[test]
fn test_u_shape_ten_seats_splits_three_four_three() {
    let people = participants(10);
    let seating = ResolvedGroups::resolve(&groups_of(&people, 10), &people);
    let room = partition(LayoutFormat::UShape, &seating, &PartitionOptions::default());

    assert_eq!(room.zone_len(ZoneKind::Left), 3);
    assert_eq!(room.zone_len(ZoneKind::Top), 4);
    assert_eq!(room.zone_len(ZoneKind::Right), 3);
    assert_eq!(room.seat_count(), 10);
}

#[test]
fn test_empty_hollow_square_has_four_empty_sides() {
    let seating = ResolvedGroups::resolve(&[], &[]);
    let room = partition(LayoutFormat::HollowSquare, &seating, &PartitionOptions::default());

    for side in [ZoneKind::Top, ZoneKind::Right, ZoneKind::Bottom, ZoneKind::Left] {
        assert_eq!(room.zone_len(side), 0);
    }
    assert_eq!(room.seat_count(), 0);
}

#[test]
fn test_banquet_tables_follow_seating_groups() {
    let people = participants(11);
    let seating = ResolvedGroups::resolve(&groups_of(&people, 4), &people);
    let room = partition(LayoutFormat::Banquet, &seating, &PartitionOptions::default());

    let sizes: Vec<usize> = room.zones.iter().map(|z| z.len()).collect();
    assert_eq!(sizes, vec![4, 4, 3]);
    assert_eq!(room.zones[2].kind, ZoneKind::Table(3));
}

#[test]
fn test_grid_column_count_is_configurable() {
    let people = participants(10);
    let seating = ResolvedGroups::resolve(&groups_of(&people, 5), &people);
    let room = partition(
        LayoutFormat::Classroom,
        &seating,
        &PartitionOptions { grid_columns: 4 },
    );

    let sizes: Vec<usize> = room.zones.iter().map(|z| z.len()).collect();
    assert_eq!(sizes, vec![4, 4, 2]);
}

// ── Filtering is orthogonal to partitioning ───────────────────────────────────

#[test]
fn test_filter_changes_never_move_seats() {
    let people = participants(17);
    let seating = ResolvedGroups::resolve(&groups_of(&people, 5), &people);
    let scores = seatplan_core::ScoreIndex::default();

    for format in LayoutFormat::ALL {
        let before = partition(format, &seating, &PartitionOptions::default());
        let filter = FilterState::new().with_segment("Tech").with_min_score(0);
        let mask = filter.mask(&before, &scores);
        let after = partition(format, &seating, &PartitionOptions::default());

        assert_eq!(before, after);
        assert_eq!(mask.len(), after.seat_count());
        assert!(mask.iter().any(|v| *v) && mask.iter().any(|v| !*v));
    }
}

// ── Snapshot-driven scenario ──────────────────────────────────────────────────

const SNAPSHOT: &str = r#"{
    "overallScore": 78.5,
    "summary": "Strong buyer/seller overlap.",
    "participants": [
        {"id": "a", "name": "Ana", "company": "Acme", "segment": "Tech", "isHost": true},
        {"id": "b", "name": "Bruno", "company": "Beta", "segment": "Retail"},
        {"id": "c", "name": "Carla", "company": "Cobalt", "segment": "Tech"},
        {"id": "d", "name": "Davi", "company": "Delta", "segment": "Tech"},
        {"id": "e", "name": "Elisa", "company": "Epsilon", "segment": "Retail"}
    ],
    "individualScores": [
        {"participantId": "a", "score": 40, "potentialConnections": 3, "recommendedConnections": []},
        {"participantId": "b", "score": 90, "potentialConnections": 5, "recommendedConnections": []},
        {"participantId": "c", "score": 70, "potentialConnections": 4, "recommendedConnections": []}
    ],
    "segmentDistribution": [{"name": "Tech", "value": 3}, {"name": "Retail", "value": 2}],
    "suggestedLayout": "mesa_u",
    "seatingGroups": [["a", "b", "c"], ["d", "ghost", "e"]]
}"#;

#[test]
fn test_snapshot_flows_through_the_whole_pipeline() {
    // Arrange
    let analysis: AnalysisResult = serde_json::from_str(SNAPSHOT).expect("snapshot must parse");
    let scores = analysis.score_index();

    // Act
    let seating = ResolvedGroups::resolve(&analysis.seating_groups, &analysis.participants);
    let room = partition(
        analysis.suggested_layout,
        &seating,
        &PartitionOptions::default(),
    );
    let filter = FilterState::new().with_segment("Tech").with_min_score(50);

    // Assert
    assert_eq!(room.participant_ids(), vec!["a", "b", "c", "d", "e"]);
    assert_eq!(seating.dangling_count(), 1);
    assert_eq!(filter.mask(&room, &scores), vec![false, false, true, false, false]);
    assert_eq!(analysis.segments(), vec!["Retail", "Tech"]);
}
