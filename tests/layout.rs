//! 레이아웃 파싱/홀 이름/기둥 집계 회귀 테스트.
use datacenter_pipe_sizer::layout::{
    column_aggregates, make_hall_names, parse_layout, uniform_hall_loads, validate_hall_loads,
    HallLoad, Layout, LayoutError,
};

#[test]
fn parse_layout_valid_formats() {
    let l = parse_layout("4×3×2").expect("unicode separator");
    assert_eq!((l.columns, l.rows, l.floors), (4, 3, 2));

    let l = parse_layout("4x3x2").expect("ascii separator");
    assert_eq!((l.columns, l.rows, l.floors), (4, 3, 2));

    let l = parse_layout("1x1x1").expect("single");
    assert_eq!(l.total_halls(), 1);

    let l = parse_layout("10x15x5").expect("large");
    assert_eq!((l.columns, l.rows, l.floors), (10, 15, 5));
    assert_eq!(l.halls_per_floor(), 150);
}

#[test]
fn parse_layout_tolerates_whitespace() {
    let l = parse_layout("  4 x 3 x 2  ").expect("spaces");
    assert_eq!((l.columns, l.rows, l.floors), (4, 3, 2));
}

#[test]
fn parse_layout_invalid_formats() {
    for invalid in ["4x3", "4x3x2x1", "axbxc", "4x-3x2", "4.5x3x2"] {
        assert!(
            matches!(parse_layout(invalid), Err(LayoutError::InvalidFormat(_))),
            "{invalid} should be rejected"
        );
    }
    assert!(matches!(parse_layout(""), Err(LayoutError::Empty)));
    assert!(matches!(
        parse_layout("4x0x2"),
        Err(LayoutError::NonPositiveDimension)
    ));
}

#[test]
fn hall_names_without_floors() {
    let layout = Layout {
        columns: 2,
        rows: 2,
        floors: 1,
    };
    assert_eq!(
        make_hall_names(&layout, false),
        vec!["A1", "A2", "B1", "B2"]
    );
}

#[test]
fn hall_names_with_floors() {
    let layout = Layout {
        columns: 2,
        rows: 2,
        floors: 2,
    };
    assert_eq!(
        make_hall_names(&layout, true),
        vec!["A1-F1", "A2-F1", "B1-F1", "B2-F1", "A1-F2", "A2-F2", "B1-F2", "B2-F2"]
    );
}

#[test]
fn hall_names_past_column_z() {
    let layout = Layout {
        columns: 28,
        rows: 1,
        floors: 1,
    };
    let names = make_hall_names(&layout, false);
    assert_eq!(names[0], "A1");
    assert_eq!(names[25], "Z1");
    assert_eq!(names[26], "AA1");
    assert_eq!(names[27], "AB1");
}

#[test]
fn single_hall_per_floor() {
    let layout = Layout {
        columns: 1,
        rows: 1,
        floors: 3,
    };
    assert_eq!(
        make_hall_names(&layout, true),
        vec!["A1-F1", "A1-F2", "A1-F3"]
    );
}

#[test]
fn column_aggregation_sums_by_letter() {
    let loads = vec![
        HallLoad { hall: "A1-F1".into(), it_load_mw: 5.0 },
        HallLoad { hall: "A2-F1".into(), it_load_mw: 3.0 },
        HallLoad { hall: "B1-F1".into(), it_load_mw: 4.0 },
        HallLoad { hall: "B2-F1".into(), it_load_mw: 2.0 },
        HallLoad { hall: "A1-F2".into(), it_load_mw: 5.0 },
        HallLoad { hall: "B1-F2".into(), it_load_mw: 4.0 },
    ];
    let aggregates = column_aggregates(&loads);
    assert_eq!(aggregates.len(), 2);

    assert_eq!(aggregates[0].column, "A");
    assert!((aggregates[0].total_mw - 13.0).abs() < 1e-9);
    assert_eq!(aggregates[0].hall_count, 3);
    assert_eq!(aggregates[0].halls, "A1-F1, A1-F2, A2-F1");

    assert_eq!(aggregates[1].column, "B");
    assert!((aggregates[1].total_mw - 10.0).abs() < 1e-9);
    assert_eq!(aggregates[1].hall_count, 3);
}

#[test]
fn column_aggregation_handles_plain_names() {
    let loads = vec![
        HallLoad { hall: "A1".into(), it_load_mw: 1.5 },
        HallLoad { hall: "A2".into(), it_load_mw: 2.5 },
    ];
    let aggregates = column_aggregates(&loads);
    assert_eq!(aggregates.len(), 1);
    assert_eq!(aggregates[0].column, "A");
    assert!((aggregates[0].total_mw - 4.0).abs() < 1e-9);
}

#[test]
fn empty_hall_list_aggregates_to_empty() {
    assert!(column_aggregates(&[]).is_empty());
}

#[test]
fn uniform_loads_fill_every_hall() {
    let layout = parse_layout("4x3x2").expect("layout");
    let loads = uniform_hall_loads(&layout, true, 1.2);
    assert_eq!(loads.len(), 24);
    assert!(loads.iter().all(|h| (h.it_load_mw - 1.2).abs() < 1e-12));
    validate_hall_loads(&loads).expect("valid");
}

#[test]
fn validation_rejects_bad_data() {
    assert!(matches!(
        validate_hall_loads(&[]),
        Err(LayoutError::EmptyHallData)
    ));
    let negative = vec![HallLoad { hall: "A1".into(), it_load_mw: -1.0 }];
    assert!(matches!(
        validate_hall_loads(&negative),
        Err(LayoutError::NegativeLoad(_))
    ));
    let unnamed = vec![HallLoad { hall: "  ".into(), it_load_mw: 1.0 }];
    assert!(matches!(
        validate_hall_loads(&unnamed),
        Err(LayoutError::UnnamedHall)
    ));
}
