use planar_measure_core::{compute_report, project, PixelPoint, Projector, Session, WorldPoint};

fn reference_projector() -> Projector {
    Projector::new(640.0, 480.0, 970.0, 1.04)
}

fn session_of(raw: &[(i32, i32)]) -> Session {
    let mut session = Session::new();
    for &(x, y) in raw {
        session.append(PixelPoint::new(x, y));
    }
    session
}

#[test]
fn two_points_right_of_center() {
    let projector = reference_projector();
    let session = session_of(&[(320, 240), (420, 240)]);

    let world: Vec<WorldPoint> = session
        .snapshot()
        .iter()
        .map(|&p| project(p, 640.0, 480.0, 970.0, 1.04))
        .collect();
    assert_eq!(world[0], WorldPoint::new(0.0, 0.0));
    assert!((world[1].x + 100.0 / 970.0 * 1.04).abs() < 1e-12);
    assert_eq!(world[1].y, 0.0);

    let report = compute_report(session.snapshot(), &projector);
    assert_eq!(report.segments.len(), 1);
    assert!((report.segments[0].length - 0.107216).abs() < 1e-6);
    assert_eq!(report.total, report.segments[0].length);
}

#[test]
fn three_point_path_total_is_sum_of_segments() {
    let session = session_of(&[(100, 100), (100, 300), (300, 300)]);
    let report = compute_report(session.snapshot(), &reference_projector());

    assert_eq!(report.segments.len(), 2);
    let sum: f64 = report.segments.iter().map(|s| s.length).sum();
    assert!((report.total - sum).abs() < 1e-12);
    assert!(report.ascending[0].length <= report.ascending[1].length);
    assert_eq!(
        report.to_string().matches("DISTANCE OF LINE SEGMENT").count(),
        4
    );
}

#[test]
fn reset_session_reports_nothing() {
    let mut session = session_of(&[(1, 1), (2, 2), (3, 3)]);
    session.clear();
    let report = compute_report(session.snapshot(), &reference_projector());
    assert!(report.segments.is_empty());
    assert_eq!(report.total, 0.0);

    session.append(PixelPoint::new(4, 4));
    let report = compute_report(session.snapshot(), &reference_projector());
    assert!(report.segments.is_empty());
    assert_eq!(report.total, 0.0);
}

#[test]
fn total_scales_with_depth() {
    let session = session_of(&[(0, 0), (640, 480), (320, 0)]);
    let near = compute_report(session.snapshot(), &Projector::new(640.0, 480.0, 970.0, 1.0));
    let far = compute_report(session.snapshot(), &Projector::new(640.0, 480.0, 970.0, 3.0));
    assert!((far.total - 3.0 * near.total).abs() < 1e-12);
    assert_eq!(
        near.ascending.iter().map(|s| s.start).collect::<Vec<_>>(),
        far.ascending.iter().map(|s| s.start).collect::<Vec<_>>()
    );
}
