mod common;

use common::FakeSurface;
use luxe_core::{RevealController, RevealId, Surface};

#[test]
fn top_550_in_800_viewport_is_revealed() {
    assert!(RevealController::should_reveal(550.0, 800.0, 100.0));
    let mut s = FakeSurface::new(800.0, vec![550.0]);
    let n = s.collect_reveals();
    let mut c = RevealController::new(n, 100.0);
    assert_eq!(c.scan(&mut s), vec![RevealId(0)]);
    assert!(c.is_revealed(RevealId(0)));
    assert_eq!(s.revealed, vec![RevealId(0)]);
}

#[test]
fn threshold_boundary_is_exclusive() {
    assert!(!RevealController::should_reveal(700.0, 800.0, 100.0));
    assert!(RevealController::should_reveal(699.9, 800.0, 100.0));
}

#[test]
fn scan_is_idempotent_without_scrolling() {
    let mut s = FakeSurface::new(800.0, vec![100.0, 900.0, 650.0]);
    let n = s.collect_reveals();
    let mut c = RevealController::new(n, 100.0);
    let first = c.scan(&mut s);
    assert_eq!(first, vec![RevealId(0), RevealId(2)]);
    let second = c.scan(&mut s);
    assert!(second.is_empty());
    assert_eq!(c.revealed_count(), 2);
    // Only one surface write per element
    assert_eq!(s.revealed.len(), 2);
}

#[test]
fn revealed_flag_survives_scrolling_back() {
    let mut s = FakeSurface::new(800.0, vec![500.0]);
    let n = s.collect_reveals();
    let mut c = RevealController::new(n, 100.0);
    c.scan(&mut s);
    // Element scrolls back below the fold
    s.tops[0] = 2000.0;
    c.scan(&mut s);
    assert!(c.is_revealed(RevealId(0)));
}

#[test]
fn scrolling_reveals_later_elements() {
    let mut s = FakeSurface::new(800.0, vec![1200.0, 1800.0]);
    let n = s.collect_reveals();
    let mut c = RevealController::new(n, 100.0);
    assert!(c.scan(&mut s).is_empty());
    s.tops = vec![600.0, 1200.0];
    assert_eq!(c.scan(&mut s), vec![RevealId(0)]);
    s.tops = vec![-200.0, 400.0];
    assert_eq!(c.scan(&mut s), vec![RevealId(1)]);
    assert_eq!(c.revealed_count(), c.len());
}

#[test]
fn missing_geometry_is_skipped() {
    let mut s = FakeSurface::new(800.0, vec![10.0]);
    // Registry claims more elements than the surface can measure
    s.collect_reveals();
    let mut c = RevealController::new(3, 100.0);
    assert_eq!(c.scan(&mut s), vec![RevealId(0)]);
    assert!(!c.is_revealed(RevealId(2)));
}
