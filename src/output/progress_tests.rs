use super::*;

#[test]
fn hidden_in_quiet_mode() {
    let progress = ScanProgress::new(100, true);
    progress.inc();
    progress.inc();
    progress.finish();

    assert_eq!(progress.position(), 2);
}

#[test]
fn visible_bar_counts() {
    let progress = ScanProgress::new_with_visibility(3, false, true);

    for _ in 0..3 {
        progress.inc();
    }
    progress.finish();

    assert_eq!(progress.position(), 3);
}

#[test]
fn clones_share_the_counter() {
    let progress = ScanProgress::new(100, true);
    let cloned = progress.clone();

    progress.inc();
    cloned.inc();

    assert_eq!(progress.position(), 2);
}
