//! Tests for the drag-session progress tally

#[cfg(test)]
mod tests {
    use tilegrid::io::progress::{DragTally, SessionProgress};

    // Tests that records split into snapped and rejected and advance the bar
    // Verified by counting every drag as snapped
    #[test]
    fn test_hidden_progress_tally() {
        let mut progress = SessionProgress::hidden(4);

        progress.record(true);
        progress.record(false);
        progress.record(true);

        assert_eq!(
            progress.tally(),
            DragTally {
                snapped: 2,
                rejected: 1
            }
        );
        assert_eq!(progress.position(), 3);
        progress.finish();
    }
}
