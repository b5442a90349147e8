use super::*;
use tokio::time::Instant;

fn assert_close(actual: Duration, expected: Duration) {
    assert!(
        actual >= expected && actual < expected + Duration::from_millis(5),
        "expected ~{expected:?}, got {actual:?}"
    );
}

#[tokio::test(start_paused = true)]
async fn notification_follows_fixed_timeline() {
    let (notifier, mut events) = Notifier::new();
    let start = Instant::now();

    let id = notifier.show("Guardado", Severity::Info);

    let mut seen = Vec::new();
    while let Some(event) = events.recv().await {
        assert_eq!(event.id, id);
        assert_eq!(event.message, "Guardado");
        seen.push((event.phase, start.elapsed()));
        if event.phase == NotificationPhase::Removed {
            break;
        }
    }

    let phases: Vec<_> = seen.iter().map(|(phase, _)| *phase).collect();
    assert_eq!(
        phases,
        [
            NotificationPhase::Mounted,
            NotificationPhase::Entering,
            NotificationPhase::Exiting,
            NotificationPhase::Removed,
        ]
    );
    assert!(seen[0].1 < ENTRY_DELAY);
    assert_close(seen[1].1, ENTRY_DELAY);
    assert_close(seen[2].1, DISPLAY_DURATION);
    assert_close(seen[3].1, DISPLAY_DURATION + EXIT_ANIMATION);
}

#[tokio::test(start_paused = true)]
async fn error_severity_is_carried_through() {
    let (notifier, mut events) = Notifier::new();
    notifier.show("Falló", Severity::Error);

    let first = events.recv().await.expect("event");
    assert_eq!(first.severity, Severity::Error);
    assert_eq!(first.severity.colour(), "#e74c3c");
}
