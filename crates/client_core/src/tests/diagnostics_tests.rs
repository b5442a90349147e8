use super::*;

#[tokio::test]
async fn report_is_delivered_with_timestamp() {
    let (diagnostics, mut reports) = Diagnostics::new();
    let before = Utc::now();

    diagnostics.report(DiagnosticKind::UncaughtError, "boom");

    let report = reports.recv().await.expect("report");
    assert_eq!(report.kind, DiagnosticKind::UncaughtError);
    assert_eq!(report.message, "boom");
    assert!(report.at >= before);
}

#[tokio::test]
async fn panicking_task_is_reported_as_unhandled_rejection() {
    let (diagnostics, mut reports) = Diagnostics::new();
    let handle = tokio::spawn(async {
        panic!("dispatch exploded");
    });

    diagnostics.watch(handle, "weather");

    let report = reports.recv().await.expect("report");
    assert_eq!(report.kind, DiagnosticKind::UnhandledRejection);
    assert_eq!(report.message, "weather: task panicked");
}

#[tokio::test]
async fn clean_task_produces_no_report() {
    let (diagnostics, mut reports) = Diagnostics::new();
    let handle = tokio::spawn(async {});

    diagnostics.watch(handle, "quote");
    drop(diagnostics);

    assert!(reports.recv().await.is_none());
}
