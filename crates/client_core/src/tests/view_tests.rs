use super::*;

#[test]
fn fresh_target_is_idle_and_empty() {
    let target = DisplayTarget::new(TargetId::Weather);
    assert_eq!(target.state(), RenderState::Idle);
    assert!(target.content().is_empty());
}

#[test]
fn clear_loading_keeps_content_and_drops_indicator() {
    let mut target = DisplayTarget::new(TargetId::GetGreeting);
    target.set_loading("Enviando petición GET...");
    assert!(target.is_loading());

    target.clear_loading();

    assert_eq!(target.indicator(), None);
    assert_eq!(target.state(), RenderState::Idle);
    assert_eq!(target.content(), "Enviando petición GET...");
}

#[test]
fn clear_loading_does_not_touch_terminal_states() {
    let mut target = DisplayTarget::new(TargetId::Quote);
    target.set_error("❌ Error");
    target.clear_loading();
    assert_eq!(
        target.state(),
        RenderState::Error {
            message: "❌ Error".to_string()
        }
    );
}

#[test]
fn success_and_error_replace_loading() {
    let mut target = DisplayTarget::new(TargetId::PostGreeting);
    target.set_loading("wait");
    target.set_success("done");
    assert!(!target.is_loading());
    assert_eq!(
        target.state(),
        RenderState::Success {
            payload: "done".to_string()
        }
    );

    target.set_loading("again");
    target.set_error("failed");
    assert_eq!(target.indicator(), Some(Indicator::Error));
    assert_eq!(target.content(), "failed");
}

#[test]
fn operations_are_idempotent() {
    let mut once = DisplayTarget::new(TargetId::Weather);
    let mut twice = DisplayTarget::new(TargetId::Weather);

    once.set_loading("m");
    twice.set_loading("m");
    twice.set_loading("m");
    assert_eq!(once, twice);

    once.clear_loading();
    twice.clear_loading();
    twice.clear_loading();
    assert_eq!(once, twice);

    once.set_success("ok");
    twice.set_success("ok");
    twice.set_success("ok");
    assert_eq!(once, twice);

    once.set_error("bad");
    twice.set_error("bad");
    twice.set_error("bad");
    assert_eq!(once, twice);
}

#[test]
fn missing_target_is_an_explicit_error() {
    let mut page = Page::with_targets([TargetId::Weather]);
    assert!(page.target(TargetId::Weather).is_ok());

    let err = page.target_mut(TargetId::Quote).expect_err("quote is absent");
    assert_eq!(err, TargetNotFound(TargetId::Quote));
    assert_eq!(err.to_string(), "display target `quote-result` not found");
}

#[test]
fn page_lists_targets_in_fixed_order() {
    let page = Page::new();
    let ids: Vec<_> = page.targets().map(DisplayTarget::id).collect();
    assert_eq!(ids, TargetId::ALL.to_vec());
}

#[test]
fn name_inputs_are_tracked_per_method() {
    let mut page = Page::new();
    page.set_name_input(HttpMethod::Get, "Ada");
    page.set_name_input(HttpMethod::Post, "Grace");
    assert_eq!(page.name_input(HttpMethod::Get), "Ada");
    assert_eq!(page.name_input(HttpMethod::Post), "Grace");
}
