use super::*;

const RED: PixelColor = PixelColor::new(255, 0, 0);
const GREEN: PixelColor = PixelColor::new(0, 255, 0);
const BLUE: PixelColor = PixelColor::new(0, 0, 255);

fn ok(name: &str) -> Result<String, NameLookupFailure> {
    Ok(name.to_string())
}

fn failed() -> Result<String, NameLookupFailure> {
    Err(NameLookupFailure("connection refused".into()))
}

// =============================================================
// request_name / debounce
// =============================================================

#[test]
fn new_target_goes_pending_and_arms_timer() {
    let mut r = NameResolver::new(300);
    assert_eq!(r.request_name(RED, 10), Some(310));
    assert_eq!(r.target(), Some(RED));
    assert_eq!(r.state(), &NameState::Pending);
    assert_eq!(r.next_deadline(), Some(310));
}

#[test]
fn same_color_is_a_noop() {
    let mut r = NameResolver::new(300);
    r.request_name(RED, 0);
    assert_eq!(r.request_name(RED, 200), None);
    // The quiet period was not restarted.
    assert_eq!(r.next_deadline(), Some(300));
}

#[test]
fn poll_before_deadline_issues_nothing() {
    let mut r = NameResolver::new(300);
    r.request_name(RED, 0);
    assert_eq!(r.poll(299), None);
    assert_eq!(r.issued(), 0);
}

#[test]
fn burst_of_changes_issues_one_lookup_for_last_color() {
    let mut r = NameResolver::new(300);
    r.request_name(RED, 0);
    r.request_name(GREEN, 50);
    r.request_name(BLUE, 100);
    assert_eq!(r.poll(300), None);
    assert_eq!(r.poll(399), None);
    let ticket = r.poll(400).unwrap();
    assert_eq!(ticket, LookupTicket { id: 1, color: BLUE });
    assert_eq!(r.poll(10_000), None);
    assert_eq!(r.issued(), 1);
}

#[test]
fn pending_stays_pending_while_in_flight() {
    let mut r = NameResolver::new(300);
    r.request_name(RED, 0);
    r.poll(300).unwrap();
    assert_eq!(r.state_for(RED), NameState::Pending);
    assert_eq!(r.next_deadline(), None);
}

// =============================================================
// complete
// =============================================================

#[test]
fn success_resolves_target() {
    let mut r = NameResolver::new(300);
    r.request_name(RED, 0);
    let ticket = r.poll(300).unwrap();
    assert_eq!(r.complete(ticket, ok("Red")), Resolution::Applied(NameState::Resolved("Red".into())));
    assert_eq!(r.state_for(RED), NameState::Resolved("Red".into()));
}

#[test]
fn failure_collapses_to_unknown() {
    let mut r = NameResolver::new(300);
    r.request_name(RED, 0);
    let ticket = r.poll(300).unwrap();
    assert_eq!(r.complete(ticket, failed()), Resolution::Applied(NameState::Unknown));
}

#[test]
fn blank_name_is_unknown() {
    let mut r = NameResolver::new(300);
    r.request_name(RED, 0);
    let ticket = r.poll(300).unwrap();
    assert_eq!(r.complete(ticket, ok("   ")), Resolution::Applied(NameState::Unknown));
}

#[test]
fn name_is_trimmed() {
    let mut r = NameResolver::new(300);
    r.request_name(RED, 0);
    let ticket = r.poll(300).unwrap();
    assert_eq!(r.complete(ticket, ok(" Red\n")), Resolution::Applied(NameState::Resolved("Red".into())));
}

#[test]
fn response_for_superseded_color_is_stale() {
    let mut r = NameResolver::new(300);
    r.request_name(RED, 0);
    let red_ticket = r.poll(300).unwrap();

    r.request_name(GREEN, 350);
    let green_ticket = r.poll(650).unwrap();
    assert_eq!(r.complete(green_ticket, ok("Green")), Resolution::Applied(NameState::Resolved("Green".into())));

    assert_eq!(r.complete(red_ticket, ok("Red")), Resolution::Stale);
    assert_eq!(r.state(), &NameState::Resolved("Green".into()));
    assert_eq!(r.target(), Some(GREEN));
}

#[test]
fn stale_failure_does_not_clobber_pending() {
    let mut r = NameResolver::new(300);
    r.request_name(RED, 0);
    let red_ticket = r.poll(300).unwrap();
    r.request_name(GREEN, 310);
    assert_eq!(r.complete(red_ticket, failed()), Resolution::Stale);
    assert_eq!(r.state_for(GREEN), NameState::Pending);
    assert_eq!(r.next_deadline(), Some(610));
}

#[test]
fn rehover_of_resolved_color_issues_nothing() {
    let mut r = NameResolver::new(300);
    r.request_name(RED, 0);
    let ticket = r.poll(300).unwrap();
    r.complete(ticket, ok("Red"));

    assert_eq!(r.request_name(RED, 1_000), None);
    assert_eq!(r.poll(5_000), None);
    assert_eq!(r.issued(), 1);
    assert_eq!(r.state_for(RED), NameState::Resolved("Red".into()));
}

#[test]
fn late_answer_for_returning_color_cancels_its_timer() {
    let mut r = NameResolver::new(300);
    r.request_name(RED, 0);
    let red_ticket = r.poll(300).unwrap();
    r.request_name(GREEN, 320);
    r.request_name(RED, 340);
    assert_eq!(r.next_deadline(), Some(640));

    assert_eq!(r.complete(red_ticket, ok("Red")), Resolution::Applied(NameState::Resolved("Red".into())));
    assert_eq!(r.next_deadline(), None);
    assert_eq!(r.poll(1_000), None);
    assert_eq!(r.issued(), 1);
}

#[test]
fn state_for_other_color_is_pending() {
    let mut r = NameResolver::new(300);
    r.request_name(RED, 0);
    let ticket = r.poll(300).unwrap();
    r.complete(ticket, ok("Red"));
    assert_eq!(r.state_for(BLUE), NameState::Pending);
}

#[test]
fn default_uses_standard_quiet_period() {
    let mut r = NameResolver::default();
    assert_eq!(r.request_name(RED, 0), Some(DEFAULT_QUIET_PERIOD_MS));
}

#[test]
fn name_state_serializes_tagged() {
    let json = serde_json::to_value(NameState::Resolved("Red".into())).unwrap();
    assert_eq!(json, serde_json::json!({ "state": "resolved", "name": "Red" }));
    let json = serde_json::to_value(NameState::Unknown).unwrap();
    assert_eq!(json, serde_json::json!({ "state": "unknown" }));
}
