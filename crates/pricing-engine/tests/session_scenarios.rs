use pricing_engine::{BreakdownRow, Earnings, Event, MarketStatus, Price, Session, SlotKind};

fn approx(price: Price, expected: f64) -> bool {
    match price {
        Price::Value(v) => (v - expected).abs() < 0.005,
        Price::Unset => false,
    }
}

fn edit_monthly(raw: &str) -> Event {
    Event::EditMonthly { raw: raw.to_string() }
}

fn breakdown_rows(session: &Session) -> Vec<BreakdownRow> {
    match session.snapshot().earnings {
        Earnings::Breakdown(rows) => rows,
        Earnings::Summary(_) => panic!("expected expanded earnings"),
    }
}

#[test]
fn test_benchmark_month_scenario() {
    let mut session = Session::default();
    session.apply(&edit_monthly("200"));

    let snapshot = session.snapshot();
    assert!(snapshot.configured);
    assert_eq!(snapshot.daily.value, Price::Value(18.0));
    assert_eq!(snapshot.hybrid.value, Price::Value(97.0));
    assert_eq!(snapshot.status, Some(MarketStatus::Matches));

    let Earnings::Summary(pills) = snapshot.earnings else {
        panic!("expected summary earnings");
    };
    assert_eq!(pills[0].net, Price::Value(12.6));
    assert_eq!(pills[1].net, Price::Value(67.9));
    assert_eq!(pills[2].net, Price::Value(140.0));

    session.apply(&Event::ToggleExpanded);
    let rows = breakdown_rows(&session);

    let daily = &rows[0];
    assert_eq!(daily.slot, SlotKind::Daily);
    assert!(approx(daily.day, 12.60));
    assert!(approx(daily.week, 88.20));
    assert!(approx(daily.month, 383.25));
    assert!(approx(daily.year, 4599.00));

    let hybrid = &rows[1];
    assert!(approx(hybrid.day, 9.70));
    assert!(approx(hybrid.week, 67.90));
    assert!(approx(hybrid.month, 294.23));
    assert!(approx(hybrid.year, 3530.80));

    let monthly = &rows[2];
    assert!(approx(monthly.day, 4.60));
    assert!(approx(monthly.week, 32.31));
    assert!(approx(monthly.month, 140.00));
    assert!(approx(monthly.year, 1680.00));
}

#[test]
fn test_unset_monthly_reports_no_values() {
    let mut session = Session::default();
    session.apply(&Event::Toggle { slot: SlotKind::Daily });
    session.apply(&Event::Toggle { slot: SlotKind::Hybrid });
    session.apply(&Event::EditDaily { raw: "40".to_string() });

    let snapshot = session.snapshot();
    assert!(!snapshot.configured);
    assert_eq!(snapshot.status, None);
    assert!(snapshot.daily.enabled);
    assert!(snapshot.hybrid.enabled);
    assert_eq!(snapshot.daily.value, Price::Value(18.0));
    assert_eq!(snapshot.hybrid.value, Price::Value(97.0));

    let Earnings::Summary(pills) = snapshot.earnings else {
        panic!("expected summary earnings");
    };
    assert!(pills.iter().all(|p| p.net == Price::Unset));

    session.apply(&Event::ToggleExpanded);
    for row in breakdown_rows(&session) {
        assert!(row.cells().iter().all(|c| *c == Price::Unset));
    }
}

#[test]
fn test_toggle_expanded_twice_keeps_values() {
    let mut session = Session::default();
    session.apply(&edit_monthly("200"));
    session.apply(&Event::EditHybrid { raw: "100".to_string() });
    let before = session.snapshot();

    session.apply(&Event::ToggleExpanded);
    session.apply(&Event::ToggleExpanded);

    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_manual_daily_edit_reset_by_new_monthly() {
    let mut session = Session::default();
    session.apply(&edit_monthly("200"));
    session.apply(&Event::EditDaily { raw: "25.00".to_string() });
    assert_eq!(session.snapshot().daily.value, Price::Value(25.0));

    session.apply(&edit_monthly("220"));
    let snapshot = session.snapshot();
    assert_eq!(snapshot.daily.value, Price::Value(19.8));
    assert_eq!(snapshot.hybrid.value, Price::Value(106.7));
}

#[test]
fn test_clearing_monthly_hides_numbers_but_keeps_values() {
    let mut session = Session::default();
    session.apply(&edit_monthly("200"));
    session.apply(&Event::EditDaily { raw: "30".to_string() });
    session.apply(&Event::Toggle { slot: SlotKind::Hybrid });
    session.apply(&edit_monthly(""));

    let snapshot = session.snapshot();
    assert!(!snapshot.configured);
    assert!(snapshot.daily.access.muted);
    assert!(snapshot.hybrid.access.muted);
    assert_eq!(snapshot.daily.value, Price::Value(30.0));
    assert!(!snapshot.hybrid.enabled);

    // Monthly was unset, so entering a price again reseeds the dependents
    session.apply(&edit_monthly("200"));
    let snapshot = session.snapshot();
    assert_eq!(snapshot.daily.value, Price::Value(18.0));
    assert!(snapshot.configured);
}

#[test]
fn test_replayed_events_from_json() {
    let script = r#"[
        {"event": "edit_monthly", "raw": "$150"},
        {"event": "edit_hybrid", "raw": "80"},
        {"event": "toggle", "slot": "daily"},
        {"event": "toggle_expanded"}
    ]"#;
    let events: Vec<Event> = serde_json::from_str(script).unwrap();

    let mut session = Session::default();
    session.apply_all(&events);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.status, Some(MarketStatus::TooLow));
    assert!(!snapshot.daily.enabled);
    assert_eq!(snapshot.hybrid.value, Price::Value(80.0));

    let rows = breakdown_rows(&session);
    assert!(approx(rows[1].week, 56.0));
    assert!(approx(rows[0].day, 9.45));
}

#[test]
fn test_snapshot_serializes_unset_explicitly() {
    let snapshot = Session::default().snapshot();
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["monthly"]["value"]["kind"], "unset");
    assert_eq!(json["earnings"]["mode"], "summary");
    assert_eq!(json["earnings"]["entries"][0]["net"]["kind"], "unset");
}

#[test]
fn test_disabling_monthly_hides_its_edit_row() {
    let mut session = Session::default();
    session.apply(&edit_monthly("200"));
    session.apply(&Event::Toggle { slot: SlotKind::Monthly });

    let snapshot = session.snapshot();
    assert!(!snapshot.monthly.enabled);
    assert!(!snapshot.monthly.access.editable);
    assert_eq!(snapshot.monthly.value, Price::Value(200.0));
    assert!(snapshot.configured);
}
