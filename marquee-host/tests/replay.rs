use std::time::Duration;

use marquee_core::{CarouselPhase, CarouselSettings, PageVisibility};
use marquee_host::{EventScript, Host, HostReport};

fn settings(items_per_view: usize, auto_advance_ms: u64) -> CarouselSettings {
    CarouselSettings::new(
        items_per_view,
        Duration::from_millis(auto_advance_ms),
        50.0,
    )
    .expect("valid settings")
}

async fn replay(script: &str, settings: CarouselSettings, duration_ms: u64) -> HostReport {
    let script = EventScript::parse_from_str(script, "test").expect("valid script");
    let host = Host::new(settings, &script).expect("host");
    host.run(script.events, Duration::from_millis(duration_ms)).await
}

const ORGANIZERS: &str = r#"
[[carousel]]
key = "organizers"
slides = ["Ada", "Grace", "Edsger", "Barbara", "Donald"]
"#;

#[tokio::test(start_paused = true)]
async fn auto_advance_steps_once_per_interval() {
    let report = replay(ORGANIZERS, settings(2, 1_000), 3_500).await;

    let organizers = report.carousel("organizers").expect("mounted");
    assert_eq!(organizers.position, 3);
    assert_eq!(organizers.transform, "translateX(-150%)");
    assert_eq!(organizers.ticks.applied, 3);
    assert_eq!(organizers.phase, CarouselPhase::Advancing);
    assert_eq!(organizers.timers_started, 1);
    assert_eq!(report.elapsed_ms, 3_500);
}

#[tokio::test(start_paused = true)]
async fn auto_advance_wraps_to_start() {
    // max index 3: ticks at 1..=4s give 1, 2, 3, 0
    let report = replay(ORGANIZERS, settings(2, 1_000), 4_500).await;

    let organizers = report.carousel("organizers").expect("mounted");
    assert_eq!(organizers.position, 0);
    assert_eq!(organizers.ticks.applied, 4);
}

#[tokio::test(start_paused = true)]
async fn hover_pauses_and_resumes() {
    let script = format!(
        r#"{ORGANIZERS}
[[event]]
at = "1500ms"
carousel = "organizers"
action = "hover-enter"

[[event]]
at = "3500ms"
carousel = "organizers"
action = "hover-leave"

[[event]]
at = "3600ms"
carousel = "organizers"
action = "hover-leave"
"#
    );
    let report = replay(&script, settings(2, 1_000), 4_200).await;

    let organizers = report.carousel("organizers").expect("mounted");
    assert_eq!(organizers.position, 1);
    assert_eq!(organizers.ticks.applied, 1);
    assert_eq!(organizers.timers_started, 2);
    assert_eq!(organizers.phase, CarouselPhase::Advancing);
}

#[tokio::test(start_paused = true)]
async fn hidden_page_skips_ticks() {
    let script = format!(
        r#"{ORGANIZERS}
[[event]]
at = "500ms"
action = "hide"

[[event]]
at = "2500ms"
action = "show"
"#
    );
    let report = replay(&script, settings(2, 1_000), 3_200).await;

    let organizers = report.carousel("organizers").expect("mounted");
    assert_eq!(organizers.ticks.skipped_hidden, 2);
    assert_eq!(organizers.ticks.applied, 1);
    assert_eq!(organizers.position, 1);
    assert_eq!(report.visibility, PageVisibility::Visible);
}

#[tokio::test(start_paused = true)]
async fn swipes_and_taps() {
    let script = format!(
        r#"{ORGANIZERS}
[[event]]
at = "200ms"
carousel = "organizers"
action = "swipe"
start_x = 300.0
end_x = 249.0

[[event]]
at = "400ms"
carousel = "organizers"
action = "swipe"
start_x = 100.0
end_x = 150.0

[[event]]
at = "600ms"
carousel = "organizers"
action = "swipe"
start_x = 100.0
end_x = 151.0
"#
    );
    let report = replay(&script, settings(2, 7_000), 900).await;

    let organizers = report.carousel("organizers").expect("mounted");
    // advance to 1, tap, retreat to 0
    assert_eq!(organizers.position, 0);
    assert_eq!(organizers.swipes, 2);
    assert_eq!(organizers.taps, 1);
    assert_eq!(organizers.renders, 3);
}

#[tokio::test(start_paused = true)]
async fn slides_removed_and_added_at_runtime() {
    let script = r#"
[[carousel]]
key = "sponsors"
slides = ["Acme", "Globex", "Initech"]

[[event]]
at = "500ms"
carousel = "sponsors"
action = "remove-slide"

[[event]]
at = "1200ms"
carousel = "sponsors"
action = "add-slide"
label = "Umbrella"
"#;
    let report = replay(script, settings(2, 1_000), 3_000).await;

    let sponsors = report.carousel("sponsors").expect("mounted");
    // re-armed at 1.2s, single tick at 2.2s
    assert_eq!(sponsors.position, 1);
    assert_eq!(sponsors.total_items, 3);
    assert_eq!(sponsors.ticks.applied, 1);
    assert_eq!(sponsors.timers_started, 2);
}

#[tokio::test(start_paused = true)]
async fn carousel_that_fits_never_arms() {
    let script = r#"
[[carousel]]
key = "keynotes"
items_per_view = 3
slides = ["Opening", "Closing"]
"#;
    let report = replay(script, settings(2, 1_000), 5_000).await;

    let keynotes = report.carousel("keynotes").expect("mounted");
    assert_eq!(keynotes.items_per_view, 3);
    assert_eq!(keynotes.phase, CarouselPhase::Idle);
    assert_eq!(keynotes.timers_started, 0);
    assert_eq!(keynotes.position, 0);
}

#[tokio::test(start_paused = true)]
async fn page_unload_stops_replay() {
    let script = format!(
        r#"{ORGANIZERS}
[[carousel]]
key = "sponsors"
slides = ["Acme", "Globex", "Initech"]

[[event]]
at = "300ms"
carousel = "sponsors"
action = "unload"

[[event]]
at = "1500ms"
action = "unload"

[[event]]
at = "2000ms"
carousel = "organizers"
action = "hover-enter"
"#
    );
    let report = replay(&script, settings(2, 1_000), 10_000).await;

    assert!(report.page_unloaded);
    assert_eq!(report.elapsed_ms, 1_500);
    assert_eq!(report.unloaded.len(), 1);
    assert_eq!(report.unloaded[0].as_str(), "sponsors");
    let organizers = report.carousel("organizers").expect("still mounted");
    assert_eq!(organizers.position, 1);
    assert_eq!(organizers.phase, CarouselPhase::Advancing);
}

#[tokio::test(start_paused = true)]
async fn report_serializes_to_json() {
    let report = replay(ORGANIZERS, settings(2, 1_000), 1_500).await;

    let json = serde_json::to_value(&report).expect("serializable");
    let organizers = &json["carousels"][0];
    assert_eq!(organizers["key"], "organizers");
    assert_eq!(organizers["phase"], "advancing");
    assert_eq!(organizers["offset"], -50.0);
    assert_eq!(json["visibility"], "visible");
}

#[tokio::test]
async fn script_loads_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("page.json");
    std::fs::write(
        &path,
        r#"{ "carousel": [{ "key": "organizers", "slides": ["a", "b", "c"] }] }"#,
    )
    .expect("write script");

    let script = EventScript::load(&path).expect("load");
    assert_eq!(script.carousels[0].slides.len(), 3);
    assert!(script.events.is_empty());
}

#[tokio::test]
async fn invalid_per_carousel_override_is_reported() {
    let script = EventScript::parse_from_str(
        r#"
[[carousel]]
key = "broken"
items_per_view = 0
slides = ["a"]
"#,
        "test",
    )
    .expect("parses");

    let err = Host::new(settings(2, 1_000), &script).unwrap_err();
    assert!(err.to_string().contains("broken"), "{err}");
}
