use services::{Clock, SessionRegistry, TrackerContext, TrackerMode};
use tracker_core::model::{Level, Status};
use tracker_core::time::fixed_now;

const CATALOG_JSON: &str = r#"[
    {
        "career": "Data Scientist",
        "roadmap": {
            "Beginner": ["Learn Python", "Study statistics"]
        },
        "required_skills": ["Statistics"]
    }
]"#;

#[test]
fn configure_track_and_aggregate() {
    let mut ctx = TrackerContext::new(Clock::fixed(fixed_now()));
    ctx.configure(
        "Data Scientist",
        Level::Beginner,
        vec!["A".to_string(), "B".to_string(), "C".to_string()],
    )
    .expect("configure");

    ctx.set_status("Data Scientist", Level::Beginner, 0, Status::Completed);
    ctx.set_status("Data Scientist", Level::Beginner, 1, Status::InProgress);

    let progress = ctx.active_progress().expect("configured");
    assert_eq!(progress.completed, 1);
    assert_eq!(progress.in_progress, 1);
    assert_eq!(progress.not_started, 1);
    assert_eq!(progress.total, 3);
    assert!((progress.percentage - 100.0 / 3.0).abs() < 1e-9);

    assert_eq!(ctx.mode(), Some(TrackerMode::External));
    assert_eq!(ctx.session().configured_at(), Some(fixed_now()));
}

#[test]
fn catalog_json_to_tracked_progress() {
    let catalog = catalog::from_json_str(CATALOG_JSON).expect("parse catalog");

    let mut ctx = TrackerContext::new(Clock::fixed(fixed_now()));
    let triple = ctx
        .select_from_catalog(&catalog, "Data Scientist", Level::Beginner)
        .expect("select career");
    assert_eq!(triple.tasks(), ["Learn Python", "Study statistics"]);

    assert_eq!(ctx.mode(), Some(TrackerMode::SelfSelected));
    assert!(!ctx.mode().unwrap().is_external());

    ctx.set_status("Data Scientist", Level::Beginner, 1, Status::Completed);
    let progress = ctx.active_progress().expect("configured");
    assert_eq!(progress.completed, 1);
    assert_eq!(progress.total, 2);
    assert_eq!(progress.percentage, 50.0);
}

#[test]
fn selecting_an_unknown_career_keeps_the_session_usable() {
    let catalog = catalog::from_json_str(CATALOG_JSON).expect("parse catalog");

    let mut ctx = TrackerContext::new(Clock::fixed(fixed_now()));
    assert!(
        ctx.select_from_catalog(&catalog, "Unknown", Level::Beginner)
            .is_err()
    );
    assert!(ctx.active().is_none());

    ctx.select_from_catalog(&catalog, "Data Scientist", Level::Beginner)
        .expect("select career");
    assert!(ctx.active().is_some());
}

#[test]
fn registry_hosts_isolated_concurrent_sessions() {
    let mut registry = SessionRegistry::new(Clock::fixed(fixed_now()));
    let alice = registry.open();
    let bob = registry.open();

    let tasks = vec!["A".to_string(), "B".to_string()];
    for id in [alice, bob] {
        registry
            .get_mut(id)
            .expect("open session")
            .configure("Data Scientist", Level::Beginner, tasks.clone())
            .expect("configure");
    }

    registry.get_mut(alice).expect("open session").set_status(
        "Data Scientist",
        Level::Beginner,
        0,
        Status::Completed,
    );

    let alice_progress = registry
        .get(alice)
        .expect("open session")
        .active_progress()
        .expect("configured");
    let bob_progress = registry
        .get(bob)
        .expect("open session")
        .active_progress()
        .expect("configured");

    assert_eq!(alice_progress.completed, 1);
    assert_eq!(bob_progress.completed, 0);

    registry.close(bob);
    assert!(registry.get(bob).is_none());
    assert!(registry.get(alice).is_some());
}
