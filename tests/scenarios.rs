mod common;

use common::{course, init_tracing, section};
use course_schedule::config::{GeneratorConfig, ScoreWeights};
use course_schedule::models::{BlockedTimeCell, PoolEntry, Weekday};
use course_schedule::scheduler::{has_time_conflict, ScheduleGenerator};
use course_schedule::{can_generate_schedules, generate_schedules};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn coms_227() -> PoolEntry {
    PoolEntry::required(course(
        "coms227",
        "COMS",
        "227",
        "4",
        vec![
            section("s1", "MW", "10:00", "10:50", 20, 20),
            section("s2", "TR", "09:00", "09:50", 5, 20),
        ],
    ))
}

#[test]
fn full_section_is_never_offered() {
    init_tracing();
    let pool = vec![coms_227()];

    let options = generate_schedules(&pool, &[], None);
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].sections.len(), 1);
    assert_eq!(options[0].sections[0].id, "s2");
    assert_eq!(options[0].total_credits, 4);
    assert!(can_generate_schedules(&pool, &[]).valid);
}

#[test]
fn only_open_section_blocked_fails_precheck() {
    init_tracing();
    let pool = vec![coms_227()];
    let blocked = [BlockedTimeCell::new(Weekday::Tuesday, 9, 0)];

    let report = can_generate_schedules(&pool, &blocked);
    assert!(!report.valid);
    assert!(report.error.as_deref().is_some_and(|e| e.contains("COMS 227")));
    assert!(generate_schedules(&pool, &blocked, None).is_empty());
}

#[test]
fn section_without_end_time_is_still_offered() {
    init_tracing();
    let mut open_ended = section("s1", "MW", "10:00", "10:50", 0, 30);
    open_ended.end_time = None;
    let pool = vec![PoolEntry::required(course(
        "coms227",
        "COMS",
        "227",
        "4",
        vec![open_ended],
    ))];

    assert!(can_generate_schedules(&pool, &[]).valid);
    let options = generate_schedules(&pool, &[], None);
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].sections[0].id, "s1");
    assert_eq!(options[0].metadata.earliest_start.as_deref(), Some("10:00"));
}

#[test]
fn colliding_required_courses_pass_precheck_but_generate_nothing() {
    init_tracing();
    let pool = vec![
        PoolEntry::required(course(
            "c1",
            "COMS",
            "228",
            "3",
            vec![section("a", "MW", "10:00", "10:50", 0, 30)],
        )),
        PoolEntry::required(course(
            "c2",
            "MATH",
            "166",
            "4",
            vec![section("b", "MW", "10:00", "10:50", 0, 30)],
        )),
    ];

    assert!(can_generate_schedules(&pool, &[]).valid);
    assert!(generate_schedules(&pool, &[], None).is_empty());
}

#[test]
fn optional_course_is_added_when_it_fits() {
    init_tracing();
    let pool = vec![
        PoolEntry::required(course(
            "req",
            "COMS",
            "311",
            "3",
            vec![section("r", "MWF", "09:00", "09:50", 10, 40)],
        )),
        PoolEntry::optional(course(
            "opt",
            "MATH",
            "265",
            "4",
            vec![section("o", "MWF", "10:00", "10:50", 10, 40)],
        )),
    ];

    let options = generate_schedules(&pool, &[], None);
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].total_credits, 7);
    assert_eq!(options[0].sections.len(), 2);
    assert_eq!(options[1].total_credits, 3);
    assert!(options[1].section_for_course("req").is_some());
    assert!(options[1].section_for_course("opt").is_none());
}

#[test]
fn back_to_back_classes_fit_but_one_minute_overlap_does_not() {
    init_tracing();
    let ends_on_time = section("a", "TR", "09:00", "10:00", 0, 30);
    let ends_late = section("b", "TR", "09:00", "10:01", 0, 30);
    let next = section("c", "R", "10:00", "10:50", 0, 30);

    assert!(!has_time_conflict(&ends_on_time, &next));
    assert!(has_time_conflict(&ends_late, &next));

    let pool = vec![
        PoolEntry::required(course("c1", "COMS", "321", "3", vec![ends_late])),
        PoolEntry::required(course("c2", "COMS", "327", "3", vec![next.clone()])),
    ];
    assert!(generate_schedules(&pool, &[], None).is_empty());

    let pool = vec![
        PoolEntry::required(course("c1", "COMS", "321", "3", vec![ends_on_time])),
        PoolEntry::required(course("c2", "COMS", "327", "3", vec![next])),
    ];
    let options = generate_schedules(&pool, &[], None);
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].metadata.total_gap_minutes, 0);
}

#[test]
fn large_pool_is_bounded_by_budget() {
    init_tracing();
    // 8 optional courses x 6 sections each on disjoint slots: far more
    // combinations than the budget allows.
    let pool: Vec<PoolEntry> = (0..8)
        .map(|c| {
            let sections = (0..6)
                .map(|s| {
                    let hour = 7 + c;
                    let day = ["M", "T", "W", "R", "F", "MW"][s];
                    section(
                        &format!("c{c}s{s}"),
                        day,
                        &format!("{hour:02}:00"),
                        &format!("{hour:02}:50"),
                        0,
                        30,
                    )
                })
                .collect();
            PoolEntry::optional(course(&format!("c{c}"), "HIST", &format!("{c}"), "3", sections))
        })
        .collect();

    let generator = ScheduleGenerator::with_config(GeneratorConfig::default().with_max_combinations(200));
    let options = generator.generate(&pool, &[], Some(10));
    assert_eq!(options.len(), 10);
    for option in &options {
        assert!(!option.sections.is_empty());
    }
}

#[test]
fn seeded_generation_orders_ties_reproducibly() {
    init_tracing();
    // Two equally good single-section options.
    let pool = vec![PoolEntry::required(course(
        "c1",
        "ENGL",
        "250",
        "3",
        vec![
            section("x", "MW", "11:00", "11:50", 0, 25),
            section("y", "TR", "11:00", "11:50", 0, 25),
        ],
    ))];
    let generator = ScheduleGenerator::new();

    let a = generator.generate_with_rng(&pool, &[], None, &mut SmallRng::seed_from_u64(3));
    let b = generator.generate_with_rng(&pool, &[], None, &mut SmallRng::seed_from_u64(3));
    assert_eq!(a, b);

    let flat = ScheduleGenerator::with_config(
        GeneratorConfig::default().with_weights(ScoreWeights::deterministic()),
    );
    let options = flat.generate(&pool, &[], None);
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].score, options[1].score);
}
