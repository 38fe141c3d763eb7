use unirank::course::Course;
use unirank::lookup::load_embedded_tables;
use unirank::scoring::WeightingConfig;
use unirank::{EngineError, RankingEngine};

fn engine() -> RankingEngine {
    RankingEngine::new(&WeightingConfig::default(), load_embedded_tables().unwrap())
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn single_platform_unified_rating() {
    let mut engine = engine();
    engine.register_platform("Codeforces", 3000.0).unwrap();
    engine.register_user("alice");
    engine
        .update_platform_stats("Codeforces", 2100.0, 0.8, [("alice", 2100.0)])
        .unwrap();

    assert_eq!(engine.weight("Codeforces"), Some(1.0));
    let alice = engine.user("alice").unwrap();
    assert!(approx(alice.unified_rating, 2100.0));
    assert!(approx(alice.total_rating, 2100.0));
}

#[test]
fn imputation_without_ratings_uses_platform_fraction() {
    let mut engine = engine();
    engine.register_platform("AtCoder", 2800.0).unwrap();
    engine.register_user("bob");

    assert!(approx(engine.impute_rating("bob", "AtCoder").unwrap(), 1120.0));
}

#[test]
fn imputation_maps_across_platforms() {
    let mut engine = engine();
    engine.register_platform("Codeforces", 3000.0).unwrap();
    engine.register_platform("CodeChef", 1800.0).unwrap();
    engine.register_user("alice");
    engine
        .update_platform_stats("Codeforces", 2000.0, 1.0, [("alice", 1500.0)])
        .unwrap();

    // 1500/3000 of the way up Codeforces is 900 on CodeChef
    assert!(approx(engine.impute_rating("alice", "CodeChef").unwrap(), 900.0));
}

#[test]
fn course_bonus_breakdown() {
    let engine = engine();
    let course = Course::new("Machine Learning Specialization")
        .with_institution("Stanford University")
        .with_duration("12 months")
        .with_skills(["Machine Learning", "Data Science", "Statistics"]);

    let bonus = engine.score_course(&course);
    assert_eq!(bonus.institution, 10.0);
    assert_eq!(bonus.duration, 5.0);
    assert_eq!(bonus.field, 10.0);
    assert!(approx(bonus.skills, (10.0 + 9.5 + 8.5) / 3.0 * 2.0));
    assert!(approx(bonus.total, 10.0 + 5.0 + 10.0 + 28.0 / 3.0 * 2.0));
    assert!((bonus.percentage - 97.04).abs() < 0.01);
}

#[test]
fn rankings_are_descending() {
    let mut engine = engine();
    engine.register_platform("Codeforces", 3000.0).unwrap();
    engine.register_user("low");
    engine.register_user("high");
    engine
        .update_platform_stats("Codeforces", 2000.0, 1.0, [("low", 1800.0), ("high", 2500.0)])
        .unwrap();

    let rankings = engine.get_rankings(None);
    let order: Vec<&str> = rankings.iter().map(|e| e.user_id.as_str()).collect();
    assert_eq!(order, vec!["high", "low"]);
    assert!(approx(rankings[0].total_rating, 2500.0));
    assert!(approx(rankings[1].total_rating, 1800.0));
}

#[test]
fn unknown_institution_and_skill_use_defaults() {
    let engine = engine();
    let course = Course::new("Intro to Knitting")
        .with_institution("Unknown University")
        .with_skills(["Underwater Basket Weaving"]);

    let bonus = engine.score_course(&course);
    assert_eq!(bonus.institution, 5.5);
    assert!(approx(bonus.skills, 6.0 * 2.0));
    assert_eq!(engine.scorer().tables().skill_score("Underwater Basket Weaving"), 6.0);
}

#[test]
fn repeated_update_is_idempotent() {
    let mut engine = engine();
    engine.register_platform("Codeforces", 3000.0).unwrap();
    engine.register_platform("Leetcode", 2500.0).unwrap();
    engine.register_user("alice");
    engine
        .update_platform_stats("Codeforces", 2100.0, 0.8, [("alice", 2100.0)])
        .unwrap();
    engine
        .update_platform_stats("Leetcode", 1500.0, 0.5, [("alice", 2000.0)])
        .unwrap();
    let before = engine.get_rankings(None);
    let weights = engine.weights().clone();

    engine
        .update_platform_stats("Leetcode", 1500.0, 0.5, [("alice", 2000.0)])
        .unwrap();

    assert_eq!(engine.get_rankings(None), before);
    assert_eq!(engine.weights(), &weights);
}

#[test]
fn failed_update_changes_nothing() {
    let mut engine = engine();
    engine.register_platform("Codeforces", 3000.0).unwrap();
    engine.register_user("alice");
    engine
        .update_platform_stats("Codeforces", 2100.0, 0.8, [("alice", 2100.0)])
        .unwrap();

    let err = engine
        .update_platform_stats("Codeforces", 9000.0, 0.1, [("alice", 100.0), ("ghost", 5.0)])
        .unwrap_err();
    assert_eq!(err, EngineError::UnknownUser("ghost".to_string()));
    assert_eq!(engine.platform("Codeforces").unwrap().difficulty, 2100.0);
    assert!(approx(engine.user("alice").unwrap().unified_rating, 2100.0));

    assert!(matches!(
        engine.update_platform_stats("TopCoder", 1.0, 1.0, Vec::<(&str, f64)>::new()),
        Err(EngineError::InvalidPlatform(_))
    ));
}

#[test]
fn course_bonus_adds_to_total() {
    let mut engine = engine();
    engine.register_platform("Codeforces", 3000.0).unwrap();
    engine.register_user("alice");
    engine
        .update_platform_stats("Codeforces", 2100.0, 0.8, [("alice", 1200.0)])
        .unwrap();

    let profile = engine
        .record_courses("alice", &[Course::new("Python for Everybody").with_duration("8 weeks")])
        .unwrap();

    let alice = engine.user("alice").unwrap();
    assert_eq!(alice.course_bonus, profile.total_bonus);
    assert!(approx(alice.total_rating, 1200.0 + profile.total_bonus));
}

#[test]
fn single_platform_with_zero_stats_keeps_normalized_rating() {
    let mut engine = engine();
    engine.register_platform("Codeforces", 3000.0).unwrap();
    engine.register_user("alice");
    engine
        .update_platform_stats("Codeforces", 0.0, 0.0, [("alice", 2100.0)])
        .unwrap();

    assert_eq!(engine.weight("Codeforces"), Some(0.0));
    assert!(approx(engine.user("alice").unwrap().unified_rating, 2100.0));
}
