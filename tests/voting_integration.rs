//! Integration tests for competency-weighted budgeted voting.

use dss_engine::domain::foundation::{AnalysisError, ErrorCode};
use dss_engine::domain::voting::{
    competency_score, Degree, Expert, ExpertProject, ExpertReport, Position,
};

const TOLERANCE: f64 = 1e-9;

fn panel() -> Vec<Expert> {
    vec![
        Expert::new("Head", Position::DepartmentHead, Degree::DoctorOfSciences).unwrap(), // 5
        Expert::new("Researcher", Position::SeniorResearcher, Degree::Phd).unwrap(),       // 1.5
        Expert::new("Engineer", Position::LeadEngineer, Degree::Specialist).unwrap(),      // 1
        Expert::new("Chief", Position::Director, Degree::Phd).unwrap(),                    // 6
    ]
}

fn project() -> ExpertProject {
    ExpertProject::new(
        "Plant",
        "Site for a new plant",
        vec!["River", "Hill", "Valley", "Coast"],
        panel(),
    )
    .unwrap()
}

#[test]
fn every_defined_competency_is_positive_and_undefined_pairs_fail() {
    let mut defined = 0;
    for position in Position::ALL {
        for degree in Degree::ALL {
            match competency_score(position, degree) {
                Some(score) => {
                    defined += 1;
                    assert!(score > 0.0);
                    assert!(Expert::new("x", position, degree).is_ok());
                }
                None => {
                    let err = Expert::new("x", position, degree).unwrap_err();
                    assert_eq!(err.code(), ErrorCode::IncompatibleCompetency);
                }
            }
        }
    }
    assert_eq!(defined, 21);
}

#[test]
fn relative_weights_sum_to_one() {
    let p = project();
    let total: f64 = ["Head", "Researcher", "Engineer", "Chief"]
        .iter()
        .map(|e| p.relative_weight(e).unwrap())
        .sum();
    assert!((total - 1.0).abs() < TOLERANCE);
}

#[test]
fn full_allocation_then_further_vote_records_nothing() {
    let mut p = project();
    p.vote("Chief", "River", 60).unwrap();
    p.vote("Chief", "Hill", 40).unwrap();
    assert_eq!(p.total_recorded("Chief").unwrap(), 100);

    assert_eq!(p.vote("Chief", "Coast", 30).unwrap(), 0);
    assert_eq!(p.total_recorded("Chief").unwrap(), 100);
}

#[test]
fn further_vote_on_a_funded_alternative_keeps_the_full_allocation() {
    let mut p = project();
    p.vote("Chief", "River", 100).unwrap();

    assert_eq!(p.vote("Chief", "River", 120).unwrap(), 100);
    assert_eq!(p.vote("Chief", "Hill", 30).unwrap(), 0);
    assert_eq!(p.total_recorded("Chief").unwrap(), 100);
    assert_eq!(p.remaining_budget("Chief").unwrap(), 0);
}

const STALLED_ROUND: &str = r#"
name: Plant
target: Site for a new plant
alternatives: [River, Hill, Valley, Coast]
experts:
  - name: Head
    position: department_head
    degree: doctor_of_sciences
    competency_index: 5.0
    remaining_budget: 0
  - name: Chief
    position: director
    degree: phd
    competency_index: 6.0
    remaining_budget: 100
votes:
  - expert: Head
    alternative: Hill
    points: 60
"#;

#[test]
fn exhausted_expert_with_sixty_recorded_gets_forty_back() {
    let mut p: ExpertProject = serde_yaml::from_str(STALLED_ROUND).unwrap();
    assert_eq!(p.total_recorded("Head").unwrap(), 60);
    assert_eq!(p.remaining_budget("Head").unwrap(), 0);

    assert_eq!(p.vote("Head", "Valley", 100).unwrap(), 40);
    assert_eq!(p.total_recorded("Head").unwrap(), 100);
    assert_eq!(p.remaining_budget("Head").unwrap(), 0);
}

#[test]
fn degenerate_full_allocation_sums_to_one() {
    let mut p = project();
    p.vote("Head", "River", 100).unwrap();
    p.vote("Researcher", "Coast", 100).unwrap();
    p.vote("Engineer", "Coast", 100).unwrap();
    p.vote("Chief", "Valley", 100).unwrap();

    let total: f64 = p.result().iter().map(|(_, s)| s).sum();
    assert!((total - 1.0).abs() < TOLERANCE);

    let scores = p.result_map();
    assert!((scores["Hill"]).abs() < TOLERANCE);
    assert!((scores["Valley"] - 6.0 / 13.5).abs() < TOLERANCE);
    assert_eq!(p.best_alternative().map(|(l, _)| l), Some("Valley".to_string()));
}

#[test]
fn partial_allocation_never_exceeds_one() {
    let mut p = project();
    p.vote("Head", "River", 30).unwrap();
    p.vote("Researcher", "Hill", 70).unwrap();
    p.vote("Researcher", "Valley", 70).unwrap();

    assert_eq!(p.votes("Researcher", "Valley").unwrap(), 30);
    let total: f64 = p.result().iter().map(|(_, s)| s).sum();
    assert!(total <= 1.0 + TOLERANCE);
}

#[test]
fn unknown_names_are_rejected() {
    let mut p = project();
    assert!(matches!(
        p.vote("Stranger", "River", 10),
        Err(AnalysisError::UnknownItem { .. })
    ));
    assert!(matches!(
        p.votes("Head", "Desert"),
        Err(AnalysisError::UnknownItem { .. })
    ));
}

#[test]
fn clear_starts_a_fresh_round() {
    let mut p = project();
    p.vote("Engineer", "Coast", 100).unwrap();
    p.clear();

    let report = ExpertReport::evaluate(&p);
    assert!(report.is_empty());
    assert!(report.experts.iter().all(|e| e.remaining_budget == 100));
    assert_eq!(p.vote("Engineer", "Hill", 55).unwrap(), 55);
}
