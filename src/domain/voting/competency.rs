//! Competency model - Organisational position and academic degree lookup.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Divisor that maps raw scores onto a 0–1 display scale (12 → 0.96).
pub const COMPETENCY_SCALE: f64 = 12.5;

/// Organisational position of an expert, most junior first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    LeadEngineer,
    SeniorResearcher,
    LeadResearcher,
    SectorHead,
    DepartmentHead,
    ComplexHead,
    Director,
}

impl Position {
    /// All positions, most junior first.
    pub const ALL: [Position; 7] = [
        Position::LeadEngineer,
        Position::SeniorResearcher,
        Position::LeadResearcher,
        Position::SectorHead,
        Position::DepartmentHead,
        Position::ComplexHead,
        Position::Director,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Position::LeadEngineer => "Lead Engineer",
            Position::SeniorResearcher => "Senior Researcher",
            Position::LeadResearcher => "Lead Researcher",
            Position::SectorHead => "Sector Head",
            Position::DepartmentHead => "Department Head",
            Position::ComplexHead => "Complex Head",
            Position::Director => "Director",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Academic degree of an expert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degree {
    Specialist,
    Phd,
    DoctorOfSciences,
    Academician,
}

impl Degree {
    /// All degrees, lowest first.
    pub const ALL: [Degree; 4] = [
        Degree::Specialist,
        Degree::Phd,
        Degree::DoctorOfSciences,
        Degree::Academician,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Degree::Specialist => "Specialist",
            Degree::Phd => "PhD",
            Degree::DoctorOfSciences => "Doctor of Sciences",
            Degree::Academician => "Academician",
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

static COMPETENCY_TABLE: Lazy<HashMap<(Position, Degree), f64>> = Lazy::new(|| {
    use Degree::*;
    use Position::*;

    HashMap::from([
        ((LeadEngineer, Specialist), 1.0),
        ((SeniorResearcher, Specialist), 1.0),
        ((SeniorResearcher, Phd), 1.5),
        ((LeadResearcher, Phd), 2.25),
        ((LeadResearcher, DoctorOfSciences), 3.0),
        ((SectorHead, Specialist), 2.0),
        ((SectorHead, Phd), 3.0),
        ((SectorHead, DoctorOfSciences), 4.0),
        ((SectorHead, Academician), 6.0),
        ((DepartmentHead, Specialist), 2.5),
        ((DepartmentHead, Phd), 3.75),
        ((DepartmentHead, DoctorOfSciences), 5.0),
        ((DepartmentHead, Academician), 7.5),
        ((ComplexHead, Specialist), 3.0),
        ((ComplexHead, Phd), 4.5),
        ((ComplexHead, DoctorOfSciences), 6.0),
        ((ComplexHead, Academician), 9.0),
        ((Director, Specialist), 4.0),
        ((Director, Phd), 6.0),
        ((Director, DoctorOfSciences), 8.0),
        ((Director, Academician), 12.0),
    ])
});

/// Raw competency score for a position/degree pair, if the pair is defined.
pub fn competency_score(position: Position, degree: Degree) -> Option<f64> {
    COMPETENCY_TABLE.get(&(position, degree)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_defines_expected_scores() {
        assert_eq!(competency_score(Position::LeadEngineer, Degree::Specialist), Some(1.0));
        assert_eq!(competency_score(Position::LeadResearcher, Degree::Phd), Some(2.25));
        assert_eq!(competency_score(Position::DepartmentHead, Degree::Phd), Some(3.75));
        assert_eq!(competency_score(Position::Director, Degree::Academician), Some(12.0));
    }

    #[test]
    fn junior_positions_cannot_hold_senior_degrees() {
        assert_eq!(competency_score(Position::LeadEngineer, Degree::Phd), None);
        assert_eq!(competency_score(Position::SeniorResearcher, Degree::Academician), None);
        assert_eq!(competency_score(Position::LeadResearcher, Degree::Specialist), None);
    }

    #[test]
    fn table_has_twenty_one_defined_pairs() {
        let defined = Position::ALL
            .iter()
            .flat_map(|p| Degree::ALL.iter().map(move |d| (*p, *d)))
            .filter(|(p, d)| competency_score(*p, *d).is_some())
            .count();
        assert_eq!(defined, 21);
    }

    #[test]
    fn scores_grow_with_degree_within_a_position() {
        for position in Position::ALL {
            let scores: Vec<f64> = Degree::ALL
                .iter()
                .filter_map(|d| competency_score(position, *d))
                .collect();
            assert!(scores.windows(2).all(|w| w[0] < w[1]), "{:?}", position);
        }
    }

    #[test]
    fn labels_display() {
        assert_eq!(Position::DepartmentHead.to_string(), "Department Head");
        assert_eq!(Degree::Phd.to_string(), "PhD");
    }

    #[test]
    fn enums_serialize_in_snake_case() {
        assert_eq!(
            serde_json::to_string(&Position::SectorHead).unwrap(),
            "\"sector_head\""
        );
        assert_eq!(
            serde_json::to_string(&Degree::DoctorOfSciences).unwrap(),
            "\"doctor_of_sciences\""
        );
    }
}
