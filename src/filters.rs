//! Filtros y resumen sobre la tabla de disciplinas obligatorias.
//!
//! Los filtros nunca modifican la lista original: devuelven una copia con las
//! disciplinas que cumplen el predicado, en el mismo orden.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FilterError;
use crate::extract::status::{is_approved, is_failed_or_not_taken, is_not_taken};
use crate::models::{Course, ElectiveCourse, Summary};

/// Optativas exigidas por defecto en el resumen
pub const DEFAULT_ELECTIVE_REQUIREMENT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseFilter {
    #[default]
    All,
    Approved,
    NotTaken,
    /// Semestre par y todavía no cursada
    EvenSemesterPending,
    /// Semestre impar y todavía no cursada
    OddSemesterPending,
}

impl CourseFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseFilter::All => "all",
            CourseFilter::Approved => "approved",
            CourseFilter::NotTaken => "not-taken",
            CourseFilter::EvenSemesterPending => "even-semester-pending",
            CourseFilter::OddSemesterPending => "odd-semester-pending",
        }
    }

    pub fn matches(&self, course: &Course) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Approved => is_approved(&course.status),
            CourseFilter::NotTaken => is_not_taken(&course.status),
            CourseFilter::EvenSemesterPending => course.semester % 2 == 0 && is_not_taken(&course.status),
            CourseFilter::OddSemesterPending => course.semester % 2 == 1 && is_not_taken(&course.status),
        }
    }
}

impl FromStr for CourseFilter {
    type Err = FilterError;

    /// Acepta los nombres canónicos y las claves de los botones antiguos
    /// ("todas", "aprovadas", "nao_cursadas", "pares", "impares", "reset").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" | "todas" | "reset" => Ok(CourseFilter::All),
            "approved" | "aprovadas" => Ok(CourseFilter::Approved),
            "not-taken" | "not_taken" | "nao_cursadas" => Ok(CourseFilter::NotTaken),
            "even-semester-pending" | "even" | "pares" => Ok(CourseFilter::EvenSemesterPending),
            "odd-semester-pending" | "odd" | "impares" => Ok(CourseFilter::OddSemesterPending),
            _ => Err(FilterError::UnknownSelector(s.to_string())),
        }
    }
}

/// Devuelve las disciplinas que pasan el filtro, en el orden original
pub fn filter_courses(courses: &[Course], filter: CourseFilter) -> Vec<Course> {
    courses.iter().filter(|c| filter.matches(c)).cloned().collect()
}

/// Resumen con el requisito de optativas por defecto
pub fn summarize(courses: &[Course], electives: &[ElectiveCourse]) -> Summary {
    summarize_with_requirement(courses, electives, DEFAULT_ELECTIVE_REQUIREMENT)
}

pub fn summarize_with_requirement(
    courses: &[Course],
    electives: &[ElectiveCourse],
    elective_requirement: usize,
) -> Summary {
    Summary {
        approved: courses.iter().filter(|c| is_approved(&c.status)).count(),
        not_taken: courses.iter().filter(|c| is_failed_or_not_taken(&c.status)).count(),
        electives_approved: electives.iter().filter(|e| is_approved(&e.status)).count(),
        elective_requirement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::NOT_TAKEN;

    fn course(code: &str, semester: u8, status: &str) -> Course {
        Course {
            code: code.to_string(),
            name: format!("Disciplina {}", code),
            semester,
            status: status.to_string(),
            weekday: None,
        }
    }

    #[test]
    fn even_semester_pending() {
        let courses = vec![
            course("ADM2001", 2, NOT_TAKEN),
            course("ADM3001", 3, NOT_TAKEN),
            course("ADM4001", 4, "Aprovado"),
        ];
        let out = filter_courses(&courses, CourseFilter::EvenSemesterPending);
        assert_eq!(out, vec![courses[0].clone()]);
    }

    #[test]
    fn odd_semester_pending() {
        let courses = vec![
            course("ADM1001", 1, NOT_TAKEN),
            course("ADM2001", 2, NOT_TAKEN),
            course("ADM3001", 3, "Dispensado"),
        ];
        let out = filter_courses(&courses, CourseFilter::OddSemesterPending);
        assert_eq!(out, vec![courses[0].clone()]);
    }

    #[test]
    fn parse_selectors() {
        assert_eq!("all".parse::<CourseFilter>(), Ok(CourseFilter::All));
        assert_eq!("Aprovadas".parse::<CourseFilter>(), Ok(CourseFilter::Approved));
        assert_eq!("not-taken".parse::<CourseFilter>(), Ok(CourseFilter::NotTaken));
        assert_eq!("pares".parse::<CourseFilter>(), Ok(CourseFilter::EvenSemesterPending));
        assert_eq!("impares".parse::<CourseFilter>(), Ok(CourseFilter::OddSemesterPending));
        assert_eq!(
            "semestre".parse::<CourseFilter>(),
            Err(FilterError::UnknownSelector("semestre".to_string()))
        );
    }

    #[test]
    fn selector_names_round_trip() {
        for f in [
            CourseFilter::All,
            CourseFilter::Approved,
            CourseFilter::NotTaken,
            CourseFilter::EvenSemesterPending,
            CourseFilter::OddSemesterPending,
        ] {
            assert_eq!(f.as_str().parse::<CourseFilter>(), Ok(f));
        }
    }

    #[test]
    fn electives_pending_saturates() {
        let electives: Vec<ElectiveCourse> = (0..7)
            .map(|n| ElectiveCourse {
                code: format!("OPT100{}", n),
                name: "Optativa".to_string(),
                status: "Aprovado".to_string(),
                weekday: None,
            })
            .collect();
        let s = summarize(&[], &electives);
        assert_eq!(s.electives_approved, 7);
        assert_eq!(s.electives_pending(), 0);
    }
}
