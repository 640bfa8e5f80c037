//! Record search.
//!
//! Each list screen has a search box that narrows its table before paging.
//! Every record type decides which of its fields the search term is matched
//! against.

use crate::{Class, CountryCode, Distinction, Division, Parent, Role, School, Student, Teacher};

/// A case-insensitive substring search term.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    raw: String,
    lowered: String,
}

impl SearchQuery {
    /// Create a new query from user input.
    pub fn new(term: impl Into<String>) -> Self {
        let raw = term.into();
        let lowered = raw.to_lowercase();
        Self { raw, lowered }
    }

    /// The term as typed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Case-insensitive containment check.
    pub fn matches_text(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.lowered)
    }

    /// Exact-case containment check, for codes such as dial prefixes.
    pub fn matches_exact(&self, text: &str) -> bool {
        text.contains(&self.raw)
    }
}

/// Trait for records that can be narrowed by a search box.
pub trait Searchable {
    /// Returns true if the record matches the query.
    ///
    /// An empty query matches every record.
    fn matches(&self, query: &SearchQuery) -> bool;
}

/// Keep the records matching `query`, preserving their order.
pub fn filter_records<T: Searchable>(records: Vec<T>, query: &SearchQuery) -> Vec<T> {
    if query.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| record.matches(query))
        .collect()
}

impl Searchable for Role {
    fn matches(&self, query: &SearchQuery) -> bool {
        query.matches_text(&self.role_name) || query.matches_text(&self.description)
    }
}

impl Searchable for Student {
    fn matches(&self, query: &SearchQuery) -> bool {
        query.matches_text(&self.full_name)
            || query.matches_text(&self.email)
            || query.matches_text(&self.id)
    }
}

impl Searchable for Teacher {
    fn matches(&self, query: &SearchQuery) -> bool {
        query.matches_text(&self.full_name)
            || query.matches_text(&self.email)
            || query.matches_text(&self.subject)
    }
}

impl Searchable for Parent {
    fn matches(&self, query: &SearchQuery) -> bool {
        query.matches_text(&self.full_name) || query.matches_text(&self.email)
    }
}

impl Searchable for Distinction {
    fn matches(&self, query: &SearchQuery) -> bool {
        query.matches_text(&self.name) || query.matches_text(&self.category)
    }
}

impl Searchable for CountryCode {
    fn matches(&self, query: &SearchQuery) -> bool {
        query.matches_text(&self.country_name) || query.matches_exact(&self.dial_code)
    }
}

impl Searchable for School {
    fn matches(&self, query: &SearchQuery) -> bool {
        query.matches_text(&self.school_name) || query.matches_text(&self.address)
    }
}

impl Searchable for Class {
    fn matches(&self, query: &SearchQuery) -> bool {
        query.matches_text(&self.class_name)
            || query.matches_text(&self.grade_level)
            || query.matches_text(self.description.as_deref().unwrap_or(""))
    }
}

impl Searchable for Division {
    fn matches(&self, query: &SearchQuery) -> bool {
        query.matches_text(&self.grade_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 9, 1).unwrap()
    }

    fn student(id: &str, name: &str, email: &str) -> Student {
        Student {
            id: id.to_string(),
            full_name: name.to_string(),
            email: email.to_string(),
            phone: "+1-555-0101".to_string(),
            grade: "10th Grade".to_string(),
            enrollment_date: date(),
            status: Status::Active,
        }
    }

    fn country(name: &str, dial_code: &str) -> CountryCode {
        CountryCode {
            id: format!("CC-{}", name),
            country_name: name.to_string(),
            dial_code: dial_code.to_string(),
            status: Status::Active,
        }
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let students = vec![
            student("S001", "Emma Johnson", "emma.j@school.edu"),
            student("S002", "Liam Smith", "liam.s@school.edu"),
        ];
        let filtered = filter_records(students.clone(), &SearchQuery::new(""));
        assert_eq!(filtered, students);
    }

    #[test]
    fn test_student_search_is_case_insensitive() {
        let students = vec![
            student("S001", "Emma Johnson", "emma.j@school.edu"),
            student("S002", "Liam Smith", "liam.s@school.edu"),
            student("S003", "Olivia Brown", "olivia.b@school.edu"),
        ];

        let by_name = filter_records(students.clone(), &SearchQuery::new("LIAM"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "S002");

        let by_id = filter_records(students.clone(), &SearchQuery::new("s003"));
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].full_name, "Olivia Brown");

        let by_email = filter_records(students, &SearchQuery::new("school.edu"));
        assert_eq!(by_email.len(), 3);
    }

    #[test]
    fn test_filter_preserves_order() {
        let students = vec![
            student("S003", "Anna C", "c@x.edu"),
            student("S001", "Anna A", "a@x.edu"),
            student("S002", "Bob", "b@x.edu"),
        ];
        let ids: Vec<String> = filter_records(students, &SearchQuery::new("anna"))
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["S003", "S001"]);
    }

    #[test]
    fn test_country_code_matches_dial_prefix() {
        let codes = vec![
            country("United Kingdom", "+44"),
            country("India", "+91"),
            country("Germany", "+49"),
        ];

        let by_dial = filter_records(codes.clone(), &SearchQuery::new("+4"));
        assert_eq!(by_dial.len(), 2);

        let by_name = filter_records(codes, &SearchQuery::new("india"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].dial_code, "+91");
    }

    #[test]
    fn test_class_without_description() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let class = Class {
            id: "C1".to_string(),
            class_name: "Algebra".to_string(),
            grade_level: "Grade 9".to_string(),
            description: None,
            school_id: None,
            deleted_at: None,
            created_at: created,
            updated_at: created,
        };

        assert!(class.matches(&SearchQuery::new("grade 9")));
        assert!(!class.matches(&SearchQuery::new("geometry")));
        assert!(class.matches(&SearchQuery::new("")));
    }

    #[test]
    fn test_teacher_matches_subject_not_department() {
        let teacher = Teacher {
            id: "T001".to_string(),
            full_name: "Dr. Sarah Williams".to_string(),
            email: "sarah.w@school.edu".to_string(),
            phone: "+1-555-0201".to_string(),
            subject: "Mathematics".to_string(),
            department: "Science & Math".to_string(),
            join_date: date(),
            status: Status::Active,
        };

        assert!(teacher.matches(&SearchQuery::new("math")));
        assert!(!teacher.matches(&SearchQuery::new("science")));
    }
}
