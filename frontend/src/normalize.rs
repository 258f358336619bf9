//! Maps raw API records into display-ready view models.
//!
//! Rules
//! - A blank external identifier is replaced by a synthesized fallback
//!   (`STU` + zero-padded numeric id), so every card and filename has a code.
//! - The verification URL is a pure function of the external identifier.
//! - A record with no usable display name cannot be rendered: it is dropped
//!   and reported through a [`NormalizeWarning`] instead of failing the whole
//!   collection. Callers log the warnings and render what remains.

use common::model::memory::Memory;
use common::model::student::Student;

use crate::api::join_url;
use crate::config::Config;
use crate::filter::Filterable;

/// One record dropped (or patched) during normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeWarning {
    pub record_id: i64,
    pub message: String,
}

/// A normalized collection plus the warnings produced while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<T> {
    pub records: Vec<T>,
    pub warnings: Vec<NormalizeWarning>,
}

/// Display projection of a [`Student`]; never serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentView {
    pub student: Student,
    /// Upstream code ("INSA009") or the synthesized fallback ("STU007").
    pub external_id: String,
    /// `{verify_base}/{external_id}/`, maintained by the external verifier.
    pub verification_url: String,
    /// Resolved certificate image URL, derived from the per-student endpoint
    /// when the serializer left it out.
    pub certificate_url: String,
}

/// Fallback external identifier for a record whose code is blank.
pub fn external_id_for(student_id: &str, id: i64) -> String {
    let trimmed = student_id.trim();
    if trimmed.is_empty() {
        format!("STU{id:03}")
    } else {
        trimmed.to_string()
    }
}

/// Builds the public verification link for an external identifier.
pub fn verification_url(verify_base: &str, external_id: &str) -> String {
    format!("{}/{}/", verify_base.trim_end_matches('/'), external_id)
}

pub fn normalize_students(students: Vec<Student>, config: &Config) -> Normalized<StudentView> {
    let mut records = Vec::with_capacity(students.len());
    let mut warnings = Vec::new();

    for student in students {
        if student.name.trim().is_empty() {
            warnings.push(NormalizeWarning {
                record_id: student.id,
                message: format!("student {} has no name; dropped", student.id),
            });
            continue;
        }

        let external_id = external_id_for(&student.student_id, student.id);
        let verification_url = verification_url(&config.verify_base_url, &external_id);
        let certificate_url = student
            .certificate_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                join_url(
                    &config.api_base_url,
                    &format!("students/{}/certificate/", student.id),
                )
            });

        records.push(StudentView {
            student,
            external_id,
            verification_url,
            certificate_url,
        });
    }

    Normalized { records, warnings }
}

pub fn normalize_memories(memories: Vec<Memory>) -> Normalized<Memory> {
    let mut records = Vec::with_capacity(memories.len());
    let mut warnings = Vec::new();

    for memory in memories {
        if memory.title.trim().is_empty() {
            warnings.push(NormalizeWarning {
                record_id: memory.id,
                message: format!("memory {} has no title; dropped", memory.id),
            });
            continue;
        }
        records.push(memory);
    }

    Normalized { records, warnings }
}

impl Filterable for StudentView {
    fn category_id(&self) -> Option<i64> {
        self.student.department
    }

    fn haystacks(&self) -> Vec<&str> {
        let mut fields = vec![
            self.student.name.as_str(),
            self.student.quote.as_str(),
            self.student.last_words.as_str(),
        ];
        if let Some(department) = self.student.department_name.as_deref() {
            fields.push(department);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            api_base_url: "http://api.example/yearbook/api".to_string(),
            verify_base_url: "http://api.example/yearbook/verify".to_string(),
            request_timeout_ms: 10_000,
        }
    }

    fn student(id: i64, name: &str, student_id: &str) -> Student {
        Student {
            id,
            name: name.to_string(),
            student_id: student_id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn blank_external_id_gets_zero_padded_fallback() {
        let normalized = normalize_students(vec![student(7, "Sara Teshome", "")], &test_config());
        assert_eq!(normalized.records[0].external_id, "STU007");

        let normalized = normalize_students(vec![student(123, "Dawit Assefa", "  ")], &test_config());
        assert_eq!(normalized.records[0].external_id, "STU123");
    }

    #[test]
    fn provided_external_id_is_kept() {
        let normalized = normalize_students(vec![student(9, "Hanan Mohammed", "INSA009")], &test_config());
        assert_eq!(normalized.records[0].external_id, "INSA009");
        assert_eq!(
            normalized.records[0].verification_url,
            "http://api.example/yearbook/verify/INSA009/"
        );
    }

    #[test]
    fn normalizing_twice_yields_the_same_verification_url() {
        let config = test_config();
        let raw = vec![student(9, "Hanan Mohammed", "INSA009"), student(7, "Sara Teshome", "")];
        let first = normalize_students(raw.clone(), &config);
        let second = normalize_students(raw, &config);
        for (a, b) in first.records.iter().zip(second.records.iter()) {
            assert_eq!(a.verification_url, b.verification_url);
        }
    }

    #[test]
    fn nameless_students_are_dropped_with_a_warning() {
        let raw = vec![
            student(1, "Alemayehu Kebede", "INSA001"),
            student(2, "", "INSA002"),
            student(3, "Michael Abebe", "INSA003"),
            student(4, "   ", ""),
        ];
        let input_len = raw.len();
        let normalized = normalize_students(raw, &test_config());

        assert_eq!(normalized.warnings.len(), 2);
        assert_eq!(normalized.records.len(), input_len - normalized.warnings.len());
        assert_eq!(normalized.warnings[0].record_id, 2);
        assert_eq!(normalized.warnings[1].record_id, 4);
    }

    #[test]
    fn missing_certificate_url_falls_back_to_the_endpoint() {
        let normalized = normalize_students(vec![student(5, "Sara Teshome", "INSA005")], &test_config());
        assert_eq!(
            normalized.records[0].certificate_url,
            "http://api.example/yearbook/api/students/5/certificate/"
        );

        let mut with_url = student(6, "Dawit Assefa", "INSA006");
        with_url.certificate_url = Some("http://cdn.example/certs/6.png".to_string());
        let normalized = normalize_students(vec![with_url], &test_config());
        assert_eq!(
            normalized.records[0].certificate_url,
            "http://cdn.example/certs/6.png"
        );
    }

    #[test]
    fn untitled_memories_are_dropped_with_a_warning() {
        let memories = vec![
            Memory {
                id: 1,
                title: "Graduation day".to_string(),
                ..Default::default()
            },
            Memory {
                id: 2,
                title: " ".to_string(),
                ..Default::default()
            },
        ];
        let normalized = normalize_memories(memories);
        assert_eq!(normalized.records.len(), 1);
        assert_eq!(normalized.records[0].id, 1);
        assert_eq!(normalized.warnings.len(), 1);
        assert_eq!(normalized.warnings[0].record_id, 2);
    }
}
