use crate::record::AdmissionRecord;
use crate::types::CandidateProfile;

/// Substring predicates over programs and locations.
///
/// Matching is plain `str::contains`: case-preserving, no tokenization.
/// An empty predicate matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    subject: String,
    location: String,
}

impl RecordFilter {
    pub fn new(subject: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            location: location.into(),
        }
    }

    pub fn from_profile(profile: &CandidateProfile) -> Self {
        Self::new(profile.subject_filter(), profile.location_filter())
    }

    pub fn matches_subject(&self, record: &AdmissionRecord) -> bool {
        self.subject.is_empty() || record.program.contains(self.subject.as_str())
    }

    /// City OR province.
    pub fn matches_location(&self, record: &AdmissionRecord) -> bool {
        self.location.is_empty()
            || record.city.contains(self.location.as_str())
            || record.province.contains(self.location.as_str())
    }

    pub fn matches(&self, record: &AdmissionRecord) -> bool {
        self.matches_subject(record) && self.matches_location(record)
    }

    /// Keep matching records in their original order.
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a AdmissionRecord>
    where
        I: IntoIterator<Item = &'a AdmissionRecord>,
    {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}

/// Convenience form of [`RecordFilter::apply`].
pub fn filter_records<'a>(
    records: &'a [AdmissionRecord],
    subject_filter: &str,
    location_filter: &str,
) -> Vec<&'a AdmissionRecord> {
    RecordFilter::new(subject_filter, location_filter).apply(records)
}
