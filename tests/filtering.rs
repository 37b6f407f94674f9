mod common;

use admission_core::record::AdmissionRecord;
use admission_core::selection::{filter_records, RecordFilter};
use common::record;

fn dataset() -> Vec<AdmissionRecord> {
    vec![
        record("重庆大学", "计算机科学与技术", "重庆", "重庆", 610),
        record("四川大学", "计算机类", "成都", "四川", 620),
        record("西南交通大学", "土木工程", "成都", "四川", 575),
        record("重庆邮电大学", "软件工程", "重庆", "重庆", 560),
        record("南京大学", "Computer Science", "南京", "江苏", 640),
        record("无名学院", "", "", "", 400),
    ]
}

fn schools(records: &[&AdmissionRecord]) -> Vec<String> {
    records.iter().map(|r| r.school.clone()).collect()
}

#[test]
fn empty_filters_match_everything() {
    let data = dataset();
    let result = filter_records(&data, "", "");
    assert_eq!(result.len(), data.len());
    assert_eq!(schools(&result), data.iter().map(|r| r.school.clone()).collect::<Vec<_>>());
}

#[test]
fn subject_is_a_plain_substring_of_program() {
    let data = dataset();
    let result = filter_records(&data, "计算机", "");
    assert_eq!(schools(&result), vec!["重庆大学", "四川大学"]);

    let result = filter_records(&data, "工程", "");
    assert_eq!(schools(&result), vec!["西南交通大学", "重庆邮电大学"]);
}

#[test]
fn subject_match_preserves_case() {
    let data = dataset();
    assert_eq!(schools(&filter_records(&data, "Computer", "")), vec!["南京大学"]);
    assert!(filter_records(&data, "computer", "").is_empty());
}

#[test]
fn location_matches_city_or_province() {
    let data = dataset();

    // Province only
    let result = filter_records(&data, "", "四川");
    assert_eq!(schools(&result), vec!["四川大学", "西南交通大学"]);

    // City only
    let result = filter_records(&data, "", "成都");
    assert_eq!(schools(&result), vec!["四川大学", "西南交通大学"]);

    // City and province both match; listed once
    let result = filter_records(&data, "", "重庆");
    assert_eq!(schools(&result), vec!["重庆大学", "重庆邮电大学"]);
}

#[test]
fn subject_and_location_compose_conjunctively() {
    let data = dataset();
    let result = filter_records(&data, "计算机", "四川");
    assert_eq!(schools(&result), vec!["四川大学"]);

    let result = filter_records(&data, "土木", "重庆");
    assert!(result.is_empty(), "no match is an empty set, not an error");
}

#[test]
fn invariant_filtering_is_idempotent() {
    let data = dataset();
    let filter = RecordFilter::new("工程", "成都");

    let once = filter.apply(&data);
    let twice = filter.apply(once.iter().copied());

    assert_eq!(once, twice);
    assert_eq!(schools(&once), vec!["西南交通大学"]);
}

#[test]
fn filter_order_does_not_change_result() {
    let data = dataset();
    let subject_first = RecordFilter::new("", "重庆").apply(RecordFilter::new("计算机", "").apply(&data));
    let location_first = RecordFilter::new("计算机", "").apply(RecordFilter::new("", "重庆").apply(&data));
    let combined = RecordFilter::new("计算机", "重庆").apply(&data);

    assert_eq!(subject_first, combined);
    assert_eq!(location_first, combined);
}

#[test]
fn empty_dataset_yields_empty_result() {
    let data: Vec<AdmissionRecord> = Vec::new();
    assert!(filter_records(&data, "计算机", "重庆").is_empty());
    assert!(filter_records(&data, "", "").is_empty());
}

#[test]
fn single_record_predicate_agrees_with_apply() {
    let data = dataset();
    let filter = RecordFilter::new("计算机", "重庆");

    let kept: Vec<&AdmissionRecord> = data.iter().filter(|r| filter.matches(r)).collect();
    assert_eq!(kept, filter.apply(&data));

    assert!(filter.matches(&data[0]));
    assert!(!filter.matches(&data[1]), "subject matches, location does not");
    assert!(!filter.matches(&data[3]), "location matches, subject does not");
}
