#![allow(dead_code)]

use admission_core::record::AdmissionRecord;

pub fn record(school: &str, program: &str, city: &str, province: &str, min_score: u32) -> AdmissionRecord {
    AdmissionRecord {
        school: school.to_string(),
        program: program.to_string(),
        city: city.to_string(),
        province: province.to_string(),
        min_score,
        tier985: false,
        tier211: false,
        subject_requirement: String::new(),
    }
}

pub const SAMPLE_CSV: &str = "\
学校,专业,最低分,城市,省份,985,211,选科
重庆大学,计算机科学与技术,610,重庆,重庆,是,是,物理+化学
西南大学,计算机科学与技术,585,重庆,重庆,否,是,物理
重庆邮电大学,软件工程,560,重庆,重庆,否,否,物理
四川大学,计算机类,620,成都,四川,是,是,物理+化学
西南交通大学,土木工程,575,成都,四川,否,是,物理
重庆交通大学,计算机科学与技术,530,重庆,重庆,否,否,物理
成都信息工程大学,软件工程,525,成都,四川,否,否,物理
重庆理工大学,人工智能,515,重庆,重庆,否,否,不限
";
