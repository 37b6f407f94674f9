mod common;

use std::cell::RefCell;

use admission_core::advisor::consult::{GREETING, NO_KNOWLEDGE};
use admission_core::advisor::{
    load_knowledge, AdvisorError, AnalysisRequest, ChatMessage, Consultation, TextGenerator,
};
use admission_core::advisor::Role;
use admission_core::session::{Session, Submission};
use admission_core::store::RecordStore;
use admission_core::types::Recommendation;
use common::SAMPLE_CSV;
use tempfile::tempdir;

/// Replays a scripted reply in two chunks and records what it was sent.
struct FakeGenerator {
    reply: Result<String, AdvisorError>,
    seen: RefCell<Vec<Vec<ChatMessage>>>,
}

impl FakeGenerator {
    fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn failing(err: AdvisorError) -> Self {
        Self {
            reply: Err(err),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl TextGenerator for FakeGenerator {
    fn generate(
        &self,
        messages: &[ChatMessage],
        on_chunk: &mut dyn FnMut(&str),
    ) -> Result<String, AdvisorError> {
        self.seen.borrow_mut().push(messages.to_vec());
        let reply = self.reply.clone()?;
        let mid = reply.char_indices().nth(reply.chars().count() / 2).map(|(i, _)| i).unwrap_or(0);
        on_chunk(&reply[..mid]);
        on_chunk(&reply[mid..]);
        Ok(reply)
    }
}

fn recommend(score: i64, subject: &str, risk: &str) -> Recommendation {
    let session = Session::with_dataset(RecordStore::from_bytes(SAMPLE_CSV.as_bytes(), "score.csv"));
    session
        .submit(&Submission {
            score,
            subject_filter: subject.to_string(),
            location_filter: String::new(),
            risk_preference: risk.to_string(),
        })
        .unwrap()
}

#[test]
fn analysis_prompt_carries_top_rows_and_fixed_asks() {
    let recommendation = recommend(560, "", "all");
    let request = AnalysisRequest::from_recommendation(&recommendation, 5)
        .unwrap()
        .expect("rows to analyse");

    assert_eq!(request.row_count, 5);
    assert_eq!(request.score, 560);

    let lines: Vec<&str> = request.table.lines().collect();
    assert_eq!(lines.len(), 6, "header plus five rows");
    assert_eq!(lines[0], "学校,专业,最低分,分差,录取概率,城市,985,211,选科");
    // Closest match at 560 is 重庆邮电大学 (gap 0).
    assert_eq!(lines[1], "重庆邮电大学,软件工程,560,0,🟡 冲刺,重庆,否,否,物理");

    let prompt = request.prompt();
    assert!(prompt.contains("分数 560"));
    assert!(prompt.contains("意向专业是：不限"));
    assert!(prompt.contains(&request.table));
    assert!(prompt.contains("【性价比分析】"));
    assert!(prompt.contains("【风险提示】"));
    assert!(prompt.contains("【最终建议】"));

    let messages = request.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, Role::User);
}

#[test]
fn analysis_prompt_names_subject_filter() {
    let recommendation = recommend(600, "计算机", "all");
    let request = AnalysisRequest::from_recommendation(&recommendation, 5).unwrap().unwrap();

    assert_eq!(request.row_count, 4, "fewer matches than requested rows");
    assert!(request.prompt().contains("意向专业是：计算机"));
}

#[test]
fn no_rows_means_no_analysis_request() {
    let recommendation = recommend(560, "临床医学", "all");
    assert!(AnalysisRequest::from_recommendation(&recommendation, 5).unwrap().is_none());
}

#[test]
fn collaborator_failure_leaves_recommendation_untouched() {
    let recommendation = recommend(560, "", "all");
    let snapshot = recommendation.clone();

    let request = AnalysisRequest::from_recommendation(&recommendation, 5).unwrap().unwrap();
    let generator = FakeGenerator::failing(AdvisorError::Timeout(120));
    let result = generator.generate(&request.messages(), &mut |_| {});

    assert_eq!(result, Err(AdvisorError::Timeout(120)));
    assert_eq!(recommendation, snapshot);
}

#[test]
fn consultation_sends_system_prompt_and_history() {
    let generator = FakeGenerator::replying("重邮软件工程去年最低分560分。");
    let mut consultation = Consultation::new("重庆邮电大学 软件工程 560");

    let mut streamed = String::new();
    let reply = consultation
        .ask(&generator, "重邮软件工程多少分？", &mut |chunk| streamed.push_str(chunk))
        .unwrap();

    assert_eq!(reply, "重邮软件工程去年最低分560分。");
    assert_eq!(streamed, reply);

    let seen = generator.seen.borrow();
    let sent = &seen[0];
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0].role, Role::System);
    assert!(sent[0].content.contains("重庆邮电大学 软件工程 560"));
    assert_eq!(sent[1], ChatMessage::assistant(GREETING));
    assert_eq!(sent[2], ChatMessage::user("重邮软件工程多少分？"));

    assert_eq!(consultation.history().len(), 3);
    assert_eq!(consultation.history()[2], ChatMessage::assistant(reply));
}

#[test]
fn consultation_keeps_question_but_no_reply_on_failure() {
    let generator = FakeGenerator::failing(AdvisorError::Http("HTTP 500".to_string()));
    let mut consultation = Consultation::new("资料");

    let result = consultation.ask(&generator, "你好", &mut |_| {});
    assert!(matches!(result, Err(AdvisorError::Http(_))));
    assert_eq!(consultation.history().len(), 2);
    assert_eq!(consultation.history()[1], ChatMessage::user("你好"));
}

#[test]
fn missing_knowledge_file_degrades() {
    let dir = tempdir().unwrap();
    let knowledge = load_knowledge(&dir.path().join("knowledge.txt"));
    assert_eq!(knowledge, NO_KNOWLEDGE);

    let consultation = Consultation::new(knowledge);
    assert!(consultation.system_prompt().contains(NO_KNOWLEDGE));
}
