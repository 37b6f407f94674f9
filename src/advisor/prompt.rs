use crate::advisor::{AdvisorError, ChatMessage};
use crate::types::{Recommendation, RecommendationRow, DISPLAY_COLUMNS};

/// Rows handed to the analyst when the caller does not choose.
pub const DEFAULT_ANALYSIS_TOP_N: usize = 5;

/// The single prompt sent to the text-generation service for one
/// recommendation. Built from already-ranked output only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub score: i32,
    pub subject_filter: String,
    /// Compact CSV of the top rows, header included.
    pub table: String,
    pub row_count: usize,
}

impl AnalysisRequest {
    /// `None` when there is nothing to analyse.
    pub fn from_recommendation(
        recommendation: &Recommendation,
        top_n: usize,
    ) -> Result<Option<Self>, AdvisorError> {
        let rows: Vec<&RecommendationRow> = recommendation.rows.iter().take(top_n).collect();
        if rows.is_empty() {
            return Ok(None);
        }

        Ok(Some(Self {
            score: recommendation.summary.score,
            subject_filter: recommendation.summary.subject_filter.clone(),
            table: render_table(&rows)?,
            row_count: rows.len(),
        }))
    }

    pub fn prompt(&self) -> String {
        let subject = if self.subject_filter.is_empty() {
            "不限"
        } else {
            self.subject_filter.as_str()
        };

        format!(
            "我是考生，分数 {score}。\n\
             我筛选出的意向专业是：{subject}。\n\
             \n\
             系统算法推荐了以下 {count} 个最匹配的学校（基于历年录取数据）：\n\
             {table}\n\
             请你作为资深高考志愿填报专家，帮我深度分析：\n\
             1. 【性价比分析】：哪个学校虽然分不高，但是是985/211或者有特色？\n\
             2. 【风险提示】：对于标记为\"冲刺\"的学校，我有多大概率滑档？\n\
             3. 【最终建议】：如果是你，你会优先把哪个填在第一个位置？为什么？\n\
             \n\
             请用表格+加粗重点的方式回答。",
            score = self.score,
            count = self.row_count,
            table = self.table,
        )
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![ChatMessage::user(self.prompt())]
    }
}

fn render_table(rows: &[&RecommendationRow]) -> Result<String, AdvisorError> {
    let encoding = |e: &dyn std::fmt::Display| AdvisorError::Encoding(e.to_string());

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(DISPLAY_COLUMNS).map_err(|e| encoding(&e))?;
    for row in rows {
        let min_score = row.min_score.to_string();
        let gap = row.gap.to_string();
        writer
            .write_record([
                row.school.as_str(),
                row.program.as_str(),
                min_score.as_str(),
                gap.as_str(),
                row.tier_label.as_str(),
                row.city.as_str(),
                flag(row.tier985),
                flag(row.tier211),
                row.subject_requirement.as_str(),
            ])
            .map_err(|e| encoding(&e))?;
    }

    let bytes = writer.into_inner().map_err(|e| encoding(e.error()))?;
    String::from_utf8(bytes).map_err(|e| encoding(&e))
}

fn flag(value: bool) -> &'static str {
    if value {
        "是"
    } else {
        "否"
    }
}
