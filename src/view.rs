//! Terminal rendering of recommendations and the user-facing messages
//! around them.

use console::{measure_text_width, pad_str, Alignment};

use crate::types::{Recommendation, RecommendationRow, DISPLAY_COLUMNS};

pub const EMPTY_RESULT_MESSAGE: &str =
    "⚠️ 没有找到符合条件的学校，请尝试降低分数或清空筛选条件。";

pub fn headline(recommendation: &Recommendation) -> String {
    format!("为你找到 {} 个方案", recommendation.summary.total_matches)
}

pub fn unavailable_message(reason: &str) -> String {
    format!("❌ 参考数据不可用，无法生成推荐：{reason}")
}

fn cells(row: &RecommendationRow) -> [String; 9] {
    let flag = |v: bool| (if v { "是" } else { "否" }).to_string();
    [
        row.school.clone(),
        row.program.clone(),
        row.min_score.to_string(),
        format!("{:+}", row.gap),
        row.tier_label.clone(),
        row.city.clone(),
        flag(row.tier985),
        flag(row.tier211),
        row.subject_requirement.clone(),
    ]
}

/// Column-aligned table; widths account for double-width CJK glyphs.
pub fn render_table(rows: &[RecommendationRow]) -> String {
    let body: Vec<[String; 9]> = rows.iter().map(cells).collect();

    let mut widths = DISPLAY_COLUMNS.map(measure_text_width);
    for line in &body {
        for (width, cell) in widths.iter_mut().zip(line.iter()) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let mut out = format_line(DISPLAY_COLUMNS.iter().copied(), &widths);
    for line in &body {
        out.push_str(&format_line(line.iter().map(String::as_str), &widths));
    }
    out
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths.iter())
        .map(|(cell, width)| pad_str(cell, *width, Alignment::Left, None).into_owned())
        .collect();
    let mut line = padded.join("  ").trim_end().to_string();
    line.push('\n');
    line
}

/// Headline, then the table or the empty-result warning.
pub fn render(recommendation: &Recommendation) -> String {
    let mut out = headline(recommendation);
    out.push('\n');

    if recommendation.is_empty() {
        out.push_str(EMPTY_RESULT_MESSAGE);
        out.push('\n');
        return out;
    }

    out.push_str(&render_table(&recommendation.rows));
    let summary = &recommendation.summary;
    if summary.excluded_by_limit > 0 {
        out.push_str(&format!(
            "（仅显示前 {} 个，另有 {} 个未显示）\n",
            summary.rows_returned, summary.excluded_by_limit
        ));
    }
    out
}
