use serde::Serialize;
use tera::{Context, Tera};

use neuromate_core::models::demographics::DemographicField;
use neuromate_core::models::report::ReportData;

use crate::error::ExportError;

const TEMPLATE_NAME: &str = "screening_report.md";
const TEMPLATE: &str = include_str!("../templates/screening_report.md.tera");

#[derive(Serialize)]
struct ReportContext<'a> {
    generated_at: String,
    session_id: String,
    demographics: Vec<LabelledValue>,
    label: &'a str,
    guidance: &'a str,
    total_yes: u32,
    categories: Vec<CategoryRow>,
    recommendations: &'static [&'static str],
    answers: Vec<AnswerLine>,
}

#[derive(Serialize)]
struct LabelledValue {
    label: &'static str,
    value: String,
}

#[derive(Serialize)]
struct CategoryRow {
    name: &'static str,
    score: u32,
    severity: &'static str,
}

#[derive(Serialize)]
struct AnswerLine {
    category: &'static str,
    question: String,
    answer: String,
}

/// Render the built-in screening report template for `report`.
pub fn render_report(report: &ReportData) -> Result<String, ExportError> {
    render_template(TEMPLATE_NAME, TEMPLATE, report)
}

/// Render a Tera template (Jinja2 syntax) against a completed session.
///
/// The template sees `generated_at`, `session_id`, `demographics`
/// (`label`/`value` pairs in question order, `N/A` when missing), `label`,
/// `guidance`, `total_yes`, `categories` (`name`/`score`/`severity`),
/// `recommendations` and `answers` (`category`/`question`/`answer`).
pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &ReportData,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(build_context(report))?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

fn build_context(report: &ReportData) -> ReportContext<'_> {
    let demographics = DemographicField::ALL
        .iter()
        .map(|field| LabelledValue {
            label: field.display_label(),
            value: report
                .demographics
                .get(field)
                .map(|v| single_line(&v.to_string()))
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
        })
        .collect();

    let categories = report
        .scores
        .iter()
        .map(|(category, score)| CategoryRow {
            name: category.display_name(),
            score,
            severity: report
                .result
                .per_category_labels
                .get(&category)
                .map(|s| s.as_str())
                .unwrap_or("N/A"),
        })
        .collect();

    let answers = report
        .answers
        .iter()
        .map(|record| AnswerLine {
            category: record.category.display_name(),
            question: single_line(&record.question),
            answer: if record.answer.is_empty() {
                "no answer".to_string()
            } else {
                single_line(&record.answer)
            },
        })
        .collect();

    ReportContext {
        generated_at: report
            .generated_at
            .strftime("%d %B %Y, %H:%M UTC")
            .to_string(),
        session_id: report.session_id.to_string(),
        demographics,
        label: report.result.label.as_str(),
        guidance: &report.result.guidance,
        total_yes: report.result.total_yes,
        categories,
        recommendations: report.result.label.recommendations(),
        answers,
    }
}

/// Free-text values end up inside single Markdown lines; a line break in one
/// would start a heading, bullet or table row of its own.
fn single_line(value: &str) -> String {
    value
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
