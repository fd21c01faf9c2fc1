use std::collections::BTreeMap;

use neuromate_core::models::answer::AnswerRecord;
use neuromate_core::models::category::Category;
use neuromate_core::models::demographics::{DemographicField, DemographicValue, Demographics};
use neuromate_core::models::diagnosis::{DiagnosisResult, Label, Severity};
use neuromate_core::models::report::ReportData;
use neuromate_core::models::score::CategoryScores;
use neuromate_export::docx::generate_docx;
use neuromate_export::pdf::generate_pdf;
use neuromate_export::{build_report_docx, build_report_pdf};
use neuromate_export::render::{render_report, render_template};
use neuromate_export::styles::DocumentStyles;

fn sample_report() -> ReportData {
    let mut demographics = Demographics::new();
    demographics.insert(DemographicField::Name, DemographicValue::Text("alex".into()));
    demographics.insert(DemographicField::Age, DemographicValue::Integer(7));

    let scores: CategoryScores = [(Category::Social, 5)].into_iter().collect();
    let per_category_labels: BTreeMap<_, _> = Category::ALL
        .iter()
        .map(|c| {
            let severity = if *c == Category::Social {
                Severity::Severe
            } else {
                Severity::Normal
            };
            (*c, severity)
        })
        .collect();

    ReportData {
        session_id: uuid::Uuid::new_v4(),
        generated_at: "2026-03-04T10:15:00Z".parse().unwrap(),
        demographics,
        scores,
        result: DiagnosisResult {
            label: Label::LikelyAsd,
            guidance: "Strong signs — urgent professional evaluation recommended".into(),
            per_category_labels,
            total_yes: 5,
        },
        answers: vec![
            AnswerRecord {
                category: Category::Social,
                question: "Do you find it hard to maintain eye contact with people?".into(),
                answer: "yes".into(),
            },
            AnswerRecord {
                category: Category::Communication,
                question: "Do you sometimes need extra time to respond during conversations?"
                    .into(),
                answer: String::new(),
            },
        ],
    }
}

#[test]
fn report_contains_every_section() {
    let rendered = render_report(&sample_report()).unwrap();

    assert!(rendered.starts_with("# NEUROMATE AUTISM SCREENING REPORT"));
    assert!(rendered.contains("Report Generated: 04 March 2026, 10:15 UTC"));
    assert!(rendered.contains("**Name:** alex"));
    assert!(rendered.contains("**Age:** 7"));
    assert!(rendered.contains("**Gender:** N/A"));
    assert!(rendered.contains("**Used ASD Screening Before:** N/A"));
    assert!(rendered.contains("**Assessment Outcome:** Likely ASD"));
    assert!(rendered.contains("**Total 'Yes' Responses:** 5"));
    assert!(rendered.contains("| Social | 5 | Severe |"));
    assert!(rendered.contains("| Learning | 0 | Normal |"));
    assert!(rendered.contains("- Immediate professional evaluation recommended."));
    assert!(rendered.contains(
        "- **Social:** Do you find it hard to maintain eye contact with people? (yes)"
    ));
    assert!(rendered.contains("(no answer)"));
    assert!(!rendered.contains("No category responses recorded."));
}

#[test]
fn line_breaks_inside_values_stay_on_one_line() {
    let mut report = sample_report();
    report.demographics.insert(
        DemographicField::Name,
        DemographicValue::Text("alex\n# x".into()),
    );
    report.answers[0].answer = "a\r\n| b |".into();

    let rendered = render_report(&report).unwrap();
    assert!(rendered.contains("**Name:** alex # x"));
    assert!(rendered.contains("(a | b |)"));
    assert!(!rendered.lines().any(|line| line.trim() == "# x"));
    assert!(!rendered.lines().any(|line| line.trim() == "| b |)"));
}

#[test]
fn categories_listed_in_presentation_order() {
    let rendered = render_report(&sample_report()).unwrap();
    let positions: Vec<usize> = Category::ALL
        .iter()
        .map(|c| rendered.find(&format!("| {} |", c.display_name())).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn custom_template_sees_report_fields() {
    let rendered = render_template(
        "custom",
        "{{ label }} / {{ total_yes }} / {{ categories | length }}",
        &sample_report(),
    )
    .unwrap();
    assert_eq!(rendered, "Likely ASD / 5 / 6");
}

#[test]
fn broken_template_is_a_parse_error() {
    let err = render_template("broken", "{% for %}", &sample_report()).unwrap_err();
    assert!(matches!(err, neuromate_export::error::ExportError::TemplateParse(_)));
}

#[test]
fn docx_output_is_a_zip_package() {
    let bytes = build_report_docx(&sample_report(), &DocumentStyles::default()).unwrap();
    assert!(bytes.len() > 1000);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn docx_handles_trailing_table_and_unclosed_bold() {
    let rendered = "# Title\n**unclosed bold\n| A | B |\n|---|---|\n| 1 | 2 |";
    let bytes = generate_docx(rendered, &DocumentStyles::default()).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn pdf_output_is_a_pdf_document() {
    let bytes = build_report_pdf(&sample_report(), &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"%PDF"));

    // The page break before the responses starts a second page.
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[test]
fn pdf_paginates_long_output() {
    let rendered = (0..200)
        .map(|i| format!("- **Item {i}:** answer \u{2014} yes"))
        .collect::<Vec<_>>()
        .join("\n");
    let bytes = generate_pdf(&rendered, &DocumentStyles::default()).unwrap();

    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert!(doc.get_pages().len() > 1);
}

#[test]
fn pdf_handles_trailing_table_and_unclosed_bold() {
    let rendered = "# Title\n**unclosed bold\n| A | B |\n|---|---|\n| 1 | 2 |";
    let bytes = generate_pdf(rendered, &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
