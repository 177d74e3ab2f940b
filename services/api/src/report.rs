use clap::Args;
use minor_progress::catalog::CourseCatalog;
use minor_progress::config::AppConfig;
use minor_progress::error::AppError;
use minor_progress::insights::{provider_from_config, CareerInsights, InsightSource};
use minor_progress::progress::{MinorProgressReport, ProgressEvaluator};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ProgressArgs {
    /// Course catalog CSV (defaults to COURSE_CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Declared major of the student
    #[arg(long)]
    pub(crate) major: String,
    /// Completed courses, e.g. "CS 225"
    #[arg(required = true)]
    pub(crate) classes: Vec<String>,
}

#[derive(Args, Debug)]
pub(crate) struct InsightsArgs {
    /// Declared major of the student
    #[arg(long)]
    pub(crate) major: String,
    /// Minor being considered
    #[arg(long)]
    pub(crate) minor: String,
}

pub(crate) fn run_progress(args: ProgressArgs) -> Result<(), AppError> {
    let catalog_path = match args.catalog {
        Some(path) => path,
        None => AppConfig::load()?.catalog.path,
    };

    if args.major.is_empty() {
        return Err(AppError::Validation(
            minor_progress::advising::MISSING_PROGRESS_FIELDS.to_string(),
        ));
    }

    let catalog = CourseCatalog::from_path(&catalog_path)?;
    let report = ProgressEvaluator::default().evaluate(&args.classes, &catalog);
    print!("{}", render_progress(&args.major, &args.classes, &report));
    Ok(())
}

pub(crate) async fn run_insights(args: InsightsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let provider = provider_from_config(&config.insights)?;
    let insights = provider.insights(&args.major, &args.minor).await;
    print!("{}", render_insights(&insights));
    Ok(())
}

pub(crate) fn render_progress(
    major: &str,
    classes: &[String],
    report: &MinorProgressReport,
) -> String {
    let mut out = format!(
        "Minor progress for a {} major\nCompleted courses: {}\n\n",
        major,
        classes.join(", ")
    );

    for entry in report.entries() {
        out.push_str(&format!(
            "- {}: {:.1}% ({}/{} credit hours)\n",
            entry.minor, entry.percentage, entry.current_credit_hours, entry.required_credit_hours
        ));
        if !entry.required_matches.is_empty() {
            out.push_str(&format!(
                "    required: {}\n",
                entry.required_matches.join(", ")
            ));
        }
        if !entry.elective_matches.is_empty() {
            out.push_str(&format!(
                "    electives: {}\n",
                entry.elective_matches.join(", ")
            ));
        }
    }

    out
}

pub(crate) fn render_insights(insights: &CareerInsights) -> String {
    let record = &insights.insights;
    let source = match insights.source {
        InsightSource::GeminiApi => "generative model",
        InsightSource::BasicInsights => "static table",
    };

    let mut out = format!(
        "Career insights for {} + {} ({})\n",
        insights.major, insights.minor, source
    );
    out.push_str(&format!("Job types: {}\n", record.job_types.join(", ")));
    out.push_str(&format!(
        "Salary: entry {} | mid {} | senior {}\n",
        record.salary_range.entry, record.salary_range.mid, record.salary_range.senior
    ));
    out.push_str(&format!(
        "Top locations: {}\n",
        record.top_locations.join("; ")
    ));
    out.push_str(&format!(
        "Top companies: {}\n",
        record.top_companies.join(", ")
    ));
    out.push_str(&format!("Outlook: {}\n", record.growth_outlook));
    out.push_str(&format!("Key skills: {}\n", record.key_skills.join(", ")));
    out
}
