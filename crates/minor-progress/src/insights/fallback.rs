use super::{CareerInsights, InsightsProvider, InsightsRecord, SalaryRange};
use async_trait::async_trait;

/// Serves the pre-authored insights table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticInsightsProvider;

#[async_trait]
impl InsightsProvider for StaticInsightsProvider {
    async fn insights(&self, major: &str, minor: &str) -> CareerInsights {
        CareerInsights::basic(major, minor)
    }
}

/// Career category for a major; unknown majors are `general`.
pub fn major_category(major: &str) -> &'static str {
    match major {
        "Advertising" => "marketing",
        "Business" | "Economics" => "business",
        "Computer Science" => "technology",
        "Engineering" => "engineering",
        "Psychology" => "social_sciences",
        "Biology" => "sciences",
        "Mathematics" => "mathematics",
        "English" | "History" => "humanities",
        _ => "general",
    }
}

/// Static insights for the major's category. Categories without an authored
/// record share the general one.
pub fn basic_insights(major: &str) -> InsightsRecord {
    match major_category(major) {
        "marketing" => record(
            &[
                "Marketing Coordinator",
                "Digital Marketing Specialist",
                "Brand Manager",
                "Market Research Analyst",
                "Content Creator",
            ],
            ("$45,000", "$65,000", "$95,000+"),
            &["New York, NY", "Los Angeles, CA", "Chicago, IL", "Austin, TX", "Seattle, WA"],
            &["Google", "Meta", "Nike", "Procter & Gamble", "Coca-Cola"],
            "Strong growth in digital marketing - 13% increase projected by 2032",
            &["Digital Marketing", "Social Media", "Content Creation", "Analytics", "Creativity"],
        ),
        "business" => record(
            &[
                "Business Analyst",
                "Project Manager",
                "Management Consultant",
                "Financial Analyst",
                "Operations Manager",
            ],
            ("$55,000", "$75,000", "$110,000+"),
            &["New York, NY", "Chicago, IL", "Houston, TX", "Atlanta, GA", "Boston, MA"],
            &["Deloitte", "PwC", "Goldman Sachs", "JPMorgan Chase", "Amazon"],
            "Stable growth in business services - 8% increase projected by 2032",
            &[
                "Data Analysis",
                "Project Management",
                "Communication",
                "Leadership",
                "Problem Solving",
            ],
        ),
        "technology" => record(
            &[
                "Software Developer",
                "Data Analyst",
                "Systems Analyst",
                "IT Consultant",
                "Product Manager",
            ],
            ("$70,000", "$100,000", "$150,000+"),
            &["San Francisco, CA", "Seattle, WA", "Austin, TX", "New York, NY", "Boston, MA"],
            &["Google", "Microsoft", "Amazon", "Apple", "Meta"],
            "High growth in technology - 15% increase projected by 2032",
            &[
                "Programming",
                "Data Analysis",
                "Problem Solving",
                "Communication",
                "Continuous Learning",
            ],
        ),
        "engineering" => record(
            &[
                "Mechanical Engineer",
                "Electrical Engineer",
                "Civil Engineer",
                "Project Engineer",
                "Systems Engineer",
            ],
            ("$65,000", "$90,000", "$125,000+"),
            &["Houston, TX", "Seattle, WA", "San Francisco, CA", "Chicago, IL", "Boston, MA"],
            &["Boeing", "Tesla", "Google", "Apple", "SpaceX"],
            "Strong growth in engineering - 6% increase projected by 2032",
            &[
                "Technical Design",
                "Problem Solving",
                "Project Management",
                "CAD Software",
                "Mathematics",
            ],
        ),
        _ => record(
            &[
                "Project Coordinator",
                "Business Analyst",
                "Operations Specialist",
                "Research Assistant",
                "Program Manager",
            ],
            ("$50,000", "$70,000", "$100,000+"),
            &["Chicago, IL", "New York, NY", "Los Angeles, CA", "Houston, TX", "Phoenix, AZ"],
            &["Amazon", "Walmart", "Google", "Microsoft", "Apple"],
            "Moderate growth across industries - 5% increase projected by 2032",
            &["Communication", "Organization", "Problem Solving", "Adaptability", "Teamwork"],
        ),
    }
}

fn record(
    job_types: &[&str],
    (entry, mid, senior): (&str, &str, &str),
    top_locations: &[&str],
    top_companies: &[&str],
    growth_outlook: &str,
    key_skills: &[&str],
) -> InsightsRecord {
    InsightsRecord {
        job_types: owned(job_types),
        salary_range: SalaryRange {
            entry: entry.to_string(),
            mid: mid.to_string(),
            senior: senior.to_string(),
        },
        top_locations: owned(top_locations),
        top_companies: owned(top_companies),
        growth_outlook: growth_outlook.to_string(),
        key_skills: owned(key_skills),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
