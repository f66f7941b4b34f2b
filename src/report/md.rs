use crate::types::report::RankingReport;
use crate::types::scoring::Criterion;

pub fn to_markdown(report: &RankingReport) -> String {
    let mut output = String::new();
    output.push_str("# Vehicle Recommendations\n\n");
    output.push_str(&format!("Profile: {}\n\n", report.profile));
    output.push_str(&format!(
        "Catalog: `{}` ({} considered, {} shown)\n\n",
        report.catalog_digest,
        report.considered,
        report.results.len()
    ));

    output.push_str("## Ranking\n\n");
    if report.results.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    let header: Vec<&str> = Criterion::ALL.iter().map(|c| c.key()).collect();
    output.push_str(&format!(
        "| # | vehicle | score | {} |\n",
        header.join(" | ")
    ));
    output.push_str(&format!("|---|---|---|{}\n", "---|".repeat(header.len())));
    for (rank, scored) in report.results.iter().enumerate() {
        let vehicle = [scored.record.manufacturer(), scored.record.model()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let cells: Vec<String> = scored
            .detailed_scores
            .iter()
            .map(|(_, score)| score.to_string())
            .collect();
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            rank + 1,
            if vehicle.is_empty() { "-" } else { vehicle.as_str() },
            scored.recommendation_score,
            cells.join(" | ")
        ));
    }

    output.push_str("\n## Reasons\n\n");
    for (rank, scored) in report.results.iter().enumerate() {
        output.push_str(&format!(
            "{}. {}\n",
            rank + 1,
            scored.recommendation_reason
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Ranking;
    use crate::profile::Profile;
    use crate::report::fixtures::sample_report;

    #[test]
    fn markdown_report_contains_sections() {
        let rendered = to_markdown(&sample_report());
        assert!(rendered.contains("# Vehicle Recommendations"));
        assert!(rendered.contains("Profile: general"));
        assert!(rendered.contains("## Ranking"));
        assert!(rendered.contains("| fuel_economy |"));
        assert!(rendered.contains("ホンダ フィット"));
        assert!(rendered.contains("## Reasons"));
    }

    #[test]
    fn markdown_report_handles_empty_results() {
        let report = RankingReport::new(
            Ranking {
                profile: Profile::Family,
                considered: 0,
                results: Vec::new(),
            },
            "deadbeefdeadbeef",
        );
        let rendered = to_markdown(&report);
        assert!(rendered.contains("Profile: family"));
        assert!(rendered.contains("- none"));
    }
}
