//! Terminal rendering of the coaching report.
//!
//! Lays out the decoded analysis as the player sees it: overall score with
//! color bands, coach summary, biomechanical breakdown with status badges,
//! strengths, improvement points, and the recommended drill.

use console::{style, Style};

use crate::models::{AnalysisResult, AspectStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Band of the overall score, with cut points at 90, 70, and 50.
fn score_band(score: u8) -> ScoreBand {
    match score {
        s if s >= 90 => ScoreBand::Excellent,
        s if s >= 70 => ScoreBand::Good,
        s if s >= 50 => ScoreBand::Fair,
        _ => ScoreBand::Poor,
    }
}

fn score_style(score: u8) -> Style {
    match score_band(score) {
        ScoreBand::Excellent => Style::new().green().bold(),
        ScoreBand::Good => Style::new().green(),
        ScoreBand::Fair => Style::new().yellow(),
        ScoreBand::Poor => Style::new().red(),
    }
}

fn status_style(status: AspectStatus) -> Style {
    match status {
        AspectStatus::Excelente => Style::new().green(),
        AspectStatus::Bom => Style::new().blue(),
        AspectStatus::Atencao => Style::new().yellow(),
        AspectStatus::Critico => Style::new().red(),
    }
}

/// Render the full report as a styled string.
///
/// Styling degrades to plain text when the output is not a terminal.
pub fn render(result: &AnalysisResult) -> String {
    let mut output = String::new();
    let divider = "─".repeat(62);

    output.push_str(&format!("{}\n", style(&divider).dim()));
    output.push_str(&format!(
        "{}  {}\n",
        style("Resumo do Treinador").bold(),
        score_style(result.overall_score)
            .apply_to(format!("{}/100", result.overall_score)),
    ));
    output.push_str(&format!("{}\n", result.summary));

    output.push_str(&format!("\n{}\n", style("Análise Biomecânica").bold()));
    for item in &result.breakdown {
        output.push_str(&format!(
            "  {} {}\n",
            status_style(item.status).apply_to(format!("[{}]", item.status.label())),
            style(&item.aspect).bold(),
        ));
        output.push_str(&format!("    {}\n", item.feedback));
    }

    output.push_str(&format!("\n{}\n", style("Pontos Fortes").bold()));
    for strength in &result.strengths {
        output.push_str(&format!("  {} {}\n", style("✓").green(), strength));
    }

    output.push_str(&format!(
        "\n{}\n",
        style("Oportunidades de Melhoria").bold()
    ));
    for improvement in &result.improvements {
        output.push_str(&format!("  {} {}\n", style("!").yellow(), improvement));
    }

    output.push_str(&format!("\n{}\n", style("Recomendação de Treino").bold()));
    output.push_str(&format!("  {}\n", result.drill_recommendation));
    output.push_str(&format!("{}\n", style(&divider).dim()));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BreakdownItem;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            overall_score: 82,
            summary: "Saque sólido com boa base.".to_string(),
            breakdown: vec![
                BreakdownItem {
                    aspect: "Toss".to_string(),
                    status: AspectStatus::Bom,
                    feedback: "Altura consistente.".to_string(),
                },
                BreakdownItem {
                    aspect: "Ponto de contato".to_string(),
                    status: AspectStatus::Atencao,
                    feedback: "Contato um pouco atrás do ideal.".to_string(),
                },
            ],
            strengths: vec!["Equilíbrio".to_string(), "Ritmo".to_string()],
            improvements: vec!["Extensão do braço".to_string()],
            drill_recommendation: "Saques contra a cerca focando na extensão.".to_string(),
        }
    }

    #[test]
    fn test_render_includes_every_section() {
        let report = render(&sample_result());

        assert!(report.contains("Resumo do Treinador"));
        assert!(report.contains("82/100"));
        assert!(report.contains("Saque sólido com boa base."));
        assert!(report.contains("Análise Biomecânica"));
        assert!(report.contains("Pontos Fortes"));
        assert!(report.contains("Oportunidades de Melhoria"));
        assert!(report.contains("Recomendação de Treino"));
        assert!(report.contains("Saques contra a cerca focando na extensão."));
    }

    #[test]
    fn test_render_labels_each_breakdown_status() {
        let report = render(&sample_result());

        assert!(report.contains("[Bom]"));
        assert!(report.contains("Toss"));
        assert!(report.contains("[Atenção]"));
        assert!(report.contains("Ponto de contato"));
        assert!(report.contains("Contato um pouco atrás do ideal."));
    }

    #[test]
    fn test_render_lists_strengths_and_improvements() {
        let report = render(&sample_result());

        assert!(report.contains("Equilíbrio"));
        assert!(report.contains("Ritmo"));
        assert!(report.contains("Extensão do braço"));
    }

    #[test]
    fn test_score_bands_follow_cut_points() {
        assert_eq!(score_band(100), ScoreBand::Excellent);
        assert_eq!(score_band(90), ScoreBand::Excellent);
        assert_eq!(score_band(89), ScoreBand::Good);
        assert_eq!(score_band(70), ScoreBand::Good);
        assert_eq!(score_band(69), ScoreBand::Fair);
        assert_eq!(score_band(50), ScoreBand::Fair);
        assert_eq!(score_band(49), ScoreBand::Poor);
        assert_eq!(score_band(0), ScoreBand::Poor);
    }
}
