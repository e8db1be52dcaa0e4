//! Verdict messaging for the terminal.

use newscheck_core::Verdict;

/// Human-readable report for a verdict, in the tone the classifier's
/// front ends have always used: a headline line plus an advisory line.
pub fn verdict_report(verdict: Verdict) -> String {
    match verdict {
        Verdict::Real => format!(
            "{}: This article is likely truthful and credible.\n\
             Keep in mind that this is a machine learning prediction and not a guarantee.",
            verdict
        ),
        Verdict::Fake => format!(
            "{}: Caution advised. This article shows characteristics of disinformation.\n\
             Double-check sources and look for corroborating evidence from trusted news organizations.",
            verdict
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_report_leads_with_label() {
        let report = verdict_report(Verdict::Real);
        assert!(report.starts_with("REAL:"));
        assert!(report.contains("not a guarantee"));
    }

    #[test]
    fn fake_report_leads_with_label() {
        let report = verdict_report(Verdict::Fake);
        assert!(report.starts_with("FAKE:"));
        assert!(report.contains("Caution advised"));
    }
}
