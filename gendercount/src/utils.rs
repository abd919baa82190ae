// src/utils.rs
use std::collections::BTreeMap;

use crate::models::{Analysis, PronounTally};

fn format_names(matches: &BTreeMap<String, String>) -> String {
    let pairs: Vec<String> = matches
        .iter()
        .map(|(name, frequency)| format!("{name}: {frequency}"))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}

fn format_tally(tally: &PronounTally) -> String {
    format!("({}, {}, {})", tally.base, tally.object, tally.possessive)
}

/// Renders an analysis as the Swedish terminal summary.
#[must_use]
pub fn format_report(analysis: &Analysis) -> String {
    let lines = [
        format!(
            "Det finns {} unika kvinnonamn i texten.",
            analysis.female.unique()
        ),
        format!(
            "Det finns {} unika mansnamn i texten.",
            analysis.male.unique()
        ),
        format!("Kvinnonamn: {}", format_names(&analysis.female.matches)),
        format!("Mansnamn: {}", format_names(&analysis.male.matches)),
        format!("Absoluta tal kvinnor: {}", analysis.female.total),
        format!("Absoluta tal män: {}", analysis.male.total),
        format!("Antalet hen, henom, hens : {}", format_tally(&analysis.hen)),
        format!("Antalet hon, henne, hennes : {}", format_tally(&analysis.hon)),
        format!("Antalet han*, honom, hans* : {}", format_tally(&analysis.han)),
        String::from("Obs: \"Han\" och \"Hans\" kan också vara manliga förnamn."),
    ];

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

pub fn print_report(analysis: &Analysis) {
    print!("{}", format_report(analysis));
}
