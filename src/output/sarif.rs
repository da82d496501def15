use crate::issue::{IssueCode, ValidationReport};
use crate::rules;
use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation, Region,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};
use std::collections::BTreeSet;

pub fn format(report: &ValidationReport) -> String {
    let issues = &report.result.issues;

    let codes: Vec<IssueCode> = issues
        .iter()
        .map(|i| i.issue_code)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let catalogue = rules::all_rules();
    let descriptors: Vec<ReportingDescriptor> = codes
        .iter()
        .map(|code| {
            let mut rule = ReportingDescriptor::builder()
                .id(code.as_str().to_string())
                .build();
            let help: Vec<&str> = catalogue
                .iter()
                .filter(|r| r.code == *code)
                .map(|r| r.remediation)
                .collect();
            rule.help = Some(
                MultiformatMessageString::builder()
                    .text(help.join("; "))
                    .build(),
            );
            rule
        })
        .collect();

    let results: Vec<SarifResult> = issues
        .iter()
        .map(|issue| {
            let mut result = SarifResult::builder()
                .message(Message::builder().text(issue.issue_text.clone()).build())
                .build();

            result.rule_id = Some(issue.issue_code.as_str().to_string());
            result.level = Some(ResultLevel::Error);
            result.rule_index = codes
                .iter()
                .position(|c| *c == issue.issue_code)
                .map(|i| i as i64);

            let begin = issue.location.position.begin;
            let mut physical = PhysicalLocation::builder().build();
            physical.artifact_location = Some(
                ArtifactLocation::builder()
                    .uri(issue.location.path.replace('\\', "/"))
                    .build(),
            );
            // SARIF columns are 1-based.
            physical.region = Some(
                Region::builder()
                    .start_line(begin.line as i64)
                    .start_column(begin.column as i64 + 1)
                    .build(),
            );

            let mut location = Location::builder().build();
            location.physical_location = Some(physical);
            result.locations = Some(vec![location]);

            result
        })
        .collect();

    let driver = ToolComponent::builder()
        .name("armory")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(descriptors)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed")
}
