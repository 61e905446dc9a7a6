//! Audit trail for entitlement calculations.
//!
//! The trace explains a finished [`CalculationResult`]: which anniversaries
//! were enumerated, why each row got its status, and which inputs were
//! ignored because a rule could not apply.

use crate::config::SubsidyPolicy;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, BreakdownRow, CalculationInput, CalculationResult,
    SubsidyStatus,
};

/// Builds the audit trace for `result`, computed from `input` under `policy`.
///
/// Steps are numbered from 1 in rule order: enumeration, deduction
/// targeting, one status step per row, aggregation, current-year flag.
/// An unconfigured input produces no steps, only a warning.
pub fn build_audit_trace(
    input: &CalculationInput,
    result: &CalculationResult,
    policy: &SubsidyPolicy,
    duration_us: u64,
) -> AuditTrace {
    let warnings = collect_warnings(input, result);

    let (Some(hire_date), Some(calc_date)) = (input.hire_date, input.calc_date) else {
        return AuditTrace {
            steps: Vec::new(),
            warnings,
            duration_us,
        };
    };

    let mut steps = Vec::with_capacity(result.breakdown.len() + 4);
    let mut step_number: u32 = 1;

    steps.push(AuditStep {
        step_number,
        rule_id: "anniversary_enumeration".to_string(),
        rule_name: "Anniversary Enumeration".to_string(),
        input: serde_json::json!({
            "hire_date": hire_date.to_string(),
            "calc_date": calc_date.to_string()
        }),
        output: serde_json::json!({
            "anniversaries": result
                .breakdown
                .iter()
                .map(|row| row.anniversary_date.to_string())
                .collect::<Vec<_>>()
        }),
        reasoning: format!(
            "{} anniversaries of {} fall on or before {}",
            result.breakdown.len(),
            hire_date,
            calc_date
        ),
    });
    step_number += 1;

    let deducted = result
        .breakdown
        .iter()
        .find(|row| row.status == SubsidyStatus::Deducted);
    steps.push(AuditStep {
        step_number,
        rule_id: "deduction_target".to_string(),
        rule_name: "Project Usage Deduction".to_string(),
        input: serde_json::json!({
            "project_usage_date": input.project_usage_date.map(|d| d.to_string()),
            "suspend_start": input.suspend_start.map(|d| d.to_string()),
            "suspend_end": input.suspend_end.map(|d| d.to_string())
        }),
        output: serde_json::json!({
            "target_year_index": deducted.map(|row| row.year_index),
            "target_anniversary": deducted.map(|row| row.anniversary_date.to_string())
        }),
        reasoning: match (deducted, input.project_usage_date) {
            (Some(row), Some(usage)) => format!(
                "Project grant used on {} during suspension consumes the {} anniversary",
                usage, row.anniversary_date
            ),
            (None, Some(usage))
                if input
                    .suspension_window()
                    .is_some_and(|window| window.contains(usage)) =>
            {
                format!(
                    "Project grant used on {} during suspension; deduction pending until the next anniversary",
                    usage
                )
            }
            _ => "No project grant was taken during the suspension window".to_string(),
        },
    });
    step_number += 1;

    for row in &result.breakdown {
        steps.push(status_step(step_number, row, policy));
        step_number += 1;
    }

    steps.push(AuditStep {
        step_number,
        rule_id: "aggregation".to_string(),
        rule_name: "Total Entitlement".to_string(),
        input: serde_json::json!({
            "rows": result.breakdown.len(),
            "eligible_rows": result.eligible_years()
        }),
        output: serde_json::json!({
            "total_amount": result.total_amount,
            "withheld_amount": result.withheld_total()
        }),
        reasoning: format!(
            "{} of {} years granted, total {} {}",
            result.eligible_years(),
            result.breakdown.len(),
            result.total_amount,
            policy.metadata().currency
        ),
    });
    step_number += 1;

    steps.push(AuditStep {
        step_number,
        rule_id: "current_year_count".to_string(),
        rule_name: "Current Year Entitlement".to_string(),
        input: serde_json::json!({
            "calc_date": calc_date.to_string()
        }),
        output: serde_json::json!({
            "current_year_count": result.current_year_count
        }),
        reasoning: if result.current_year_count == 1 {
            format!("The {} anniversary grants an eligible subsidy", calc_date.format("%Y"))
        } else {
            format!(
                "No eligible anniversary has occurred in {} by {}",
                calc_date.format("%Y"),
                calc_date
            )
        },
    });

    AuditTrace {
        steps,
        warnings,
        duration_us,
    }
}

/// Builds the status step for one breakdown row.
fn status_step(step_number: u32, row: &BreakdownRow, policy: &SubsidyPolicy) -> AuditStep {
    let tier_label = policy
        .tier_for_seniority(row.seniority_years)
        .and_then(|tier| tier.label.clone());

    let reasoning = match row.status {
        SubsidyStatus::Deducted => format!(
            "Year {} consumed by a project grant, {} withheld",
            row.year_index, row.theoretical_amount
        ),
        SubsidyStatus::Suspended => format!(
            "Anniversary {} falls in the suspension window, {} withheld",
            row.anniversary_date, row.theoretical_amount
        ),
        SubsidyStatus::NotEligible => format!(
            "Seniority of {} years reaches no subsidy tier",
            row.seniority_years
        ),
        SubsidyStatus::Eligible => format!(
            "Seniority of {} years grants {}",
            row.seniority_years, row.actual_amount
        ),
    };

    AuditStep {
        step_number,
        rule_id: "status_resolution".to_string(),
        rule_name: "Anniversary Status".to_string(),
        input: serde_json::json!({
            "year_index": row.year_index,
            "anniversary_date": row.anniversary_date.to_string(),
            "seniority_years": row.seniority_years,
            "tier": tier_label,
            "theoretical_amount": row.theoretical_amount
        }),
        output: serde_json::json!({
            "status": row.status,
            "actual_amount": row.actual_amount
        }),
        reasoning,
    }
}

fn warning(code: &str, message: String, severity: &str) -> AuditWarning {
    AuditWarning {
        code: code.to_string(),
        message,
        severity: severity.to_string(),
    }
}

/// Reports inputs that were supplied but could not take effect.
fn collect_warnings(input: &CalculationInput, result: &CalculationResult) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if !input.is_configured() {
        let missing: Vec<&str> = [
            ("hire_date", input.hire_date.is_none()),
            ("calc_date", input.calc_date.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, missing)| missing.then_some(field))
        .collect();

        warnings.push(warning(
            "MISSING_REQUIRED_DATE",
            format!("Missing {}; no entitlement calculated", missing.join(" and ")),
            "medium",
        ));
        return warnings;
    }

    if input.suspend_start.is_some() != input.suspend_end.is_some() {
        warnings.push(warning(
            "INCOMPLETE_SUSPENSION_WINDOW",
            "Only one end of the suspension window was given; suspension ignored".to_string(),
            "medium",
        ));
    }

    let window = input.suspension_window();
    if let Some(window) = window.filter(|w| w.is_inverted()) {
        warnings.push(warning(
            "INVERTED_SUSPENSION_WINDOW",
            format!(
                "Suspension starts {} after it ends {}; no date is suspended",
                window.start, window.end
            ),
            "high",
        ));
    }

    if let Some(usage) = input.project_usage_date {
        let deducted = result
            .breakdown
            .iter()
            .any(|row| row.status == SubsidyStatus::Deducted);

        match window {
            Some(w) if w.contains(usage) && !deducted => warnings.push(warning(
                "DEDUCTION_TARGET_NOT_REACHED",
                format!(
                    "Project grant used on {} has no later anniversary to deduct yet",
                    usage
                ),
                "low",
            )),
            Some(w) if w.contains(usage) => {}
            _ => warnings.push(warning(
                "PROJECT_USAGE_NOT_DEDUCTED",
                format!(
                    "Project grant used on {} outside any suspension window; no deduction applies",
                    usage
                ),
                "low",
            )),
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_entitlement;

    fn trace_for(
        hire: &str,
        calc: &str,
        start: &str,
        end: &str,
        usage: &str,
    ) -> (CalculationResult, AuditTrace) {
        let input = CalculationInput::parse(hire, calc, start, end, usage).unwrap();
        let policy = SubsidyPolicy::standard();
        let result = calculate_entitlement(&input, &policy);
        let trace = build_audit_trace(&input, &result, &policy, 0);
        (result, trace)
    }

    fn warning_codes(trace: &AuditTrace) -> Vec<&str> {
        trace.warnings.iter().map(|w| w.code.as_str()).collect()
    }

    #[test]
    fn test_steps_are_in_rule_order() {
        let (result, trace) = trace_for("2020-03-10", "2024-01-01", "", "", "");

        let rule_ids: Vec<&str> = trace.steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            rule_ids,
            vec![
                "anniversary_enumeration",
                "deduction_target",
                "status_resolution",
                "status_resolution",
                "status_resolution",
                "aggregation",
                "current_year_count",
            ]
        );
        assert_eq!(trace.steps.len(), result.breakdown.len() + 4);

        let numbers: Vec<u32> = trace.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, (1..=7).collect::<Vec<u32>>());
        assert!(trace.warnings.is_empty());
    }

    #[test]
    fn test_status_step_records_tier_and_status() {
        let (_, trace) = trace_for("2020-03-10", "2026-01-01", "2025-01-01", "2025-12-31", "");

        let suspended = trace
            .steps
            .iter()
            .find(|s| s.rule_id == "status_resolution" && s.output["status"] == "SUSPENDED")
            .unwrap();
        assert_eq!(suspended.input["anniversary_date"], "2025-03-10");
        assert_eq!(suspended.input["tier"], "3+ years");
        assert_eq!(suspended.output["actual_amount"], 0);
        assert!(suspended.reasoning.contains("suspension window"));
    }

    #[test]
    fn test_deduction_step_names_target() {
        let (_, trace) = trace_for(
            "2020-03-10",
            "2027-10-15",
            "2025-05-01",
            "2025-12-31",
            "2025-07-03",
        );

        let step = &trace.steps[1];
        assert_eq!(step.rule_id, "deduction_target");
        assert_eq!(step.output["target_anniversary"], "2026-03-10");
        assert_eq!(step.output["target_year_index"], 6);
        assert!(trace.warnings.is_empty());
    }

    #[test]
    fn test_aggregation_step_reports_totals() {
        let (result, trace) =
            trace_for("2020-03-10", "2026-01-01", "2025-01-01", "2025-12-31", "");

        let step = trace
            .steps
            .iter()
            .find(|s| s.rule_id == "aggregation")
            .unwrap();
        assert_eq!(step.output["total_amount"], result.total_amount);
        assert_eq!(step.output["withheld_amount"], 18_000);
    }

    #[test]
    fn test_missing_required_date_warns_without_steps() {
        let (_, trace) = trace_for("", "2024-01-01", "", "", "");

        assert!(trace.steps.is_empty());
        assert_eq!(warning_codes(&trace), vec!["MISSING_REQUIRED_DATE"]);
        assert!(trace.warnings[0].message.contains("hire_date"));
    }

    #[test]
    fn test_incomplete_window_warns() {
        let (_, trace) = trace_for("2020-03-10", "2024-01-01", "2023-01-01", "", "");
        assert_eq!(warning_codes(&trace), vec!["INCOMPLETE_SUSPENSION_WINDOW"]);
    }

    #[test]
    fn test_inverted_window_warns() {
        let (_, trace) = trace_for("2020-03-10", "2024-01-01", "2023-12-31", "2023-01-01", "");
        assert_eq!(warning_codes(&trace), vec!["INVERTED_SUSPENSION_WINDOW"]);
        assert_eq!(trace.warnings[0].severity, "high");
    }

    #[test]
    fn test_usage_outside_window_warns() {
        let (_, trace) = trace_for(
            "2020-03-10",
            "2027-10-15",
            "2025-05-01",
            "2025-12-31",
            "2024-01-01",
        );
        assert_eq!(warning_codes(&trace), vec!["PROJECT_USAGE_NOT_DEDUCTED"]);
    }

    #[test]
    fn test_usage_without_later_anniversary_warns() {
        let (_, trace) = trace_for(
            "2020-03-10",
            "2025-12-31",
            "2025-05-01",
            "2025-12-31",
            "2025-07-03",
        );
        assert_eq!(warning_codes(&trace), vec!["DEDUCTION_TARGET_NOT_REACHED"]);

        let step = &trace.steps[1];
        assert_eq!(step.rule_id, "deduction_target");
        assert!(step.output["target_year_index"].is_null());
        assert!(step.reasoning.contains("pending until the next anniversary"));
        assert!(!step.reasoning.contains("No project grant"));
    }

    #[test]
    fn test_deduction_step_without_usage() {
        let (_, trace) = trace_for("2020-03-10", "2027-10-15", "2025-05-01", "2025-12-31", "");
        assert_eq!(
            trace.steps[1].reasoning,
            "No project grant was taken during the suspension window"
        );
    }
}
