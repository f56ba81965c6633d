//! # RCC Beam CLI Application
//!
//! Terminal front end for singly reinforced beam design. Prompts for the
//! same five fields as the GUI form, prints the required steel area and the
//! limiting moment, then optionally checks a bar layout.
//!
//! Log output goes to stderr; set `RUST_LOG` to change the filter.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use rcc_core::calculations::rc_beam::{
    calculate, check_layout, BeamDesignResult, BeamInput, LayoutCheckResult,
};
use rcc_core::errors::CalcError;
use rcc_core::form::{parse_bar_layout, DesignForm};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn prompt_text(prompt: &str, default: &str) -> String {
    print!("{} [{}]: ", prompt, default);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rcc_core=info,rcc_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CalcError> {
    println!("RCC Beam Design - IS 456 Limit State");
    println!("====================================");
    println!();

    let defaults = DesignForm::default();
    let form = DesignForm {
        fck: prompt_text("Concrete Grade (fck) (MPa)", &defaults.fck),
        fy: prompt_text("Steel Grade (fy) (MPa)", &defaults.fy),
        width: prompt_text("Width of Beam (mm)", &defaults.width),
        depth: prompt_text("Depth of Beam (mm)", &defaults.depth),
        moment: prompt_text("Design Moment (kNm)", &defaults.moment),
    };
    tracing::info!(?form, "design form submitted");

    let (input, result) = design(&form)?;
    print_design(&result);

    println!();
    let count = prompt_text("Check bar layout - number of bars", "3");
    let dia = prompt_text("Check bar layout - bar diameter (mm)", "16");

    let check = parse_bar_layout(&count, &dia).and_then(|layout| check_layout(&input, layout))?;
    print_layout_check(&check);
    Ok(())
}

/// Parse the form and design the section it describes
fn design(form: &DesignForm) -> Result<(BeamInput, BeamDesignResult), CalcError> {
    let input = form.parse()?;
    let result = calculate(&input)?;
    Ok((input, result))
}

fn print_design(result: &BeamDesignResult) {
    println!();
    println!("═══════════════════════════════════════");
    println!("  BEAM DESIGN RESULTS - {}", result.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Section:");
    println!("  d      = {:.0} mm", result.effective_depth_mm);
    println!("  xu_lim = {:.2} mm", result.xu_lim_mm);
    if let (Some(concrete), Some(steel)) = (result.concrete_grade, result.steel_grade) {
        println!("  Grades = {} / {}", concrete, steel);
    }
    println!();
    println!("Required Area of Steel (mm^2): {}", result.ast_required_mm2);
    println!("Design Moment Limit (kNm): {}", result.mu_lim_knm);
    println!(
        "  pt = {:.2}%   Mu/Mu_lim = {:.2}",
        result.steel_ratio_percent, result.moment_utilization
    );
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(result) {
        println!("{}", json);
    }
}

fn print_layout_check(check: &LayoutCheckResult) {
    println!();
    println!("Layout {}:", check.layout.designation());
    println!("  Ast provided = {:.2} mm^2", check.ast_provided_mm2);
    println!("  xu = {:.2} mm  (xu_lim = {:.2} mm)", check.xu_mm, check.xu_lim_mm);
    println!(
        "  MoR = {:.2} kNm vs Mu = {:.2} kNm  {}",
        check.moment_of_resistance_knm,
        check.design_moment_knm,
        status_icon(check.adequate())
    );
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_default_form() {
        let (input, result) = design(&DesignForm::default()).unwrap();
        assert_eq!(input.width_mm, 250.0);
        assert_eq!(result.ast_required_mm2, 816.15);
    }

    #[test]
    fn test_design_errors_reach_caller() {
        let typo = DesignForm {
            width: "wide".to_string(),
            ..DesignForm::default()
        };
        assert_eq!(design(&typo).unwrap_err().error_code(), "INVALID_INPUT");

        let heavy = DesignForm {
            moment: "200".to_string(),
            ..DesignForm::default()
        };
        assert_eq!(design(&heavy).unwrap_err().error_code(), "OVER_REINFORCED");
    }

    #[test]
    fn test_status_icon() {
        assert_eq!(status_icon(true), "[OK]");
        assert_eq!(status_icon(false), "[FAIL]");
    }
}
