//! CLI result presenter and progress reporter.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use su2run_core::settings::AeroResult;
use su2run_orchestration::interfaces::{CaseOutcome, ProgressReporter, ResultPresenter};

use crate::output::{format_coefficient, format_duration};
use crate::ui;

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_cases(&self, outcomes: &[CaseOutcome]) {
        if self.quiet {
            return;
        }

        ui::print_header("Cases");
        for outcome in outcomes {
            let tools: Vec<&str> = outcome.tools.iter().map(|t| t.as_str()).collect();
            println!(
                "  {:<40} {:>10}  {}",
                outcome.name,
                format_duration(outcome.duration),
                tools.join(" > ")
            );
        }
        ui::print_success(&format!("{} case(s) completed", outcomes.len()));
    }

    fn present_results(&self, results: &[AeroResult]) {
        if self.quiet {
            for r in results {
                println!(
                    "{} {} {}",
                    r.case,
                    format_coefficient(r.cl, 6),
                    format_coefficient(r.cd, 6)
                );
            }
            return;
        }

        ui::print_header("Aerodynamic coefficients");
        println!(
            "  {:<40} {:>6} {:>6} {:>9} {:>9} {:>9} {:>8}",
            "Case", "Mach", "AoA", "CL", "CD", "CMy", "CL/CD"
        );
        println!("  {:-<92}", "");
        for r in results {
            println!(
                "  {:<40} {:>6} {:>6} {:>9} {:>9} {:>9} {:>8}",
                r.case,
                format_coefficient(r.mach, 2),
                format_coefficient(r.aoa, 1),
                format_coefficient(r.cl, 5),
                format_coefficient(r.cd, 5),
                format_coefficient(r.cmy, 5),
                format_coefficient(r.efficiency, 2),
            );
            if self.verbose {
                println!(
                    "  {:<40} CS={} CMx={} CMz={} wetted area={}",
                    "",
                    format_coefficient(r.cs, 5),
                    format_coefficient(r.cmx, 5),
                    format_coefficient(r.cmz, 5),
                    format_coefficient(r.wetted_area, 3),
                );
            }
        }
        if results.is_empty() {
            ui::print_warning("no case results found");
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}

/// Progress bar over the cases of a multi-case run.
pub struct CLIProgressReporter {
    bar: ProgressBar,
}

impl CLIProgressReporter {
    /// Create a reporter; `quiet` hides the bar.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let bar = ProgressBar::new(0);
        if quiet {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        if let Ok(style) =
            ProgressStyle::with_template("{spinner} [{elapsed_precise}] {bar:30} {pos}/{len} {msg}")
        {
            bar.set_style(style);
        }
        Self { bar }
    }
}

impl ProgressReporter for CLIProgressReporter {
    fn case_started(&self, index: usize, total: usize, name: &str) {
        self.bar.set_length(total as u64);
        self.bar.set_position(index as u64);
        self.bar.set_message(name.to_string());
    }

    fn case_finished(&self, outcome: &CaseOutcome) {
        self.bar.inc(1);
        self.bar
            .println(format!("{} done in {}", outcome.name, format_duration(outcome.duration)));
    }

    fn complete(&self) {
        self.bar.finish_and_clear();
    }
}
