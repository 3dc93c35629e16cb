//! CLI result presenter.

use std::time::Duration;

use dicecalc_core::Distribution;
use dicecalc_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{format_count, format_duration, format_number, format_roll};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    full: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, full: bool) -> Self {
        Self {
            verbose,
            quiet,
            full,
        }
    }

    fn print_full(&self, dist: &Distribution) {
        for (sum, count) in dist.sums().zip(dist.counts()) {
            if self.quiet {
                println!("{count}");
            } else {
                println!("  {sum}: {count}");
            }
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(
        &self,
        algorithm: &str,
        faces: u32,
        num: u32,
        result: &Distribution,
        duration: Duration,
        details: bool,
    ) {
        if self.quiet {
            if self.full {
                self.print_full(result);
            } else {
                println!("{}", result.max_count());
            }
            return;
        }

        println!("Algorithm: {algorithm}");
        println!("Roll: {}", format_roll(faces, num));
        println!("Duration: {}", format_duration(duration));
        println!("Distinct sums: {}", format_number(result.num_sums() as u64));
        println!("Total outcomes: {}", format_count(&result.total(), self.verbose));

        if details {
            let max = result.max_count();
            println!("Stored entries: {}", format_number(result.half_counts().len() as u64));
            println!("Max count bits: {}", max.bits());
            println!("Max count digits: {}", max.to_string().len());
        }

        println!(
            "Max count (sum {}): {}",
            result.peak_sum(),
            format_count(result.max_count(), self.verbose)
        );

        if self.full {
            println!("Distribution:");
            self.print_full(result);
        }
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = if result.outcome.is_err() {
                "ERROR"
            } else {
                "OK"
            };
            println!(
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
