use colored::*;

use crate::core::report::{ChangeReport, FileStatus};

pub struct OutputFormatter {
    format: String,
}

impl OutputFormatter {
    pub fn new(format: &str) -> Self {
        Self {
            format: format.to_string(),
        }
    }

    pub fn display(&self, report: &ChangeReport, updated_repo_link: Option<&str>) {
        match self.format.as_str() {
            "json" => self.display_json(report, updated_repo_link),
            _ => self.display_table(report, updated_repo_link),
        }
    }

    fn display_json(&self, report: &ChangeReport, updated_repo_link: Option<&str>) {
        let mut output = serde_json::json!({
            "change_report": report.files,
            "summary": {
                "total_issues": report.total_issues,
                "issues_addressed": report.issues_addressed,
                "issues_unaddressed": report.issues_unaddressed,
                "files_changed": report.files_changed,
                "total_lines_changed": report.total_lines_changed,
            },
        });
        if let Some(link) = updated_repo_link {
            output["updated_repo_link"] = serde_json::json!(link);
        }
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    }

    fn display_table(&self, report: &ChangeReport, updated_repo_link: Option<&str>) {
        println!();
        println!("{}", "Scanfix v0.1.0".bold());
        println!("{}", "─".repeat(64));
        println!();

        if let Some(link) = updated_repo_link {
            println!("  Updated repo: {}", link.cyan());
            println!();
        }

        if report.is_empty() {
            println!("  {}", "No findings to fix.".green());
            println!();
            return;
        }

        for change in &report.files {
            let label = match change.status {
                FileStatus::Fixed => "FIXED".green().bold(),
                FileStatus::SynthesizedPlaceholder => "PLACEHOLDER".yellow().bold(),
                FileStatus::SkippedNotFound => "SKIP".red().bold(),
            };
            println!("  {}  {}", label, change.file.bold());
            if change.full_path.to_string_lossy() != change.file {
                println!("          Resolved: {}", change.full_path.display());
            }
            println!("          {}", change.fix_explanation.dimmed());

            for issue in &change.issues_fixed {
                println!("          {} {}", "fixed:".green(), issue);
            }
            for issue in &change.issues_unaddressed {
                println!("          {} {}", "unaddressed:".yellow(), issue);
            }

            if !change.line_changes.is_empty() {
                println!();
                for line in change.diff.lines() {
                    if line.starts_with('+') {
                        println!("          {}", line.green());
                    } else if line.starts_with('-') {
                        println!("          {}", line.red());
                    } else {
                        println!("          {}", line);
                    }
                }
            }
            println!();
        }

        // Summary
        println!("{}", "─".repeat(64));
        println!();
        println!("  SUMMARY");
        println!(
            "    {} issue(s) across {} file(s): {} addressed, {} unaddressed",
            report.total_issues,
            report.files.len(),
            report.issues_addressed,
            report.issues_unaddressed
        );
        println!(
            "    {} file(s) changed, {} line(s) changed",
            report.files_changed, report.total_lines_changed
        );
        println!();
    }
}
