use crate::{
    cli::OutputFormat,
    error::Result,
    report::{BenchReport, KindReport},
};
#[cfg(feature = "colored-output")]
use colored::*;
use std::io::Write;
#[cfg(feature = "table-output")]
use tabled::{Table, Tabled, settings::Style};

pub struct OutputManager {
    colored: bool,
}

impl OutputManager {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn format_report(&self, report: &BenchReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(self.format_pretty(report)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::JsonCompact => Ok(serde_json::to_string(report)?),
            #[cfg(feature = "table-output")]
            OutputFormat::Table => Ok(self.format_table(report)),
            #[cfg(not(feature = "table-output"))]
            OutputFormat::Table => Ok(self.format_pretty(report)),
            OutputFormat::Csv => Ok(Self::format_csv(report)),
        }
    }

    fn format_pretty(&self, report: &BenchReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} iterations, averaged over {} runs, param {}\n",
            self.colorize("Invoke bench:", &Color::Green, true),
            report.config.iterations,
            report.config.average_over,
            report.config.param,
        ));

        for kind in &report.kinds {
            output.push('\n');
            output.push_str(&self.colorize(
                &format!("{} ({}):", kind.kind, kind.invoker),
                &Color::Green,
                true,
            ));
            output.push('\n');
            output.push_str(&format!(
                "  {:<26} {:>12} {:>13} {:>9}\n",
                "strategy", "time (s)", "delta (s)", "%"
            ));

            for row in &kind.rows {
                // Pad before colouring so escape codes do not skew the columns.
                let strategy = format!("{:<26}", row.strategy.to_string());
                let diff = format!("{:>13}", Self::signed(row.diff_secs, 6));
                let pct = format!("{:>9}", Self::signed(row.pct, 2));
                output.push_str(&format!(
                    "  {} {:>12.6} {} {}\n",
                    self.colorize(&strategy, &Color::Yellow, false),
                    row.time_secs,
                    self.colorize_diff(&diff, row.diff_secs),
                    self.colorize_diff(&pct, row.diff_secs),
                ));
            }
        }

        output
    }

    #[cfg(feature = "table-output")]
    fn format_table(&self, report: &BenchReport) -> String {
        #[derive(Tabled)]
        struct TableRow {
            kind: String,
            strategy: String,
            #[tabled(rename = "time (s)")]
            time: String,
            #[tabled(rename = "delta (s)")]
            diff: String,
            #[tabled(rename = "%")]
            pct: String,
        }

        let rows: Vec<TableRow> = report
            .kinds
            .iter()
            .flat_map(|kind| {
                kind.rows.iter().map(move |row| TableRow {
                    kind: kind.kind.to_string(),
                    strategy: row.strategy.to_string(),
                    time: format!("{:.6}", row.time_secs),
                    diff: Self::signed(row.diff_secs, 6),
                    pct: Self::signed(row.pct, 2),
                })
            })
            .collect();

        let mut table = Table::new(rows).with(Style::modern()).to_string();
        table.push('\n');
        table
    }

    fn format_csv(report: &BenchReport) -> String {
        let mut output = String::new();
        output.push_str("kind,strategy,time_secs,diff_secs,pct\n");

        for kind in &report.kinds {
            Self::push_csv_rows(&mut output, kind);
        }

        output
    }

    fn push_csv_rows(output: &mut String, kind: &KindReport) {
        for row in &kind.rows {
            output.push_str(&format!(
                "{},{},{},{},{}\n",
                kind.kind, row.strategy, row.time_secs, row.diff_secs, row.pct
            ));
        }
    }

    /// Fixed precision with an explicit `+` on positive values.
    fn signed(value: f64, precision: usize) -> String {
        if value > 0.0 {
            format!("+{value:.precision$}")
        } else {
            format!("{value:.precision$}")
        }
    }

    fn colorize_diff(&self, text: &str, diff: f64) -> String {
        if diff > 0.0 {
            self.colorize(text, &Color::Red, true)
        } else {
            self.colorize(text, &Color::Green, false)
        }
    }

    fn colorize(&self, text: &str, color: &Color, bold: bool) -> String {
        #[cfg(feature = "colored-output")]
        {
            if self.colored {
                let colored_text = match color {
                    Color::Green => text.green(),
                    Color::Yellow => text.yellow(),
                    Color::Red => text.red(),
                };
                if bold {
                    colored_text.bold().to_string()
                } else {
                    colored_text.to_string()
                }
            } else {
                text.to_string()
            }
        }

        #[cfg(not(feature = "colored-output"))]
        {
            let _ = (self.colored, color, bold);
            text.to_string()
        }
    }
}

enum Color {
    Green,
    Yellow,
    Red,
}

pub fn write_output(content: &str, output_file: Option<&std::path::Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
        }
        None => {
            print!("{content}");
            std::io::stdout().flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::TargetKind;
    use crate::report::ReportRow;
    use crate::suite::Strategy;
    use invoke::{BenchConfig, InvokerKind};

    fn sample_report() -> BenchReport {
        BenchReport {
            config: BenchConfig::builder().iterations(1000).average_over(2).param(42).build(),
            kinds: vec![KindReport {
                kind: TargetKind::Function,
                invoker: InvokerKind::Function,
                baseline_secs: 0.5,
                rows: vec![
                    ReportRow {
                        strategy: Strategy::Direct,
                        time_secs: 0.25,
                        diff_secs: -0.25,
                        pct: -50.0,
                    },
                    ReportRow {
                        strategy: Strategy::CallUserFunc,
                        time_secs: 0.5,
                        diff_secs: 0.0,
                        pct: 0.0,
                    },
                    ReportRow {
                        strategy: Strategy::InvokeCallUserFunc,
                        time_secs: 0.75,
                        diff_secs: 0.25,
                        pct: 50.0,
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_csv_output() {
        let output = OutputManager::new(false)
            .format_report(&sample_report(), OutputFormat::Csv)
            .unwrap();
        assert_eq!(
            output,
            "kind,strategy,time_secs,diff_secs,pct\n\
             function,direct,0.25,-0.25,-50\n\
             function,call_user_func,0.5,0,0\n\
             function,invoke_call_user_func,0.75,0.25,50\n"
        );
    }

    #[test]
    fn test_pretty_output_signs_positive_diffs() {
        let output = OutputManager::new(false)
            .format_report(&sample_report(), OutputFormat::Pretty)
            .unwrap();

        assert!(output.starts_with("Invoke bench: 1000 iterations, averaged over 2 runs, param 42\n"));
        assert!(output.contains("function (function):\n"));
        assert!(output.contains("+0.250000"));
        assert!(output.contains("+50.00"));
        assert!(output.contains("-0.250000"));
        assert!(!output.contains("+0.000000"));
    }

    #[test]
    fn test_json_output() {
        let output = OutputManager::new(false)
            .format_report(&sample_report(), OutputFormat::JsonCompact)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["config"]["iterations"], 1000);
        assert_eq!(value["kinds"][0]["kind"], "function");
        assert_eq!(value["kinds"][0]["invoker"], "function");
        assert_eq!(value["kinds"][0]["rows"][2]["strategy"], "invoke_call_user_func");
        assert_eq!(value["kinds"][0]["rows"][0]["pct"], -50.0);
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.csv");
        write_output("a,b\n", Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n");
    }
}
