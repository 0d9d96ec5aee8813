use clap::Args;
use serde::Serialize;

use ruplace::defaults::{self, RuplaceConfig};
use ruplace::render::{self, ColorChoice};
use ruplace::replace::ReplaceResult;
use ruplace::walk::WalkOptions;
use ruplace::{paths, Query, ScanMode};

use crate::commands::CmdResult;

#[derive(Args)]
pub struct ReplaceArgs {
    /// File or directory to scan
    pub path: String,
    /// Text to look for (a regular expression with --regex)
    pub pattern: String,
    /// Replacement text; with --regex, groups are referenced as $1 or \1
    pub replacement: String,
    /// Treat the pattern as a regular expression
    #[arg(long, conflicts_with = "subvert")]
    pub regex: bool,
    /// Also replace the camel, snake, kebab and scream spellings of the pattern
    #[arg(long)]
    pub subvert: bool,
    /// Only scan files matching this glob (repeatable, directories only)
    #[arg(long, value_name = "GLOB")]
    pub include: Vec<String>,
    /// Color: auto, always, never (default from config)
    #[arg(long)]
    pub color: Option<String>,
    /// Config file to use instead of ~/.config/ruplace/ruplace.json
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,
}

impl ReplaceArgs {
    fn mode(&self) -> ScanMode {
        if self.regex {
            ScanMode::Regex
        } else if self.subvert {
            ScanMode::Subvert
        } else {
            ScanMode::Substring
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReplaceOutput {
    pub command: &'static str,
    pub path: String,
    pub pattern: String,
    pub replacement: String,
    #[serde(flatten)]
    pub result: ReplaceResult,
}

/// Scan and collect results. Exit code 1 when nothing matched.
pub fn run(args: &ReplaceArgs) -> CmdResult<ReplaceOutput> {
    let config = load_config(args)?;
    scan(args, &config)
}

/// Scan and render every changed line as a two-line diff followed by a
/// blank separator line.
pub fn run_diff(args: &ReplaceArgs) -> ruplace::Result<(String, i32)> {
    let config = load_config(args)?;
    let color = match &args.color {
        Some(choice) => ColorChoice::from_str(choice)?,
        None => config.defaults.color,
    };
    let (output, exit_code) = scan(args, &config)?;
    Ok((render_result(&output.result, color.apply()), exit_code))
}

fn scan(args: &ReplaceArgs, config: &RuplaceConfig) -> CmdResult<ReplaceOutput> {
    let query = Query::new(args.mode(), &args.pattern, &args.replacement)?;

    let options = WalkOptions {
        skip_dirs: config.defaults.skip_dirs.clone(),
        include: args.include.clone(),
    };
    let root = paths::expand(&args.path)?;
    let result = ruplace::replace_in_path(&root, &query, &options)?;

    ruplace::log_status!(
        "replace",
        "{} replacements on {} lines in {} files",
        result.total_replacements,
        result.total_lines,
        result.total_files
    );

    let exit_code = if result.total_replacements == 0 { 1 } else { 0 };

    Ok((
        ReplaceOutput {
            command: "replace",
            path: args.path.clone(),
            pattern: args.pattern.clone(),
            replacement: args.replacement.clone(),
            result,
        },
        exit_code,
    ))
}

fn render_result(result: &ReplaceResult, color: bool) -> String {
    let mut out = String::new();
    for file in &result.files {
        for line in &file.lines {
            out.push_str(&render::render_line_diff(
                &file.file,
                line.line,
                &line.input,
                &line.input_fragments,
                &line.output,
                &line.output_fragments,
                color,
            ));
            out.push('\n');
        }
    }
    out
}

fn load_config(args: &ReplaceArgs) -> ruplace::Result<RuplaceConfig> {
    match &args.config {
        Some(path) => defaults::load_config_from(&paths::expand(path)?),
        None => Ok(defaults::load_config()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(path: &str, pattern: &str, replacement: &str) -> ReplaceArgs {
        ReplaceArgs {
            path: path.to_string(),
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            regex: false,
            subvert: false,
            include: vec![],
            color: Some("never".to_string()),
            config: None,
        }
    }

    #[test]
    fn mode_prefers_regex_then_subvert() {
        let mut a = args("x", "p", "r");
        assert_eq!(a.mode(), ScanMode::Substring);
        a.subvert = true;
        assert_eq!(a.mode(), ScanMode::Subvert);
        a.regex = true;
        assert_eq!(a.mode(), ScanMode::Regex);
    }

    #[test]
    fn run_diff_renders_each_changed_line() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, "old\nkeep\nold and old\n").unwrap();

        let path = file.display().to_string();
        let (content, exit_code) = run_diff(&args(&path, "old", "new")).unwrap();

        assert_eq!(exit_code, 0);
        let expected = format!(
            "{p}:1 --- {{-old-}}\n{p}:1 +++ {{+new+}}\n\n\
             {p}:3 --- {{-old-}} and {{-old-}}\n{p}:3 +++ {{+new+}} and {{+new+}}\n\n",
            p = path
        );
        assert_eq!(content, expected);
    }

    #[test]
    fn run_without_matches_exits_one() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.txt"), "nothing here\n").unwrap();

        let path = dir.path().display().to_string();
        let (output, exit_code) = run(&args(&path, "absent", "x")).unwrap();

        assert_eq!(exit_code, 1);
        assert_eq!(output.result.total_replacements, 0);
    }

    #[test]
    fn run_rejects_bad_regex_before_reading_files() {
        let mut a = args("/nonexistent/path", "(", "x");
        a.regex = true;
        let err = run(&a).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_regex");
    }

    #[test]
    fn run_diff_rejects_unknown_color() {
        let mut a = args("/nonexistent/path", "a", "b");
        a.color = Some("sometimes".to_string());
        let err = run_diff(&a).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
    }
}
