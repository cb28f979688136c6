use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use skillkit_skills::quick_validate;

#[derive(Parser)]
#[command(name = "quick-validate", about = "Validate a skill's SKILL.md frontmatter")]
struct Args {
    /// Path to the skill directory
    skill_directory: PathBuf,
}

fn main() -> ExitCode {
    let args: Args = match skillkit_cli::parse_args() {
        Ok(args) => args,
        Err(code) => return code,
    };
    skillkit_cli::init_tracing();

    let report = quick_validate(&args.skill_directory);
    println!("{}", report.message);

    if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
