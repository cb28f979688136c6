use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use skillkit_cli::output;
use skillkit_skills::package_skill;

#[derive(Parser)]
#[command(
    name = "package-skill",
    about = "Validate a skill folder and package it into a distributable .skill file",
    after_help = "Examples:\n  package-skill skills/public/my-skill\n  package-skill skills/public/my-skill ./dist"
)]
struct Args {
    /// Path to the skill folder
    skill_folder: PathBuf,

    /// Where to write the .skill file (defaults to the current directory)
    output_directory: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args: Args = match skillkit_cli::parse_args() {
        Ok(args) => args,
        Err(code) => return code,
    };
    skillkit_cli::init_tracing();

    println!("📦 Packaging skill: {}", args.skill_folder.display());
    if let Some(dir) = &args.output_directory {
        println!("   Output directory: {}", dir.display());
    }
    println!();

    let result = package_skill(
        &args.skill_folder,
        args.output_directory.as_deref(),
        |step| println!("{}", output::package_step_line(step)),
    );

    match result {
        Ok(archive) => {
            println!(
                "\n{} Successfully packaged skill to: {}",
                output::OK,
                archive.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", output::package_error_line(&e));
            ExitCode::FAILURE
        }
    }
}
