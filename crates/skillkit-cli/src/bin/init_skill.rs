use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use skillkit_cli::output;
use skillkit_skills::{InitOptions, init_skill};
use skillkit_types::{ScriptKind, TemplateLocale};

const NAME_RULES: &str = "\
Skill name requirements:
  - Hyphen-case identifier (e.g., 'data-analyzer')
  - Lowercase letters, digits, and hyphens only
  - Max 64 characters
  - Must match directory name exactly

Examples:
  init-skill my-new-skill --path skills/public
  init-skill my-api-helper --path skills/private
  init-skill custom-skill --path /custom/location";

#[derive(Parser)]
#[command(
    name = "init-skill",
    about = "Create a new skill directory from the template",
    after_help = NAME_RULES
)]
struct Args {
    /// Skill name, also used as the directory name
    skill_name: String,

    /// Directory to create the skill in
    #[arg(long)]
    path: PathBuf,

    /// Language of the placeholder text (en, ko)
    #[arg(long)]
    locale: Option<TemplateLocale>,

    /// Example script written to scripts/ (sh, py, cs)
    #[arg(long)]
    script: Option<ScriptKind>,
}

fn main() -> ExitCode {
    let args: Args = match skillkit_cli::parse_args() {
        Ok(args) => args,
        Err(code) => return code,
    };
    skillkit_cli::init_tracing();

    let defaults = skillkit_cli::load_init_defaults();
    let options = InitOptions {
        locale: args.locale.unwrap_or(defaults.locale),
        script: args.script.unwrap_or(defaults.script),
    };

    println!("🚀 Initializing skill: {}", args.skill_name);
    println!("   Location: {}", args.path.display());
    println!();

    let result = init_skill(&args.skill_name, &args.path, &options, |step| {
        println!("{}", output::init_step_line(step));
    });

    match result {
        Ok(skill_dir) => {
            println!("{}", output::init_summary(&args.skill_name, &skill_dir));
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", output::init_error_line(&e));
            ExitCode::FAILURE
        }
    }
}
