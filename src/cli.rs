use crate::steps::ReplaceArgs;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "template-rename",
    version,
    about = "Replace cpp-template placeholders with a new project name",
    after_help = "Examples:
  template-rename my-project
  template-rename MyAwesomeLib --no-backup
  template-rename game-engine --project-root /path/to/project"
)]
pub struct Cli {
    #[command(flatten)]
    pub args: ReplaceArgs,
}
