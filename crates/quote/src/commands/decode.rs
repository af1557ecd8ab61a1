use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use crate::source_files;
use libquote_script::ScriptLanguage;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct DecodeCmd {
    #[arg(
        help="Re-derive standard whitespace after replay. Use this for text \
             that was encoded with --default-formatting.",
        long,
    )]
    normalize: bool,

    #[arg(
        help="Path to a file holding interchange text.",
        name="FILE",
    )]
    file: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for DecodeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let text = match source_files::read_source(&self.file) {
            Ok(text) => text,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        match libquote::parse_interchange(&ScriptLanguage, &text, self.normalize) {
            Ok(node) => CommandResult::stdout(format_args!(
                "{}",
                node.to_full_string(),
            )),

            Err(e) => CommandResult::stderr(format_args!(
                "{} Errors replaying {:#?}: {e}",
                output_utils::RED_X,
                self.file,
            )),
        }
    }
}
