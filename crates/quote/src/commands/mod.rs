mod decode;
mod encode;
mod verify;

use crate::Cli;
use crate::CommandResult;
use decode::DecodeCmd;
use encode::EncodeCmd;
use verify::VerifyCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "quote")]
pub(crate) enum CommandEnum {
    /// Quote script files and print their interchange text.
    Encode(Box<EncodeCmd>),

    /// Replay interchange text and print the rebuilt source.
    Decode(Box<DecodeCmd>),

    /// Check that script files survive a full quote/replay round trip.
    Verify(Box<VerifyCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Encode(cmd) => cmd.run(cli).await,
            Self::Decode(cmd) => cmd.run(cli).await,
            Self::Verify(cmd) => cmd.run(cli).await,
        }
    }
}

/// Quoting flags shared by `encode` and `verify`.
#[derive(Debug, clap::Args)]
pub(crate) struct QuotingArgs {
    #[arg(
        help="Drop whitespace trivia while quoting; replay re-derives the \
             standard layout.",
        long,
    )]
    default_formatting: bool,

    #[arg(
        help="Keep modifier calls even when they don't change the rendered \
             text.",
        long,
    )]
    keep_redundant_calls: bool,

    #[arg(
        default_values_t=[
            "script".to_string(),
            "scr".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    script_file_exts: Vec<String>,
}
impl QuotingArgs {
    pub(crate) fn options(&self) -> libquote::QuoterOptions {
        libquote::QuoterOptions {
            use_default_formatting: self.default_formatting,
            remove_redundant_modifying_calls: !self.keep_redundant_calls,
        }
    }
}
