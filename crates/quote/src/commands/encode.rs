use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::QuotingArgs;
use crate::output_utils;
use crate::source_files;
use libquote::QuoterOptions;
use libquote_script::ScriptLanguage;
use rayon::prelude::*;
use std::fmt::Write;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct EncodeCmd {
    #[command(flatten)]
    quoting: QuotingArgs,

    #[arg(
        help="Pretty-print the interchange text.",
        long,
    )]
    pretty: bool,

    #[arg(
        help="Paths to one or more script files or directories containing \
             script files which need to be quoted.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for EncodeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let files = source_files::collect_source_files(
            &self.file_or_dir_paths,
            &self.quoting.script_file_exts,
        );
        let options = self.quoting.options();
        let pretty = self.pretty;

        let encoded: Vec<(&PathBuf, anyhow::Result<String>)> =
            files.paths
                .par_iter()
                .map(|path| (path, encode_file(path, options, pretty)))
                .collect();

        let show_headers = encoded.len() > 1;
        let mut stdout = String::new();
        let mut stderr = String::new();
        for error in &files.errors {
            let _ = writeln!(stderr, "{} {error:#}", output_utils::RED_X);
        }
        for (path, result) in encoded {
            match result {
                Ok(text) => {
                    if show_headers {
                        let _ = writeln!(stdout, "==> {} <==", path.display());
                    }
                    let _ = writeln!(stdout, "{text}");
                },
                Err(e) => {
                    let _ = writeln!(
                        stderr,
                        "{} {}: {e:#}",
                        output_utils::RED_X,
                        path.display(),
                    );
                },
            }
        }

        if stderr.is_empty() {
            CommandResult::stdout(format_args!("{stdout}"))
        } else {
            CommandResult::partial(stdout, stderr)
        }
    }
}

fn encode_file(
    path: &Path,
    options: QuoterOptions,
    pretty: bool,
) -> anyhow::Result<String> {
    let source = source_files::read_source(path)?;
    let text = libquote::quote_source_to_interchange(
        &ScriptLanguage,
        &source,
        options,
        pretty,
    )?;
    log::debug!(
        "Quoted {path:#?} ({} bytes) into {} bytes of interchange text.",
        source.len(),
        text.len(),
    );
    Ok(text)
}
