use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::QuotingArgs;
use crate::output_utils;
use crate::source_files;
use anyhow::bail;
use libquote::QuoterOptions;
use libquote::WhitespaceNormalizer;
use libquote_script::ScriptLanguage;
use libquote_script::parse_script;
use rayon::prelude::*;
use std::fmt::Write;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct VerifyCmd {
    #[command(flatten)]
    quoting: QuotingArgs,

    #[arg(
        help="Paths to one or more script files or directories containing \
             script files which need to be verified.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for VerifyCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let files = source_files::collect_source_files(
            &self.file_or_dir_paths,
            &self.quoting.script_file_exts,
        );
        let options = self.quoting.options();

        let results: Vec<(&PathBuf, anyhow::Result<usize>)> =
            files.paths
                .par_iter()
                .map(|path| (path, verify_file(path, options)))
                .collect();

        let mut report = String::new();
        let mut num_failed = files.errors.len();
        for error in &files.errors {
            let _ = writeln!(report, "{} {error:#}", output_utils::RED_X);
        }
        for (path, result) in &results {
            match result {
                Ok(num_bytes) => {
                    let _ = writeln!(
                        report,
                        "{} {} ({num_bytes} bytes)",
                        output_utils::GREEN_CHECK,
                        path.display(),
                    );
                },
                Err(e) => {
                    num_failed += 1;
                    let _ = writeln!(
                        report,
                        "{} {}: {e:#}",
                        output_utils::RED_X,
                        path.display(),
                    );
                },
            }
        }

        if num_failed == 0 {
            CommandResult::stdout(format_args!(
                concat!(
                    "{}",
                    "{} All script files round-tripped successfully:\n",
                    "  * Verified {} files.\n",
                    "  * Skipped {} non-script files.",
                ),
                report,
                output_utils::GREEN_CHECK,
                results.len(),
                files.num_skipped,
            ))
        } else {
            CommandResult::stderr(format_args!(
                "{report}{} {num_failed} of {} inputs failed to round-trip.",
                output_utils::RED_X,
                files.errors.len() + results.len(),
            ))
        }
    }
}

/// Quotes, encodes, decodes and replays one file, then compares the replayed
/// rendering against what the source should render to.
///
/// Returns the number of bytes compared.
fn verify_file(path: &Path, options: QuoterOptions) -> anyhow::Result<usize> {
    let source = source_files::read_source(path)?;
    let text = libquote::quote_source_to_interchange(
        &ScriptLanguage,
        &source,
        options,
        false,
    )?;
    let replayed = libquote::parse_interchange(
        &ScriptLanguage,
        &text,
        options.use_default_formatting,
    )?
    .to_full_string();

    let expected =
        if options.use_default_formatting {
            ScriptLanguage
                .normalize_whitespace(parse_script(&source).tree())
                .to_full_string()
        } else {
            source
        };

    if replayed != expected {
        let offset =
            replayed.bytes()
                .zip(expected.bytes())
                .position(|(a, b)| a != b)
                .unwrap_or_else(|| replayed.len().min(expected.len()));
        bail!(
            "replayed text differs from the expected text at byte {offset} \
            (expected {} bytes, replayed {} bytes)",
            expected.len(),
            replayed.len(),
        );
    }
    log::debug!("Verified {path:#?}.");
    Ok(expected.len())
}
