//! The `run` command: read, lower and evaluate a JSON syntax tree.

use std::io::Read;

use minrb_eval::{eval_sexp, stdout_handler, EvalConfig, EvalError, SharedPrintHandler};
use minrb_ir::{Sexp, StringInterner};

/// Parsed `run` arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Input path; `-` reads stdin.
    pub path: String,
    pub config: EvalConfig,
}

/// Bad command-line arguments.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("missing input path")]
    MissingPath,
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid value for --max-depth: '{0}'")]
    InvalidDepth(String),
}

/// Why a run failed.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid syntax tree JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Parse the arguments following `run`.
pub fn parse_run_options(args: &[String]) -> Result<RunOptions, UsageError> {
    let mut path = None;
    let mut config = EvalConfig::default();

    for arg in args {
        if arg == "--strict" {
            config.strict_variables = true;
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            let limit = depth
                .parse::<usize>()
                .map_err(|_| UsageError::InvalidDepth(depth.to_string()))?;
            config.max_call_depth = Some(limit);
        } else if arg.starts_with("--") {
            return Err(UsageError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(UsageError::UnexpectedArgument(arg.clone()));
        }
    }

    Ok(RunOptions {
        path: path.ok_or(UsageError::MissingPath)?,
        config,
    })
}

/// Evaluate JSON `source` with output going to `print_handler`.
pub fn execute(
    source: &str,
    interner: &StringInterner,
    config: EvalConfig,
    print_handler: SharedPrintHandler,
) -> Result<(), RunError> {
    let sexp = Sexp::from_json(source)?;
    eval_sexp(&sexp, interner, config, print_handler)?;
    Ok(())
}

fn read_input(path: &str) -> Result<String, RunError> {
    let io_error = |source| RunError::Io {
        path: path.to_string(),
        source,
    };
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(io_error)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(io_error)
    }
}

/// Run a program file, printing to stdout. Exits with status 1 on failure.
pub fn run_file(options: &RunOptions) {
    tracing::debug!(path = %options.path, config = ?options.config, "run");
    let interner = StringInterner::new();
    let result = read_input(&options.path)
        .and_then(|source| execute(&source, &interner, options.config, stdout_handler()));

    if let Err(err) = result {
        eprintln!("error: {err}");
        if let RunError::Eval(eval_err) = &err {
            for frame in eval_err.trace() {
                eprintln!("  in `{frame}`");
            }
        }
        std::process::exit(1);
    }
}
