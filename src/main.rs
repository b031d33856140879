use anyhow::{Context, Result, bail};
use argh::FromArgs;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use simplearg::{Arguments, Help, Parameter, split_into_tokens_with};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `SIMPLEARG_LOG=debug`.
const LOG_ENV: &str = "SIMPLEARG_LOG";

#[derive(FromArgs)]
/// Dispatch demo verbs taken from the command line, response files or an
/// interactive prompt. Put verbs after `--` when they start with a dash.
struct Options {
    #[argh(option, short = 'f')]
    /// response file with more verbs; may be repeated
    file: Vec<PathBuf>,

    #[argh(option, default = "'#'")]
    /// comment marker used in response files and at the prompt
    comment: char,

    #[argh(switch, short = 'i')]
    /// read verbs line by line from an interactive prompt
    interactive: bool,

    #[argh(switch, short = 'v')]
    /// log every dispatched verb
    verbose: bool,

    #[argh(positional, greedy)]
    /// verbs and their values
    verbs: Vec<String>,
}

/// Handler for the demo verbs. Output is collected in `lines` and printed
/// once a batch of verbs has been dispatched.
#[derive(Debug, Default)]
struct Demo {
    unsigned: u32,
    short: i16,
    text: String,
    lines: Vec<String>,
}

impl Demo {
    const PARAMS: [Parameter<Demo>; 6] = [
        Parameter::new(Demo::option, "--option=", "a parameter with one option", ""),
        Parameter::new(Demo::foo, "foo", "a foo parameter", "f"),
        Parameter::new(Demo::bar, "bar", "a bar parameter", "b ba bbar"),
        Parameter::new(Demo::dash, "-", "a dash parameter", ""),
        Parameter::new(Demo::dash, "--", "a double dash parameter", ""),
        Parameter::new(Demo::help, "help", "prints this help", "--help -h -?"),
    ];

    fn foo(&mut self, name: &str, args: &mut Arguments<'_>) -> bool {
        args.replace_errors(format!("{name} "));
        if !args.getall((&mut self.unsigned, &mut self.text, &mut self.short)) {
            return false;
        }
        self.lines.push(format!(
            "Got: {name} {} {} {}",
            self.unsigned, self.text, self.short
        ));
        true
    }

    fn option(&mut self, name: &str, args: &mut Arguments<'_>) -> bool {
        args.replace_errors(format!("{name} "));
        if !args.getall(&mut self.text) {
            return false;
        }
        self.lines.push(format!("Got: {name}{}", self.text));
        true
    }

    fn bar(&mut self, name: &str, args: &mut Arguments<'_>) -> bool {
        args.replace_errors(format!("{name} "));
        if !args.getall((&mut self.unsigned, &mut self.text)) {
            return false;
        }
        self.lines.push(format!("Got: {name} {} {}", self.unsigned, self.text));
        true
    }

    fn dash(&mut self, name: &str, _args: &mut Arguments<'_>) -> bool {
        self.lines.push(format!("Got: {name}"));
        true
    }

    fn help(&mut self, _name: &str, _args: &mut Arguments<'_>) -> bool {
        let usage = Help::new(&Self::PARAMS).to_string();
        self.lines.push(format!("Usage:\n{}", usage.trim_end()));
        true
    }

    /// Dispatch everything left in `args`, then print what the verbs produced.
    fn dispatch(&mut self, args: &mut Arguments<'_>) -> Result<()> {
        if args.is_empty() {
            bail!("no verbs given, try `help`");
        }
        let dispatched = args.parse(self, &Self::PARAMS);
        for line in self.lines.drain(..) {
            println!("{line}");
        }
        if !dispatched {
            bail!("{}", args.errors());
        }
        Ok(())
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_file(demo: &mut Demo, path: &Path, comment: char) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("can't read response file {}", path.display()))?;
    let tokens = split_into_tokens_with(text, comment);
    tracing::debug!(file = %path.display(), tokens = tokens.len(), "loaded response file");
    demo.dispatch(&mut tokens.args())
        .with_context(|| format!("in {}", path.display()))
}

fn repl(demo: &mut Demo, comment: char) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("simplearg> ") {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                let tokens = split_into_tokens_with(line, comment);
                if tokens.is_empty() {
                    continue;
                }
                if let Err(err) = demo.dispatch(&mut tokens.args()) {
                    eprintln!("{err}");
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn run(options: Options) -> Result<()> {
    let mut demo = Demo::default();
    // with nothing else to do, an empty verb list reports the usage error
    if !options.verbs.is_empty() || (options.file.is_empty() && !options.interactive) {
        demo.dispatch(&mut Arguments::new(&options.verbs))?;
    }
    for path in &options.file {
        run_file(&mut demo, path, options.comment)?;
    }
    if options.interactive {
        repl(&mut demo, options.comment)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let options: Options = argh::from_env();
    init_tracing(options.verbose);
    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
