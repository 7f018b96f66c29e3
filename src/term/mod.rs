extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::{check_len, Error, ErrorCode, LineReader, LineSource, MAX_LINE_SIZE};
use crate::mach::{Config, Event, Runtime, MAX_STACK_SIZE};
use crate::error;
use ansi_term::Style;
use clap::Parser;
use linefeed::{Completer, Completion, DefaultTerminal, Interface, Prompter, ReadResult, Terminal};
use std::fs::File;
use std::io::{BufReader, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::level_filters::LevelFilter;

type Result<T> = std::result::Result<T, Error>;

/// Largest `--stack-size`; the stack is allocated up front.
const MAX_STACK_CELLS: i64 = 1 << 20;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Forth source to run. Standard input is read when omitted.
    file: Option<PathBuf>,

    /// Log every dispatched word to standard error.
    #[arg(short, long)]
    verbose: bool,

    /// Data stack capacity in cells.
    #[arg(
        long,
        default_value_t = MAX_STACK_SIZE as u32,
        value_parser = clap::value_parser!(u32).range(1..=MAX_STACK_CELLS),
    )]
    stack_size: u32,
}

pub fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);
    if let Err(error) = main_loop(args) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        let status = match error.code() {
            ErrorCode::Interrupted => 130,
            _ => 1,
        };
        std::process::exit(status);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main_loop(args: Args) -> Result<()> {
    let mut runtime = Runtime::new(Config {
        stack_size: args.stack_size as usize,
    });
    match args.file {
        Some(path) => {
            let file = File::open(&path)
                .map_err(|e| error!(Io; format!("{}: {}", path.display(), e)))?;
            run_batch(&mut runtime, LineReader::new(BufReader::new(file)))
        }
        None if std::io::stdin().is_terminal() => run_interactive(&mut runtime),
        None => run_batch(&mut runtime, LineReader::new(std::io::stdin().lock())),
    }
}

/// Files and pipes. Ctrl-C stops the run before the next line.
fn run_batch<S: LineSource>(runtime: &mut Runtime, source: S) -> Result<()> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .map_err(|e| error!(Io; e.to_string()))?;

    let stdout = std::io::stdout();
    let style = if stdout.is_terminal() {
        Style::new().bold()
    } else {
        Style::new()
    };
    let mut out = stdout.lock();
    let mut source = Interruptible {
        source,
        interrupted,
    };
    let result = runtime.eval(&mut source, |event| match event {
        Event::Print(s) => writeln!(out, "{}", s),
        Event::Error(e) => writeln!(out, "{}", style.paint(e.to_string())),
    });
    out.flush()?;
    result
}

fn run_interactive(runtime: &mut Runtime) -> Result<()> {
    let interface = Interface::new("forth")?;
    interface.set_prompt("> ")?;
    interface.set_completer(Arc::new(WordCompleter::new(
        runtime.dictionary().words().collect(),
    )));
    let mut source = Interactive {
        interface: &interface,
        line_number: 0,
    };
    runtime.eval(&mut source, |event| match event {
        Event::Print(s) => interface.write_fmt(format_args!("{}\n", s)),
        Event::Error(e) => interface.write_fmt(format_args!(
            "{}\n",
            Style::new().bold().paint(e.to_string())
        )),
    })
}

struct Interruptible<S> {
    source: S,
    interrupted: Arc<AtomicBool>,
}

impl<S: LineSource> LineSource for Interruptible<S> {
    fn next_line(&mut self) -> Result<Option<String>> {
        if self.interrupted.swap(false, Ordering::SeqCst) {
            return Err(error!(Interrupted));
        }
        self.source.next_line()
    }
}

struct Interactive<'a> {
    interface: &'a Interface<DefaultTerminal>,
    line_number: usize,
}

impl<'a> LineSource for Interactive<'a> {
    fn next_line(&mut self) -> Result<Option<String>> {
        match self.interface.read_line()? {
            ReadResult::Input(line) => {
                self.line_number += 1;
                check_len(&line, MAX_LINE_SIZE, self.line_number)?;
                if !line.trim().is_empty() {
                    self.interface.add_history_unique(line.clone());
                }
                Ok(Some(line))
            }
            ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
        }
    }
}

struct WordCompleter {
    words: Vec<&'static str>,
}

impl WordCompleter {
    fn new(mut words: Vec<&'static str>) -> WordCompleter {
        words.sort_unstable();
        WordCompleter { words }
    }
}

impl<Term: Terminal> Completer<Term> for WordCompleter {
    fn complete(
        &self,
        word: &str,
        _prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let comp_list: Vec<Completion> = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Completion::simple(w.to_string()))
            .collect();
        if comp_list.is_empty() {
            None
        } else {
            Some(comp_list)
        }
    }
}
