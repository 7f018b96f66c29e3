#![allow(dead_code)]

use forth::lang::{Error, LineReader};
use forth::mach::{Config, Runtime};
use std::io::Cursor;

pub fn exec(runtime: &mut Runtime, source: &str) -> (String, Result<(), Error>) {
    let mut s = String::new();
    let mut reader = LineReader::new(Cursor::new(source.as_bytes().to_vec()));
    let result = runtime.eval(&mut reader, |event| {
        s.push_str(&format!("{}\n", event));
        Ok(())
    });
    (s, result)
}

pub fn run(source: &str) -> String {
    let mut runtime = Runtime::default();
    let (s, result) = exec(&mut runtime, source);
    if let Err(error) = result {
        panic!("{}", error);
    }
    s
}

pub fn run_small(source: &str, stack_size: usize) -> (String, Runtime) {
    let mut runtime = Runtime::new(Config { stack_size });
    let (s, result) = exec(&mut runtime, source);
    if let Err(error) = result {
        panic!("{}", error);
    }
    (s, runtime)
}
