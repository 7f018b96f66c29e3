use super::*;
use crate::mach::State;

#[test]
fn test_comment_skips_rest_of_line() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, &["1 2 + \\ 3 4 +", "."]), "3\n");
    assert_eq!(r.stack().depth(), 0);
    assert_eq!(r.state(), State::LineDone);
}

#[test]
fn test_comment_marker_must_stand_alone() {
    let mut r = Runtime::default();
    assert_eq!(
        run(&mut r, &["\\x 1"]),
        "Not a number in line 1, column 1: \\x\n"
    );
    assert_eq!(r.stack().depth(), 1);
}

#[test]
fn test_eval_reaches_eof_and_resets() {
    let mut r = Runtime::default();
    r.enter("1 2 3");
    let mut source = vec!["4 5 + .".to_string(), ".s".to_string()].into_iter();
    let mut out = vec![];
    r.eval(&mut source, |e| {
        out.push(e.to_string());
        Ok(())
    })
    .unwrap();
    assert_eq!(out, vec!["9", "<0>"]);
    assert_eq!(r.state(), State::Eof);
    assert_eq!(r.line_number(), 2);
}

#[test]
fn test_errors_do_not_stop_the_line() {
    let mut r = Runtime::default();
    let events = r.enter("foo 1 bar 2 + .");
    assert_eq!(errors(&events), 2);
    assert_eq!(events.last(), Some(&Event::Print("3".to_string())));
}

#[test]
fn test_output_failure_ends_the_run() {
    let mut r = Runtime::default();
    let mut source = vec!["1 .".to_string(), "2 .".to_string()].into_iter();
    let result = r.eval(&mut source, |_| {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    });
    assert_eq!(result.unwrap_err().code(), crate::lang::ErrorCode::Io);
    assert_eq!(r.state(), State::Eof);
    assert_eq!(r.line_number(), 1);
}
