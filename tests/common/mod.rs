use conslisp::error::Error;
use conslisp::interpreter::Interpreter;
use conslisp::sexp::Sexp;


pub fn setup() -> Interpreter {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}

    Interpreter::new()
}

/// Results of every form in s, each line of s taken as its own input unit.
pub fn results<S: AsRef<str>>(interpreter: &mut Interpreter, s: S) -> Vec<Sexp> {
    s.as_ref()
        .lines()
        .flat_map(|line| interpreter.interpret(line).unwrap())
        .collect::<Vec<_>>()
}

/// Like results, but keeps going past failing lines.
pub fn results_with_errors<S: AsRef<str>>(
    interpreter: &mut Interpreter,
    s: S,
) -> Vec<Result<Vec<Sexp>, Error>> {
    s.as_ref()
        .lines()
        .map(|line| interpreter.interpret(line))
        .collect::<Vec<_>>()
}

/// (Kind, Reason) of a reified error, without quotes.
pub fn error_kind(err: &Error) -> (String, String) {
    let reified = err.kind().reify();
    let mut names = reified
        .iter()
        .map(|(sexp, _)| sexp.to_string().trim_matches('"').to_string());
    (names.next().unwrap(), names.next().unwrap())
}
