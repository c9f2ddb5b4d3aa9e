use std::{
    env,
    io::{self, BufRead, Write},
    process::ExitCode,
    time::Instant,
};

use calculator::{
    errors::errors::Error,
    evaluator::{environment::Environment, evaluator::Evaluator},
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
    render_error,
};

/// One interactive session: the variables assigned so far and whether to
/// print each stage.
struct Session {
    environment: Environment,
    verbose: bool,
}

impl Session {
    /// Runs one input line. `name = expr` assigns, anything else evaluates.
    ///
    /// Returns the text to print, or the rendered error.
    fn run_line(&mut self, line: &str) -> Result<String, String> {
        let Some((target, source)) = line.split_once('=') else {
            return self.run_expression(line).map(format_value);
        };

        let Some(name) = assignment_target(target) else {
            return Err(format!("Error: cannot assign to `{}`\n", target.trim()));
        };

        let value = self.run_expression(source)?;
        self.environment.set(name.clone(), value);

        Ok(format!("{} = {}", name, format_value(value)))
    }

    fn run_expression(&self, source: &str) -> Result<f64, String> {
        self.evaluate(source)
            .map_err(|error| render_error(&error, source))
    }

    fn evaluate(&self, source: &str) -> Result<f64, Error> {
        let start = Instant::now();
        let tokens = tokenize(source)?;

        if self.verbose {
            let listing: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();
            println!("Tokens: {}", listing.join(" "));
            println!("Tokenized in {:?}", start.elapsed());
        }

        let parse_start = Instant::now();
        let ast = parse(tokens)?;

        if self.verbose {
            println!("AST: {}", ast);
            println!("Parsed in {:?}", parse_start.elapsed());
        }

        let evaluate_start = Instant::now();
        let value = Evaluator::new(&self.environment).evaluate(&ast)?;

        if self.verbose {
            println!("Evaluated in {:?}", evaluate_start.elapsed());
            println!("Total time: {:?}", start.elapsed());
        }

        Ok(value)
    }
}

/// The name on the left of `=`, if it lexes as exactly one identifier.
fn assignment_target(target: &str) -> Option<String> {
    let tokens = tokenize(target).ok()?;

    match tokens.as_slice() {
        [name, end] if name.kind == TokenKind::Identifier && end.kind == TokenKind::EOF => {
            Some(name.value.clone())
        }
        _ => None,
    }
}

fn format_value(value: f64) -> String {
    value.to_string()
}

fn main() -> ExitCode {
    let mut verbose = false;
    let mut words = vec![];

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            _ => words.push(arg),
        }
    }

    let mut session = Session {
        environment: Environment::new(),
        verbose,
    };

    if !words.is_empty() {
        return match session.run_line(&words.join(" ")) {
            Ok(output) => {
                println!("{}", output);
                ExitCode::SUCCESS
            }
            Err(error) => {
                eprint!("{}", error);
                ExitCode::FAILURE
            }
        };
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {}
            Err(error) => {
                eprintln!("Failed to read input: {}", error);
                return ExitCode::FAILURE;
            }
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            return ExitCode::SUCCESS;
        }

        match session.run_line(line) {
            Ok(output) => println!("{}", output),
            Err(error) => eprint!("{}", error),
        }
    }
}
