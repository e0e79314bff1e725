// src/main.rs

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use env_logger::Env;
use log::{error, info};

use polyfactor::factor::cantor_zassenhaus::{cantor_zassenhaus, expand_factorization};
use polyfactor::parser;

const DEFAULT_PRIME: i64 = 1009;

fn main() -> ExitCode {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info")
        .write_style_or("MY_LOG_STYLE", "always");
    env_logger::Builder::from_env(env).init();

    let mut prime = DEFAULT_PRIME;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            match arg.parse::<i64>() {
                Ok(p) => prime = p,
                Err(_) => {
                    error!("unrecognized argument '{}'", arg);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    println!("Input polynomial: ");
    let mut line = String::new();
    if let Err(e) = io::stdin().lock().read_line(&mut line) {
        error!("failed to read line: {}", e);
        return ExitCode::FAILURE;
    }

    let polynomial = match parser::parse(line.trim()) {
        Ok(p) => p,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("{}", polynomial);

    info!("factoring over Z/{}Z", prime);
    let mut rng = rand::rng();
    let factors = match cantor_zassenhaus(&polynomial, prime, &mut rng) {
        Ok(factors) => factors,
        Err(e) => {
            error!("factorization failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if json {
        match serde_json::to_string_pretty(&factors) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                error!("failed to serialize factors: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        let rendered: Vec<String> = factors
            .iter()
            .map(|(p, m)| {
                if *m != 1 {
                    format!("{}: {}", p, m)
                } else {
                    p.to_string()
                }
            })
            .collect();
        println!("({})", rendered.join("), ("));
    }

    println!("{}", expand_factorization(&factors, prime));
    io::stdout().flush().ok();
    ExitCode::SUCCESS
}
