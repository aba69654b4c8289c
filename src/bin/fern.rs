// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgMatches};
use std::fs::File;
use std::io::BufWriter;
use std::str::FromStr;

use barnsley::{grayscale, greenscale, render, render_threaded, Color, FernRenderer};

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_growth(s: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(g) if g >= 0.0 && g <= 1.0 => Ok(()),
        Ok(_) => Err("Growth factor must be between 0 and 1".to_string()),
        Err(_) => Err("Could not parse growth factor".to_string()),
    }
}

const OUTPUT: &str = "output";
const PALETTE: &str = "palette";
const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";
const GROWTH: &str = "growth";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("fern")
        .version("0.1.0")
        .about("Barnsley fern renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output PPM file"),
        )
        .arg(
            Arg::with_name(PALETTE)
                .required(false)
                .long(PALETTE)
                .short("p")
                .takes_value(true)
                .default_value("green")
                .possible_values(&["gray", "green"])
                .help("Transfer function for the output image"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1024x1024")
                .validator(|s| {
                    validate_pair::<usize>(&s, 'x', "Could not parse output image size")
                })
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("64")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        4096,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 4096",
                    )
                })
                .help("Walk iterations per pixel of output"),
        )
        .arg(
            Arg::with_name(GROWTH)
                .required(false)
                .long(GROWTH)
                .short("g")
                .takes_value(true)
                .default_value("0.8")
                .validator(|s| validate_growth(&s))
                .help("Growth factor of the main frond, between 0 and 1"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of walk threads"),
        )
        .get_matches()
}

fn main() {
    let matches = args();
    let (width, height) = parse_pair(matches.value_of(SIZE).unwrap(), 'x')
        .expect("Error parsing image dimensions");
    let iterations = usize::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Could not parse iteration count.");
    let growth = f64::from_str(matches.value_of(GROWTH).unwrap())
        .expect("Could not parse growth factor.");
    let threads = usize::from_str(matches.value_of(THREADS).unwrap())
        .expect("Could not parse thread count.");

    let palette: fn(f64) -> Color = match matches.value_of(PALETTE).unwrap() {
        "gray" => grayscale,
        _ => greenscale,
    };

    let fern = match FernRenderer::new(width, height, iterations, growth) {
        Ok(fern) => fern,
        Err(e) => {
            eprintln!("Setup failure: {}", e);
            std::process::exit(1);
        }
    };

    let output = match File::create(matches.value_of(OUTPUT).unwrap()) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Could not create output file: {}", e);
            std::process::exit(1);
        }
    };
    let mut sink = BufWriter::new(output);

    let result = if threads > 1 {
        render_threaded(&fern, threads, palette, &mut sink)
    } else {
        render(&fern, palette, &mut sink)
    };

    if let Err(e) = result {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
