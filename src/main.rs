extern crate clap;
extern crate crossbeam;
extern crate image;
extern crate num_cpus;
extern crate zoombrot;

use clap::{App, Arg, ArgMatches};
use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use std::fs::File;
use std::path::Path;
use std::process;
use std::str::FromStr;
use std::usize::MAX;

use zoombrot::{collect_frames, Harvest, Settings, ThreadGroup};

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

const FRAME_WIDTH: &str = "frame_width";
const NUM_FRAMES: &str = "num_frames";
const WORKERS: &str = "workers";
const OUTPUT: &str = "output";

fn args<'a>(default_workers: &'a str) -> ArgMatches<'a> {
    App::new("zoombrot")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Mandelbrot zoom-movie renderer")
        .arg(
            Arg::with_name(FRAME_WIDTH)
                .required(true)
                .index(1)
                .validator(|s| {
                    validate_range(
                        &s,
                        10,
                        MAX,
                        "Could not parse frame_width",
                        "frame_width must be at least 10",
                    )
                })
                .help("Width (and height) of every frame, in pixels"),
        )
        .arg(
            Arg::with_name(NUM_FRAMES)
                .required(true)
                .index(2)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        MAX,
                        "Could not parse num_frames",
                        "num_frames must be at least 1",
                    )
                })
                .help("Number of frames in the movie; must split evenly across the workers"),
        )
        .arg(
            Arg::with_name(WORKERS)
                .required(false)
                .long(WORKERS)
                .short("w")
                .takes_value(true)
                .default_value(default_workers)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        512,
                        "Could not parse worker count",
                        "Worker count must be between 1 and 512",
                    )
                })
                .help("Number of workers in the group"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("fractal")
                .help("Filename prefix for the per-frame images"),
        )
        .get_matches()
}

fn write_image(outfile: &str, pixels: &[u8], bounds: (usize, usize)) -> Result<(), std::io::Error> {
    let path = Path::new(outfile);
    let output = File::create(&path)?;
    let mut encoder =
        PNMEncoder::new(output).with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary));
    encoder.encode(pixels, bounds.0 as u32, bounds.1 as u32, ColorType::Gray(8))?;
    Ok(())
}

fn main() {
    let default_workers = num_cpus::get().to_string();
    let matches = args(&default_workers);
    let width = usize::from_str(matches.value_of(FRAME_WIDTH).unwrap())
        .expect("Could not parse frame width.");
    let frames = usize::from_str(matches.value_of(NUM_FRAMES).unwrap())
        .expect("Could not parse frame count.");
    let workers = usize::from_str(matches.value_of(WORKERS).unwrap())
        .expect("Could not parse worker count.");
    let prefix = matches.value_of(OUTPUT).unwrap().to_string();

    // The same validation every worker repeats for itself before the
    // barrier; running it here first keeps the diagnostics to one line.
    let settings = match Settings::new(width, frames, workers) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    println!(
        "computing {} frames of {} by {} fractal across {} workers",
        settings.frames, settings.width, settings.width, settings.workers
    );

    let members = ThreadGroup::split(settings.workers);
    let harvests: Result<Vec<Harvest>, _> = crossbeam::scope(|spawner| {
        let handles: Vec<_> = members
            .into_iter()
            .map(|member| {
                spawner.spawn(move |_| collect_frames(&member, settings.width, settings.frames))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    })
    .unwrap();

    let mut harvests = match harvests {
        Ok(harvests) => harvests,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let coordinator = harvests.remove(0);
    let elapsed = coordinator.elapsed;
    println!(
        "compute time: {:.4} s",
        elapsed.as_secs() as f64 + f64::from(elapsed.subsec_nanos()) / 1e9
    );

    let movie = coordinator.movie.expect("the coordinator holds the movie");
    let frame_len = settings.width * settings.width;
    for frame in 0..settings.frames {
        let name = format!("{}{}.pnm", prefix, 1000 + frame);
        let image = &movie[frame * frame_len..(frame + 1) * frame_len];
        if let Err(e) = write_image(&name, image, (settings.width, settings.width)) {
            eprintln!("error: could not write {}: {}", name, e);
            process::exit(1);
        }
    }
}
