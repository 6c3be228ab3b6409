use std::time::Instant;

use chipfft::{Direction, Signal};
use clap::{Parser, ValueEnum};
use hound::WavReader;

#[derive(Parser, Debug)]
#[command(name = "spectrum")]
#[command(about = "Print the magnitude spectrum of one frame of a WAV file", long_about = None)]
struct Cli {
    /// Number of samples in the analysed frame.
    #[arg(long, value_name = "SAMPLES", default_value_t = 1024)]
    frame_size: usize,
    /// First sample of the frame.
    #[arg(long, value_name = "SAMPLES", default_value_t = 0)]
    offset: usize,
    /// Channel to analyse.
    #[arg(long, default_value_t = 0)]
    channel: u16,
    #[arg(long, value_enum, default_value_t = AlgorithmType::Auto)]
    algorithm: AlgorithmType,
    /// Also run the inverse transform and report the reconstruction error.
    #[arg(long)]
    round_trip: bool,
    input: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmType {
    Auto,
    Fft,
    Dft,
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    if cli.frame_size == 0 {
        return Err("Frame size must be at least 1".to_string());
    }

    let mut reader =
        WavReader::open(&cli.input).map_err(|error| format!("{}: {error}", cli.input))?;
    let spec = reader.spec();

    println!(
        "Input: {} Hz, {} channels, {} bits",
        spec.sample_rate, spec.channels, spec.bits_per_sample
    );

    if cli.channel >= spec.channels {
        return Err(format!(
            "Channel {} does not exist, the file has {} channels",
            cli.channel, spec.channels
        ));
    }

    let samples: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<Vec<f64>, _>>(),
        hound::SampleFormat::Int => {
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|s| s as f64 / max_value))
                .collect::<Result<Vec<f64>, _>>()
        }
    }
    .map_err(|error| format!("Failed to read samples: {error}"))?;

    let frame = extract_frame(
        &samples,
        spec.channels as usize,
        cli.channel as usize,
        cli.offset,
        cli.frame_size,
    )?;
    let original = Signal::from_reals(frame);
    let mut signal = original.clone();

    let start = Instant::now();
    let used = forward(&mut signal, cli.algorithm)?;
    let elapsed = start.elapsed();

    println!(
        "Frame: {} samples from offset {}, {:?} took {:.3} ms",
        signal.len(),
        cli.offset,
        used,
        elapsed.as_secs_f64() * 1000.0
    );

    let bin_width = spec.sample_rate as f64 / signal.len() as f64;
    for (bin, magnitude) in signal
        .magnitudes()
        .into_iter()
        .enumerate()
        .take(signal.len() / 2 + 1)
    {
        println!("{bin:>6} {:>12.2} {magnitude:>16.6}", bin as f64 * bin_width);
    }

    if cli.round_trip {
        inverse(&mut signal, cli.algorithm)?;
        let max_error = signal
            .reals()
            .iter()
            .zip(signal.imags())
            .zip(original.reals().iter().zip(original.imags()))
            .map(|((re, im), (orig_re, orig_im))| (re - orig_re).abs().max((im - orig_im).abs()))
            .fold(0.0f64, f64::max);
        println!("Round trip max error: {max_error:e}");
    }

    Ok(())
}

/// Picks `frame_size` samples of one channel out of interleaved data, zero-padding past the
/// end of the file.
fn extract_frame(
    samples: &[f64],
    channels: usize,
    channel: usize,
    offset: usize,
    frame_size: usize,
) -> Result<Vec<f64>, String> {
    let end = offset.checked_add(frame_size).ok_or_else(|| {
        format!("Frame of {frame_size} samples at offset {offset} is out of range")
    })?;

    (offset..end)
        .map(|frame| -> Result<f64, String> {
            let index = frame
                .checked_mul(channels)
                .and_then(|index| index.checked_add(channel))
                .ok_or_else(|| format!("Sample offset {frame} is out of range"))?;
            Ok(samples.get(index).copied().unwrap_or(0.0))
        })
        .collect()
}

fn forward(signal: &mut Signal, algorithm: AlgorithmType) -> Result<chipfft::Algorithm, String> {
    run_transform(signal, algorithm, Direction::Forward)
}

fn inverse(signal: &mut Signal, algorithm: AlgorithmType) -> Result<chipfft::Algorithm, String> {
    run_transform(signal, algorithm, Direction::Inverse)
}

fn run_transform(
    signal: &mut Signal,
    algorithm: AlgorithmType,
    direction: Direction,
) -> Result<chipfft::Algorithm, String> {
    match algorithm {
        AlgorithmType::Auto => Ok(signal.transform(direction)),
        AlgorithmType::Fft => signal
            .fft(direction)
            .map(|()| chipfft::Algorithm::Fast)
            .map_err(|error| error.to_string()),
        AlgorithmType::Dft => {
            signal.dft(direction);
            Ok(chipfft::Algorithm::BruteForce)
        }
    }
}
