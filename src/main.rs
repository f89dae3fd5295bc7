//! Demo driver: runs every kernel once on fixed sensor samples, then times the
//! bulk kernels against their scalar references on a large random signal.

use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sigsimd::signal::*;
use sigsimd::simd::{Native, SimdVec, BACKEND};
use sigsimd::{Result, LANE_COUNT};

const BENCH_SIZE: usize = 1_000_000;

fn print_array(name: &str, values: &[f32]) {
    let formatted: Vec<String> = values.iter().map(|v| format!("{v:.3}")).collect();
    println!("{name}: [{}]", formatted.join(", "));
}

fn print_flags(name: &str, flags: &[u8]) {
    let formatted: Vec<String> = flags.iter().map(|f| f.to_string()).collect();
    println!("{name}: [{}]", formatted.join(", "));
}

fn demo_distance() {
    println!("\n=== Vector Distance Calculation ===");

    let x1 = [0.0f32, 1.0, 2.0, 3.0];
    let y1 = [0.0f32, 1.0, 2.0, 3.0];
    let x2 = [3.0f32, 4.0, 5.0, 6.0];
    let y2 = [4.0f32, 5.0, 6.0, 7.0];

    let mut squared = [0.0f32; 4];
    distance_squared(
        Native::load(&x1),
        Native::load(&y1),
        Native::load(&x2),
        Native::load(&y2),
    )
    .store(&mut squared);

    for i in 0..4 {
        println!(
            "Point {}: ({}, {}) to ({}, {})",
            i + 1,
            x1[i],
            y1[i],
            x2[i],
            y2[i]
        );
    }
    print_array("Squared distances", &squared);

    let distances: Vec<f32> = squared.iter().map(|d| d.sqrt()).collect();
    print_array("Actual distances", &distances);
}

fn demo_weighted_average() -> Result<()> {
    println!("\n=== Weighted Average ===");

    let values = [10.0f32, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];
    let weights = [0.1f32, 0.2, 0.3, 0.15, 0.1, 0.05, 0.05, 0.05];

    print_array("Values", &values);
    print_array("Weights", &weights);
    println!("Weighted average: {:.3}", weighted_average(&values, &weights)?);
    Ok(())
}

fn demo_cumulative_sum() -> Result<()> {
    println!("\n=== Cumulative Sum ===");

    let input: Vec<f32> = (1..=10).map(|x| x as f32).collect();
    let mut output = vec![0.0f32; input.len()];

    print_array("Input", &input);
    cumulative_sum(&input, &mut output)?;
    print_array("Cumulative sum", &output);
    Ok(())
}

fn demo_speed() -> Result<()> {
    println!("\n=== Speed Calculation ===");

    let prev = [0.0f32, 10.0, 25.0, 45.0, 70.0, 100.0];
    let curr = [5.0f32, 20.0, 40.0, 65.0, 95.0, 130.0];
    let time_delta = 0.1f32;
    let mut speeds = [0.0f32; 6];

    print_array("Previous positions", &prev);
    print_array("Current positions", &curr);
    println!("Time delta: {time_delta} seconds");
    speed(&prev, &curr, &mut speeds, time_delta)?;
    print_array("Calculated speeds", &speeds);
    Ok(())
}

fn demo_moving_average() -> Result<()> {
    println!("\n=== Moving Average Filter ===");

    let noisy = [1.0f32, 1.2, 0.8, 1.1, 0.9, 1.3, 0.7, 1.0, 1.1, 0.9, 1.2, 0.8];
    let window_size = 3;
    let mut filtered = [0.0f32; 12];

    print_array("Noisy signal", &noisy);
    println!("Window size: {window_size}");
    moving_average(&noisy, &mut filtered, window_size)?;
    print_array("Filtered signal", &filtered);
    Ok(())
}

fn demo_min_index() {
    println!("\n=== Minimum Index ===");

    let data = [5.2f32, 3.1, 8.7, 1.4, 6.9, 2.3, 9.1, 0.8, 4.5];

    print_array("Data", &data);
    let idx = min_index(&data);
    println!("Minimum value index: {idx}");
    println!("Minimum value: {:.3}", data[idx]);
}

fn demo_cross_correlation() -> Result<()> {
    println!("\n=== Cross-Correlation ===");

    let signal1 = [1.0f32, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0];
    let signal2 = [0.5f32, 1.0, 1.5, 2.0, 2.5, 2.0, 1.5, 1.0];

    print_array("Signal 1", &signal1);
    print_array("Signal 2", &signal2);
    println!(
        "Cross-correlation: {:.3}",
        cross_correlation(&signal1, &signal2)?
    );
    Ok(())
}

fn demo_exp_moving_average() -> Result<()> {
    println!("\n=== Exponential Moving Average ===");

    let input = [10.0f32, 12.0, 11.0, 13.0, 15.0, 14.0, 16.0, 18.0, 17.0, 19.0];
    let alpha = 0.3f32;
    let mut output = [0.0f32; 10];

    print_array("Input signal", &input);
    println!("Alpha (smoothing factor): {alpha}");
    exp_moving_average(&input, &mut output, alpha)?;
    print_array("EMA filtered signal", &output);
    Ok(())
}

fn demo_threshold_detection() -> Result<()> {
    println!("\n=== Threshold Detection ===");

    let sensor_data = [2.1f32, 3.5, 1.8, 4.2, 2.9, 5.1, 1.5, 3.8, 4.7, 2.3];
    let threshold = 3.0f32;
    let mut detections = [0u8; 10];

    print_array("Sensor data", &sensor_data);
    println!("Threshold: {threshold}");
    threshold_detection(&sensor_data, &mut detections, threshold)?;
    print_flags("Detections (1=above, 0=below)", &detections);
    Ok(())
}

fn time<T>(mut f: impl FnMut() -> T) -> Duration {
    let start = Instant::now();
    black_box(f());
    start.elapsed()
}

fn report(name: &str, scalar: Duration, simd: Duration) {
    let throughput = BENCH_SIZE as f64 / simd.as_secs_f64().max(f64::EPSILON) / 1e6;
    println!(
        "{name:<22} {:>10.3} {:>10.3} {:>9.2}x {:>12.1}",
        scalar.as_secs_f64() * 1e3,
        simd.as_secs_f64() * 1e3,
        scalar.as_secs_f64() / simd.as_secs_f64().max(f64::EPSILON),
        throughput
    );
}

fn benchmark() -> Result<()> {
    println!("\n=== Performance Benchmark ===");

    let mut rng = StdRng::seed_from_u64(42);
    let signal: Vec<f32> = (0..BENCH_SIZE).map(|_| rng.random_range(0.0..100.0)).collect();
    let weights: Vec<f32> = (0..BENCH_SIZE)
        .map(|_| rng.random_range(0.0..100.0) / 100.0)
        .collect();
    let mut output = vec![0.0f32; BENCH_SIZE];
    let mut flags = vec![0u8; BENCH_SIZE];

    println!("Testing with {BENCH_SIZE} elements...");
    println!(
        "Weighted average result: {:.6}",
        weighted_average(&signal, &weights)?
    );
    println!(
        "\n{:<22} {:>10} {:>10} {:>10} {:>12}",
        "kernel", "scalar ms", "simd ms", "speedup", "M elem/s"
    );

    report(
        "weighted_average",
        time(|| scalar_weighted_average(&signal, &weights)),
        time(|| weighted_average(&signal, &weights)),
    );
    report(
        "cross_correlation",
        time(|| scalar_cross_correlation(&signal, &weights)),
        time(|| cross_correlation(&signal, &weights)),
    );
    report(
        "cumulative_sum",
        time(|| scalar_cumulative_sum(&signal, &mut output)),
        time(|| cumulative_sum(&signal, &mut output)),
    );
    report(
        "speed",
        time(|| scalar_speed(&signal, &weights, &mut output, 0.1)),
        time(|| speed(&signal, &weights, &mut output, 0.1)),
    );
    report(
        "min_index",
        time(|| scalar_min_index(&signal)),
        time(|| min_index(&signal)),
    );
    report(
        "threshold_detection",
        time(|| scalar_threshold_detection(&signal, &mut flags, 50.0)),
        time(|| threshold_detection(&signal, &mut flags, 50.0)),
    );

    Ok(())
}

fn main() -> Result<()> {
    println!("Signal Processing Kernels Demo ({BACKEND}, {LANE_COUNT} lanes)");
    println!("===========================================");

    demo_distance();
    demo_weighted_average()?;
    demo_cumulative_sum()?;
    demo_speed()?;
    demo_moving_average()?;
    demo_min_index();
    demo_cross_correlation()?;
    demo_exp_moving_average()?;
    demo_threshold_detection()?;
    benchmark()?;

    println!("\n=== Demo Complete ===");
    Ok(())
}
