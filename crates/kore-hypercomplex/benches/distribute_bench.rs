//! Benchmark: Distributor products per shape and precision.

use std::hint::black_box;
use std::time::Instant;

use half::f16;
use kore_hypercomplex::{Complex, Magnitude, Quaternion, Vector, I};

fn bench<F: FnMut() -> R, R>(iters: usize, mut f: F) -> f64 {
    let start = Instant::now();
    for _ in 0..iters {
        black_box(f());
    }
    start.elapsed().as_secs_f64() / iters as f64
}

fn quaternions<T: Magnitude>(n: usize) -> Vec<Quaternion<T>> {
    (0..n)
        .map(|i| {
            let c = |m: usize| {
                num_traits::cast::<f64, T>(((i * m + 3) % 17) as f64 * 0.1).unwrap_or_else(T::zero)
            };
            Quaternion::new(c(7), c(11), c(13), c(5))
        })
        .collect()
}

fn bench_quat_chain<T: Magnitude>(qs: &[Quaternion<T>], iters: usize) -> f64 {
    bench(iters, || {
        qs.iter().fold(Quaternion::new(T::one(), T::zero(), T::zero(), T::zero()), |acc, &q| {
            (acc * q) / q.norm()
        })
    })
}

fn main() {
    println!("=== Kore Hypercomplex Benchmark ===\n");

    let n = 1024;
    let iters = 200;

    println!("{:<28} {:>14}", "Case", "ns / product");
    println!("{}", "-".repeat(44));

    let per = |secs: f64| secs * 1e9 / n as f64;

    let q64 = quaternions::<f64>(n);
    let q32 = quaternions::<f32>(n);
    let q16 = quaternions::<f16>(n);

    println!("{:<28} {:>14.2}", "quat * quat (f64)", per(bench_quat_chain(&q64, iters)));
    println!("{:<28} {:>14.2}", "quat * quat (f32)", per(bench_quat_chain(&q32, iters)));
    println!("{:<28} {:>14.2}", "quat * quat (f16)", per(bench_quat_chain(&q16, iters)));

    let zs: Vec<Complex<f64>> = q64.iter().map(|q| Complex::new(q.w, q.i.value())).collect();
    let secs = bench(iters, || zs.iter().fold(Complex::new(1.0f64, 0.0), |acc, &z| acc * z / z.norm()));
    println!("{:<28} {:>14.2}", "complex * complex (f64)", per(secs));

    let vs: Vec<Vector<f64>> = q64.iter().map(|q| q.vector_part()).collect();
    let secs = bench(iters, || vs.windows(2).map(|w| w[0] * w[1]).fold(0.0, |acc, q| acc + q.w));
    println!("{:<28} {:>14.2}", "vector * vector (f64)", per(secs));

    let secs = bench(iters, || q64.iter().fold(0.0, |acc, &q| acc + (q * I::new(2.0f64)).w));
    println!("{:<28} {:>14.2}", "quat * i (f64)", per(secs));

    let secs = bench(iters, || q64.iter().map(|&q| 2.5f64 * q).fold(Quaternion::<f64>::zero(), |a, b| a + b));
    println!("{:<28} {:>14.2}", "scalar * quat (f64)", per(secs));
}
